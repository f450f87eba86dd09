pub mod answer;
pub mod question;
pub mod score;
pub mod subject;
pub mod user;
pub mod year;

pub use answer::Answer;
pub use question::Question;
pub use score::ScoreRecord;
pub use subject::Subject;
pub use user::{User, UserRole};
pub use year::CourseYear;
