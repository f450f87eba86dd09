pub mod answer_repository;
pub mod question_repository;
pub mod score_repository;
pub mod subject_repository;
pub mod user_repository;
pub mod year_repository;

pub use answer_repository::{AnswerRepository, MongoAnswerRepository};
pub use question_repository::{MongoQuestionRepository, QuestionRepository};
pub use score_repository::{MongoScoreRepository, ScoreRepository};
pub use subject_repository::{MongoSubjectRepository, SubjectRepository};
pub use user_repository::{MongoUserRepository, UserRepository};
pub use year_repository::{MongoYearRepository, YearRepository};
