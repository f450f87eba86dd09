pub mod health_handler;
pub mod quiz_handler;
pub mod student_handler;
pub mod teacher_handler;
