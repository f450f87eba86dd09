use serde::Serialize;

use crate::models::domain::{Answer, CourseYear, Question, ScoreRecord, Subject, User, UserRole};

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        MessageResponse {
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct YearResponse {
    pub message: String,
    pub year: i32,
}

#[derive(Debug, Serialize)]
pub struct YearsResponse {
    pub message: String,
    pub years: Vec<CourseYear>,
}

#[derive(Debug, Serialize)]
pub struct SubjectResponse {
    pub message: String,
    pub subject: Subject,
}

#[derive(Debug, Serialize)]
pub struct SubjectsResponse {
    pub message: String,
    pub subjects: Vec<Subject>,
}

#[derive(Debug, Serialize)]
pub struct QuestionCreatedResponse {
    pub message: String,
    pub data: QuestionCreatedData,
}

#[derive(Debug, Serialize)]
pub struct QuestionCreatedData {
    pub id: String,
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct QuestionResponse {
    pub message: String,
    pub questions: Question,
}

#[derive(Debug, Serialize)]
pub struct AnswersResponse {
    pub message: String,
    pub answers: Vec<Answer>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptResponse {
    pub message: String,
    pub is_correct: bool,
    pub result: Option<ScoreRecord>,
}

#[derive(Debug, Serialize)]
pub struct ResultsResponse {
    pub message: String,
    pub results: Option<ScoreRecord>,
}

/// Account profile as returned by register/login/profile responses; never
/// includes the password hash.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollment_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        let id = user.id_hex();
        UserDto {
            id,
            name: user.name,
            email: user.email,
            role: user.role,
            enrollment_no: user.enrollment_no,
            branch: user.branch,
            year: user.year,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    pub expires_in: String,
    pub user: UserDto,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub message: String,
    pub profile: UserDto,
}
