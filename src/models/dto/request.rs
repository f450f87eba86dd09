use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

static ENROLLMENT_NO_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9]{10,12}$").expect("ENROLLMENT_NO_REGEX is a valid regex pattern")
});

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterStudentRequest {
    #[validate(required, length(min = 1, max = 50))]
    pub name: Option<String>,

    #[validate(required, email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(required, length(min = 5, max = 50))]
    pub password: Option<String>,

    #[validate(
        required,
        regex(
            path = *ENROLLMENT_NO_REGEX,
            message = "Enrollment no must be 10 to 12 alphanumeric characters"
        )
    )]
    pub enrollment_no: Option<String>,

    #[validate(required, length(min = 1))]
    pub branch: Option<String>,

    #[validate(required)]
    pub year: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterTeacherRequest {
    #[validate(required, length(min = 1, max = 50))]
    pub name: Option<String>,

    #[validate(required, email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(required, length(min = 5, max = 50))]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(required, email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(required, length(min = 5, max = 50))]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddYearRequest {
    #[validate(required(message = "Enter year please"))]
    pub year: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddSubjectRequest {
    #[validate(
        required,
        length(min = 3, message = "Subject name must be at least 3 characters")
    )]
    pub name: Option<String>,

    #[validate(required)]
    pub year_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddQuestionRequest {
    #[validate(
        required,
        length(min = 3, message = "Question title must be at least 3 characters")
    )]
    pub title: Option<String>,

    #[validate(required)]
    pub question_no: Option<i32>,

    #[validate(required)]
    pub marks: Option<i32>,

    #[validate(required)]
    pub subject_id: Option<String>,
}

/// Exact-match lookup parameters for `GET /quiz/fetch_questions`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct QuestionQuery {
    #[validate(required)]
    pub subject: Option<String>,

    #[validate(required)]
    pub question_no: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddAnswersRequest {
    #[validate(
        required,
        length(min = 1, message = "At least one answer is required"),
        nested
    )]
    pub answers: Option<Vec<AddAnswerItem>>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddAnswerItem {
    #[validate(
        required,
        length(min = 3, message = "Answer title must be at least 3 characters")
    )]
    pub title: Option<String>,

    pub is_preferred: Option<bool>,

    #[validate(required)]
    pub question_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAnswerRequest {
    #[validate(required(message = "answerId is required"))]
    pub answer_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AttemptRequest {
    #[validate(required(message = "answerId is required"))]
    pub answer_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_student() -> RegisterStudentRequest {
        RegisterStudentRequest {
            name: Some("Ravi Kumar".to_string()),
            email: Some("ravi@example.com".to_string()),
            password: Some("s3cret-pass".to_string()),
            enrollment_no: Some("2024CS10042".to_string()),
            branch: Some("CSE".to_string()),
            year: Some(2024),
        }
    }

    #[test]
    fn test_valid_student_registration() {
        assert!(valid_student().validate().is_ok());
    }

    #[test]
    fn test_invalid_email_rejected() {
        let mut request = valid_student();
        request.email = Some("not-an-email".to_string());
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_enrollment_no_length_bounds() {
        let mut request = valid_student();
        request.enrollment_no = Some("short".to_string());
        assert!(request.validate().is_err());

        request.enrollment_no = Some("waytoolongenrollment".to_string());
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_missing_year_rejected() {
        let request = AddYearRequest { year: None };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_subject_name_min_length() {
        let request = AddSubjectRequest {
            name: Some("DB".to_string()),
            year_id: Some("year-1".to_string()),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_answers_batch_rejects_invalid_element() {
        let request = AddAnswersRequest {
            answers: Some(vec![
                AddAnswerItem {
                    title: Some("A valid answer".to_string()),
                    is_preferred: Some(true),
                    question_id: Some("q-1".to_string()),
                },
                AddAnswerItem {
                    title: Some("ok".to_string()),
                    is_preferred: None,
                    question_id: Some("q-1".to_string()),
                },
            ]),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_empty_answers_batch_rejected() {
        let request = AddAnswersRequest {
            answers: Some(vec![]),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_attempt_requires_answer_id() {
        let request = AttemptRequest { answer_id: None };
        assert!(request.validate().is_err());
    }
}
