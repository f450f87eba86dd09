use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub title: String,
    /// Position of the question within its subject; unique per
    /// (subject, owner) pair.
    pub question_no: i32,
    pub marks: i32,
    pub subject_id: String,
    pub owner_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Question {
    pub fn new(title: &str, question_no: i32, marks: i32, subject_id: &str, owner_id: &str) -> Self {
        Question {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            question_no,
            marks,
            subject_id: subject_id.to_string(),
            owner_id: owner_id.to_string(),
            created_at: Some(Utc::now()),
        }
    }
}
