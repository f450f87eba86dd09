use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub id: String,
    pub title: String,
    /// Whether this answer is the correct choice for its question. At most
    /// one answer per question carries this flag; the update-answer
    /// operation maintains that invariant.
    #[serde(default)]
    pub is_preferred: bool,
    pub question_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Answer {
    pub fn new(title: &str, is_preferred: bool, question_id: &str) -> Self {
        Answer {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            is_preferred,
            question_id: question_id.to_string(),
            created_at: Some(Utc::now()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_defaults_to_not_preferred() {
        let json = r#"{"id":"a-1","title":"42","questionId":"q-1"}"#;
        let answer: Answer = serde_json::from_str(json).expect("answer should deserialize");
        assert!(!answer.is_preferred);
        assert_eq!(answer.question_id, "q-1");
    }

    #[test]
    fn test_answer_creation() {
        let answer = Answer::new("An index structure", true, "q-1");
        assert!(answer.is_preferred);
        assert!(!answer.id.is_empty());
    }
}
