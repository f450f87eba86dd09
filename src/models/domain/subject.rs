use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: String,
    pub name: String,
    pub year_id: String,
    pub owner_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Subject {
    pub fn new(name: &str, year_id: &str, owner_id: &str) -> Self {
        Subject {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            year_id: year_id.to_string(),
            owner_id: owner_id.to_string(),
            created_at: Some(Utc::now()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_creation() {
        let subject = Subject::new("Data Structures", "year-1", "teacher-1");
        assert_eq!(subject.name, "Data Structures");
        assert_eq!(subject.year_id, "year-1");
        assert_eq!(subject.owner_id, "teacher-1");
    }

    #[test]
    fn test_subject_serializes_camel_case() {
        let subject = Subject::new("Algorithms", "year-1", "teacher-1");
        let json = serde_json::to_value(&subject).expect("subject should serialize");
        assert!(json.get("yearId").is_some());
        assert!(json.get("ownerId").is_some());
        assert!(json.get("year_id").is_none());
    }
}
