use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseYear {
    pub id: String,
    pub year: i32,
    pub owner_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl CourseYear {
    pub fn new(year: i32, owner_id: &str) -> Self {
        CourseYear {
            id: Uuid::new_v4().to_string(),
            year,
            owner_id: owner_id.to_string(),
            created_at: Some(Utc::now()),
        }
    }
}
