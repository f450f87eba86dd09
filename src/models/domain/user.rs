use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Teacher,
    Student,
}

/// A registered account. Students carry enrollment details; teachers do not.
/// The password field holds the argon2 hash and is stripped from every
/// response through `UserDto`.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollment_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn new_teacher(name: &str, email: &str, password_hash: &str) -> Self {
        User {
            id: Some(ObjectId::new()),
            name: name.to_string(),
            email: email.to_string(),
            password: password_hash.to_string(),
            role: UserRole::Teacher,
            enrollment_no: None,
            branch: None,
            year: None,
            created_at: Some(Utc::now()),
        }
    }

    pub fn new_student(
        name: &str,
        email: &str,
        password_hash: &str,
        enrollment_no: &str,
        branch: &str,
        year: i32,
    ) -> Self {
        User {
            id: Some(ObjectId::new()),
            name: name.to_string(),
            email: email.to_string(),
            password: password_hash.to_string(),
            role: UserRole::Student,
            enrollment_no: Some(enrollment_no.to_string()),
            branch: Some(branch.to_string()),
            year: Some(year),
            created_at: Some(Utc::now()),
        }
    }

    /// Stable string id used as the JWT subject and as the owner/student
    /// reference on catalog and score documents.
    pub fn id_hex(&self) -> String {
        self.id
            .as_ref()
            .map(|oid| oid.to_hex())
            .unwrap_or_else(|| self.email.clone())
    }
}
