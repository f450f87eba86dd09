use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection};

use crate::{db::Database, errors::AppResult, models::domain::Subject};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubjectRepository: Send + Sync {
    async fn insert(&self, subject: Subject) -> AppResult<Subject>;
    async fn exists_for_year(&self, year_id: &str, owner_id: &str) -> AppResult<bool>;
    async fn find_by_year(&self, year_id: &str, owner_id: &str) -> AppResult<Vec<Subject>>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Subject>>;
}

pub struct MongoSubjectRepository {
    collection: Collection<Subject>,
}

impl MongoSubjectRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("subjects");
        Self { collection }
    }
}

#[async_trait]
impl SubjectRepository for MongoSubjectRepository {
    async fn insert(&self, subject: Subject) -> AppResult<Subject> {
        self.collection.insert_one(&subject).await?;
        Ok(subject)
    }

    async fn exists_for_year(&self, year_id: &str, owner_id: &str) -> AppResult<bool> {
        let existing = self
            .collection
            .find_one(doc! { "yearId": year_id, "ownerId": owner_id })
            .await?;
        Ok(existing.is_some())
    }

    async fn find_by_year(&self, year_id: &str, owner_id: &str) -> AppResult<Vec<Subject>> {
        let subjects = self
            .collection
            .find(doc! { "yearId": year_id, "ownerId": owner_id })
            .await?
            .try_collect()
            .await?;
        Ok(subjects)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Subject>> {
        let subject = self.collection.find_one(doc! { "id": id }).await?;
        Ok(subject)
    }
}
