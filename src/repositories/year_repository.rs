use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection};

use crate::{db::Database, errors::AppResult, models::domain::CourseYear};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait YearRepository: Send + Sync {
    async fn insert(&self, year: CourseYear) -> AppResult<CourseYear>;
    async fn find_by_owner(&self, owner_id: &str) -> AppResult<Vec<CourseYear>>;
}

pub struct MongoYearRepository {
    collection: Collection<CourseYear>,
}

impl MongoYearRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("course_years");
        Self { collection }
    }
}

#[async_trait]
impl YearRepository for MongoYearRepository {
    async fn insert(&self, year: CourseYear) -> AppResult<CourseYear> {
        self.collection.insert_one(&year).await?;
        Ok(year)
    }

    async fn find_by_owner(&self, owner_id: &str) -> AppResult<Vec<CourseYear>> {
        let years = self
            .collection
            .find(doc! { "ownerId": owner_id })
            .sort(doc! { "year": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(years)
    }
}
