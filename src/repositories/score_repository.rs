use async_trait::async_trait;
use chrono::Utc;
use mongodb::{
    bson::{doc, to_bson},
    options::{IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use uuid::Uuid;

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::ScoreRecord,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScoreRepository: Send + Sync {
    /// Adds one mark to the student's tally for the subject, creating the
    /// record if it does not exist yet, and returns the updated record.
    /// The increment and the insert must be a single atomic store operation
    /// so that concurrent correct attempts never lose an update.
    async fn record_correct_attempt(
        &self,
        student_id: &str,
        subject_id: &str,
        total_marks: i32,
    ) -> AppResult<ScoreRecord>;

    async fn find_by_student_and_subject(
        &self,
        student_id: &str,
        subject_id: &str,
    ) -> AppResult<Option<ScoreRecord>>;
}

pub struct MongoScoreRepository {
    collection: Collection<ScoreRecord>,
}

impl MongoScoreRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("scores");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for scores collection");

        let pair_index = IndexModel::builder()
            .keys(doc! { "studentId": 1, "subjectId": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("student_subject_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(pair_index).await?;
        Ok(())
    }
}

#[async_trait]
impl ScoreRepository for MongoScoreRepository {
    async fn record_correct_attempt(
        &self,
        student_id: &str,
        subject_id: &str,
        total_marks: i32,
    ) -> AppResult<ScoreRecord> {
        // $inc inside a single upsert closes the read-then-write race: two
        // simultaneous correct attempts both land as increments instead of
        // overwriting each other. studentId/subjectId are filled in from the
        // filter on insert.
        let record = self
            .collection
            .find_one_and_update(
                doc! { "studentId": student_id, "subjectId": subject_id },
                doc! {
                    "$inc": { "marksObtained": 1 },
                    "$set": { "totalMarks": total_marks },
                    "$setOnInsert": {
                        "id": Uuid::new_v4().to_string(),
                        "createdAt": to_bson(&Utc::now())?,
                    },
                },
            )
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await?
            .ok_or_else(|| AppError::Database("score upsert returned no document".to_string()))?;

        Ok(record)
    }

    async fn find_by_student_and_subject(
        &self,
        student_id: &str,
        subject_id: &str,
    ) -> AppResult<Option<ScoreRecord>> {
        let record = self
            .collection
            .find_one(doc! { "studentId": student_id, "subjectId": subject_id })
            .await?;
        Ok(record)
    }
}
