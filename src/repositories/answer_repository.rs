use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection};

use crate::{db::Database, errors::AppResult, models::domain::Answer};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnswerRepository: Send + Sync {
    async fn insert_many(&self, answers: Vec<Answer>) -> AppResult<usize>;
    async fn exists_for_question(&self, question_id: &str) -> AppResult<bool>;
    async fn find_by_question(&self, question_id: &str) -> AppResult<Vec<Answer>>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Answer>>;
    /// Clears the preferred flag on every answer of the question. Returns the
    /// number of documents modified.
    async fn demote_all(&self, question_id: &str) -> AppResult<u64>;
    /// Sets the preferred flag on the given answer of the question. Returns
    /// the number of documents matched (0 when the answer is not in the
    /// question).
    async fn promote(&self, question_id: &str, answer_id: &str) -> AppResult<u64>;
}

pub struct MongoAnswerRepository {
    collection: Collection<Answer>,
}

impl MongoAnswerRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("answers");
        Self { collection }
    }
}

#[async_trait]
impl AnswerRepository for MongoAnswerRepository {
    async fn insert_many(&self, answers: Vec<Answer>) -> AppResult<usize> {
        // insert_many is not atomic across documents; a store-level failure
        // here can leave a partial batch behind and is surfaced as-is.
        let result = self.collection.insert_many(&answers).await?;
        Ok(result.inserted_ids.len())
    }

    async fn exists_for_question(&self, question_id: &str) -> AppResult<bool> {
        let existing = self
            .collection
            .find_one(doc! { "questionId": question_id })
            .await?;
        Ok(existing.is_some())
    }

    async fn find_by_question(&self, question_id: &str) -> AppResult<Vec<Answer>> {
        let answers = self
            .collection
            .find(doc! { "questionId": question_id })
            .await?
            .try_collect()
            .await?;
        Ok(answers)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Answer>> {
        let answer = self.collection.find_one(doc! { "id": id }).await?;
        Ok(answer)
    }

    async fn demote_all(&self, question_id: &str) -> AppResult<u64> {
        let result = self
            .collection
            .update_many(
                doc! { "questionId": question_id },
                doc! { "$set": { "isPreferred": false } },
            )
            .await?;
        Ok(result.modified_count)
    }

    async fn promote(&self, question_id: &str, answer_id: &str) -> AppResult<u64> {
        let result = self
            .collection
            .update_one(
                doc! { "id": answer_id, "questionId": question_id },
                doc! { "$set": { "isPreferred": true } },
            )
            .await?;
        Ok(result.matched_count)
    }
}
