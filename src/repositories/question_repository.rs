use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{db::Database, errors::AppResult, models::domain::Question};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    async fn insert(&self, question: Question) -> AppResult<Question>;
    async fn find_one(
        &self,
        subject_id: &str,
        question_no: i32,
        owner_id: &str,
    ) -> AppResult<Option<Question>>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Question>>;
}

pub struct MongoQuestionRepository {
    collection: Collection<Question>,
}

impl MongoQuestionRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("questions");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for questions collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let position_index = IndexModel::builder()
            .keys(doc! { "subjectId": 1, "questionNo": 1, "ownerId": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("subject_question_no_owner".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(position_index).await?;
        Ok(())
    }
}

#[async_trait]
impl QuestionRepository for MongoQuestionRepository {
    async fn insert(&self, question: Question) -> AppResult<Question> {
        self.collection.insert_one(&question).await?;
        Ok(question)
    }

    async fn find_one(
        &self,
        subject_id: &str,
        question_no: i32,
        owner_id: &str,
    ) -> AppResult<Option<Question>> {
        let question = self
            .collection
            .find_one(doc! {
                "subjectId": subject_id,
                "questionNo": question_no,
                "ownerId": owner_id,
            })
            .await?;
        Ok(question)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Question>> {
        let question = self.collection.find_one(doc! { "id": id }).await?;
        Ok(question)
    }
}
