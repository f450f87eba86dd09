use std::sync::Arc;

use crate::{
    auth::JwtService,
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        MongoAnswerRepository, MongoQuestionRepository, MongoScoreRepository,
        MongoSubjectRepository, MongoUserRepository, MongoYearRepository,
    },
    services::{AccountService, AttemptService, CatalogService},
};

#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<AccountService>,
    pub catalog_service: Arc<CatalogService>,
    pub attempt_service: Arc<AttemptService>,
    pub jwt_service: JwtService,
    pub db: Database,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let jwt_service = JwtService::new(&config.jwt_secret, config.jwt_expiration_hours);

        let user_repository = Arc::new(MongoUserRepository::new(&db));
        user_repository.ensure_indexes().await?;

        let year_repository = Arc::new(MongoYearRepository::new(&db));
        let subject_repository = Arc::new(MongoSubjectRepository::new(&db));

        let question_repository = Arc::new(MongoQuestionRepository::new(&db));
        question_repository.ensure_indexes().await?;

        let answer_repository = Arc::new(MongoAnswerRepository::new(&db));

        let score_repository = Arc::new(MongoScoreRepository::new(&db));
        score_repository.ensure_indexes().await?;

        let account_service = Arc::new(AccountService::new(
            user_repository,
            jwt_service.clone(),
        ));
        let catalog_service = Arc::new(CatalogService::new(
            year_repository,
            subject_repository,
            question_repository.clone(),
            answer_repository.clone(),
        ));
        let attempt_service = Arc::new(AttemptService::new(
            answer_repository,
            question_repository,
            score_repository,
        ));

        Ok(Self {
            account_service,
            catalog_service,
            attempt_service,
            jwt_service,
            db,
            config: Arc::new(config),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
