pub mod account_service;
pub mod attempt_service;
pub mod catalog_service;

pub use account_service::AccountService;
pub use attempt_service::{AttemptOutcome, AttemptService};
pub use catalog_service::CatalogService;
