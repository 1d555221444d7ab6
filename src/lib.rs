pub mod api;
pub mod catalog;
pub mod config;
pub mod database;
pub mod errors;
pub mod logging;
pub mod models;
pub mod question_service;

pub use catalog::{
    QUESTIONS_PER_PAGE, QuizScope, filter_by_category, filter_by_text, next_question, paginate,
};
pub use config::Config;
pub use database::Database;
pub use errors::ApiError;
pub use models::*;
pub use question_service::QuestionService;
