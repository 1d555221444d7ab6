use axum::{
    Router,
    extract::{Path, Query, State},
    response::{IntoResponse, Json, Response},
    routing::{delete, get, post},
};
use serde::Deserialize;
use std::collections::HashSet;

use crate::{
    catalog::{self, QuizScope},
    errors::ApiError,
    models::*,
    question_service::QuestionService,
};

// Import logging macros
use crate::{log_api_start, log_api_success, log_api_warn};

#[derive(Clone)]
pub struct AppState {
    pub question_service: QuestionService,
}

#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    page: Option<String>,
}

impl PageParams {
    /// Absent or non-numeric page values fall back to the first page; a bad
    /// `?page=` is never a client error.
    fn page_number(&self) -> usize {
        self.page
            .as_deref()
            .and_then(|p| p.parse().ok())
            .unwrap_or(1)
    }
}

pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoryMapResponse>, ApiError> {
    log_api_start!("list_categories");

    let categories = state.question_service.categories().await?;
    if categories.is_empty() {
        log_api_warn!("list_categories", "no categories in catalog");
        return Err(ApiError::NotFound);
    }

    log_api_success!("list_categories", count = categories.len(), "categories retrieved");
    Ok(Json(CategoryMapResponse {
        success: true,
        categories: category_map(&categories),
    }))
}

pub async fn list_questions(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<QuestionPageResponse>, ApiError> {
    let page = params.page_number();
    log_api_start!("list_questions", page = page);

    let page_result = state.question_service.question_page(page).await?;
    // An empty page is a not-found here; empty *search* results are a
    // success. The policy split comes from the original API and is kept
    // deliberately.
    if page_result.items.is_empty() {
        log_api_warn!("list_questions", page = page, "page beyond end of catalog");
        return Err(ApiError::NotFound);
    }

    let categories = state.question_service.categories().await?;

    log_api_success!("list_questions", count = page_result.items.len(), "questions page retrieved");
    Ok(Json(QuestionPageResponse {
        success: true,
        questions: page_result.items,
        total_questions: page_result.total,
        categories: category_map(&categories),
        current_category: None,
    }))
}

/// `POST /questions` multiplexes search and create, mirroring the original
/// API: a body with a non-empty `searchTerm` is a search, anything else is a
/// create attempt.
pub async fn create_or_search_question(
    State(state): State<AppState>,
    Json(payload): Json<QuestionPayload>,
) -> Result<Response, ApiError> {
    if let Some(term) = payload.search_term.as_deref().filter(|t| !t.trim().is_empty()) {
        log_api_start!("search_questions");

        let questions = state.question_service.search(term).await?;
        // An empty match list is a normal success, unlike an empty page.
        log_api_success!("search_questions", count = questions.len(), "questions matched");
        let total_questions = questions.len();
        return Ok(Json(QuestionListResponse {
            success: true,
            questions,
            total_questions,
        })
        .into_response());
    }

    log_api_start!("create_question");

    let new = payload.into_new_question().ok_or_else(|| {
        log_api_warn!("create_question", "missing or blank required field");
        ApiError::Unprocessable
    })?;

    if !state.question_service.category_exists(new.category_id).await? {
        log_api_warn!("create_question", "unknown category");
        return Err(ApiError::Unprocessable);
    }

    let question = state.question_service.create(new).await?;
    log_api_success!("create_question", question_id = question.id, "question created");

    let page_result = state.question_service.question_page(1).await?;
    Ok(Json(QuestionListResponse {
        success: true,
        questions: page_result.items,
        total_questions: page_result.total,
    })
    .into_response())
}

pub async fn delete_question(
    State(state): State<AppState>,
    Path(question_id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    // A non-numeric id gets the same 422 as an unknown one, like the
    // original's catch-all delete handler.
    let id: i64 = question_id.parse().map_err(|_| {
        log_api_warn!("delete_question", "non-numeric question id");
        ApiError::Unprocessable
    })?;

    log_api_start!("delete_question", question_id = id);

    if !state.question_service.delete(id).await? {
        log_api_warn!("delete_question", question_id = id, "no such question");
        return Err(ApiError::Unprocessable);
    }

    log_api_success!("delete_question", question_id = id, "question deleted");

    let page_result = state.question_service.question_page(1).await?;
    Ok(Json(DeleteResponse {
        success: true,
        deleted: id,
        questions: page_result.items,
        total_questions: page_result.total,
    }))
}

pub async fn list_category_questions(
    State(state): State<AppState>,
    Path(category_id): Path<i64>,
    Query(params): Query<PageParams>,
) -> Result<Json<QuestionPageResponse>, ApiError> {
    let page = params.page_number();
    log_api_start!("list_category_questions", category_id = category_id);

    let page_result = state
        .question_service
        .category_page(category_id, page)
        .await?;
    if page_result.items.is_empty() {
        log_api_warn!("list_category_questions", page = page, "no questions for category page");
        return Err(ApiError::NotFound);
    }

    let categories = state.question_service.categories().await?;

    log_api_success!(
        "list_category_questions",
        count = page_result.items.len(),
        "category questions retrieved"
    );
    Ok(Json(QuestionPageResponse {
        success: true,
        questions: page_result.items,
        total_questions: page_result.total,
        categories: category_map(&categories),
        current_category: Some(category_id),
    }))
}

pub async fn next_quiz_question(
    State(state): State<AppState>,
    Json(payload): Json<QuizPayload>,
) -> Result<Json<QuizResponse>, ApiError> {
    log_api_start!("next_quiz_question");

    // A quiz request without a category shape is malformed, never defaulted.
    let category = payload.quiz_category.ok_or_else(|| {
        log_api_warn!("next_quiz_question", "missing quiz_category");
        ApiError::Unprocessable
    })?;
    let scope = QuizScope::from_wire(category.id);
    let previous: HashSet<i64> = payload.previous_questions.into_iter().collect();

    let snapshot = state.question_service.questions().await?;
    let question = catalog::next_question(&snapshot, scope, &previous, &mut rand::thread_rng());

    match &question {
        Some(q) => log_api_success!("next_quiz_question", question_id = q.id, "question drawn"),
        // Exhausting the pool ends the quiz; it is not an error.
        None => log_api_success!("next_quiz_question", "pool exhausted, quiz complete"),
    }

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/:category_id/questions", get(list_category_questions))
        .route("/questions", get(list_questions).post(create_or_search_question))
        .route("/questions/:question_id", delete(delete_question))
        .route("/quizzes", post(next_quiz_question))
        .fallback(not_found)
        .with_state(state)
}
