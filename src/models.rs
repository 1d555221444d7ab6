use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: i64,
    #[serde(rename = "question")]
    pub text: String,
    pub answer: String,
    #[serde(rename = "category")]
    pub category_id: i64,
    pub difficulty: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    pub label: String,
}

/// A validated insert request, produced from a `QuestionPayload`.
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub text: String,
    pub answer: String,
    pub category_id: i64,
    pub difficulty: i64,
}

/// Body of `POST /questions`. The endpoint is multiplexed: a non-empty
/// `searchTerm` makes it a search, anything else is a create attempt.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionPayload {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i64>,
    pub difficulty: Option<i64>,
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

impl QuestionPayload {
    /// Validates the create fields. `None` means a required field is missing
    /// or blank; the caller decides how to surface that.
    pub fn into_new_question(self) -> Option<NewQuestion> {
        let text = self.question?.trim().to_string();
        let answer = self.answer?.trim().to_string();
        if text.is_empty() || answer.is_empty() {
            return None;
        }
        Some(NewQuestion {
            text,
            answer,
            category_id: self.category?,
            difficulty: self.difficulty?,
        })
    }
}

/// Body of `POST /quizzes`. `quiz_category` is required; category id `0`
/// encodes "all categories". Extra fields sent by clients (e.g. the category
/// label) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizPayload {
    #[serde(default)]
    pub previous_questions: Vec<i64>,
    pub quiz_category: Option<QuizCategory>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuizCategory {
    pub id: i64,
}

// Response shapes mirror the wire format of the original trivia API:
// every body carries `success`, categories serialize as an id-to-label map,
// and list endpoints include `total_questions`.

#[derive(Debug, Serialize)]
pub struct CategoryMapResponse {
    pub success: bool,
    pub categories: BTreeMap<i64, String>,
}

#[derive(Debug, Serialize)]
pub struct QuestionPageResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: BTreeMap<i64, String>,
    pub current_category: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub deleted: i64,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}

pub fn category_map(categories: &[Category]) -> BTreeMap<i64, String> {
    categories
        .iter()
        .map(|c| (c.id, c.label.clone()))
        .collect()
}
