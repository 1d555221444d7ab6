use anyhow::Result;

use crate::catalog;
use crate::database::Database;
use crate::models::{Category, NewQuestion, Question};

/// One page of questions plus the size of the full (filtered) result set.
#[derive(Debug)]
pub struct QuestionPage {
    pub items: Vec<Question>,
    pub total: usize,
}

/// Service layer between the HTTP handlers and the catalog store. Each call
/// fetches an ordered snapshot and applies the pure catalog functions to it;
/// nothing here holds state between requests.
#[derive(Clone)]
pub struct QuestionService {
    db: Database,
}

impl QuestionService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn categories(&self) -> Result<Vec<Category>> {
        self.db.list_categories().await
    }

    /// Snapshot of every question, ordered ascending by id. The quiz handler
    /// draws from this directly so it can supply its own random source.
    pub async fn questions(&self) -> Result<Vec<Question>> {
        self.db.list_questions().await
    }

    pub async fn question_page(&self, page_number: usize) -> Result<QuestionPage> {
        let snapshot = self.db.list_questions().await?;
        let items = catalog::paginate(&snapshot, page_number).to_vec();
        Ok(QuestionPage {
            items,
            total: snapshot.len(),
        })
    }

    pub async fn category_page(&self, category_id: i64, page_number: usize) -> Result<QuestionPage> {
        let snapshot = self.db.list_questions().await?;
        let filtered = catalog::filter_by_category(&snapshot, category_id);
        let items = catalog::paginate(&filtered, page_number).to_vec();
        Ok(QuestionPage {
            items,
            total: filtered.len(),
        })
    }

    pub async fn search(&self, term: &str) -> Result<Vec<Question>> {
        let snapshot = self.db.list_questions().await?;
        Ok(catalog::filter_by_text(&snapshot, term))
    }

    pub async fn category_exists(&self, category_id: i64) -> Result<bool> {
        self.db.category_exists(category_id).await
    }

    pub async fn create(&self, new: NewQuestion) -> Result<Question> {
        self.db.create_question(new).await
    }

    pub async fn delete(&self, id: i64) -> Result<bool> {
        self.db.delete_question(id).await
    }
}
