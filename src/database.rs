use anyhow::Result;
use sqlx::SqlitePool;

use crate::models::{Category, NewQuestion, Question};

/// Seed labels for the read-only category table, standing in for the
/// original deployment's SQL dump. Row ids are assigned 1..=6 in order.
const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = SqlitePool::connect(database_url).await?;
        let db = Database { pool };
        db.migrate().await?;
        db.seed_categories().await?;
        Ok(db)
    }

    async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS categories (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                type TEXT NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS questions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                question TEXT NOT NULL,
                answer TEXT NOT NULL,
                category INTEGER NOT NULL REFERENCES categories(id),
                difficulty INTEGER NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Categories have no create/update/delete path, so an empty table is
    /// populated once with the default set.
    async fn seed_categories(&self) -> Result<()> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await?;

        if count == 0 {
            for label in DEFAULT_CATEGORIES {
                sqlx::query("INSERT INTO categories (type) VALUES (?1)")
                    .bind(label)
                    .execute(&self.pool)
                    .await?;
            }
            tracing::info!(count = DEFAULT_CATEGORIES.len(), "Seeded default categories");
        }

        Ok(())
    }

    /// Full snapshot of the question table, ordered ascending by id.
    pub async fn list_questions(&self) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question AS text, answer, category AS category_id, difficulty
            FROM questions
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, type AS label FROM categories ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    pub async fn category_exists(&self, id: i64) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories WHERE id = ?1")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    pub async fn create_question(&self, new: NewQuestion) -> Result<Question> {
        let result = sqlx::query(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&new.text)
        .bind(&new.answer)
        .bind(new.category_id)
        .bind(new.difficulty)
        .execute(&self.pool)
        .await?;

        Ok(Question {
            id: result.last_insert_rowid(),
            text: new.text,
            answer: new.answer,
            category_id: new.category_id,
            difficulty: new.difficulty,
        })
    }

    /// Deletes a question by id. Returns `false` when no row matched.
    pub async fn delete_question(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM questions WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
