// src/storage.rs

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::error::AppError;
use crate::models::submission::TestResult;

/// Header labels, in column order, as they appear in the CSV export.
pub const HEADERS: [&str; 11] = [
    "Timestamp",
    "Full Name",
    "Mobile Number",
    "Email",
    "Total Questions",
    "Correct Answers",
    "Accuracy (%)",
    "Time Taken",
    "Security Violations",
    "Test Duration (minutes)",
    "Original Timestamp",
];

/// Capability-typed view of the row store.
///
/// The store is append-only: rows carry no identifier beyond their position,
/// and insertion order is the only ordering guarantee. There is deliberately
/// no update or delete operation.
#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Creates the table if it is absent. Atomic and idempotent: safe to run
    /// on every startup, never touches existing rows.
    async fn ensure_schema(&self) -> Result<(), AppError>;

    /// Appends one record and returns the 1-based sheet row it landed on.
    /// The header occupies row 1, so the first data row reports 2.
    async fn append(&self, record: &TestResult) -> Result<i64, AppError>;

    /// Reads every data row in insertion order.
    async fn read_all(&self) -> Result<Vec<TestResult>, AppError>;
}

pub type DynResultStore = std::sync::Arc<dyn ResultStore>;

/// SQLite-backed store. The single table mirrors the 11 sheet columns.
#[derive(Clone)]
pub struct SqliteResultStore {
    pool: SqlitePool,
}

impl SqliteResultStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResultStore for SqliteResultStore {
    async fn ensure_schema(&self) -> Result<(), AppError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS TestResults (
                received_at         TEXT    NOT NULL,
                full_name           TEXT    NOT NULL,
                mobile_number       TEXT    NOT NULL,
                email               TEXT    NOT NULL,
                total_questions     INTEGER NOT NULL,
                correct_answers     INTEGER NOT NULL,
                accuracy            INTEGER NOT NULL,
                time_taken          TEXT    NOT NULL,
                security_violations INTEGER NOT NULL,
                test_duration       INTEGER NOT NULL,
                client_timestamp    TEXT    NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn append(&self, record: &TestResult) -> Result<i64, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO TestResults (
                received_at, full_name, mobile_number, email,
                total_questions, correct_answers, accuracy, time_taken,
                security_violations, test_duration, client_timestamp
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(record.received_at)
        .bind(&record.full_name)
        .bind(&record.mobile_number)
        .bind(&record.email)
        .bind(record.total_questions)
        .bind(record.correct_answers)
        .bind(record.accuracy)
        .bind(&record.time_taken)
        .bind(record.security_violations)
        .bind(record.test_duration)
        .bind(&record.client_timestamp)
        .execute(&self.pool)
        .await?;

        // rowid 1 is the first data row; the header counts as sheet row 1.
        Ok(result.last_insert_rowid() + 1)
    }

    async fn read_all(&self) -> Result<Vec<TestResult>, AppError> {
        let records = sqlx::query_as::<_, TestResult>(
            r#"
            SELECT
                received_at, full_name, mobile_number, email,
                total_questions, correct_answers, accuracy, time_taken,
                security_violations, test_duration, client_timestamp
            FROM TestResults
            ORDER BY rowid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }
}
