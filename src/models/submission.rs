// src/models/submission.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// DTO for the form-encoded submission body.
///
/// Every field is optional on the wire: the quiz page posts whatever it has,
/// and missing values fall back to the documented defaults when the record is
/// built. Numeric fields arrive as strings, so they are kept as strings here
/// and parsed with a zero default rather than rejected by the deserializer.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRequest {
    pub full_name: Option<String>,
    pub mobile_number: Option<String>,
    pub email: Option<String>,
    pub total_questions: Option<String>,
    pub correct_answers: Option<String>,
    pub accuracy: Option<String>,
    pub time_taken: Option<String>,
    pub security_violations: Option<String>,
    pub test_duration: Option<String>,
    /// Client-side ISO timestamp, posted under the key `timestamp`.
    #[serde(rename = "timestamp")]
    pub client_timestamp: Option<String>,
}

/// Represents one row of the 'TestResults' table.
/// Rows are append-only and never mutated or deleted.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TestResult {
    /// Server-assigned timestamp at receipt.
    pub received_at: DateTime<Utc>,
    pub full_name: String,
    pub mobile_number: String,
    pub email: String,
    pub total_questions: i64,
    pub correct_answers: i64,
    /// Intended range 0-100; not enforced on the submission path.
    pub accuracy: i64,
    pub time_taken: String,
    pub security_violations: i64,
    pub test_duration: i64,
    pub client_timestamp: String,
}

impl SubmissionRequest {
    /// Builds the stored record, applying the field defaults: empty string
    /// for text fields, 0 for numeric fields that are absent or unparseable,
    /// and the server receipt time for a missing client timestamp.
    pub fn into_record(self, received_at: DateTime<Utc>) -> TestResult {
        TestResult {
            received_at,
            full_name: self.full_name.unwrap_or_default(),
            mobile_number: self.mobile_number.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            total_questions: int_or_zero(self.total_questions.as_deref()),
            correct_answers: int_or_zero(self.correct_answers.as_deref()),
            accuracy: int_or_zero(self.accuracy.as_deref()),
            time_taken: self.time_taken.unwrap_or_default(),
            security_violations: int_or_zero(self.security_violations.as_deref()),
            test_duration: int_or_zero(self.test_duration.as_deref()),
            client_timestamp: self
                .client_timestamp
                .unwrap_or_else(|| received_at.to_rfc3339()),
        }
    }
}

/// Integer parsing with default 0 on absence or failure.
///
/// Parses the leading optional-sign digit prefix after trimming, so clients
/// posting values like "12abc" or a fractional "90.5" store 12 and 90 rather
/// than 0. Only inputs with no leading digits fall back to 0.
fn int_or_zero(value: Option<&str>) -> i64 {
    let s = match value {
        Some(s) => s.trim(),
        None => return 0,
    };

    let (sign, rest) = match s.as_bytes().first() {
        Some(b'-') => (-1_i64, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());

    rest[..digits_end]
        .parse::<i64>()
        .map(|n| sign * n)
        .unwrap_or(0)
}
