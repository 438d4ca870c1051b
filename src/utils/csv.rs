// src/utils/csv.rs

use crate::models::submission::TestResult;
use crate::storage::HEADERS;

/// Download name for the export artifact.
pub const EXPORT_FILENAME: &str = "CodeFounders_Test_Results.csv";

/// Renders the header row plus every data row, cells joined with commas and
/// rows with newlines. Cell values are embedded verbatim, with no quoting or
/// escaping, so free-text fields containing commas produce extra columns.
/// This reproduces the long-standing behavior downstream consumers parse.
pub fn render_csv(records: &[TestResult]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(HEADERS.join(","));

    for record in records {
        let cells = [
            record.received_at.to_rfc3339(),
            record.full_name.clone(),
            record.mobile_number.clone(),
            record.email.clone(),
            record.total_questions.to_string(),
            record.correct_answers.to_string(),
            record.accuracy.to_string(),
            record.time_taken.clone(),
            record.security_violations.to_string(),
            record.test_duration.to_string(),
            record.client_timestamp.clone(),
        ];
        lines.push(cells.join(","));
    }

    lines.join("\n")
}
