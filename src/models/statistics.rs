// src/models/statistics.rs

use serde::Serialize;

use crate::models::submission::TestResult;

/// Accuracy band: high >= 80, medium 60-79, low < 60.
/// The same thresholds drove the sheet's conditional color formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccuracyBand {
    High,
    Medium,
    Low,
}

impl AccuracyBand {
    pub fn classify(accuracy: i64) -> Self {
        if accuracy >= 80 {
            AccuracyBand::High
        } else if accuracy >= 60 {
            AccuracyBand::Medium
        } else {
            AccuracyBand::Low
        }
    }
}

/// Aggregate view over all stored results.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TestStatistics {
    pub total_tests: i64,
    pub average_accuracy: i64,
    pub high_performers: i64,
    pub medium_performers: i64,
    pub low_performers: i64,
}

/// Buckets every record by accuracy band and averages accuracy, rounded to
/// the nearest integer. Returns `None` when there are no data rows, which the
/// HTTP layer serializes as `null` -- an empty table is not an error.
pub fn compute_statistics(records: &[TestResult]) -> Option<TestStatistics> {
    if records.is_empty() {
        return None;
    }

    let mut stats = TestStatistics {
        total_tests: records.len() as i64,
        average_accuracy: 0,
        high_performers: 0,
        medium_performers: 0,
        low_performers: 0,
    };

    let mut total_accuracy = 0_i64;

    for record in records {
        total_accuracy += record.accuracy;

        match AccuracyBand::classify(record.accuracy) {
            AccuracyBand::High => stats.high_performers += 1,
            AccuracyBand::Medium => stats.medium_performers += 1,
            AccuracyBand::Low => stats.low_performers += 1,
        }
    }

    stats.average_accuracy =
        (total_accuracy as f64 / records.len() as f64).round() as i64;

    Some(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record_with_accuracy(accuracy: i64) -> TestResult {
        TestResult {
            received_at: Utc::now(),
            full_name: String::new(),
            mobile_number: String::new(),
            email: String::new(),
            total_questions: 10,
            correct_answers: 0,
            accuracy,
            time_taken: String::new(),
            security_violations: 0,
            test_duration: 0,
            client_timestamp: String::new(),
        }
    }

    #[test]
    fn empty_table_yields_none() {
        assert_eq!(compute_statistics(&[]), None);
    }

    #[test]
    fn buckets_and_rounds_average() {
        let records: Vec<TestResult> =
            [90, 70, 40].into_iter().map(record_with_accuracy).collect();

        let stats = compute_statistics(&records).unwrap();
        assert_eq!(
            stats,
            TestStatistics {
                total_tests: 3,
                average_accuracy: 67,
                high_performers: 1,
                medium_performers: 1,
                low_performers: 1,
            }
        );
    }

    #[test]
    fn band_boundaries() {
        assert_eq!(AccuracyBand::classify(80), AccuracyBand::High);
        assert_eq!(AccuracyBand::classify(79), AccuracyBand::Medium);
        assert_eq!(AccuracyBand::classify(60), AccuracyBand::Medium);
        assert_eq!(AccuracyBand::classify(59), AccuracyBand::Low);
    }

    #[test]
    fn malformed_accuracy_stored_as_zero_counts_low() {
        // A non-numeric accuracy parses to 0 on the write path and lands here.
        let records = vec![record_with_accuracy(0)];
        let stats = compute_statistics(&records).unwrap();
        assert_eq!(stats.low_performers, 1);
        assert_eq!(stats.average_accuracy, 0);
    }
}
