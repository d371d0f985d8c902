//! Error types surfaced at the submission and chart-loading boundaries.

use thiserror::Error;

/// Inclusive bounds accepted for `vehicle_year`.
pub const MIN_MODEL_YEAR: i32 = 2017;
pub const MAX_MODEL_YEAR: i32 = 2025;

/// Local form validation failure. Shown inline; never reaches the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select a year between {} and {}.", MIN_MODEL_YEAR, MAX_MODEL_YEAR)]
    YearMissing,
    #[error("Please select a year between {} and {}.", MIN_MODEL_YEAR, MAX_MODEL_YEAR)]
    YearOutOfRange { year: i32 },
}

/// Failures talking to the prediction backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("{context} failed: {status} - {body}")]
    Http {
        context: &'static str,
        status: u16,
        body: String,
    },
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("incomplete emission insights data (missing: {})", .missing.join(", "))]
    IncompleteInsights { missing: Vec<&'static str> },
}

impl AppError {
    /// Generic sentence for the blocking alert; details go to the log.
    pub fn alert_message(&self, what: &str) -> String {
        format!("Failed to {what}. Check the console for details.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_messages_match_inline_copy() {
        let expected = "Please select a year between 2017 and 2025.";
        assert_eq!(ValidationError::YearMissing.to_string(), expected);
        assert_eq!(
            ValidationError::YearOutOfRange { year: 2016 }.to_string(),
            expected
        );
    }

    #[test]
    fn http_error_includes_status_and_body() {
        let err = AppError::Http {
            context: "Prediction",
            status: 400,
            body: "{\"error\":\"bad make\"}".into(),
        };
        assert_eq!(
            err.to_string(),
            "Prediction failed: 400 - {\"error\":\"bad make\"}"
        );
    }

    #[test]
    fn incomplete_insights_lists_missing_collections() {
        let err = AppError::IncompleteInsights {
            missing: vec!["engine_emissions", "top_5_combinations"],
        };
        assert!(err.to_string().ends_with("(missing: engine_emissions, top_5_combinations)"));
    }
}
