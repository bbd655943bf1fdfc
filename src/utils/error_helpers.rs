use crate::error::{DisplayError, FetchError};
use std::error::Error as StdError;
use std::io;

/// Helper functions for standardizing error conversions across the codebase.
/// Render an error followed by each `source()` in its chain, joined by ": ".
pub fn describe_error_chain(error: &dyn StdError) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}

/// Convert reqwest transport errors (connect, DNS, timeout, body read) to FetchError
pub fn convert_transport_error(error: reqwest::Error) -> FetchError {
    let detail = if error.is_timeout() {
        format!("request timed out: {}", describe_error_chain(&error))
    } else {
        describe_error_chain(&error)
    };
    FetchError::Transport { detail }
}

/// Convert JSON deserialization errors to FetchError
pub fn convert_json_error(error: serde_json::Error) -> FetchError {
    FetchError::MalformedResponse {
        detail: error.to_string(),
    }
}

/// Convert IO errors to DisplayError for terminal operations
pub fn convert_io_to_display_error(error: io::Error, operation: &str) -> DisplayError {
    DisplayError::TerminalOutput(format!("{}: {}", operation, error))
}

/// Helper macro for display errors
#[macro_export]
macro_rules! map_display_error {
    ($result:expr, $operation:expr) => {
        $result
            .map_err(|e| $crate::utils::error_helpers::convert_io_to_display_error(e, $operation))
    };
}
