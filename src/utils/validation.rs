//! Input validation and sanitization utilities
//!
//! This module provides utilities for validating configuration values
//! before any request is issued.

use crate::error::ConfigError;
use reqwest::Url;

const BASE_URL_HINT: &str =
    "Set base_url in config.toml, pass --base-url, or export REQRES_BASE_URL";

/// Validate that a base URL is present and is an absolute http(s) URL.
///
/// Returns the trimmed URL on success.
pub fn validate_base_url(url: Option<&str>) -> Result<String, ConfigError> {
    let trimmed = url.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(ConfigError::MissingField {
            field: "base_url".to_string(),
            hint: BASE_URL_HINT.to_string(),
        });
    }

    let parsed = Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        field: "base_url".to_string(),
        value: trimmed.to_string(),
        reason: format!("not a valid absolute URL: {}", e),
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidValue {
            field: "base_url".to_string(),
            value: trimmed.to_string(),
            reason: "URL must start with http:// or https://".to_string(),
        });
    }

    Ok(trimmed.to_string())
}

/// Validate that an optional numeric setting is greater than zero
pub fn validate_positive<T>(field: &str, value: Option<T>) -> Result<Option<T>, ConfigError>
where
    T: Copy + Default + PartialEq + std::fmt::Display,
{
    match value {
        Some(v) if v == T::default() => Err(ConfigError::InvalidValue {
            field: field.to_string(),
            value: v.to_string(),
            reason: format!("{} must be greater than zero", field),
        }),
        other => Ok(other),
    }
}
