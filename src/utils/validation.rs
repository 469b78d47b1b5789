//! Input validation and sanitization utilities
//!
//! This module provides utilities for validating user input before it reaches
//! the network layer.

use crate::error::CliError;
use url::Url;

/// Check whether a string is an absolute `http` or `https` URL.
///
/// Total and pure: any parse failure (malformed syntax, relative reference,
/// unsupported scheme) yields `false`.
pub fn is_valid_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// Validate a short code before it is interpolated into a request path.
pub fn validate_short_code(code: &str) -> Result<(), CliError> {
    if code.is_empty() {
        return Err(CliError::InvalidArguments(
            "Short code cannot be empty".to_string(),
        ));
    }

    if !code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(CliError::InvalidArguments(format!(
            "Invalid short code '{}': only letters, digits, '-' and '_' are allowed",
            code
        )));
    }

    Ok(())
}
