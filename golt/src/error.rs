//! Error handling module for the golt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use golex_scan::ScanError;
use thiserror::Error;

/// Main error type for the golt CLI application.
///
/// This enum represents all possible errors that can occur
/// during the execution of golt commands.
#[derive(Error, Debug)]
pub enum GoltError {
    /// Error when the configuration is missing, invalid, or logging
    /// cannot be set up.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error when the input cannot be scanned.
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
}

/// Result type alias using GoltError.
pub type Result<T> = std::result::Result<T, GoltError>;

#[cfg(test)]
mod tests {
    use super::*;
    use golex_scan::Position;

    #[test]
    fn test_config_error_display() {
        let err = GoltError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let golt_err: GoltError = io_err.into();
        assert!(matches!(golt_err, GoltError::Io(_)));
        assert_eq!(golt_err.to_string(), "IO error: file not found");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let golt_err: GoltError = json_err.into();
        assert!(matches!(golt_err, GoltError::Json(_)));
    }

    #[test]
    fn test_scan_error_conversion() {
        let scan_err = ScanError::UnterminatedComment {
            pos: Position::new(4, 2, 1),
        };
        let golt_err: GoltError = scan_err.into();
        assert_eq!(
            golt_err.to_string(),
            "Scan error: unterminated comment starting at 2:1"
        );
    }
}
