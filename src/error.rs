//! Error types and handling for the Mysuru Trails application

use thiserror::Error;

/// Main error type for the Mysuru Trails application
#[derive(Error, Debug)]
pub enum TrailsError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input or catalog validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Lookup of a catalog entry that does not exist
    #[error("Not found: {kind} '{id}'")]
    NotFound { kind: &'static str, id: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl TrailsError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new not-found error for a catalog entry kind
    pub fn not_found<S: Into<String>>(kind: &'static str, id: S) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TrailsError::Config { .. } => {
                "Configuration error. Please check your config file and environment.".to_string()
            }
            TrailsError::Validation { message } => format!("Invalid input: {message}"),
            TrailsError::NotFound { kind, id } => format!("No {kind} called '{id}' in the guide."),
            TrailsError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = TrailsError::config("bad port");
        assert!(matches!(config_err, TrailsError::Config { .. }));

        let validation_err = TrailsError::validation("unknown category");
        assert!(matches!(validation_err, TrailsError::Validation { .. }));

        let missing = TrailsError::not_found("place", "atlantis");
        assert!(matches!(missing, TrailsError::NotFound { kind: "place", .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = TrailsError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let validation_err = TrailsError::validation("crowd level 'huge'");
        assert!(validation_err.user_message().contains("crowd level 'huge'"));

        let missing = TrailsError::not_found("trail", "moon-walk");
        assert_eq!(
            missing.user_message(),
            "No trail called 'moon-walk' in the guide."
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TrailsError = io_err.into();
        assert!(matches!(err, TrailsError::Io { .. }));
    }
}
