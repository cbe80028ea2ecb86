//! Error types for the bmi-map core library
//!
//! This module defines the error handling system for bmi-map, using
//! thiserror for ergonomic error definitions. Every error is fatal to the
//! operation in progress; callers decide whether a batch stops or moves on.

use thiserror::Error;

/// Main error type for bmi-map operations
#[derive(Error, Debug)]
pub enum Error {
    /// A parameter name, intent or type is malformed
    #[error("Validation error: {field} - {message}")]
    Validation {
        field: String,
        message: String,
    },

    /// An unrecognized target language was requested
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
    },

    /// A signature cannot be expressed in the target language
    #[error("Unsupported signature for {function}: {message}")]
    UnsupportedSignature {
        function: String,
        message: String,
    },

    /// Specification document could not be parsed
    #[error("Parse error: {message}")]
    Parse {
        message: String,
        #[source]
        source: Option<toml::de::Error>,
    },

    /// A function is missing from the BMI catalog
    #[error("Unknown function: {name}")]
    UnknownFunction {
        name: String,
    },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a validation error for the given field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a parse error without an underlying TOML error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            source: None,
        }
    }

    /// Whether this error came from parameter validation
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Parse {
            message: err.message().to_string(),
            source: Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io {
            message: err.to_string(),
            source: err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::validation("intent", "intent not understood (up)");
        assert_eq!(
            err.to_string(),
            "Validation error: intent - intent not understood (up)"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_unsupported_signature_display() {
        let err = Error::UnsupportedSignature {
            function: "foo".to_string(),
            message: "multiple return types not allowed".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unsupported signature for foo: multiple return types not allowed"
        );
        assert!(!err.is_validation());
    }

    #[test]
    fn test_toml_error_conversion() {
        let err: Error = toml::from_str::<toml::Table>("bmi = [").unwrap_err().into();
        assert!(matches!(err, Error::Parse { source: Some(_), .. }));
    }
}
