//! Error types for tdgen

use thiserror::Error;

/// Main error type for tdgen
#[derive(Debug, Error)]
pub enum TdgenError {
    /// Text that names no known output dialect
    #[error("Unknown type system: {0}")]
    UnknownDialect(String),

    /// A describe selector a variant handed back is not usable
    #[error("Malformed describe selector on {entity}: {reason}")]
    MalformedSelector { entity: String, reason: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<TdgenError>,
    },
}

impl TdgenError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        TdgenError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

/// Result type alias for tdgen
pub type Result<T> = std::result::Result<T, TdgenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TdgenError::UnknownDialect("rbx".to_string());
        assert_eq!(err.to_string(), "Unknown type system: rbx");
    }

    #[test]
    fn test_malformed_selector_display() {
        let err = TdgenError::MalformedSelector {
            entity: "RBI:Method:foo".to_string(),
            reason: "literal key is empty".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed describe selector on RBI:Method:foo: literal key is empty"
        );
    }

    #[test]
    fn test_error_with_context() {
        let err = TdgenError::Config("tab_width must be positive".to_string());
        let err = err.with_context("Failed to load options");
        assert!(err.to_string().contains("Failed to load options"));
        assert!(err.to_string().contains("tab_width"));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("= broken").unwrap_err();
        let err: TdgenError = toml_err.into();
        assert!(matches!(err, TdgenError::Toml(_)));
    }
}
