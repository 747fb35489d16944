//! Error types for bodega container operations.
//!
//! Errors carry the names involved and, for failed lookups, "did you mean?"
//! suggestions rendered from what is actually registered.

use std::fmt;

/// Main error type for all container operations.
#[derive(Debug, thiserror::Error)]
pub enum BodegaError {
    /// No production path resolves the requested service name.
    #[error("{}", .0)]
    NotFound(NotFoundError),

    /// The requested parameter name is absent from the parameter store.
    #[error("Unknown parameter: {name:?}")]
    UnknownParameter {
        /// Lower-cased parameter name that was requested.
        name: String,
    },

    /// Typed access asked for a type other than the one the service holds.
    #[error("Type mismatch for service \"{id}\": expected {expected}, found {actual}")]
    TypeMismatch {
        /// snake_case name of the service.
        id: String,
        /// Shortened name of the requested type.
        expected: String,
        /// Shortened name of the type actually stored.
        actual: String,
    },

    /// A typed parameter read failed to deserialize into the requested shape.
    #[error("Parameter {name:?} does not fit the requested type: {source}")]
    ParameterFormat {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// A factory or provider failed while producing a service.
    ///
    /// Constructed by application code via [`BodegaError::production`] to
    /// carry a domain error out of a producer; the container itself never
    /// wraps producer errors.
    #[error("Service production failed: {source}")]
    Production {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl BodegaError {
    /// Wraps a domain error for propagation out of a factory or provider.
    pub fn production(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Production { source: source.into() }
    }
}

/// Error when no production path resolves a service name.
///
/// Includes suggestions from registered names so a typo is caught at the
/// call site rather than three stack frames later.
#[derive(Debug)]
pub struct NotFoundError {
    /// snake_case form of the requested name.
    pub requested: String,
    /// Similar names that ARE resolvable (for "did you mean?" output).
    pub suggestions: Vec<String>,
}

impl fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Service not found: \"{}\"", self.requested)?;

        if !self.suggestions.is_empty() {
            write!(f, "\n  Did you mean one of:")?;
            for suggestion in &self.suggestions {
                write!(f, "\n    - {suggestion}")?;
            }
        }

        write!(
            f,
            "\n  Hint: register it with set(\"{0}\", ...) or set_factory(\"{0}\", ...), or attach a provider that knows it",
            self.requested,
        )
    }
}

/// Convenient Result type for container operations.
pub type Result<T> = std::result::Result<T, BodegaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display() {
        let err = BodegaError::NotFound(NotFoundError {
            requested: "databse".to_string(),
            suggestions: vec!["database".to_string()],
        });

        let msg = format!("{err}");
        assert!(msg.contains("not found"));
        assert!(msg.contains("databse"));
        assert!(msg.contains("Did you mean"));
        assert!(msg.contains("- database"));
        assert!(msg.contains("Hint"));
    }

    #[test]
    fn not_found_without_suggestions() {
        let err = BodegaError::NotFound(NotFoundError {
            requested: "zzz".to_string(),
            suggestions: vec![],
        });

        let msg = format!("{err}");
        assert!(!msg.contains("Did you mean"));
        assert!(msg.contains("Hint"));
    }

    #[test]
    fn type_mismatch_display() {
        let err = BodegaError::TypeMismatch {
            id: "logger".to_string(),
            expected: "FileLogger".to_string(),
            actual: "ConsoleLogger".to_string(),
        };

        let msg = format!("{err}");
        assert!(msg.contains("logger"));
        assert!(msg.contains("FileLogger"));
        assert!(msg.contains("ConsoleLogger"));
    }

    #[test]
    fn production_preserves_source() {
        use std::error::Error;

        let err = BodegaError::production(std::io::Error::other("disk on fire"));
        let msg = format!("{err}");
        assert!(msg.contains("production failed"));
        assert!(err.source().is_some());
    }
}
