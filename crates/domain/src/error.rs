//! Unified error types for the domain layer
//!
//! Provides a common error type for every board operation, so the engine can
//! map failures to response codes without inspecting strings.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid template or schedule values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Referenced character, task, or template does not exist
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Parse error (for vocabulary keys)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for rule violations.
    ///
    /// Use this when a constructor receives values it cannot accept:
    /// - Empty task names
    /// - Duplicate template ids within a cycle
    /// - Out-of-range schedule settings
    ///
    /// # Example
    /// ```ignore
    /// if name.trim().is_empty() {
    ///     return Err(DomainError::validation("Task name cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Check if this is a not found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("name cannot be empty");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(err.to_string(), "Validation failed: name cannot be empty");
    }

    #[test]
    fn test_not_found_error() {
        let err = DomainError::not_found("Task", "999");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Entity not found: Task with id 999");
    }

    #[test]
    fn test_parse_error() {
        let err = DomainError::parse("Unknown cycle: monthly");
        assert!(matches!(err, DomainError::Parse(_)));
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("monthly"));
    }
}
