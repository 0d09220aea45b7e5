//! Error types for the contacts backend with categorization:
//!
//! - **Validation errors**: malformed input, recovered at the boundary (400)
//! - **Duplicate errors**: phone number uniqueness violations (400)
//! - **NotFound errors**: operations targeting a nonexistent id (404)
//! - **Database errors**: any other storage failure, opaque to callers (500)
//!
//! Lower layers return these unchanged; the one translation to a status
//! code happens at the HTTP boundary via [`Error::status_code`].

use thiserror::Error as ThisError;

/// Result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type that can represent any failure in the system.
#[derive(Debug, Clone, ThisError)]
pub enum Error {
    /// Input validation failure on a named field
    #[error("field '{field}' {reason}")]
    Validation {
        /// Name of the offending input field
        field: &'static str,
        /// Human-readable reason
        reason: String,
    },
    /// Phone number collides with an existing live contact
    #[error("contact number {phone_number} already exists")]
    Duplicate {
        /// The colliding phone number, when known
        phone_number: String,
    },
    /// Operation targeted a nonexistent id
    #[error("the contact {id} does not exist")]
    NotFound {
        /// The id that matched no row
        id: i64,
    },
    /// Storage or backing-store failure (logged for operators)
    #[error("database error: {0}")]
    Database(String),
    /// Unknown error (fallback)
    #[error("unknown error: {0}")]
    Unknown(String),
}

// Convenience constructors using functional patterns
impl Error {
    /// Create a validation error for an empty/missing required field.
    pub fn required(field: &'static str) -> Self {
        Self::Validation {
            field,
            reason: "is required".to_string(),
        }
    }

    /// Create a validation error with an explicit reason.
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Create a duplicate-phone-number error.
    pub fn duplicate(phone_number: impl Into<String>) -> Self {
        Self::Duplicate {
            phone_number: phone_number.into(),
        }
    }

    /// Create a not-found error for a contact id.
    pub const fn not_found(id: i64) -> Self {
        Self::NotFound { id }
    }

    /// Create a database error.
    pub fn database_error(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    /// Create an unknown error.
    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::Unknown(msg.into())
    }

    /// Returns the HTTP status code for this error kind.
    ///
    /// Status scheme:
    /// - 400: client fault (validation failure, duplicate phone number)
    /// - 404: not found (nonexistent contact id)
    /// - 500: internal (storage failure, unknown)
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation { .. } | Self::Duplicate { .. } => 400,
            Self::NotFound { .. } => 404,
            Self::Database(_) | Self::Unknown(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_required_field() {
        let err = Error::required("name");
        assert_eq!(err.to_string(), "field 'name' is required");
    }

    #[test]
    fn test_error_display_duplicate() {
        let err = Error::duplicate("+5731111");
        assert_eq!(err.to_string(), "contact number +5731111 already exists");
    }

    #[test]
    fn test_error_display_not_found() {
        let err = Error::not_found(42);
        assert_eq!(err.to_string(), "the contact 42 does not exist");
    }

    #[test]
    fn test_error_display_database_error() {
        let err = Error::database_error("connection failed");
        assert_eq!(err.to_string(), "database error: connection failed");
    }

    #[test]
    fn test_status_code_client_errors() {
        assert_eq!(Error::required("name").status_code(), 400);
        assert_eq!(Error::duplicate("123").status_code(), 400);
    }

    #[test]
    fn test_status_code_not_found() {
        assert_eq!(Error::not_found(7).status_code(), 404);
    }

    #[test]
    fn test_status_code_internal() {
        assert_eq!(Error::database_error("boom").status_code(), 500);
        assert_eq!(Error::unknown("boom").status_code(), 500);
    }
}
