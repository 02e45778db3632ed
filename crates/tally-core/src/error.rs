//! # Error Types
//!
//! Validation error types for tally-core.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, reason)
//! 3. Errors are enum variants, never String
//! 4. The HTTP layer decides what clients see; these messages are for logs

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Receipt validation errors.
///
/// These errors occur when an inbound receipt document doesn't meet the
/// required shape or field grammars. Any single variant is sufficient to
/// reject the whole document; there is no partial success.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing.
    #[error("{field} is required")]
    Required { field: String },

    /// A sequence that must have at least one element is empty.
    #[error("{field} must not be empty")]
    Empty { field: String },

    /// Field value fails its grammar (pattern, date, time, or currency).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
