//! # Validation Errors
//!
//! Error types for document validation. All variants are local validation
//! failures: none is retryable, none escapes the submission that produced
//! it, and none is fatal to the host process. Correction always requires
//! new user input.

use thiserror::Error;

/// A checkout document validation failure.
///
/// The checkout layer maps each variant to a single user-facing notice
/// and blocks only the current submission.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Input was empty or contained a non-digit character at the point
    /// the check digit is computed.
    #[error("invalid number format: {0:?}")]
    InvalidNumberFormat(String),

    /// Input exceeded the check-digit weight table.
    #[error("number too long: {digits} digits exceeds the 15-digit weight table")]
    NumberTooLong {
        /// Number of digits supplied.
        digits: usize,
    },

    /// A 9-digit NIT is treated as carrying its own check digit. The
    /// system computes and appends the DV itself, so the base number must
    /// be submitted without it.
    #[error("NIT must be submitted without its check digit")]
    NitMustOmitCheckDigit,

    /// Document type outside the recognized enumeration.
    #[error("unknown document type: {0:?}")]
    UnknownDocumentType(String),
}
