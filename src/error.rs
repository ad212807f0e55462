//! Feedback Errors
//!
//! Error taxonomy shared by the store and the export helpers.

use std::fmt;

/// Common result type for feedback operations
pub type FeedbackResult<T> = Result<T, FeedbackError>;

/// Reasons a submission is rejected before a record exists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Rating left at the unset sentinel (0)
    RatingMissing,
    RatingOutOfRange(u8),
    /// Name empty after trimming
    NameMissing,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::RatingMissing => write!(f, "Please select a rating"),
            ValidationError::RatingOutOfRange(value) => {
                write!(f, "Rating must be between 1 and 5 (got {})", value)
            }
            ValidationError::NameMissing => write!(f, "Please enter your name"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    Validation(ValidationError),
    /// Storage backend missing or refused the operation
    StorageUnavailable(String),
    /// Persisted blob present but not a list of feedback records
    CorruptData(String),
    Serialization(String),
    NothingToExport,
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedbackError::Validation(err) => write!(f, "{}", err),
            FeedbackError::StorageUnavailable(msg) => write!(f, "Storage unavailable: {}", msg),
            FeedbackError::CorruptData(msg) => write!(f, "Saved feedback could not be read: {}", msg),
            FeedbackError::Serialization(msg) => write!(f, "Serialization failed: {}", msg),
            FeedbackError::NothingToExport => write!(f, "No feedback to export"),
        }
    }
}

impl std::error::Error for FeedbackError {}

impl From<ValidationError> for FeedbackError {
    fn from(err: ValidationError) -> Self {
        FeedbackError::Validation(err)
    }
}
