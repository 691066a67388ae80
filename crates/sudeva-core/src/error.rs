//! Error types for the Sudeva Engineers site

use thiserror::Error;

/// Why a form failed validation.
///
/// This is the only error a visitor can cause. It is never logged as a
/// failure; it only moves the form's status to `Error` for a while.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Contact form name is empty after trimming
    #[error("name is required")]
    MissingName,

    /// Email field is empty after trimming
    #[error("email is required")]
    MissingEmail,

    /// Email does not look like local@domain.tld
    #[error("email address is not valid")]
    InvalidEmail,

    /// Contact form message is empty after trimming
    #[error("message is required")]
    MissingMessage,
}

/// Main error type for site operations
#[derive(Error, Debug)]
pub enum SiteError {
    /// An image set must hold at least one image
    #[error("Image set must not be empty")]
    EmptyImageSet,

    /// Form validation failed
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration value out of range or inconsistent
    #[error("Config error: {0}")]
    Config(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Tracing subscriber could not be installed
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type alias using SiteError
pub type SiteResult<T> = Result<T, SiteError>;
