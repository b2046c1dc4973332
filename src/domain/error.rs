//! Error types for the Bookcase plugin.
//!
//! This module defines the centralized error type [`BookcaseError`] and a type alias
//! [`Result`] used by every fallible operation in the crate. Errors only arise while
//! loading external inputs (catalog and palette files, configuration); the browsing
//! operations themselves are infallible.

use thiserror::Error;

/// The main error type for Bookcase plugin operations.
///
/// # Examples
///
/// ```
/// use bookcase::domain::BookcaseError;
///
/// fn validate_page_size(size: usize) -> Result<(), BookcaseError> {
///     if size == 0 {
///         return Err(BookcaseError::Config("page_size must be positive".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(validate_page_size(0).is_err());
/// ```
#[derive(Debug, Error)]
pub enum BookcaseError {
    /// The catalog content is structurally valid JSON but violates a catalog rule,
    /// such as a book referencing an unknown author or an unparseable timestamp.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog JSON could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Palette parsing failed (bad TOML or malformed color value).
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Bookcase operations.
pub type Result<T> = std::result::Result<T, BookcaseError>;
