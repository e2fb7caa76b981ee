//! Error types for sitemap generation.

use thiserror::Error;

/// Main error type for sitemap generation operations.
#[derive(Debug, Error)]
pub enum SitemapError {
    /// A value is outside of its allowed set (change frequency, options, environment overrides).
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// Input that cannot become an entry, or an entry that can never fit into a single file.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Output directory creation, file writing or compression failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The XML writer failed to emit an event.
    #[error("XML rendering error: {0}")]
    Xml(String),
}

/// Type alias for Result with SitemapError
pub type Result<T> = std::result::Result<T, SitemapError>;
