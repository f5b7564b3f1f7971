//! Domain error model.

use thiserror::Error;

/// Result type used across the catalog layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Only the data-access edge produces these. Spec resolution, formatting and
/// recommendations are total and never return an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A product slug did not match the URL-safe slug pattern.
    #[error("invalid slug: {0:?}")]
    InvalidSlug(String),

    /// A URL was malformed or used a disallowed scheme.
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// An upstream catalog document could not be decoded.
    #[error("failed to parse catalog: {0}")]
    Parse(String),

    /// A requested product was not found.
    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn invalid_slug(slug: impl Into<String>) -> Self {
        Self::InvalidSlug(slug.into())
    }

    pub fn invalid_url(msg: impl Into<String>) -> Self {
        Self::InvalidUrl(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
