//! Router error type.
//!
//! Manifest and startup failures end in the content failure message; a
//! missing route is only logged.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors raised while loading the manifest or navigating.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SiteError {
    /// The manifest request never produced a response.
    #[error("manifest request failed: {0}")]
    ManifestFetch(String),

    /// The manifest endpoint answered with a non-success status.
    #[error("manifest request failed: {0}")]
    ManifestStatus(u16),

    /// The manifest body is not valid JSON of the expected shape.
    #[error("malformed manifest: {0}")]
    ManifestParse(String),

    /// A container the router drives is missing from the document.
    #[error("missing element: #{0}")]
    MissingElement(String),

    #[error("Page not found: {0}")]
    RouteNotFound(String),
}

impl SiteError {
    /// Whether this error means the manifest never became usable.
    #[must_use]
    pub fn is_load_failure(&self) -> bool {
        !matches!(self, Self::RouteNotFound(_))
    }
}
