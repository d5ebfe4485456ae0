//! Provider traits for the pluggable generation upstreams.

use async_trait::async_trait;

/// Errors from a content provider call.
///
/// Upstream failures are fatal for the request that triggered generation;
/// only parse failures and duplicate titles are retried, and those are
/// handled above this layer.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Network, timeout, or non-2xx response from the upstream.
    #[error("Completion API error: {0}")]
    Upstream(String),

    /// The upstream replied 2xx but the body was not the expected shape.
    #[error("Malformed completion response: {0}")]
    Malformed(String),
}

/// A text-completion backend that can draft an article for a category.
///
/// Returns the raw completion text; parsing the JSON payload out of it is
/// the caller's job (providers differ in how they wrap the payload, the
/// parse logic does not).
#[async_trait]
pub trait ContentProvider: Send + Sync {
    async fn draft(&self, category: &str) -> Result<String, ProviderError>;
}

/// A source of placeholder image URLs for generated articles.
///
/// Pure URL construction; no network call is made at generation time.
pub trait ImageProvider: Send + Sync {
    fn image_url(&self, category: &str) -> String;
}
