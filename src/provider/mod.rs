use std::future::Future;
use std::pin::Pin;

mod gemini;

pub use gemini::Gemini;

/// Failure taxonomy for the upstream generative model.
///
/// Rate-limit and authorization failures are distinguished so the HTTP
/// layer can map them to 429 and 401; everything else is carried with the
/// raw upstream message for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpstreamError {
    #[error("rate limited: {0}")]
    RateLimited(String),
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    #[error("empty response from upstream model")]
    Empty,
    #[error("{0}")]
    Upstream(String),
}

impl UpstreamError {
    /// Classifies an untyped error message by substring inspection.
    ///
    /// Fallback for errors that arrive without an HTTP status (transport
    /// failures, wrapped client errors). The Gemini client maps statuses
    /// directly and only uses this for the status-less path.
    pub fn from_message(message: impl Into<String>) -> Self {
        let message = message.into();
        let lower = message.to_lowercase();
        if lower.contains("429") || lower.contains("quota") {
            return UpstreamError::RateLimited(message);
        }
        if lower.contains("401") || lower.contains("403") {
            return UpstreamError::Unauthorized(message);
        }
        UpstreamError::Upstream(message)
    }
}

pub type GenerateFuture = Pin<Box<dyn Future<Output = Result<String, UpstreamError>> + Send>>;

/// Capability interface over the hosted generative model: one prompt in,
/// generated text out. Tests substitute a stub without a live network call.
pub trait TextModel: Send + Sync {
    fn generate(&self, prompt: String) -> GenerateFuture;
}
