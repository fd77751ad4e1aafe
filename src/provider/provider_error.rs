use thiserror::Error;

/// Failure of one provider call. The aggregator records it against the
/// neighborhood in flight and moves on.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProviderError {
    #[error("network error: {0}")]
    Network(String),

    #[error("provider returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("unexpected response: {0}")]
    Parse(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}
