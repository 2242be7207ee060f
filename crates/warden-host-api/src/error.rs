use thiserror::Error;

/// Errors surfaced by [`OptionStore`](crate::store::OptionStore)
/// implementations. The gate never catches or retries these; they propagate
/// to whoever invoked the operation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying store infrastructure failed.
    #[error("storage backend error: {0}")]
    Backend(String),

    /// A value could not be serialized for storage.
    #[error("option encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}
