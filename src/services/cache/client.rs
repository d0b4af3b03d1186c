//! Cache client interface used by higher-level services (token revocation, etc.).
use async_trait::async_trait;
use thiserror::Error;

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Cache-layer errors (transport/command).
///
/// Note:
/// - Kept independent from `AppError` so callers decide how to fail
///   (fail-closed for the revocation gate, fail-open for metrics, etc.).
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache connection error: {0}")]
    BackendConnection(String),
    #[error("cache command error: {0}")]
    BackendCommand(String),
}

/// A minimal cache interface.
///
/// This is intentionally small and string-keyed:
/// - The revocation list only needs a membership check (`EXISTS`).
/// - Other features can add methods later, but keep the surface area small.
///
/// Implementations must be cheap to clone (typically `Arc<...>` inside).
#[async_trait]
pub trait CacheClient: Clone + Send + Sync + 'static {
    // Returns the cache backend name (for logging/metrics).
    fn backend_name(&self) -> &'static str;

    // Whether the key exists.
    async fn exists(&self, key: &str) -> CacheResult<bool>;
}
