//! Token revocation list: the oracle consulted by the revocation gate.
//!
//! Entries are written by the auth service when a token is invalidated
//! (logout before natural expiry); this side only reads membership.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::{future::Future, pin::Pin};

use crate::services::cache::{CacheClient, CacheError, ValkeyClient};

/// Revocation lookup result:
/// - `Ok(true)`: the token has been revoked
/// - `Ok(false)`: the token is not on the list
/// - `Err(_)`: store failure (callers must treat as fail-closed)
pub trait RevocationList: Send + Sync {
    fn is_revoked<'a>(
        &'a self,
        token: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<bool, RevocationError>> + Send + 'a>>;
}

#[derive(Debug, thiserror::Error)]
pub enum RevocationError {
    #[error(transparent)]
    Cache(#[from] CacheError),
}

/// Valkey-backed revocation list (Redis protocol).
///
/// One `EXISTS` per lookup; entries carry their own TTL on the write side,
/// so nothing here ever expires or deletes keys.
#[derive(Clone)]
pub struct ValkeyRevocationList<C: CacheClient> {
    cache: Arc<C>,
    // Key prefix to avoid collisions across environments
    prefix: String,
}

impl ValkeyRevocationList<ValkeyClient> {
    pub async fn connect(
        url: &str,
        prefix: impl Into<String>,
    ) -> Result<Self, RevocationError> {
        let client = ValkeyClient::new(url).await?;
        Ok(Self::new_with_cache(Arc::new(client), prefix))
    }
}

impl<C: CacheClient> ValkeyRevocationList<C> {
    pub fn new_with_cache(cache: Arc<C>, prefix: impl Into<String>) -> Self {
        Self {
            cache,
            prefix: prefix.into(),
        }
    }

    pub fn key(&self, token: &str) -> String {
        format!("{}:{}", self.prefix, token)
    }
}

impl<C: CacheClient> RevocationList for ValkeyRevocationList<C> {
    fn is_revoked<'a>(
        &'a self,
        token: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<bool, RevocationError>> + Send + 'a>> {
        Box::pin(async move {
            let full_key = self.key(token);
            let revoked = self.cache.exists(&full_key).await?;
            Ok(revoked)
        })
    }
}

/// In-process revocation list for tests and local development.
#[derive(Clone, Default)]
pub struct MemoryRevocationList {
    inner: Arc<Mutex<HashSet<String>>>,
}

impl MemoryRevocationList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn revoke(&self, token: impl Into<String>) {
        self.lock().insert(token.into());
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashSet<String>> {
        // A poisoned lock only means a writer panicked; the set itself is
        // still usable.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl RevocationList for MemoryRevocationList {
    fn is_revoked<'a>(
        &'a self,
        token: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<bool, RevocationError>> + Send + 'a>> {
        Box::pin(async move { Ok(self.lock().contains(token)) })
    }
}
