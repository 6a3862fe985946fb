//! Process-local credential cache.
//!
//! Holds the session token for as long as the process lives. Nothing is
//! written to disk, and the master password itself is never stored here.

use std::sync::{PoisonError, RwLock};

use vault_core::CredentialCache;

/// [`CredentialCache`] backed by process memory.
#[derive(Debug, Default)]
pub struct SessionCache {
    token: RwLock<Option<String>>,
}

impl SessionCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a token is cached.
    pub fn is_authenticated(&self) -> bool {
        self.get().is_some()
    }
}

impl CredentialCache for SessionCache {
    fn get(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set(&self, token: &str) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_set_get_clear() {
        let cache = SessionCache::new();
        assert!(cache.get().is_none());
        assert!(!cache.is_authenticated());

        cache.set("token-1");
        assert_eq!(cache.get().as_deref(), Some("token-1"));
        cache.set("token-2");
        assert_eq!(cache.get().as_deref(), Some("token-2"));

        cache.clear();
        assert!(cache.get().is_none());
    }

    #[test]
    fn test_shared_across_threads() {
        let cache: Arc<dyn CredentialCache> = Arc::new(SessionCache::new());
        let writer = Arc::clone(&cache);
        std::thread::spawn(move || writer.set("from-thread"))
            .join()
            .unwrap();
        assert_eq!(cache.get().as_deref(), Some("from-thread"));
    }
}
