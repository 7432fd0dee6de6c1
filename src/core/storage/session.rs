//! Session-scoped store handle.
//!
//! A session holds at most one [`Store`] snapshot. Readers clone the
//! `Arc` and keep using their snapshot even if the session moves on;
//! writers swap the whole reference under a write lock. A store is
//! never mutated in place.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::core::error::Result;
use crate::core::storage::Store;

/// Holder of the current document store
#[derive(Debug, Default)]
pub struct Session {
    current: RwLock<Option<Arc<Store>>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current store, if a document is loaded
    pub fn current(&self) -> Option<Arc<Store>> {
        self.read().clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.read().is_some()
    }

    /// Swap in a new store, returning the previous one
    pub fn replace(&self, store: Store) -> Option<Arc<Store>> {
        let store = Arc::new(store);
        tracing::debug!(
            "Session now holds '{}' ({} chunks)",
            store.source(),
            store.chunks().len()
        );
        self.write().replace(store)
    }

    /// Build a store with `f` and swap it in only if building succeeds.
    ///
    /// On error the previous store stays in place and the error is
    /// returned unchanged. The lock is not held while `f` runs.
    pub fn ingest_with<F>(&self, f: F) -> Result<Arc<Store>>
    where
        F: FnOnce() -> Result<Store>,
    {
        match f() {
            Ok(store) => {
                let store = Arc::new(store);
                *self.write() = Some(Arc::clone(&store));
                Ok(store)
            }
            Err(e) => {
                if let Some(previous) = self.read().as_ref() {
                    tracing::warn!("Ingestion failed, keeping '{}': {}", previous.source(), e);
                }
                Err(e)
            }
        }
    }

    /// Drop the current store
    pub fn clear(&self) -> Option<Arc<Store>> {
        self.write().take()
    }

    // A panic while holding the lock cannot leave a half-written
    // Option<Arc<_>>, so poisoned guards are safe to reuse.
    fn read(&self) -> RwLockReadGuard<'_, Option<Arc<Store>>> {
        self.current.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Option<Arc<Store>>> {
        self.current.write().unwrap_or_else(|e| e.into_inner())
    }
}
