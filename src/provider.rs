//! Transactional access to the store.
//!
//! A single read/write lock around the whole store: writes are mutually
//! exclusive, reads share. Coarse, but correct for an in-memory store; a real
//! database would replace this with its native transaction primitive behind
//! the same `write_tx`/`read_tx` shape, leaving workers and callers
//! untouched.

use tokio::sync::RwLock;

use crate::error::Result;
use crate::store::TournamentStore;

/// Wraps a store with exclusive-write / shared-read closure scopes.
///
/// All store mutation in this crate happens inside [`write_tx`]; all reads
/// happen inside [`read_tx`]. The guard is released when the closure
/// returns, including on unwind.
///
/// [`write_tx`]: StoreProvider::write_tx
/// [`read_tx`]: StoreProvider::read_tx
pub struct StoreProvider<S> {
    store: RwLock<S>,
}

impl<S: TournamentStore> StoreProvider<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }

    /// Run a closure with exclusive access to the store.
    pub async fn write_tx<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&mut S) -> Result<T>,
    {
        let mut store = self.store.write().await;
        op(&mut store)
    }

    /// Run a closure with shared access to the store.
    pub async fn read_tx<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&S) -> Result<T>,
    {
        let store = self.store.read().await;
        op(&store)
    }
}
