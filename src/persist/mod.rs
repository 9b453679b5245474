//! Persistence adapter mirroring a reducer's state into a key-value store.
//!
//! On open, the stored snapshot (if any) is decoded and loaded through the
//! reducer's hydrate action. Absent, unreadable or corrupt snapshots fall
//! back to the reducer's initial state. After every dispatch the new state
//! is encoded and written back. Storage failures are logged and swallowed:
//! persistence is best-effort and never blocks a state change.
//!
//! # Example
//!
//! ```rust
//! use storefront::cart::{CartAction, CartReducer, CART_STORAGE_KEY};
//! use storefront::model::Product;
//! use storefront::persist::{PersistentStore, SnapshotFormat};
//! use storefront::storage::MemoryStore;
//!
//! let storage = MemoryStore::new();
//! let mut cart = PersistentStore::open(
//!     CartReducer::new(),
//!     storage.clone(),
//!     CART_STORAGE_KEY,
//!     SnapshotFormat::Json,
//! );
//! cart.dispatch(CartAction::add(Product::new("mug", "Mug", 8.0), 2));
//!
//! // A second container over the same storage sees the saved cart.
//! let reopened = PersistentStore::open(
//!     CartReducer::new(),
//!     storage,
//!     CART_STORAGE_KEY,
//!     SnapshotFormat::Json,
//! );
//! assert_eq!(reopened.state().quantity_of("mug"), 2);
//! ```

mod error;
mod snapshot;

pub use error::SnapshotError;
pub use snapshot::SnapshotFormat;

use crate::core::{Hydrate, State, Store};
use crate::storage::KeyValueStore;
use tracing::{debug, warn};

/// A [`Store`] whose state survives restarts.
pub struct PersistentStore<R: Hydrate, K: KeyValueStore> {
    store: Store<R>,
    storage: K,
    key: String,
    format: SnapshotFormat,
}

impl<R: Hydrate, K: KeyValueStore> PersistentStore<R, K> {
    /// Open the container, hydrating from `storage[key]` when possible.
    pub fn open(reducer: R, storage: K, key: impl Into<String>, format: SnapshotFormat) -> Self {
        let key = key.into();
        let mut persisted = Self {
            store: Store::new(reducer),
            storage,
            key,
            format,
        };

        if let Some(snapshot) = persisted.read_snapshot() {
            persisted.dispatch(R::hydrate(snapshot));
        }

        persisted
    }

    fn read_snapshot(&self) -> Option<R::State> {
        load_snapshot(&self.storage, &self.key, self.format)
    }

    fn write_snapshot(&self) {
        let state = self.store.state();
        let bytes = match self.format.encode(state) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to encode snapshot");
                return;
            }
        };

        match self.storage.set(&self.key, &bytes) {
            Ok(()) => debug!(key = %self.key, state = state.name(), bytes = bytes.len(), "snapshot saved"),
            Err(e) => warn!(key = %self.key, error = %e, "failed to save snapshot"),
        }
    }

    /// Apply `action` and write the resulting state back to storage.
    pub fn dispatch(&mut self, action: R::Action) -> &R::State {
        self.store.dispatch(action);
        self.write_snapshot();
        self.store.state()
    }

    pub fn state(&self) -> &R::State {
        self.store.state()
    }

    pub fn reducer(&self) -> &R {
        self.store.reducer()
    }

    pub fn storage(&self) -> &K {
        &self.storage
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn format(&self) -> SnapshotFormat {
        self.format
    }
}

/// Read and decode the snapshot under `key`.
///
/// Missing, unreadable and undecodable snapshots all yield `None`; the
/// latter two are logged.
pub fn load_snapshot<S, K>(storage: &K, key: &str, format: SnapshotFormat) -> Option<S>
where
    S: State,
    K: KeyValueStore,
{
    let bytes = match storage.get(key) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => {
            debug!(key, "no stored snapshot, starting fresh");
            return None;
        }
        Err(e) => {
            warn!(key, error = %e, "failed to read stored snapshot");
            return None;
        }
    };

    match format.decode(&bytes) {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            warn!(key, format = %format, error = %e, "discarding unreadable snapshot");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::{CartAction, CartReducer, CART_STORAGE_KEY};
    use crate::model::Product;
    use crate::storage::{MemoryStore, StorageError};

    /// Store whose writes always fail.
    struct ReadOnly(MemoryStore);

    impl KeyValueStore for ReadOnly {
        fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
            self.0.get(key)
        }

        fn set(&self, key: &str, _value: &[u8]) -> Result<(), StorageError> {
            Err(StorageError::InvalidKey(key.to_string()))
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.0.remove(key)
        }
    }

    /// Store whose reads always fail.
    struct Unreadable(MemoryStore);

    impl KeyValueStore for Unreadable {
        fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
            Err(StorageError::Io {
                key: key.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::Other, "device unavailable"),
            })
        }

        fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
            self.0.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.0.remove(key)
        }
    }

    #[test]
    fn read_failure_starts_empty_and_keeps_writing() {
        let inner = MemoryStore::new();
        inner.set(CART_STORAGE_KEY, b"{}").unwrap();
        let mut store = PersistentStore::open(
            CartReducer::new(),
            Unreadable(inner.clone()),
            CART_STORAGE_KEY,
            SnapshotFormat::Json,
        );
        assert!(store.state().is_empty());
        assert!(load_snapshot::<crate::cart::Cart, _>(store.storage(), CART_STORAGE_KEY, SnapshotFormat::Json).is_none());

        store.dispatch(CartAction::add(Product::new("a", "A", 3.0), 2));
        let saved: crate::cart::Cart =
            load_snapshot(&inner, CART_STORAGE_KEY, SnapshotFormat::Json).unwrap();
        assert_eq!(saved.quantity_of("a"), 2);
    }

    #[test]
    fn missing_snapshot_starts_empty() {
        let store = PersistentStore::open(
            CartReducer::new(),
            MemoryStore::new(),
            CART_STORAGE_KEY,
            SnapshotFormat::Json,
        );
        assert!(store.state().is_empty());
        assert!(store.storage().is_empty());
    }

    #[test]
    fn corrupt_snapshot_falls_back_to_empty() {
        let storage = MemoryStore::new();
        storage.set(CART_STORAGE_KEY, b"{\"items\": 12").unwrap();

        let store = PersistentStore::open(
            CartReducer::new(),
            storage,
            CART_STORAGE_KEY,
            SnapshotFormat::Json,
        );
        assert!(store.state().is_empty());
    }

    #[test]
    fn every_dispatch_is_written_back() {
        let storage = MemoryStore::new();
        let mut store = PersistentStore::open(
            CartReducer::new(),
            storage.clone(),
            CART_STORAGE_KEY,
            SnapshotFormat::Json,
        );

        store.dispatch(CartAction::add(Product::new("a", "A", 3.0), 2));
        let saved: crate::cart::Cart =
            load_snapshot(&storage, CART_STORAGE_KEY, SnapshotFormat::Json).unwrap();
        assert_eq!(&saved, store.state());

        store.dispatch(CartAction::Clear);
        let saved: crate::cart::Cart =
            load_snapshot(&storage, CART_STORAGE_KEY, SnapshotFormat::Json).unwrap();
        assert!(saved.is_empty());
    }

    #[test]
    fn write_failures_do_not_block_state_changes() {
        let mut store = PersistentStore::open(
            CartReducer::new(),
            ReadOnly(MemoryStore::new()),
            CART_STORAGE_KEY,
            SnapshotFormat::Json,
        );

        let state = store.dispatch(CartAction::add(Product::new("a", "A", 3.0), 1));
        assert_eq!(state.total_items(), 1);
    }

    #[test]
    fn format_mismatch_is_treated_as_corrupt() {
        let storage = MemoryStore::new();
        let mut writer = PersistentStore::open(
            CartReducer::new(),
            storage.clone(),
            CART_STORAGE_KEY,
            SnapshotFormat::Binary,
        );
        writer.dispatch(CartAction::add(Product::new("a", "A", 3.0), 1));

        let reader = PersistentStore::open(
            CartReducer::new(),
            storage,
            CART_STORAGE_KEY,
            SnapshotFormat::Json,
        );
        assert!(reader.state().is_empty());
    }
}
