//! Best-score persistence
//!
//! The best score is the only value that crosses a durability boundary.
//! Reads default to zero when nothing was ever stored; writes are
//! best-effort and attempted at most once per game-over, with failures
//! logged and swallowed by the caller.

use thiserror::Error;

/// A best-score write failed.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend unavailable")]
    Unavailable,
    #[error("write rejected: {0}")]
    Rejected(String),
    #[cfg(not(target_arch = "wasm32"))]
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Storage boundary for the persisted best score.
pub trait BestScoreStore {
    /// Stored best, `None` when nothing was ever saved.
    fn load(&self) -> Option<u32>;

    /// Persist a new best. Callers treat failure as non-fatal.
    fn store(&mut self, best: u32) -> Result<(), StoreError>;
}

impl<T: BestScoreStore + ?Sized> BestScoreStore for &mut T {
    fn load(&self) -> Option<u32> {
        (**self).load()
    }

    fn store(&mut self, best: u32) -> Result<(), StoreError> {
        (**self).store(best)
    }
}

/// In-memory store for tests and throwaway sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore(Option<u32>);

impl MemoryStore {
    pub fn with_best(best: u32) -> Self {
        Self(Some(best))
    }
}

impl BestScoreStore for MemoryStore {
    fn load(&self) -> Option<u32> {
        self.0
    }

    fn store(&mut self, best: u32) -> Result<(), StoreError> {
        self.0 = Some(best);
        Ok(())
    }
}

/// Store that keeps nothing, for runs that don't care about records.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStore;

impl BestScoreStore for NullStore {
    fn load(&self) -> Option<u32> {
        None
    }

    fn store(&mut self, _best: u32) -> Result<(), StoreError> {
        Ok(())
    }
}

/// LocalStorage-backed store (WASM only).
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "skyflap_best";

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl BestScoreStore for LocalStorageStore {
    fn load(&self) -> Option<u32> {
        let storage = Self::storage()?;
        let raw = storage.get_item(Self::STORAGE_KEY).ok().flatten()?;
        match raw.parse() {
            Ok(best) => {
                log::info!("Loaded best score {best}");
                Some(best)
            }
            Err(_) => {
                log::warn!("Discarding unreadable best score {raw:?}");
                None
            }
        }
    }

    fn store(&mut self, best: u32) -> Result<(), StoreError> {
        let storage = Self::storage().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(Self::STORAGE_KEY, &best.to_string())
            .map_err(|_| StoreError::Rejected("local storage set_item".into()))
    }
}

/// File-backed store for native runs; one JSON integer on disk.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileStore {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl BestScoreStore for FileStore {
    fn load(&self) -> Option<u32> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(best) => Some(best),
            Err(err) => {
                log::warn!(
                    "Ignoring corrupt best-score file {}: {err}",
                    self.path.display()
                );
                None
            }
        }
    }

    fn store(&mut self, best: u32) -> Result<(), StoreError> {
        let json =
            serde_json::to_string(&best).map_err(|err| StoreError::Rejected(err.to_string()))?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::default();
        assert_eq!(store.load(), None);
        store.store(12).unwrap();
        assert_eq!(store.load(), Some(12));
    }

    #[test]
    fn test_null_store_forgets() {
        let mut store = NullStore;
        store.store(99).unwrap();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_file_store_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "skyflap_best_test_{}.json",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);

        let mut store = FileStore::new(&path);
        assert_eq!(store.load(), None);
        store.store(42).unwrap();
        assert_eq!(store.load(), Some(42));

        // A second store over the same path sees the persisted value.
        assert_eq!(FileStore::new(&path).load(), Some(42));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_file_store_ignores_corrupt_contents() {
        let path = std::env::temp_dir().join(format!(
            "skyflap_best_corrupt_{}.json",
            std::process::id()
        ));
        std::fs::write(&path, "not a number").unwrap();
        assert_eq!(FileStore::new(&path).load(), None);
        std::fs::remove_file(&path).unwrap();
    }
}
