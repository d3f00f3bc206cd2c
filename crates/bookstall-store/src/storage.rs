//! # Cart Storage
//!
//! The seam between the cart aggregate and wherever its line list is
//! persisted. One named blob, JSON-serialized, holding the ordered
//! line list; serialize-then-deserialize yields an equivalent cart.
//!
//! Storage is synchronous and blocking from the store's perspective:
//! every mutation persists immediately, with no queuing or batching.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use bookstall_core::cart::CartLine;

use crate::error::StoreResult;

// =============================================================================
// Storage Seam
// =============================================================================

/// Durable home for the cart's line list.
///
/// `load` distinguishes "nothing persisted yet" (`Ok(None)`) from a
/// blob that exists but cannot be read or parsed (`Err`); the caller
/// decides how to recover (the `CartStore` falls back to empty either
/// way).
pub trait CartStorage {
    /// Reads the persisted line list, if any.
    fn load(&self) -> StoreResult<Option<Vec<CartLine>>>;

    /// Replaces the persisted line list with `lines`.
    fn save(&mut self, lines: &[CartLine]) -> StoreResult<()>;
}

// =============================================================================
// JSON File Storage
// =============================================================================

/// File-backed storage: one JSON blob at `<dir>/<name>.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Creates storage for the blob named `name` under `dir`.
    pub fn new(dir: impl AsRef<Path>, name: &str) -> Self {
        JsonFileStorage {
            path: dir.as_ref().join(format!("{name}.json")),
        }
    }

    /// The blob file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CartStorage for JsonFileStorage {
    fn load(&self) -> StoreResult<Option<Vec<CartLine>>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let lines = serde_json::from_str(&raw)?;
        Ok(Some(lines))
    }

    fn save(&mut self, lines: &[CartLine]) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let blob = serde_json::to_string(lines)?;
        fs::write(&self.path, blob)?;
        Ok(())
    }
}

// =============================================================================
// In-Memory Storage
// =============================================================================

/// In-process storage for tests and demos.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    blob: Option<String>,
}

impl MemoryStorage {
    /// Creates empty in-memory storage.
    pub fn new() -> Self {
        MemoryStorage { blob: None }
    }

    /// Creates storage pre-seeded with a raw blob (for corrupt-data tests).
    pub fn with_blob(blob: &str) -> Self {
        MemoryStorage {
            blob: Some(blob.to_string()),
        }
    }

    /// Returns the raw persisted blob, if any.
    pub fn blob(&self) -> Option<&str> {
        self.blob.as_deref()
    }
}

impl CartStorage for MemoryStorage {
    fn load(&self) -> StoreResult<Option<Vec<CartLine>>> {
        match &self.blob {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    fn save(&mut self, lines: &[CartLine]) -> StoreResult<()> {
        self.blob = Some(serde_json::to_string(lines)?);
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use bookstall_core::cart::Cart;
    use bookstall_core::types::Product;

    fn sample_lines() -> Vec<CartLine> {
        let mut cart = Cart::new();
        cart.add(&Product::new("latest-1", "Safe House", "Ellah Allfrey", 5000), 2)
            .unwrap();
        cart.add(&Product::new("pride-3", "Wild Imperfections", "Natalia", 14_000), 1)
            .unwrap();
        cart.lines().to_vec()
    }

    #[test]
    fn test_file_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonFileStorage::new(dir.path(), "bookstall-cart");

        assert!(storage.load().unwrap().is_none());

        let lines = sample_lines();
        storage.save(&lines).unwrap();

        let restored = storage.load().unwrap().unwrap();
        assert_eq!(restored, lines);
        assert!(storage.path().ends_with("bookstall-cart.json"));
    }

    #[test]
    fn test_file_storage_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("state").join("cart");
        let mut storage = JsonFileStorage::new(&nested, "bookstall-cart");

        storage.save(&sample_lines()).unwrap();
        assert!(storage.load().unwrap().is_some());
    }

    #[test]
    fn test_file_storage_corrupt_blob_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path(), "bookstall-cart");
        std::fs::write(storage.path(), "{{{ not json").unwrap();

        assert!(storage.load().is_err());
    }

    #[test]
    fn test_memory_storage_round_trip() {
        let mut storage = MemoryStorage::new();
        assert!(storage.load().unwrap().is_none());

        let lines = sample_lines();
        storage.save(&lines).unwrap();
        assert_eq!(storage.load().unwrap().unwrap(), lines);
    }

    #[test]
    fn test_memory_storage_corrupt_blob_is_an_error() {
        let storage = MemoryStorage::with_blob("[1, 2");
        assert!(storage.load().is_err());
    }
}
