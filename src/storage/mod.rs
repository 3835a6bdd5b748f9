//! Binary storage for uploaded photos.
//!
//! Metadata lives in Postgres; the bytes themselves go through an
//! [`ObjectStore`]. The default backend writes to the local filesystem,
//! tests use the in-memory one.

pub use local::LocalStore;
pub use memory::MemoryStore;

mod local;
mod memory;

use crate::common::StorageError;
use async_trait::async_trait;

#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Stores `bytes` under `path` and returns nothing; the public URL
    /// is derived separately so callers can persist it.
    async fn put(&self, path: &str, bytes: &[u8]) -> Result<(), StorageError>;

    /// Removes the object. Deleting a path that does not exist is not
    /// an error.
    async fn delete(&self, path: &str) -> Result<(), StorageError>;

    /// URL under which the stored object is served.
    fn public_url(&self, path: &str) -> String;

    /// Object path for a URL previously produced by [`public_url`],
    /// if the URL belongs to this store.
    ///
    /// [`public_url`]: ObjectStore::public_url
    fn object_path(&self, url: &str) -> Option<String>;
}

/// Rejects paths that would escape the store root.
pub(crate) fn checked_path(path: &str) -> Result<&str, StorageError> {
    if path.is_empty()
        || path.starts_with('/')
        || path.split('/').any(|part| part.is_empty() || part == "..")
    {
        return Err(StorageError::InvalidPath(path.to_string()));
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_relative_paths() {
        assert!(checked_path("gallery/1700000000000_foto.jpg").is_ok());
        assert!(checked_path("story/a.png").is_ok());
    }

    #[test]
    fn rejects_escaping_paths() {
        for bad in ["", "/etc/passwd", "a//b", "../x", "gallery/../../x", "a/"] {
            assert!(
                matches!(checked_path(bad), Err(StorageError::InvalidPath(_))),
                "path {bad:?} should be rejected"
            );
        }
    }
}
