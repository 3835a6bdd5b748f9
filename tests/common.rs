#![allow(dead_code)]

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::atomic::{AtomicBool, Ordering};

use undangan::common::StorageError;
use undangan::models::{PhotoCreate, PhotoRecord, PhotoSection};
use undangan::storage::{MemoryStore, ObjectStore};

pub async fn seed_photo(
    pool: &PgPool,
    section: PhotoSection,
    src: &str,
    order_index: i32,
) -> PhotoRecord {
    undangan::db::photos::insert_photo(
        pool,
        &PhotoCreate {
            section,
            src: src.to_string(),
            caption: None,
            description: None,
            order_index,
        },
    )
    .await
    .expect("Failed to seed photo")
}

/// Store whose put/delete can be made to fail on demand; wraps a
/// [`MemoryStore`] so successful calls still record their effect.
pub struct FailingStore {
    pub inner: MemoryStore,
    pub fail_put: AtomicBool,
    pub fail_delete: AtomicBool,
}

impl FailingStore {
    pub fn new() -> Self {
        Self {
            inner: MemoryStore::new(),
            fail_put: AtomicBool::new(false),
            fail_delete: AtomicBool::new(false),
        }
    }

    pub fn fail_puts(&self) {
        self.fail_put.store(true, Ordering::SeqCst);
    }

    pub fn fail_deletes(&self) {
        self.fail_delete.store(true, Ordering::SeqCst);
    }

    fn forced_error(&self, flag: &AtomicBool) -> Option<StorageError> {
        flag.load(Ordering::SeqCst).then(|| {
            StorageError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "injected failure",
            ))
        })
    }
}

#[async_trait]
impl ObjectStore for FailingStore {
    async fn put(&self, path: &str, bytes: &[u8]) -> Result<(), StorageError> {
        if let Some(e) = self.forced_error(&self.fail_put) {
            return Err(e);
        }
        self.inner.put(path, bytes).await
    }

    async fn delete(&self, path: &str) -> Result<(), StorageError> {
        if let Some(e) = self.forced_error(&self.fail_delete) {
            return Err(e);
        }
        self.inner.delete(path).await
    }

    fn public_url(&self, path: &str) -> String {
        self.inner.public_url(path)
    }

    fn object_path(&self, url: &str) -> Option<String> {
        self.inner.object_path(url)
    }
}
