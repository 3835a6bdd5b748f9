use super::{checked_path, ObjectStore};
use crate::common::StorageError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory store for tests.
#[derive(Default)]
pub struct MemoryStore {
    objects: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.objects
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.objects
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn put(&self, path: &str, bytes: &[u8]) -> Result<(), StorageError> {
        let path = checked_path(path)?;
        self.objects
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(path.to_string(), bytes.to_vec());
        Ok(())
    }

    async fn delete(&self, path: &str) -> Result<(), StorageError> {
        let path = checked_path(path)?;
        self.objects
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(path);
        Ok(())
    }

    fn public_url(&self, path: &str) -> String {
        format!("/media/{path}")
    }

    fn object_path(&self, url: &str) -> Option<String> {
        url.strip_prefix("/media/").map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stores_and_deletes_objects() {
        let store = MemoryStore::new();
        store.put("story/1_a.jpg", b"bytes").await.unwrap();
        assert!(store.contains("story/1_a.jpg"));

        store.delete("story/1_a.jpg").await.unwrap();
        assert!(store.is_empty());

        // Deleting again stays quiet.
        store.delete("story/1_a.jpg").await.unwrap();
    }
}
