use super::{checked_path, ObjectStore};
use crate::common::StorageError;
use async_trait::async_trait;
use std::path::PathBuf;

/// Filesystem-backed store. Objects land under `root` and are served
/// under `url_prefix` by the static file handler.
pub struct LocalStore {
    root: PathBuf,
    url_prefix: String,
}

impl LocalStore {
    pub fn new(root: impl Into<PathBuf>, url_prefix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            url_prefix: url_prefix.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ObjectStore for LocalStore {
    async fn put(&self, path: &str, bytes: &[u8]) -> Result<(), StorageError> {
        let path = checked_path(path)?;
        let full = self.root.join(path);
        if let Some(parent) = full.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&full, bytes).await?;
        Ok(())
    }

    async fn delete(&self, path: &str) -> Result<(), StorageError> {
        let path = checked_path(path)?;
        match tokio::fs::remove_file(self.root.join(path)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn public_url(&self, path: &str) -> String {
        format!("{}/{}", self.url_prefix, path)
    }

    fn object_path(&self, url: &str) -> Option<String> {
        url.strip_prefix(&self.url_prefix)
            .and_then(|rest| rest.strip_prefix('/'))
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_then_delete_round_trips_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path(), "/media");

        store.put("gallery/1_a.jpg", b"jpeg bytes").await.unwrap();
        let on_disk = dir.path().join("gallery/1_a.jpg");
        assert_eq!(std::fs::read(&on_disk).unwrap(), b"jpeg bytes");

        store.delete("gallery/1_a.jpg").await.unwrap();
        assert!(!on_disk.exists());
    }

    #[tokio::test]
    async fn delete_of_missing_object_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path(), "/media");
        assert!(store.delete("gallery/never_stored.jpg").await.is_ok());
    }

    #[tokio::test]
    async fn traversal_paths_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path(), "/media");
        assert!(store.put("../outside.jpg", b"x").await.is_err());
        assert!(store.delete("/etc/passwd").await.is_err());
    }

    #[test]
    fn urls_map_back_to_object_paths() {
        let store = LocalStore::new("/tmp/media", "/media/");
        let url = store.public_url("story/2_b.png");
        assert_eq!(url, "/media/story/2_b.png");
        assert_eq!(store.object_path(&url).as_deref(), Some("story/2_b.png"));
        assert_eq!(store.object_path("/static/app.css"), None);
    }
}
