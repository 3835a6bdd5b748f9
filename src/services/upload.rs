//! Photo upload and removal across the two backing stores.
//!
//! A photo lives in two places: its binary in the object store and its
//! metadata row in Postgres. Upload writes the binary first and undoes
//! it if the metadata write fails. Removal treats the metadata row as
//! authoritative and deletes the binary on a best-effort basis.

use crate::common::{PhotoError, UploadError};
use crate::db::photos;
use crate::models::{PhotoCreate, PhotoRecord, PhotoSection};
use crate::storage::ObjectStore;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

/// A file received from the upload form, with its optional text slots.
pub struct NewUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub caption: Option<String>,
    pub description: Option<String>,
}

/// Strips path components and characters that do not belong in an
/// object name. An empty result falls back to "photo".
pub fn sanitize_file_name(raw: &str) -> String {
    let base = raw.rsplit(['/', '\\']).next().unwrap_or(raw);
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim_matches(['.', '_']).to_string();

    if cleaned.is_empty() {
        "photo".to_string()
    } else {
        cleaned
    }
}

/// `{section}/{millis}_{name}`; the timestamp keeps repeated uploads of
/// the same file from colliding.
pub fn object_path(section: PhotoSection, file_name: &str) -> String {
    format!(
        "{}/{}_{}",
        section.as_str(),
        Utc::now().timestamp_millis(),
        sanitize_file_name(file_name)
    )
}

/// Stores a new photo: binary first, then the metadata row appended at
/// the end of the section's display order.
///
/// If the metadata write fails the stored binary is removed again, so a
/// failed upload leaves nothing behind.
pub async fn upload_photo(
    pool: &PgPool,
    store: &dyn ObjectStore,
    section: PhotoSection,
    upload: NewUpload,
) -> Result<PhotoRecord, UploadError> {
    if upload.bytes.is_empty() {
        return Err(UploadError::EmptyUpload);
    }

    let path = object_path(section, &upload.file_name);
    store.put(&path, &upload.bytes).await?;

    match insert_metadata(pool, store, section, &path, &upload).await {
        Ok(record) => Ok(record),
        Err(e) => {
            if let Err(cleanup) = store.delete(&path).await {
                log::warn!("Failed to remove orphaned upload {path}: {cleanup}");
            }
            Err(e.into())
        }
    }
}

async fn insert_metadata(
    pool: &PgPool,
    store: &dyn ObjectStore,
    section: PhotoSection,
    path: &str,
    upload: &NewUpload,
) -> Result<PhotoRecord, sqlx::Error> {
    let count = photos::count_photos(pool, section).await?;

    // Appending as count + 1 can race with a concurrent upload and
    // produce a duplicate index; ties break on created_at, so the
    // display order stays stable either way.
    let photo = PhotoCreate {
        section,
        src: store.public_url(path),
        caption: upload.caption.clone(),
        description: upload.description.clone(),
        order_index: (count + 1) as i32,
    };

    photos::insert_photo(pool, &photo).await
}

/// Deletes a photo. The metadata row decides success; a binary that
/// cannot be removed is logged and left for manual cleanup.
pub async fn remove_photo(
    pool: &PgPool,
    store: &dyn ObjectStore,
    id: Uuid,
) -> Result<PhotoRecord, PhotoError> {
    let Some(photo) = photos::get_photo(pool, id).await? else {
        return Err(PhotoError::NotFound(id));
    };

    match store.object_path(&photo.src) {
        Some(path) => {
            if let Err(e) = store.delete(&path).await {
                log::warn!("Failed to delete stored binary {path}: {e}");
            }
        }
        None => log::warn!("Photo {id} src {} is not a store URL", photo.src),
    }

    if !photos::delete_photo(pool, id).await? {
        return Err(PhotoError::NotFound(id));
    }

    Ok(photo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_lose_paths_and_odd_characters() {
        assert_eq!(sanitize_file_name("foto pernikahan.jpg"), "foto_pernikahan.jpg");
        assert_eq!(sanitize_file_name("C:\\Users\\a\\b.png"), "b.png");
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("..."), "photo");
        assert_eq!(sanitize_file_name(""), "photo");
    }

    #[test]
    fn object_paths_stay_inside_the_section() {
        let path = object_path(PhotoSection::Gallery, "../x.jpg");
        assert!(path.starts_with("gallery/"));
        assert!(!path.contains(".."));
        assert!(path.ends_with("_x.jpg"));
    }
}
