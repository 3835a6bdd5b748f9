use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum GeneralError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Password hashing error: {0}")]
    Hash(argon2::password_hash::Error),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid object path: {0:?}")]
    InvalidPath(String),
}

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Error, Debug)]
pub enum PhotoError {
    #[error("Photo {0} not found")]
    NotFound(Uuid),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("Uploaded file is empty")]
    EmptyUpload,

    /// Binary storage failed; no metadata was written.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Metadata write failed after the binary was stored; the binary has
    /// been removed again (best effort).
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
