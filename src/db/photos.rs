//! Reads and writes of the `dynamic_photos` table.

use crate::models::{PhotoCreate, PhotoRecord, PhotoSection, PhotoTextField};
use sqlx::PgPool;
use uuid::Uuid;

/// All photos in a section, in display order.
pub async fn list_photos(
    pool: &PgPool,
    section: PhotoSection,
) -> Result<Vec<PhotoRecord>, sqlx::Error> {
    sqlx::query_as::<_, PhotoRecord>(
        "SELECT * FROM dynamic_photos WHERE section = $1 ORDER BY order_index ASC, created_at ASC",
    )
    .bind(section)
    .fetch_all(pool)
    .await
}

pub async fn count_photos(pool: &PgPool, section: PhotoSection) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM dynamic_photos WHERE section = $1")
        .bind(section)
        .fetch_one(pool)
        .await
}

pub async fn get_photo(pool: &PgPool, id: Uuid) -> Result<Option<PhotoRecord>, sqlx::Error> {
    sqlx::query_as::<_, PhotoRecord>("SELECT * FROM dynamic_photos WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn insert_photo(
    pool: &PgPool,
    photo: &PhotoCreate,
) -> Result<PhotoRecord, sqlx::Error> {
    sqlx::query_as::<_, PhotoRecord>(
        "INSERT INTO dynamic_photos (section, src, caption, description, order_index)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING *",
    )
    .bind(photo.section)
    .bind(&photo.src)
    .bind(&photo.caption)
    .bind(&photo.description)
    .bind(photo.order_index)
    .fetch_one(pool)
    .await
}

/// Updates one of the photo's text slots. Returns the updated row, or
/// `None` when the photo no longer exists.
pub async fn update_photo_text(
    pool: &PgPool,
    id: Uuid,
    field: PhotoTextField,
    value: Option<&str>,
) -> Result<Option<PhotoRecord>, sqlx::Error> {
    let query = match field {
        PhotoTextField::Caption => {
            "UPDATE dynamic_photos SET caption = $1 WHERE id = $2 RETURNING *"
        }
        PhotoTextField::Description => {
            "UPDATE dynamic_photos SET description = $1 WHERE id = $2 RETURNING *"
        }
    };

    sqlx::query_as::<_, PhotoRecord>(query)
        .bind(value)
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Removes the metadata row. Returns whether a row was actually deleted.
pub async fn delete_photo(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM dynamic_photos WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
