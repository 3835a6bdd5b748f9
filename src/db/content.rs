//! Reads and writes of the `editable_content` table.
//!
//! Stored fields are merged over the built-in defaults on every read, so
//! a record only ever needs to hold fields that were actually edited.

use crate::models::{default_fields, ContentFields, ContentRecord};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(FromRow)]
struct ContentRow {
    id: Uuid,
    content_json: Json<ContentFields>,
}

/// Loads one section, layering any stored fields over the defaults.
pub async fn get_content(pool: &PgPool, section: &str) -> Result<ContentRecord, sqlx::Error> {
    let row = sqlx::query_as::<_, ContentRow>(
        "SELECT id, content_json FROM editable_content WHERE section_name = $1",
    )
    .bind(section)
    .fetch_optional(pool)
    .await?;

    let mut fields = default_fields(section);
    let id = match row {
        Some(row) => {
            fields.extend(row.content_json.0);
            Some(row.id)
        }
        None => None,
    };

    Ok(ContentRecord {
        id,
        section: section.to_string(),
        fields,
    })
}

/// Like [`get_content`], but falls back to the defaults when the query
/// fails so a page render never breaks on a content read.
pub async fn get_content_or_default(pool: &PgPool, section: &str) -> ContentRecord {
    match get_content(pool, section).await {
        Ok(record) => record,
        Err(e) => {
            log::error!("Failed to load content for section {section}: {e}");
            ContentRecord {
                id: None,
                section: section.to_string(),
                fields: default_fields(section),
            }
        }
    }
}

/// Commits one field edit, creating the section row on first write.
///
/// Returns the updated record so the caller can re-render from it.
pub async fn update_field(
    pool: &PgPool,
    section: &str,
    field: &str,
    value: &str,
) -> Result<ContentRecord, sqlx::Error> {
    let mut record = get_content(pool, section).await?;
    record
        .fields
        .insert(field.to_string(), value.to_string());

    let id = match record.id {
        Some(id) => {
            sqlx::query(
                "UPDATE editable_content SET content_json = $1, edited_at = NOW() WHERE id = $2",
            )
            .bind(Json(&record.fields))
            .bind(id)
            .execute(pool)
            .await?;
            id
        }
        None => {
            let row = sqlx::query_as::<_, ContentRow>(
                "INSERT INTO editable_content (section_name, content_json)
                 VALUES ($1, $2)
                 RETURNING id, content_json",
            )
            .bind(section)
            .bind(Json(&record.fields))
            .fetch_one(pool)
            .await?;
            row.id
        }
    };

    record.id = Some(id);
    Ok(record)
}
