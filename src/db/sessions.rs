//! Admin users and their session tokens.

use crate::models::{AdminSession, AdminUser};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Creates or refreshes the single admin account.
///
/// The account is derived from configuration, so the hash is rewritten
/// on every startup to pick up secret changes.
pub async fn upsert_admin_user(
    pool: &PgPool,
    email: &str,
    password_hash: &str,
) -> Result<AdminUser, sqlx::Error> {
    sqlx::query_as::<_, AdminUser>(
        "INSERT INTO admin_users (email, password_hash)
         VALUES ($1, $2)
         ON CONFLICT (email) DO UPDATE
         SET password_hash = EXCLUDED.password_hash, edited_at = NOW()
         RETURNING *",
    )
    .bind(email)
    .bind(password_hash)
    .fetch_one(pool)
    .await
}

pub async fn get_admin_by_email(
    pool: &PgPool,
    email: &str,
) -> Result<Option<AdminUser>, sqlx::Error> {
    sqlx::query_as::<_, AdminUser>("SELECT * FROM admin_users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await
}

pub async fn create_session(
    pool: &PgPool,
    user_id: Uuid,
    expires_at: DateTime<Utc>,
) -> Result<AdminSession, sqlx::Error> {
    sqlx::query_as::<_, AdminSession>(
        "WITH inserted AS (
             INSERT INTO admin_sessions (user_id, expires_at)
             VALUES ($1, $2)
             RETURNING token, user_id, created_at, expires_at
         )
         SELECT i.token, i.user_id, u.email, i.created_at, i.expires_at
         FROM inserted i
         JOIN admin_users u ON u.id = i.user_id",
    )
    .bind(user_id)
    .bind(expires_at)
    .fetch_one(pool)
    .await
}

pub async fn get_session(
    pool: &PgPool,
    token: Uuid,
) -> Result<Option<AdminSession>, sqlx::Error> {
    sqlx::query_as::<_, AdminSession>(
        "SELECT s.token, s.user_id, u.email, s.created_at, s.expires_at
         FROM admin_sessions s
         JOIN admin_users u ON u.id = s.user_id
         WHERE s.token = $1",
    )
    .bind(token)
    .fetch_optional(pool)
    .await
}

pub async fn delete_session(pool: &PgPool, token: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM admin_sessions WHERE token = $1")
        .bind(token)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Drops every session past its expiry. Returns how many were removed.
pub async fn purge_expired_sessions(pool: &PgPool) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM admin_sessions WHERE expires_at <= NOW()")
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
