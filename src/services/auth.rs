//! Admin login: a local gate secret in front of a stored credential.
//!
//! The site has exactly one admin account. Login first compares the
//! submitted password against the configured gate secret; only a match
//! goes on to the credential check and session creation, so random
//! attempts never touch the database.

use crate::common::AuthError;
use crate::db::sessions;
use crate::models::AdminSession;
use argon2::{
    password_hash::{
        rand_core::OsRng, Error, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
    },
    Argon2, Params,
};
use chrono::{Duration, Utc};
use sqlx::PgPool;
use std::sync::OnceLock;
use uuid::Uuid;

pub struct PasswordManager;

static INSTANCE: OnceLock<Argon2> = OnceLock::new();

impl PasswordManager {
    fn engine() -> &'static Argon2<'static> {
        INSTANCE.get_or_init(|| {
            let params = Params::new(
                64 * 1024, // 64MB Memory (m)
                3,         // 3 Iterations (t)
                4,         // 4 Parallelism lanes (p)
                None,      // Default hash length (32 bytes)
            )
            .expect("Invalid Argon2 parameters");

            Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params)
        })
    }

    pub fn hash_password(password: &str) -> Result<String, Error> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::engine().hash_password(password.as_bytes(), &salt)?;

        Ok(hash.to_string())
    }

    pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, Error> {
        let parsed_hash = PasswordHash::new(stored_hash)?;

        let result = Self::engine().verify_password(password.as_bytes(), &parsed_hash);

        match result {
            Ok(_) => Ok(true),
            Err(Error::Password) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

/// Session lifetime; matches the login cookie's max age.
pub const SESSION_TTL_DAYS: i64 = 7;

#[derive(Clone)]
pub struct AdminGate {
    admin_email: String,
    gate_secret: String,
    session_ttl: Duration,
}

impl AdminGate {
    pub fn new(admin_email: impl Into<String>, gate_secret: impl Into<String>) -> Self {
        Self {
            admin_email: admin_email.into(),
            gate_secret: gate_secret.into(),
            session_ttl: Duration::days(SESSION_TTL_DAYS),
        }
    }

    pub fn with_session_ttl(mut self, ttl: Duration) -> Self {
        self.session_ttl = ttl;
        self
    }

    pub fn admin_email(&self) -> &str {
        &self.admin_email
    }

    fn gate_matches(&self, candidate: &str) -> bool {
        !self.gate_secret.is_empty() && candidate == self.gate_secret
    }

    /// Creates or refreshes the admin account from configuration.
    /// Called once at startup, before the server accepts requests.
    pub async fn ensure_admin_user(&self, pool: &PgPool) -> Result<(), AuthError> {
        let hash =
            PasswordManager::hash_password(&self.gate_secret).map_err(AuthError::Hash)?;
        sessions::upsert_admin_user(pool, &self.admin_email, &hash).await?;
        Ok(())
    }

    /// Attempts a login. `Ok(None)` means the password was wrong; the
    /// gate check happens before any database access.
    pub async fn login(
        &self,
        pool: &PgPool,
        password: &str,
    ) -> Result<Option<AdminSession>, AuthError> {
        if !self.gate_matches(password) {
            return Ok(None);
        }

        let Some(user) = sessions::get_admin_by_email(pool, &self.admin_email).await? else {
            log::warn!("Admin gate passed but no admin account exists");
            return Ok(None);
        };

        let verified = PasswordManager::verify_password(password, &user.password_hash)
            .map_err(AuthError::Hash)?;
        if !verified {
            return Ok(None);
        }

        let session =
            sessions::create_session(pool, user.id, Utc::now() + self.session_ttl).await?;
        Ok(Some(session))
    }

    /// Removes the session. Failures are logged, never surfaced; logout
    /// always succeeds from the caller's point of view.
    pub async fn logout(&self, pool: &PgPool, token: Uuid) {
        if let Err(e) = sessions::delete_session(pool, token).await {
            log::warn!("Failed to delete session {token}: {e}");
        }
    }

    /// Resolves a token to a live admin session. Expired tokens and
    /// tokens bound to another account yield `None`.
    pub async fn current_session(
        &self,
        pool: &PgPool,
        token: Uuid,
    ) -> Result<Option<AdminSession>, AuthError> {
        let Some(session) = sessions::get_session(pool, token).await? else {
            return Ok(None);
        };

        if session.is_expired(Utc::now()) || session.email != self.admin_email {
            return Ok(None);
        }

        Ok(Some(session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_rejects_empty_secret_configuration() {
        let gate = AdminGate::new("admin@example.com", "");
        assert!(!gate.gate_matches(""));
    }

    #[test]
    fn gate_requires_exact_match() {
        let gate = AdminGate::new("admin@example.com", "rahasia-besar");
        assert!(gate.gate_matches("rahasia-besar"));
        assert!(!gate.gate_matches("rahasia-besar "));
        assert!(!gate.gate_matches("Rahasia-Besar"));
    }

    #[test]
    fn hash_and_verify_round_trip() {
        let hash = PasswordManager::hash_password("kata-sandi").unwrap();
        assert!(PasswordManager::verify_password("kata-sandi", &hash).unwrap());
        assert!(!PasswordManager::verify_password("salah", &hash).unwrap());
    }
}
