use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub edited_at: DateTime<Utc>,
}

/// A logged-in admin, identified by an opaque token cookie.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct AdminSession {
    pub token: Uuid,
    pub user_id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl AdminSession {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn session_expiry_is_inclusive_at_the_boundary() {
        let now = Utc::now();
        let session = AdminSession {
            token: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            email: "admin@example.com".into(),
            created_at: now - Duration::days(7),
            expires_at: now,
        };
        assert!(session.is_expired(now));
        assert!(!session.is_expired(now - Duration::seconds(1)));
    }
}
