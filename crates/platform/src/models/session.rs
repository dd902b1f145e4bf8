//! Session record.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use learnhub_core::{DisplayName, Email, SessionToken};

use super::Identity;

/// Minimal identity snapshot carried inside a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    /// Identity id.
    pub id: Uuid,
    /// Display name at login time.
    pub name: DisplayName,
    /// Email referencing the identity table.
    pub email: Email,
}

impl From<&Identity> for SessionUser {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id,
            name: identity.name.clone(),
            email: identity.email.clone(),
        }
    }
}

/// Evidence of a successful login.
///
/// At most one session exists at a time; the session store owns the backing
/// slot and applies lazy expiry on read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// The authenticated identity.
    pub user: SessionUser,
    /// Opaque per-issuance token.
    pub token: SessionToken,
    /// When the session was issued.
    pub issued_at: DateTime<Utc>,
}

impl Session {
    /// Age of the session at the given instant.
    #[must_use]
    pub fn age_at(&self, now: DateTime<Utc>) -> Duration {
        now - self.issued_at
    }
}
