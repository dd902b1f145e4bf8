//! Identity record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use learnhub_core::{DisplayName, Email};

/// A registered identity.
///
/// Created by registration with `verified = false`; the only in-scope
/// mutation after that is verification. Identities are never deleted.
///
/// The credential secret is stored as an Argon2id PHC string, never as
/// recoverable text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    /// Unique identity id.
    pub id: Uuid,
    /// Display name shown on the dashboard.
    pub name: DisplayName,
    /// Case-folded email address; the identity table key.
    pub email: Email,
    /// Argon2id hash of the credential secret (PHC string format).
    pub(crate) secret_hash: String,
    /// Whether the email has been verified.
    pub verified: bool,
    /// When the identity was created.
    pub created_at: DateTime<Utc>,
}
