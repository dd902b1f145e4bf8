//! Single-slot session store.

use std::sync::Arc;

use chrono::Duration;

use learnhub_core::SessionToken;

use crate::clock::Clock;
use crate::models::{Identity, Session, SessionUser};
use crate::storage::{Storage, StorageError};

/// Storage slot holding the session.
const SLOT: &str = "session";

/// Durable single-slot record of the authenticated identity.
///
/// Expiry is lazy: a stale slot is detected on read, cleared, and reported
/// absent. Nothing outside this store reads or writes the slot.
pub struct SessionStore {
    storage: Storage,
    clock: Arc<dyn Clock>,
    lifetime: Duration,
}

impl SessionStore {
    /// Create a session store with the given lifetime.
    #[must_use]
    pub fn new(storage: Storage, clock: Arc<dyn Clock>, lifetime: Duration) -> Self {
        Self {
            storage,
            clock,
            lifetime,
        }
    }

    /// Issue a session for an identity, replacing any existing one.
    ///
    /// The token is freshly random per issuance.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the slot cannot be written.
    pub fn issue(&self, identity: &Identity) -> Result<Session, StorageError> {
        let session = Session {
            user: SessionUser::from(identity),
            token: SessionToken::generate(),
            issued_at: self.clock.now(),
        };
        self.storage.save(SLOT, &session)?;
        tracing::info!(email = %session.user.email, "session issued");
        Ok(session)
    }

    /// The current session, if one exists and has not outlived its lifetime.
    ///
    /// A session older than the lifetime is cleared as a side effect and
    /// reported absent.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on I/O failure.
    pub fn current(&self) -> Result<Option<Session>, StorageError> {
        let Some(session) = self.storage.load::<Session>(SLOT)? else {
            return Ok(None);
        };

        if session.age_at(self.clock.now()) > self.lifetime {
            tracing::debug!(email = %session.user.email, "clearing expired session");
            self.storage.remove(SLOT)?;
            return Ok(None);
        }

        Ok(Some(session))
    }

    /// Clear the session slot. A no-op when no session exists.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the slot cannot be removed.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove(SLOT)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use secrecy::SecretString;

    use super::*;
    use crate::clock::ManualClock;
    use crate::storage::MemoryBackend;
    use crate::store::IdentityStore;

    fn fixture() -> (SessionStore, IdentityStore, Arc<ManualClock>) {
        let storage = Storage::new(Arc::new(MemoryBackend::new()));
        let clock = Arc::new(ManualClock::starting_at(Utc::now()));
        let sessions = SessionStore::new(
            storage.clone(),
            Arc::clone(&clock) as Arc<dyn Clock>,
            Duration::days(7),
        );
        let identities =
            IdentityStore::new(storage, Arc::clone(&clock) as Arc<dyn Clock>);
        (sessions, identities, clock)
    }

    fn registered_identity(identities: &IdentityStore) -> crate::models::Identity {
        identities
            .register(
                "Ada",
                "ada@example.com",
                &SecretString::from("secret1".to_string()),
            )
            .unwrap()
    }

    #[test]
    fn test_issue_and_read_back() {
        let (sessions, identities, _clock) = fixture();
        let identity = registered_identity(&identities);

        let issued = sessions.issue(&identity).unwrap();
        let current = sessions.current().unwrap().unwrap();
        assert_eq!(current.token, issued.token);
        assert_eq!(current.user.email, identity.email);
    }

    #[test]
    fn test_tokens_unique_per_issuance() {
        let (sessions, identities, _clock) = fixture();
        let identity = registered_identity(&identities);

        let first = sessions.issue(&identity).unwrap();
        let second = sessions.issue(&identity).unwrap();
        assert_ne!(first.token, second.token);
    }

    #[test]
    fn test_lazy_expiry_clears_slot() {
        let (sessions, identities, clock) = fixture();
        let identity = registered_identity(&identities);
        sessions.issue(&identity).unwrap();

        // at exactly the lifetime, still present
        clock.advance(Duration::days(7));
        assert!(sessions.current().unwrap().is_some());

        // past the lifetime, absent and cleared
        clock.advance(Duration::seconds(1));
        assert!(sessions.current().unwrap().is_none());

        // winding the clock back cannot resurrect the cleared slot
        assert!(sessions.current().unwrap().is_none());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let (sessions, identities, _clock) = fixture();
        let identity = registered_identity(&identities);
        sessions.issue(&identity).unwrap();

        sessions.clear().unwrap();
        sessions.clear().unwrap();
        assert!(sessions.current().unwrap().is_none());
    }
}
