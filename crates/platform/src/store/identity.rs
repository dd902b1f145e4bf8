//! Identity table.

use std::collections::BTreeMap;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use uuid::Uuid;

use learnhub_core::{DisplayName, Email};

use crate::clock::Clock;
use crate::models::Identity;
use crate::storage::{Storage, StorageError};

/// Storage slot holding the identity table.
const SLOT: &str = "identities";

/// Minimum credential secret length.
const MIN_SECRET_LENGTH: usize = 6;

/// The email-keyed identity table as persisted.
type Table = BTreeMap<Email, Identity>;

/// Input field named by an [`IdentityError::InvalidInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityField {
    /// The display name.
    Name,
    /// The email address.
    Email,
    /// The credential secret.
    Secret,
}

impl std::fmt::Display for IdentityField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Email => write!(f, "email"),
            Self::Secret => write!(f, "secret"),
        }
    }
}

/// Errors that can occur in the identity store.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// A registration field failed validation.
    #[error("invalid {field}: {message}")]
    InvalidInput {
        /// Which field was rejected.
        field: IdentityField,
        /// Field-specific message for inline display.
        message: String,
    },

    /// The email is already registered (case-insensitive).
    #[error("an account with this email already exists")]
    DuplicateEmail,

    /// Hashing the credential secret failed.
    #[error("could not hash credential secret")]
    SecretHash,

    /// Storage operation failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Durable table of registered identities, keyed by case-folded email.
///
/// The store owns the secret encoding: secrets are hashed with Argon2id at
/// registration and verified against the stored PHC string at login, so
/// callers never see or compare raw secret material.
pub struct IdentityStore {
    storage: Storage,
    clock: std::sync::Arc<dyn Clock>,
}

impl IdentityStore {
    /// Create an identity store over the given storage.
    #[must_use]
    pub fn new(storage: Storage, clock: std::sync::Arc<dyn Clock>) -> Self {
        Self { storage, clock }
    }

    /// Register a new identity.
    ///
    /// Validates the name (2-80 chars), the email (`local@domain.tld`
    /// shape, case-folded), and the secret (at least 6 chars), hashes the
    /// secret, and persists the identity with `verified = false`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` naming the offending field,
    /// `DuplicateEmail` if the case-folded email is taken, `SecretHash` if
    /// hashing fails, or `Storage` on I/O failure. On any error the table
    /// is left untouched.
    pub fn register(
        &self,
        name: &str,
        email: &str,
        secret: &SecretString,
    ) -> Result<Identity, IdentityError> {
        let name = DisplayName::parse(name).map_err(|e| IdentityError::InvalidInput {
            field: IdentityField::Name,
            message: e.to_string(),
        })?;

        let email = Email::parse(email).map_err(|e| IdentityError::InvalidInput {
            field: IdentityField::Email,
            message: e.to_string(),
        })?;

        if secret.expose_secret().len() < MIN_SECRET_LENGTH {
            return Err(IdentityError::InvalidInput {
                field: IdentityField::Secret,
                message: format!("secret must be at least {MIN_SECRET_LENGTH} characters"),
            });
        }

        let mut table = self.table()?;
        if table.contains_key(&email) {
            return Err(IdentityError::DuplicateEmail);
        }

        let identity = Identity {
            id: Uuid::new_v4(),
            name,
            email: email.clone(),
            secret_hash: hash_secret(secret)?,
            verified: false,
            created_at: self.clock.now(),
        };

        table.insert(email, identity.clone());
        self.storage.save(SLOT, &table)?;

        tracing::info!(email = %identity.email, "identity registered");
        Ok(identity)
    }

    /// Look up an identity by email.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the table cannot be read.
    pub fn find(&self, email: &Email) -> Result<Option<Identity>, StorageError> {
        Ok(self.table()?.remove(email))
    }

    /// Mark an identity's email as verified.
    ///
    /// Idempotent. Returns `false` without writing if the email is unknown.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on I/O failure.
    pub fn mark_verified(&self, email: &Email) -> Result<bool, StorageError> {
        let mut table = self.table()?;
        let Some(identity) = table.get_mut(email) else {
            return Ok(false);
        };

        if !identity.verified {
            identity.verified = true;
            self.storage.save(SLOT, &table)?;
            tracing::info!(%email, "identity verified");
        }
        Ok(true)
    }

    /// Check a plaintext secret against an identity's stored hash.
    #[must_use]
    pub fn verify_secret(&self, identity: &Identity, secret: &SecretString) -> bool {
        let Ok(parsed) = PasswordHash::new(&identity.secret_hash) else {
            return false;
        };
        Argon2::default()
            .verify_password(secret.expose_secret().as_bytes(), &parsed)
            .is_ok()
    }

    /// Whether no identities have been registered yet.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the table cannot be read.
    pub fn is_empty(&self) -> Result<bool, StorageError> {
        Ok(self.table()?.is_empty())
    }

    /// Number of registered identities.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the table cannot be read.
    pub fn count(&self) -> Result<usize, StorageError> {
        Ok(self.table()?.len())
    }

    fn table(&self) -> Result<Table, StorageError> {
        Ok(self.storage.load(SLOT)?.unwrap_or_default())
    }
}

/// Hash a secret using Argon2id, producing a PHC string.
fn hash_secret(secret: &SecretString) -> Result<String, IdentityError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(secret.expose_secret().as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| IdentityError::SecretHash)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::clock::SystemClock;
    use crate::storage::MemoryBackend;

    fn store() -> IdentityStore {
        IdentityStore::new(
            Storage::new(Arc::new(MemoryBackend::new())),
            Arc::new(SystemClock),
        )
    }

    fn secret(s: &str) -> SecretString {
        SecretString::from(s.to_string())
    }

    #[test]
    fn test_register_persists_unverified() {
        let store = store();
        let identity = store
            .register("Ada", "ada@example.com", &secret("secret1"))
            .unwrap();

        assert!(!identity.verified);
        assert_eq!(identity.email.as_str(), "ada@example.com");

        let found = store.find(&identity.email).unwrap().unwrap();
        assert_eq!(found.id, identity.id);
        assert!(!found.verified);
    }

    #[test]
    fn test_register_validates_fields() {
        let store = store();

        let err = store
            .register("A", "ada@example.com", &secret("secret1"))
            .unwrap_err();
        assert!(matches!(
            err,
            IdentityError::InvalidInput {
                field: IdentityField::Name,
                ..
            }
        ));

        let err = store
            .register("Ada", "bad-email", &secret("secret1"))
            .unwrap_err();
        assert!(matches!(
            err,
            IdentityError::InvalidInput {
                field: IdentityField::Email,
                ..
            }
        ));

        let err = store
            .register("Ada", "ada@example.com", &secret("short"))
            .unwrap_err();
        assert!(matches!(
            err,
            IdentityError::InvalidInput {
                field: IdentityField::Secret,
                ..
            }
        ));

        // no identity was created by any of the rejected attempts
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_duplicate_email_is_case_insensitive() {
        let store = store();
        store
            .register("Bo", "bo@x.com", &secret("abcdef"))
            .unwrap();

        let err = store
            .register("Bo Again", "BO@X.COM", &secret("abcdef"))
            .unwrap_err();
        assert!(matches!(err, IdentityError::DuplicateEmail));
        assert_eq!(store.count().unwrap(), 1);

        // existing record untouched
        let kept = store
            .find(&Email::parse("bo@x.com").unwrap())
            .unwrap()
            .unwrap();
        assert_eq!(kept.name.as_str(), "Bo");
    }

    #[test]
    fn test_mark_verified_idempotent() {
        let store = store();
        let identity = store
            .register("Ada", "ada@example.com", &secret("secret1"))
            .unwrap();

        assert!(store.mark_verified(&identity.email).unwrap());
        assert!(store.mark_verified(&identity.email).unwrap());
        assert!(store.find(&identity.email).unwrap().unwrap().verified);

        let unknown = Email::parse("ghost@example.com").unwrap();
        assert!(!store.mark_verified(&unknown).unwrap());
    }

    #[test]
    fn test_secret_is_hashed_and_verifiable() {
        let store = store();
        let identity = store
            .register("Ada", "ada@example.com", &secret("secret1"))
            .unwrap();

        // stored as a PHC string, not recoverable text
        assert!(identity.secret_hash.starts_with("$argon2"));
        assert!(!identity.secret_hash.contains("secret1"));

        assert!(store.verify_secret(&identity, &secret("secret1")));
        assert!(!store.verify_secret(&identity, &secret("wrong-secret")));
    }
}
