//! Authentication error types.

use thiserror::Error;

use crate::storage::StorageError;
use crate::store::IdentityError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Registration was rejected by the identity store (validation or
    /// duplicate email).
    #[error(transparent)]
    Registration(#[from] IdentityError),

    /// Invalid credentials.
    ///
    /// Deliberately covers both "no such account" and "wrong secret" so
    /// the caller cannot enumerate accounts; the distinction exists only
    /// in debug logs.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The email has not been verified yet.
    #[error("email address has not been verified")]
    NotVerified,

    /// No identity exists for the email (verification flow only, where the
    /// caller already holds the address).
    #[error("account not found")]
    AccountNotFound,

    /// Storage operation failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}
