//! Authentication service.
//!
//! Drives the per-identity lifecycle:
//!
//! ```text
//! Unregistered --register--> Registered(unverified)
//! Registered(unverified) --verify--> Registered(verified)
//! Registered(verified) --login--> Authenticated (session issued)
//! Authenticated --logout--> Registered(verified)
//! ```
//!
//! Side effects are confined to the identity and session stores; every call
//! returns a structured result for the caller to render.

mod error;

pub use error::AuthError;

use std::time::Duration;

use secrecy::SecretString;

use learnhub_core::Email;

use crate::models::{Identity, Session};
use crate::services::mail::MailTransport;
use crate::store::{IdentityStore, SessionStore};

/// Authentication service.
///
/// Borrowed from the application context per call site; holds no state of
/// its own beyond the injected latency.
pub struct AuthService<'a> {
    identities: &'a IdentityStore,
    sessions: &'a SessionStore,
    mail: &'a dyn MailTransport,
    latency: Duration,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    ///
    /// `latency` is a simulated network round-trip applied to register and
    /// login; it defaults to zero and tests always use zero. Calls sleep
    /// for it and then always resolve.
    #[must_use]
    pub const fn new(
        identities: &'a IdentityStore,
        sessions: &'a SessionStore,
        mail: &'a dyn MailTransport,
        latency: Duration,
    ) -> Self {
        Self {
            identities,
            sessions,
            mail,
            latency,
        }
    }

    /// Register a new identity.
    ///
    /// On success the identity is persisted unverified, a verification
    /// notice goes to the mail transport, and **no session is issued** -
    /// the caller moves to the verification flow next.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Registration` carrying the field-level
    /// validation failure or duplicate-email conflict.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        secret: &SecretString,
    ) -> Result<Identity, AuthError> {
        self.simulate_latency().await;

        let identity = self.identities.register(name, email, secret)?;
        self.mail.send_verification(&identity.email);
        Ok(identity)
    }

    /// Mark an identity's email as verified.
    ///
    /// Reachable only from the verification flow, where the caller already
    /// holds the address (typically prefilled from the registration step).
    ///
    /// # Errors
    ///
    /// Returns `AuthError::AccountNotFound` if no identity exists for the
    /// email.
    pub fn verify(&self, email: &Email) -> Result<(), AuthError> {
        if self.identities.mark_verified(email)? {
            Ok(())
        } else {
            Err(AuthError::AccountNotFound)
        }
    }

    /// Log in with email and secret, issuing a session on success.
    ///
    /// A session is never issued for an unverified identity, regardless of
    /// the secret.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` for a malformed or unknown
    /// email as well as a wrong secret (uniform on purpose), or
    /// `AuthError::NotVerified` for a correct secret on an unverified
    /// identity.
    pub async fn login(&self, email: &str, secret: &SecretString) -> Result<Session, AuthError> {
        self.simulate_latency().await;

        let Ok(email) = Email::parse(email) else {
            tracing::debug!("login rejected: malformed email");
            return Err(AuthError::InvalidCredentials);
        };

        let Some(identity) = self.identities.find(&email)? else {
            tracing::debug!(%email, "login rejected: unknown account");
            return Err(AuthError::InvalidCredentials);
        };

        if !identity.verified {
            return Err(AuthError::NotVerified);
        }

        if !self.identities.verify_secret(&identity, secret) {
            tracing::debug!(%email, "login rejected: wrong secret");
            return Err(AuthError::InvalidCredentials);
        }

        let session = self.sessions.issue(&identity)?;
        Ok(session)
    }

    /// Clear the current session.
    ///
    /// A no-op when nobody is signed in.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the session slot cannot be cleared.
    pub fn logout(&self) -> Result<(), AuthError> {
        self.sessions.clear()?;
        Ok(())
    }

    /// Request account recovery instructions.
    ///
    /// Always reports success: whether an account exists for the address is
    /// not observable from the result. Delivery (or its absence) is handed
    /// to the mail transport.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` only for I/O failures.
    pub fn recover(&self, email: &str) -> Result<(), AuthError> {
        let Ok(email) = Email::parse(email) else {
            tracing::debug!("recovery requested for malformed email");
            return Ok(());
        };

        if self.identities.find(&email)?.is_some() {
            self.mail.send_recovery(&email);
        } else {
            tracing::debug!(%email, "recovery requested for unknown account");
        }
        Ok(())
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}
