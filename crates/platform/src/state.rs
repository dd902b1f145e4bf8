//! Application context.
//!
//! The one place everything durable hangs together. Constructed once at
//! startup and threaded explicitly through front ends; nothing in the
//! crate reads ambient global state.

use std::fmt;
use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::config::PlatformConfig;
use crate::error::Result;
use crate::router::EntryPointRouter;
use crate::services::{AuthService, EnrollmentService, LoggingMailTransport, MailTransport};
use crate::storage::{FileBackend, Storage, StorageBackend};
use crate::store::{EnrollmentStore, IdentityStore, SessionStore};

/// Shared application context.
///
/// Cheap to clone; all clones see the same stores.
#[derive(Clone)]
pub struct AppContext {
    inner: Arc<Inner>,
}

struct Inner {
    config: PlatformConfig,
    identities: IdentityStore,
    sessions: SessionStore,
    enrollments: EnrollmentStore,
    mail: Box<dyn MailTransport>,
}

impl AppContext {
    /// Build the production context: file-backed storage in the configured
    /// data directory, the system clock, and the logging mail transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn new(config: PlatformConfig) -> Result<Self> {
        let backend = FileBackend::create(config.data_dir.clone())?;
        Ok(Self::assemble(
            config,
            Arc::new(backend),
            Arc::new(SystemClock),
            Box::new(LoggingMailTransport),
        ))
    }

    /// Build a context from explicit parts.
    ///
    /// This is the seam tests use to swap in an in-memory backend, a
    /// manual clock, or a recording mail transport.
    #[must_use]
    pub fn assemble(
        config: PlatformConfig,
        backend: Arc<dyn StorageBackend>,
        clock: Arc<dyn Clock>,
        mail: Box<dyn MailTransport>,
    ) -> Self {
        let storage = Storage::new(backend);
        let identities = IdentityStore::new(storage.clone(), Arc::clone(&clock));
        let sessions = SessionStore::new(storage.clone(), clock, config.session_ttl);
        let enrollments = EnrollmentStore::new(storage);

        Self {
            inner: Arc::new(Inner {
                config,
                identities,
                sessions,
                enrollments,
                mail,
            }),
        }
    }

    /// The loaded configuration.
    #[must_use]
    pub fn config(&self) -> &PlatformConfig {
        &self.inner.config
    }

    /// The identity store.
    #[must_use]
    pub fn identities(&self) -> &IdentityStore {
        &self.inner.identities
    }

    /// The session store.
    #[must_use]
    pub fn sessions(&self) -> &SessionStore {
        &self.inner.sessions
    }

    /// The enrollment store.
    #[must_use]
    pub fn enrollments(&self) -> &EnrollmentStore {
        &self.inner.enrollments
    }

    /// An auth service over this context's stores.
    #[must_use]
    pub fn auth(&self) -> AuthService<'_> {
        AuthService::new(
            &self.inner.identities,
            &self.inner.sessions,
            self.inner.mail.as_ref(),
            self.inner.config.mock_latency,
        )
    }

    /// An enrollment service over this context's stores.
    #[must_use]
    pub fn enrollment(&self) -> EnrollmentService<'_> {
        EnrollmentService::new(
            &self.inner.sessions,
            &self.inner.enrollments,
            self.inner.config.mock_latency,
        )
    }

    /// An entry-point router over this context's stores.
    #[must_use]
    pub fn router(&self) -> EntryPointRouter<'_> {
        EntryPointRouter::new(&self.inner.identities, &self.inner.sessions)
    }
}

impl fmt::Debug for AppContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppContext")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
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

    fn context() -> AppContext {
        AppContext::assemble(
            PlatformConfig::default(),
            Arc::new(MemoryBackend::new()),
            Arc::new(ManualClock::starting_at(Utc::now())),
            Box::new(LoggingMailTransport),
        )
    }

    #[tokio::test]
    async fn test_clones_share_stores() {
        let ctx = context();
        let other = ctx.clone();

        ctx.auth()
            .register(
                "Ada",
                "ada@example.com",
                &SecretString::from("secret1".to_string()),
            )
            .await
            .unwrap();

        assert_eq!(other.identities().count().unwrap(), 1);
    }
}
