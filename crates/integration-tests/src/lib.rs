//! Integration tests for LearnHub.
//!
//! End-to-end scenarios over a real [`AppContext`] with an in-memory
//! storage backend and a manually advanced clock, so nothing here touches
//! the filesystem or wall-clock time.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p learnhub-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `auth_flow` - Registration, verification, and sign-in
//! - `session_lifecycle` - Session expiry and entry-point routing
//! - `enrollment_flow` - Carts, enrollment, and progress

use std::sync::Arc;

use chrono::Utc;
use secrecy::SecretString;

use learnhub_platform::AppContext;
use learnhub_platform::clock::ManualClock;
use learnhub_platform::config::PlatformConfig;
use learnhub_platform::services::LoggingMailTransport;
use learnhub_platform::storage::MemoryBackend;

/// A full application context over in-memory storage and a manual clock.
pub struct TestContext {
    /// The application context under test.
    pub ctx: AppContext,
    /// Clock handle; advance it to simulate the passage of time.
    pub clock: Arc<ManualClock>,
}

impl TestContext {
    /// Fresh context with empty storage and default configuration
    /// (7-day sessions, zero simulated latency).
    #[must_use]
    pub fn new() -> Self {
        let clock = Arc::new(ManualClock::starting_at(Utc::now()));
        let ctx = AppContext::assemble(
            PlatformConfig::default(),
            Arc::new(MemoryBackend::new()),
            Arc::clone(&clock) as Arc<dyn learnhub_platform::clock::Clock>,
            Box::new(LoggingMailTransport),
        );
        Self { ctx, clock }
    }

    /// Register and verify an account, leaving nobody signed in.
    ///
    /// # Panics
    ///
    /// Panics if registration or verification fails; test setup only.
    pub async fn seed_verified_account(&self, name: &str, email: &str, secret: &str) {
        let identity = self
            .ctx
            .auth()
            .register(name, email, &SecretString::from(secret.to_string()))
            .await
            .expect("seed registration failed");
        self.ctx
            .auth()
            .verify(&identity.email)
            .expect("seed verification failed");
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Shorthand for building a `SecretString` from a literal.
#[must_use]
pub fn secret(s: &str) -> SecretString {
    SecretString::from(s.to_string())
}
