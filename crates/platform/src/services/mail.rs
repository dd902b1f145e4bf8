//! Verification and recovery delivery seam.
//!
//! There is no mail infrastructure in this repository; verification is a
//! self-confirmation flow and recovery "sends instructions" nowhere. The
//! trait keeps delivery an external collaborator so a real transport can be
//! plugged in without touching the auth service.

use learnhub_core::Email;

/// Delivers verification and recovery notices for an identity.
///
/// Implementations are expected to be fire-and-forget: delivery failures
/// are the transport's problem to report (log, retry, queue) and must not
/// surface back into auth results, which stay uniform toward the caller.
pub trait MailTransport: Send + Sync {
    /// Deliver a verification notice for a newly registered identity.
    fn send_verification(&self, email: &Email);

    /// Deliver account-recovery instructions.
    fn send_recovery(&self, email: &Email);
}

/// Transport that records deliveries in the log and nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingMailTransport;

impl MailTransport for LoggingMailTransport {
    fn send_verification(&self, email: &Email) {
        tracing::info!(%email, "verification notice (no transport configured)");
    }

    fn send_recovery(&self, email: &Email) {
        tracing::info!(%email, "recovery instructions (no transport configured)");
    }
}
