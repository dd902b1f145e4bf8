//! Entry-point routing.
//!
//! The decision procedure behind the "start learning" trigger. It owns no
//! state: every call is a fresh read of the session and identity stores,
//! so session expiry observed on read feeds straight into the decision.

use crate::storage::StorageError;
use crate::store::{IdentityStore, SessionStore};
use crate::ui::ModalKind;

/// Where a "start learning" intent leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryDecision {
    /// An authenticated identity exists; proceed to the dashboard.
    GoToDashboard,
    /// Nobody usable is signed in; present the given modal.
    ShowModal(ModalKind),
}

/// Pure decision procedure over session and identity snapshots.
pub struct EntryPointRouter<'a> {
    identities: &'a IdentityStore,
    sessions: &'a SessionStore,
}

impl<'a> EntryPointRouter<'a> {
    /// Create a router over the two stores it consults.
    #[must_use]
    pub const fn new(identities: &'a IdentityStore, sessions: &'a SessionStore) -> Self {
        Self {
            identities,
            sessions,
        }
    }

    /// Decide where a "start learning" intent leads.
    ///
    /// A live session whose identity still exists goes to the dashboard.
    /// A session pointing at a deleted identity is cleared and treated as
    /// absent. Without a usable session: sign-in when any identity exists,
    /// registration when the store is empty.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on I/O failure.
    pub fn on_start_learning(&self) -> Result<EntryDecision, StorageError> {
        if let Some(session) = self.sessions.current()? {
            if self.identities.find(&session.user.email)?.is_some() {
                return Ok(EntryDecision::GoToDashboard);
            }
            tracing::warn!(
                email = %session.user.email,
                "session references a missing identity, clearing"
            );
            self.sessions.clear()?;
        }

        let modal = if self.identities.is_empty()? {
            ModalKind::Registration
        } else {
            ModalKind::SignIn
        };
        Ok(EntryDecision::ShowModal(modal))
    }

    /// Decide where an explicit "sign in" intent leads: always the sign-in
    /// modal, even when no identity exists yet (the modal offers the switch
    /// to registration).
    #[must_use]
    pub const fn on_sign_in(&self) -> EntryDecision {
        EntryDecision::ShowModal(ModalKind::SignIn)
    }
}
