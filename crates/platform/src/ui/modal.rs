//! Modal orchestration.
//!
//! At most one modal is mounted at any time. The orchestrator owns that
//! invariant: `show` unmounts whatever is up before mounting the next one,
//! sequentially, so two surfaces are never mounted at once even
//! transiently. All dismissal gestures funnel into one entry point.
//!
//! Transitions between modal kinds are driven by the caller (user gestures
//! and service results); the orchestrator itself has no timers and no
//! knowledge of what a modal does once mounted.

use std::fmt;

use learnhub_core::Email;

/// The modals the platform knows how to present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    /// Account registration form (name, email, secret).
    Registration,
    /// Email verification step, normally prefilled from registration.
    VerifyEmail,
    /// Sign-in form (email, secret).
    SignIn,
    /// Account recovery form (email only).
    PasswordRecovery,
}

impl fmt::Display for ModalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Registration => "registration",
            Self::VerifyEmail => "verify-email",
            Self::SignIn => "sign-in",
            Self::PasswordRecovery => "password-recovery",
        };
        f.write_str(name)
    }
}

/// Data handed to a modal when it mounts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalPayload {
    /// Email to prefill, e.g. carrying the just-registered address into the
    /// verification step.
    pub prefill_email: Option<Email>,
}

impl ModalPayload {
    /// Payload prefilling the given email.
    #[must_use]
    pub const fn with_email(email: Email) -> Self {
        Self {
            prefill_email: Some(email),
        }
    }
}

/// How the user dismissed a modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissTrigger {
    /// The modal's own close control.
    CloseControl,
    /// The escape key.
    Escape,
    /// A click outside the modal.
    OutsideClick,
}

impl fmt::Display for DismissTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CloseControl => "close control",
            Self::Escape => "escape key",
            Self::OutsideClick => "outside click",
        };
        f.write_str(name)
    }
}

/// Renders and tears down concrete modal surfaces.
///
/// The orchestrator calls `unmount` for the previous modal strictly before
/// `mount` for the next; implementations can rely on never seeing two
/// mounted surfaces.
pub trait ModalSurface {
    /// Present the modal's surface with the given payload.
    fn mount(&self, kind: ModalKind, payload: &ModalPayload);

    /// Tear the modal's surface down.
    fn unmount(&self, kind: ModalKind);
}

/// Surface that only records mounts and unmounts in the log.
///
/// Stand-in for front ends that render elsewhere (the CLI prompts inline
/// rather than drawing a modal).
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingSurface;

impl ModalSurface for LoggingSurface {
    fn mount(&self, kind: ModalKind, _payload: &ModalPayload) {
        tracing::debug!(%kind, "modal mounted");
    }

    fn unmount(&self, kind: ModalKind) {
        tracing::debug!(%kind, "modal unmounted");
    }
}

/// Owner of the at-most-one-mounted-modal invariant.
pub struct ModalOrchestrator {
    surface: Box<dyn ModalSurface>,
    mounted: Option<ModalKind>,
}

impl ModalOrchestrator {
    /// Create an orchestrator over the given surface, nothing mounted.
    #[must_use]
    pub fn new(surface: Box<dyn ModalSurface>) -> Self {
        Self {
            surface,
            mounted: None,
        }
    }

    /// The currently mounted modal, if any.
    #[must_use]
    pub const fn current(&self) -> Option<ModalKind> {
        self.mounted
    }

    /// Mount a modal, unmounting any current one first.
    ///
    /// Showing the kind that is already up remounts it (the payload may
    /// have changed).
    pub fn show(&mut self, kind: ModalKind, payload: ModalPayload) {
        self.hide();
        self.surface.mount(kind, &payload);
        self.mounted = Some(kind);
        tracing::debug!(%kind, "modal shown");
    }

    /// Unmount the current modal. A no-op when nothing is mounted.
    pub fn hide(&mut self) {
        if let Some(kind) = self.mounted.take() {
            self.surface.unmount(kind);
        }
    }

    /// Handle a dismissal gesture. Equivalent to `hide` plus a log line.
    pub fn dismiss(&mut self, trigger: DismissTrigger) {
        if let Some(kind) = self.mounted {
            tracing::debug!(%kind, %trigger, "modal dismissed");
        }
        self.hide();
    }
}

impl fmt::Debug for ModalOrchestrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModalOrchestrator")
            .field("mounted", &self.mounted)
            .finish_non_exhaustive()
    }
}
