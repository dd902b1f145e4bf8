//! Presentation-state control.
//!
//! Nothing in here renders anything; the modules own *which* surface is
//! visible and hand the actual drawing to a [`modal::ModalSurface`]
//! implementation supplied by the front end.

pub mod modal;

pub use modal::{
    DismissTrigger, LoggingSurface, ModalKind, ModalOrchestrator, ModalPayload, ModalSurface,
};
