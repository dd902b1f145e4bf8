//! Platform-level error type.
//!
//! Every fallible entry point in the crate ultimately surfaces one of the
//! component errors; [`AppError`] unifies them for front ends that want a
//! single error channel, and [`AppError::user_message`] maps each to the
//! line a person should see. Nothing here is fatal to the application.

use thiserror::Error;

use crate::config::ConfigError;
use crate::services::{AuthError, EnrollmentError};
use crate::storage::StorageError;
use crate::store::IdentityError;

/// Convenience alias used throughout the front ends.
pub type Result<T> = std::result::Result<T, AppError>;

/// Any error the platform can surface.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Authentication operation failed.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Enrollment operation failed.
    #[error(transparent)]
    Enrollment(#[from] EnrollmentError),

    /// Storage operation failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<IdentityError> for AppError {
    fn from(err: IdentityError) -> Self {
        Self::Auth(AuthError::from(err))
    }
}

impl AppError {
    /// The message a person should see for this error.
    ///
    /// Validation and conflict errors carry their own wording; everything
    /// infrastructural collapses to a generic line, with the detail left to
    /// the logs.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Auth(AuthError::Registration(err)) => err.to_string(),
            Self::Auth(AuthError::InvalidCredentials) => {
                "Invalid email or secret.".to_string()
            }
            Self::Auth(AuthError::NotVerified) => {
                "Please verify your email address before signing in.".to_string()
            }
            Self::Auth(AuthError::AccountNotFound) => {
                "No account found for this email.".to_string()
            }
            Self::Enrollment(EnrollmentError::NotSignedIn) => {
                "Please sign in first.".to_string()
            }
            Self::Enrollment(EnrollmentError::NotEnrolled(course)) => {
                format!("You are not enrolled in \"{course}\".")
            }
            Self::Config(_)
            | Self::Auth(AuthError::Storage(_))
            | Self::Enrollment(EnrollmentError::Storage(_))
            | Self::Storage(_) => "Something went wrong. Please try again.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::IdentityField;

    #[test]
    fn test_validation_messages_name_the_field() {
        let err = AppError::from(IdentityError::InvalidInput {
            field: IdentityField::Email,
            message: "missing `@` symbol".to_string(),
        });
        assert!(err.user_message().contains("email"));
    }

    #[test]
    fn test_storage_detail_stays_out_of_user_message() {
        let io = std::io::Error::other("disk on fire");
        let err = AppError::Storage(StorageError::Io {
            slot: "identities".to_string(),
            source: io,
        });
        let message = err.user_message();
        assert!(!message.contains("disk"));
        assert!(!message.contains("identities"));
    }

    #[test]
    fn test_credential_errors_are_uniform() {
        let msg = AppError::Auth(AuthError::InvalidCredentials).user_message();
        assert_eq!(msg, "Invalid email or secret.");
    }
}
