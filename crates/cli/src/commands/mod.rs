//! Command implementations.

pub mod account;
pub mod courses;
pub mod start;

use thiserror::Error;

use learnhub_core::{CourseIdError, EmailError};
use learnhub_platform::AppError;
use learnhub_platform::config::ConfigError;
use learnhub_platform::services::{AuthError, EnrollmentError};
use learnhub_platform::storage::StorageError;

/// Errors a command can surface: either bad command-line input or a
/// platform error.
#[derive(Debug, Error)]
pub enum CliError {
    /// The course argument is not a valid course id.
    #[error("invalid course id: {0}")]
    InvalidCourse(#[from] CourseIdError),

    /// The email argument is not a valid address.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Platform operation failed.
    #[error(transparent)]
    App(#[from] AppError),
}

impl CliError {
    /// The message a person should see for this error.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidCourse(e) => format!("Invalid course id: {e}."),
            Self::InvalidEmail(e) => format!("Invalid email: {e}."),
            Self::App(e) => e.user_message(),
        }
    }
}

impl From<AuthError> for CliError {
    fn from(err: AuthError) -> Self {
        Self::App(AppError::Auth(err))
    }
}

impl From<EnrollmentError> for CliError {
    fn from(err: EnrollmentError) -> Self {
        Self::App(AppError::Enrollment(err))
    }
}

impl From<StorageError> for CliError {
    fn from(err: StorageError) -> Self {
        Self::App(AppError::Storage(err))
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::App(AppError::Config(err))
    }
}
