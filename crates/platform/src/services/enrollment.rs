//! Enrollment service.
//!
//! Session-gated front over the enrollment store: every operation resolves
//! the signed-in identity first and fails with `NotSignedIn` when there is
//! none, so anonymous callers can never touch a cart or enrollment record.

use std::time::Duration;

use thiserror::Error;

use learnhub_core::{CourseId, Email, Progress};

use crate::models::{Cart, EnrollmentRecord};
use crate::storage::StorageError;
use crate::store::{EnrollOutcome, EnrollmentStore, SessionStore};

/// Errors that can occur during enrollment operations.
#[derive(Debug, Error)]
pub enum EnrollmentError {
    /// No active session; the caller must sign in first.
    #[error("not signed in")]
    NotSignedIn,

    /// The identity is not enrolled in the course.
    #[error("not enrolled in course `{0}`")]
    NotEnrolled(CourseId),

    /// Storage operation failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Enrollment service scoped to the currently signed-in identity.
pub struct EnrollmentService<'a> {
    sessions: &'a SessionStore,
    enrollments: &'a EnrollmentStore,
    latency: Duration,
}

impl<'a> EnrollmentService<'a> {
    /// Create a new enrollment service.
    #[must_use]
    pub const fn new(
        sessions: &'a SessionStore,
        enrollments: &'a EnrollmentStore,
        latency: Duration,
    ) -> Self {
        Self {
            sessions,
            enrollments,
            latency,
        }
    }

    /// The signed-in identity's cart.
    ///
    /// # Errors
    ///
    /// Returns `EnrollmentError::NotSignedIn` without an active session.
    pub fn cart(&self) -> Result<Cart, EnrollmentError> {
        let email = self.current_email()?;
        Ok(self.enrollments.cart(&email)?)
    }

    /// Add a course to the signed-in identity's cart.
    ///
    /// Returns whether the cart changed; already-carted and
    /// already-enrolled courses are no-ops.
    ///
    /// # Errors
    ///
    /// Returns `EnrollmentError::NotSignedIn` without an active session.
    pub fn add_to_cart(&self, course: CourseId) -> Result<bool, EnrollmentError> {
        let email = self.current_email()?;
        Ok(self.enrollments.add_to_cart(&email, course)?)
    }

    /// Remove a course from the signed-in identity's cart.
    ///
    /// Returns whether the cart changed.
    ///
    /// # Errors
    ///
    /// Returns `EnrollmentError::NotSignedIn` without an active session.
    pub fn remove_from_cart(&self, course: &CourseId) -> Result<bool, EnrollmentError> {
        let email = self.current_email()?;
        Ok(self.enrollments.remove_from_cart(&email, course)?)
    }

    /// Enroll the signed-in identity in a course.
    ///
    /// New enrollments start at zero progress; the course leaves the cart
    /// either way.
    ///
    /// # Errors
    ///
    /// Returns `EnrollmentError::NotSignedIn` without an active session.
    pub async fn enroll(&self, course: CourseId) -> Result<EnrollOutcome, EnrollmentError> {
        let email = self.current_email()?;
        self.simulate_latency().await;
        Ok(self.enrollments.enroll(&email, course)?)
    }

    /// Enroll the signed-in identity in everything in their cart.
    ///
    /// The cart is cleared unconditionally. Returns the number of new
    /// enrollments.
    ///
    /// # Errors
    ///
    /// Returns `EnrollmentError::NotSignedIn` without an active session.
    pub async fn enroll_all(&self) -> Result<usize, EnrollmentError> {
        let email = self.current_email()?;
        self.simulate_latency().await;
        Ok(self.enrollments.enroll_all(&email)?)
    }

    /// The signed-in identity's enrollment record.
    ///
    /// # Errors
    ///
    /// Returns `EnrollmentError::NotSignedIn` without an active session.
    pub fn record(&self) -> Result<EnrollmentRecord, EnrollmentError> {
        let email = self.current_email()?;
        Ok(self.enrollments.record(&email)?)
    }

    /// Update the signed-in identity's progress in a course.
    ///
    /// # Errors
    ///
    /// Returns `EnrollmentError::NotSignedIn` without an active session, or
    /// `EnrollmentError::NotEnrolled` if the identity is not enrolled in
    /// the course.
    pub fn set_progress(
        &self,
        course: &CourseId,
        progress: Progress,
    ) -> Result<(), EnrollmentError> {
        let email = self.current_email()?;
        if self.enrollments.set_progress(&email, course, progress)? {
            Ok(())
        } else {
            Err(EnrollmentError::NotEnrolled(course.clone()))
        }
    }

    fn current_email(&self) -> Result<Email, EnrollmentError> {
        self.sessions
            .current()?
            .map(|session| session.user.email)
            .ok_or(EnrollmentError::NotSignedIn)
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}
