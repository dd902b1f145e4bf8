//! Per-identity carts and enrollment records.

use std::collections::BTreeMap;

use learnhub_core::{CourseId, Email, Progress};

use crate::models::{Cart, EnrollmentRecord};
use crate::storage::{Storage, StorageError};

/// Storage slot holding every identity's cart.
const CART_SLOT: &str = "carts";

/// Storage slot holding every identity's enrollment record.
const ENROLLMENT_SLOT: &str = "enrollments";

type Carts = BTreeMap<Email, Cart>;
type Enrollments = BTreeMap<Email, EnrollmentRecord>;

/// Result of an enrollment attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollOutcome {
    /// The course was added to the enrollment set at zero progress.
    NewlyEnrolled,
    /// The course was already in the enrollment set; nothing changed there.
    AlreadyEnrolled,
}

/// Durable carts and enrollment sets, keyed by identity email.
///
/// Enrollment and the matching cart removal happen inside one call, so a
/// course is never observable in both places (the caller's view is atomic;
/// there is no cross-process atomicity to be had here).
pub struct EnrollmentStore {
    storage: Storage,
}

impl EnrollmentStore {
    /// Create an enrollment store over the given storage.
    #[must_use]
    pub const fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// The identity's cart contents, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the cart table cannot be read.
    pub fn cart(&self, email: &Email) -> Result<Cart, StorageError> {
        Ok(self.carts()?.remove(email).unwrap_or_default())
    }

    /// Append a course to the identity's cart if absent.
    ///
    /// Returns whether the cart changed. Adding a course that is already
    /// present is a no-op, as is adding one the identity is enrolled in.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on I/O failure.
    pub fn add_to_cart(&self, email: &Email, course: CourseId) -> Result<bool, StorageError> {
        if self.record(email)?.is_enrolled(&course) {
            return Ok(false);
        }

        let mut carts = self.carts()?;
        let added = carts.entry(email.clone()).or_default().add(course);
        if added {
            self.storage.save(CART_SLOT, &carts)?;
        }
        Ok(added)
    }

    /// Remove a course from the identity's cart if present.
    ///
    /// Returns whether the cart changed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on I/O failure.
    pub fn remove_from_cart(
        &self,
        email: &Email,
        course: &CourseId,
    ) -> Result<bool, StorageError> {
        let mut carts = self.carts()?;
        let Some(cart) = carts.get_mut(email) else {
            return Ok(false);
        };
        let removed = cart.remove(course);
        if removed {
            self.storage.save(CART_SLOT, &carts)?;
        }
        Ok(removed)
    }

    /// The identity's enrollment record.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the enrollment table cannot be read.
    pub fn record(&self, email: &Email) -> Result<EnrollmentRecord, StorageError> {
        Ok(self.enrollments()?.remove(email).unwrap_or_default())
    }

    /// Enroll the identity in a course.
    ///
    /// On a new enrollment the course enters the enrollment set at zero
    /// progress. The course leaves the cart either way - a cart may never
    /// hold a course its owner is enrolled in.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on I/O failure.
    pub fn enroll(&self, email: &Email, course: CourseId) -> Result<EnrollOutcome, StorageError> {
        let mut enrollments = self.enrollments()?;
        let newly = enrollments
            .entry(email.clone())
            .or_default()
            .enroll(course.clone());
        if newly {
            self.storage.save(ENROLLMENT_SLOT, &enrollments)?;
            tracing::info!(%email, %course, "enrolled");
        }

        self.remove_from_cart(email, &course)?;

        Ok(if newly {
            EnrollOutcome::NewlyEnrolled
        } else {
            EnrollOutcome::AlreadyEnrolled
        })
    }

    /// Enroll the identity in every cart course not already enrolled.
    ///
    /// The cart is cleared unconditionally, even when nothing new was
    /// enrolled. Returns the number of new enrollments.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on I/O failure.
    pub fn enroll_all(&self, email: &Email) -> Result<usize, StorageError> {
        let mut carts = self.carts()?;
        let pending = carts.entry(email.clone()).or_default().drain();

        let mut enrollments = self.enrollments()?;
        let record = enrollments.entry(email.clone()).or_default();
        let enrolled = pending
            .into_iter()
            .filter(|course| record.enroll(course.clone()))
            .count();

        self.storage.save(ENROLLMENT_SLOT, &enrollments)?;
        self.storage.save(CART_SLOT, &carts)?;

        if enrolled > 0 {
            tracing::info!(%email, count = enrolled, "bulk enrolled");
        }
        Ok(enrolled)
    }

    /// Update progress for an enrolled course.
    ///
    /// Returns `false` without writing if the identity is not enrolled in
    /// the course.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on I/O failure.
    pub fn set_progress(
        &self,
        email: &Email,
        course: &CourseId,
        progress: Progress,
    ) -> Result<bool, StorageError> {
        let mut enrollments = self.enrollments()?;
        let Some(record) = enrollments.get_mut(email) else {
            return Ok(false);
        };
        let updated = record.set_progress(course, progress);
        if updated {
            self.storage.save(ENROLLMENT_SLOT, &enrollments)?;
        }
        Ok(updated)
    }

    fn carts(&self) -> Result<Carts, StorageError> {
        Ok(self.storage.load(CART_SLOT)?.unwrap_or_default())
    }

    fn enrollments(&self) -> Result<Enrollments, StorageError> {
        Ok(self.storage.load(ENROLLMENT_SLOT)?.unwrap_or_default())
    }
}
