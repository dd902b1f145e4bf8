//! Cart and enrollment records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use learnhub_core::{CourseId, Progress};

/// An ordered set of catalog items awaiting enrollment confirmation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Cart(Vec<CourseId>);

impl Cart {
    /// Courses in insertion order.
    #[must_use]
    pub fn courses(&self) -> &[CourseId] {
        &self.0
    }

    /// Whether the cart holds the given course.
    #[must_use]
    pub fn contains(&self, course: &CourseId) -> bool {
        self.0.contains(course)
    }

    /// Whether the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append a course if absent. Returns whether anything changed.
    pub fn add(&mut self, course: CourseId) -> bool {
        if self.contains(&course) {
            false
        } else {
            self.0.push(course);
            true
        }
    }

    /// Remove a course if present. Returns whether anything changed.
    pub fn remove(&mut self, course: &CourseId) -> bool {
        let before = self.0.len();
        self.0.retain(|c| c != course);
        self.0.len() != before
    }

    /// Empty the cart, returning the courses it held.
    pub fn drain(&mut self) -> Vec<CourseId> {
        std::mem::take(&mut self.0)
    }
}

/// Per-identity enrollment state: enrolled courses and their progress.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnrollmentRecord {
    /// Enrolled courses in enrollment order.
    pub courses: Vec<CourseId>,
    /// Completion percentage per enrolled course.
    pub progress: BTreeMap<CourseId, Progress>,
}

impl EnrollmentRecord {
    /// Whether the identity is enrolled in the given course.
    #[must_use]
    pub fn is_enrolled(&self, course: &CourseId) -> bool {
        self.courses.contains(course)
    }

    /// Enroll in a course at zero progress. Returns `false` if already
    /// enrolled, leaving the record untouched.
    pub fn enroll(&mut self, course: CourseId) -> bool {
        if self.is_enrolled(&course) {
            return false;
        }
        self.progress.insert(course.clone(), Progress::ZERO);
        self.courses.push(course);
        true
    }

    /// Progress for a course, if enrolled.
    #[must_use]
    pub fn progress_for(&self, course: &CourseId) -> Option<Progress> {
        self.progress.get(course).copied()
    }

    /// Update progress for a course. Returns `false` if not enrolled.
    pub fn set_progress(&mut self, course: &CourseId, progress: Progress) -> bool {
        if !self.is_enrolled(course) {
            return false;
        }
        self.progress.insert(course.clone(), progress);
        true
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn course(slug: &str) -> CourseId {
        CourseId::parse(slug).unwrap()
    }

    #[test]
    fn test_cart_add_is_idempotent() {
        let mut cart = Cart::default();
        assert!(cart.add(course("digital-literacy")));
        assert!(!cart.add(course("digital-literacy")));
        assert_eq!(cart.courses().len(), 1);
    }

    #[test]
    fn test_cart_preserves_order() {
        let mut cart = Cart::default();
        cart.add(course("b-course"));
        cart.add(course("a-course"));
        assert_eq!(
            cart.courses(),
            &[course("b-course"), course("a-course")]
        );
    }

    #[test]
    fn test_cart_remove() {
        let mut cart = Cart::default();
        cart.add(course("digital-literacy"));
        assert!(cart.remove(&course("digital-literacy")));
        assert!(!cart.remove(&course("digital-literacy")));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_enroll_once() {
        let mut record = EnrollmentRecord::default();
        assert!(record.enroll(course("digital-literacy")));
        assert!(!record.enroll(course("digital-literacy")));
        assert_eq!(record.courses.len(), 1);
        assert_eq!(
            record.progress_for(&course("digital-literacy")),
            Some(Progress::ZERO)
        );
    }

    #[test]
    fn test_set_progress_requires_enrollment() {
        let mut record = EnrollmentRecord::default();
        assert!(!record.set_progress(&course("digital-literacy"), Progress::new(10)));

        record.enroll(course("digital-literacy"));
        assert!(record.set_progress(&course("digital-literacy"), Progress::new(10)));
        assert_eq!(
            record.progress_for(&course("digital-literacy")),
            Some(Progress::new(10))
        );
    }
}
