//! Carts, enrollment, and progress for a signed-in account.

#![allow(clippy::unwrap_used)]

use learnhub_core::{CourseId, Progress};
use learnhub_integration_tests::{TestContext, secret};
use learnhub_platform::services::EnrollmentError;
use learnhub_platform::store::EnrollOutcome;

async fn signed_in_context() -> TestContext {
    let tc = TestContext::new();
    tc.seed_verified_account("Ada", "ada@example.com", "secret1").await;
    tc.ctx
        .auth()
        .login("ada@example.com", &secret("secret1"))
        .await
        .unwrap();
    tc
}

fn course(slug: &str) -> CourseId {
    CourseId::parse(slug).unwrap()
}

#[tokio::test]
async fn test_enrollment_requires_a_session() {
    let tc = TestContext::new();
    tc.seed_verified_account("Ada", "ada@example.com", "secret1").await;

    let err = tc.ctx.enrollment().add_to_cart(course("digital-literacy"));
    assert!(matches!(err, Err(EnrollmentError::NotSignedIn)));
}

#[tokio::test]
async fn test_cart_to_enrollment() {
    let tc = signed_in_context().await;
    let enrollment = tc.ctx.enrollment();

    assert!(enrollment.add_to_cart(course("digital-literacy")).unwrap());
    let outcome = enrollment.enroll(course("digital-literacy")).await.unwrap();
    assert_eq!(outcome, EnrollOutcome::NewlyEnrolled);

    // the course moved from the cart to the enrollment set, at zero progress
    assert!(enrollment.cart().unwrap().is_empty());
    let record = enrollment.record().unwrap();
    assert_eq!(
        record.progress_for(&course("digital-literacy")),
        Some(Progress::ZERO)
    );

    // enrolling again changes nothing
    let outcome = enrollment.enroll(course("digital-literacy")).await.unwrap();
    assert_eq!(outcome, EnrollOutcome::AlreadyEnrolled);
    assert_eq!(enrollment.record().unwrap().courses.len(), 1);
}

#[tokio::test]
async fn test_enroll_all_clears_cart() {
    let tc = signed_in_context().await;
    let enrollment = tc.ctx.enrollment();

    enrollment.add_to_cart(course("digital-literacy")).unwrap();
    enrollment.add_to_cart(course("web-foundations")).unwrap();

    assert_eq!(enrollment.enroll_all().await.unwrap(), 2);
    assert!(enrollment.cart().unwrap().is_empty());

    // nothing left to enroll, cart stays empty
    assert_eq!(enrollment.enroll_all().await.unwrap(), 0);
}

#[tokio::test]
async fn test_progress_updates_persist() {
    let tc = signed_in_context().await;
    let enrollment = tc.ctx.enrollment();

    enrollment.enroll(course("digital-literacy")).await.unwrap();
    enrollment
        .set_progress(&course("digital-literacy"), Progress::new(40))
        .unwrap();

    assert_eq!(
        enrollment
            .record()
            .unwrap()
            .progress_for(&course("digital-literacy")),
        Some(Progress::new(40))
    );
}

#[tokio::test]
async fn test_records_are_scoped_per_account() {
    let tc = signed_in_context().await;
    tc.ctx.enrollment().enroll(course("digital-literacy")).await.unwrap();

    // a second account sees an empty record
    tc.seed_verified_account("Bo", "bo@x.com", "abcdef").await;
    tc.ctx.auth().login("bo@x.com", &secret("abcdef")).await.unwrap();

    assert!(tc.ctx.enrollment().record().unwrap().courses.is_empty());
    assert!(tc.ctx.enrollment().cart().unwrap().is_empty());
}
