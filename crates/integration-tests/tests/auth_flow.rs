//! Registration, verification, and sign-in, end to end.

#![allow(clippy::unwrap_used)]

use learnhub_integration_tests::{TestContext, secret};
use learnhub_platform::AppError;
use learnhub_platform::router::EntryDecision;
use learnhub_platform::services::AuthError;
use learnhub_platform::store::{IdentityError, IdentityField};

#[tokio::test]
async fn test_register_verify_login_reaches_dashboard() {
    let tc = TestContext::new();
    let auth = tc.ctx.auth();

    let identity = auth
        .register("Ada", "ada@example.com", &secret("secret1"))
        .await
        .unwrap();
    assert!(!identity.verified);

    // correct secret, but the email is not verified yet
    let err = auth.login("ada@example.com", &secret("secret1")).await;
    assert!(matches!(err, Err(AuthError::NotVerified)));

    auth.verify(&identity.email).unwrap();
    auth.login("ada@example.com", &secret("secret1"))
        .await
        .unwrap();

    assert_eq!(
        tc.ctx.router().on_start_learning().unwrap(),
        EntryDecision::GoToDashboard
    );
}

#[tokio::test]
async fn test_bad_email_creates_nothing() {
    let tc = TestContext::new();

    let err = tc
        .ctx
        .auth()
        .register("Ada", "bad-email", &secret("secret1"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AuthError::Registration(IdentityError::InvalidInput {
            field: IdentityField::Email,
            ..
        })
    ));
    assert!(tc.ctx.identities().is_empty().unwrap());
}

#[tokio::test]
async fn test_duplicate_registration_leaves_store_unchanged() {
    let tc = TestContext::new();
    let auth = tc.ctx.auth();

    auth.register("Bo", "bo@x.com", &secret("abcdef")).await.unwrap();
    let err = auth
        .register("Bo", "bo@x.com", &secret("abcdef"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AuthError::Registration(IdentityError::DuplicateEmail)
    ));
    assert_eq!(tc.ctx.identities().count().unwrap(), 1);
}

#[tokio::test]
async fn test_user_messages_never_leak_account_existence() {
    let tc = TestContext::new();
    tc.seed_verified_account("Ada", "ada@example.com", "secret1").await;
    let auth = tc.ctx.auth();

    let unknown = auth
        .login("ghost@example.com", &secret("secret1"))
        .await
        .unwrap_err();
    let wrong = auth
        .login("ada@example.com", &secret("wrong-secret"))
        .await
        .unwrap_err();

    assert_eq!(
        AppError::from(unknown).user_message(),
        AppError::from(wrong).user_message()
    );
}
