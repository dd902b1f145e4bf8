//! Session expiry feeding into entry-point routing.

#![allow(clippy::unwrap_used)]

use chrono::Duration;

use learnhub_integration_tests::{TestContext, secret};
use learnhub_platform::router::EntryDecision;
use learnhub_platform::ui::ModalKind;

#[tokio::test]
async fn test_session_survives_up_to_its_lifetime() {
    let tc = TestContext::new();
    tc.seed_verified_account("Ada", "ada@example.com", "secret1").await;
    tc.ctx
        .auth()
        .login("ada@example.com", &secret("secret1"))
        .await
        .unwrap();

    tc.clock.advance(Duration::days(7));
    assert!(tc.ctx.sessions().current().unwrap().is_some());
    assert_eq!(
        tc.ctx.router().on_start_learning().unwrap(),
        EntryDecision::GoToDashboard
    );
}

#[tokio::test]
async fn test_expired_session_routes_back_to_sign_in() {
    let tc = TestContext::new();
    tc.seed_verified_account("Ada", "ada@example.com", "secret1").await;
    tc.ctx
        .auth()
        .login("ada@example.com", &secret("secret1"))
        .await
        .unwrap();

    tc.clock.advance(Duration::days(7) + Duration::seconds(1));

    // expiry is observed lazily on read, and the slot is cleared
    assert!(tc.ctx.sessions().current().unwrap().is_none());
    assert_eq!(
        tc.ctx.router().on_start_learning().unwrap(),
        EntryDecision::ShowModal(ModalKind::SignIn)
    );
}

#[tokio::test]
async fn test_empty_store_routes_to_registration() {
    let tc = TestContext::new();
    assert_eq!(
        tc.ctx.router().on_start_learning().unwrap(),
        EntryDecision::ShowModal(ModalKind::Registration)
    );
}

#[tokio::test]
async fn test_logout_then_start_offers_sign_in() {
    let tc = TestContext::new();
    tc.seed_verified_account("Ada", "ada@example.com", "secret1").await;
    let auth = tc.ctx.auth();
    auth.login("ada@example.com", &secret("secret1")).await.unwrap();
    auth.logout().unwrap();

    assert_eq!(
        tc.ctx.router().on_start_learning().unwrap(),
        EntryDecision::ShowModal(ModalKind::SignIn)
    );
}

#[tokio::test]
async fn test_relogin_issues_a_fresh_token() {
    let tc = TestContext::new();
    tc.seed_verified_account("Ada", "ada@example.com", "secret1").await;
    let auth = tc.ctx.auth();

    let first = auth.login("ada@example.com", &secret("secret1")).await.unwrap();
    let second = auth.login("ada@example.com", &secret("secret1")).await.unwrap();

    assert_ne!(first.token, second.token);
    let current = tc.ctx.sessions().current().unwrap().unwrap();
    assert_eq!(current.token, second.token);
}
