//! Session lifecycle flows: sign-up, login, refresh, logout, and the
//! cache-backed revocation rules tying them together.

mod common;

use std::error::Error;
use std::sync::Arc;

use chrono::Duration;
use tokio::sync::RwLock;

use session_service::domain::{
    CredentialStoreHandle, SessionCache, SessionCacheError, SessionCacheHandle,
};
use session_service::errors::SessionError;
use session_service::services::{HashmapCredentialStore, SessionService};
use session_service::utils::token;

use common::build_session_service;

#[tokio::test]
async fn sign_up_then_login_issues_tracked_token_pair() {
    let (svc, sessions) = build_session_service();

    svc.sign_up("alice", "password123")
        .await
        .expect("sign up should succeed");
    let pair = svc
        .login("alice", "password123")
        .await
        .expect("login should succeed");

    assert_ne!(pair.access.token_id, pair.refresh.token_id);
    assert_ne!(pair.access.token, pair.refresh.token);
    assert!(pair.access.expires_at < pair.refresh.expires_at);

    // Both tokens got a session record mapping token ID to user ID
    let cache = sessions.read().await;
    assert_eq!(
        Some("1".to_owned()),
        cache.get(&pair.access.token_id).await.unwrap()
    );
    assert_eq!(
        Some("1".to_owned()),
        cache.get(&pair.refresh.token_id).await.unwrap()
    );
}

#[tokio::test]
async fn duplicate_sign_up_is_rejected() {
    let (svc, _sessions) = build_session_service();

    svc.sign_up("alice", "password123")
        .await
        .expect("first sign up should succeed");

    let res = svc.sign_up("alice", "different-password").await;
    assert!(
        matches!(res, Err(SessionError::AlreadyExists)),
        "expected AlreadyExists, got {:?}",
        res
    );
}

#[tokio::test]
async fn unknown_user_and_wrong_password_are_indistinguishable() {
    let (svc, _sessions) = build_session_service();
    svc.sign_up("alice", "password123")
        .await
        .expect("sign up should succeed");

    let unknown = svc.login("ghost", "password123").await.unwrap_err();
    let wrong = svc.login("alice", "wrong-password").await.unwrap_err();

    assert!(matches!(unknown, SessionError::InvalidCredentials));
    assert!(matches!(wrong, SessionError::InvalidCredentials));
    assert_eq!(unknown.to_string(), wrong.to_string());
    assert_eq!("invalid name or password", unknown.to_string());
}

#[tokio::test]
async fn authorize_accepts_live_access_token_and_echoes_claims() {
    let (svc, _sessions) = build_session_service();
    svc.sign_up("alice", "password123").await.unwrap();
    let pair = svc.login("alice", "password123").await.unwrap();

    let claims = svc
        .authorize(&pair.access.token)
        .await
        .expect("live token should authorize");

    assert_eq!(pair.access.user_id, claims.sub);
    assert_eq!("alice", claims.name);
    assert_eq!(vec!["user".to_owned()], claims.roles);
    assert_eq!(pair.access.token_id, claims.jti);
    assert_eq!(900, claims.exp - claims.iat);
}

#[tokio::test]
async fn refresh_mints_new_access_token_and_keeps_old_one_valid() {
    let (svc, sessions) = build_session_service();
    svc.sign_up("alice", "password123").await.unwrap();
    let pair = svc.login("alice", "password123").await.unwrap();

    let second = svc
        .refresh_access_token(&pair.refresh.token)
        .await
        .expect("refresh should succeed");

    assert_ne!(pair.access.token_id, second.token_id);
    assert_eq!(pair.access.user_id, second.user_id);

    // Refresh adds a record without touching existing ones
    svc.authorize(&pair.access.token)
        .await
        .expect("old access token stays valid");
    let claims = svc
        .authorize(&second.token)
        .await
        .expect("new access token is valid");
    assert_eq!("alice", claims.name);

    let cache = sessions.read().await;
    assert_eq!(
        Some("1".to_owned()),
        cache.get(&second.token_id).await.unwrap()
    );
}

#[tokio::test]
async fn refresh_fails_revoked_once_its_record_is_gone() {
    let (svc, sessions) = build_session_service();
    svc.sign_up("alice", "password123").await.unwrap();
    let pair = svc.login("alice", "password123").await.unwrap();

    // Evict the refresh token's record, as an operator or TTL would
    sessions
        .write()
        .await
        .delete(&pair.refresh.token_id)
        .await
        .unwrap();

    let res = svc.refresh_access_token(&pair.refresh.token).await;
    assert!(
        matches!(res, Err(SessionError::Revoked)),
        "expected Revoked, got {:?}",
        res
    );
}

#[tokio::test]
async fn refresh_rejects_foreign_and_garbage_tokens() {
    let (svc, _sessions) = build_session_service();
    svc.sign_up("alice", "password123").await.unwrap();
    let pair = svc.login("alice", "password123").await.unwrap();

    // An access token never validates under the refresh key pair
    let res = svc.refresh_access_token(&pair.access.token).await;
    assert!(
        matches!(res, Err(SessionError::InvalidToken(_))),
        "expected InvalidToken for an access token, got {:?}",
        res
    );

    let res = svc.refresh_access_token("not-a-jwt").await;
    assert!(
        matches!(res, Err(SessionError::InvalidToken(_))),
        "expected InvalidToken for garbage, got {:?}",
        res
    );
}

#[tokio::test]
async fn logout_revokes_access_token_before_its_expiry() {
    let (svc, _sessions) = build_session_service();
    svc.sign_up("alice", "password123").await.unwrap();
    let pair = svc.login("alice", "password123").await.unwrap();

    svc.logout(&pair.refresh.token, &pair.access.token_id)
        .await
        .expect("logout should succeed");

    let res = svc.authorize(&pair.access.token).await;
    assert!(
        matches!(res, Err(SessionError::Revoked)),
        "expected Revoked after logout, got {:?}",
        res
    );

    // The token itself is still cryptographically sound; only its session
    // record is gone.
    let credential = common::access_credential(Duration::minutes(15));
    token::validate(&pair.access.token, credential.decoding_key())
        .expect("signature and expiry still check out");

    // Logging out again finds nothing to delete and still succeeds
    svc.logout(&pair.refresh.token, &pair.access.token_id)
        .await
        .expect("logout is idempotent");
}

#[tokio::test]
async fn logout_leaves_refresh_token_usable() {
    let (svc, _sessions) = build_session_service();
    svc.sign_up("alice", "password123").await.unwrap();
    let pair = svc.login("alice", "password123").await.unwrap();

    svc.logout(&pair.refresh.token, &pair.access.token_id)
        .await
        .unwrap();

    // Documented gap: logout only drops the access token's record, so the
    // refresh token keeps minting valid access tokens until its TTL.
    let after = svc
        .refresh_access_token(&pair.refresh.token)
        .await
        .expect("refresh still works after logout");
    svc.authorize(&after.token)
        .await
        .expect("token minted after logout is live");
}

#[tokio::test]
async fn full_session_lifecycle() {
    let (svc, _sessions) = build_session_service();

    svc.sign_up("alice", "password123").await.unwrap();
    let pair = svc.login("alice", "password123").await.unwrap();
    let first_access = pair.access.clone();

    svc.authorize(&first_access.token)
        .await
        .expect("fresh access token authorizes");

    let second_access = svc
        .refresh_access_token(&pair.refresh.token)
        .await
        .expect("refresh mints a second access token");
    assert_ne!(first_access.token_id, second_access.token_id);

    svc.authorize(&first_access.token)
        .await
        .expect("first access token still live after refresh");
    svc.authorize(&second_access.token)
        .await
        .expect("second access token live");

    svc.logout(&pair.refresh.token, &second_access.token_id)
        .await
        .expect("logout succeeds");

    // Only the logged-out token is refused; records are independent
    let revoked = svc.authorize(&second_access.token).await;
    assert!(matches!(revoked, Err(SessionError::Revoked)));
    svc.authorize(&first_access.token)
        .await
        .expect("first access token unaffected by the other logout");
}

struct FailingSessionCache;

#[async_trait::async_trait]
impl SessionCache for FailingSessionCache {
    async fn set(&mut self, _: &str, _: &str, _: usize) -> Result<(), SessionCacheError> {
        Err(SessionCacheError::Backend("connection refused".to_owned()))
    }

    async fn get(&self, _: &str) -> Result<Option<String>, SessionCacheError> {
        Err(SessionCacheError::Backend("connection refused".to_owned()))
    }

    async fn delete(&mut self, _: &str) -> Result<bool, SessionCacheError> {
        Err(SessionCacheError::Backend("connection refused".to_owned()))
    }
}

#[tokio::test]
async fn cache_outage_surfaces_as_backend_error() {
    let credentials: CredentialStoreHandle = Arc::new(RwLock::new(HashmapCredentialStore::new()));
    let sessions: SessionCacheHandle = Arc::new(RwLock::new(FailingSessionCache));
    let svc = SessionService::new(
        credentials,
        sessions,
        common::access_credential(Duration::minutes(15)),
        common::refresh_credential(Duration::days(7)),
        "user".to_owned(),
    );

    // Sign-up never touches the cache
    svc.sign_up("alice", "password123")
        .await
        .expect("sign up should succeed without the cache");

    let res = svc.login("alice", "password123").await;
    let err = match res {
        Err(e) => e,
        Ok(_) => panic!("expected login to fail against a dead cache"),
    };
    assert!(matches!(err, SessionError::Backend(_)));

    // The message stays generic; the cache detail rides the source chain
    assert_eq!("backend unavailable", err.to_string());
    assert!(err.source().is_some());
    assert!(err.source().unwrap().to_string().contains("connection refused"));
}
