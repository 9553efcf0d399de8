//! Integration tests for the challenge-response authenticator

mod common;

use ::common::crypto::SecretKey;
use pict_client::api::requests::ListImagesRequest;
use pict_client::api::{
    resource_path, ApiClient, ApiError, AuthError, AuthPhase, Authenticator,
};

use crate::common::StubServer;

#[tokio::test]
async fn test_idle_to_authenticated() {
    let stub = StubServer::default();
    let base = common::spawn(stub.clone()).await;
    let client = ApiClient::new(&base).unwrap();
    let key = SecretKey::generate();

    let mut authenticator = Authenticator::new(&client);
    assert_eq!(authenticator.phase(), AuthPhase::Idle);

    let session = authenticator.authenticate(&key).await.unwrap();
    assert_eq!(authenticator.phase(), AuthPhase::Authenticated);
    assert_eq!(session.identifier(), &key.public().identifier());
    assert_eq!(stub.auth_attempts(), 1);

    // The ambient session now admits scoped calls
    let images = client
        .call_scoped(
            &session,
            ListImagesRequest {
                topic: "trip2022".into(),
            },
        )
        .await
        .unwrap();
    assert!(images.is_empty());
}

#[tokio::test]
async fn test_challenge_failure_never_signs() {
    let stub = StubServer::default();
    stub.set_fail_challenge(true);
    let base = common::spawn(stub.clone()).await;
    let client = ApiClient::new(&base).unwrap();
    let key = SecretKey::generate();

    let mut authenticator = Authenticator::new(&client);
    let err = authenticator.authenticate(&key).await.unwrap_err();

    match err {
        AuthError::ChallengeFetch { status, body } => {
            assert_eq!(status.as_u16(), 500);
            assert!(body.contains("challenge unavailable"));
        }
        other => panic!("expected ChallengeFetch, got {:?}", other),
    }
    // The attempt died before signing: nothing was ever submitted
    assert_eq!(authenticator.phase(), AuthPhase::Failed);
    assert_eq!(stub.auth_attempts(), 0);
}

#[tokio::test]
async fn test_rejection_leaves_session_unset() {
    let stub = StubServer::default();
    stub.set_reject_auth(true);
    let base = common::spawn(stub.clone()).await;
    let client = ApiClient::new(&base).unwrap();
    let key = SecretKey::generate();

    let mut authenticator = Authenticator::new(&client);
    let err = authenticator.authenticate(&key).await.unwrap_err();

    match err {
        AuthError::Rejected { status, .. } => assert_eq!(status.as_u16(), 401),
        other => panic!("expected Rejected, got {:?}", other),
    }
    assert_eq!(authenticator.phase(), AuthPhase::Failed);
    assert_eq!(stub.auth_attempts(), 1);

    // No cookie was set, so a scoped fetch is refused by the server
    let identifier = key.public().identifier();
    let url = resource_path(&base, &identifier, "trip2022", "images").unwrap();
    let response = client.http_client().get(url).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn test_fresh_attempt_succeeds_after_rejection() {
    let stub = StubServer::default();
    stub.set_reject_auth(true);
    let base = common::spawn(stub.clone()).await;
    let client = ApiClient::new(&base).unwrap();
    let key = SecretKey::generate();

    let mut authenticator = Authenticator::new(&client);
    assert!(authenticator.authenticate(&key).await.is_err());

    // Server recovers; the next attempt starts over from Idle and succeeds
    stub.set_reject_auth(false);
    let session = authenticator.authenticate(&key).await.unwrap();
    assert_eq!(authenticator.phase(), AuthPhase::Authenticated);
    assert_eq!(session.identifier(), &key.public().identifier());
    assert_eq!(stub.auth_attempts(), 2);
}

#[tokio::test]
async fn test_session_is_not_portable_across_clients() {
    let stub = StubServer::default();
    let base = common::spawn(stub.clone()).await;

    let client_a = ApiClient::new(&base).unwrap();
    let key = SecretKey::generate();
    let mut authenticator = Authenticator::new(&client_a);
    let session = authenticator.authenticate(&key).await.unwrap();

    // A different client has an empty cookie jar: the Session value alone
    // does not grant access
    let client_b = ApiClient::new(&base).unwrap();
    let err = client_b
        .call_scoped(
            &session,
            ListImagesRequest {
                topic: "trip2022".into(),
            },
        )
        .await
        .unwrap_err();

    match err {
        ApiError::HttpStatus(status, _) => assert_eq!(status.as_u16(), 401),
        other => panic!("expected HttpStatus, got {:?}", other),
    }
}
