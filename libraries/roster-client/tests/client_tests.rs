//! Tests for the Roster client library.
//!
//! These tests use mock servers to verify client behavior without
//! requiring a real server.

use roster_client::{ClientError, CreateOutcome, RosterClient};
use roster_core::{CreateUser, UserId};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// =============================================================================
// Client Creation Tests
// =============================================================================

mod client_creation {
    use super::*;

    #[test]
    fn test_empty_url_rejected() {
        match RosterClient::new("").unwrap_err() {
            ClientError::InvalidUrl(msg) => assert!(msg.contains("empty")),
            e => panic!("Expected InvalidUrl error, got: {:?}", e),
        }
    }

    #[test]
    fn test_url_without_scheme_rejected() {
        match RosterClient::new("example.com").unwrap_err() {
            ClientError::InvalidUrl(msg) => {
                assert!(msg.contains("http://") || msg.contains("https://"));
            }
            e => panic!("Expected InvalidUrl error, got: {:?}", e),
        }
    }
}

// =============================================================================
// Listing
// =============================================================================

mod list_users {
    use super::*;

    #[tokio::test]
    async fn test_empty_list() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&mock_server)
            .await;

        let client = RosterClient::new(mock_server.uri()).unwrap();
        let users = client.list_users().await.unwrap();

        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn test_users_with_profile_fields() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 1, "name": "Alice"},
                {"id": 2, "name": "Bob", "email": "bob@example.com"}
            ])))
            .mount(&mock_server)
            .await;

        let client = RosterClient::new(mock_server.uri()).unwrap();
        let users = client.list_users().await.unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, UserId::new(1));
        assert_eq!(users[1].profile["email"], "bob@example.com");
    }

    #[tokio::test]
    async fn test_server_error_surfaces_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&mock_server)
            .await;

        let client = RosterClient::new(mock_server.uri()).unwrap();

        match client.list_users().await.unwrap_err() {
            ClientError::UnexpectedStatus { status, message } => {
                assert_eq!(status, 500);
                assert!(message.contains("Internal"));
            }
            e => panic!("Expected UnexpectedStatus, got: {:?}", e),
        }
    }
}

// =============================================================================
// Lookup
// =============================================================================

mod get_user {
    use super::*;

    #[tokio::test]
    async fn test_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"id": 1, "name": "Alice"})),
            )
            .mount(&mock_server)
            .await;

        let client = RosterClient::new(mock_server.uri()).unwrap();
        let user = client.get_user(UserId::new(1)).await.unwrap().unwrap();

        assert_eq!(user.name(), Some("Alice"));
    }

    #[tokio::test]
    async fn test_no_content_means_absent() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/2"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&mock_server)
            .await;

        let client = RosterClient::new(mock_server.uri()).unwrap();
        let user = client.get_user(UserId::new(2)).await.unwrap();

        assert!(user.is_none());
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/3"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let client = RosterClient::new(mock_server.uri()).unwrap();

        match client.get_user(UserId::new(3)).await.unwrap_err() {
            ClientError::Parse(_) => {}
            e => panic!("Expected Parse error, got: {:?}", e),
        }
    }
}

// =============================================================================
// Creation
// =============================================================================

mod create_user {
    use super::*;

    #[tokio::test]
    async fn test_created_without_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/users"))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::json!({"name": "Bob"})))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = RosterClient::new(mock_server.uri()).unwrap();
        let outcome = client.create_user(&CreateUser::new("Bob")).await.unwrap();

        assert_eq!(outcome, CreateOutcome::Created(None));
    }

    #[tokio::test]
    async fn test_created_with_entity() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/users"))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(serde_json::json!({"id": 2, "name": "Bob"})),
            )
            .mount(&mock_server)
            .await;

        let client = RosterClient::new(mock_server.uri()).unwrap();

        match client.create_user(&CreateUser::new("Bob")).await.unwrap() {
            CreateOutcome::Created(Some(user)) => assert_eq!(user.id, UserId::new(2)),
            other => panic!("Expected created entity, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_conflict() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(409))
            .mount(&mock_server)
            .await;

        let client = RosterClient::new(mock_server.uri()).unwrap();
        let request = CreateUser::new("Mallory").with_id(UserId::new(1));

        assert_eq!(
            client.create_user(&request).await.unwrap(),
            CreateOutcome::Conflict
        );
    }
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"status": "ok", "version": "0.1.0"})),
        )
        .mount(&mock_server)
        .await;

    let client = RosterClient::new(mock_server.uri()).unwrap();
    let info = client.health().await.unwrap();

    assert_eq!(info.status, "ok");
    assert_eq!(info.version, "0.1.0");
}
