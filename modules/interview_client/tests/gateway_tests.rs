//! Integration tests for the gateway client: error normalization and
//! bearer token propagation

use httpmock::prelude::*;
use interview_client::contract::{AuthApi, UserApi};
use interview_client::{ClientConfig, HttpMethod, InterviewClient, TokenStore};
use serde_json::json;
use std::time::Duration;

mod common;
use common::{SessionEvent, TestHarness};

// ===== Transport failures =====

#[tokio::test]
async fn test_connection_refused_is_status_zero() {
    common::init_tracing();
    let client = InterviewClient::new(ClientConfig::new("http://127.0.0.1:1")).unwrap();

    let err = client
        .request("/auth/user-info", HttpMethod::Get, None, true)
        .await
        .unwrap_err();

    assert_eq!(err.status_code, 0);
    assert!(err.is_transport());
    assert!(err.message.starts_with("Network error"), "got {}", err.message);
    assert!(err.payload.is_empty());
}

#[tokio::test]
async fn test_timeout_is_status_zero() {
    let h = TestHarness::start_with(|c| c.with_timeout_millis(Some(100))).await;
    let _m = h
        .server
        .mock_async(|when, then| {
            when.method(GET).path("/news");
            then.status(200)
                .delay(Duration::from_secs(2))
                .json_body(json!({"content": []}));
        })
        .await;

    let err = h
        .client
        .request("/news?page=0&size=10", HttpMethod::Get, None, false)
        .await
        .unwrap_err();

    assert_eq!(err.status_code, 0);
    assert!(err.message.contains("timed out"), "got {}", err.message);
}

#[tokio::test]
async fn test_undecodable_success_body_is_status_zero() {
    let h = TestHarness::start().await;
    let _m = h
        .server
        .mock_async(|when, then| {
            when.method(GET).path("/careers/1");
            then.status(200).body("<html>maintenance</html>");
        })
        .await;

    let err = h
        .client
        .request("/careers/1", HttpMethod::Get, None, true)
        .await
        .unwrap_err();

    assert_eq!(err.status_code, 0);
    assert!(err.message.starts_with("Invalid response body"));
}

// ===== Success fidelity =====

#[tokio::test]
async fn test_success_body_returned_verbatim() {
    let h = TestHarness::start().await;
    let body = json!({
        "id": 3,
        "content": "What is ownership?",
        "tags": ["rust", "memory"],
        "nested": {"score": 4.5, "flag": null}
    });
    let expected = body.clone();
    let _m = h
        .server
        .mock_async(move |when, then| {
            when.method(GET).path("/questions/3");
            then.status(200).json_body(body);
        })
        .await;

    let value = h
        .client
        .request("/questions/3", HttpMethod::Get, None, true)
        .await
        .unwrap();

    assert_eq!(value, expected);
}

#[tokio::test]
async fn test_empty_success_body_is_null() {
    let h = TestHarness::start().await;
    let _m = h
        .server
        .mock_async(|when, then| {
            when.method(DELETE).path("/exams/9");
            then.status(204);
        })
        .await;

    let value = h
        .client
        .request("/exams/9", HttpMethod::Delete, None, true)
        .await
        .unwrap();

    assert!(value.is_null());
}

// ===== Error normalization =====

#[tokio::test]
async fn test_not_found_uses_detail() {
    let h = TestHarness::start().await;
    let _m = h
        .server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/questions/questions")
                .query_param("page", "0")
                .query_param("size", "10");
            then.status(404).json_body(json!({"detail": "not found"}));
        })
        .await;

    let err = h
        .client
        .request("/questions/questions?page=0&size=10", HttpMethod::Get, None, true)
        .await
        .unwrap_err();

    assert_eq!(err.message, "not found");
    assert_eq!(err.status_code, 404);
    assert_eq!(err.payload.get("detail"), Some(&json!("not found")));
}

#[tokio::test]
async fn test_error_without_detail_uses_status() {
    let h = TestHarness::start().await;
    let _m = h
        .server
        .mock_async(|when, then| {
            when.method(POST).path("/exams");
            then.status(500).json_body(json!({"title": "Internal Server Error"}));
        })
        .await;

    let err = h
        .client
        .request("/exams", HttpMethod::Post, Some(&json!({"title": "x"})), true)
        .await
        .unwrap_err();

    assert_eq!(err.message, "HTTP 500");
    assert_eq!(err.status_code, 500);
    assert_eq!(err.payload.get("title"), Some(&json!("Internal Server Error")));
}

#[tokio::test]
async fn test_problem_envelope_is_typed() {
    let h = TestHarness::start().await;
    let _m = h
        .server
        .mock_async(|when, then| {
            when.method(POST).path("/auth/register");
            then.status(409).json_body(json!({
                "type": "https://errors.example.com/EMAIL_TAKEN",
                "title": "Conflict",
                "status": 409,
                "detail": "Email already registered",
                "errorCode": "EMAIL_TAKEN"
            }));
        })
        .await;

    let err = h
        .client
        .request(
            "/auth/register",
            HttpMethod::Post,
            Some(&json!({"email": "a@b.c"})),
            false,
        )
        .await
        .unwrap_err();

    assert_eq!(err.message, "Email already registered");
    let problem = err.problem().unwrap();
    assert_eq!(problem.error_code.as_deref(), Some("EMAIL_TAKEN"));
    assert_eq!(problem.status, Some(409));
}

// ===== Token propagation =====

#[tokio::test]
async fn test_login_adopts_token() {
    let h = TestHarness::start().await;
    let response = json!({
        "accessToken": "abc",
        "tokenType": "Bearer",
        "refreshToken": "r",
        "expiresIn": 3600
    });
    let expected = response.clone();
    let login = h
        .server
        .mock_async(move |when, then| {
            when.method(POST)
                .path("/auth/login")
                .header("content-type", "application/json")
                .json_body(json!({"email": "a@b.com", "password": "pw"}));
            then.status(200).json_body(response);
        })
        .await;

    let value = h
        .client
        .request(
            "/auth/login",
            HttpMethod::Post,
            Some(&json!({"email": "a@b.com", "password": "pw"})),
            false,
        )
        .await
        .unwrap();

    login.assert_async().await;
    assert_eq!(value, expected);
    assert_eq!(h.client.token().as_deref(), Some("abc"));
    assert_eq!(h.store.get("authToken").unwrap().as_deref(), Some("abc"));
}

#[tokio::test]
async fn test_bearer_header_sent_after_login() {
    let h = TestHarness::start().await;
    let _login = h
        .server
        .mock_async(|when, then| {
            when.method(POST).path("/auth/login");
            then.status(200).json_body(json!({"accessToken": "T"}));
        })
        .await;
    let user_info = h
        .server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/auth/user-info")
                .header("authorization", "Bearer T");
            then.status(200)
                .json_body(json!({"id": 1, "email": "a@b.c", "roleName": "ADMIN"}));
        })
        .await;

    let auth = h.client.auth();
    auth.login("a@b.c", "p").await.unwrap();
    let user = auth.user_info().await.unwrap();

    user_info.assert_async().await;
    assert_eq!(user.id, 1);
    assert_eq!(user.role_name.as_deref(), Some("ADMIN"));
}

#[tokio::test]
async fn test_no_authorization_header_without_token() {
    let h = TestHarness::start_with(|c| c.with_token("stale")).await;
    let news = h
        .server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/news")
                .header_missing("authorization");
            then.status(200).json_body(json!({"content": [], "totalElements": 0}));
        })
        .await;

    h.client.set_token(None);
    h.client
        .request("/news?page=0&size=10", HttpMethod::Get, None, false)
        .await
        .unwrap();

    news.assert_async().await;
}

#[tokio::test]
async fn test_token_response_without_access_token_keeps_token() {
    let h = TestHarness::start_with(|c| c.with_token("T0")).await;
    let _m = h
        .server
        .mock_async(|when, then| {
            when.method(POST).path("/auth/register");
            then.status(200).json_body(json!({"message": "check your inbox"}));
        })
        .await;

    h.client
        .request("/auth/register", HttpMethod::Post, Some(&json!({})), false)
        .await
        .unwrap();

    assert_eq!(h.client.token().as_deref(), Some("T0"));
}

#[tokio::test]
async fn test_refresh_adopts_token() {
    let h = TestHarness::start().await;
    let _refresh = h
        .server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/auth/refresh")
                .json_body(json!({"refreshToken": "R"}));
            then.status(200).json_body(json!({"accessToken": "T2"}));
        })
        .await;

    h.client.auth().refresh_token("R").await.unwrap();

    assert_eq!(h.client.token().as_deref(), Some("T2"));
}

#[tokio::test]
async fn test_verify_email_leaves_token_unchanged() {
    let h = TestHarness::start_with(|c| c.with_token("T0")).await;
    let verify = h
        .server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/auth/verify")
                .query_param("token", "abc-123");
            then.status(200).json_body(json!({"accessToken": "V"}));
        })
        .await;

    let tokens = h.client.auth().verify_email("abc-123").await.unwrap();
    assert_eq!(tokens.access_token.as_deref(), Some("V"));
    assert_eq!(h.client.token().as_deref(), Some("T0"));

    let value = h
        .client
        .request("/auth/verify?token=abc-123", HttpMethod::Get, None, false)
        .await
        .unwrap();
    assert_eq!(value["accessToken"], "V");
    assert_eq!(h.client.token().as_deref(), Some("T0"));
    assert_eq!(h.store.get("authToken").unwrap().as_deref(), Some("T0"));

    verify.assert_hits_async(2).await;
}

#[tokio::test]
async fn test_login_with_malformed_token_response_keeps_token() {
    let h = TestHarness::start().await;
    let _login = h
        .server
        .mock_async(|when, then| {
            when.method(POST).path("/auth/login");
            then.status(200)
                .json_body(json!({"accessToken": "abc", "expiresIn": "3600"}));
        })
        .await;

    let err = h.client.auth().login("a@b.com", "pw").await.unwrap_err();

    assert_eq!(err.status_code, 0);
    assert!(err.message.starts_with("Invalid response body"), "got {}", err.message);
    assert_eq!(h.client.token(), None);
    assert_eq!(h.store.get("authToken").unwrap(), None);
}

#[tokio::test]
async fn test_non_auth_route_does_not_adopt_token() {
    let h = TestHarness::start().await;
    let _m = h
        .server
        .mock_async(|when, then| {
            when.method(GET).path("/users/1");
            then.status(200).json_body(json!({"id": 1, "accessToken": "nope"}));
        })
        .await;

    h.client
        .request("/users/1", HttpMethod::Get, None, true)
        .await
        .unwrap();

    assert_eq!(h.client.token(), None);
}

// ===== 401 handling =====

#[tokio::test]
async fn test_unauthorized_clears_token_and_notifies() {
    let h = TestHarness::start_with(|c| c.with_token("T")).await;
    let _m = h
        .server
        .mock_async(|when, then| {
            when.method(GET).path("/users/5");
            then.status(401);
        })
        .await;

    let err = h.client.users().get_user(5).await.unwrap_err();

    assert_eq!(err.message, "HTTP 401");
    assert_eq!(err.status_code, 401);
    assert!(err.is_unauthorized());
    assert_eq!(h.client.token(), None);
    assert!(!h.client.is_authenticated());
    assert_eq!(h.store.get("authToken").unwrap(), None);
    assert_eq!(h.listener.unauthorized_routes(), vec!["/users/5".to_owned()]);
}

#[tokio::test]
async fn test_unauthorized_without_token_reports_status() {
    let h = TestHarness::start().await;
    let _m = h
        .server
        .mock_async(|when, then| {
            when.method(GET).path("/users/5").header_missing("authorization");
            then.status(401);
        })
        .await;

    let err = h
        .client
        .request("/users/5", HttpMethod::Get, None, true)
        .await
        .unwrap_err();

    assert_eq!(err.status_code, 401);
    assert_eq!(err.message, "HTTP 401");
    assert!(err.payload.is_empty());
    assert_eq!(h.client.token(), None);
}

#[tokio::test]
async fn test_unauthorized_on_login_also_clears_token() {
    let h = TestHarness::start_with(|c| c.with_token("old")).await;
    let _m = h
        .server
        .mock_async(|when, then| {
            when.method(POST).path("/auth/login");
            then.status(401)
                .json_body(json!({"detail": "Invalid email or password"}));
        })
        .await;

    let err = h.client.auth().login("a@b.c", "wrong").await.unwrap_err();

    assert_eq!(err.message, "Invalid email or password");
    assert_eq!(h.client.token(), None);

    let events = h.listener.events();
    assert_eq!(
        &events[events.len() - 2..],
        &[
            SessionEvent::TokenChanged(false),
            SessionEvent::Unauthorized("/auth/login".to_owned()),
        ]
    );
}

#[tokio::test]
async fn test_other_errors_keep_token() {
    let h = TestHarness::start_with(|c| c.with_token("T")).await;
    let _m = h
        .server
        .mock_async(|when, then| {
            when.method(GET).path("/users/5");
            then.status(403).json_body(json!({"detail": "Access denied"}));
        })
        .await;

    let err = h.client.users().get_user(5).await.unwrap_err();

    assert_eq!(err.status_code, 403);
    assert_eq!(h.client.token().as_deref(), Some("T"));
    assert!(h.listener.unauthorized_routes().is_empty());
}

// ===== Token state =====

#[tokio::test]
async fn test_set_token_twice_is_idempotent() {
    let h = TestHarness::start().await;
    let m = h
        .server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/auth/user-info")
                .header("authorization", "Bearer X");
            then.status(200).json_body(json!({"id": 7}));
        })
        .await;

    h.client.set_token(Some("X".into()));
    h.client.set_token(Some("X".into()));
    h.client.auth().user_info().await.unwrap();

    m.assert_async().await;
    assert_eq!(h.client.token().as_deref(), Some("X"));
}

#[tokio::test]
async fn test_logout_clears_token() {
    let h = TestHarness::start_with(|c| c.with_token("T")).await;

    h.client.auth().logout();

    assert_eq!(h.client.token(), None);
    assert_eq!(h.store.get("authToken").unwrap(), None);
    assert!(h.listener.unauthorized_routes().is_empty());
}

#[tokio::test]
async fn test_file_store_survives_new_client() {
    common::init_tracing();
    let server = MockServer::start_async().await;
    let _m = server
        .mock_async(|when, then| {
            when.method(POST).path("/auth/login");
            then.status(200).json_body(json!({"accessToken": "persisted"}));
        })
        .await;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let first =
        InterviewClient::new(ClientConfig::new(server.base_url()).with_token_file(&path)).unwrap();
    first.auth().login("a@b.c", "p").await.unwrap();

    let second =
        InterviewClient::new(ClientConfig::new(server.base_url()).with_token_file(&path)).unwrap();
    assert_eq!(second.token().as_deref(), Some("persisted"));
}

#[tokio::test]
async fn test_independent_clients_do_not_share_tokens() {
    let a = TestHarness::start_with(|c| c.with_token("A")).await;
    let b = TestHarness::start().await;

    assert_eq!(a.client.token().as_deref(), Some("A"));
    assert_eq!(b.client.token(), None);
}
