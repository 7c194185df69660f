//
//  lakefs-client
//  tests/api.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use std::sync::Arc;

use mockito::{Matcher, Server};
use reqwest::StatusCode;

use lakefs_client::api::common::ObjectListParams;
use lakefs_client::api::{ApiError, AuthError, CreateBranch, CreateRepository, LakeFsClient};
use lakefs_client::auth::{CredentialProvider, Credentials, SessionStore};

const AUTH: &str = "Basic a2V5OnNlY3JldA==";

fn client(server: &Server) -> LakeFsClient {
    LakeFsClient::new(&server.url())
        .unwrap()
        .with_credentials(Credentials::new("key", "secret"))
}

#[tokio::test]
async fn test_get_sends_auth_and_default_headers() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/repositories/r1")
        .match_header("authorization", AUTH)
        .match_header("accept", "application/json")
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "r1", "default_branch": "main", "storage_namespace": "s3://b/r1"}"#)
        .create_async()
        .await;

    let repo = client(&server).repositories().get("r1").await.unwrap();
    assert_eq!(repo.id, "r1");
    assert_eq!(repo.default_branch.as_deref(), Some("main"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_not_found() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v1/repositories/missing")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message": "not found"}"#)
        .create_async()
        .await;

    let err = client(&server)
        .repositories()
        .get("missing")
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "could not find repository missing");
}

#[tokio::test]
async fn test_get_other_status_is_generic() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v1/repositories/r1/branches/main")
        .with_status(500)
        .with_header("content-type", "application/json; charset=utf-8")
        .with_body(r#"{"message": "database unavailable"}"#)
        .create_async()
        .await;

    let err = client(&server)
        .branches("r1")
        .get("main")
        .await
        .unwrap_err();
    assert!(
        matches!(&err, ApiError::Generic(msg) if msg == "could not get branch: database unavailable"),
        "{err:?}"
    );
}

#[tokio::test]
async fn test_list_error_uses_plain_text_body() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v1/repositories")
        .with_status(502)
        .with_header("content-type", "text/plain")
        .with_body("bad gateway")
        .create_async()
        .await;

    let err = client(&server)
        .repositories()
        .list(None, None)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "could not list repositories: bad gateway");
}

#[tokio::test]
async fn test_list_error_json_without_message() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v1/repositories/r1/branches")
        .with_status(500)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": "boom"}"#)
        .create_async()
        .await;

    let err = client(&server)
        .branches("r1")
        .list(None, None)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), r#"could not list branches: {"error": "boom"}"#);
}

#[tokio::test]
async fn test_malformed_json_error_body() {
    let mut server = Server::new_async().await;
    server
        .mock("DELETE", "/api/v1/repositories/r1")
        .with_status(500)
        .with_header("content-type", "application/json")
        .with_body("{not json")
        .create_async()
        .await;

    let err = client(&server)
        .repositories()
        .delete("r1")
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)), "{err:?}");
}

#[tokio::test]
async fn test_list_query_and_pagination() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/repositories")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("after".into(), "r1".into()),
            Matcher::UrlEncoded("amount".into(), "2".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "results": [{"id": "r2"}, {"id": "r3"}],
                "pagination": {"has_more": true, "next_offset": "r3", "max_per_page": 2, "results": 2}
            }"#,
        )
        .create_async()
        .await;

    let page = client(&server)
        .repositories()
        .list(Some("r1"), Some(2))
        .await
        .unwrap();
    assert_eq!(page.results.len(), 2);
    assert!(page.has_more());
    assert_eq!(page.next_offset(), Some("r3"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_repository() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v1/repositories")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(serde_json::json!({
            "name": "r1",
            "storage_namespace": "s3://bucket/r1",
            "default_branch": "main"
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "r1", "default_branch": "main"}"#)
        .create_async()
        .await;

    let payload = CreateRepository::new("r1", "s3://bucket/r1").default_branch("main");
    let repo = client(&server).repositories().create(&payload).await.unwrap();
    assert_eq!(repo.id, "r1");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_conflict_is_generic() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/v1/repositories/r1/branches")
        .with_status(409)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message": "branch already exists"}"#)
        .create_async()
        .await;

    let err = client(&server)
        .branches("r1")
        .create(&CreateBranch::new("dev", "main"))
        .await
        .unwrap_err();
    assert!(matches!(&err, ApiError::Generic(msg) if msg == "branch already exists"));
}

#[tokio::test]
async fn test_delete_branch() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/api/v1/repositories/r1/branches/dev")
        .with_status(204)
        .create_async()
        .await;

    client(&server).branches("r1").delete("dev").await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_upload_multipart() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v1/repositories/r1/branches/main/objects")
        .match_query(Matcher::UrlEncoded("path".into(), "data/a.csv".into()))
        .match_header("authorization", AUTH)
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data; boundary=".to_string()),
        )
        .match_body(Matcher::Regex(
            r#"name="content"; filename="a.csv""#.to_string(),
        ))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"path": "data/a.csv", "path_type": "object", "size_bytes": 5}"#)
        .create_async()
        .await;

    let stats = client(&server)
        .objects("r1")
        .upload("main", "data/a.csv", b"1,2,3".to_vec())
        .await
        .unwrap();
    assert_eq!(stats.path, "data/a.csv");
    assert_eq!(stats.size_bytes, Some(5));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_upload_conflict_message() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/v1/repositories/r1/branches/main/objects")
        .match_query(Matcher::Any)
        .with_status(409)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message": "object exists"}"#)
        .create_async()
        .await;

    let err = client(&server)
        .objects("r1")
        .upload("main", "a.csv", Vec::new())
        .await
        .unwrap_err();
    assert!(matches!(&err, ApiError::Generic(msg) if msg == "object exists"), "{err:?}");
}

#[tokio::test]
async fn test_list_objects_query() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/repositories/r1/refs/main/objects/ls")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("tree".into(), "data/".into()),
            Matcher::UrlEncoded("amount".into(), "1000".into()),
            Matcher::UrlEncoded("after".into(), "".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "results": [
                    {"path": "data/2024/", "path_type": "common_prefix"},
                    {"path": "data/a.csv", "path_type": "object", "size_bytes": 10, "mtime": 1700000000}
                ],
                "pagination": {"has_more": false, "max_per_page": 1000, "results": 2}
            }"#,
        )
        .create_async()
        .await;

    let page = client(&server)
        .objects("r1")
        .list("main", &ObjectListParams::new("data/"))
        .await
        .unwrap();
    assert_eq!(page.results.len(), 2);
    assert!(page.results[0].is_prefix());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_commit_log_returns_results_only() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v1/repositories/r1/branches/main/commits")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "results": [
                    {"id": "c2", "parents": ["c1"], "committer": "admin", "message": "second",
                     "creation_date": 1700000100, "metadata": {"k": "v"}},
                    {"id": "c1", "parents": [], "committer": "admin", "message": "first",
                     "creation_date": 1700000000, "metadata": {}}
                ],
                "pagination": {"has_more": true, "next_offset": "c1", "max_per_page": 2, "results": 2}
            }"#,
        )
        .create_async()
        .await;

    let commits = client(&server).commits("r1").log("main").await.unwrap();
    assert_eq!(commits.len(), 2);
    assert_eq!(commits[0].id, "c2");
    assert_eq!(commits[0].parents, vec!["c1".to_string()]);
    assert_eq!(commits[0].metadata.get("k").map(String::as_str), Some("v"));
}

#[tokio::test]
async fn test_diff_same_ref_uses_branch_endpoint() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/repositories/r1/branches/main/diff")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "results": [{"type": "added", "path": "a.csv", "path_type": "object"}],
                "pagination": {"has_more": false, "max_per_page": 1000, "results": 1}
            }"#,
        )
        .create_async()
        .await;

    let page = client(&server).refs("r1").diff("main", "main").await.unwrap();
    assert_eq!(page.results[0].diff_type, "added");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_diff_between_refs() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/repositories/r1/refs/main/diff/dev")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"results": [], "pagination": {"has_more": false}}"#)
        .create_async()
        .await;

    let page = client(&server).refs("r1").diff("main", "dev").await.unwrap();
    assert!(page.results.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_commit_log_without_pagination() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v1/repositories/r1/branches/main/commits")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"results": [{"id": "c1"}]}"#)
        .create_async()
        .await;

    let commits = client(&server).commits("r1").log("main").await.unwrap();
    assert_eq!(commits.len(), 1);
    assert_eq!(commits[0].id, "c1");
}

#[tokio::test]
async fn test_diff_without_pagination() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v1/repositories/r1/refs/main/diff/dev")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"results": [{"type": "removed", "path": "b.csv", "path_type": "object"}]}"#)
        .create_async()
        .await;

    let page = client(&server).refs("r1").diff("main", "dev").await.unwrap();
    assert_eq!(page.results.len(), 1);
    assert_eq!(page.results[0].diff_type, "removed");
    assert!(!page.has_more());
}

#[tokio::test]
async fn test_login_uses_explicit_credentials() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/authentication")
        .match_header("authorization", AUTH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"user": {"id": "admin", "created_at": 1600000000}}"#)
        .create_async()
        .await;

    // No client credentials at all: login must still authenticate.
    let client = LakeFsClient::new(&server.url()).unwrap();
    let session = client.auth().login("key", "secret").await.unwrap();

    assert_eq!(session.credentials, Credentials::new("key", "secret"));
    assert_eq!(session.user.id.as_deref(), Some("admin"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v1/authentication")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message": "unauthorized"}"#)
        .create_async()
        .await;

    let err = client(&server)
        .auth()
        .login("key", "wrong")
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Auth(AuthError::InvalidCredentials)));
    assert_eq!(err.to_string(), "invalid credentials");
}

#[tokio::test]
async fn test_login_server_error_is_distinct() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v1/authentication")
        .with_status(500)
        .create_async()
        .await;

    let err = client(&server)
        .auth()
        .login("key", "secret")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApiError::Auth(AuthError::Unknown { status }) if status == StatusCode::INTERNAL_SERVER_ERROR
    ));
    assert_ne!(err.to_string(), "invalid credentials");
}

#[tokio::test]
async fn test_login_into_session_store_feeds_client() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v1/authentication")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"user": {"id": "admin"}}"#)
        .create_async()
        .await;
    let repos = server
        .mock("GET", "/api/v1/repositories")
        .match_header("authorization", AUTH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"results": [], "pagination": {"has_more": false}}"#)
        .create_async()
        .await;

    let store = Arc::new(SessionStore::new());
    let client = LakeFsClient::new(&server.url())
        .unwrap()
        .with_provider(store.clone());

    let err = client.repositories().list(None, None).await.unwrap_err();
    assert!(matches!(err, ApiError::MissingCredentials));

    client
        .auth()
        .login_into(&store, "key", "secret")
        .await
        .unwrap();
    assert!(store.credentials().is_some());

    client.repositories().list(None, None).await.unwrap();
    repos.assert_async().await;
}

#[tokio::test]
async fn test_missing_credentials_sends_nothing() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = LakeFsClient::new(&server.url()).unwrap();
    let err = client.branches("r1").get("main").await.unwrap_err();
    assert!(matches!(err, ApiError::MissingCredentials));
    mock.assert_async().await;
}
