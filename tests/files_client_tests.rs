use mockito::{Matcher, Server};
use serde_json::json;
use std::io::Write;
use tempfile::NamedTempFile;
use uuid::Uuid;
use ze_client::prelude::*;

// Helper to point every base URL at the mock server
fn create_test_config(server_url: &str) -> Config {
    Config::with_values(
        "svc@example.com",
        "secret",
        server_url,
        server_url,
        server_url,
    )
}

#[tokio::test]
async fn get_asset_returns_raw_bytes() {
    let mut server = Server::new_async().await;
    let id = Uuid::new_v4();

    let mock = server
        .mock("GET", format!("/asset/{id}").as_str())
        .match_query(Matcher::UrlEncoded("id".into(), id.to_string()))
        .with_status(200)
        .with_body(&[0x89, 0x50, 0x4e, 0x47])
        .create_async()
        .await;

    let client = FilesClient::new("asset", create_test_config(&server.url()));
    let bytes = client.get_asset(id).await.expect("get_asset should succeed");

    assert_eq!(bytes.as_ref(), &[0x89, 0x50, 0x4e, 0x47]);
    mock.assert_async().await;
}

#[tokio::test]
async fn get_asset_unexpected_status_fails() {
    let mut server = Server::new_async().await;
    let id = Uuid::new_v4();

    server
        .mock("GET", format!("/asset/{id}").as_str())
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body("no such file")
        .create_async()
        .await;

    let client = FilesClient::new("asset", create_test_config(&server.url()));
    let err = client.get_asset(id).await.err().expect("should be Err");

    match err {
        AppError::RequestFailed { status, body } => {
            assert_eq!(status.as_u16(), 404);
            assert_eq!(body, "no such file");
        }
        other => panic!("Unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn get_file_info_returns_metadata() {
    let mut server = Server::new_async().await;
    let id = Uuid::new_v4();

    let mock = server
        .mock("GET", format!("/asset/{id}").as_str())
        .with_status(200)
        .with_body(json!({"id": id.to_string(), "size": 1024}).to_string())
        .create_async()
        .await;

    let client = FilesClient::new("asset", create_test_config(&server.url()));
    let info = client
        .get_file_info(id)
        .await
        .expect("get_file_info should succeed");

    assert_eq!(info["size"], 1024);
    mock.assert_async().await;
}

#[tokio::test]
async fn upload_sends_multipart_with_extra_fields() {
    let mut server = Server::new_async().await;

    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(b"file-bytes").expect("write temp file");

    let mock = server
        .mock("POST", "/asset/")
        .match_header(
            "content-type",
            Matcher::Regex("multipart/form-data.*".to_string()),
        )
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="file""#.to_string()),
            Matcher::Regex("file-bytes".to_string()),
            Matcher::Regex(r#"name="caption""#.to_string()),
            Matcher::Regex("holiday".to_string()),
            Matcher::Regex(r#"name="public""#.to_string()),
            Matcher::Regex("true".to_string()),
        ]))
        .with_status(200)
        .with_body(r#"{"id": "new-file-id"}"#)
        .create_async()
        .await;

    let extra = json!({"caption": "holiday", "public": true})
        .as_object()
        .cloned();

    let client = FilesClient::new("asset", create_test_config(&server.url()));
    let result = client
        .upload(file.path(), extra)
        .await
        .expect("upload should succeed");

    assert_eq!(result["id"], "new-file-id");
    mock.assert_async().await;
}

#[tokio::test]
async fn upload_missing_file_fails_before_any_network_call() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("POST", "/asset/")
        .expect(0)
        .create_async()
        .await;

    let client = FilesClient::new("asset", create_test_config(&server.url()));
    let err = client
        .upload("/tmp/definitely-missing.png", None)
        .await
        .err()
        .expect("should be Err");

    match err {
        AppError::Io(_) => (),
        other => panic!("Unexpected error: {:?}", other),
    }

    mock.assert_async().await;
}

#[tokio::test]
async fn upload_unexpected_status_fails() {
    let mut server = Server::new_async().await;

    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(b"content").expect("write temp file");

    server
        .mock("POST", "/asset/")
        .with_status(413)
        .with_body("too large")
        .create_async()
        .await;

    let client = FilesClient::new("asset", create_test_config(&server.url()));
    let err = client
        .upload(file.path(), None)
        .await
        .err()
        .expect("should be Err");

    match err {
        AppError::RequestFailed { status, body } => {
            assert_eq!(status.as_u16(), 413);
            assert_eq!(body, "too large");
        }
        other => panic!("Unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn delete_returns_true_on_204() {
    let mut server = Server::new_async().await;
    let id = Uuid::new_v4();

    server
        .mock("DELETE", format!("/asset/{id}").as_str())
        .match_query(Matcher::UrlEncoded("id".into(), id.to_string()))
        .with_status(204)
        .create_async()
        .await;

    let client = FilesClient::new("asset", create_test_config(&server.url()));
    let deleted = client.delete(id).await.expect("delete should succeed");
    assert!(deleted);
}

#[tokio::test]
async fn delete_with_other_status_fails() {
    let mut server = Server::new_async().await;
    let id = Uuid::new_v4();

    server
        .mock("DELETE", format!("/asset/{id}").as_str())
        .match_query(Matcher::Any)
        .with_status(403)
        .with_body("forbidden")
        .create_async()
        .await;

    let client = FilesClient::new("asset", create_test_config(&server.url()));
    let err = client.delete(id).await.err().expect("should be Err");

    match err {
        AppError::RequestFailed { status, .. } => assert_eq!(status.as_u16(), 403),
        other => panic!("Unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn no_authorization_header_is_ever_sent() {
    let mut server = Server::new_async().await;
    let id = Uuid::new_v4();

    let mock = server
        .mock("GET", format!("/asset/{id}").as_str())
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let client = FilesClient::new("asset", create_test_config(&server.url()));
    client
        .get_file_info(id)
        .await
        .expect("get_file_info should succeed");

    mock.assert_async().await;
}
