//! End-to-end client tests against a local single-request HTTP stub.

use cek_sertifikat::prelude::*;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

const NISN: &str = "1234567890";

fn http_response(status_line: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {status_line}\r\n\
         content-type: application/json; charset=UTF-8\r\n\
         content-length: {}\r\n\
         connection: close\r\n\r\n{body}",
        body.len()
    )
}

/// Serve exactly one request with a canned response; returns the endpoint URL
/// and a handle resolving to the raw request head for assertions.
async fn stub_server(response: String) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..n]);
            if request.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
        String::from_utf8_lossy(&request).into_owned()
    });

    (format!("http://{addr}/drive/v3/files"), handle)
}

fn client_for(endpoint: &str) -> DriveClient {
    DriveClient::with_endpoint(DriveConfig::new("test-key", "FOLDER123"), endpoint)
}

#[tokio::test]
async fn forbidden_status_maps_to_api_key_error() {
    let body = r#"{"error": {"code": 403, "message": "The caller does not have permission"}}"#;
    let (endpoint, _request) = stub_server(http_response("403 Forbidden", body)).await;

    let err = client_for(&endpoint).search(NISN).await.unwrap_err();
    assert_eq!(err, SearchError::Forbidden);
    assert_eq!(
        err.to_indonesian(),
        "API Key tidak valid atau tidak memiliki akses ke Google Drive API"
    );
}

#[tokio::test]
async fn not_found_status_maps_to_folder_error() {
    let body = r#"{"error": {"code": 404, "message": "File not found"}}"#;
    let (endpoint, _request) = stub_server(http_response("404 Not Found", body)).await;

    let err = client_for(&endpoint).search(NISN).await.unwrap_err();
    assert_eq!(err, SearchError::NotFound);
    assert_eq!(err.to_indonesian(), "Folder tidak ditemukan");
}

#[tokio::test]
async fn other_non_success_status_maps_to_generic_api_error() {
    let (endpoint, _request) =
        stub_server(http_response("500 Internal Server Error", "{}")).await;

    let err = client_for(&endpoint).search(NISN).await.unwrap_err();
    assert_eq!(err, SearchError::Api(500));
    assert_eq!(err.to_indonesian(), "Gagal mengakses Google Drive API");
}

#[tokio::test]
async fn empty_listing_resolves_to_empty_result() {
    let (endpoint, _request) = stub_server(http_response("200 OK", r#"{"files": []}"#)).await;

    let files = client_for(&endpoint).search(NISN).await.unwrap();
    assert!(files.is_empty());
}

#[tokio::test]
async fn single_file_round_trips_with_links_and_formatting() {
    let body = r#"{
        "files": [{
            "id": "abc123",
            "name": "1234567890_sertifikat.pdf",
            "mimeType": "application/pdf",
            "webViewLink": "https://drive.google.com/file/d/abc123/view?usp=drivesdk",
            "size": "1572864",
            "createdTime": "2026-06-01T08:00:00.000Z"
        }]
    }"#;
    let (endpoint, _request) = stub_server(http_response("200 OK", body)).await;

    let files = client_for(&endpoint).search(NISN).await.unwrap();
    assert_eq!(files.len(), 1);

    let file = &files[0];
    assert_eq!(file.name, "1234567890_sertifikat.pdf");
    assert_eq!(
        view_link(&file.id),
        "https://drive.google.com/file/d/abc123/view"
    );
    assert_eq!(
        download_link(&file.id),
        "https://drive.google.com/uc?export=download&id=abc123"
    );
    assert_eq!(format_size(file.size), "1.50 MB");
    assert_eq!(format_created(&file.created_time), "1/6/2026");
}

#[tokio::test]
async fn request_carries_query_key_and_projection() {
    let (endpoint, request) = stub_server(http_response("200 OK", "{}")).await;

    client_for(&endpoint).search(NISN).await.unwrap();
    let head = request.await.unwrap();

    let request_line = head.lines().next().unwrap();
    assert!(request_line.starts_with("GET /drive/v3/files?"));
    assert!(request_line.contains("1234567890"));
    assert!(request_line.contains("FOLDER123"));
    assert!(request_line.contains("key=test-key"));
    assert!(request_line.contains("fields="));
    assert!(request_line.contains("trashed"));
}

#[tokio::test]
async fn unreachable_endpoint_is_a_network_error() {
    // Bind then drop to get a port with nothing listening.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client_for(&format!("http://{addr}/files"))
        .search(NISN)
        .await
        .unwrap_err();
    assert!(matches!(err, SearchError::Network(_)));
    assert_eq!(
        err.to_indonesian(),
        "Terjadi kesalahan saat mencari file. Periksa koneksi internet Anda."
    );
}

#[tokio::test]
async fn malformed_body_is_a_network_error() {
    let (endpoint, _request) = stub_server(http_response("200 OK", "not json at all")).await;

    let err = client_for(&endpoint).search(NISN).await.unwrap_err();
    assert!(matches!(err, SearchError::Network(_)));
}

#[tokio::test]
async fn validation_failures_never_reach_the_network() {
    // No listener at all; validation must short-circuit first.
    let client = client_for("http://127.0.0.1:1/files");
    assert_eq!(
        client.search("").await.unwrap_err(),
        SearchError::EmptyInput
    );
    assert_eq!(
        client.search("123").await.unwrap_err(),
        SearchError::InvalidFormat
    );
}
