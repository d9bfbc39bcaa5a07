use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

use cloudkms_auth::credentials::CredentialsFile;
use cloudkms_auth::error::Error;
use cloudkms_auth::project::Config;
use cloudkms_auth::token::DefaultTokenSourceProvider;
use google_cloud_token::TokenSourceProvider;

#[ctor::ctor]
fn init() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Serves one canned HTTP response per connection and records the raw requests.
async fn serve_token_endpoint(status: &'static str, body: &'static str) -> (String, Arc<Mutex<Vec<String>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = requests.clone();
    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            let request = read_request(&mut stream).await;
            recorded.lock().await.push(request);
            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        }
    });
    (format!("http://{addr}/token"), requests)
}

async fn read_request(stream: &mut tokio::net::TcpStream) -> String {
    let mut data = Vec::new();
    let mut buf = [0u8; 4096];
    loop {
        let n = stream.read(&mut buf).await.unwrap_or(0);
        if n == 0 {
            break;
        }
        data.extend_from_slice(&buf[..n]);
        let text = String::from_utf8_lossy(&data).to_string();
        if let Some(header_end) = text.find("\r\n\r\n") {
            let content_length = text[..header_end]
                .lines()
                .find_map(|l| {
                    let (k, v) = l.split_once(':')?;
                    k.eq_ignore_ascii_case("content-length").then(|| v.trim().parse::<usize>().ok())?
                })
                .unwrap_or(0);
            if data.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&data).to_string()
}

fn authorized_user(token_uri: &str) -> Box<CredentialsFile> {
    let json = format!(
        r#"{{"type":"authorized_user","client_id":"cid","client_secret":"secret","refresh_token":"refresh","token_uri":"{token_uri}","quota_project_id":"quota"}}"#
    );
    Box::new(CredentialsFile::new_from_str(&json).unwrap())
}

#[tokio::test]
async fn test_authorized_user_token_source_provider() {
    let (url, requests) = serve_token_endpoint(
        "200 OK",
        r#"{"access_token":"ya29.fake","token_type":"Bearer","expires_in":3600}"#,
    )
    .await;

    let provider = DefaultTokenSourceProvider::new_with_credentials(Config::default(), authorized_user(&url))
        .await
        .unwrap();
    let token = provider.token_source().token().await.unwrap();
    assert_eq!("Bearer ya29.fake", token);

    // the cached token is reused, so the endpoint was hit exactly once
    let again = provider.token_source().token().await.unwrap();
    assert_eq!(token, again);
    let requests = requests.lock().await;
    assert_eq!(1, requests.len());
    assert!(requests[0].contains("grant_type=refresh_token"));
    assert!(requests[0].contains("refresh_token=refresh"));
}

#[tokio::test]
async fn test_token_endpoint_error() {
    let (url, _) = serve_token_endpoint(
        "400 Bad Request",
        r#"{"error":"invalid_grant","error_description":"Token has been expired or revoked."}"#,
    )
    .await;

    let result = DefaultTokenSourceProvider::new_with_credentials(Config::default(), authorized_user(&url)).await;
    match result {
        Err(Error::TokenErrorResponse {
            status,
            error,
            error_description,
        }) => {
            assert_eq!(400, status);
            assert_eq!("invalid_grant", error);
            assert_eq!(Some("Token has been expired or revoked.".to_string()), error_description);
        }
        other => panic!("unexpected result {other:?}"),
    }
}
