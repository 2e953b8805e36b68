//! `HttpSearchClient` against a local server returning canned responses.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use wealthwagon::domain::SearchError;
use wealthwagon::{HttpSearchClient, SearchClient};

/// Serves one HTTP response and yields the request line it received.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut request = Vec::new();
        let mut buf = [0_u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();

        String::from_utf8_lossy(&request)
            .lines()
            .next()
            .unwrap_or_default()
            .to_string()
    });

    (base_url, handle)
}

#[tokio::test]
async fn decodes_products_and_encodes_query() {
    let body = r#"{"data": [
        {"title": "Sony WH-1000XM5", "store": "Flipkart", "price": 29990,
         "rating": "4.6", "image": "https://img/1.png", "link": "https://fk/1"},
        {"title": "boAt Rockerz", "store": "Amazon", "price": 1299.5,
         "rating": 3.9, "image": "https://img/2.png", "link": "https://amz/2"}
    ]}"#;
    let (base_url, server) = serve_once("200 OK", body).await;

    let client = HttpSearchClient::new(format!("{base_url}/"));
    let products = client.search("noise cancelling & wireless").await.unwrap();

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].title, "Sony WH-1000XM5");
    assert_eq!(products[0].rating, 4.6);
    assert_eq!(products[1].price, 1299.5);

    let request_line = server.await.unwrap();
    assert_eq!(
        request_line,
        "GET /api/search?product=noise%20cancelling%20%26%20wireless HTTP/1.1"
    );
}

#[tokio::test]
async fn empty_data_is_success() {
    let (base_url, _server) = serve_once("200 OK", r#"{"data": []}"#).await;

    let products = HttpSearchClient::new(base_url).search("zzz").await.unwrap();
    assert!(products.is_empty());
}

#[tokio::test]
async fn non_success_status_ignores_body() {
    let (base_url, _server) =
        serve_once("500 Internal Server Error", r#"{"data": []}"#).await;

    let error = HttpSearchClient::new(base_url).search("tv").await.unwrap_err();
    assert!(matches!(error, SearchError::Status { status: 500 }));
}

#[tokio::test]
async fn missing_data_array_is_malformed() {
    let (base_url, _server) = serve_once("200 OK", r#"{"products": []}"#).await;

    let error = HttpSearchClient::new(base_url).search("tv").await.unwrap_err();
    assert!(matches!(error, SearchError::Malformed(_)));
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let error = HttpSearchClient::new(base_url).search("tv").await.unwrap_err();
    assert!(matches!(error, SearchError::Transport(_)));
}
