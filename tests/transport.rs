//! Listener transports and graceful shutdown.

use std::time::Duration;

use qrserv::CachePolicy;

mod common;

#[tokio::test]
async fn tcp_server_stops_on_shutdown() {
    let cache = CachePolicy::from_process_start().unwrap();
    let server = common::spawn_server(common::tcp_config(), cache).await;
    assert!(server.listener_description.starts_with("http://127.0.0.1:"));

    let res = common::client().get(server.url("/png/up")).send().await.unwrap();
    assert_eq!(res.status(), 200);

    tokio::time::timeout(Duration::from_secs(5), server.stop())
        .await
        .expect("server drained within timeout");
}

#[cfg(unix)]
#[tokio::test]
async fn serves_over_unix_socket() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::UnixStream;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("qrserv.sock");

    let mut config = common::tcp_config();
    config.listener.unix_socket = Some(path.clone());
    let server = common::spawn_server(config, CachePolicy::from_process_start().unwrap()).await;
    assert_eq!(server.addr, None);
    assert!(path.exists());

    let mut stream = UnixStream::connect(&path).await.unwrap();
    stream
        .write_all(b"GET /html/hello?x=1 HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await
        .unwrap();
    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await.unwrap();

    let response = String::from_utf8(raw).unwrap();
    let lower = response.to_ascii_lowercase();
    assert!(response.starts_with("HTTP/1.1 200"), "{response}");
    assert!(lower.contains("content-type: text/html"));
    assert!(lower.contains("cache-control: max-age=31536000"));
    assert!(response.contains("<img src='data:image/png;base64,"));

    server.stop().await;
    assert!(!path.exists(), "socket file removed on shutdown");
}
