//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use tokio::task::JoinHandle;

use qrserv::config::QrServConfig;
use qrserv::{CachePolicy, HttpServer, Listener, Shutdown};

/// A server running in the background.
pub struct TestServer {
    pub listener_description: String,
    pub addr: Option<SocketAddr>,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<Result<(), std::io::Error>>,
}

impl TestServer {
    /// Base URL of a TCP server.
    pub fn url(&self, path: &str) -> String {
        let addr = self.addr.expect("TCP listener");
        format!("http://{addr}{path}")
    }

    /// Trigger shutdown and wait for the server to drain.
    pub async fn stop(self) {
        self.shutdown.trigger();
        self.handle
            .await
            .expect("server task panicked")
            .expect("server failed");
    }
}

/// Default config bound to an ephemeral loopback port.
pub fn tcp_config() -> QrServConfig {
    let mut config = QrServConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.render.module_size = 4;
    config
}

/// Bind and spawn a server with the given config and cache policy.
pub async fn spawn_server(config: QrServConfig, cache: CachePolicy) -> TestServer {
    let listener = Listener::bind(&config.listener).await.expect("bind listener");
    let addr = listener.local_addr();
    let listener_description = listener.describe();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, cache);
    let handle = tokio::spawn(server.run(listener, shutdown.subscribe()));

    TestServer {
        listener_description,
        addr,
        shutdown,
        handle,
    }
}

/// Decode the single QR symbol in a PNG.
pub fn decode_qr(png: &[u8]) -> String {
    let image = image::load_from_memory(png).expect("valid PNG").to_luma8();
    let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
        image.width() as usize,
        image.height() as usize,
        |x, y| image.get_pixel(x as u32, y as u32)[0],
    );
    let grids = prepared.detect_grids();
    assert_eq!(grids.len(), 1, "expected exactly one QR symbol");
    let (_meta, content) = grids[0].decode().expect("decodable QR symbol");
    content
}

/// HTTP client that never reuses connections between tests.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .expect("build client")
}
