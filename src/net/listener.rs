//! Listener binding for TCP and Unix domain sockets.

use std::net::SocketAddr;
#[cfg(unix)]
use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::net::TcpListener;
#[cfg(unix)]
use tokio::net::UnixListener;

use crate::config::ListenerConfig;

/// Error type for listener operations.
#[derive(Debug, Error)]
pub enum ListenerError {
    /// The configured bind address is not a socket address.
    #[error("Invalid bind address {address:?}: {source}")]
    InvalidAddress {
        address: String,
        source: std::net::AddrParseError,
    },

    /// Failed to bind to address.
    #[error("Failed to bind {target}: {source}")]
    Bind {
        target: String,
        source: std::io::Error,
    },

    /// A leftover socket file could not be removed.
    #[error("Failed to remove stale socket {path:?}: {source}")]
    StaleSocket {
        path: String,
        source: std::io::Error,
    },

    /// Unix domain sockets are not available on this platform.
    #[error("Unix domain sockets are not supported on this platform")]
    UnixUnsupported,
}

/// A bound listener, ready to be handed to the HTTP server.
#[derive(Debug)]
pub enum Listener {
    Tcp(TcpListener),
    #[cfg(unix)]
    Unix { inner: UnixListener, path: PathBuf },
}

impl Listener {
    /// Bind according to `config`: Unix socket if configured, TCP otherwise.
    pub async fn bind(config: &ListenerConfig) -> Result<Self, ListenerError> {
        match &config.unix_socket {
            Some(path) => Self::bind_unix(path, config.remove_stale_socket),
            None => Self::bind_tcp(&config.bind_address).await,
        }
    }

    async fn bind_tcp(address: &str) -> Result<Self, ListenerError> {
        let addr: SocketAddr = address
            .parse()
            .map_err(|source| ListenerError::InvalidAddress {
                address: address.to_string(),
                source,
            })?;

        if !addr.ip().is_loopback() {
            tracing::warn!(address = %addr, "Binding to a non-loopback address");
        }

        let inner = TcpListener::bind(addr)
            .await
            .map_err(|source| ListenerError::Bind {
                target: addr.to_string(),
                source,
            })?;

        let listener = Self::Tcp(inner);
        tracing::info!(address = %listener.describe(), "Listener bound");
        Ok(listener)
    }

    #[cfg(unix)]
    fn bind_unix(path: &Path, remove_stale: bool) -> Result<Self, ListenerError> {
        if remove_stale && path.exists() {
            std::fs::remove_file(path).map_err(|source| ListenerError::StaleSocket {
                path: path.display().to_string(),
                source,
            })?;
            tracing::debug!(path = %path.display(), "Removed stale socket file");
        }

        let inner = UnixListener::bind(path).map_err(|source| ListenerError::Bind {
            target: path.display().to_string(),
            source,
        })?;

        let listener = Self::Unix {
            inner,
            path: path.to_path_buf(),
        };
        tracing::info!(address = %listener.describe(), "Listener bound");
        Ok(listener)
    }

    #[cfg(not(unix))]
    fn bind_unix(_path: &std::path::Path, _remove_stale: bool) -> Result<Self, ListenerError> {
        Err(ListenerError::UnixUnsupported)
    }

    /// Local TCP address, if this is a TCP listener.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        match self {
            Self::Tcp(inner) => inner.local_addr().ok(),
            #[cfg(unix)]
            Self::Unix { .. } => None,
        }
    }

    /// Human-readable description of where the listener is bound.
    pub fn describe(&self) -> String {
        match self {
            Self::Tcp(inner) => match inner.local_addr() {
                Ok(addr) => format!("http://{addr}"),
                Err(_) => "tcp (unknown address)".to_string(),
            },
            #[cfg(unix)]
            Self::Unix { path, .. } => format!("unix:{}", path.display()),
        }
    }
}
