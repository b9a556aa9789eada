//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! ListenerConfig
//!     → listener.rs (bind TCP address or Unix domain socket)
//!     → Hand off to HTTP layer (axum::serve)
//! ```
//!
//! # Design Decisions
//! - A Unix socket path, when configured, takes precedence over TCP
//! - A stale socket file left by a previous run is removed before binding

pub mod listener;

pub use listener::{Listener, ListenerError};
