//! QR code HTTP service.
//!
//! Turns the tail of a request path (plus its query string) into a QR code,
//! returned as a PNG or as an HTML `<img>` with the PNG inlined.
//!
//! # Architecture Overview
//!
//! ```text
//!   GET /png/<payload>?<query>        GET /html/<payload>?<query>
//!              │                                 │
//!              ▼                                 ▼
//!   ┌──────────────────────────────────────────────────────┐
//!   │ net::Listener (TCP or Unix socket) → http::server     │
//!   │   request id → trace span → timeout                    │
//!   └──────────────────────────┬───────────────────────────┘
//!                              ▼
//!   qr::extract   "/payload" + "query" → "payload?query"
//!                              ▼
//!   qr::encoder   bytes → QrSymbol (EC level L) → PNG
//!                              ▼
//!   http::render  raster (image/png) | embedded (text/html)
//!                              ▼
//!   http::cache   X-Attribution, Cache-Control, Expires (fixed at startup)
//! ```

pub mod cli;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod qr;

pub use config::QrServConfig;
pub use http::{CachePolicy, HttpServer};
pub use lifecycle::Shutdown;
pub use net::Listener;
