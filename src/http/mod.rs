//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP / Unix socket connection
//!     → server.rs (Axum setup, route table, middleware)
//!     → request.rs (assign x-request-id)
//!     → handlers.rs (/png/... or /html/...)
//!         → qr::extract → qr::encoder
//!         → render.rs (raster or embedded body)
//!         → cache.rs (attribution + caching headers)
//!     → Send to client
//! ```

pub mod cache;
pub mod handlers;
pub mod render;
pub mod request;
pub mod server;

pub use cache::CachePolicy;
pub use render::{Rendered, Variant};
pub use request::X_REQUEST_ID;
pub use server::{AppState, HttpServer};
