//! QR payload pipeline.
//!
//! # Data Flow
//! ```text
//! raw request target (path + query)
//!     → extract.rs (strip route prefix and leading separator, re-attach query)
//!     → encoder.rs (payload bytes → QrSymbol at error-correction level L)
//!     → QrSymbol::to_png (grayscale raster → PNG bytes)
//! ```
//!
//! # Design Decisions
//! - Every stage is a pure function of its input; no shared state, no I/O
//! - The payload is never percent-decoded or validated
//! - Error correction is fixed at L to maximise payload capacity

pub mod encoder;
pub mod error;
pub mod extract;

pub use encoder::{encode, QrSymbol, DEFAULT_MODULE_SIZE, ERROR_CORRECTION};
pub use error::EncodingError;
pub use extract::{encodable_string, RouteMatch};
