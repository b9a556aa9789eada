//! Encoding failures.

use thiserror::Error;

/// A payload that could not be turned into a QR raster.
///
/// The HTTP layer does not distinguish between the variants: both collapse
/// to a bare `500 Internal Server Error`.
#[derive(Debug, Error)]
pub enum EncodingError {
    /// Payload exceeds the capacity of the largest symbol at the fixed
    /// error-correction level, or cannot be represented in any encoding mode.
    #[error("payload cannot be encoded as a QR symbol: {0}")]
    Symbol(#[from] qrcode::types::QrError),

    /// The symbol was built but could not be serialized as PNG.
    #[error("failed to serialize QR symbol as PNG: {0}")]
    Raster(#[from] image::ImageError),
}
