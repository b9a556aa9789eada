//! Payload → QR symbol → PNG.
//!
//! Encoding is delegated to the `qrcode` crate and rasterization to `image`.
//! Both are deterministic: the same payload always produces the same bytes.

use std::fmt;
use std::io::Cursor;

use image::{ImageFormat, Luma};
use qrcode::{EcLevel, QrCode, Version};

use crate::qr::error::EncodingError;

/// Error-correction level used for every symbol.
///
/// L carries the most data per symbol, which matters because payloads are
/// usually URLs.
pub const ERROR_CORRECTION: EcLevel = EcLevel::L;

/// Default edge length of one QR module, in pixels.
pub const DEFAULT_MODULE_SIZE: u32 = 8;

/// An encoded QR symbol.
pub struct QrSymbol {
    code: QrCode,
}

impl fmt::Debug for QrSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QrSymbol")
            .field("version", &self.version())
            .field("width", &self.width())
            .finish()
    }
}

/// Encode `payload` at [`ERROR_CORRECTION`].
///
/// The empty payload is accepted and yields a version 1 symbol.
pub fn encode(payload: &[u8]) -> Result<QrSymbol, EncodingError> {
    let code = QrCode::with_error_correction_level(payload, ERROR_CORRECTION)?;
    Ok(QrSymbol { code })
}

impl QrSymbol {
    /// Number of modules along one edge, excluding the quiet zone.
    pub fn width(&self) -> usize {
        self.code.width()
    }

    pub fn version(&self) -> Version {
        self.code.version()
    }

    pub fn error_correction_level(&self) -> EcLevel {
        self.code.error_correction_level()
    }

    /// Render as an 8-bit grayscale PNG with a standard quiet zone.
    pub fn to_png(&self, module_size: u32) -> Result<Vec<u8>, EncodingError> {
        let image = self
            .code
            .render::<Luma<u8>>()
            .quiet_zone(true)
            .module_dimensions(module_size, module_size)
            .build();

        let mut png = Vec::new();
        image.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
        Ok(png)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qrcode::types::QrError;

    const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

    #[test]
    fn encodes_at_level_l() {
        let symbol = encode(b"http://example.com/a?b=c").unwrap();
        assert_eq!(symbol.error_correction_level(), EcLevel::L);
    }

    #[test]
    fn encoding_is_deterministic() {
        let payload = b"https://example.com/some/long/path?with=query&and=more";
        let first = encode(payload).unwrap().to_png(DEFAULT_MODULE_SIZE).unwrap();
        let second = encode(payload).unwrap().to_png(DEFAULT_MODULE_SIZE).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_payload_is_a_version_1_symbol() {
        let symbol = encode(b"").unwrap();
        assert_eq!(symbol.version(), Version::Normal(1));
        assert_eq!(symbol.width(), 21);
    }

    #[test]
    fn debug_shows_version_and_width() {
        let symbol = encode(b"hello").unwrap();
        assert_eq!(
            format!("{symbol:?}"),
            "QrSymbol { version: Normal(1), width: 21 }"
        );
    }

    #[test]
    fn oversized_payload_fails() {
        let payload = "x".repeat(5000);
        let err = encode(payload.as_bytes()).unwrap_err();
        assert!(matches!(err, EncodingError::Symbol(QrError::DataTooLong)));
    }

    #[test]
    fn png_has_quiet_zone_and_module_scale() {
        let symbol = encode(b"hello").unwrap();
        let png = symbol.to_png(4).unwrap();
        assert!(png.starts_with(PNG_MAGIC));

        let decoded = image::load_from_memory(&png).unwrap();
        let expected = ((symbol.width() + 8) * 4) as u32;
        assert_eq!(decoded.width(), expected);
        assert_eq!(decoded.height(), expected);

        let gray = decoded.to_luma8();
        // Quiet zone is light, the top-left finder pattern is dark.
        assert_eq!(gray.get_pixel(0, 0)[0], 255);
        assert_eq!(gray.get_pixel(4 * 4, 4 * 4)[0], 0);
    }
}
