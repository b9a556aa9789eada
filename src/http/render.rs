//! Response rendering.
//!
//! # Responsibilities
//! - Wrap PNG bytes as an `image/png` response (raster variant)
//! - Embed PNG bytes as a base64 data URI inside an `<img>` tag (embedded variant)
//! - Attach the shared cache policy to successful responses
//! - Map encoding failures to a bare 500
//!
//! # Design Decisions
//! - A response is built completely before anything is written
//! - Failures carry no body and none of the caching headers

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::http::cache::CachePolicy;
use crate::qr::EncodingError;

const DATA_URI_PREFIX: &str = "<img src='data:image/png;base64,";
const DATA_URI_SUFFIX: &str = "'>";

/// Which representation a route returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Raw PNG bytes.
    Raster,
    /// HTML fragment with the PNG inlined.
    Embedded,
}

impl Variant {
    /// Path prefix the variant is mounted under.
    pub fn route_prefix(self) -> &'static str {
        match self {
            Variant::Raster => "/png",
            Variant::Embedded => "/html",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            Variant::Raster => "image/png",
            Variant::Embedded => "text/html",
        }
    }

    /// Short label for logs and metrics.
    pub fn label(self) -> &'static str {
        match self {
            Variant::Raster => "png",
            Variant::Embedded => "html",
        }
    }
}

/// A fully built response: status, headers and body.
#[derive(Debug, Clone)]
pub struct Rendered {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl Rendered {
    /// Build a `200 OK` for `variant` from PNG bytes.
    pub fn new(variant: Variant, png: Vec<u8>, cache: &CachePolicy) -> Self {
        let body = match variant {
            Variant::Raster => png,
            Variant::Embedded => embed_png(&png).into_bytes(),
        };

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(variant.content_type()));
        cache.apply(&mut headers);

        Self {
            status: StatusCode::OK,
            headers,
            body,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok())
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

impl IntoResponse for Rendered {
    fn into_response(self) -> Response {
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = self.status;
        *response.headers_mut() = self.headers;
        response
    }
}

impl IntoResponse for EncodingError {
    fn into_response(self) -> Response {
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}

/// `<img src='data:image/png;base64,...'>` for the given PNG bytes.
pub fn embed_png(png: &[u8]) -> String {
    let encoded = STANDARD.encode(png);
    let capacity = DATA_URI_PREFIX.len() + encoded.len() + DATA_URI_SUFFIX.len();
    let mut html = String::with_capacity(capacity);
    html.push_str(DATA_URI_PREFIX);
    html.push_str(&encoded);
    html.push_str(DATA_URI_SUFFIX);
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::{CACHE_CONTROL, EXPIRES};
    use qrcode::types::QrError;
    use time::macros::datetime;

    fn policy() -> CachePolicy {
        CachePolicy::starting_at(datetime!(2026-01-01 00:00:00 UTC)).unwrap()
    }

    #[test]
    fn raster_body_is_verbatim() {
        let png = vec![0x89, b'P', b'N', b'G'];
        let rendered = Rendered::new(Variant::Raster, png.clone(), &policy());
        assert_eq!(rendered.status(), StatusCode::OK);
        assert_eq!(rendered.content_type(), Some("image/png"));
        assert_eq!(rendered.body(), png.as_slice());
    }

    #[test]
    fn embedded_body_round_trips_through_base64() {
        let png = vec![0u8, 1, 2, 250, 251, 252, 253];
        let rendered = Rendered::new(Variant::Embedded, png.clone(), &policy());
        assert_eq!(rendered.content_type(), Some("text/html"));

        let html = std::str::from_utf8(rendered.body()).unwrap();
        let encoded = html
            .strip_prefix("<img src='data:image/png;base64,")
            .and_then(|rest| rest.strip_suffix("'>"))
            .unwrap();
        assert_eq!(STANDARD.decode(encoded).unwrap(), png);
    }

    #[test]
    fn both_variants_carry_identical_cache_headers() {
        let cache = policy();
        let raster = Rendered::new(Variant::Raster, vec![1], &cache);
        let embedded = Rendered::new(Variant::Embedded, vec![1], &cache);
        for name in [CACHE_CONTROL, EXPIRES, crate::http::cache::X_ATTRIBUTION] {
            assert_eq!(raster.headers().get(&name), embedded.headers().get(&name));
            assert!(raster.headers().contains_key(&name));
        }
    }

    #[test]
    fn into_response_keeps_headers() {
        let response = Rendered::new(Variant::Raster, vec![1, 2, 3], &policy()).into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers().get(CONTENT_TYPE).unwrap(), "image/png");
        assert_eq!(response.headers().get(CACHE_CONTROL).unwrap(), "max-age=31536000");
    }

    #[test]
    fn encoding_error_is_bare_500() {
        let response = EncodingError::from(QrError::DataTooLong).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.headers().get(CACHE_CONTROL).is_none());
        assert!(response.headers().get(EXPIRES).is_none());
        assert!(response.headers().get(CONTENT_TYPE).is_none());
    }

    #[test]
    fn variants_are_mounted_under_distinct_prefixes() {
        assert_eq!(Variant::Raster.route_prefix(), "/png");
        assert_eq!(Variant::Embedded.route_prefix(), "/html");
    }
}
