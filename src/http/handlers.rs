//! Route handlers: extract → encode → render.

use std::time::Instant;

use axum::{
    extract::State,
    http::{header::LOCATION, HeaderName, StatusCode, Uri},
};

use crate::http::render::{Rendered, Variant};
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::qr::{encoder, EncodingError, RouteMatch};

/// `GET /png/<payload>`
pub async fn png_handler(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Rendered, EncodingError> {
    render(&state, Variant::Raster, &uri)
}

/// `GET /html/<payload>`
pub async fn html_handler(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Rendered, EncodingError> {
    render(&state, Variant::Embedded, &uri)
}

/// `GET /png` and `GET /html`: permanent redirect to the route with a trailing slash.
pub async fn trailing_slash_redirect(uri: Uri) -> (StatusCode, [(HeaderName, String); 1]) {
    (StatusCode::MOVED_PERMANENTLY, [(LOCATION, with_trailing_slash(&uri))])
}

/// `uri` as an origin-form target with `/` appended to the path, query kept.
pub fn with_trailing_slash(uri: &Uri) -> String {
    match uri.query() {
        Some(query) => format!("{}/?{}", uri.path(), query),
        None => format!("{}/", uri.path()),
    }
}

/// Run the full pipeline for one request.
pub fn render(state: &AppState, variant: Variant, uri: &Uri) -> Result<Rendered, EncodingError> {
    let started = Instant::now();
    let payload = RouteMatch::from_uri(variant.route_prefix(), uri).encodable_string();

    let result = encoder::encode(payload.as_bytes())
        .and_then(|symbol| symbol.to_png(state.module_size))
        .map(|png| Rendered::new(variant, png, &state.cache));

    metrics::record_render(variant.label(), result.is_ok(), started);

    match &result {
        Ok(rendered) => tracing::debug!(
            variant = variant.label(),
            payload_len = payload.len(),
            body_len = rendered.body().len(),
            "Rendered QR code"
        ),
        Err(e) => tracing::warn!(
            variant = variant.label(),
            payload_len = payload.len(),
            error = %e,
            "Failed to encode payload"
        ),
    }

    result
}
