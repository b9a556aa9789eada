//! Cache policy shared by every successful response.
//!
//! # Responsibilities
//! - Compute the `Expires` value once, at process start
//! - Attach attribution and caching headers to rendered responses
//!
//! # Design Decisions
//! - One year is the longest lifetime HTTP caches are required to honour
//! - The formatted timestamp is immutable after startup and shared by reference
//! - Year arithmetic is calendar based; Feb 29 rolls forward to Mar 1

use axum::http::{
    header::{InvalidHeaderValue, CACHE_CONTROL, EXPIRES},
    HeaderMap, HeaderName, HeaderValue,
};
use thiserror::Error;
use time::{
    format_description::BorrowedFormatItem, macros::format_description, Duration, OffsetDateTime,
    UtcOffset,
};

/// Names the origin of the barcode encoder.
pub const X_ATTRIBUTION: HeaderName = HeaderName::from_static("x-attribution");

/// Value of the `X-Attribution` header.
pub const ATTRIBUTION: &str = "Uses github.com/kennytm/qrcode-rust";

/// One year, in seconds.
pub const MAX_AGE_SECS: u64 = 31_536_000;

const CACHE_CONTROL_VALUE: &str = "max-age=31536000";

/// RFC 1123 date, always rendered in GMT.
const HTTP_DATE: &[BorrowedFormatItem<'static>] = format_description!(
    "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
);

/// Error building a [`CachePolicy`].
#[derive(Debug, Error)]
pub enum CachePolicyError {
    #[error("failed to format expiry timestamp: {0}")]
    Format(#[from] time::error::Format),

    #[error("expiry timestamp is not a valid header value: {0}")]
    Header(#[from] InvalidHeaderValue),
}

/// Caching headers computed once and reused for the life of the process.
#[derive(Debug, Clone)]
pub struct CachePolicy {
    expires_at: OffsetDateTime,
    expires: HeaderValue,
}

impl CachePolicy {
    /// Build the policy for a process that started at `started`.
    pub fn starting_at(started: OffsetDateTime) -> Result<Self, CachePolicyError> {
        let expires_at = one_year_after(started.to_offset(UtcOffset::UTC));
        let formatted = expires_at.format(HTTP_DATE)?;
        let expires = HeaderValue::try_from(formatted)?;
        Ok(Self {
            expires_at,
            expires,
        })
    }

    /// Build the policy from the current wall clock.
    pub fn from_process_start() -> Result<Self, CachePolicyError> {
        Self::starting_at(OffsetDateTime::now_utc())
    }

    /// The instant responses expire, in UTC.
    pub fn expires_at(&self) -> OffsetDateTime {
        self.expires_at
    }

    /// The formatted `Expires` header value.
    pub fn expires(&self) -> &HeaderValue {
        &self.expires
    }

    /// Insert attribution and caching headers, replacing any existing values.
    pub fn apply(&self, headers: &mut HeaderMap) {
        headers.insert(X_ATTRIBUTION, HeaderValue::from_static(ATTRIBUTION));
        headers.insert(CACHE_CONTROL, HeaderValue::from_static(CACHE_CONTROL_VALUE));
        headers.insert(EXPIRES, self.expires.clone());
    }
}

/// Same wall-clock time one calendar year later.
pub fn one_year_after(start: OffsetDateTime) -> OffsetDateTime {
    // replace_year only fails for Feb 29 landing in a common year.
    start
        .replace_year(start.year() + 1)
        .unwrap_or_else(|_| start + Duration::days(366))
}
