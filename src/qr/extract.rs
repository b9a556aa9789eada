//! Recovering the encodable string from a wildcard route match.
//!
//! A request to `/png/http://example.com/a?b=c` matches the `/png` route with
//! the segment `/http://example.com/a` and the query `b=c`. The segment still
//! carries the separator that followed the route prefix, so exactly one
//! character is dropped from its front before the query is re-attached.
//!
//! Nothing here decodes or validates: `%20` stays `%20`.

use axum::http::Uri;

/// The part of a request target captured by a `/<mode>/<payload...>` route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    segment: &'a str,
    query: Option<&'a str>,
}

impl<'a> RouteMatch<'a> {
    /// Build a match from an already-captured segment and raw query string.
    pub fn new(segment: &'a str, query: Option<&'a str>) -> Self {
        Self { segment, query }
    }

    /// Split a raw request URI into the segment following `prefix` and its query.
    ///
    /// If the path does not start with `prefix` the whole path is treated as
    /// the segment.
    pub fn from_uri(prefix: &str, uri: &'a Uri) -> Self {
        let path = uri.path();
        let segment = path.strip_prefix(prefix).unwrap_or(path);
        Self::new(segment, uri.query())
    }

    /// The captured segment, leading separator included.
    pub fn segment(&self) -> &'a str {
        self.segment
    }

    /// The raw query string, if the request had one.
    pub fn query(&self) -> Option<&'a str> {
        self.query
    }

    /// The exact string the caller asked to encode.
    pub fn encodable_string(&self) -> String {
        encodable_string(self.segment, self.query)
    }
}

/// Strip the leading separator from `segment` and append a non-empty `query`.
pub fn encodable_string(segment: &str, query: Option<&str>) -> String {
    let payload = match segment.chars().next() {
        Some(first) => &segment[first.len_utf8()..],
        None => segment,
    };

    match query {
        Some(query) if !query.is_empty() => {
            let mut target = String::with_capacity(payload.len() + 1 + query.len());
            target.push_str(payload);
            target.push('?');
            target.push_str(query);
            target
        }
        _ => payload.to_string(),
    }
}
