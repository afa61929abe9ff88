//! Delivery endpoint: serves the current artifact for playback and download.
//!
//! The `t` query parameter only busts browser caches and is never inspected;
//! whatever it says, the current artifact is returned.
//!
//! A single `Range: bytes=...` request is answered with `206 Partial Content`
//! so players can seek. Multi-range and malformed headers get the full body.

use axum::extract::{RawQuery, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::error::HttpError;
use crate::state::AppState;

/// `GET <delivery_path>?t=<token>`
pub async fn download(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> Result<Response, HttpError> {
    let Some(artifact) = state.store.current() else {
        tracing::debug!(target: "voxcast.http", query = ?query, "Delivery requested before any synthesis");
        return Err(HttpError::NotFound("No audio has been generated yet".into()));
    };

    let etag = artifact.etag();
    if if_none_match(&headers, &etag) {
        return Ok((
            StatusCode::NOT_MODIFIED,
            [
                (header::ETAG, etag),
                (header::CACHE_CONTROL, "no-cache".to_string()),
            ],
        )
            .into_response());
    }

    tracing::debug!(
        target: "voxcast.http",
        version = %artifact.version,
        bytes = artifact.len(),
        query = ?query,
        "Serving artifact"
    );

    let total = artifact.len();
    let requested = if if_range_matches(&headers, &etag) {
        requested_range(&headers, total)
    } else {
        ByteRange::Full
    };

    let disposition = format!(
        "attachment; filename=\"{}\"",
        state.settings.download_filename
    );
    let response = match requested {
        ByteRange::Full => (
            [
                (header::CONTENT_TYPE, artifact.mime_type.clone()),
                (header::CONTENT_DISPOSITION, disposition),
                (header::CONTENT_LENGTH, total.to_string()),
                (header::ACCEPT_RANGES, "bytes".to_string()),
                (header::ETAG, etag),
                (header::CACHE_CONTROL, "no-cache".to_string()),
            ],
            artifact.bytes.clone(),
        )
            .into_response(),
        ByteRange::Partial { start, end } => (
            StatusCode::PARTIAL_CONTENT,
            [
                (header::CONTENT_TYPE, artifact.mime_type.clone()),
                (header::CONTENT_DISPOSITION, disposition),
                (header::CONTENT_LENGTH, (end - start + 1).to_string()),
                (header::CONTENT_RANGE, format!("bytes {start}-{end}/{total}")),
                (header::ACCEPT_RANGES, "bytes".to_string()),
                (header::ETAG, etag),
                (header::CACHE_CONTROL, "no-cache".to_string()),
            ],
            artifact.bytes.slice(start..=end),
        )
            .into_response(),
        ByteRange::Unsatisfiable => {
            tracing::debug!(target: "voxcast.http", total, "Unsatisfiable range requested");
            (
                StatusCode::RANGE_NOT_SATISFIABLE,
                [
                    (header::CONTENT_RANGE, format!("bytes */{total}")),
                    (header::ACCEPT_RANGES, "bytes".to_string()),
                ],
            )
                .into_response()
        }
    };
    Ok(response)
}

/// How a `Range` header applies to a body of known length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ByteRange {
    Full,
    /// Inclusive bounds, already clamped to the body.
    Partial { start: usize, end: usize },
    Unsatisfiable,
}

fn requested_range(headers: &HeaderMap, total: usize) -> ByteRange {
    let mut values = headers.get_all(header::RANGE).iter();
    match (values.next(), values.next()) {
        (Some(value), None) => value
            .to_str()
            .map_or(ByteRange::Full, |value| parse_range(value, total)),
        _ => ByteRange::Full,
    }
}

/// Parse a single `bytes=` range. Anything this cannot honor exactly is `Full`.
fn parse_range(value: &str, total: usize) -> ByteRange {
    let Some(set) = value.trim().strip_prefix("bytes=") else {
        return ByteRange::Full;
    };
    if set.contains(',') {
        return ByteRange::Full;
    }
    let Some((first, last)) = set.trim().split_once('-') else {
        return ByteRange::Full;
    };
    let (first, last) = (first.trim(), last.trim());

    if first.is_empty() {
        let Ok(suffix) = last.parse::<usize>() else {
            return ByteRange::Full;
        };
        if suffix == 0 || total == 0 {
            return ByteRange::Unsatisfiable;
        }
        return ByteRange::Partial {
            start: total.saturating_sub(suffix),
            end: total - 1,
        };
    }

    let Ok(start) = first.parse::<usize>() else {
        return ByteRange::Full;
    };
    let end = if last.is_empty() {
        usize::MAX
    } else {
        match last.parse::<usize>() {
            Ok(end) if end >= start => end,
            _ => return ByteRange::Full,
        }
    };
    if start >= total {
        return ByteRange::Unsatisfiable;
    }
    ByteRange::Partial {
        start,
        end: end.min(total - 1),
    }
}

/// `If-Range` only lets a range through when it names the current ETag.
fn if_range_matches(headers: &HeaderMap, etag: &str) -> bool {
    headers
        .get(header::IF_RANGE)
        .and_then(|value| value.to_str().ok())
        .is_none_or(|value| value.trim() == etag)
}

/// Whether `If-None-Match` names `etag` (or `*`). Weak validators match too.
fn if_none_match(headers: &HeaderMap, etag: &str) -> bool {
    headers
        .get_all(header::IF_NONE_MATCH)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .any(|candidate| candidate == "*" || candidate.trim_start_matches("W/") == etag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::IF_NONE_MATCH, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn if_none_match_exact() {
        assert!(if_none_match(&headers_with("\"42\""), "\"42\""));
        assert!(!if_none_match(&headers_with("\"41\""), "\"42\""));
    }

    #[test]
    fn if_none_match_list_weak_and_wildcard() {
        assert!(if_none_match(&headers_with("\"1\", W/\"42\""), "\"42\""));
        assert!(if_none_match(&headers_with("*"), "\"42\""));
    }

    #[test]
    fn missing_header_never_matches() {
        assert!(!if_none_match(&HeaderMap::new(), "\"42\""));
    }

    #[test]
    fn parse_range_bounded_open_and_suffix() {
        assert_eq!(parse_range("bytes=0-1", 28), ByteRange::Partial { start: 0, end: 1 });
        assert_eq!(parse_range("bytes=10-", 28), ByteRange::Partial { start: 10, end: 27 });
        assert_eq!(parse_range("bytes=-4", 28), ByteRange::Partial { start: 24, end: 27 });
        assert_eq!(parse_range("bytes=20-99", 28), ByteRange::Partial { start: 20, end: 27 });
        assert_eq!(parse_range("bytes=-100", 28), ByteRange::Partial { start: 0, end: 27 });
    }

    #[test]
    fn parse_range_unsatisfiable() {
        assert_eq!(parse_range("bytes=28-", 28), ByteRange::Unsatisfiable);
        assert_eq!(parse_range("bytes=50-60", 28), ByteRange::Unsatisfiable);
        assert_eq!(parse_range("bytes=-0", 28), ByteRange::Unsatisfiable);
    }

    #[test]
    fn parse_range_ignores_what_it_cannot_honor() {
        assert_eq!(parse_range("items=0-1", 28), ByteRange::Full);
        assert_eq!(parse_range("bytes=0-1,4-5", 28), ByteRange::Full);
        assert_eq!(parse_range("bytes=5-2", 28), ByteRange::Full);
        assert_eq!(parse_range("bytes=a-b", 28), ByteRange::Full);
        assert_eq!(parse_range("bytes=", 28), ByteRange::Full);
    }

    #[test]
    fn stale_if_range_disables_ranges() {
        let mut headers = HeaderMap::new();
        assert!(if_range_matches(&headers, "\"42\""));
        headers.insert(header::IF_RANGE, HeaderValue::from_static("\"41\""));
        assert!(!if_range_matches(&headers, "\"42\""));
        headers.insert(header::IF_RANGE, HeaderValue::from_static("\"42\""));
        assert!(if_range_matches(&headers, "\"42\""));
    }
}
