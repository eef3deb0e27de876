//! Buffered responses, pagination and the API's JSON envelopes.

use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode, Url};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

/// A fully buffered HTTP response.
///
/// The body is read to the end before any classification or decoding, so the
/// connection is already released when callers see this value.
#[derive(Debug, Clone)]
pub struct Response {
    /// Request method.
    pub method: Method,
    /// Resolved request URL, including the query string.
    pub url: Url,
    /// HTTP status.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Raw body.
    pub body: Bytes,
    /// Page numbers derived from the body's `meta` block.
    pub pagination: Pagination,
}

impl Response {
    /// First page, when the response is paginated.
    #[must_use]
    pub fn first_page(&self) -> Option<u32> {
        non_zero(self.pagination.first)
    }

    /// Next page, when there is one.
    #[must_use]
    pub fn next_page(&self) -> Option<u32> {
        non_zero(self.pagination.next)
    }

    /// Previous page, when there is one.
    #[must_use]
    pub fn prev_page(&self) -> Option<u32> {
        non_zero(self.pagination.prev)
    }

    /// Last page, when the response is paginated.
    #[must_use]
    pub fn last_page(&self) -> Option<u32> {
        non_zero(self.pagination.last)
    }
}

fn non_zero(page: u32) -> Option<u32> {
    (page > 0).then_some(page)
}

/// Page navigation numbers. Zero means "no such page".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pagination {
    /// First page.
    pub first: u32,
    /// Next page.
    pub next: u32,
    /// Previous page.
    pub prev: u32,
    /// Last page.
    pub last: u32,
}

impl Pagination {
    /// Derive page numbers from a `meta` block.
    #[must_use]
    pub fn from_meta(meta: &Meta) -> Self {
        if meta.page_count == 0 {
            return Self::default();
        }
        Self {
            first: 1,
            last: meta.page_count,
            next: if meta.page == meta.page_count {
                0
            } else {
                meta.page.saturating_add(1)
            },
            prev: if meta.page > 1 { meta.page - 1 } else { 0 },
        }
    }

    /// Derive page numbers from a raw response body.
    ///
    /// Best effort: a missing or malformed `meta` block yields all zeros.
    #[must_use]
    pub fn from_body(body: &[u8]) -> Self {
        #[derive(Deserialize)]
        struct MetaOnly {
            #[serde(default, deserialize_with = "meta_object")]
            meta: Option<Meta>,
        }

        match serde_json::from_slice::<MetaOnly>(body) {
            Ok(MetaOnly { meta: Some(meta) }) => Self::from_meta(&meta),
            Ok(MetaOnly { meta: None }) => {
                debug!("response has no pagination meta");
                Self::default()
            }
            Err(err) => {
                debug!(error = %err, "response body is not an envelope, skipping pagination");
                Self::default()
            }
        }
    }
}

/// The `meta` block of a list envelope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Meta {
    /// Total records across all pages.
    #[serde(deserialize_with = "count")]
    pub total: u64,
    /// Records skipped before this page.
    #[serde(deserialize_with = "count")]
    pub skipped: u64,
    /// Page size.
    #[serde(deserialize_with = "count")]
    pub per_page: u32,
    /// Current page.
    #[serde(deserialize_with = "count")]
    pub page: u32,
    /// Number of pages.
    #[serde(deserialize_with = "count")]
    pub page_count: u32,
}

/// Envelope wrapping a single record.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Envelope {
    /// Whether the API reported success.
    pub status: Option<bool>,
    /// Human-readable outcome.
    pub message: Option<String>,
    /// The record, still untyped.
    pub data: Value,
    /// Pagination block, if any.
    #[serde(deserialize_with = "meta_object")]
    pub meta: Option<Meta>,
}

/// Envelope wrapping a list of records.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ListEnvelope {
    /// Whether the API reported success.
    pub status: Option<bool>,
    /// Human-readable outcome.
    pub message: Option<String>,
    /// The records, still untyped, in API order.
    #[serde(deserialize_with = "null_as_empty")]
    pub data: Vec<Value>,
    /// Pagination block, if any.
    #[serde(deserialize_with = "meta_object")]
    pub meta: Option<Meta>,
}

/// Result of a resource operation.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    /// The decoded record or records.
    pub data: T,
    /// Envelope message.
    pub message: Option<String>,
    /// Envelope `meta` block, for list operations.
    pub meta: Option<Meta>,
    /// The underlying response.
    pub response: Response,
}

impl<T> ApiResponse<T> {
    /// Discard the envelope and response, keeping only the data.
    pub fn into_data(self) -> T {
        self.data
    }
}

/// Accept counts sent either as numbers or numeric strings.
fn count<'de, D, N>(deserializer: D) -> Result<N, D::Error>
where
    D: Deserializer<'de>,
    N: TryFrom<u64> + Default,
{
    let n = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64().unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    };
    Ok(N::try_from(n).unwrap_or_default())
}

/// Decode a `meta` block, treating anything but a well-formed object as
/// absent.
fn meta_object<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Meta>, D::Error> {
    match Value::deserialize(deserializer)? {
        object @ Value::Object(_) => Ok(serde_json::from_value(object).ok()),
        _ => Ok(None),
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Value>, D::Error> {
    Ok(Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn meta(page: u32, page_count: u32) -> Meta {
        Meta {
            page,
            page_count,
            ..Meta::default()
        }
    }

    #[test]
    fn single_page_has_no_neighbours() {
        let pagination = Pagination::from_meta(&meta(1, 1));
        assert_eq!(
            pagination,
            Pagination {
                first: 1,
                next: 0,
                prev: 0,
                last: 1
            }
        );
    }

    #[test]
    fn middle_page_has_both_neighbours() {
        let pagination = Pagination::from_meta(&meta(3, 5));
        assert_eq!(pagination.first, 1);
        assert_eq!(pagination.prev, 2);
        assert_eq!(pagination.next, 4);
        assert_eq!(pagination.last, 5);
    }

    #[test]
    fn zero_page_count_is_not_paginated() {
        assert_eq!(Pagination::from_meta(&meta(4, 0)), Pagination::default());
    }

    #[test]
    fn body_without_meta_is_not_paginated() {
        let body = br#"{"status":true,"message":"ok","data":{"currency":"NGN"}}"#;
        assert_eq!(Pagination::from_body(body), Pagination::default());
        assert_eq!(Pagination::from_body(b"not json"), Pagination::default());
        assert_eq!(Pagination::from_body(b""), Pagination::default());
    }

    #[test]
    fn body_meta_counts_may_be_strings() {
        let body = json!({
            "data": [],
            "meta": { "total": 120, "skipped": 50, "perPage": "50", "page": "2", "pageCount": 3 }
        })
        .to_string();
        let pagination = Pagination::from_body(body.as_bytes());
        assert_eq!(pagination.prev, 1);
        assert_eq!(pagination.next, 3);
        assert_eq!(pagination.last, 3);
    }

    #[test]
    fn list_envelope_tolerates_null_data_and_bad_meta() {
        let body = json!({ "status": true, "data": null, "meta": [1, 2] });
        let envelope: ListEnvelope = serde_json::from_value(body).unwrap();
        assert!(envelope.data.is_empty());
        assert!(envelope.meta.is_none());
        assert_eq!(envelope.status, Some(true));
    }

    #[test]
    fn non_object_meta_is_not_paginated() {
        for meta in [json!([1, 2, 3, 4, 5]), json!("1"), json!(7)] {
            let body = json!({ "data": [], "meta": meta }).to_string();
            assert_eq!(Pagination::from_body(body.as_bytes()), Pagination::default());
            let envelope: Envelope =
                serde_json::from_value(json!({ "data": {}, "meta": meta })).unwrap();
            assert!(envelope.meta.is_none());
        }
    }

    #[test]
    fn envelope_keeps_data_untyped() {
        let envelope: Envelope = serde_json::from_value(json!({
            "status": true,
            "message": "Balances retrieved",
            "data": { "currency": "NGN", "balance": 1_700_000 }
        }))
        .unwrap();
        assert_eq!(envelope.message.as_deref(), Some("Balances retrieved"));
        assert_eq!(envelope.data["balance"], json!(1_700_000));
        assert!(envelope.meta.is_none());
    }
}
