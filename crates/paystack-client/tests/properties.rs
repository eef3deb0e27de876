use bytes::Bytes;
use paystack_client::{classify, ClientOptions, Error, Meta, Pagination, PaystackClient, Response};
use proptest::prelude::*;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use serde_json::json;

fn response(status: u16, body: &str) -> Response {
    Response {
        method: Method::GET,
        url: "https://api.paystack.co/balance".parse().unwrap(),
        status: StatusCode::from_u16(status).unwrap(),
        headers: HeaderMap::new(),
        body: Bytes::from(body.to_string()),
        pagination: Pagination::default(),
    }
}

fn arb_segment() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,11}"
}

proptest! {
    /// Every 2xx passes through untouched.
    #[test]
    fn success_statuses_pass(status in 200u16..300) {
        let classified = classify(response(status, "{}"));
        prop_assert!(classified.is_ok());
        prop_assert_eq!(classified.unwrap().status.as_u16(), status);
    }

    /// Every non-2xx maps to exactly one error kind and keeps its response.
    #[test]
    fn failure_statuses_are_classified(status in prop_oneof![100u16..200, 300u16..600]) {
        let err = classify(response(status, r#"{"message":"nope"}"#)).unwrap_err();
        let expected = match status {
            400 => matches!(err, Error::BadRequest(_)),
            401 => matches!(err, Error::Unauthorized(_)),
            404 => matches!(err, Error::NotFound(_)),
            500..=504 => matches!(err, Error::Server(_)),
            _ => matches!(err, Error::Http(_)),
        };
        prop_assert!(expected, "status {} classified as {:?}", status, err);
        prop_assert_eq!(err.status().map(|s| s.as_u16()), Some(status));
        prop_assert_eq!(err.message(), Some("nope"));
    }

    /// Unparseable error bodies never change the classification.
    #[test]
    fn error_body_parsing_is_best_effort(body in ".{0,64}") {
        let err = classify(response(404, &body)).unwrap_err();
        prop_assert!(matches!(err, Error::NotFound(_)));
    }

    /// A relative path lands under the base path, segment for segment.
    #[test]
    fn paths_resolve_under_base(
        prefix in prop::collection::vec(arb_segment(), 0..3),
        segments in prop::collection::vec(arb_segment(), 1..4),
    ) {
        let mut base = String::from("https://api.paystack.co/");
        for part in &prefix {
            base.push_str(part);
            base.push('/');
        }
        let options = ClientOptions::with_base_url(base.clone());
        let client = PaystackClient::with_options("sk_test", options).unwrap();
        let path = segments.join("/");
        let request = client.new_request::<()>(Method::GET, &path, None).unwrap();
        prop_assert_eq!(request.url.as_str(), format!("{base}{path}"));
    }

    /// Paths starting with a separator are refused.
    #[test]
    fn absolute_paths_are_rejected(segment in arb_segment()) {
        let client = PaystackClient::new("sk_test").unwrap();
        let err = client
            .new_request::<()>(Method::GET, &format!("/{segment}"), None)
            .unwrap_err();
        prop_assert!(matches!(err, Error::Configuration(_)));
    }

    /// Page numbers stay within [1, page_count] and neighbour the current page.
    #[test]
    fn pagination_is_consistent(page_count in 1u32..10_000, offset in 0u32..10_000) {
        let page = 1 + offset % page_count;
        let meta = Meta { page, page_count, ..Meta::default() };
        let p = Pagination::from_meta(&meta);

        prop_assert_eq!(p.first, 1);
        prop_assert_eq!(p.last, page_count);
        if page < page_count {
            prop_assert_eq!(p.next, page + 1);
        } else {
            prop_assert_eq!(p.next, 0);
        }
        if page > 1 {
            prop_assert_eq!(p.prev, page - 1);
        } else {
            prop_assert_eq!(p.prev, 0);
        }
    }

    /// Reading pagination from the raw body agrees with reading it from meta.
    #[test]
    fn body_pagination_matches_meta(
        page_count in 1u32..500,
        offset in 0u32..500,
        per_page in 1u32..200,
    ) {
        let page = 1 + offset % page_count;
        let body = json!({
            "status": true,
            "data": [],
            "meta": { "perPage": per_page, "page": page, "pageCount": page_count }
        })
        .to_string();
        let meta = Meta { page, page_count, per_page, ..Meta::default() };

        let from_body = Pagination::from_body(body.as_bytes());
        prop_assert_eq!(from_body, Pagination::from_meta(&meta));
        prop_assert_eq!(Pagination::from_body(body.as_bytes()), from_body);
    }
}
