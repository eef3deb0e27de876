//! Common test utilities for paystack-client integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use paystack_client::{ClientOptions, PaystackClient};
use serde_json::{json, Value};
use wiremock::MockServer;

/// Secret used by every test client.
pub const SECRET: &str = "sk_test_0123456789abcdef";

/// Test harness: a mock Paystack API and a client pointed at it.
pub struct TestHarness {
    /// The mock server standing in for `api.paystack.co`.
    pub server: MockServer,
    /// A client whose base URL is the mock server.
    pub client: PaystackClient,
}

impl TestHarness {
    /// Start a fresh mock server and build a client against it.
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let options = ClientOptions::with_base_url(format!("{}/", server.uri()));
        let client = PaystackClient::with_options(SECRET, options).expect("Failed to build client");
        Self { server, client }
    }

    /// Expected `Authorization` header value.
    pub fn bearer() -> String {
        format!("Bearer {SECRET}")
    }
}

/// Single-record envelope.
pub fn envelope(message: &str, data: Value) -> Value {
    json!({ "status": true, "message": message, "data": data })
}

/// List envelope with a `meta` block.
pub fn list_envelope(message: &str, data: Value, page: u32, per_page: u32, total: u64) -> Value {
    let page_count = total.div_ceil(u64::from(per_page));
    json!({
        "status": true,
        "message": message,
        "data": data,
        "meta": {
            "total": total,
            "skipped": u64::from(page.saturating_sub(1)) * u64::from(per_page),
            "perPage": per_page,
            "page": page,
            "pageCount": page_count
        }
    })
}
