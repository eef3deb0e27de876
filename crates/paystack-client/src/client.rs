//! Paystack HTTP client implementation.

use std::fmt;
use std::io::Write;
use std::time::Duration;

use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT,
};
use reqwest::{Client, Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use paystack_core::{decode, decode_all, Message};

use crate::api::{
    BalanceApi, BulkChargeApi, ChargeApi, CustomerApi, IntegrationApi, MiscellaneousApi, PageApi,
    PlanApi, SettlementApi, SubaccountApi, SubscriptionApi, TransactionApi, TransferApi,
    TransferRecipientApi,
};
use crate::context::Context;
use crate::error::{ApiError, Error, Result};
use crate::response::{ApiResponse, Envelope, ListEnvelope, Pagination, Response};

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://api.paystack.co/";

/// Default `User-Agent` header.
pub const DEFAULT_USER_AGENT: &str = concat!("paystack-rs/", env!("CARGO_PKG_VERSION"));

const JSON: &str = "application/json";

/// Paystack API client.
///
/// Holds the transport and configuration. Resource groups are borrowed from
/// it (`client.customers()`, `client.transactions()`, ...) and share its
/// settings. Cloning is cheap; clones share the connection pool.
#[derive(Clone)]
pub struct PaystackClient {
    http: Client,
    base_url: Url,
    user_agent: String,
    secret: String,
}

impl fmt::Debug for PaystackClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaystackClient")
            .field("base_url", &self.base_url.as_str())
            .field("user_agent", &self.user_agent)
            .field("secret", &if self.secret.is_empty() { "" } else { "<redacted>" })
            .finish_non_exhaustive()
    }
}

/// An outbound request, built but not yet sent.
#[derive(Debug, Clone)]
pub struct Request {
    /// HTTP method.
    pub method: Method,
    /// Absolute URL.
    pub url: Url,
    /// Header set.
    pub headers: HeaderMap,
    /// JSON body, if any.
    pub body: Option<Vec<u8>>,
}

impl Request {
    /// Append query options to the URL.
    ///
    /// `options` must serialize to a flat object. Unset (`null`) fields are
    /// skipped; strings are appended verbatim and other scalars as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encode`] if serialization fails and
    /// [`Error::InvalidRequest`] if `options` is not a flat object.
    pub fn query<Q: Serialize + ?Sized>(mut self, options: &Q) -> Result<Self> {
        let fields = match serde_json::to_value(options).map_err(Error::Encode)? {
            Value::Object(fields) => fields,
            Value::Null => return Ok(self),
            other => {
                return Err(Error::InvalidRequest(format!(
                    "query options must be an object, got {other}"
                )))
            }
        };

        let mut has_pairs = false;
        {
            let mut pairs = self.url.query_pairs_mut();
            for (key, value) in fields {
                let value = match value {
                    Value::Null => continue,
                    Value::String(s) => s,
                    Value::Bool(_) | Value::Number(_) => value.to_string(),
                    Value::Array(_) | Value::Object(_) => {
                        return Err(Error::InvalidRequest(format!(
                            "query option `{key}` must be a scalar"
                        )))
                    }
                };
                pairs.append_pair(&key, &value);
                has_pairs = true;
            }
        }
        if !has_pairs && self.url.query() == Some("") {
            self.url.set_query(None);
        }
        Ok(self)
    }
}

impl PaystackClient {
    /// Create a client with default options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the HTTP client cannot be built.
    pub fn new(secret: impl Into<String>) -> Result<Self> {
        Self::with_options(secret, ClientOptions::default())
    }

    /// Create a client with custom options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the base URL is invalid or the
    /// HTTP client cannot be built.
    pub fn with_options(secret: impl Into<String>, options: ClientOptions) -> Result<Self> {
        let mut builder = Client::builder();
        if options.timeout_seconds > 0 {
            builder = builder.timeout(Duration::from_secs(options.timeout_seconds));
        }
        let http = builder
            .build()
            .map_err(|e| Error::Configuration(format!("failed to build HTTP client: {e}")))?;

        Self::with_http_client(http, secret, options)
    }

    /// Create a client over a caller-supplied `reqwest::Client`.
    ///
    /// `options.timeout_seconds` is ignored; configure it on `http` instead.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the base URL is invalid.
    pub fn with_http_client(
        http: Client,
        secret: impl Into<String>,
        options: ClientOptions,
    ) -> Result<Self> {
        Ok(Self {
            http,
            base_url: parse_base_url(&options.base_url)?,
            user_agent: options.user_agent,
            secret: secret.into(),
        })
    }

    /// Base URL requests are resolved against.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `User-Agent` sent with each request.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Replace the bearer secret. An empty secret sends no `Authorization`.
    pub fn set_secret(&mut self, secret: impl Into<String>) {
        self.secret = secret.into();
    }

    /// Replace the `User-Agent`. An empty value sends no header.
    pub fn set_user_agent(&mut self, user_agent: impl Into<String>) {
        self.user_agent = user_agent.into();
    }

    /// Replace the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if `base_url` is not absolute or its
    /// path does not end with `/`. The previous URL is kept in that case.
    pub fn set_base_url(&mut self, base_url: &str) -> Result<()> {
        self.base_url = parse_base_url(base_url)?;
        Ok(())
    }

    /// Build a request for `path`, relative to the base URL.
    ///
    /// `path` must not start with `/`. When `body` is given it is encoded as
    /// JSON and `Content-Type` is set. `Accept`, `User-Agent` and, if a secret
    /// is configured, `Authorization: Bearer` are always attached.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] for an unusable base URL, path or
    /// header value, and [`Error::Encode`] if the body cannot be serialized.
    pub fn new_request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Request> {
        if !self.base_url.path().ends_with('/') {
            return Err(Error::Configuration(format!(
                "base URL must have a trailing slash, but {:?} does not",
                self.base_url.as_str()
            )));
        }
        if path.starts_with('/') {
            return Err(Error::Configuration(format!(
                "request path must be relative, but {path:?} starts with '/'"
            )));
        }
        let url = self
            .base_url
            .join(path)
            .map_err(|e| Error::Configuration(format!("invalid request path {path:?}: {e}")))?;

        let mut headers = HeaderMap::new();
        let body = match body {
            Some(body) => {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON));
                Some(serde_json::to_vec(body).map_err(Error::Encode)?)
            }
            None => None,
        };
        headers.insert(ACCEPT, HeaderValue::from_static(JSON));
        if !self.user_agent.is_empty() {
            let value = HeaderValue::from_str(&self.user_agent)
                .map_err(|e| Error::Configuration(format!("invalid user agent: {e}")))?;
            headers.insert(USER_AGENT, value);
        }
        if !self.secret.is_empty() {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", self.secret))
                .map_err(|_| Error::Configuration("secret is not a valid header value".into()))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        Ok(Request {
            method,
            url,
            headers,
            body,
        })
    }

    /// Send a request and classify the reply.
    ///
    /// The body is buffered in full, then page numbers are derived from its
    /// `meta` block. A non-2xx status becomes an error that still carries the
    /// response.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Cancelled`] if `ctx` ends first (even if the transport
    /// also failed), [`Error::Transport`] for network failures, and the
    /// matching HTTP variant for a non-2xx status.
    pub async fn send(&self, ctx: &Context, request: Request) -> Result<Response> {
        let response = self.exchange(ctx, request).await?;
        classify(response)
    }

    /// Send a request and decode a 2xx body into `T`.
    ///
    /// An empty or whitespace-only body yields `T::default()`.
    ///
    /// # Errors
    ///
    /// As [`send`](Self::send), plus [`Error::Decode`] for a malformed body.
    pub async fn send_json<T>(&self, ctx: &Context, request: Request) -> Result<(T, Response)>
    where
        T: DeserializeOwned + Default,
    {
        let response = self.send(ctx, request).await?;
        if response.body.iter().all(u8::is_ascii_whitespace) {
            return Ok((T::default(), response));
        }
        match serde_json::from_slice(&response.body) {
            Ok(value) => Ok((value, response)),
            Err(source) => Err(Error::Decode {
                source,
                response: Box::new(response),
            }),
        }
    }

    /// Send a request and copy a 2xx body verbatim into `sink`.
    ///
    /// # Errors
    ///
    /// As [`send`](Self::send), plus [`Error::Io`] if writing fails.
    pub async fn send_raw<W: Write + ?Sized>(
        &self,
        ctx: &Context,
        request: Request,
        sink: &mut W,
    ) -> Result<Response> {
        let response = self.send(ctx, request).await?;
        sink.write_all(&response.body)?;
        Ok(response)
    }

    async fn exchange(&self, ctx: &Context, request: Request) -> Result<Response> {
        if let Some(reason) = ctx.err() {
            return Err(Error::Cancelled(reason));
        }

        let Request {
            method,
            url,
            headers,
            body,
        } = request;
        debug!(%method, %url, "dispatching request");

        let mut builder = self
            .http
            .request(method.clone(), url.clone())
            .headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let exchange = async {
            let reply = builder.send().await?;
            let status = reply.status();
            let headers = reply.headers().clone();
            let body = reply.bytes().await?;
            Ok::<_, reqwest::Error>((status, headers, body))
        };

        let outcome = tokio::select! {
            biased;
            reason = ctx.done() => return Err(Error::Cancelled(reason)),
            outcome = exchange => outcome,
        };
        let (status, headers, body) = outcome.map_err(|err| match ctx.err() {
            Some(reason) => Error::Cancelled(reason),
            None => Error::Transport(err),
        })?;

        let pagination = Pagination::from_body(&body);
        debug!(status = status.as_u16(), ?pagination, "received response");

        Ok(Response {
            method,
            url,
            status,
            headers,
            body,
            pagination,
        })
    }

    /// Dispatch and decode a single-record envelope.
    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        ctx: &Context,
        request: Request,
    ) -> Result<ApiResponse<T>> {
        let (envelope, response): (Envelope, _) = self.send_json(ctx, request).await?;
        match decode(envelope.data) {
            Ok(data) => Ok(ApiResponse {
                data,
                message: envelope.message,
                meta: envelope.meta,
                response,
            }),
            Err(source) => Err(Error::Decode {
                source,
                response: Box::new(response),
            }),
        }
    }

    /// Dispatch and decode a list envelope, element by element.
    pub(crate) async fn fetch_list<T: DeserializeOwned>(
        &self,
        ctx: &Context,
        request: Request,
    ) -> Result<ApiResponse<Vec<T>>> {
        let (envelope, response): (ListEnvelope, _) = self.send_json(ctx, request).await?;
        match decode_all(envelope.data) {
            Ok(data) => Ok(ApiResponse {
                data,
                message: envelope.message,
                meta: envelope.meta,
                response,
            }),
            Err(source) => Err(Error::Decode {
                source,
                response: Box::new(response),
            }),
        }
    }

    /// Dispatch an operation whose reply carries no record.
    pub(crate) async fn fetch_message(
        &self,
        ctx: &Context,
        request: Request,
    ) -> Result<ApiResponse<Message>> {
        let (envelope, response): (Envelope, _) = self.send_json(ctx, request).await?;
        Ok(ApiResponse {
            data: Message {
                status: envelope.status,
                message: envelope.message.clone(),
            },
            message: envelope.message,
            meta: envelope.meta,
            response,
        })
    }

    /// `GET path` with no body.
    pub(crate) fn get(&self, path: &str) -> Result<Request> {
        self.new_request::<()>(Method::GET, path, None)
    }

    /// `POST path` with a JSON body.
    pub(crate) fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Request> {
        self.new_request(Method::POST, path, Some(body))
    }

    /// `POST path` with no body.
    pub(crate) fn post_empty(&self, path: &str) -> Result<Request> {
        self.new_request::<()>(Method::POST, path, None)
    }

    /// `PUT path` with a JSON body.
    pub(crate) fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Request> {
        self.new_request(Method::PUT, path, Some(body))
    }

    /// Integration balance.
    #[must_use]
    pub fn balance(&self) -> BalanceApi<'_> {
        BalanceApi::new(self)
    }

    /// Bulk charge batches.
    #[must_use]
    pub fn bulk_charges(&self) -> BulkChargeApi<'_> {
        BulkChargeApi::new(self)
    }

    /// Direct charges.
    #[must_use]
    pub fn charges(&self) -> ChargeApi<'_> {
        ChargeApi::new(self)
    }

    /// Customers.
    #[must_use]
    pub fn customers(&self) -> CustomerApi<'_> {
        CustomerApi::new(self)
    }

    /// Integration settings.
    #[must_use]
    pub fn integration(&self) -> IntegrationApi<'_> {
        IntegrationApi::new(self)
    }

    /// Banks and identity lookups.
    #[must_use]
    pub fn miscellaneous(&self) -> MiscellaneousApi<'_> {
        MiscellaneousApi::new(self)
    }

    /// Payment pages.
    #[must_use]
    pub fn pages(&self) -> PageApi<'_> {
        PageApi::new(self)
    }

    /// Plans.
    #[must_use]
    pub fn plans(&self) -> PlanApi<'_> {
        PlanApi::new(self)
    }

    /// Settlements.
    #[must_use]
    pub fn settlements(&self) -> SettlementApi<'_> {
        SettlementApi::new(self)
    }

    /// Subaccounts.
    #[must_use]
    pub fn subaccounts(&self) -> SubaccountApi<'_> {
        SubaccountApi::new(self)
    }

    /// Subscriptions.
    #[must_use]
    pub fn subscriptions(&self) -> SubscriptionApi<'_> {
        SubscriptionApi::new(self)
    }

    /// Transactions.
    #[must_use]
    pub fn transactions(&self) -> TransactionApi<'_> {
        TransactionApi::new(self)
    }

    /// Transfers.
    #[must_use]
    pub fn transfers(&self) -> TransferApi<'_> {
        TransferApi::new(self)
    }

    /// Transfer recipients.
    #[must_use]
    pub fn transfer_recipients(&self) -> TransferRecipientApi<'_> {
        TransferRecipientApi::new(self)
    }
}

/// Map a non-2xx response to its error kind.
///
/// 2xx passes through. For failures the body is parsed as `{"message": ...}`
/// on a best-effort basis; an unparseable body still yields the error.
///
/// # Errors
///
/// Returns [`Error::Server`] for 500 to 504, [`Error::BadRequest`] for 400,
/// [`Error::NotFound`] for 404, [`Error::Unauthorized`] for 401 and
/// [`Error::Http`] for every other non-2xx status.
pub fn classify(response: Response) -> Result<Response> {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }

    let status = response.status;
    if status.is_success() {
        return Ok(response);
    }

    let message = serde_json::from_slice::<ErrorBody>(&response.body)
        .ok()
        .and_then(|body| body.message);
    warn!(
        method = %response.method,
        url = %response.url,
        status = status.as_u16(),
        message = message.as_deref().unwrap_or_default(),
        "API returned an error"
    );

    let err = Box::new(ApiError { response, message });
    Err(match status {
        StatusCode::BAD_REQUEST => Error::BadRequest(err),
        StatusCode::UNAUTHORIZED => Error::Unauthorized(err),
        StatusCode::NOT_FOUND => Error::NotFound(err),
        s if (500..=504).contains(&s.as_u16()) => Error::Server(err),
        _ => Error::Http(err),
    })
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw)
        .map_err(|e| Error::Configuration(format!("invalid base URL {raw:?}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(Error::Configuration(format!(
            "base URL {raw:?} cannot have paths joined to it"
        )));
    }
    if !url.path().ends_with('/') {
        return Err(Error::Configuration(format!(
            "base URL must have a trailing slash, but {raw:?} does not"
        )));
    }
    Ok(url)
}

/// Client options for customization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    /// API root; the path must end with `/` (default: `https://api.paystack.co/`).
    pub base_url: String,
    /// `User-Agent` header (default: `paystack-rs/<version>`).
    pub user_agent: String,
    /// Request timeout in seconds; 0 disables it (default: 30).
    pub timeout_seconds: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_seconds: 30,
        }
    }
}

impl ClientOptions {
    /// Options pointing at a different API root, e.g. a mock server.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn client() -> PaystackClient {
        PaystackClient::new("sk_test_123").unwrap()
    }

    #[test]
    fn client_creation() {
        let client = client();
        assert_eq!(client.base_url().as_str(), "https://api.paystack.co/");
        assert!(client.user_agent().starts_with("paystack-rs/"));
    }

    #[test]
    fn debug_redacts_secret() {
        let rendered = format!("{:?}", client());
        assert!(!rendered.contains("sk_test_123"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn base_url_requires_trailing_slash() {
        let options = ClientOptions::with_base_url("https://api.paystack.co/v2");
        let err = PaystackClient::with_options("sk", options).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));

        let options = ClientOptions::with_base_url("https://api.paystack.co");
        let built = PaystackClient::with_options("sk", options).unwrap();
        assert_eq!(built.base_url().as_str(), "https://api.paystack.co/");

        let mut client = client();
        assert!(client.set_base_url("https://example.com/v2").is_err());
        assert_eq!(client.base_url().as_str(), "https://api.paystack.co/");
        client.set_base_url("https://example.com/v2/").unwrap();
        assert_eq!(client.base_url().as_str(), "https://example.com/v2/");
    }

    #[test]
    fn relative_path_is_appended_to_base() {
        let mut client = client();
        client.set_base_url("https://example.com/v2/").unwrap();
        let request = client.get("customer/CUS_xnxdt6s1zg1f4nx").unwrap();
        assert_eq!(
            request.url.as_str(),
            "https://example.com/v2/customer/CUS_xnxdt6s1zg1f4nx"
        );
    }

    #[test]
    fn absolute_path_is_rejected() {
        let err = client().get("/customer").unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn headers_without_body() {
        let request = client().get("balance").unwrap();
        assert!(request.body.is_none());
        assert!(request.headers.get(CONTENT_TYPE).is_none());
        assert_eq!(request.headers[ACCEPT], JSON);
        assert_eq!(request.headers[AUTHORIZATION], "Bearer sk_test_123");
        assert!(request.headers[AUTHORIZATION].is_sensitive());
        assert!(request.headers.contains_key(USER_AGENT));
    }

    #[test]
    fn headers_with_body() {
        let request = client()
            .post("customer", &json!({ "email": "bojack@horsinaround.com" }))
            .unwrap();
        assert_eq!(request.headers[CONTENT_TYPE], JSON);
        let body: Value = serde_json::from_slice(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({ "email": "bojack@horsinaround.com" }));
    }

    #[test]
    fn empty_secret_and_user_agent_are_omitted() {
        let mut client = client();
        client.set_secret("");
        client.set_user_agent("");
        let request = client.post_empty("transfer/enable_otp").unwrap();
        assert!(request.headers.get(AUTHORIZATION).is_none());
        assert!(request.headers.get(USER_AGENT).is_none());
    }

    #[test]
    fn invalid_secret_is_a_configuration_error() {
        let mut client = client();
        client.set_secret("sk_test\nInjected: yes");
        assert!(matches!(
            client.get("balance").unwrap_err(),
            Error::Configuration(_)
        ));
    }

    #[test]
    fn query_skips_unset_options() {
        let request = client()
            .get("transaction")
            .unwrap()
            .query(&json!({ "page": 2, "perPage": 50, "status": "success", "customer": null }))
            .unwrap();
        let pairs: Vec<(String, String)> = request.url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("page".to_string(), "2".to_string()),
                ("perPage".to_string(), "50".to_string()),
                ("status".to_string(), "success".to_string()),
            ]
        );
    }

    #[test]
    fn query_with_nothing_set_leaves_url_clean() {
        let request = client()
            .get("customer")
            .unwrap()
            .query(&json!({ "page": null }))
            .unwrap();
        assert_eq!(request.url.as_str(), "https://api.paystack.co/customer");
    }

    #[test]
    fn query_rejects_nested_values() {
        let err = client()
            .get("customer")
            .unwrap()
            .query(&json!({ "filter": { "a": 1 } }))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidRequest(_)));
    }
}
