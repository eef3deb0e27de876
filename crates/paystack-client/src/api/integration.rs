use paystack_core::PaymentSession;

use crate::client::PaystackClient;
use crate::context::Context;
use crate::error::Result;
use crate::response::ApiResponse;
use crate::types::PaymentSessionRequest;

const PAYMENT_SESSION_TIMEOUT: &str = "integration/payment_session_timeout";

/// Integration settings, from [`PaystackClient::integration`].
#[derive(Debug, Clone, Copy)]
pub struct IntegrationApi<'a> {
    client: &'a PaystackClient,
}

impl<'a> IntegrationApi<'a> {
    pub(crate) fn new(client: &'a PaystackClient) -> Self {
        Self { client }
    }

    /// Current checkout session timeout.
    pub async fn fetch_payment_session_timeout(
        &self,
        ctx: &Context,
    ) -> Result<ApiResponse<PaymentSession>> {
        let request = self.client.get(PAYMENT_SESSION_TIMEOUT)?;
        self.client.fetch(ctx, request).await
    }

    /// Change the checkout session timeout, in seconds.
    pub async fn update_payment_session_timeout(
        &self,
        ctx: &Context,
        timeout: i64,
    ) -> Result<ApiResponse<PaymentSession>> {
        let body = PaymentSessionRequest { timeout };
        let request = self.client.put(PAYMENT_SESSION_TIMEOUT, &body)?;
        self.client.fetch(ctx, request).await
    }
}
