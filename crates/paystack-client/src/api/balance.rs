use paystack_core::Balance;

use crate::client::PaystackClient;
use crate::context::Context;
use crate::error::Result;
use crate::response::ApiResponse;

/// Balance endpoints, from [`PaystackClient::balance`].
#[derive(Debug, Clone, Copy)]
pub struct BalanceApi<'a> {
    client: &'a PaystackClient,
}

impl<'a> BalanceApi<'a> {
    pub(crate) fn new(client: &'a PaystackClient) -> Self {
        Self { client }
    }

    /// Available balance, one entry per currency.
    pub async fn check(&self, ctx: &Context) -> Result<ApiResponse<Vec<Balance>>> {
        let request = self.client.get("balance")?;
        self.client.fetch_list(ctx, request).await
    }
}
