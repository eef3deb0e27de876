use paystack_core::Settlement;

use crate::client::PaystackClient;
use crate::context::Context;
use crate::error::Result;
use crate::response::ApiResponse;
use crate::types::SettlementOptions;

/// Settlement endpoints, from [`PaystackClient::settlements`].
#[derive(Debug, Clone, Copy)]
pub struct SettlementApi<'a> {
    client: &'a PaystackClient,
}

impl<'a> SettlementApi<'a> {
    pub(crate) fn new(client: &'a PaystackClient) -> Self {
        Self { client }
    }

    /// Payouts made to the integration's bank accounts.
    pub async fn list(
        &self,
        ctx: &Context,
        options: &SettlementOptions,
    ) -> Result<ApiResponse<Vec<Settlement>>> {
        let request = self.client.get("settlement")?.query(options)?;
        self.client.fetch_list(ctx, request).await
    }
}
