use paystack_core::TransferRecipient;

use crate::client::PaystackClient;
use crate::context::Context;
use crate::error::Result;
use crate::response::ApiResponse;
use crate::types::{ListOptions, TransferRecipientRequest};

/// Transfer recipient endpoints, from [`PaystackClient::transfer_recipients`].
#[derive(Debug, Clone, Copy)]
pub struct TransferRecipientApi<'a> {
    client: &'a PaystackClient,
}

impl<'a> TransferRecipientApi<'a> {
    pub(crate) fn new(client: &'a PaystackClient) -> Self {
        Self { client }
    }

    /// Save a beneficiary.
    pub async fn create(
        &self,
        ctx: &Context,
        request: &TransferRecipientRequest,
    ) -> Result<ApiResponse<TransferRecipient>> {
        let request = self.client.post("transferrecipient", request)?;
        self.client.fetch(ctx, request).await
    }

    /// List saved beneficiaries.
    pub async fn list(
        &self,
        ctx: &Context,
        options: &ListOptions,
    ) -> Result<ApiResponse<Vec<TransferRecipient>>> {
        let request = self.client.get("transferrecipient")?.query(options)?;
        self.client.fetch_list(ctx, request).await
    }
}
