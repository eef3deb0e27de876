use paystack_core::{BulkBatch, BulkCharge, Message};

use super::path;
use crate::client::PaystackClient;
use crate::context::Context;
use crate::error::Result;
use crate::response::ApiResponse;
use crate::types::{BulkChargeItem, BulkChargeOptions, ListOptions};

/// Bulk charge endpoints, from [`PaystackClient::bulk_charges`].
#[derive(Debug, Clone, Copy)]
pub struct BulkChargeApi<'a> {
    client: &'a PaystackClient,
}

impl<'a> BulkChargeApi<'a> {
    pub(crate) fn new(client: &'a PaystackClient) -> Self {
        Self { client }
    }

    /// Queue a batch of charges against saved authorizations.
    pub async fn initiate(
        &self,
        ctx: &Context,
        charges: &[BulkChargeItem],
    ) -> Result<ApiResponse<BulkBatch>> {
        let request = self.client.post("bulkcharge", charges)?;
        self.client.fetch(ctx, request).await
    }

    /// List batches.
    pub async fn list_batches(
        &self,
        ctx: &Context,
        options: &ListOptions,
    ) -> Result<ApiResponse<Vec<BulkBatch>>> {
        let request = self.client.get("bulkcharge")?.query(options)?;
        self.client.fetch_list(ctx, request).await
    }

    /// Fetch a batch by id or batch code.
    pub async fn fetch_batch(
        &self,
        ctx: &Context,
        id_or_code: &str,
    ) -> Result<ApiResponse<BulkBatch>> {
        let request = self.client.get(&path("bulkcharge", id_or_code)?)?;
        self.client.fetch(ctx, request).await
    }

    /// List the charges of a batch.
    pub async fn fetch_batch_charges(
        &self,
        ctx: &Context,
        id_or_code: &str,
        options: &BulkChargeOptions,
    ) -> Result<ApiResponse<Vec<BulkCharge>>> {
        let path = format!("{}/charges", path("bulkcharge", id_or_code)?);
        let request = self.client.get(&path)?.query(options)?;
        self.client.fetch_list(ctx, request).await
    }

    /// Stop processing a batch.
    pub async fn pause_batch(
        &self,
        ctx: &Context,
        batch_code: &str,
    ) -> Result<ApiResponse<Message>> {
        let request = self.client.get(&path("bulkcharge/pause", batch_code)?)?;
        self.client.fetch_message(ctx, request).await
    }

    /// Resume a paused batch.
    pub async fn resume_batch(
        &self,
        ctx: &Context,
        batch_code: &str,
    ) -> Result<ApiResponse<Message>> {
        let request = self.client.get(&path("bulkcharge/resume", batch_code)?)?;
        self.client.fetch_message(ctx, request).await
    }
}
