use paystack_core::{
    ExportPath, FieldByCurrency, Reauthorization, Transaction, TransactionInitialization,
    TransactionTimeline, TransactionTotals,
};

use super::path;
use crate::client::PaystackClient;
use crate::context::Context;
use crate::error::Result;
use crate::response::ApiResponse;
use crate::types::{ExportOptions, TransactionOptions, TransactionRequest};

/// Transaction endpoints, from [`PaystackClient::transactions`].
#[derive(Debug, Clone, Copy)]
pub struct TransactionApi<'a> {
    client: &'a PaystackClient,
}

impl<'a> TransactionApi<'a> {
    pub(crate) fn new(client: &'a PaystackClient) -> Self {
        Self { client }
    }

    /// Start a checkout and get the URL to send the customer to.
    pub async fn initialize(
        &self,
        ctx: &Context,
        request: &TransactionRequest,
    ) -> Result<ApiResponse<TransactionInitialization>> {
        let request = self.client.post("transaction/initialize", request)?;
        self.client.fetch(ctx, request).await
    }

    /// Confirm the outcome of a transaction by reference.
    pub async fn verify(&self, ctx: &Context, reference: &str) -> Result<ApiResponse<Transaction>> {
        let request = self.client.get(&path("transaction/verify", reference)?)?;
        self.client.fetch(ctx, request).await
    }

    /// List transactions.
    pub async fn list(
        &self,
        ctx: &Context,
        options: &TransactionOptions,
    ) -> Result<ApiResponse<Vec<Transaction>>> {
        let request = self.client.get("transaction")?.query(options)?;
        self.client.fetch_list(ctx, request).await
    }

    /// Fetch a transaction by id.
    pub async fn fetch(&self, ctx: &Context, id: &str) -> Result<ApiResponse<Transaction>> {
        let request = self.client.get(&path("transaction", id)?)?;
        self.client.fetch(ctx, request).await
    }

    /// Charge a saved authorization.
    pub async fn charge_authorization(
        &self,
        ctx: &Context,
        request: &TransactionRequest,
    ) -> Result<ApiResponse<Transaction>> {
        let request = self.client.post("transaction/charge_authorization", request)?;
        self.client.fetch(ctx, request).await
    }

    /// Checkout timeline of a transaction, by id or reference.
    pub async fn timeline(
        &self,
        ctx: &Context,
        id_or_reference: &str,
    ) -> Result<ApiResponse<TransactionTimeline>> {
        let request = self.client.get(&path("transaction/timeline", id_or_reference)?)?;
        self.client.fetch(ctx, request).await
    }

    /// Totals over the transactions matching `options`.
    pub async fn totals(
        &self,
        ctx: &Context,
        options: &TransactionOptions,
    ) -> Result<ApiResponse<TransactionTotals>> {
        let request = self.client.get("transaction/totals")?.query(options)?;
        self.client.fetch(ctx, request).await
    }

    /// Export matching transactions to a downloadable CSV.
    pub async fn export(
        &self,
        ctx: &Context,
        options: &ExportOptions,
    ) -> Result<ApiResponse<ExportPath>> {
        let request = self.client.get("transaction/export")?.query(options)?;
        self.client.fetch(ctx, request).await
    }

    /// Ask the customer to reauthorize a card before it is charged again.
    pub async fn request_reauthorization(
        &self,
        ctx: &Context,
        request: &TransactionRequest,
    ) -> Result<ApiResponse<Reauthorization>> {
        let request = self.client.post("transaction/request_reauthorization", request)?;
        self.client.fetch(ctx, request).await
    }

    /// Check whether an authorization can be charged for an amount.
    pub async fn check_authorization(
        &self,
        ctx: &Context,
        request: &TransactionRequest,
    ) -> Result<ApiResponse<FieldByCurrency>> {
        let request = self.client.post("transaction/check_authorization", request)?;
        self.client.fetch(ctx, request).await
    }
}
