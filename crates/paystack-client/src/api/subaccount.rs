use paystack_core::Subaccount;

use super::path;
use crate::client::PaystackClient;
use crate::context::Context;
use crate::error::Result;
use crate::response::ApiResponse;
use crate::types::{ListOptions, SubaccountRequest};

/// Subaccount endpoints, from [`PaystackClient::subaccounts`].
#[derive(Debug, Clone, Copy)]
pub struct SubaccountApi<'a> {
    client: &'a PaystackClient,
}

impl<'a> SubaccountApi<'a> {
    pub(crate) fn new(client: &'a PaystackClient) -> Self {
        Self { client }
    }

    /// Create a subaccount.
    pub async fn create(
        &self,
        ctx: &Context,
        request: &SubaccountRequest,
    ) -> Result<ApiResponse<Subaccount>> {
        let request = self.client.post("subaccount", request)?;
        self.client.fetch(ctx, request).await
    }

    /// List subaccounts.
    pub async fn list(
        &self,
        ctx: &Context,
        options: &ListOptions,
    ) -> Result<ApiResponse<Vec<Subaccount>>> {
        let request = self.client.get("subaccount")?.query(options)?;
        self.client.fetch_list(ctx, request).await
    }

    /// Fetch a subaccount by id or code.
    pub async fn fetch(&self, ctx: &Context, id_or_code: &str) -> Result<ApiResponse<Subaccount>> {
        let request = self.client.get(&path("subaccount", id_or_code)?)?;
        self.client.fetch(ctx, request).await
    }

    /// Update a subaccount.
    pub async fn update(
        &self,
        ctx: &Context,
        id_or_code: &str,
        request: &SubaccountRequest,
    ) -> Result<ApiResponse<Subaccount>> {
        let request = self.client.put(&path("subaccount", id_or_code)?, request)?;
        self.client.fetch(ctx, request).await
    }
}
