use paystack_core::{AccountData, Bank, Bin, BvnData};

use super::path;
use crate::client::PaystackClient;
use crate::context::Context;
use crate::error::Result;
use crate::response::ApiResponse;
use crate::types::{BankOptions, ResolveAccountOptions};

/// Bank and identity lookups, from [`PaystackClient::miscellaneous`].
#[derive(Debug, Clone, Copy)]
pub struct MiscellaneousApi<'a> {
    client: &'a PaystackClient,
}

impl<'a> MiscellaneousApi<'a> {
    pub(crate) fn new(client: &'a PaystackClient) -> Self {
        Self { client }
    }

    /// List supported banks.
    pub async fn list_banks(
        &self,
        ctx: &Context,
        options: &BankOptions,
    ) -> Result<ApiResponse<Vec<Bank>>> {
        let request = self.client.get("bank")?.query(options)?;
        self.client.fetch_list(ctx, request).await
    }

    /// Card details for the first six digits of a card number.
    pub async fn resolve_card_bin(&self, ctx: &Context, bin: &str) -> Result<ApiResponse<Bin>> {
        let request = self.client.get(&path("decision/bin", bin)?)?;
        self.client.fetch(ctx, request).await
    }

    /// Identity data behind a BVN.
    pub async fn resolve_bvn(&self, ctx: &Context, bvn: &str) -> Result<ApiResponse<BvnData>> {
        let request = self.client.get(&path("bank/resolve_bvn", bvn)?)?;
        self.client.fetch(ctx, request).await
    }

    /// Name on a bank account.
    pub async fn resolve_account_number(
        &self,
        ctx: &Context,
        options: &ResolveAccountOptions,
    ) -> Result<ApiResponse<AccountData>> {
        let request = self.client.get("bank/resolve")?.query(options)?;
        self.client.fetch(ctx, request).await
    }
}
