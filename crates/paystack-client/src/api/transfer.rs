use paystack_core::{Message, Transfer};

use super::path;
use crate::client::PaystackClient;
use crate::context::Context;
use crate::error::Result;
use crate::response::ApiResponse;
use crate::types::{
    BulkTransferRequest, DisableOtpFinalizeRequest, FinalizeTransferRequest, ListOptions,
    ResendOtpRequest, TransferRequest,
};

/// Transfer endpoints, from [`PaystackClient::transfers`].
#[derive(Debug, Clone, Copy)]
pub struct TransferApi<'a> {
    client: &'a PaystackClient,
}

impl<'a> TransferApi<'a> {
    pub(crate) fn new(client: &'a PaystackClient) -> Self {
        Self { client }
    }

    /// Send money to a recipient.
    pub async fn initiate(
        &self,
        ctx: &Context,
        request: &TransferRequest,
    ) -> Result<ApiResponse<Transfer>> {
        let request = self.client.post("transfer", request)?;
        self.client.fetch(ctx, request).await
    }

    /// List transfers.
    pub async fn list(
        &self,
        ctx: &Context,
        options: &ListOptions,
    ) -> Result<ApiResponse<Vec<Transfer>>> {
        let request = self.client.get("transfer")?.query(options)?;
        self.client.fetch_list(ctx, request).await
    }

    /// Fetch a transfer by id or code.
    pub async fn fetch(&self, ctx: &Context, id_or_code: &str) -> Result<ApiResponse<Transfer>> {
        let request = self.client.get(&path("transfer", id_or_code)?)?;
        self.client.fetch(ctx, request).await
    }

    /// Complete a transfer that is waiting for its OTP.
    pub async fn finalize(
        &self,
        ctx: &Context,
        request: &FinalizeTransferRequest,
    ) -> Result<ApiResponse<Transfer>> {
        let request = self.client.post("transfer/finalize_transfer", request)?;
        self.client.fetch(ctx, request).await
    }

    /// Queue many transfers at once.
    pub async fn initiate_bulk(
        &self,
        ctx: &Context,
        request: &BulkTransferRequest,
    ) -> Result<ApiResponse<Message>> {
        let request = self.client.post("transfer/bulk", request)?;
        self.client.fetch_message(ctx, request).await
    }

    /// Send the OTP for a transfer again.
    pub async fn resend_otp(
        &self,
        ctx: &Context,
        request: &ResendOtpRequest,
    ) -> Result<ApiResponse<Message>> {
        let request = self.client.post("transfer/resend_otp", request)?;
        self.client.fetch_message(ctx, request).await
    }

    /// Start turning off OTPs for transfers; an OTP is sent to confirm.
    pub async fn disable_otp(&self, ctx: &Context) -> Result<ApiResponse<Message>> {
        let request = self.client.post_empty("transfer/disable_otp")?;
        self.client.fetch_message(ctx, request).await
    }

    /// Confirm turning off OTPs with the OTP from [`disable_otp`](Self::disable_otp).
    pub async fn disable_otp_finalize(
        &self,
        ctx: &Context,
        otp: &str,
    ) -> Result<ApiResponse<Message>> {
        let body = DisableOtpFinalizeRequest { otp: otp.to_string() };
        let request = self.client.post("transfer/disable_otp_finalize", &body)?;
        self.client.fetch_message(ctx, request).await
    }

    /// Require OTPs for transfers again.
    pub async fn enable_otp(&self, ctx: &Context) -> Result<ApiResponse<Message>> {
        let request = self.client.post_empty("transfer/enable_otp")?;
        self.client.fetch_message(ctx, request).await
    }
}
