use paystack_core::{Authorization, Transaction};

use super::path;
use crate::client::PaystackClient;
use crate::context::Context;
use crate::error::Result;
use crate::response::ApiResponse;
use crate::types::{BirthdayRequest, ChargeRequest, OtpRequest, PhoneRequest, PinRequest};

/// Direct charge endpoints, from [`PaystackClient::charges`].
///
/// A charge may stop at an intermediate step (`send_pin`, `send_otp`, ...);
/// the returned transaction's `status` names it and the matching `submit_*`
/// call continues it.
#[derive(Debug, Clone, Copy)]
pub struct ChargeApi<'a> {
    client: &'a PaystackClient,
}

impl<'a> ChargeApi<'a> {
    pub(crate) fn new(client: &'a PaystackClient) -> Self {
        Self { client }
    }

    /// Tokenize a card without charging it.
    pub async fn tokenize(
        &self,
        ctx: &Context,
        request: &ChargeRequest,
    ) -> Result<ApiResponse<Authorization>> {
        let request = self.client.post("charge/tokenize", request)?;
        self.client.fetch(ctx, request).await
    }

    /// Start a charge.
    pub async fn charge(
        &self,
        ctx: &Context,
        request: &ChargeRequest,
    ) -> Result<ApiResponse<Transaction>> {
        let request = self.client.post("charge", request)?;
        self.client.fetch(ctx, request).await
    }

    /// Continue a charge with the card PIN.
    pub async fn submit_pin(
        &self,
        ctx: &Context,
        request: &PinRequest,
    ) -> Result<ApiResponse<Transaction>> {
        let request = self.client.post("charge/submit_pin", request)?;
        self.client.fetch(ctx, request).await
    }

    /// Continue a charge with an OTP.
    pub async fn submit_otp(
        &self,
        ctx: &Context,
        request: &OtpRequest,
    ) -> Result<ApiResponse<Transaction>> {
        let request = self.client.post("charge/submit_otp", request)?;
        self.client.fetch(ctx, request).await
    }

    /// Continue a charge with a phone number.
    pub async fn submit_phone(
        &self,
        ctx: &Context,
        request: &PhoneRequest,
    ) -> Result<ApiResponse<Transaction>> {
        let request = self.client.post("charge/submit_phone", request)?;
        self.client.fetch(ctx, request).await
    }

    /// Continue a charge with a date of birth.
    pub async fn submit_birthday(
        &self,
        ctx: &Context,
        request: &BirthdayRequest,
    ) -> Result<ApiResponse<Transaction>> {
        let request = self.client.post("charge/submit_birthday", request)?;
        self.client.fetch(ctx, request).await
    }

    /// Poll a charge that is still pending.
    pub async fn check_pending(
        &self,
        ctx: &Context,
        reference: &str,
    ) -> Result<ApiResponse<Transaction>> {
        let request = self.client.get(&path("charge", reference)?)?;
        self.client.fetch(ctx, request).await
    }
}
