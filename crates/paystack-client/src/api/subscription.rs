use paystack_core::{Message, Subscription};

use super::path;
use crate::client::PaystackClient;
use crate::context::Context;
use crate::error::Result;
use crate::response::ApiResponse;
use crate::types::{SubscriptionOptions, SubscriptionRequest, SubscriptionToggleRequest};

/// Subscription endpoints, from [`PaystackClient::subscriptions`].
#[derive(Debug, Clone, Copy)]
pub struct SubscriptionApi<'a> {
    client: &'a PaystackClient,
}

impl<'a> SubscriptionApi<'a> {
    pub(crate) fn new(client: &'a PaystackClient) -> Self {
        Self { client }
    }

    /// Subscribe a customer to a plan.
    ///
    /// The reply references customer, plan and authorization by id; they
    /// decode as [`Expandable::Id`](paystack_core::Expandable::Id).
    pub async fn create(
        &self,
        ctx: &Context,
        request: &SubscriptionRequest,
    ) -> Result<ApiResponse<Subscription>> {
        let request = self.client.post("subscription", request)?;
        self.client.fetch(ctx, request).await
    }

    /// List subscriptions.
    pub async fn list(
        &self,
        ctx: &Context,
        options: &SubscriptionOptions,
    ) -> Result<ApiResponse<Vec<Subscription>>> {
        let request = self.client.get("subscription")?.query(options)?;
        self.client.fetch_list(ctx, request).await
    }

    /// Fetch a subscription by id or code.
    pub async fn fetch(
        &self,
        ctx: &Context,
        id_or_code: &str,
    ) -> Result<ApiResponse<Subscription>> {
        let request = self.client.get(&path("subscription", id_or_code)?)?;
        self.client.fetch(ctx, request).await
    }

    /// Stop future charges on a subscription.
    pub async fn disable(
        &self,
        ctx: &Context,
        request: &SubscriptionToggleRequest,
    ) -> Result<ApiResponse<Message>> {
        let request = self.client.post("subscription/disable", request)?;
        self.client.fetch_message(ctx, request).await
    }

    /// Resume a disabled subscription.
    pub async fn enable(
        &self,
        ctx: &Context,
        request: &SubscriptionToggleRequest,
    ) -> Result<ApiResponse<Message>> {
        let request = self.client.post("subscription/enable", request)?;
        self.client.fetch_message(ctx, request).await
    }
}
