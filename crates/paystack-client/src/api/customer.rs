use paystack_core::{Customer, Message};

use super::path;
use crate::client::PaystackClient;
use crate::context::Context;
use crate::error::{Error, Result};
use crate::response::ApiResponse;
use crate::types::{CustomerRequest, DeactivateAuthorizationRequest, ListOptions, RiskActionRequest};

/// Customer endpoints, from [`PaystackClient::customers`].
#[derive(Debug, Clone, Copy)]
pub struct CustomerApi<'a> {
    client: &'a PaystackClient,
}

impl<'a> CustomerApi<'a> {
    pub(crate) fn new(client: &'a PaystackClient) -> Self {
        Self { client }
    }

    /// Create a customer.
    pub async fn create(
        &self,
        ctx: &Context,
        request: &CustomerRequest,
    ) -> Result<ApiResponse<Customer>> {
        let request = self.client.post("customer", request)?;
        self.client.fetch(ctx, request).await
    }

    /// List customers.
    pub async fn list(
        &self,
        ctx: &Context,
        options: &ListOptions,
    ) -> Result<ApiResponse<Vec<Customer>>> {
        let request = self.client.get("customer")?.query(options)?;
        self.client.fetch_list(ctx, request).await
    }

    /// Fetch a customer by id, code or email, with transactions,
    /// subscriptions and authorizations.
    pub async fn fetch(&self, ctx: &Context, id_or_code: &str) -> Result<ApiResponse<Customer>> {
        let request = self.client.get(&path("customer", id_or_code)?)?;
        self.client.fetch(ctx, request).await
    }

    /// Update a customer.
    pub async fn update(
        &self,
        ctx: &Context,
        id_or_code: &str,
        request: &CustomerRequest,
    ) -> Result<ApiResponse<Customer>> {
        let request = self.client.put(&path("customer", id_or_code)?, request)?;
        self.client.fetch(ctx, request).await
    }

    /// Whitelist or blacklist a customer.
    ///
    /// Fails with [`Error::InvalidRequest`] before sending anything when the
    /// customer code is empty.
    pub async fn set_risk_action(
        &self,
        ctx: &Context,
        request: &RiskActionRequest,
    ) -> Result<ApiResponse<Customer>> {
        if request.customer.trim().is_empty() {
            return Err(Error::InvalidRequest(
                "customer code is required to set a risk action".into(),
            ));
        }
        let request = self.client.post("customer/set_risk_action", request)?;
        self.client.fetch(ctx, request).await
    }

    /// Stop a saved authorization from being charged again.
    pub async fn deactivate_authorization(
        &self,
        ctx: &Context,
        authorization_code: &str,
    ) -> Result<ApiResponse<Message>> {
        let body = DeactivateAuthorizationRequest {
            authorization_code: authorization_code.to_string(),
        };
        let request = self.client.post("customer/deactivate_authorization", &body)?;
        self.client.fetch_message(ctx, request).await
    }
}
