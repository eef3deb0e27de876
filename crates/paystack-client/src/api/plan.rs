use paystack_core::Plan;

use super::path;
use crate::client::PaystackClient;
use crate::context::Context;
use crate::error::Result;
use crate::response::ApiResponse;
use crate::types::{PlanOptions, PlanRequest};

/// Plan endpoints, from [`PaystackClient::plans`].
#[derive(Debug, Clone, Copy)]
pub struct PlanApi<'a> {
    client: &'a PaystackClient,
}

impl<'a> PlanApi<'a> {
    pub(crate) fn new(client: &'a PaystackClient) -> Self {
        Self { client }
    }

    /// Create a plan.
    pub async fn create(&self, ctx: &Context, request: &PlanRequest) -> Result<ApiResponse<Plan>> {
        let request = self.client.post("plan", request)?;
        self.client.fetch(ctx, request).await
    }

    /// List plans.
    pub async fn list(
        &self,
        ctx: &Context,
        options: &PlanOptions,
    ) -> Result<ApiResponse<Vec<Plan>>> {
        let request = self.client.get("plan")?.query(options)?;
        self.client.fetch_list(ctx, request).await
    }

    /// Fetch a plan by id or plan code.
    pub async fn fetch(&self, ctx: &Context, id_or_code: &str) -> Result<ApiResponse<Plan>> {
        let request = self.client.get(&path("plan", id_or_code)?)?;
        self.client.fetch(ctx, request).await
    }

    /// Update a plan.
    pub async fn update(
        &self,
        ctx: &Context,
        id_or_code: &str,
        request: &PlanRequest,
    ) -> Result<ApiResponse<Plan>> {
        let request = self.client.put(&path("plan", id_or_code)?, request)?;
        self.client.fetch(ctx, request).await
    }
}
