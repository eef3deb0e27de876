use paystack_core::{Message, Page};

use super::path;
use crate::client::PaystackClient;
use crate::context::Context;
use crate::error::Result;
use crate::response::ApiResponse;
use crate::types::{ListOptions, PageRequest};

/// Payment page endpoints, from [`PaystackClient::pages`].
#[derive(Debug, Clone, Copy)]
pub struct PageApi<'a> {
    client: &'a PaystackClient,
}

impl<'a> PageApi<'a> {
    pub(crate) fn new(client: &'a PaystackClient) -> Self {
        Self { client }
    }

    /// Create a payment page.
    pub async fn create(&self, ctx: &Context, request: &PageRequest) -> Result<ApiResponse<Page>> {
        let request = self.client.post("page", request)?;
        self.client.fetch(ctx, request).await
    }

    /// List payment pages.
    pub async fn list(
        &self,
        ctx: &Context,
        options: &ListOptions,
    ) -> Result<ApiResponse<Vec<Page>>> {
        let request = self.client.get("page")?.query(options)?;
        self.client.fetch_list(ctx, request).await
    }

    /// Fetch a page by id or slug.
    pub async fn fetch(&self, ctx: &Context, id_or_slug: &str) -> Result<ApiResponse<Page>> {
        let request = self.client.get(&path("page", id_or_slug)?)?;
        self.client.fetch(ctx, request).await
    }

    /// Update a page.
    pub async fn update(
        &self,
        ctx: &Context,
        id_or_slug: &str,
        request: &PageRequest,
    ) -> Result<ApiResponse<Page>> {
        let request = self.client.put(&path("page", id_or_slug)?, request)?;
        self.client.fetch(ctx, request).await
    }

    /// Whether `slug` is free to use.
    ///
    /// A taken slug comes back as [`Error::BadRequest`](crate::Error::BadRequest).
    pub async fn check_slug_availability(
        &self,
        ctx: &Context,
        slug: &str,
    ) -> Result<ApiResponse<Message>> {
        let request = self.client.get(&path("page/check_slug_availability", slug)?)?;
        self.client.fetch_message(ctx, request).await
    }
}
