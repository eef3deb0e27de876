//! Paystack API client.
//!
//! A typed async binding to the Paystack REST API. Every call goes through
//! one pipeline: build an authenticated request, dispatch it under a
//! [`Context`], classify non-2xx replies into [`Error`] variants, then decode
//! the JSON envelope into a record from [`paystack_core`] along with the page
//! numbers of list replies.
//!
//! # Example
//!
//! ```no_run
//! use paystack_client::{Context, ListOptions, PaystackClient};
//!
//! # async fn example() -> paystack_client::Result<()> {
//! let client = PaystackClient::new("sk_test_xxx")?;
//! let ctx = Context::background();
//!
//! let balances = client.balance().check(&ctx).await?;
//! for balance in &balances.data {
//!     println!("{:?}: {:?}", balance.currency, balance.balance);
//! }
//!
//! let customers = client.customers().list(&ctx, &ListOptions::page(1, 50)).await?;
//! if let Some(next) = customers.response.next_page() {
//!     println!("more customers on page {next}");
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod api;
mod client;
mod config;
mod context;
mod error;
mod response;
mod types;

pub use api::{
    BalanceApi, BulkChargeApi, ChargeApi, CustomerApi, IntegrationApi, MiscellaneousApi, PageApi,
    PlanApi, SettlementApi, SubaccountApi, SubscriptionApi, TransactionApi, TransferApi,
    TransferRecipientApi,
};
pub use client::{
    classify, ClientOptions, PaystackClient, Request, DEFAULT_BASE_URL, DEFAULT_USER_AGENT,
};
pub use config::{load_secret, load_secret_from};
pub use context::{CancelHandle, CancelReason, Context};
pub use error::{ApiError, Error, Result};
pub use response::{ApiResponse, Envelope, ListEnvelope, Meta, Pagination, Response};
pub use types::*;

pub use paystack_core;
pub use paystack_core::{
    AccountData, Authorization, Balance, Bank, Bin, BulkBatch, BulkCharge, BvnData, CustomField,
    Customer, Expandable, ExportPath, FieldByCurrency, Message, Metadata, Page, PaymentSession,
    Plan, Reauthorization, RiskAction, Settlement, Subaccount, Subscription, Transaction,
    TransactionInitialization, TransactionTimeline, TransactionTotals, Transfer,
    TransferRecipient,
};
