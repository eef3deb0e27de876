//! Domain records for the Paystack API.
//!
//! This crate holds the data side of the client, with no I/O:
//!
//! - **Records**: `Customer`, `Transaction`, `Plan`, `Subscription`, `Transfer`, ...
//! - **Shared fragments**: `Authorization`, `Metadata`, `Log`, `Expandable`
//! - **Decoding**: [`decode`] turns an untyped JSON value into any record,
//!   accepting both `snake_case` and `lowerCamelCase` keys
//!
//! # Amounts
//!
//! Every amount is an integer in the currency's smallest unit (kobo for NGN,
//! cents for USD), exactly as the API sends it.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod balance;
pub mod bank;
pub mod bulk_charge;
pub mod common;
pub mod customer;
pub mod decode;
pub mod integration;
pub mod page;
pub mod plan;
pub mod settlement;
pub mod subaccount;
pub mod subscription;
pub mod transaction;
pub mod transfer;

pub use balance::Balance;
pub use bank::{AccountData, Bank, Bin, BvnData};
pub use bulk_charge::{BulkBatch, BulkCharge};
pub use common::{
    Authorization, Expandable, FieldByCurrency, History, Log, Message, Metadata, Photo,
};
pub use customer::{Customer, RiskAction};
pub use decode::{decode, decode_all, field_name, DecodeError};
pub use integration::PaymentSession;
pub use page::{CustomField, Page};
pub use plan::{Plan, PlanSubscription};
pub use settlement::Settlement;
pub use subaccount::Subaccount;
pub use subscription::Subscription;
pub use transaction::{
    ExportPath, Reauthorization, Transaction, TransactionInitialization, TransactionTimeline,
    TransactionTotals,
};
pub use transfer::{Transfer, TransferRecipient, TransferRecipientDetails};
