//! Resource groups of the Paystack API.
//!
//! Each group is a borrowed handle obtained from [`PaystackClient`]. Every
//! operation builds one request, dispatches it under the caller's
//! [`Context`](crate::Context) and decodes the envelope into its record type.
//! Failures are reported as [`Error`]; nothing is retried.

#![allow(clippy::missing_errors_doc)]

mod balance;
mod bulk_charge;
mod charge;
mod customer;
mod integration;
mod miscellaneous;
mod page;
mod plan;
mod settlement;
mod subaccount;
mod subscription;
mod transaction;
mod transfer;
mod transfer_recipient;

pub use balance::BalanceApi;
pub use bulk_charge::BulkChargeApi;
pub use charge::ChargeApi;
pub use customer::CustomerApi;
pub use integration::IntegrationApi;
pub use miscellaneous::MiscellaneousApi;
pub use page::PageApi;
pub use plan::PlanApi;
pub use settlement::SettlementApi;
pub use subaccount::SubaccountApi;
pub use subscription::SubscriptionApi;
pub use transaction::TransactionApi;
pub use transfer::TransferApi;
pub use transfer_recipient::TransferRecipientApi;

use crate::error::{Error, Result};
#[cfg(doc)]
use crate::PaystackClient;

/// Join a caller-supplied identifier onto a resource path.
///
/// Identifiers become a single path segment, so they may not be empty, a dot
/// segment, or contain URL delimiters. `%` is refused as well since the URL
/// parser would otherwise leave `%2e%2e` for the server to resolve.
fn path(prefix: &str, id: &str) -> Result<String> {
    if id.is_empty() {
        return Err(Error::InvalidRequest(format!("{prefix}: identifier is empty")));
    }
    if id == "." || id == ".." {
        return Err(Error::InvalidRequest(format!(
            "{prefix}: identifier {id:?} is a dot segment"
        )));
    }
    if id.contains(['/', '\\', '?', '#', '%']) {
        return Err(Error::InvalidRequest(format!(
            "{prefix}: identifier {id:?} contains a URL delimiter"
        )));
    }
    Ok(format!("{prefix}/{id}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_joins_with_separator() {
        assert_eq!(
            path("bulkcharge/pause", "BCH_180tl7oq7cayggh").unwrap(),
            "bulkcharge/pause/BCH_180tl7oq7cayggh"
        );
    }

    #[test]
    fn path_rejects_empty_and_delimited_ids() {
        assert!(matches!(path("customer", ""), Err(Error::InvalidRequest(_))));
        assert!(matches!(path("customer", "1/charges"), Err(Error::InvalidRequest(_))));
        assert!(matches!(path("customer", "1?page=2"), Err(Error::InvalidRequest(_))));
    }

    #[test]
    fn path_rejects_segments_that_escape_the_prefix() {
        for id in [".", "..", "%2e%2e", "%2E.", "..%2fbalance", "1\\..\\balance"] {
            assert!(
                matches!(path("customer", id), Err(Error::InvalidRequest(_))),
                "{id:?} was accepted"
            );
        }
    }

    #[test]
    fn path_keeps_ids_with_inner_dots() {
        assert_eq!(path("page", "buy.now").unwrap(), "page/buy.now");
        assert_eq!(path("transaction/verify", "..ref").unwrap(), "transaction/verify/..ref");
    }
}
