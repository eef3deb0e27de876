//! Integration balance.

use serde::{Deserialize, Serialize};

/// Available balance in one currency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    /// ISO currency code.
    pub currency: Option<String>,
    /// Balance in the currency's subunit.
    pub balance: Option<i64>,
}
