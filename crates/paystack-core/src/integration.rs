//! Integration-wide settings.

use serde::{Deserialize, Serialize};

/// Checkout session timeout of the integration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSession {
    /// Timeout in seconds; 0 disables the timeout.
    pub payment_session_timeout: Option<i64>,
}
