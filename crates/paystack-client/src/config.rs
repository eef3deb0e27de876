//! Environment and secrets-file configuration.

use std::path::Path;

use serde::Deserialize;

use crate::client::ClientOptions;
use crate::error::{Error, Result};

/// Candidate locations of the secrets file, tried in order.
const SECRET_PATHS: [&str; 3] = [
    ".secrets/paystack.json",
    "paystack/.secrets/paystack.json",
    "../.secrets/paystack.json",
];

/// Paystack secrets file structure.
#[derive(Debug, Deserialize)]
struct PaystackSecrets {
    secret_key: String,
}

impl ClientOptions {
    /// Options from `PAYSTACK_BASE_URL`, `PAYSTACK_USER_AGENT` and
    /// `PAYSTACK_TIMEOUT_SECONDS`, falling back to the defaults for unset
    /// variables.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if `PAYSTACK_TIMEOUT_SECONDS` is not
    /// a whole number of seconds.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut options = Self::default();
        if let Some(base_url) = lookup("PAYSTACK_BASE_URL").filter(|s| !s.trim().is_empty()) {
            options.base_url = base_url.trim().to_string();
        }
        if let Some(user_agent) = lookup("PAYSTACK_USER_AGENT") {
            options.user_agent = user_agent;
        }
        if let Some(timeout) = lookup("PAYSTACK_TIMEOUT_SECONDS") {
            options.timeout_seconds = timeout.trim().parse().map_err(|e| {
                Error::Configuration(format!("PAYSTACK_TIMEOUT_SECONDS={timeout:?}: {e}"))
            })?;
        }
        Ok(options)
    }
}

/// Resolve the secret key: the secrets file first, then `PAYSTACK_SECRET_KEY`.
///
/// Returns `None` when neither is available. The key itself is never logged.
#[must_use]
pub fn load_secret() -> Option<String> {
    if let Some(secret) = load_secret_from(&SECRET_PATHS) {
        return Some(secret);
    }
    tracing::debug!("Paystack secrets file not found, using environment variables");
    std::env::var("PAYSTACK_SECRET_KEY")
        .ok()
        .filter(|s| !s.is_empty())
}

/// Read the secret key from the first readable secrets file among `paths`.
#[must_use]
pub fn load_secret_from<P: AsRef<Path>>(paths: &[P]) -> Option<String> {
    for path in paths {
        let path = path.as_ref();
        match load_secrets_file::<PaystackSecrets>(path) {
            Ok(secrets) if !secrets.secret_key.is_empty() => {
                tracing::info!(path = %path.display(), "Loaded Paystack secrets from file");
                return Some(secrets.secret_key);
            }
            Ok(_) => tracing::warn!(
                path = %path.display(),
                "Paystack secrets file has an empty secret_key"
            ),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => tracing::warn!(
                path = %path.display(),
                error = %err,
                "Unreadable Paystack secrets file"
            ),
        }
    }
    None
}

fn load_secrets_file<T: serde::de::DeserializeOwned>(path: &Path) -> std::io::Result<T> {
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}
