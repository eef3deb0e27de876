//! Record fragments shared by several resources.

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A reference to another record.
///
/// Depending on the endpoint, the API returns a nested record in full, as its
/// numeric id, or as its code (`PLN_...`, `CUS_...`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Expandable<T> {
    /// Numeric identifier.
    Id(i64),
    /// String code.
    Code(String),
    /// The full record.
    Object(Box<T>),
}

impl<T> Expandable<T> {
    /// Return the full record if it was expanded.
    #[must_use]
    pub fn as_object(&self) -> Option<&T> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Return the numeric id if only the id was returned.
    #[must_use]
    pub fn id(&self) -> Option<i64> {
        match self {
            Self::Id(id) => Some(*id),
            _ => None,
        }
    }

    /// Return the code if only the code was returned.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Code(code) => Some(code),
            _ => None,
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Expandable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Number(n) => n
                .as_i64()
                .map(Self::Id)
                .ok_or_else(|| de::Error::custom(format!("reference id out of range: {n}"))),
            Value::String(code) => Ok(Self::Code(code)),
            object @ Value::Object(_) => crate::decode::decode(object)
                .map(|record| Self::Object(Box::new(record)))
                .map_err(de::Error::custom),
            other => Err(de::Error::custom(format!(
                "expected an id, a code or an object, found {other}"
            ))),
        }
    }
}

/// Outcome of an operation that returns no record, taken from the envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Whether the API reported success.
    pub status: Option<bool>,
    /// Human-readable outcome.
    pub message: Option<String>,
}

/// A reusable card or bank authorization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authorization {
    /// Code used to charge the authorization again.
    pub authorization_code: Option<String>,
    /// Card brand and type.
    pub card_type: Option<String>,
    /// Last four digits of the card.
    pub last4: Option<String>,
    /// Expiry month (`"08"`).
    pub exp_month: Option<String>,
    /// Expiry year (`"2018"`).
    pub exp_year: Option<String>,
    /// Bank identification number.
    pub bin: Option<String>,
    /// Issuing bank.
    pub bank: Option<String>,
    /// Payment channel.
    pub channel: Option<String>,
    /// Card signature, stable across authorizations of the same card.
    pub signature: Option<String>,
    /// Whether the authorization can be charged again.
    pub reusable: Option<bool>,
    /// ISO country code of the issuer.
    pub country_code: Option<String>,
    /// Customer the authorization belongs to.
    pub customer: Option<String>,
}

/// A social or profile photo attached to customer metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    /// Source type (`"twitter"`).
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Source type id.
    pub type_id: Option<String>,
    /// Source display name.
    pub type_name: Option<String>,
    /// Image URL.
    pub url: Option<String>,
    /// Whether this is the primary photo.
    pub is_primary: Option<bool>,
}

/// Free-form metadata attached to customers, transactions and recipients.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Custom fields shown on the dashboard. Keys are kept as sent.
    pub custom_fields: Option<Vec<Map<String, Value>>>,
    /// Profile photos.
    pub photos: Option<Vec<Photo>>,
}

/// One step in a transaction history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    /// Step type (`"input"`, `"action"`).
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Description of the step.
    pub message: Option<String>,
    /// Seconds elapsed when the step happened.
    pub time: Option<i64>,
}

/// Checkout log recorded for a transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Log {
    /// Seconds spent on the checkout.
    pub time_spent: Option<i64>,
    /// Number of payment attempts.
    pub attempts: Option<i64>,
    /// Authentication method used.
    pub authentication: Option<Value>,
    /// Number of errors.
    pub errors: Option<i64>,
    /// Whether the checkout succeeded.
    pub success: Option<bool>,
    /// Whether the checkout happened on a mobile device.
    pub mobile: Option<bool>,
    /// Raw input events.
    pub input: Option<Vec<Value>>,
    /// Payment channel.
    pub channel: Option<String>,
    /// Ordered history of the checkout.
    pub history: Option<Vec<History>>,
}

/// An amount in a single currency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldByCurrency {
    /// ISO currency code.
    pub currency: Option<String>,
    /// Amount in the currency's subunit.
    pub amount: Option<i64>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{decode, Plan};

    #[derive(Debug, Default, Deserialize)]
    struct Holder {
        plan: Option<Expandable<Plan>>,
    }

    #[test]
    fn expandable_accepts_code() {
        let holder: Holder = decode(json!({ "plan": "PLN_0as2m9n02cl0kp6" })).unwrap();
        assert_eq!(
            holder.plan.as_ref().and_then(Expandable::code),
            Some("PLN_0as2m9n02cl0kp6")
        );
    }

    #[test]
    fn expandable_accepts_id() {
        let holder: Holder = decode(json!({ "plan": 28 })).unwrap();
        assert_eq!(holder.plan.as_ref().and_then(Expandable::id), Some(28));
    }

    #[test]
    fn expandable_object_keys_are_bridged() {
        let holder: Holder = decode(json!({
            "plan": { "planCode": "PLN_gx2wn530m0i3w3m", "createdAt": "2016-03-29T22:42:50.000Z" }
        }))
        .unwrap();

        let plan = holder.plan.as_ref().and_then(Expandable::as_object).unwrap();
        assert_eq!(plan.plan_code.as_deref(), Some("PLN_gx2wn530m0i3w3m"));
        assert!(plan.created_at.is_some());
    }

    #[test]
    fn expandable_rejects_booleans() {
        let result: Result<Holder, _> = decode(json!({ "plan": true }));
        assert!(result.is_err());
    }

    #[test]
    fn null_expandable_is_absent() {
        let holder: Holder = decode(json!({ "plan": null })).unwrap();
        assert!(holder.plan.is_none());
    }
}
