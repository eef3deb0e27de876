//! Dynamic decoding of loosely-typed JSON into domain records.
//!
//! The API mixes `snake_case` and `lowerCamelCase` keys, sometimes within one
//! object (`customer_code` next to `createdAt`). Records declare each field
//! once, in `snake_case`. The deserializer in this module bridges the two by
//! rewriting an object key to `snake_case` only when serde asks for a struct
//! field identifier, so map-typed values (custom fields, free-form metadata)
//! keep their keys verbatim. When an object carries both spellings of one
//! field (`created_at` and `createdAt`), the first in key order wins and the
//! other is skipped.
//!
//! Timestamps are `chrono::DateTime<Utc>` fields and are parsed as RFC 3339.
//! A malformed timestamp fails the whole decode.
//!
//! # Example
//!
//! ```
//! use paystack_core::{decode, Customer};
//! use serde_json::json;
//!
//! let customer: Customer = decode(json!({
//!     "customer_code": "CUS_xnxdt6s1zg1f4nx",
//!     "createdAt": "2016-03-29T20:03:09.584Z",
//! }))
//! .unwrap();
//!
//! assert_eq!(customer.customer_code.as_deref(), Some("CUS_xnxdt6s1zg1f4nx"));
//! assert!(customer.created_at.is_some());
//! assert!(customer.email.is_none());
//! ```

use serde::de::{self, DeserializeOwned, DeserializeSeed, MapAccess, SeqAccess, Visitor};
use std::collections::HashSet;

use serde::forward_to_deserialize_any;
use serde_json::{Map, Value};

/// Error produced when a value cannot be decoded into its target record.
pub type DecodeError = serde_json::Error;

/// Decode one loosely-typed object into `T`.
///
/// A `null` source decodes as an object with no fields, leaving every
/// optional field of the record absent.
///
/// # Errors
///
/// Returns an error if a present field has the wrong shape for its target
/// (including timestamps that are not RFC 3339).
pub fn decode<T: DeserializeOwned>(source: Value) -> Result<T, DecodeError> {
    let source = match source {
        Value::Null => Value::Object(Map::new()),
        other => other,
    };
    T::deserialize(Dynamic(source))
}

/// Decode every element of `source` into `T`, preserving order and length.
///
/// # Errors
///
/// Returns the first element decode error.
pub fn decode_all<T: DeserializeOwned>(source: Vec<Value>) -> Result<Vec<T>, DecodeError> {
    source.into_iter().map(decode::<T>).collect()
}

/// Normalize a remote key to the `snake_case` spelling used by record fields.
///
/// `createdAt` becomes `created_at`, `HTTPStatus` becomes `http_status`, and
/// keys that are already `snake_case` pass through unchanged.
#[must_use]
pub fn field_name(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let mut out = String::with_capacity(key.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '-' || c == ' ' {
            out.push('_');
            continue;
        }
        if !c.is_uppercase() {
            out.push(c);
            continue;
        }

        let prev = i.checked_sub(1).and_then(|p| chars.get(p)).copied();
        let next = chars.get(i + 1).copied();
        let boundary = match prev {
            Some(p) if p.is_lowercase() || p.is_ascii_digit() => true,
            Some(p) if p.is_uppercase() => next.is_some_and(char::is_lowercase),
            _ => false,
        };
        if boundary && !out.ends_with('_') {
            out.push('_');
        }
        out.extend(c.to_lowercase());
    }

    out
}

/// A JSON value tree presented to serde with field-name bridging.
struct Dynamic(Value);

impl<'de> de::Deserializer<'de> for Dynamic {
    type Error = DecodeError;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        match self.0 {
            Value::Null => visitor.visit_unit(),
            Value::Bool(b) => visitor.visit_bool(b),
            Value::Number(n) => {
                if let Some(u) = n.as_u64() {
                    visitor.visit_u64(u)
                } else if let Some(i) = n.as_i64() {
                    visitor.visit_i64(i)
                } else if let Some(f) = n.as_f64() {
                    visitor.visit_f64(f)
                } else {
                    Err(de::Error::custom(format!("unrepresentable number {n}")))
                }
            }
            Value::String(s) => visitor.visit_string(s),
            Value::Array(items) => visitor.visit_seq(Elements {
                iter: items.into_iter(),
            }),
            Value::Object(fields) => visitor.visit_map(Fields::verbatim(fields)),
        }
    }

    fn deserialize_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error> {
        match self.0 {
            Value::Object(fields) => visitor.visit_map(Fields::record(fields)),
            other => de::Deserializer::deserialize_any(Dynamic(other), visitor),
        }
    }

    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        match self.0 {
            Value::Null => visitor.visit_none(),
            other => visitor.visit_some(Dynamic(other)),
        }
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Self::Error> {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V: Visitor<'de>>(
        self,
        name: &'static str,
        variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error> {
        de::Deserializer::deserialize_enum(self.0, name, variants, visitor)
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple tuple_struct map identifier
        ignored_any
    }
}

struct Elements {
    iter: std::vec::IntoIter<Value>,
}

impl<'de> SeqAccess<'de> for Elements {
    type Error = DecodeError;

    fn next_element_seed<T: DeserializeSeed<'de>>(
        &mut self,
        seed: T,
    ) -> Result<Option<T::Value>, Self::Error> {
        match self.iter.next() {
            Some(value) => seed.deserialize(Dynamic(value)).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

struct Fields {
    iter: serde_json::map::IntoIter,
    pending: Option<Value>,
    /// Normalized names already yielded; `None` for plain maps.
    seen: Option<HashSet<String>>,
}

impl Fields {
    fn verbatim(fields: Map<String, Value>) -> Self {
        Self {
            iter: fields.into_iter(),
            pending: None,
            seen: None,
        }
    }

    fn record(fields: Map<String, Value>) -> Self {
        Self {
            iter: fields.into_iter(),
            pending: None,
            seen: Some(HashSet::new()),
        }
    }
}

impl<'de> MapAccess<'de> for Fields {
    type Error = DecodeError;

    fn next_key_seed<K: DeserializeSeed<'de>>(
        &mut self,
        seed: K,
    ) -> Result<Option<K::Value>, Self::Error> {
        for (key, value) in self.iter.by_ref() {
            if let Some(seen) = &mut self.seen {
                if !seen.insert(field_name(&key)) {
                    continue;
                }
            }
            self.pending = Some(value);
            return seed.deserialize(FieldName(key)).map(Some);
        }
        Ok(None)
    }

    fn next_value_seed<V: DeserializeSeed<'de>>(
        &mut self,
        seed: V,
    ) -> Result<V::Value, Self::Error> {
        match self.pending.take() {
            Some(value) => seed.deserialize(Dynamic(value)),
            None => Err(de::Error::custom("map value requested before its key")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

/// An object key. Normalized only when read as a struct field identifier.
struct FieldName(String);

impl<'de> de::Deserializer<'de> for FieldName {
    type Error = DecodeError;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        visitor.visit_string(self.0)
    }

    fn deserialize_identifier<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        visitor.visit_string(field_name(&self.0))
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf option unit unit_struct newtype_struct seq tuple
        tuple_struct map struct enum ignored_any
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use chrono::{TimeZone, Utc};
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Default, PartialEq, Deserialize)]
    struct Sample {
        id: Option<i64>,
        first_name: Option<String>,
        created_at: Option<chrono::DateTime<Utc>>,
        active: Option<bool>,
        tags: Option<Vec<String>>,
        extra: Option<HashMap<String, Value>>,
        nested: Option<Box<Sample>>,
    }

    #[test]
    fn field_name_bridges_camel_case() {
        assert_eq!(field_name("createdAt"), "created_at");
        assert_eq!(field_name("perPage"), "per_page");
        assert_eq!(field_name("pageCount"), "page_count");
        assert_eq!(field_name("typeId"), "type_id");
        assert_eq!(field_name("HTTPStatus"), "http_status");
        assert_eq!(field_name("URL"), "url");
        assert_eq!(field_name("Last4"), "last4");
    }

    #[test]
    fn field_name_keeps_snake_case() {
        assert_eq!(field_name("customer_code"), "customer_code");
        assert_eq!(field_name("last4"), "last4");
        assert_eq!(field_name("exp_month"), "exp_month");
        assert_eq!(field_name("risk-action"), "risk_action");
    }

    #[test]
    fn decodes_mixed_key_styles() {
        let sample: Sample = decode(json!({
            "id": 1173,
            "firstName": "Bojack",
            "created_at": "2016-03-29T20:03:09.584Z",
        }))
        .unwrap();

        assert_eq!(sample.id, Some(1173));
        assert_eq!(sample.first_name.as_deref(), Some("Bojack"));
        assert_eq!(
            sample.created_at,
            Some(Utc.with_ymd_and_hms(2016, 3, 29, 20, 3, 9).unwrap()
                + chrono::Duration::milliseconds(584))
        );
    }

    #[test]
    fn absent_and_null_fields_stay_absent() {
        let sample: Sample = decode(json!({ "active": false, "first_name": null })).unwrap();

        assert_eq!(sample.active, Some(false));
        assert!(sample.first_name.is_none());
        assert!(sample.id.is_none());
        assert!(sample.tags.is_none());
    }

    #[test]
    fn empty_collections_are_present() {
        let sample: Sample = decode(json!({ "tags": [] })).unwrap();
        assert_eq!(sample.tags, Some(vec![]));
    }

    #[test]
    fn null_source_is_an_empty_record() {
        let sample: Sample = decode(Value::Null).unwrap();
        assert_eq!(sample, Sample::default());
    }

    #[test]
    fn map_values_keep_their_keys() {
        let sample: Sample = decode(json!({ "extra": { "displayName": "x" } })).unwrap();
        let extra = sample.extra.unwrap();
        assert!(extra.contains_key("displayName"));
        assert!(!extra.contains_key("display_name"));
    }

    #[test]
    fn nested_records_are_bridged() {
        let sample: Sample = decode(json!({ "nested": { "firstName": "Todd" } })).unwrap();
        assert_eq!(
            sample.nested.and_then(|n| n.first_name).as_deref(),
            Some("Todd")
        );
    }

    #[test]
    fn malformed_timestamp_is_an_error() {
        let result: Result<Sample, _> = decode(json!({ "created_at": "29/03/2016" }));
        assert!(result.is_err());
    }

    #[test]
    fn wrong_shape_is_an_error() {
        let result: Result<Sample, _> = decode(json!({ "id": "not a number" }));
        assert!(result.is_err());
    }

    #[test]
    fn both_spellings_of_a_field_decode_once() {
        let sample: Sample = decode(json!({
            "first_name": "Bojack",
            "firstName": "Bojack",
            "created_at": "2016-03-29T20:03:09Z",
            "createdAt": "2016-03-29T20:03:09Z",
        }))
        .unwrap();
        assert_eq!(sample.first_name.as_deref(), Some("Bojack"));
        assert!(sample.created_at.is_some());
    }

    #[test]
    fn maps_keep_keys_that_normalize_alike() {
        let sample: Sample = decode(json!({
            "extra": { "displayName": 1, "display_name": 2 }
        }))
        .unwrap();
        assert_eq!(sample.extra.map(|e| e.len()), Some(2));
    }

    #[test]
    fn decode_all_preserves_order() {
        let samples: Vec<Sample> = decode_all(vec![
            json!({ "id": 3 }),
            json!({ "id": 1 }),
            json!({ "id": 3 }),
        ])
        .unwrap();

        let ids: Vec<_> = samples.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![Some(3), Some(1), Some(3)]);
    }
}
