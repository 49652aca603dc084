//! Serialization of opaque workflow values
//!
//! Numbers are parsed with `arbitrary_precision`, so each [`Number`] keeps the
//! text it was written with. Serializing one directly would hand the YAML
//! serializer serde_json's private number wrapper; [`Verbatim`] writes the
//! number itself instead:
//!
//! - integers in i64/u64 range as themselves
//! - larger integers through i128/u128, digit for digit
//! - everything else as f64
//!
//! An integer too large even for i128/u128 fails serialization rather than
//! coming out rounded.

use serde::ser::{Error, Serialize, Serializer};
use serde_json::{Number, Value};

/// Serialize a JSON value with numbers written as they were read
pub struct Verbatim<'a>(pub &'a Value);

impl Serialize for Verbatim<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => serialize_number(n, serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => serializer.collect_seq(items.iter().map(Verbatim)),
            Value::Object(map) => {
                serializer.collect_map(map.iter().map(|(key, value)| (key, Verbatim(value))))
            }
        }
    }
}

/// `serialize_with` helper for optional opaque fields
pub fn serialize_option<S: Serializer>(
    value: &Option<Value>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(value) => Verbatim(value).serialize(serializer),
        None => serializer.serialize_none(),
    }
}

fn serialize_number<S: Serializer>(n: &Number, serializer: S) -> Result<S::Ok, S::Error> {
    if let Some(i) = n.as_i64() {
        return serializer.serialize_i64(i);
    }
    if let Some(u) = n.as_u64() {
        return serializer.serialize_u64(u);
    }

    let text = n.to_string();
    if is_integer_literal(&text) {
        if let Ok(i) = text.parse::<i128>() {
            return serializer.serialize_i128(i);
        }
        if let Ok(u) = text.parse::<u128>() {
            return serializer.serialize_u128(u);
        }
        return Err(S::Error::custom(format!(
            "integer {} is too large to be written exactly",
            text
        )));
    }

    match n.as_f64() {
        Some(f) if f.is_finite() => serializer.serialize_f64(f),
        _ => Err(S::Error::custom(format!(
            "number {} cannot be represented as a float",
            text
        ))),
    }
}

fn is_integer_literal(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
