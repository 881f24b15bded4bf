//! `serde(with = ...)` helpers for `f64` fields that may be infinite.
//!
//! JSON has no literal for infinities, and `serde_json` writes them as `null`,
//! which it then refuses to read back. Finite values stay plain numbers; the
//! non-finite ones are written as the strings `"inf"`, `"-inf"` and `"nan"`.

use serde::de::Error;
use serde::{
    Deserialize,
    Deserializer,
    Serializer
};

#[derive(Deserialize)]
#[serde(untagged)]
enum FloatJsonProp {
    Number(f64),
    Text(String)
}

pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else if value.is_nan() {
        serializer.serialize_str("nan")
    } else if value.is_sign_positive() {
        serializer.serialize_str("inf")
    } else {
        serializer.serialize_str("-inf")
    }
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    match FloatJsonProp::deserialize(deserializer)? {
        FloatJsonProp::Number(value) => Ok(value),
        FloatJsonProp::Text(text) => match text.as_str() {
            "inf" => Ok(f64::INFINITY),
            "-inf" => Ok(f64::NEG_INFINITY),
            "nan" => Ok(f64::NAN),
            other => Err(D::Error::custom(format!(
                "expected a number, \"inf\", \"-inf\" or \"nan\", got \"{}\"",
                other
            ))),
        },
    }
}
