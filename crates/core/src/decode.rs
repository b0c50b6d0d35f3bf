//! Decoding of loosely typed (JSON) values into builder slots.
//!
//! These functions back the generated `set(field, value)` method. JSON `null`
//! is the only way a null can reach a non-optional field, so this is where the
//! per-field nullability policy is enforced.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{BuildResult, ValidationError};
use crate::nullable::Nullable;

/// Decodes a value for a required (or defaulted) field. `null` is rejected.
pub fn required<T: DeserializeOwned>(
    builder: &'static str,
    field: &'static str,
    value: Value,
) -> BuildResult<T> {
    if value.is_null() {
        return Err(ValidationError::null_value(builder, field));
    }
    decode(builder, field, value)
}

/// Decodes a value for a nullable field. `null` becomes the field's null value.
pub fn nullable<T: Nullable + DeserializeOwned>(
    builder: &'static str,
    field: &'static str,
    value: Value,
) -> BuildResult<T> {
    if value.is_null() {
        return Ok(T::null());
    }
    decode(builder, field, value)
}

/// Decodes a value for a strict collection field.
///
/// Rejects `null` itself and any `null` element, at any depth of nested
/// arrays (`Vec<Vec<String>>`, map values that are lists). Objects appearing
/// as elements are records and keep their own nullability.
pub fn strict<T: DeserializeOwned>(
    builder: &'static str,
    field: &'static str,
    value: Value,
) -> BuildResult<T> {
    if value.is_null() {
        return Err(ValidationError::null_value(builder, field));
    }
    if has_null_element(&value) {
        return Err(ValidationError::null_element(builder, field));
    }
    decode(builder, field, value)
}

fn has_null_element(value: &Value) -> bool {
    match value {
        Value::Array(items) => items.iter().any(is_null_or_holds_null),
        Value::Object(entries) => entries.values().any(is_null_or_holds_null),
        _ => false,
    }
}

fn is_null_or_holds_null(element: &Value) -> bool {
    match element {
        Value::Null => true,
        Value::Array(_) => has_null_element(element),
        _ => false,
    }
}

fn decode<T: DeserializeOwned>(
    builder: &'static str,
    field: &'static str,
    value: Value,
) -> BuildResult<T> {
    serde_json::from_value(value)
        .map_err(|e| ValidationError::invalid_value(builder, field, e.to_string()))
}
