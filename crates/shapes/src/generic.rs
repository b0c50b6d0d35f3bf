use serde::{Deserialize, Serialize};

use databuilder_core::value_object;

/// A generic wrapper used as a field type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypedObject<T> {
    pub value: T,
}

impl<T> TypedObject<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }
}

value_object! {
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(try_from = "serde_json::Map<String, serde_json::Value>")]
    pub struct GenericTypeDataClass => GenericTypeDataClassBuilder {
        required my_typed_object: TypedObject<String>,
        nullable my_optional_typed_object: Option<TypedObject<i64>>,
    }
}
