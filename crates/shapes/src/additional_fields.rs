use serde::{Deserialize, Serialize};

use databuilder_core::value_object;

value_object! {
    /// A record with a value derived from its fields.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(try_from = "serde_json::Map<String, serde_json::Value>")]
    pub struct DataClassWithAdditionalFields => DataClassWithAdditionalFieldsBuilder {
        required constructor_string: String,
        /// Only readable through its accessor.
        required private_string: String,
    }
}

impl DataClassWithAdditionalFields {
    /// Derived from `constructor_string`; not a builder slot.
    pub fn non_constructor_string(&self) -> String {
        format!("{}foo", self.constructor_string)
    }
}
