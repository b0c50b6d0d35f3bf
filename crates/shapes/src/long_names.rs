use serde::{Deserialize, Serialize};

use databuilder_core::value_object;

value_object! {
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(try_from = "serde_json::Map<String, serde_json::Value>")]
    pub struct DataClassWithLongPropertyNames => DataClassWithLongPropertyNamesBuilder {
        default string_with_a_very_very_very_very_very_very_very_very_very_very_long_name_that_would_cause_line_wrapping: String =
            "myDefault".to_owned(),
        nullable nullable_string: Option<String>,
    }
}
