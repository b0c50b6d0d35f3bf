use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use databuilder_core::value_object;

value_object! {
    /// Fixed-length (boxed slice) fields.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(try_from = "serde_json::Map<String, serde_json::Value>")]
    pub struct ArraysDataClass => ArraysDataClassBuilder {
        required array_of_longs: Box<[i64]>,
        required array_of_strings: Box<[String]>,
        nullable array_of_nullable_strings: Option<Box<[Option<String>]>>,
        required array_of_list_of_strings: Box<[Vec<String>]>,
        required array_of_dates: Box<[NaiveDate]>,
    }
}
