use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use databuilder_core::value_object;

value_object! {
    /// Collection-valued fields, with and without nullable elements.
    ///
    /// `strict` fields reject null elements arriving through the dynamic
    /// setter with a `NullElement` error; `hash_set` is a plain required
    /// collection and reports them as an undecodable value instead.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(try_from = "serde_json::Map<String, serde_json::Value>")]
    pub struct CollectionsDataClass => CollectionsDataClassBuilder {
        strict list_of_strings: Vec<String>,
        required list_of_nullable_strings: Vec<Option<String>>,
        strict set_of_longs: HashSet<i64>,
        required set_of_nullable_longs: HashSet<Option<i64>>,
        required hash_set: HashSet<i64>,
        strict collection_of_dates: Vec<NaiveDate>,
        required map_of_string_to_nullable_dates: HashMap<String, Option<NaiveDate>>,
        strict tree_map: BTreeMap<String, NaiveDate>,
        nullable nullable_set_of_longs: Option<BTreeSet<i64>>,
    }
}
