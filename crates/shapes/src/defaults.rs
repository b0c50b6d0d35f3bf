//! Shapes whose `default` fields use literals, other fields, function calls
//! and fresh random values.

use serde::{Deserialize, Serialize};
use uuid::{Uuid, uuid};

use databuilder_core::value_object;

pub const FIXED_ID: Uuid = uuid!("90055b91-612d-4f36-a237-f352acaf72a7");

value_object! {
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(try_from = "serde_json::Map<String, serde_json::Value>")]
    pub struct WithDefaultValues => WithDefaultValuesBuilder {
        default foo: Vec<char> = vec![',', ')', '}', '"'],
        default bar: String = "com.foo.Bar.baz(\"\", '}')".to_owned(),
        default baz: String = "A string containing // comment characters".to_owned(),
    }
}

value_object! {
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(try_from = "serde_json::Map<String, serde_json::Value>")]
    pub struct WithDefaultIdentifiers => WithDefaultIdentifiersBuilder {
        default id: Uuid = FIXED_ID,
        default id_text: String = FIXED_ID.to_string(),
    }
}

value_object! {
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(try_from = "serde_json::Map<String, serde_json::Value>")]
    pub struct WithDefaultValuesReferringToOtherProperties
        => WithDefaultValuesReferringToOtherPropertiesBuilder
    {
        required foo: String,
        default bar: String = format!("bar {}", foo),
        default baz: String = "baz ".to_owned() + &foo,
    }
}

pub fn default_bar() -> String {
    "A default bar".to_owned()
}

impl WithDefaultValuesUsingFunctions {
    pub fn default_foo() -> String {
        "This is a default foo".to_owned()
    }

    pub fn curly_brackets(f: impl FnOnce() -> String) -> String {
        f()
    }

    pub fn default_baz(a: &str, b: &str) -> String {
        format!("A default baz {a} {b}")
    }

    pub fn default_baz2(f: impl FnOnce(&str, &str) -> String) -> String {
        f("a", "b")
    }
}

value_object! {
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(try_from = "serde_json::Map<String, serde_json::Value>")]
    pub struct WithDefaultValuesUsingFunctions => WithDefaultValuesUsingFunctionsBuilder {
        default foo: String = WithDefaultValuesUsingFunctions::default_foo(),
        default bar: String = default_bar(),
        default foo2: String =
            WithDefaultValuesUsingFunctions::curly_brackets(|| format!("{}, {}", foo, bar)),
        default baz: String = WithDefaultValuesUsingFunctions::default_baz(&foo, &bar),
        default baz2: String = WithDefaultValuesUsingFunctions::default_baz2(|_, _| "defaultBaz2".to_owned()),
    }
}

value_object! {
    /// Every build of an unset slot draws a new value.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(try_from = "serde_json::Map<String, serde_json::Value>")]
    pub struct WithDefaultRandomValues => WithDefaultRandomValuesBuilder {
        default foo: String = Uuid::now_v7().to_string(),
        default bar: Uuid = Uuid::now_v7(),
    }
}
