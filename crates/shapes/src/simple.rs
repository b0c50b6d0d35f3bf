use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use databuilder_core::value_object;

/// Default for [`SimpleDataClass::string_with_default`].
pub const DEFAULT_STRING: &str = "withDefaultValue";

value_object! {
    /// Scalar fields covering every nullability class. Setters carry a
    /// `with_` prefix.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(try_from = "serde_json::Map<String, serde_json::Value>")]
    pub struct SimpleDataClass => SimpleDataClassBuilder, setter_prefix = with {
        required not_null_string: String,
        nullable nullable_string: Option<String>,
        required not_null_long: i64,
        nullable nullable_long: Option<i64>,
        required date: NaiveDate,
        required value: String,
        default string_with_default: String = DEFAULT_STRING.to_string(),
        default default_date: NaiveDate = NaiveDate::MIN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;
    use databuilder_core::{Builder, ValidationError};
    use serde_json::{Value, json};

    fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    fn populated() -> SimpleDataClassBuilder {
        let mut builder = SimpleDataClass::builder();
        builder
            .with_not_null_string("notNullString")
            .with_nullable_string(Some("nullableString".to_string()))
            .with_not_null_long(0)
            .with_nullable_long(i64::MIN)
            .with_date(today())
            .with_value("value");
        builder
    }

    #[test]
    fn builder_creates_object_with_correct_properties() {
        let date = today();
        let actual = SimpleDataClass::builder()
            .with_not_null_string("foo")
            .with_not_null_long(123)
            .with_nullable_long(345_i64)
            .with_date(date)
            .with_string_with_default("custom")
            .with_default_date(date)
            .with_value("bar")
            .build()
            .unwrap();

        assert_eq!(actual.not_null_string(), "foo");
        assert_eq!(actual.nullable_string(), &None);
        assert_eq!(*actual.not_null_long(), 123);
        assert_eq!(*actual.nullable_long(), Some(345));
        assert_eq!(*actual.date(), date);
        assert_eq!(actual.string_with_default(), "custom");
        assert_eq!(actual.value(), "bar");
        assert_eq!(*actual.default_date(), date);
    }

    #[test]
    fn omitted_defaults_are_filled_in() {
        let actual = populated().build().unwrap();

        assert_eq!(actual.not_null_string(), "notNullString");
        assert_eq!(actual.nullable_string().as_deref(), Some("nullableString"));
        assert_eq!(*actual.not_null_long(), 0);
        assert_eq!(*actual.nullable_long(), Some(i64::MIN));
        assert_eq!(actual.string_with_default(), DEFAULT_STRING);
        assert_eq!(*actual.default_date(), NaiveDate::MIN);
    }

    #[test]
    fn build_fails_if_required_property_not_set() {
        let mut builder = SimpleDataClass::builder();
        builder.with_nullable_long(123_i64);

        let err = builder.build().unwrap_err();
        assert!(matches!(err, ValidationError::MissingField { .. }));
        assert!(err.to_string().contains("not_null_string"));
    }

    #[test]
    fn null_is_rejected_for_required_fields() {
        let mut builder = SimpleDataClass::builder();
        let err = builder.set("not_null_string", Value::Null).unwrap_err();

        assert_eq!(
            err,
            ValidationError::null_value("SimpleDataClassBuilder", "not_null_string")
        );
        assert!(err.to_string().contains("not_null_string"));
    }

    #[test]
    fn null_is_accepted_for_nullable_fields() {
        let actual = populated()
            .set("nullable_string", Value::Null)
            .unwrap()
            .set("nullable_long", Value::Null)
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(actual.nullable_string(), &None);
        assert_eq!(actual.nullable_long(), &None);
    }

    #[test]
    fn to_builder_returns_initialised_builder() {
        let original = SimpleDataClass::builder()
            .with_date(today())
            .with_not_null_string("Foo")
            .with_nullable_string(Some("Bar".to_string()))
            .with_not_null_long(123)
            .with_value("Baz")
            .build()
            .unwrap();

        let result = original.to_builder().build().unwrap();
        assert_eq!(result, original);
    }

    #[test]
    fn to_builder_allows_further_changes() {
        let original = populated().build().unwrap();
        let changed = original.to_builder().with_not_null_long(7).build().unwrap();

        assert_eq!(*changed.not_null_long(), 7);
        assert_eq!(changed.not_null_string(), original.not_null_string());
        assert_eq!(*original.not_null_long(), 0);
    }

    #[test]
    fn static_builder_method_returns_empty_builder() {
        let builder = SimpleDataClass::builder();
        assert!(builder.is_empty());
        assert!(Builder::is_empty(&builder));
    }

    #[test]
    fn builder_can_be_filled_from_json() {
        let mut builder = SimpleDataClassBuilder::new();
        let Value::Object(object) = json!({
            "not_null_string": "from json",
            "nullable_string": null,
            "not_null_long": 9,
            "date": "2024-02-29",
            "value": "v"
        }) else {
            unreachable!()
        };
        builder.apply(object).unwrap();

        let actual = builder.build().unwrap();
        assert_eq!(actual.not_null_string(), "from json");
        assert_eq!(*actual.date(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(actual.string_with_default(), DEFAULT_STRING);
    }

    #[test]
    fn malformed_json_value_names_the_field() {
        let err = SimpleDataClassBuilder::new()
            .set("date", json!("not a date"))
            .unwrap_err();
        assert_eq!(err.field(), "date");
        assert!(matches!(err, ValidationError::InvalidValue { .. }));
    }

    #[test]
    fn serializes_like_a_plain_record() {
        let value = populated().with_date(NaiveDate::from_ymd_opt(2020, 1, 2).unwrap()).build().unwrap();
        let json = serde_json::to_value(&value).unwrap();

        assert_eq!(json["not_null_string"], "notNullString");
        assert_eq!(json["date"], "2020-01-02");
        assert_eq!(json["string_with_default"], DEFAULT_STRING);
    }

    #[test]
    fn prefixed_setters_fill_the_same_slots_as_set() {
        let typed = SimpleDataClass::builder()
            .with_not_null_string("a")
            .with_not_null_long(1)
            .with_date(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())
            .with_value("v")
            .build()
            .unwrap();

        let mut dynamic = SimpleDataClassBuilder::new();
        dynamic
            .set("not_null_string", json!("a"))
            .unwrap()
            .set("not_null_long", json!(1))
            .unwrap()
            .set("date", json!("2024-02-29"))
            .unwrap()
            .set("value", json!("v"))
            .unwrap();

        assert_eq!(dynamic.build().unwrap(), typed);
        assert!(SimpleDataClassBuilder::field_spec("with_value").is_none());
    }

    #[test]
    fn deserializing_applies_defaults() {
        let actual: SimpleDataClass = serde_json::from_value(json!({
            "not_null_string": "from json",
            "not_null_long": 9,
            "date": "2024-02-29",
            "value": "v"
        }))
        .unwrap();

        assert_eq!(actual.string_with_default(), DEFAULT_STRING);
        assert_eq!(*actual.default_date(), NaiveDate::MIN);
        assert_eq!(actual.nullable_string(), &None);
    }

    #[test]
    fn deserializing_enforces_the_null_policy() {
        let err = serde_json::from_value::<SimpleDataClass>(json!({
            "not_null_string": null,
            "not_null_long": 9,
            "date": "2024-02-29",
            "value": "v"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("not_null_string must not be null"));

        let err = serde_json::from_value::<SimpleDataClass>(json!({ "not_null_long": 9 }))
            .unwrap_err();
        assert!(err.to_string().contains("not_null_string"));
    }

    #[test]
    fn serde_round_trip_matches_the_value() {
        let value = populated()
            .with_default_date(NaiveDate::from_ymd_opt(1999, 12, 31).unwrap())
            .build()
            .unwrap();

        let json = serde_json::to_string(&value).unwrap();
        let back: SimpleDataClass = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn any_date() -> impl Strategy<Value = NaiveDate> {
            (1i32..=3_000_000).prop_map(|days| NaiveDate::from_num_days_from_ce_opt(days).unwrap())
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: every fully-populated value survives a to-builder round trip.
            #[test]
            fn to_builder_round_trip(
                not_null_string in ".{0,40}",
                nullable_string in proptest::option::of(".{0,40}"),
                not_null_long in any::<i64>(),
                nullable_long in proptest::option::of(any::<i64>()),
                date in any_date(),
                value in ".{0,40}",
                string_with_default in ".{0,40}",
                default_date in any_date(),
            ) {
                let value = SimpleDataClass::builder()
                    .with_not_null_string(not_null_string)
                    .with_nullable_string(nullable_string)
                    .with_not_null_long(not_null_long)
                    .with_nullable_long(nullable_long)
                    .with_date(date)
                    .with_value(value)
                    .with_string_with_default(string_with_default)
                    .with_default_date(default_date)
                    .build()
                    .unwrap();

                prop_assert_eq!(value.to_builder().build().unwrap(), value);
            }

            /// Property: build() is repeatable and leaves the builder as it was.
            #[test]
            fn build_is_repeatable(not_null_long in any::<i64>(), date in any_date()) {
                let mut builder = SimpleDataClass::builder();
                builder
                    .with_not_null_string("x")
                    .with_not_null_long(not_null_long)
                    .with_date(date)
                    .with_value("y");

                let first = builder.build().unwrap();
                let second = builder.build().unwrap();
                prop_assert_eq!(first, second);
            }
        }
    }
}
