//! Reference value objects built with `databuilder-core`.
//!
//! Each module declares one family of shapes: scalar fields, collections,
//! boxed slices, generic field types, derived state, constructor builders and
//! the different kinds of default values.

pub mod additional_fields;
pub mod arrays;
pub mod collections;
pub mod constructor;
pub mod defaults;
pub mod generic;
pub mod long_names;
pub mod simple;

pub use additional_fields::{DataClassWithAdditionalFields, DataClassWithAdditionalFieldsBuilder};
pub use arrays::{ArraysDataClass, ArraysDataClassBuilder};
pub use collections::{CollectionsDataClass, CollectionsDataClassBuilder};
pub use constructor::{ClassWithConstructorParameters, ClassWithConstructorParametersBuilder};
pub use defaults::{
    WithDefaultIdentifiers, WithDefaultIdentifiersBuilder, WithDefaultRandomValues,
    WithDefaultRandomValuesBuilder, WithDefaultValues, WithDefaultValuesBuilder,
    WithDefaultValuesReferringToOtherProperties, WithDefaultValuesReferringToOtherPropertiesBuilder,
    WithDefaultValuesUsingFunctions, WithDefaultValuesUsingFunctionsBuilder,
};
pub use generic::{GenericTypeDataClass, GenericTypeDataClassBuilder, TypedObject};
pub use long_names::{DataClassWithLongPropertyNames, DataClassWithLongPropertyNamesBuilder};
pub use simple::{SimpleDataClass, SimpleDataClassBuilder};
