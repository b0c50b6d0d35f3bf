//! `databuilder-core` — builder validation contract for value objects.
//!
//! This crate contains the traits, error model and code generation
//! (`value_object!`, `builder!`) that turn one field declaration into an
//! immutable value object plus a validating builder.

mod macros;

pub mod builder;
pub mod decode;
pub mod error;
pub mod nullable;
pub mod value_object;

pub use builder::{Builder, FieldSpec, Nullability};
pub use error::{BuildResult, ValidationError};
pub use nullable::{Nullable, NullableElements, reject_null_elements};
pub use value_object::{Buildable, ValueObject};

#[doc(hidden)]
pub mod __private {
    pub use paste;
    pub use serde_json;
    pub use tracing;
}
