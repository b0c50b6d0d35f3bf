//! Builder trait and per-field metadata.

use serde_json::{Map, Value};

use crate::error::BuildResult;

/// Nullability class of a value-object field.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Nullability {
    /// Must be set to a non-null value before `build()`.
    Required,
    /// May be null; unset means null.
    Nullable,
    /// Non-null, but falls back to a declared default when never set.
    Defaulted,
    /// Required collection whose elements must not be null either.
    Strict,
}

impl Nullability {
    /// Whether `null` is an acceptable value for the field itself.
    pub fn accepts_null(self) -> bool {
        matches!(self, Nullability::Nullable)
    }

    /// Whether leaving the field unset makes `build()` fail.
    pub fn must_be_set(self) -> bool {
        matches!(self, Nullability::Required | Nullability::Strict)
    }
}

/// Static description of one builder slot.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub nullability: Nullability,
}

impl FieldSpec {
    pub const fn new(name: &'static str, nullability: Nullability) -> Self {
        Self { name, nullability }
    }
}

/// Mutable staging object for a value object.
///
/// Implementations are generated by [`value_object!`](crate::value_object) and
/// [`builder!`](crate::builder). Every slot starts unset; `build` validates and
/// snapshots the slots without consuming or changing them, so a builder can be
/// built, mutated and built again.
pub trait Builder: Default + Clone + core::fmt::Debug {
    /// The type produced by `build`.
    type Target;

    /// Builder type name, used in error messages.
    const NAME: &'static str;

    /// One entry per slot, in declaration order.
    const FIELDS: &'static [FieldSpec];

    /// Validates required slots, applies defaults and returns a new target.
    fn build(&self) -> BuildResult<Self::Target>;

    /// Sets a slot by name from a JSON value, applying the field's null policy.
    fn set(&mut self, field: &str, value: Value) -> BuildResult<&mut Self>;

    /// Whether no slot has been set.
    fn is_empty(&self) -> bool;

    /// Sets every entry of `object`, stopping at the first rejected value.
    fn apply(&mut self, object: Map<String, Value>) -> BuildResult<&mut Self> {
        for (field, value) in object {
            self.set(&field, value)?;
        }
        Ok(self)
    }

    /// Looks up a field's metadata by name.
    fn field_spec(name: &str) -> Option<&'static FieldSpec> {
        Self::FIELDS.iter().find(|spec| spec.name == name)
    }
}
