//! Nullability markers for field and element types.
//!
//! Rust has no `null`; a nullable field is declared with an `Option<T>` type and
//! a collection that may hold null elements uses `Option<T>` elements.

use core::hash::{BuildHasher, Hash};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use crate::error::{BuildResult, ValidationError};

/// A type with a distinguished null value.
///
/// Only `Option<T>` implements this; nullable builder fields require it so a
/// non-optional type cannot be declared nullable by mistake.
pub trait Nullable {
    fn null() -> Self;

    fn is_null(&self) -> bool;
}

impl<T> Nullable for Option<T> {
    fn null() -> Self {
        None
    }

    fn is_null(&self) -> bool {
        self.is_none()
    }
}

/// A collection whose elements may be null, convertible into its null-free form.
pub trait NullableElements {
    /// The same collection shape without nullable elements.
    type Strict;

    /// Strips the `Option` wrapper from every element, or returns `None` if any
    /// element is null.
    fn into_strict(self) -> Option<Self::Strict>;
}

impl<T> NullableElements for Vec<Option<T>> {
    type Strict = Vec<T>;

    fn into_strict(self) -> Option<Self::Strict> {
        self.into_iter().collect()
    }
}

impl<T> NullableElements for Box<[Option<T>]> {
    type Strict = Box<[T]>;

    fn into_strict(self) -> Option<Self::Strict> {
        self.into_vec()
            .into_iter()
            .collect::<Option<Vec<T>>>()
            .map(Vec::into_boxed_slice)
    }
}

impl<T, S> NullableElements for HashSet<Option<T>, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    type Strict = HashSet<T, S>;

    fn into_strict(self) -> Option<Self::Strict> {
        self.into_iter().collect()
    }
}

impl<T: Ord> NullableElements for BTreeSet<Option<T>> {
    type Strict = BTreeSet<T>;

    fn into_strict(self) -> Option<Self::Strict> {
        self.into_iter().collect()
    }
}

impl<K, V, S> NullableElements for HashMap<K, Option<V>, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    type Strict = HashMap<K, V, S>;

    fn into_strict(self) -> Option<Self::Strict> {
        self.into_iter().map(|(k, v)| v.map(|v| (k, v))).collect()
    }
}

impl<K: Ord, V> NullableElements for BTreeMap<K, Option<V>> {
    type Strict = BTreeMap<K, V>;

    fn into_strict(self) -> Option<Self::Strict> {
        self.into_iter().map(|(k, v)| v.map(|v| (k, v))).collect()
    }
}

/// Converts a collection with nullable elements for a strict field, failing
/// with [`ValidationError::NullElement`] naming `builder.field` if any element
/// is null.
pub fn reject_null_elements<C: NullableElements>(
    builder: &'static str,
    field: &'static str,
    collection: C,
) -> BuildResult<C::Strict> {
    collection
        .into_strict()
        .ok_or_else(|| ValidationError::null_element(builder, field))
}
