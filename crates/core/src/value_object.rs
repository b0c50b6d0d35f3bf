//! Value object traits: equality by value, construction through a builder.
//!
//! Value objects have **no identity**: they are defined entirely by their
//! field values, and two value objects with the same values are equal.

use crate::builder::Builder;

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// derive a builder from it with `to_builder`, change the slots you need, and
/// build a new value.
///
/// The trait requires:
/// - **Clone**: builders snapshot slot values when building
/// - **PartialEq**: value objects are compared by their field values
/// - **Debug**: value objects are printable in assertions and logs
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// A value object with a generated builder.
///
/// ```ignore
/// databuilder_core::value_object! {
///     #[derive(Debug, Clone, PartialEq)]
///     pub struct Money => MoneyBuilder {
///         required amount: i64,
///         default currency: String = "USD".to_owned(),
///     }
/// }
///
/// let price = Money::builder().amount(100).build()?;
/// assert_eq!(price.currency(), "USD");
///
/// let discounted = price.to_builder().amount(90).build()?;
/// assert_ne!(price, discounted);
/// ```
pub trait Buildable: ValueObject {
    type Builder: Builder<Target = Self> + for<'a> From<&'a Self>;

    /// Returns a fresh builder with every slot unset.
    fn builder() -> Self::Builder {
        Self::Builder::default()
    }

    /// Returns a builder whose slots hold this value's fields.
    fn to_builder(&self) -> Self::Builder {
        Self::Builder::from(self)
    }
}
