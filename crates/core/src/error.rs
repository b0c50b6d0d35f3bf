//! Builder validation error model.

use thiserror::Error;

/// Result type used by builders and the dynamic setter.
pub type BuildResult<T> = Result<T, ValidationError>;

/// Precondition violation raised by a builder.
///
/// Every variant names the builder and the offending field; the rendered
/// message always contains the field name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A non-nullable field was given `null`.
    #[error("{builder}.{field}: {field} must not be null")]
    NullValue {
        builder: &'static str,
        field: &'static str,
    },

    /// A required field was never set and declares no default.
    #[error("{builder}.{field}: {field} must not be null (required field was never set)")]
    MissingField {
        builder: &'static str,
        field: &'static str,
    },

    /// A strict collection field contained a null element.
    #[error("{builder}.{field}: {field} must not contain null elements")]
    NullElement {
        builder: &'static str,
        field: &'static str,
    },

    /// The supplied value could not be decoded into the field's type.
    #[error("{builder}.{field}: invalid value for {field}: {reason}")]
    InvalidValue {
        builder: &'static str,
        field: &'static str,
        reason: String,
    },

    /// The builder has no field with this name.
    #[error("{builder}: unknown field {field}")]
    UnknownField {
        builder: &'static str,
        field: String,
    },
}

impl ValidationError {
    pub fn null_value(builder: &'static str, field: &'static str) -> Self {
        Self::NullValue { builder, field }
    }

    pub fn missing(builder: &'static str, field: &'static str) -> Self {
        Self::MissingField { builder, field }
    }

    pub fn null_element(builder: &'static str, field: &'static str) -> Self {
        Self::NullElement { builder, field }
    }

    pub fn invalid_value(
        builder: &'static str,
        field: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            builder,
            field,
            reason: reason.into(),
        }
    }

    pub fn unknown_field(builder: &'static str, field: impl Into<String>) -> Self {
        Self::UnknownField {
            builder,
            field: field.into(),
        }
    }

    /// Name of the builder that raised the error.
    pub fn builder(&self) -> &'static str {
        match self {
            Self::NullValue { builder, .. }
            | Self::MissingField { builder, .. }
            | Self::NullElement { builder, .. }
            | Self::InvalidValue { builder, .. }
            | Self::UnknownField { builder, .. } => *builder,
        }
    }

    /// Name of the offending field (also the name of its setter).
    pub fn field(&self) -> &str {
        match self {
            Self::NullValue { field, .. }
            | Self::MissingField { field, .. }
            | Self::NullElement { field, .. }
            | Self::InvalidValue { field, .. } => field,
            Self::UnknownField { field, .. } => field,
        }
    }
}
