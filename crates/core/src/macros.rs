//! Declarative generation of builder / value-object pairs.
//!
//! Each field is declared with a nullability keyword:
//!
//! | keyword    | slot unset at `build()` | `set(field, null)`     |
//! |------------|-------------------------|------------------------|
//! | `required` | `MissingField` error    | `NullValue` error      |
//! | `nullable` | null (`None`)           | stored as `None`       |
//! | `default`  | `= expr` is evaluated   | `NullValue` error      |
//! | `strict`   | `MissingField` error    | `NullValue` error; a collection with null elements is a `NullElement` error |
//!
//! `nullable` fields must have an `Option<T>` type. A `default` expression
//! may refer to any field declared before it by name. Generated setters and
//! accessors take the field names, so fields must not be called `new`, `set`,
//! `build`, `is_empty`, `builder`, `to_builder` or `try_from`.
//!
//! An optional `setter_prefix = <ident>` after the builder name prefixes every
//! typed setter (`setter_prefix = with` turns `name(..)` into `with_name(..)`).
//! The dynamic `set` and the field metadata always use the bare field name.

/// Generates a builder whose `build()` calls a constructor function.
///
/// Use this when the target is not a plain record (it computes derived state in
/// its constructor). The constructor receives the resolved slots in
/// declaration order.
///
/// An optional `from { .. }` clause lists the arguments that are also fields of
/// the target; a `From<&Target>` impl copies them into a new builder. Other
/// slots start unset.
///
/// ```ignore
/// databuilder_core::builder! {
///     pub struct PersonBuilder => Person::new, from { other_name } {
///         required forename: String,
///         default surname: String = "Anon".to_owned(),
///         nullable other_name: Option<String>,
///     }
/// }
/// ```
#[macro_export]
macro_rules! builder {
    (@nullability required) => { $crate::Nullability::Required };
    (@nullability nullable) => { $crate::Nullability::Nullable };
    (@nullability default) => { $crate::Nullability::Defaulted };
    (@nullability strict) => { $crate::Nullability::Strict };

    (@decode required $builder:ident . $field:ident : $ty:ty = $value:ident) => {
        $crate::decode::required::<$ty>(stringify!($builder), stringify!($field), $value)
    };
    (@decode default $builder:ident . $field:ident : $ty:ty = $value:ident) => {
        $crate::decode::required::<$ty>(stringify!($builder), stringify!($field), $value)
    };
    (@decode nullable $builder:ident . $field:ident : $ty:ty = $value:ident) => {
        $crate::decode::nullable::<$ty>(stringify!($builder), stringify!($field), $value)
    };
    (@decode strict $builder:ident . $field:ident : $ty:ty = $value:ident) => {
        $crate::decode::strict::<$ty>(stringify!($builder), stringify!($field), $value)
    };

    (@resolve required $builder:ident, $slots:ident . $field:ident : $ty:ty []) => {
        $crate::builder!(@require $builder, $slots . $field)
    };
    (@resolve strict $builder:ident, $slots:ident . $field:ident : $ty:ty []) => {
        $crate::builder!(@require $builder, $slots . $field)
    };
    (@resolve nullable $builder:ident, $slots:ident . $field:ident : $ty:ty []) => {
        match &$slots.$field {
            ::core::option::Option::Some(value) => ::core::clone::Clone::clone(value),
            ::core::option::Option::None => <$ty as $crate::Nullable>::null(),
        }
    };
    (@resolve default $builder:ident, $slots:ident . $field:ident : $ty:ty [$default:expr]) => {
        match &$slots.$field {
            ::core::option::Option::Some(value) => ::core::clone::Clone::clone(value),
            ::core::option::Option::None => $default,
        }
    };

    (@require $builder:ident, $slots:ident . $field:ident) => {
        match &$slots.$field {
            ::core::option::Option::Some(value) => ::core::clone::Clone::clone(value),
            ::core::option::Option::None => {
                return ::core::result::Result::Err($crate::ValidationError::missing(
                    stringify!($builder),
                    stringify!($field),
                ));
            }
        }
    };

    (@setters $builder:ident [] $( $field:ident : $ty:ty ; )*) => {
        impl $builder {
            $(
                #[doc = concat!("Sets `", stringify!($field), "`.")]
                pub fn $field(&mut self, value: impl ::core::convert::Into<$ty>) -> &mut Self {
                    self.$field = ::core::option::Option::Some(value.into());
                    self
                }
            )*
        }
    };
    (@setters $builder:ident [$prefix:ident] $( $field:ident : $ty:ty ; )*) => {
        $crate::__private::paste::paste! {
            impl $builder {
                $(
                    pub fn [<$prefix _ $field>](
                        &mut self,
                        value: impl ::core::convert::Into<$ty>,
                    ) -> &mut Self {
                        self.$field = ::core::option::Option::Some(value.into());
                        self
                    }
                )*
            }
        }
    };

    (@impl
        [$($prefix:ident)?] [$($attrs:tt)*] $vis:vis $builder:ident => $target:ty ;
        [$($construct:tt)*] ;
        $( $kind:ident $field:ident : $ty:ty [$($default:expr)?] ; )*
    ) => {
        $($attrs)*
        #[derive(Debug, Clone, Default)]
        $vis struct $builder {
            $( $field: ::core::option::Option<$ty>, )*
        }

        impl $builder {
            /// Returns a builder with every slot unset.
            pub fn new() -> Self {
                <Self as ::core::default::Default>::default()
            }

            /// Sets a slot by field name from a JSON value, applying the
            /// field's null policy.
            pub fn set(
                &mut self,
                field: &str,
                value: $crate::__private::serde_json::Value,
            ) -> $crate::BuildResult<&mut Self> {
                match field {
                    $(
                        stringify!($field) => {
                            self.$field = ::core::option::Option::Some(
                                $crate::builder!(@decode $kind $builder . $field : $ty = value)?,
                            );
                        }
                    )*
                    other => {
                        return ::core::result::Result::Err(
                            $crate::ValidationError::unknown_field(stringify!($builder), other),
                        );
                    }
                }
                ::core::result::Result::Ok(self)
            }

            /// Whether no slot has been set.
            pub fn is_empty(&self) -> bool {
                true $( && self.$field.is_none() )*
            }

            /// Validates the slots and builds a new value; the builder is left
            /// untouched.
            pub fn build(&self) -> $crate::BuildResult<$target> {
                let __slots = self;
                $(
                    let $field: $ty = $crate::builder!(
                        @resolve $kind $builder, __slots . $field : $ty [$($default)?]
                    );
                )*
                $crate::__private::tracing::trace!(builder = stringify!($builder), "built value");
                ::core::result::Result::Ok($($construct)*)
            }
        }

        $crate::builder!(@setters $builder [$($prefix)?] $( $field : $ty ; )*);

        impl $crate::Builder for $builder {
            type Target = $target;

            const NAME: &'static str = stringify!($builder);

            const FIELDS: &'static [$crate::FieldSpec] = &[
                $( $crate::FieldSpec::new(stringify!($field), $crate::builder!(@nullability $kind)), )*
            ];

            fn build(&self) -> $crate::BuildResult<$target> {
                $builder::build(self)
            }

            fn set(
                &mut self,
                field: &str,
                value: $crate::__private::serde_json::Value,
            ) -> $crate::BuildResult<&mut Self> {
                $builder::set(self, field, value)
            }

            fn is_empty(&self) -> bool {
                $builder::is_empty(self)
            }
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $builder:ident => $target:ident :: $ctor:ident
            $(, setter_prefix = $prefix:ident)?
            $(, from { $($copy:ident),* $(,)? })?
        {
            $( $kind:ident $field:ident : $ty:ty $(= $default:expr)? ),* $(,)?
        }
    ) => {
        $crate::builder! {
            @impl [$($prefix)?] [$(#[$meta])*] $vis $builder => $target;
            [$target::$ctor($($field),*)];
            $( $kind $field : $ty [$($default)?]; )*
        }

        $(
            impl ::core::convert::From<&$target> for $builder {
                fn from(source: &$target) -> Self {
                    let mut builder = Self::new();
                    $( builder.$copy = ::core::option::Option::Some(::core::clone::Clone::clone(&source.$copy)); )*
                    builder
                }
            }
        )?
    };
}

/// Generates an immutable value object, its builder, accessors and the
/// to-builder conversion from one declaration.
///
/// The value object also gets `TryFrom<serde_json::Map<String, Value>>`, which
/// goes through the builder. Point serde at it with
/// `#[serde(try_from = "serde_json::Map<String, serde_json::Value>")]` so
/// deserialization applies defaults and the null policy.
///
/// ```ignore
/// databuilder_core::value_object! {
///     #[derive(Debug, Clone, PartialEq, Eq)]
///     pub struct Address => AddressBuilder {
///         required street: String,
///         nullable unit: Option<String>,
///         default country: String = "NZ".to_owned(),
///     }
/// }
/// ```
#[macro_export]
macro_rules! value_object {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident => $builder:ident $(, setter_prefix = $prefix:ident)? {
            $(
                $(#[$fmeta:meta])*
                $kind:ident $field:ident : $ty:ty $(= $default:expr)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $( $(#[$fmeta])* $field: $ty, )*
        }

        impl $name {
            /// Returns a fresh builder with every slot unset.
            pub fn builder() -> $builder {
                $builder::new()
            }

            /// Returns a builder initialised with the fields of this value.
            pub fn to_builder(&self) -> $builder {
                <$builder as ::core::convert::From<&Self>>::from(self)
            }

            $(
                pub fn $field(&self) -> &$ty {
                    &self.$field
                }
            )*
        }

        impl $crate::ValueObject for $name {}

        impl $crate::Buildable for $name {
            type Builder = $builder;
        }

        impl ::core::convert::From<&$name> for $builder {
            fn from(source: &$name) -> Self {
                let mut builder = Self::new();
                $( builder.$field = ::core::option::Option::Some(::core::clone::Clone::clone(&source.$field)); )*
                builder
            }
        }

        impl ::core::convert::TryFrom<
            $crate::__private::serde_json::Map<::std::string::String, $crate::__private::serde_json::Value>,
        > for $name {
            type Error = $crate::ValidationError;

            fn try_from(
                object: $crate::__private::serde_json::Map<
                    ::std::string::String,
                    $crate::__private::serde_json::Value,
                >,
            ) -> $crate::BuildResult<Self> {
                let mut builder = $builder::new();
                <$builder as $crate::Builder>::apply(&mut builder, object)?;
                builder.build()
            }
        }

        $crate::builder! {
            @impl [$($prefix)?] [#[doc = concat!("Builder for [`", stringify!($name), "`].")]] $vis $builder => $name;
            [$name { $($field),* }];
            $( $kind $field : $ty [$($default)?]; )*
        }
    };
}
