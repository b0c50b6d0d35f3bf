use databuilder_core::builder;

/// Default for the `surname` constructor argument.
pub const ANONYMOUS_SURNAME: &str = "Anon";

/// A type built through its constructor; only the derived name is stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassWithConstructorParameters {
    full_name: String,
    other_name: Option<String>,
}

impl ClassWithConstructorParameters {
    pub fn new(forename: String, surname: String, other_name: Option<String>) -> Self {
        Self {
            full_name: format!("{forename} {surname}"),
            other_name,
        }
    }

    pub fn builder() -> ClassWithConstructorParametersBuilder {
        ClassWithConstructorParametersBuilder::new()
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn other_name(&self) -> Option<&str> {
        self.other_name.as_deref()
    }
}

builder! {
    /// Collects constructor arguments for [`ClassWithConstructorParameters`].
    pub struct ClassWithConstructorParametersBuilder => ClassWithConstructorParameters::new,
        from { other_name }
    {
        required forename: String,
        default surname: String = ANONYMOUS_SURNAME.to_owned(),
        nullable other_name: Option<String>,
    }
}
