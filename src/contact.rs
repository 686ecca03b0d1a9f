use std::fmt;

/// A single contact record. The name doubles as the lookup key in a `HashTable`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Contact {
    name: String,
    number: String,
}

impl Contact {
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-form phone text, stored exactly as given.
    pub fn number(&self) -> &str {
        &self.number
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.number)
    }
}
