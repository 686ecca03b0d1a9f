use crate::contact::Contact;

/// A node in a bucket chain. `key` is a copy of the contact's name so chain walks
/// compare keys without reaching into the value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: Contact,
}

impl Entry {
    pub fn new(value: Contact) -> Self {
        Self {
            key: value.name().to_owned(),
            value,
        }
    }
}
