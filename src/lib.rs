//! A contact book keyed by name, stored in a fixed-size hash table that resolves collisions by chaining.
//!
//! ```
//! use contactbook::HashTable;
//!
//! let mut table = HashTable::new(10).unwrap();
//! table.insert("John", "909-876-1234");
//!
//! assert_eq!(table.search("John").unwrap().number(), "909-876-1234");
//! assert!(table.search("Chris").is_none());
//! ```

mod chain_entry;
mod contact;
mod error;
mod hash_table;
mod key_hasher;

#[cfg(test)]
mod logger;

pub use chain_entry::Entry;
pub use contact::Contact;
pub use error::{Error, Result};
pub use hash_table::HashTable;
pub use key_hasher::{CodePointSum, FxKeyHasher, KeyHasher};
