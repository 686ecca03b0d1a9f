use super::chain_entry::Entry;
use super::contact::Contact;
use super::error::{Error, Result};
use super::key_hasher::{CodePointSum, KeyHasher};
use log::{debug, trace, warn};
use std::{
    fmt,
    io::{self, Write},
};

/// A contact book backed by a fixed number of buckets, each holding a chain of entries.
///
/// The bucket count is chosen at construction and never changes. Chains grow without bound,
/// so lookups cost O(chain length) at a single bucket.
#[derive(Debug)]
pub struct HashTable<H: KeyHasher = CodePointSum> {
    buckets: Vec<Vec<Entry>>,
    hasher: H,
    num_items: usize,
}

impl HashTable<CodePointSum> {
    /// Creates a table with `size` empty buckets using the code point sum hasher.
    /// Returns `Error::InvalidSize` if `size` is zero.
    pub fn new(size: usize) -> Result<Self> {
        Self::with_hasher(size, CodePointSum::new())
    }
}

impl<H: KeyHasher> HashTable<H> {
    /// Creates a table with `size` empty buckets and a custom key hasher.
    pub fn with_hasher(size: usize, hasher: H) -> Result<Self> {
        if size == 0 {
            warn!("Rejecting hash table with zero buckets");
            return Err(Error::InvalidSize(size));
        }

        let mut buckets: Vec<Vec<Entry>> = Vec::with_capacity(size);
        buckets.extend((0..size).map(|_| Vec::new()));
        debug!("Created hash table with {} buckets", size);

        Ok(Self {
            buckets,
            hasher,
            num_items: 0,
        })
    }

    /// Maps a key onto its bucket index. Always in `0..self.size()`.
    pub fn hash_function(&self, key: &str) -> usize {
        self.hasher.bucket_index(key, self.buckets.len())
    }

    /// Stores a contact under `key`. If the key is already present its contact is replaced,
    /// otherwise a new entry is appended to the tail of the bucket's chain.
    pub fn insert(&mut self, key: impl Into<String>, number: impl Into<String>) {
        let contact = Contact::new(key, number);
        let index = self.hash_function(contact.name());
        let chain = &mut self.buckets[index];

        if let Some(entry) = chain.iter_mut().find(|entry| entry.key == contact.name()) {
            trace!("Updating '{}' in bucket {}", entry.key, index);
            entry.value = contact;
            // Return to prevent updating num items.
            return;
        }

        chain.push(Entry::new(contact));
        trace!("Appended to bucket {}, chain length {}", index, chain.len());
        self.num_items += 1;
    }

    /// Looks up the contact stored under `key`. Keys compare exactly, so the lookup is case-sensitive.
    /// Returns `None` if no such contact exists.
    pub fn search(&self, key: &str) -> Option<&Contact> {
        let index = self.hash_function(key);
        let found = self.buckets[index]
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| &entry.value);

        if found.is_none() {
            trace!("No contact '{}' in bucket {}", key, index);
        }

        found
    }

    /// Checks to see if a contact is stored under the given key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.search(key).is_some()
    }

    /// Writes every bucket, one line per index, to `out`.
    ///
    /// An empty bucket renders as `Index 3: Empty`, a populated one lists its chain head to tail:
    /// `Index 5: - Amy: 111-222-3333 - May: 222-333-1111`.
    pub fn dump<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self)
    }

    /// Dumps the table to stdout.
    pub fn print_table(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.dump(&mut handle)
    }

    /// The chain stored at `index`, or `None` if the index is past the last bucket.
    pub fn bucket(&self, index: usize) -> Option<&[Entry]> {
        self.buckets.get(index).map(Vec::as_slice)
    }

    /// Iterates over `(index, chain)` for every bucket in index order.
    pub fn buckets(&self) -> impl Iterator<Item = (usize, &[Entry])> + '_ {
        self.buckets.iter().map(Vec::as_slice).enumerate()
    }

    /// Gets the number of stored contacts.
    pub fn len(&self) -> usize {
        self.num_items
    }

    pub fn is_empty(&self) -> bool {
        self.num_items == 0
    }

    /// Gets the number of buckets.
    pub fn size(&self) -> usize {
        self.buckets.len()
    }

    /// Ratio of stored contacts to buckets. Reported only; the table never resizes.
    pub fn load_factor(&self) -> f64 {
        self.num_items as f64 / self.buckets.len() as f64
    }
}

impl<H: KeyHasher> fmt::Display for HashTable<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, chain) in self.buckets() {
            if chain.is_empty() {
                writeln!(f, "Index {}: Empty", index)?;
                continue;
            }

            write!(f, "Index {}:", index)?;
            for entry in chain {
                write!(f, " - {}", entry.value)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
