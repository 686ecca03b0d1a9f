use rustc_hash::FxHasher;
use std::hash::Hasher;

/// Strategy mapping a key onto one of `size` buckets. Implementations must be deterministic
/// and return a value in `0..size`. Callers never pass a `size` of zero.
pub trait KeyHasher {
    fn bucket_index(&self, key: &str, size: usize) -> usize;
}

/// Sums the Unicode scalar value of every `char` in the key and reduces it modulo the bucket count.
///
/// Keys made of the same characters in a different order (anagrams) always land in the same bucket.
/// The chain handles those collisions; this hasher makes no attempt to spread them.
#[derive(Clone, Copy, Debug, Default)]
pub struct CodePointSum;

impl CodePointSum {
    pub fn new() -> Self {
        Self {}
    }
}

impl KeyHasher for CodePointSum {
    fn bucket_index(&self, key: &str, size: usize) -> usize {
        // Wrapping so very long keys can't overflow.
        let total = key
            .chars()
            .fold(0u64, |total, c| total.wrapping_add(c as u64));

        (total % size as u64) as usize
    }
}

/// Opt-in hasher backed by the fx hashing algorithm. Spreads anagrams across buckets.
#[derive(Clone, Copy, Debug, Default)]
pub struct FxKeyHasher;

impl FxKeyHasher {
    pub fn new() -> Self {
        Self {}
    }
}

impl KeyHasher for FxKeyHasher {
    fn bucket_index(&self, key: &str, size: usize) -> usize {
        let mut hasher = FxHasher::default();
        hasher.write(key.as_bytes());
        (hasher.finish() % size as u64) as usize
    }
}
