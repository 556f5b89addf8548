use std::hash::{DefaultHasher, Hash, Hasher};

pub type DigestOutput = u64;

pub trait Digestible {
    fn digest(&self) -> DigestOutput;
}

/// Hashes any `Hash` value with the standard library's default hasher. Used to
/// build digests out of the parts of a value that are hashable.
pub(crate) fn hash_of<H: Hash + ?Sized>(value: &H) -> DigestOutput {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}
