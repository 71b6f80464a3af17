//! Cross-crate capability traits

/// String similarity in [0, 1], where 1.0 means identical.
///
/// The gazetteer's fuzzy pass depends only on this capability, never on a
/// concrete scorer. Implementations must be monotonic in edit closeness:
/// `score(a, a) == 1.0`, and fewer edits never score lower.
pub trait Similarity: Send + Sync {
    fn score(&self, a: &str, b: &str) -> f32;
}
