//! Similarity backends for fuzzy gazetteer matching

use farm_advisor_core::Similarity;

/// The backend used when the caller does not pick one.
pub fn default_similarity() -> Box<dyn Similarity> {
    Box::new(NormalizedLevenshtein)
}

/// Normalized Levenshtein similarity backed by `strsim`.
///
/// Scores land in [0, 1]; identical strings score 1 and fully disjoint
/// strings score 0.
#[derive(Debug, Default, Clone, Copy)]
pub struct NormalizedLevenshtein;

impl Similarity for NormalizedLevenshtein {
    fn score(&self, a: &str, b: &str) -> f32 {
        strsim::normalized_levenshtein(a, b) as f32
    }
}

/// Two-row Levenshtein, normalized by the longer input.
///
/// Kept as an allocation-light alternative backend; produces the same
/// scores as [`NormalizedLevenshtein`].
#[derive(Debug, Default, Clone, Copy)]
pub struct EditDistanceSimilarity;

impl Similarity for EditDistanceSimilarity {
    fn score(&self, a: &str, b: &str) -> f32 {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let max_len = a.len().max(b.len());
        if max_len == 0 {
            return 1.0;
        }
        let dist = edit_distance(&a, &b);
        1.0 - dist as f32 / max_len as f32
    }
}

fn edit_distance(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j] + cost).min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
