//! Gazetteer-based entity recognition

use crate::arabic::normalize;
use farm_advisor_config::EntityTable;
use farm_advisor_core::{EntityMatch, Error, Result, Similarity};
use std::collections::HashMap;

/// Synonym index for one entity category.
///
/// Built once from an [`EntityTable`]; every synonym is normalized at
/// build time so lookups compare normalized-to-normalized. Single-word
/// synonyms go into a reverse map, multiword ones into a phrase list
/// matched against the whole token sequence. Both lists keep table order
/// for deterministic results.
#[derive(Debug, Clone)]
pub struct Gazetteer {
    category: String,
    reverse: HashMap<String, String>,
    singles: Vec<(String, String)>,
    phrases: Vec<(String, String)>,
}

impl Gazetteer {
    /// Index a table. Fails on synonyms that normalize to the empty
    /// string or map to two different canonicals.
    pub fn build(table: &EntityTable) -> Result<Self> {
        let mut reverse: HashMap<String, String> = HashMap::new();
        let mut singles: Vec<(String, String)> = Vec::new();
        let mut phrases: Vec<(String, String)> = Vec::new();

        for entry in &table.entries {
            for synonym in &entry.synonyms {
                let key = normalize(synonym);
                if key.is_empty() {
                    return Err(Error::EmptySynonym {
                        category: table.category.clone(),
                        canonical: entry.canonical.clone(),
                        synonym: synonym.clone(),
                    });
                }
                if key.contains(' ') {
                    if !phrases.iter().any(|(p, _)| p == &key) {
                        phrases.push((key, entry.canonical.clone()));
                    }
                    continue;
                }
                match reverse.get(&key) {
                    Some(existing) if existing != &entry.canonical => {
                        return Err(Error::DuplicateSynonym {
                            category: table.category.clone(),
                            synonym: key,
                            existing: existing.clone(),
                            conflicting: entry.canonical.clone(),
                        });
                    }
                    Some(_) => {
                        tracing::debug!(
                            category = %table.category,
                            synonym = %key,
                            "skipping repeated synonym for the same canonical"
                        );
                    }
                    None => {
                        reverse.insert(key.clone(), entry.canonical.clone());
                        singles.push((key, entry.canonical.clone()));
                    }
                }
            }
        }

        Ok(Self {
            category: table.category.clone(),
            reverse,
            singles,
            phrases,
        })
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Scan tokens for this category. Multiword phrases are tried first
    /// (they are the more specific forms), then single-token synonyms;
    /// any exact hit wins outright with score 1.0. Otherwise the best
    /// fuzzy token-to-synonym pair at or above `fuzzy_floor` is returned.
    /// Earlier tokens and earlier table entries win ties, so detection is
    /// deterministic.
    pub fn detect(
        &self,
        tokens: &[String],
        sim: &dyn Similarity,
        fuzzy_floor: f32,
    ) -> EntityMatch {
        if !self.phrases.is_empty() {
            let joined = format!(" {} ", tokens.join(" "));
            for (phrase, canonical) in &self.phrases {
                if joined.contains(&format!(" {phrase} ")) {
                    return EntityMatch::exact(canonical.clone());
                }
            }
        }

        for token in tokens {
            if let Some(canonical) = self.reverse.get(token.as_str()) {
                return EntityMatch::exact(canonical.clone());
            }
        }

        let mut best = EntityMatch::none();
        for token in tokens {
            for (synonym, canonical) in &self.singles {
                let score = sim.score(token, synonym);
                if score >= fuzzy_floor && score > best.score {
                    best = EntityMatch::fuzzy(canonical.clone(), score);
                }
            }
        }
        best
    }
}
