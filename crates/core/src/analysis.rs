//! Per-message analysis output
//!
//! `AnalysisResult` is created fresh for every message and never persisted.

use crate::region::Region;
use serde::{Deserialize, Serialize};

/// A recognized entity with its match confidence
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityMatch {
    /// Canonical form, or `None` when nothing was recognized
    pub value: Option<String>,
    /// Confidence in [0, 1]; 1.0 for exact synonym hits, 0.0 for no match
    pub score: f32,
}

impl EntityMatch {
    pub fn none() -> Self {
        Self::default()
    }

    /// An exact synonym-table hit, always scored 1.0.
    pub fn exact(canonical: impl Into<String>) -> Self {
        Self {
            value: Some(canonical.into()),
            score: 1.0,
        }
    }

    pub fn fuzzy(canonical: impl Into<String>, score: f32) -> Self {
        Self {
            value: Some(canonical.into()),
            score,
        }
    }

    pub fn is_some(&self) -> bool {
        self.value.is_some()
    }
}

/// A quantity with its unit token, e.g. `5 لتر`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub value: f64,
    pub unit: String,
}

/// One entry of the ranked intent list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentScore {
    pub intent: String,
    /// Raw position-weighted keyword score (not normalized)
    pub score: f32,
}

/// Everything the pipeline extracted from a single message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Normalized text the extractors ran over
    pub normalized: String,
    /// Tokens after stopword removal, input order preserved
    pub tokens: Vec<String>,
    /// Region the analysis was performed for
    pub region: Region,
    /// Best intent, if any keyword scored at least the acceptance minimum
    pub intent: Option<String>,
    /// Normalized intent confidence in [0, 1]
    pub intent_confidence: f32,
    /// All intents ranked by raw score, descending
    pub ranked_intents: Vec<IntentScore>,
    pub crop: EntityMatch,
    pub disease: EntityMatch,
    pub pest: EntityMatch,
    pub quantity: Option<Quantity>,
    /// Calendar month 1..=12
    pub month: Option<u8>,
    /// Max over intent and entity confidences
    pub confidence: f32,
}

impl AnalysisResult {
    /// Overall confidence: the strongest single signal across intent and
    /// the three entity categories.
    pub fn overall_confidence(
        intent_confidence: f32,
        crop: &EntityMatch,
        disease: &EntityMatch,
        pest: &EntityMatch,
    ) -> f32 {
        intent_confidence
            .max(crop.score)
            .max(disease.score)
            .max(pest.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overall_confidence_is_max() {
        let crop = EntityMatch::exact("طماطم");
        let none = EntityMatch::none();
        assert_eq!(
            AnalysisResult::overall_confidence(0.3, &crop, &none, &none),
            1.0
        );
        assert_eq!(
            AnalysisResult::overall_confidence(0.3, &none, &none, &none),
            0.3
        );
    }

    #[test]
    fn test_entity_match_constructors() {
        assert!(!EntityMatch::none().is_some());
        let m = EntityMatch::fuzzy("خيار", 0.8);
        assert!(m.is_some());
        assert_eq!(m.score, 0.8);
    }
}
