//! Keyword-bank intent classification

use crate::arabic::normalize;
use farm_advisor_config::{IntentBank, MatcherThresholds};
use farm_advisor_core::IntentScore;
use std::collections::HashSet;

/// Classification outcome for one message
#[derive(Debug, Clone, Default)]
pub struct IntentOutcome {
    /// Winning intent, present only when its raw score reached the
    /// acceptance minimum
    pub intent: Option<String>,
    /// Normalized confidence in [0, 1]
    pub confidence: f32,
    /// Every bank with its raw score, descending; zero scores keep bank
    /// declaration order at the tail
    pub ranked: Vec<IntentScore>,
}

/// Position-weighted keyword scorer.
///
/// Each keyword hit contributes `1 + (token_count - position) * weight`,
/// so hits near the front of the message count slightly more. Raw scores
/// saturate into confidence at `intent_saturation`.
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    banks: Vec<(String, HashSet<String>)>,
    accept_min: f32,
    saturation: f32,
    position_weight: f32,
}

impl IntentClassifier {
    /// Keywords are normalized at build time so the bank matches the same
    /// surface forms the tokenizer emits; entries that normalize to
    /// nothing are dropped.
    pub fn new(bank: &IntentBank, thresholds: &MatcherThresholds) -> Self {
        let banks = bank
            .intents
            .iter()
            .map(|entry| {
                let keywords: HashSet<String> = entry
                    .keywords
                    .iter()
                    .filter_map(|kw| {
                        let norm = normalize(kw);
                        if norm.is_empty() {
                            tracing::debug!(intent = %entry.name, keyword = %kw, "keyword normalizes to nothing, dropped");
                            None
                        } else {
                            Some(norm)
                        }
                    })
                    .collect();
                (entry.name.clone(), keywords)
            })
            .collect();
        Self {
            banks,
            accept_min: thresholds.intent_accept_min,
            saturation: thresholds.intent_saturation,
            position_weight: thresholds.position_weight,
        }
    }

    /// Score every bank against the token sequence. The sort is stable,
    /// so equal scores keep bank declaration order and the result is
    /// deterministic.
    pub fn classify(&self, tokens: &[String]) -> IntentOutcome {
        self.classify_with_stems(tokens, tokens)
    }

    /// Like [`classify`](Self::classify), but each position also tries its
    /// affix-stripped stem, so والتسميد hits the تسميد keyword. A position
    /// counts at most once per bank. `stems` must parallel `tokens`.
    pub fn classify_with_stems(&self, tokens: &[String], stems: &[String]) -> IntentOutcome {
        debug_assert_eq!(tokens.len(), stems.len());
        let token_count = tokens.len();
        let mut ranked: Vec<IntentScore> = Vec::new();

        for (name, keywords) in &self.banks {
            let mut score = 0.0f32;
            for (pos, token) in tokens.iter().enumerate() {
                if keywords.contains(token.as_str())
                    || stems
                        .get(pos)
                        .is_some_and(|s| s != token && keywords.contains(s.as_str()))
                {
                    score += 1.0 + (token_count - pos) as f32 * self.position_weight;
                }
            }
            ranked.push(IntentScore {
                intent: name.clone(),
                score,
            });
        }

        ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));

        match ranked.first() {
            Some(top) if top.score >= self.accept_min => IntentOutcome {
                intent: Some(top.intent.clone()),
                confidence: (top.score / self.saturation).min(1.0),
                ranked,
            },
            _ => IntentOutcome {
                intent: None,
                confidence: 0.0,
                ranked,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> IntentClassifier {
        IntentClassifier::new(&IntentBank::builtin(), &MatcherThresholds::default())
    }

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| normalize(w)).collect()
    }

    #[test]
    fn test_planting_question() {
        let out = classifier().classify(&toks(&["متى", "ازرع", "طماطم"]));
        assert_eq!(out.intent.as_deref(), Some("planting_time"));
        assert!(out.confidence > 0.0);
    }

    #[test]
    fn test_no_keywords_no_intent() {
        let out = classifier().classify(&toks(&["طماطم"]));
        assert!(out.intent.is_none());
        assert_eq!(out.confidence, 0.0);
        // Every bank is still ranked, all at zero.
        assert_eq!(out.ranked.len(), IntentBank::builtin().intents.len());
        assert!(out.ranked.iter().all(|s| s.score == 0.0));
    }

    #[test]
    fn test_full_ranking_keeps_bank_order_for_zeros() {
        let out = classifier().classify(&toks(&["ري"]));
        assert_eq!(out.ranked.len(), IntentBank::builtin().intents.len());
        assert_eq!(out.ranked[0].intent, "irrigation");
        // The zero-scored rest stays in declaration order.
        assert_eq!(out.ranked[1].intent, "planting_time");
        assert_eq!(out.ranked[1].score, 0.0);
    }

    #[test]
    fn test_confidence_saturates_at_one() {
        let out = classifier().classify(&toks(&["متى", "موعد", "وقت", "ازرع", "زراعه"]));
        assert_eq!(out.intent.as_deref(), Some("planting_time"));
        assert_eq!(out.confidence, 1.0);
    }

    #[test]
    fn test_more_hits_more_confidence() {
        let c = classifier();
        let one = c.classify(&toks(&["ري"]));
        let two = c.classify(&toks(&["ري", "سقي"]));
        assert!(two.confidence > one.confidence);
    }

    #[test]
    fn test_early_position_weighs_more() {
        let c = classifier();
        let front = c.classify(&toks(&["ري", "طماطم", "حقل"]));
        let back = c.classify(&toks(&["طماطم", "حقل", "ري"]));
        let score = |o: &IntentOutcome| o.ranked[0].score;
        assert!(score(&front) > score(&back));
    }

    #[test]
    fn test_normalized_keyword_matches_diacritized_input() {
        // شكرًا carries a fathatan; the bank entry must still hit.
        let out = classifier().classify(&toks(&["شكرا"]));
        assert_eq!(out.intent.as_deref(), Some("thanks"));
    }

    #[test]
    fn test_stem_variant_hits_keyword() {
        let tokens = toks(&["والتسميد"]);
        let stems = vec![normalize("تسميد")];
        let out = classifier().classify_with_stems(&tokens, &stems);
        assert_eq!(out.intent.as_deref(), Some("fertilization"));
    }

    #[test]
    fn test_ranked_is_descending() {
        let out = classifier().classify(&toks(&["ري", "ري", "حصاد"]));
        for w in out.ranked.windows(2) {
            assert!(w[0].score >= w[1].score);
        }
        assert_eq!(out.intent.as_deref(), Some("irrigation"));
    }
}
