//! Tunable matcher thresholds
//!
//! The fuzzy acceptance floor and the clarification cutoff are empirically
//! calibrated constants; they are kept configurable rather than hard-coded
//! so a deployment can retune them without a rebuild.

use farm_advisor_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Scoring and policy knobs for the matcher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatcherThresholds {
    /// Minimum similarity for an accepted fuzzy entity match
    #[serde(default = "default_fuzzy_floor")]
    pub fuzzy_floor: f32,

    /// Overall confidence below which clarification buttons are attached
    #[serde(default = "default_clarify_threshold")]
    pub clarify_threshold: f32,

    /// Minimum raw keyword score for an intent to be selected at all
    #[serde(default = "default_intent_accept_min")]
    pub intent_accept_min: f32,

    /// Raw score at which intent confidence saturates to 1.0
    #[serde(default = "default_intent_saturation")]
    pub intent_saturation: f32,

    /// Per-position weight bonus for early keywords
    #[serde(default = "default_position_weight")]
    pub position_weight: f32,

    /// Minimum characters a token must keep after affix stripping
    #[serde(default = "default_min_stem_len")]
    pub min_stem_len: usize,

    /// Maximum clarification buttons per reply (messaging channel limit)
    #[serde(default = "default_max_buttons")]
    pub max_buttons: usize,

    /// Conversational context time-to-live, in seconds
    #[serde(default = "default_context_ttl_secs")]
    pub context_ttl_secs: u64,

    /// Maximum number of live per-user context records
    #[serde(default = "default_context_capacity")]
    pub context_capacity: usize,
}

fn default_fuzzy_floor() -> f32 {
    0.78
}

fn default_clarify_threshold() -> f32 {
    0.45
}

fn default_intent_accept_min() -> f32 {
    1.0
}

fn default_intent_saturation() -> f32 {
    3.0
}

fn default_position_weight() -> f32 {
    0.02
}

fn default_min_stem_len() -> usize {
    3
}

fn default_max_buttons() -> usize {
    6
}

fn default_context_ttl_secs() -> u64 {
    2 * 60 * 60
}

fn default_context_capacity() -> usize {
    10_000
}

impl Default for MatcherThresholds {
    fn default() -> Self {
        Self {
            fuzzy_floor: default_fuzzy_floor(),
            clarify_threshold: default_clarify_threshold(),
            intent_accept_min: default_intent_accept_min(),
            intent_saturation: default_intent_saturation(),
            position_weight: default_position_weight(),
            min_stem_len: default_min_stem_len(),
            max_buttons: default_max_buttons(),
            context_ttl_secs: default_context_ttl_secs(),
            context_capacity: default_context_capacity(),
        }
    }
}

impl MatcherThresholds {
    pub fn context_ttl(&self) -> Duration {
        Duration::from_secs(self.context_ttl_secs)
    }

    /// Reject values outside their documented ranges.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.fuzzy_floor) {
            return Err(Error::Config(format!(
                "fuzzy_floor must be in [0, 1], got {}",
                self.fuzzy_floor
            )));
        }
        if !(0.0..=1.0).contains(&self.clarify_threshold) {
            return Err(Error::Config(format!(
                "clarify_threshold must be in [0, 1], got {}",
                self.clarify_threshold
            )));
        }
        if self.intent_saturation <= 0.0 {
            return Err(Error::Config(format!(
                "intent_saturation must be positive, got {}",
                self.intent_saturation
            )));
        }
        if self.context_capacity == 0 {
            return Err(Error::Config("context_capacity must be non-zero".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let t = MatcherThresholds::default();
        assert_eq!(t.fuzzy_floor, 0.78);
        assert_eq!(t.clarify_threshold, 0.45);
        assert_eq!(t.intent_saturation, 3.0);
        assert_eq!(t.context_ttl(), Duration::from_secs(7200));
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_floor() {
        let t = MatcherThresholds {
            fuzzy_floor: 1.5,
            ..Default::default()
        };
        assert!(t.validate().is_err());
    }

    #[test]
    fn test_partial_deserialization_uses_defaults() {
        let t: MatcherThresholds = serde_json::from_str(r#"{"fuzzy_floor": 0.8}"#).unwrap();
        assert_eq!(t.fuzzy_floor, 0.8);
        assert_eq!(t.clarify_threshold, 0.45);
        assert_eq!(t.max_buttons, 6);
    }
}
