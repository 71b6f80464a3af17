//! Conversational context records
//!
//! One record per user, carrying region and the last recognized entities
//! across turns. The store that owns these records lives in the agent
//! crate; this module only defines the record and its merge-patch.

use crate::region::Region;
use serde::{Deserialize, Serialize};

/// Per-user short-lived conversational state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversationContext {
    pub region: Region,
    pub crop: Option<String>,
    pub intent: Option<String>,
    pub disease: Option<String>,
    pub pest: Option<String>,
}

impl ConversationContext {
    /// Apply a merge-patch: only fields present in the patch change.
    pub fn apply(&mut self, patch: &ContextPatch) {
        if let Some(region) = patch.region {
            self.region = region;
        }
        if let Some(crop) = &patch.crop {
            self.crop = Some(crop.clone());
        }
        if let Some(intent) = &patch.intent {
            self.intent = Some(intent.clone());
        }
        if let Some(disease) = &patch.disease {
            self.disease = Some(disease.clone());
        }
        if let Some(pest) = &patch.pest {
            self.pest = Some(pest.clone());
        }
    }
}

/// Partial update for a `ConversationContext`; `None` fields are left alone
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContextPatch {
    pub region: Option<Region>,
    pub crop: Option<String>,
    pub intent: Option<String>,
    pub disease: Option<String>,
    pub pest: Option<String>,
}

impl ContextPatch {
    pub fn is_empty(&self) -> bool {
        self.region.is_none()
            && self.crop.is_none()
            && self.intent.is_none()
            && self.disease.is_none()
            && self.pest.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_patch_keeps_unset_fields() {
        let mut ctx = ConversationContext {
            region: Region::GulfHot,
            crop: Some("خيار".into()),
            ..Default::default()
        };
        ctx.apply(&ContextPatch {
            intent: Some("irrigation".into()),
            ..Default::default()
        });
        assert_eq!(ctx.region, Region::GulfHot);
        assert_eq!(ctx.crop.as_deref(), Some("خيار"));
        assert_eq!(ctx.intent.as_deref(), Some("irrigation"));
    }

    #[test]
    fn test_empty_patch() {
        assert!(ContextPatch::default().is_empty());
        let patch = ContextPatch {
            crop: Some("قمح".into()),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }
}
