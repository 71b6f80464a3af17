//! Transport-facing reply record
//!
//! The advisory core hands this record to the surrounding transport layer,
//! which renders it into whatever payload the messaging channel needs
//! (plain text vs. quick-reply buttons).

use serde::{Deserialize, Serialize};

/// A quick-reply button suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    pub id: String,
    pub title: String,
}

impl Button {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// Reply produced for a single inbound message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reply {
    /// Advisory text; always non-empty (a help message at worst)
    pub text: String,
    /// Classified intent, `fallback` on the clarification path or
    /// `inferred` when an entity alone resolved the reply
    pub intent: String,
    /// Overall confidence in [0, 1]
    pub confidence: f32,
    pub crop: Option<String>,
    pub disease: Option<String>,
    pub pest: Option<String>,
    /// Clarification options, at most 6; empty when the reply resolved
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<Button>,
}

/// Intent label used when the reply went through the clarification path
pub const INTENT_FALLBACK: &str = "fallback";
/// Intent label used when an entity alone (no intent keywords) resolved it
pub const INTENT_INFERRED: &str = "inferred";
