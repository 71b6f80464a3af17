//! Core types for the farm advisory matcher
//!
//! This crate provides the types shared across all other crates:
//! - Analysis output types (`AnalysisResult`, `EntityMatch`, `Quantity`)
//! - The transport-facing reply record (`Reply`, `Button`)
//! - Region profiles and conversational context records
//! - The `Similarity` capability trait for fuzzy matching backends
//! - Error types (build-time only; the analysis path is total)

pub mod analysis;
pub mod context;
pub mod error;
pub mod region;
pub mod reply;
pub mod traits;

pub use analysis::{AnalysisResult, EntityMatch, IntentScore, Quantity};
pub use context::{ContextPatch, ConversationContext};
pub use error::{Error, Result};
pub use region::Region;
pub use reply::{Button, Reply, INTENT_FALLBACK, INTENT_INFERRED};
pub use traits::Similarity;
