//! Error types
//!
//! Errors only occur while building the immutable domain tables at startup.
//! Once construction succeeds, every analysis operation is total over its
//! input domain and cannot fail.

use thiserror::Error;

/// Errors raised while constructing gazetteers and keyword banks
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The same normalized synonym is claimed by two different canonicals.
    #[error("synonym '{synonym}' in the {category} gazetteer maps to both '{existing}' and '{conflicting}'")]
    DuplicateSynonym {
        category: String,
        synonym: String,
        existing: String,
        conflicting: String,
    },

    /// A synonym normalizes to an empty string and could never match.
    #[error("synonym '{synonym}' for '{canonical}' in the {category} gazetteer normalizes to an empty string")]
    EmptySynonym {
        category: String,
        canonical: String,
        synonym: String,
    },

    /// Invalid configuration value (bad threshold range, empty bank, ...).
    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
