//! Arabic analysis pipeline for the farm advisory matcher
//!
//! This crate turns a raw user message into an [`AnalysisResult`]:
//! - **Normalization**: diacritics, tatweel, letter variants, Arabizi
//!   digit transliteration, de-elongation ([`arabic::normalize`])
//! - **Tokenization**: whitespace split, affix stripping, stopwords
//! - **Entity recognition**: exact-then-fuzzy gazetteer lookup for
//!   crops, diseases and pests
//! - **Pattern extraction**: quantity + unit, calendar month
//! - **Intent classification**: position-weighted keyword scoring
//!
//! Everything is built once from `farm-advisor-config` tables and is
//! immutable and `Send + Sync` afterwards; `analyze` is a pure function
//! over that shared state.
//!
//! # Example
//!
//! ```
//! use farm_advisor_config::DomainConfig;
//! use farm_advisor_core::Region;
//! use farm_advisor_nlp::Analyzer;
//!
//! let analyzer = Analyzer::new(&DomainConfig::builtin()).unwrap();
//! let result = analyzer.analyze("متى ازرع الطماطم؟", Region::Med);
//! assert_eq!(result.intent.as_deref(), Some("planting_time"));
//! assert_eq!(result.crop.value.as_deref(), Some("طماطم"));
//! ```

pub mod analyzer;
pub mod arabic;
pub mod extract;
pub mod gazetteer;
pub mod intent;
pub mod similarity;
pub mod tokenizer;

pub use analyzer::Analyzer;
pub use arabic::normalize;
pub use extract::{MonthExtractor, QuantityExtractor};
pub use gazetteer::Gazetteer;
pub use intent::{IntentClassifier, IntentOutcome};
pub use similarity::{default_similarity, EditDistanceSimilarity, NormalizedLevenshtein};
pub use tokenizer::{TokenizeOptions, Tokenizer};

pub use farm_advisor_core::{AnalysisResult, EntityMatch, Quantity, Similarity};
