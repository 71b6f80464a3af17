//! Domain configuration for the farm advisory matcher
//!
//! All domain knowledge lives here as immutable data, constructed once at
//! startup and shared read-only with the analysis pipeline:
//! - Gazetteers: crop / disease / pest synonym tables
//! - Intent keyword banks (order is the documented tie-break order)
//! - Lexicon: stopwords, affix lists, month names, unit tokens
//! - Region planting calendars
//! - Canned Arabic advisory responses
//! - Tunable thresholds (fuzzy floor, clarification cutoff, TTL, ...)
//!
//! Thresholds can be overridden from a TOML file and `FARM_ADVISOR__*`
//! environment variables via [`load_settings`].

pub mod calendar;
pub mod gazetteer;
pub mod intents;
pub mod lexicon;
pub mod responses;
pub mod settings;
pub mod thresholds;

pub use calendar::{month_name, CalendarConfig};
pub use gazetteer::{EntityEntry, EntityTable, GazetteerConfig};
pub use intents::{IntentBank, IntentKeywords};
pub use lexicon::Lexicon;
pub use responses::{KeyedResponses, ResponseCatalog};
pub use settings::{load_settings, Settings};
pub use thresholds::MatcherThresholds;

/// Everything the pipeline and selector need, bundled
#[derive(Debug, Clone)]
pub struct DomainConfig {
    pub gazetteers: GazetteerConfig,
    pub intents: IntentBank,
    pub lexicon: Lexicon,
    pub calendar: CalendarConfig,
    pub responses: ResponseCatalog,
    pub thresholds: MatcherThresholds,
}

impl DomainConfig {
    /// The builtin Arabic farming domain.
    pub fn builtin() -> Self {
        Self {
            gazetteers: GazetteerConfig::builtin(),
            intents: IntentBank::builtin(),
            lexicon: Lexicon::builtin(),
            calendar: CalendarConfig::builtin(),
            responses: ResponseCatalog::builtin(),
            thresholds: MatcherThresholds::default(),
        }
    }

    /// Builtin domain with thresholds taken from loaded settings.
    pub fn with_thresholds(thresholds: MatcherThresholds) -> Self {
        Self {
            thresholds,
            ..Self::builtin()
        }
    }
}

impl Default for DomainConfig {
    fn default() -> Self {
        Self::builtin()
    }
}
