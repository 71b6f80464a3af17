//! Climate region profiles
//!
//! Planting calendars are keyed by a closed set of climate profiles. An
//! unrecognized region identifier always falls back to the default profile
//! rather than failing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Climate profile used to select a planting calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    /// Mediterranean coastal climate (default profile)
    #[default]
    Med,
    /// Hot desert / Gulf climate
    GulfHot,
    /// Highland / cooler climate
    HighlandCool,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::Med, Region::GulfHot, Region::HighlandCool];

    /// Parse a region identifier, falling back to the default profile
    /// for anything unrecognized.
    pub fn parse_or_default(s: &str) -> Self {
        match s.trim() {
            "med" => Region::Med,
            "gulf_hot" => Region::GulfHot,
            "highland_cool" => Region::HighlandCool,
            _ => Region::default(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Med => "med",
            Region::GulfHot => "gulf_hot",
            Region::HighlandCool => "highland_cool",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known() {
        assert_eq!(Region::parse_or_default("med"), Region::Med);
        assert_eq!(Region::parse_or_default("gulf_hot"), Region::GulfHot);
        assert_eq!(Region::parse_or_default("highland_cool"), Region::HighlandCool);
    }

    #[test]
    fn test_parse_unknown_falls_back() {
        assert_eq!(Region::parse_or_default("sahara"), Region::Med);
        assert_eq!(Region::parse_or_default(""), Region::Med);
        assert_eq!(Region::parse_or_default("  med  "), Region::Med);
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&Region::GulfHot).unwrap();
        assert_eq!(json, "\"gulf_hot\"");
        let back: Region = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Region::GulfHot);
    }
}
