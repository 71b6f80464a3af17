//! Pattern extractors for quantities and months
//!
//! Both run over normalized text, so Arabic-Indic digits are already
//! folded to ASCII before any regex sees them.

use farm_advisor_core::{Error, Quantity, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// Matches `<number> <unit>` with optional whitespace in between.
///
/// The unit alternation is built from the lexicon in listing order; the
/// lexicon keeps longer units ahead of their prefixes (ملليلتر before مل)
/// so the regex engine never stops at a shorter shadow.
#[derive(Debug, Clone)]
pub struct QuantityExtractor {
    pattern: Regex,
}

impl QuantityExtractor {
    pub fn new(units: &[String]) -> Result<Self> {
        if units.is_empty() {
            return Err(Error::Config("quantity unit list is empty".into()));
        }
        let alternation = units
            .iter()
            .map(|u| regex::escape(u))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!(r"(\d+(?:\.\d+)?)\s*({alternation})"))
            .map_err(|e| Error::Config(format!("quantity pattern: {e}")))?;
        Ok(Self { pattern })
    }

    /// First quantity in the text, leftmost match wins.
    pub fn extract(&self, normalized: &str) -> Option<Quantity> {
        let caps = self.pattern.captures(normalized)?;
        let value: f64 = caps[1].parse().ok()?;
        Some(Quantity {
            value,
            unit: caps[2].to_string(),
        })
    }
}

static BARE_MONTH: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(1[0-2]|[1-9])\b").unwrap());

/// Resolves month mentions, by name first and bare number second.
#[derive(Debug, Clone)]
pub struct MonthExtractor {
    /// Surface forms in search order; earlier entries win, which keeps
    /// ابريل from being swallowed by the substring اب.
    names: Vec<(String, u8)>,
}

impl MonthExtractor {
    pub fn new(months: &[(String, u8)]) -> Self {
        Self {
            names: months
                .iter()
                .map(|(name, n)| (crate::arabic::normalize(name), *n))
                .collect(),
        }
    }

    pub fn extract(&self, normalized: &str) -> Option<u8> {
        for (name, number) in &self.names {
            if normalized.contains(name.as_str()) {
                return Some(*number);
            }
        }
        BARE_MONTH
            .captures(normalized)
            .and_then(|caps| caps[1].parse().ok())
    }
}
