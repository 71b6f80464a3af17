//! Intent keyword banks
//!
//! Each intent carries an ordered list of trigger tokens. Bank order is
//! significant: when two intents tie on score, the one listed first wins,
//! a deliberate deterministic tie-break.

use serde::{Deserialize, Serialize};

/// One intent and its trigger tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentKeywords {
    pub name: String,
    pub keywords: Vec<String>,
}

impl IntentKeywords {
    pub fn new(name: &str, keywords: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// The full, ordered bank of intents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentBank {
    pub intents: Vec<IntentKeywords>,
}

impl IntentBank {
    /// Builtin Arabic banks. Spelling variants (with and without hamza or
    /// ta marbuta) are listed explicitly; the classifier folds them through
    /// the normalizer at build time.
    pub fn builtin() -> Self {
        Self {
            intents: vec![
                IntentKeywords::new(
                    "planting_time",
                    &[
                        "متى", "امتى", "وقت", "موعد", "ازرع", "زراعه", "زراعة", "مواعيد",
                        "شتل", "شتله", "شتلة", "غرس",
                    ],
                ),
                IntentKeywords::new(
                    "irrigation",
                    &["ري", "اسقي", "سقي", "ارو", "سقاية", "مياه", "ماء", "رش", "رشاش"],
                ),
                IntentKeywords::new(
                    "disease_treat",
                    &[
                        "علاج", "اعالج", "حل", "مكافحه", "مكافحة", "مرض", "امراض", "اعراض",
                        "اللفحه", "البياض", "الذبول", "فطري", "وقايه", "وقاية", "اصابه",
                        "اصابة",
                    ],
                ),
                IntentKeywords::new(
                    "pest_control",
                    &[
                        "حشره", "حشرة", "افات", "آفات", "آفه", "افه", "مكافحة", "رش",
                        "بيولوجي", "تربس", "من",
                    ],
                ),
                IntentKeywords::new(
                    "fertilization",
                    &["تسميد", "سماد", "بوتاسيوم", "فوسفور", "نيتروجين", "كومبوست"],
                ),
                IntentKeywords::new(
                    "spacing",
                    &["مسافه", "مسافة", "تباعد", "بين", "خط", "سطر", "شتلة", "شتلات"],
                ),
                IntentKeywords::new("harvest_time", &["حصاد", "حصد", "نضج", "قطف"]),
                IntentKeywords::new(
                    "greeting",
                    &["مرحبا", "مرحباً", "اهلا", "أهلا", "سلام", "هاي", "هلو"],
                ),
                IntentKeywords::new("thanks", &["شكرا", "شكرًا", "مشكور", "تسلم"]),
            ],
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.intents.iter().map(|i| i.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_order() {
        let bank = IntentBank::builtin();
        let names: Vec<&str> = bank.names().collect();
        assert_eq!(names.first(), Some(&"planting_time"));
        assert_eq!(names.last(), Some(&"thanks"));
        assert_eq!(names.len(), 9);
    }

    #[test]
    fn test_no_empty_banks() {
        for intent in &IntentBank::builtin().intents {
            assert!(!intent.keywords.is_empty(), "{} is empty", intent.name);
        }
    }
}
