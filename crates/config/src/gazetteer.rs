//! Entity gazetteer tables
//!
//! Each category maps canonical names to their known surface-form synonyms,
//! including common misspellings and dialect variants. Synonyms are stored
//! as written; the recognizer normalizes them when it builds its reverse
//! index, and rejects tables where a synonym collapses to nothing or is
//! claimed by two canonicals.

use serde::{Deserialize, Serialize};

/// One canonical entity and its surface forms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityEntry {
    pub canonical: String,
    pub synonyms: Vec<String>,
}

impl EntityEntry {
    pub fn new(canonical: &str, synonyms: &[&str]) -> Self {
        Self {
            canonical: canonical.to_string(),
            synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// A full gazetteer for one entity category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityTable {
    /// Category label, used in diagnostics and button ids
    pub category: String,
    /// Entries in listing order; the first entries feed clarification buttons
    pub entries: Vec<EntityEntry>,
}

impl EntityTable {
    pub fn canonicals(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.canonical.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The three entity categories the matcher recognizes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GazetteerConfig {
    pub crops: EntityTable,
    pub diseases: EntityTable,
    pub pests: EntityTable,
}

impl GazetteerConfig {
    /// Builtin Arabic tables. Synonym lists include the informal and
    /// misspelled forms farmers actually type.
    pub fn builtin() -> Self {
        Self {
            crops: EntityTable {
                category: "crop".to_string(),
                entries: vec![
                    EntityEntry::new("طماطم", &["طماطم", "بندوره", "بندورة"]),
                    EntityEntry::new("خيار", &["خيار"]),
                    EntityEntry::new("بطاطا", &["بطاطا", "بطاطس"]),
                    EntityEntry::new("قمح", &["قمح", "حنطه", "حنطة"]),
                    EntityEntry::new("فلفل", &["فلفل", "فليفله", "فليفلة"]),
                    EntityEntry::new("باذنجان", &["باذنجان", "بيتنجان"]),
                    EntityEntry::new("بصل", &["بصل"]),
                    EntityEntry::new("ثوم", &["ثوم"]),
                    EntityEntry::new("كوسا", &["كوسا", "كوسه"]),
                    EntityEntry::new("فاصوليا", &["فاصوليا", "لوبيا"]),
                    EntityEntry::new("ذره", &["ذره", "ذرة", "درة"]),
                    EntityEntry::new("نعناع", &["نعناع", "نعنع"]),
                ],
            },
            diseases: EntityTable {
                category: "disease".to_string(),
                entries: vec![
                    EntityEntry::new(
                        "اللفحة",
                        &[
                            "لفحه",
                            "اللفحه",
                            "اللفحة",
                            "لفحة مبكرة",
                            "لفحة متاخرة",
                            "لفحه مبكره",
                            "لفحه متاخره",
                        ],
                    ),
                    EntityEntry::new(
                        "البياض الدقيقي",
                        &["البياض", "بياض دقيقي", "البياض الدقيقي"],
                    ),
                    EntityEntry::new("البياض الزغبي", &["البياض الزغبي", "زغبي"]),
                    EntityEntry::new("الذبول", &["ذبول", "الذبول", "ذبول فطري"]),
                ],
            },
            pests: EntityTable {
                category: "pest".to_string(),
                entries: vec![
                    EntityEntry::new("المن", &["من", "المن", "قمل نباتي"]),
                    EntityEntry::new("الذبابة البيضاء", &["ذبابة بيضاء", "الذبابة البيضاء"]),
                    EntityEntry::new("التربس", &["تربس"]),
                    EntityEntry::new("حافرة الاوراق", &["حافرة الورق", "حافرة الاوراق"]),
                    EntityEntry::new("توتا ابسولوتا", &["توتا", "توتا ابسولوتا"]),
                    EntityEntry::new("دودة ورق القطن", &["دودة ورق القطن"]),
                ],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_shape() {
        let g = GazetteerConfig::builtin();
        assert_eq!(g.crops.len(), 12);
        assert_eq!(g.diseases.len(), 4);
        assert_eq!(g.pests.len(), 6);
        assert_eq!(g.crops.category, "crop");
    }

    #[test]
    fn test_every_canonical_is_its_own_synonym_or_listed() {
        // Every entry carries at least one synonym.
        let g = GazetteerConfig::builtin();
        for table in [&g.crops, &g.diseases, &g.pests] {
            for entry in &table.entries {
                assert!(
                    !entry.synonyms.is_empty(),
                    "{} has no synonyms",
                    entry.canonical
                );
            }
        }
    }
}
