//! Shared lexicon: stopwords, affixes, month names, unit tokens
//!
//! Month entries are searched in listing order; more specific names must
//! come before short ones that could appear as substrings (e.g. ابريل
//! before اب).

use serde::{Deserialize, Serialize};

/// Fixed word lists consumed by the tokenizer and the pattern extractors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    /// Function words dropped before matching
    pub stopwords: Vec<String>,
    /// Strippable prefixes, longest first (article compounds only —
    /// stripping bare consonants would corrupt roots like بطاطا)
    pub prefixes: Vec<String>,
    /// Strippable suffixes, longest first
    pub suffixes: Vec<String>,
    /// Month surface forms in search order, with their month numbers
    pub months: Vec<(String, u8)>,
    /// Unit tokens accepted after a quantity, longest first so the regex
    /// alternation never shadows a longer unit with its prefix
    pub units: Vec<String>,
}

impl Lexicon {
    pub fn builtin() -> Self {
        Self {
            stopwords: to_strings(&[
                "في", "على", "عن", "مع", "الى", "إلى", "من", "ال", "و", "يا", "هل", "ما",
                "ماذا", "كيف", "وين", "هو", "هي", "هم", "هذا", "هذه", "ذلك", "تلك",
                "هناك", "هنا", "انا", "انت", "انتي", "كان", "كانت", "يكون", "يكونوا",
                "ثم", "اي", "أو", "او", "لا", "نعم",
            ]),
            prefixes: to_strings(&["وال", "بال", "كال", "فال", "لل", "ال"]),
            suffixes: to_strings(&["ها", "هم", "كم", "نا", "ات", "ون", "ين"]),
            months: vec![
                // Double-digit شهر forms first; شهر1 is a substring of
                // شهر10 through شهر12.
                ("شهر10".into(), 10),
                ("شهر11".into(), 11),
                ("شهر12".into(), 12),
                ("يناير".into(), 1),
                ("كانون الثاني".into(), 1),
                ("جانفي".into(), 1),
                ("شهر1".into(), 1),
                ("فبراير".into(), 2),
                ("شباط".into(), 2),
                ("شهر2".into(), 2),
                ("مارس".into(), 3),
                ("اذار".into(), 3),
                ("آذار".into(), 3),
                ("شهر3".into(), 3),
                ("ابريل".into(), 4),
                ("أبريل".into(), 4),
                ("نيسان".into(), 4),
                ("افريل".into(), 4),
                ("شهر4".into(), 4),
                ("مايو".into(), 5),
                ("ايار".into(), 5),
                ("شهر5".into(), 5),
                ("يونيو".into(), 6),
                ("حزيران".into(), 6),
                ("شهر6".into(), 6),
                ("يوليو".into(), 7),
                ("تموز".into(), 7),
                ("شهر7".into(), 7),
                ("اغسطس".into(), 8),
                ("أغسطس".into(), 8),
                ("اب".into(), 8),
                ("آب".into(), 8),
                ("شهر8".into(), 8),
                ("سبتمبر".into(), 9),
                ("ايلول".into(), 9),
                ("أيلول".into(), 9),
                ("شهر9".into(), 9),
                ("اكتوبر".into(), 10),
                ("أكتوبر".into(), 10),
                ("تشرين الاول".into(), 10),
                ("نوفمبر".into(), 11),
                ("تشرين الثاني".into(), 11),
                ("ديسمبر".into(), 12),
                ("كانون الاول".into(), 12),
            ],
            units: to_strings(&[
                "ملليلتر", "ملل", "هكتار", "فدان", "كجم", "لتر", "متر", "جم", "مل", "سم",
                "غ",
            ]),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units_longest_first_among_shared_prefixes() {
        let lex = Lexicon::builtin();
        let pos = |u: &str| lex.units.iter().position(|x| x == u).unwrap();
        // ملليلتر and ملل must come before مل or the alternation would
        // never reach them.
        assert!(pos("ملليلتر") < pos("مل"));
        assert!(pos("ملل") < pos("مل"));
    }

    #[test]
    fn test_specific_month_names_before_short_aab() {
        let lex = Lexicon::builtin();
        let pos = |m: &str| lex.months.iter().position(|(n, _)| n == m).unwrap();
        assert!(pos("ابريل") < pos("اب"));
        assert!(pos("شهر11") < pos("شهر1"));
    }

    #[test]
    fn test_affixes_longest_first() {
        let lex = Lexicon::builtin();
        for w in lex.prefixes.windows(2) {
            assert!(w[0].chars().count() >= w[1].chars().count());
        }
        for w in lex.suffixes.windows(2) {
            assert!(w[0].chars().count() >= w[1].chars().count());
        }
    }
}
