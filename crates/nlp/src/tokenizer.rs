//! Tokenization with affix stripping and stopword removal

use crate::arabic::normalize;
use farm_advisor_config::Lexicon;
use std::collections::HashSet;

/// Per-call tokenization switches
#[derive(Debug, Clone, Copy)]
pub struct TokenizeOptions {
    pub remove_stopwords: bool,
    pub strip_affixes: bool,
}

impl Default for TokenizeOptions {
    fn default() -> Self {
        Self {
            remove_stopwords: true,
            strip_affixes: false,
        }
    }
}

/// Whitespace tokenizer over normalized text
///
/// Affix stripping removes at most one known prefix and one known suffix
/// per token, longest candidate first, and only when the remaining stem
/// keeps at least `min_stem_len` characters — short roots like بصل must
/// never be eroded.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    stopwords: HashSet<String>,
    prefixes: Vec<String>,
    suffixes: Vec<String>,
    min_stem_len: usize,
}

impl Tokenizer {
    pub fn new(lexicon: &Lexicon, min_stem_len: usize) -> Self {
        Self {
            stopwords: lexicon.stopwords.iter().map(|s| normalize(s)).collect(),
            prefixes: lexicon.prefixes.clone(),
            suffixes: lexicon.suffixes.clone(),
            min_stem_len,
        }
    }

    /// Normalize and split into tokens. Order preserved, repeats allowed,
    /// never fails; garbage input yields an empty sequence.
    pub fn tokenize(&self, text: &str, opts: TokenizeOptions) -> Vec<String> {
        normalize(text)
            .split_whitespace()
            .map(|tok| {
                if opts.strip_affixes {
                    self.strip_affixes(tok)
                } else {
                    tok.to_string()
                }
            })
            .filter(|tok| !opts.remove_stopwords || !self.stopwords.contains(tok))
            .collect()
    }

    /// Strip one prefix and one suffix, guarding the minimum stem length.
    pub fn strip_affixes(&self, token: &str) -> String {
        let mut stem = token;

        for prefix in &self.prefixes {
            if let Some(rest) = stem.strip_prefix(prefix.as_str()) {
                if rest.chars().count() >= self.min_stem_len {
                    stem = rest;
                }
                break;
            }
        }

        for suffix in &self.suffixes {
            if let Some(rest) = stem.strip_suffix(suffix.as_str()) {
                if rest.chars().count() >= self.min_stem_len {
                    stem = rest;
                }
                break;
            }
        }

        stem.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenizer() -> Tokenizer {
        Tokenizer::new(&Lexicon::builtin(), 3)
    }

    #[test]
    fn test_basic_split() {
        let toks = tokenizer().tokenize(
            "متى ازرع طماطم",
            TokenizeOptions {
                remove_stopwords: false,
                strip_affixes: false,
            },
        );
        // متى normalizes to متي before the split.
        assert_eq!(toks, vec!["متي", "ازرع", "طماطم"]);
    }

    #[test]
    fn test_stopword_removal() {
        let toks = tokenizer().tokenize("هل في مشكلة بالخيار", TokenizeOptions::default());
        assert!(!toks.contains(&"هل".to_string()));
        assert!(!toks.contains(&"في".to_string()));
        assert!(toks.contains(&"مشكله".to_string()));
    }

    #[test]
    fn test_empty_and_garbage_input() {
        let t = tokenizer();
        assert!(t.tokenize("", TokenizeOptions::default()).is_empty());
        assert!(t.tokenize("?!...", TokenizeOptions::default()).is_empty());
    }

    #[test]
    fn test_strip_article_prefix() {
        let t = tokenizer();
        assert_eq!(t.strip_affixes("الطماطم"), "طماطم");
        assert_eq!(t.strip_affixes("والخيار"), "خيار");
        assert_eq!(t.strip_affixes("للبصل"), "بصل");
    }

    #[test]
    fn test_min_stem_guard() {
        let t = tokenizer();
        // المن → من would leave only 2 chars; the article stays.
        assert_eq!(t.strip_affixes("المن"), "المن");
    }

    #[test]
    fn test_suffix_strip() {
        let t = tokenizer();
        assert_eq!(t.strip_affixes("شتلات"), "شتل");
        assert_eq!(t.strip_affixes("مزروعات"), "مزروع");
    }

    #[test]
    fn test_order_and_repeats_preserved() {
        let toks = tokenizer().tokenize(
            "ري ري الخيار",
            TokenizeOptions {
                remove_stopwords: true,
                strip_affixes: false,
            },
        );
        assert_eq!(toks, vec!["ري", "ري", "الخيار"]);
    }
}
