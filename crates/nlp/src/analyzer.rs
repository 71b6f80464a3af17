//! Message analysis pipeline

use crate::arabic::normalize;
use crate::extract::{MonthExtractor, QuantityExtractor};
use crate::gazetteer::Gazetteer;
use crate::intent::IntentClassifier;
use crate::similarity::default_similarity;
use crate::tokenizer::{TokenizeOptions, Tokenizer};
use farm_advisor_config::DomainConfig;
use farm_advisor_core::{AnalysisResult, Region, Result, Similarity};

/// The full pipeline: normalize, tokenize, recognize entities, classify
/// intent, extract patterns.
///
/// Built once per process from a [`DomainConfig`] and shared read-only
/// across requests; every `analyze` call is independent.
pub struct Analyzer {
    tokenizer: Tokenizer,
    crops: Gazetteer,
    diseases: Gazetteer,
    pests: Gazetteer,
    intents: IntentClassifier,
    quantities: QuantityExtractor,
    months: MonthExtractor,
    similarity: Box<dyn Similarity>,
    fuzzy_floor: f32,
}

impl Analyzer {
    pub fn new(config: &DomainConfig) -> Result<Self> {
        Self::with_similarity(config, default_similarity())
    }

    /// Build with a caller-chosen similarity backend.
    pub fn with_similarity(
        config: &DomainConfig,
        similarity: Box<dyn Similarity>,
    ) -> Result<Self> {
        config.thresholds.validate()?;
        Ok(Self {
            tokenizer: Tokenizer::new(&config.lexicon, config.thresholds.min_stem_len),
            crops: Gazetteer::build(&config.gazetteers.crops)?,
            diseases: Gazetteer::build(&config.gazetteers.diseases)?,
            pests: Gazetteer::build(&config.gazetteers.pests)?,
            intents: IntentClassifier::new(&config.intents, &config.thresholds),
            quantities: QuantityExtractor::new(&config.lexicon.units)?,
            months: MonthExtractor::new(&config.lexicon.months),
            similarity,
            fuzzy_floor: config.thresholds.fuzzy_floor,
        })
    }

    /// Analyze one message for one region. Never fails; unintelligible
    /// input comes back with zero confidence and everything unset.
    pub fn analyze(&self, text: &str, region: Region) -> AnalysisResult {
        let normalized = normalize(text);
        let tokens = self.tokenizer.tokenize(
            &normalized,
            TokenizeOptions {
                remove_stopwords: true,
                strip_affixes: false,
            },
        );

        let stems: Vec<String> = tokens
            .iter()
            .map(|t| self.tokenizer.strip_affixes(t))
            .collect();

        // Entity lookup sees each token twice when stripping changes it,
        // raw form first so an exact raw hit always wins.
        let mut entity_view = tokens.clone();
        for (token, stem) in tokens.iter().zip(&stems) {
            if stem != token {
                entity_view.push(stem.clone());
            }
        }

        let crop = self
            .crops
            .detect(&entity_view, self.similarity.as_ref(), self.fuzzy_floor);
        let disease = self
            .diseases
            .detect(&entity_view, self.similarity.as_ref(), self.fuzzy_floor);
        let pest = self
            .pests
            .detect(&entity_view, self.similarity.as_ref(), self.fuzzy_floor);

        let intent = self.intents.classify_with_stems(&tokens, &stems);
        let quantity = self.quantities.extract(&normalized);
        let month = self.months.extract(&normalized);

        let confidence =
            AnalysisResult::overall_confidence(intent.confidence, &crop, &disease, &pest);

        tracing::debug!(
            %normalized,
            intent = intent.intent.as_deref().unwrap_or("-"),
            confidence,
            "analyzed message"
        );

        AnalysisResult {
            normalized,
            tokens,
            region,
            intent: intent.intent,
            intent_confidence: intent.confidence,
            ranked_intents: intent.ranked,
            crop,
            disease,
            pest,
            quantity,
            month,
            confidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> Analyzer {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .try_init();
        Analyzer::new(&DomainConfig::builtin()).unwrap()
    }

    #[test]
    fn test_planting_question_full_pipeline() {
        let r = analyzer().analyze("متى أزرع الطماطم؟", Region::Med);
        assert_eq!(r.intent.as_deref(), Some("planting_time"));
        assert_eq!(r.crop.value.as_deref(), Some("طماطم"));
        assert_eq!(r.crop.score, 1.0);
        assert_eq!(r.confidence, 1.0);
    }

    #[test]
    fn test_article_stripped_entity_found() {
        // البندورة only matches through the affix-stripped variant.
        let r = analyzer().analyze("البندورة عندي مريضة", Region::Med);
        assert_eq!(r.crop.value.as_deref(), Some("طماطم"));
    }

    #[test]
    fn test_gibberish_zero_confidence() {
        let r = analyzer().analyze("asdf qwerty", Region::Med);
        assert!(r.intent.is_none());
        assert!(!r.crop.is_some());
        assert_eq!(r.confidence, 0.0);
    }

    #[test]
    fn test_quantity_and_month_extracted() {
        let r = analyzer().analyze("هل اسقي 5 لتر في شهر مارس", Region::Med);
        let q = r.quantity.unwrap();
        assert_eq!(q.value, 5.0);
        assert_eq!(q.unit, "لتر");
        assert_eq!(r.month, Some(3));
        assert_eq!(r.intent.as_deref(), Some("irrigation"));
    }

    #[test]
    fn test_disease_and_pest_channels() {
        let r = analyzer().analyze("ورق الطماطم فيه لفحه", Region::Med);
        assert_eq!(r.crop.value.as_deref(), Some("طماطم"));
        assert_eq!(r.disease.value.as_deref(), Some("اللفحة"));

        let r = analyzer().analyze("في ذبابه بيضاء على الخيار", Region::Med);
        assert_eq!(r.pest.value.as_deref(), Some("الذبابة البيضاء"));
    }

    #[test]
    fn test_entity_only_message_is_confident() {
        let r = analyzer().analyze("خيار", Region::Med);
        assert!(r.intent.is_none());
        assert_eq!(r.crop.value.as_deref(), Some("خيار"));
        assert_eq!(r.confidence, 1.0);
    }

    #[test]
    fn test_region_carried_through() {
        let r = analyzer().analyze("متى ازرع قمح", Region::GulfHot);
        assert_eq!(r.region, Region::GulfHot);
    }
}
