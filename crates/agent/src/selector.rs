//! Advisory response selection
//!
//! A deterministic decision table over the analysis result and the
//! stored conversational context. Entity-only messages answer the stored
//! intent when one exists; any reply below the clarification threshold
//! carries clarification buttons, and messages nothing can answer get
//! the help text.

use farm_advisor_config::{month_name, CalendarConfig, DomainConfig, MatcherThresholds, ResponseCatalog};
use farm_advisor_core::{
    AnalysisResult, Button, ConversationContext, Reply, INTENT_FALLBACK, INTENT_INFERRED,
};

/// Stateless response picker; safe to share across requests.
pub struct AdvisorySelector {
    calendar: CalendarConfig,
    responses: ResponseCatalog,
    thresholds: MatcherThresholds,
    /// Canonical crops in table order, for clarification buttons
    crop_choices: Vec<String>,
}

impl AdvisorySelector {
    pub fn new(config: &DomainConfig) -> Self {
        Self {
            calendar: config.calendar.clone(),
            responses: config.responses.clone(),
            thresholds: config.thresholds.clone(),
            crop_choices: config
                .gazetteers
                .crops
                .canonicals()
                .map(str::to_string)
                .collect(),
        }
    }

    /// Pick the reply for one analyzed message. Total; the worst case is
    /// the help text with clarification buttons.
    pub fn select(&self, analysis: &AnalysisResult, ctx: &ConversationContext) -> Reply {
        // Entities recognized now beat stored ones; stored ones cover
        // follow-ups like "والبندورة؟" after an irrigation question.
        let crop = analysis.crop.value.as_deref().or(ctx.crop.as_deref());
        let disease = analysis.disease.value.as_deref().or(ctx.disease.as_deref());
        let pest = analysis.pest.value.as_deref().or(ctx.pest.as_deref());
        let has_new_entity =
            analysis.crop.is_some() || analysis.disease.is_some() || analysis.pest.is_some();
        let intent = analysis.intent.as_deref().or(if has_new_entity {
            ctx.intent.as_deref()
        } else {
            None
        });

        let chosen: Option<String> = match intent {
            None => {
                // No intent at all: a disease or pest mention in this
                // message still earns its specific advisory.
                if let Some(d) = analysis.disease.value.as_deref() {
                    Some(self.responses.disease_treat.lookup(Some(d)).to_string())
                } else if let Some(p) = analysis.pest.value.as_deref() {
                    Some(self.responses.pest_control.lookup(Some(p)).to_string())
                } else {
                    None
                }
            }
            Some("greeting") => Some(self.responses.greeting.clone()),
            Some("thanks") => Some(self.responses.thanks.clone()),
            Some("planting_time") => match crop {
                Some(crop) => Some(self.planting_advice(analysis, crop)),
                None => Some(self.responses.ask_crop_for_planting.clone()),
            },
            Some("irrigation") => Some(self.responses.irrigation.lookup(crop).to_string()),
            Some("disease_treat") => {
                Some(self.responses.disease_treat.lookup(disease).to_string())
            }
            Some("pest_control") => Some(self.responses.pest_control.lookup(pest).to_string()),
            Some("fertilization") => {
                Some(self.responses.fertilization.lookup(crop).to_string())
            }
            Some("spacing") => Some(self.responses.spacing.lookup(crop).to_string()),
            Some("harvest_time") => Some(self.responses.harvest_time.lookup(crop).to_string()),
            Some(other) => {
                tracing::warn!(intent = other, "no decision rule for intent");
                None
            }
        };

        // A chosen text always answers; below the clarification cutoff
        // it carries the clarification buttons alongside, and with no
        // text at all the help message takes over entirely.
        match chosen {
            Some(text) => {
                let buttons = if analysis.confidence < self.thresholds.clarify_threshold {
                    self.clarifying_buttons(analysis)
                } else {
                    Vec::new()
                };
                Reply {
                    text,
                    intent: analysis
                        .intent
                        .clone()
                        .unwrap_or_else(|| INTENT_INFERRED.to_string()),
                    confidence: analysis.confidence,
                    crop: crop.map(str::to_string),
                    disease: disease.map(str::to_string),
                    pest: pest.map(str::to_string),
                    buttons,
                }
            }
            None => self.clarification(analysis),
        }
    }

    /// Calendar verdict for planting_time with a known crop.
    fn planting_advice(&self, analysis: &AnalysisResult, crop: &str) -> String {
        let Some(months) = self.calendar.favorable_months(analysis.region, crop) else {
            return self.responses.planting_no_calendar.clone();
        };
        let list = months
            .iter()
            .map(|m| month_name(*m))
            .collect::<Vec<_>>()
            .join("، ");
        match analysis.month {
            Some(m) if months.contains(&m) => {
                format!("نعم، {} مناسب لزراعة {} في منطقتك.", month_name(m), crop)
            }
            Some(m) => format!(
                "شهر {} ليس الأنسب عادةً لزراعة {} في منطقتك. الأشهر المناسبة: {}.",
                month_name(m),
                crop,
                list
            ),
            None => format!("الأشهر المناسبة لزراعة {} في منطقتك: {}.", crop, list),
        }
    }

    /// Help text plus clarification buttons for messages nothing in the
    /// decision table could answer.
    fn clarification(&self, analysis: &AnalysisResult) -> Reply {
        Reply {
            text: self.responses.help.clone(),
            intent: INTENT_FALLBACK.to_string(),
            confidence: analysis.confidence,
            crop: analysis.crop.value.clone(),
            disease: analysis.disease.value.clone(),
            pest: analysis.pest.value.clone(),
            buttons: self.clarifying_buttons(analysis),
        }
    }

    /// Crop choices when no crop was recognized, intent suggestions when
    /// no intent was; never more than `max_buttons`.
    fn clarifying_buttons(&self, analysis: &AnalysisResult) -> Vec<Button> {
        let mut buttons = Vec::new();
        if !analysis.crop.is_some() {
            buttons.extend(self.crop_buttons());
        }
        if analysis.intent.is_none() {
            buttons.extend(
                self.responses
                    .intent_suggestions
                    .iter()
                    .map(|(id, title)| Button::new(id.clone(), title.clone())),
            );
        }
        buttons.truncate(self.thresholds.max_buttons);
        buttons
    }

    fn crop_buttons(&self) -> impl Iterator<Item = Button> + '_ {
        self.crop_choices
            .iter()
            .take(self.thresholds.max_buttons)
            .map(|crop| Button::new(format!("crop_{crop}"), crop.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use farm_advisor_core::Region;
    use farm_advisor_nlp::Analyzer;

    fn setup() -> (Analyzer, AdvisorySelector) {
        let config = DomainConfig::builtin();
        (
            Analyzer::new(&config).unwrap(),
            AdvisorySelector::new(&config),
        )
    }

    fn select(text: &str, ctx: &ConversationContext) -> Reply {
        let (analyzer, selector) = setup();
        let analysis = analyzer.analyze(text, ctx.region);
        selector.select(&analysis, ctx)
    }

    #[test]
    fn test_greeting_keeps_text_and_adds_buttons_below_threshold() {
        // A bare greeting scores one keyword, well under the cutoff; the
        // canned text still answers but clarification buttons ride along.
        let reply = select("مرحبا", &ConversationContext::default());
        assert_eq!(reply.intent, "greeting");
        assert!(reply.text.contains("أهلًا"));
        assert!(reply.confidence < 0.45);
        assert!(!reply.buttons.is_empty());
        assert!(reply.buttons.len() <= 6);
    }

    #[test]
    fn test_planting_months_listed() {
        let reply = select("متى ازرع الطماطم", &ConversationContext::default());
        assert_eq!(reply.intent, "planting_time");
        assert_eq!(reply.crop.as_deref(), Some("طماطم"));
        assert!(reply.text.contains("مارس"));
        assert!(reply.text.contains("ابريل"));
        assert!(reply.buttons.is_empty());
    }

    #[test]
    fn test_planting_month_verdict_yes() {
        let reply = select("هل ازرع الطماطم في مارس", &ConversationContext::default());
        assert!(reply.text.starts_with("نعم"));
    }

    #[test]
    fn test_planting_month_verdict_no() {
        let reply = select("هل ازرع الطماطم في يونيو", &ConversationContext::default());
        assert!(reply.text.contains("ليس الأنسب"));
        assert!(reply.text.contains("مارس"));
    }

    #[test]
    fn test_planting_without_crop_asks_without_buttons() {
        // The ask-crop text resolves above the threshold, so no buttons.
        let reply = select("متى انسب وقت للزراعه", &ConversationContext::default());
        assert_eq!(reply.intent, "planting_time");
        assert!(reply.confidence >= 0.45);
        assert!(reply.text.contains("المحصول"));
        assert!(reply.buttons.is_empty());
    }

    #[test]
    fn test_crop_missing_from_calendar() {
        let reply = select("متى ازرع النعناع", &ConversationContext::default());
        assert_eq!(reply.intent, "planting_time");
        assert!(reply.text.contains("منطقتك"));
        assert!(!reply.text.contains("الأشهر المناسبة لزراعة"));
    }

    #[test]
    fn test_pest_only_message_inferred() {
        let reply = select("عندي توتا", &ConversationContext::default());
        assert_eq!(reply.intent, INTENT_INFERRED);
        assert_eq!(reply.pest.as_deref(), Some("توتا ابسولوتا"));
        assert!(reply.text.contains("مصائد"));
    }

    #[test]
    fn test_crop_follow_up_uses_stored_intent() {
        let ctx = ConversationContext {
            intent: Some("irrigation".into()),
            ..Default::default()
        };
        let reply = select("البندوره", &ctx);
        assert_eq!(reply.intent, INTENT_INFERRED);
        assert_eq!(reply.crop.as_deref(), Some("طماطم"));
        assert!(reply.text.contains("ري"));
    }

    #[test]
    fn test_gibberish_clarifies() {
        let reply = select("xyzxyz", &ConversationContext::default());
        assert_eq!(reply.intent, INTENT_FALLBACK);
        assert_eq!(reply.confidence, 0.0);
        assert!(!reply.buttons.is_empty());
        assert!(reply.buttons.len() <= 6);
    }

    #[test]
    fn test_single_weak_keyword_answers_with_buttons() {
        // One keyword hit normalizes well below the clarify threshold:
        // the generic irrigation text answers, buttons attached.
        let reply = select("ري", &ConversationContext::default());
        assert_eq!(reply.intent, "irrigation");
        assert!(reply.confidence < 0.45);
        assert!(!reply.buttons.is_empty());
        assert!(reply.buttons.len() <= 6);
        assert_eq!(reply.buttons[0].id, "crop_طماطم");
    }

    #[test]
    fn test_resolved_reply_never_carries_buttons() {
        let confident = [
            "متى ازرع الطماطم",
            "كيف اسقي الخيار",
            "عندي توتا",
        ];
        for msg in confident {
            let reply = select(msg, &ConversationContext::default());
            assert!(reply.confidence >= 0.45, "{msg}");
            assert!(reply.buttons.is_empty(), "{msg} carried buttons");
        }
    }

    #[test]
    fn test_confident_irrigation_specific() {
        let reply = select("كيف اسقي الخيار", &ConversationContext::default());
        assert_eq!(reply.intent, "irrigation");
        assert_eq!(reply.crop.as_deref(), Some("خيار"));
        assert!(reply.text.contains("رطوبة"));
        assert!(reply.buttons.is_empty());
    }

    #[test]
    fn test_region_changes_calendar() {
        let ctx = ConversationContext {
            region: Region::GulfHot,
            ..Default::default()
        };
        let reply = select("متى ازرع الطماطم", &ctx);
        assert!(reply.text.contains("سبتمبر"));
        assert!(!reply.text.contains("مارس"));
    }
}
