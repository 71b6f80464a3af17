//! Top-level advisory entry point

use crate::context::ContextStore;
use crate::selector::AdvisorySelector;
use farm_advisor_config::DomainConfig;
use farm_advisor_core::{
    AnalysisResult, ContextPatch, Region, Reply, Result, INTENT_FALLBACK,
};
use farm_advisor_nlp::Analyzer;

/// The full advisory service: analyzer, selector and per-user context.
///
/// One instance per process; `respond` is safe to call from any thread.
pub struct Advisor {
    analyzer: Analyzer,
    selector: AdvisorySelector,
    contexts: ContextStore,
}

impl Advisor {
    pub fn new(config: &DomainConfig) -> Result<Self> {
        Ok(Self {
            analyzer: Analyzer::new(config)?,
            selector: AdvisorySelector::new(config),
            contexts: ContextStore::new(
                config.thresholds.context_ttl(),
                config.thresholds.context_capacity,
            ),
        })
    }

    /// Answer one inbound message. The region comes from the explicit
    /// override when given, else from the user's stored context; whatever
    /// was recognized is merged back into the context for the next turn.
    pub fn respond(&self, user_id: &str, text: &str, region_override: Option<Region>) -> Reply {
        let ctx = self.contexts.get(user_id);
        let region = region_override.unwrap_or(ctx.region);
        let analysis = self.analyzer.analyze(text, region);
        let reply = self.selector.select(&analysis, &ctx);

        let patch = ContextPatch {
            region: region_override,
            crop: analysis.crop.value.clone(),
            disease: analysis.disease.value.clone(),
            pest: analysis.pest.value.clone(),
            // Social intents carry no topic worth rejoining later.
            intent: analysis
                .intent
                .clone()
                .filter(|i| i != "greeting" && i != "thanks"),
        };
        if !patch.is_empty() {
            self.contexts.set(user_id, &patch);
        }

        tracing::debug!(
            user_id,
            intent = %reply.intent,
            confidence = reply.confidence,
            "replied"
        );
        reply
    }

    /// Run the analysis pipeline without touching any context.
    pub fn analyze(&self, text: &str, region: Region) -> AnalysisResult {
        self.analyzer.analyze(text, region)
    }

    /// Stateless single-shot matching: the advisory text when the message
    /// resolves on its own, `None` when it would need clarification.
    pub fn match_faq(&self, text: &str) -> Option<String> {
        let analysis = self.analyzer.analyze(text, Region::default());
        let reply = self
            .selector
            .select(&analysis, &Default::default());
        (reply.intent != INTENT_FALLBACK).then_some(reply.text)
    }

    /// Forget everything stored about a user.
    pub fn forget(&self, user_id: &str) {
        self.contexts.clear(user_id);
    }
}
