//! Plan generation
//!
//! Each rule's condition list is AND-ed through the condition evaluator
//! against the combined answer/derived context. Matched action ids land in
//! the bucket named by the rule's category, deduplicated in first-match
//! order, and the raw answers ride along unchanged for the downstream
//! narrative collaborator.

use chrono::NaiveDate;
use octofhir_hra_eval::{EvalContext, evaluate};
use octofhir_hra_types::{Answers, DerivedVariables, GuidelinePlan, PlanCategory};

use crate::registry::{BASELINE_LOCALE, GuidelineRegistry};

/// Generates categorized action plans from a locale's rule set.
#[derive(Debug, Clone)]
pub struct GuidelineEngine {
    registry: GuidelineRegistry,
    today: NaiveDate,
}

impl GuidelineEngine {
    /// Create an engine with today as the reference date
    pub fn new(registry: GuidelineRegistry) -> Self {
        Self {
            registry,
            today: chrono::Local::now().date_naive(),
        }
    }

    /// Pin the reference date, for deterministic evaluation
    #[must_use]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// The registry this engine draws rule sets from
    pub fn registry(&self) -> &GuidelineRegistry {
        &self.registry
    }

    /// Generate the action plan for one answer set.
    ///
    /// A locale without a registered rule set falls back to the baseline
    /// locale; generation itself never fails.
    pub fn generate_plan(
        &self,
        answers: &Answers,
        derived: &DerivedVariables,
        locale: &str,
    ) -> GuidelinePlan {
        let config = self.registry.config_for(locale).unwrap_or_else(|| {
            log::warn!("no rule set for locale {locale:?}, using {BASELINE_LOCALE:?}");
            self.registry
                .config_for(BASELINE_LOCALE)
                .unwrap_or_default()
        });

        let ctx = EvalContext::new(answers)
            .with_derived(derived)
            .with_today(self.today);

        let mut plan = GuidelinePlan::new(answers.clone());
        for rule in &config.rules {
            let matched = rule
                .conditions
                .iter()
                .all(|condition| evaluate(condition, &ctx));
            if matched {
                push_unique(bucket_mut(&mut plan, rule.category), &rule.action_id);
            }
        }
        plan
    }
}

fn bucket_mut(plan: &mut GuidelinePlan, category: PlanCategory) -> &mut Vec<String> {
    match category {
        PlanCategory::Screenings => &mut plan.screenings,
        PlanCategory::Lifestyle => &mut plan.lifestyle,
        PlanCategory::TopicsForDoctor => &mut plan.topics_for_doctor,
    }
}

fn push_unique(bucket: &mut Vec<String>, action_id: &str) {
    if !bucket.iter().any(|existing| existing == action_id) {
        bucket.push(action_id.to_string());
    }
}
