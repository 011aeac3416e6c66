//! Guideline rules and the categorized action plan
//!
//! A rule pairs a condition list with a stable, language-neutral action id
//! and a plan category. Rule sets are authored per locale; action ids are
//! locale-invariant even though the condition values are written against
//! that locale's answer labels. The generated plan is the handoff to the
//! narrative-generation collaborator.

use crate::answers::Answers;
use crate::condition::Condition;
use serde::{Deserialize, Serialize};

/// Plan bucket a matched rule contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlanCategory {
    /// Recommended screening tests
    Screenings,
    /// Lifestyle guidance
    Lifestyle,
    /// Topics to raise with a doctor
    TopicsForDoctor,
}

/// One guideline rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidelineRule {
    /// Stable, language-neutral action identifier
    pub action_id: String,
    /// Plan bucket the action belongs to
    pub category: PlanCategory,
    /// Conditions, implicitly AND-ed; an empty list always fires
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

/// The rule set for one locale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanConfig {
    /// Rules in evaluation order
    #[serde(default)]
    pub rules: Vec<GuidelineRule>,
}

/// The categorized action plan for one answer set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidelinePlan {
    /// Recommended screenings, deduplicated, in first-match order
    pub screenings: Vec<String>,
    /// Lifestyle guidance, deduplicated, in first-match order
    pub lifestyle: Vec<String>,
    /// Doctor-discussion topics, deduplicated, in first-match order
    pub topics_for_doctor: Vec<String>,
    /// The raw answers the plan was generated from, unchanged
    pub user_answers: Answers,
}

impl GuidelinePlan {
    /// Empty plan carrying the given answers
    pub fn new(user_answers: Answers) -> Self {
        Self {
            user_answers,
            ..Default::default()
        }
    }

    /// Bucket for a category
    pub fn bucket(&self, category: PlanCategory) -> &[String] {
        match category {
            PlanCategory::Screenings => &self.screenings,
            PlanCategory::Lifestyle => &self.lifestyle,
            PlanCategory::TopicsForDoctor => &self.topics_for_doctor,
        }
    }

    /// Whether no rule matched in any category
    pub fn is_empty(&self) -> bool {
        self.screenings.is_empty() && self.lifestyle.is_empty() && self.topics_for_doctor.is_empty()
    }
}
