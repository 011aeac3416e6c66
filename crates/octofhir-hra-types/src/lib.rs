//! Core data model for the HRA questionnaire pipeline
//!
//! This crate defines the types shared by every stage of the pipeline:
//! - raw questionnaire answers ([`Answers`], [`AnswerValue`])
//! - condition trees evaluated by the rule engine ([`Condition`])
//! - the standardized record produced from raw answers ([`StandardizedRecord`])
//! - derived clinical variables ([`DerivedVariables`])
//! - guideline rule configuration and the resulting plan ([`PlanConfig`],
//!   [`GuidelinePlan`])
//!
//! All types here are plain serde data: created once per assessment request
//! and never mutated afterwards.

pub mod answers;
pub mod code;
pub mod condition;
pub mod derived;
pub mod dob;
pub mod plan;
pub mod record;

pub use answers::{AnswerValue, Answers, decode_multi_select};
pub use code::{CodeSystem, Coding, OTHER_CODE};
pub use condition::{Condition, ConditionOperator, ConditionValue, LeafCondition, VisibilityGate};
pub use derived::{DerivedValue, DerivedVariables};
pub use dob::Dob;
pub use plan::{GuidelinePlan, GuidelineRule, PlanCategory, PlanConfig};
pub use record::{
    AdvancedRecord, CoreRecord, EnvironmentRecord, ExposureEntry, GeneticsRecord, IllnessEntry,
    OccupationRecord, ScreeningEntry, ScreeningRecord, SexAtBirth, SexualHealthRecord,
    StandardizedRecord,
};
