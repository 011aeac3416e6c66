//! Domain builders
//!
//! One module per domain section of the standardized record. Every builder
//! is total over the answer set: a missing or malformed section degrades to
//! an empty sub-record so one bad domain never blocks the assessment.

pub mod core;
pub mod environment;
pub mod genetics;
pub mod illnesses;
pub mod occupation;
pub mod screenings;
pub mod sexual_health;
