//! Answer standardization
//!
//! This crate provides:
//! - The [`Standardizer`] pass from raw answers to a [`StandardizedRecord`](octofhir_hra_types::StandardizedRecord)
//! - Per-domain builders (illnesses, genetics, environment, sexual health,
//!   screenings, occupation)
//! - Metadata re-keying from questionnaire sub-answers (`year_dx`, `status`)
//!   to their normalized record fields
//!
//! Standardization is lossless for reported items: every selected label
//! either maps to a coded concept or is preserved in the `other` bucket.
//! Bilingual questionnaires standardize to identical records.

mod convert;
pub mod domains;
pub mod standardizer;

pub use standardizer::Standardizer;
