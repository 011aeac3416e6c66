//! Coded vocabularies for the HRA pipeline
//!
//! This crate provides:
//! - Vocabulary table schema (SNOMED CT conditions, HGNC genes, ISCO-08
//!   occupations, the job-exposure matrix, and internal code lists)
//! - Built-in bilingual (English / Polish) tables embedded at compile time
//! - `TerminologyRegistry`, the total lookup surface used by standardization
//! - Lookup-key normalization

pub mod error;
pub mod normalize;
pub mod registry;
pub mod tables;

pub use error::*;
pub use registry::*;
pub use tables::*;
