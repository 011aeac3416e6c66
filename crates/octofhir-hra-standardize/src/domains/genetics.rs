//! Genetic-testing standardization
//!
//! `gen.genes` selections resolve through the gene tables; umbrella panel
//! labels expand to their member genes so a panel selection and the
//! equivalent individual selections produce the same downstream codings.

use crate::convert::{answered_yes, select_labels};
use octofhir_hra_terminology::TerminologyRegistry;
use octofhir_hra_types::{Answers, Coding, GeneticsRecord};

pub fn build(answers: &Answers, registry: &TerminologyRegistry) -> GeneticsRecord {
    let tested = answered_yes(answers, "gen.tested");

    let mut genes: Vec<Coding> = Vec::new();
    for label in select_labels(answers, "gen.genes") {
        for coding in registry.genes_for(&label) {
            // A panel plus one of its members yields the same gene twice;
            // keep the first occurrence. Other-bucket codings all share one
            // code, so they are never collapsed.
            let duplicate = !coding.is_other()
                && genes.iter().any(|existing| existing.code == coding.code);
            if !duplicate {
                genes.push(coding);
            }
        }
    }

    GeneticsRecord { tested, genes }
}
