//! Derived-variable computation
//!
//! Each variable family is computed by its own function from the
//! standardized record; families are independent and none can fail. The
//! result is a flat namespaced map the guideline engine overlays onto the
//! raw answers.

use chrono::{Datelike, NaiveDate};
use octofhir_hra_types::{Coding, DerivedVariables, StandardizedRecord};

use crate::config::ThresholdsConfig;

/// Radon band labels that count as elevated. Standardization has already
/// canonicalized localized bands, so only the English vocabulary appears
/// here.
const ELEVATED_RADON_BANDS: &[&str] = &["High (>=300)", "Moderate (100-299)"];

/// Exposure codes treated as carcinogenic, whether reported directly or
/// implied through the job-exposure matrix
const CARCINOGEN_CODES: &[&str] = &[
    "asbestos",
    "silica_dust",
    "diesel_exhaust",
    "welding_fumes",
    "radon",
    "solvents",
];

/// HGNC ids of the Lynch-syndrome mismatch-repair set (MLH1, MSH2, MSH6,
/// PMS2, EPCAM)
const LYNCH_GENES: &[&str] = &[
    "HGNC:7127",
    "HGNC:7325",
    "HGNC:7329",
    "HGNC:9122",
    "HGNC:11529",
];
/// Umbrella panel labels that imply the Lynch set
const LYNCH_PANELS: &[&str] = &[
    "Lynch (MLH1/MSH2/MSH6/PMS2/EPCAM)",
    "Zespół Lyncha (MLH1/MSH2/MSH6/PMS2/EPCAM)",
];

/// HGNC ids of BRCA1 and BRCA2
const BRCA_GENES: &[&str] = &["HGNC:1100", "HGNC:1101"];
/// Umbrella panel labels that imply the BRCA set
const BRCA_PANELS: &[&str] = &["BRCA (BRCA1/BRCA2)"];

/// Computes the derived-variable map for one standardized record.
///
/// The calculator is pure: the same record, thresholds, and reference
/// date always produce the same map.
#[derive(Debug, Clone)]
pub struct DerivedCalculator {
    config: ThresholdsConfig,
    today: NaiveDate,
}

impl DerivedCalculator {
    /// Create a calculator with today as the reference date
    pub fn new(config: ThresholdsConfig) -> Self {
        Self {
            config,
            today: chrono::Local::now().date_naive(),
        }
    }

    /// Pin the reference date, for deterministic evaluation
    #[must_use]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// The thresholds policy this calculator applies
    pub fn config(&self) -> &ThresholdsConfig {
        &self.config
    }

    /// Compute every derived variable for a record
    pub fn calculate_all(&self, record: &StandardizedRecord) -> DerivedVariables {
        let mut vars = DerivedVariables::new();
        self.demographics(record, &mut vars);
        self.genetic_flags(record, &mut vars);
        self.exposure_flags(record, &mut vars);
        self.sexual_health_flags(record, &mut vars);
        self.screening_due_flags(record, &mut vars);
        self.illness_durations(record, &mut vars);
        vars
    }

    fn demographics(&self, record: &StandardizedRecord, vars: &mut DerivedVariables) {
        if let Some(dob) = &record.core.dob {
            vars.set("core.age", dob.age_on(self.today));
        }
        if let Some(sex) = record.core.sex_at_birth {
            vars.set("core.sex_at_birth", sex.as_key());
        }
    }

    fn genetic_flags(&self, record: &StandardizedRecord, vars: &mut DerivedVariables) {
        let genetics = &record.advanced.genetics;
        vars.set("gen.tested", genetics.tested);
        vars.set(
            "gen.lynch_syndrome",
            carries_syndrome(&genetics.genes, LYNCH_GENES, LYNCH_PANELS),
        );
        vars.set(
            "gen.brca_carrier",
            carries_syndrome(&genetics.genes, BRCA_GENES, BRCA_PANELS),
        );
    }

    fn exposure_flags(&self, record: &StandardizedRecord, vars: &mut DerivedVariables) {
        let advanced = &record.advanced;
        vars.set(
            "env.radon_high",
            advanced
                .environment
                .radon_band
                .as_deref()
                .is_some_and(|band| ELEVATED_RADON_BANDS.contains(&band)),
        );

        let reported = advanced.environment.exposures.iter().map(|e| &e.coding);
        let implied = advanced.occupation.jem_exposures.iter();
        vars.set(
            "occ.carcinogen_exposure",
            reported
                .chain(implied)
                .any(|coding| CARCINOGEN_CODES.contains(&coding.code.as_str())),
        );
    }

    fn sexual_health_flags(&self, record: &StandardizedRecord, vars: &mut DerivedVariables) {
        let sexual_health = &record.advanced.sexual_health;
        if let Some(band) = sexual_health.partners_band.as_deref() {
            match partner_risk(band) {
                Some(risk) => vars.set("sex.partner_risk", risk),
                None => log::debug!("unclassifiable partner band: {band:?}"),
            }
        }

        for key in ["hbv", "hcv"] {
            let active = record
                .infection(key)
                .is_some_and(|entry| entry.status.as_deref() == Some("active"));
            vars.set(format!("sex.{key}_active"), active);
        }
    }

    fn screening_due_flags(&self, record: &StandardizedRecord, vars: &mut DerivedVariables) {
        for entry in &record.advanced.screenings.tests {
            let Some(year) = entry.year else {
                continue;
            };
            let Some(interval) = self.config.interval_years(&entry.kind) else {
                log::debug!("no screening interval configured for {:?}", entry.kind);
                continue;
            };
            let due = self.today.year() - year >= interval as i32;
            vars.set(format!("scr.{}_due", entry.kind), due);
        }
    }

    fn illness_durations(&self, record: &StandardizedRecord, vars: &mut DerivedVariables) {
        for entry in &record.advanced.illnesses {
            if let (Some(key), Some(year)) = (&entry.key, entry.year) {
                vars.set(
                    format!("cond.{key}.years_since_dx"),
                    self.today.year() - year,
                );
            }
        }
    }
}

impl Default for DerivedCalculator {
    fn default() -> Self {
        Self::new(ThresholdsConfig::default())
    }
}

/// Whether a gene list carries a syndrome, matching either a member
/// gene's HGNC id or the umbrella panel label the user selected. The
/// label arm keeps records standardized without panel expansion
/// detectable.
fn carries_syndrome(genes: &[Coding], hgnc_ids: &[&str], panel_labels: &[&str]) -> bool {
    genes.iter().any(|gene| {
        hgnc_ids.contains(&gene.code.as_str())
            || panel_labels
                .iter()
                .any(|label| label.eq_ignore_ascii_case(gene.source.trim()))
    })
}

/// Ordinal risk band for a partner-count band label
fn partner_risk(band: &str) -> Option<&'static str> {
    match band.trim() {
        "0-1" => Some("low"),
        "2-4" => Some("moderate"),
        "5-9" | "10+" => Some("high"),
        _ => None,
    }
}
