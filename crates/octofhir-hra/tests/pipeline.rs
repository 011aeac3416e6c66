//! End-to-end assessment runs over realistic questionnaire submissions

use chrono::NaiveDate;
use std::io::Write;

use octofhir_hra::{
    Answers, Assessment, GuidelineRegistry, TerminologyRegistry, ThresholdsConfig, is_visible,
};
use octofhir_hra_types::VisibilityGate;
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
}

fn pipeline() -> Assessment {
    Assessment::new().unwrap().with_today(reference_date())
}

fn polish_submission() -> Answers {
    Answers::from([
        ("dob", "1969-04-02".into()),
        ("sex_at_birth", "Kobieta".into()),
        (
            "cond.list",
            r#"["Nieswoista choroba zapalna jelit","Nadciśnienie tętnicze"]"#.into(),
        ),
        ("cond.ibd.year_dx", 2012.into()),
        ("cond.ibd.status", "W trakcie leczenia".into()),
        ("cond.htn.status", "Kontrolowane lekami".into()),
        ("gen.tested", true.into()),
        (
            "gen.genes",
            r#"["Zespół Lyncha (MLH1/MSH2/MSH6/PMS2/EPCAM)"]"#.into(),
        ),
        ("env.radon.level_cat", "Wysoki (>=300)".into()),
        ("env.exposures", r#"["Azbest"]"#.into()),
        ("env.asbestos.years", 9.into()),
        ("env.smoking_status", "Obecny palacz".into()),
        ("sex.partners_band", "5-9".into()),
        ("sex.sti.list", r#"["WZW B"]"#.into()),
        ("sex.sti.hbv.status", "Aktywne".into()),
        ("scr.list", r#"["Kolonoskopia","Cytologia"]"#.into()),
        ("scr.colonoscopy.year", 2016.into()),
        ("scr.cervical_smear.year", 2024.into()),
        ("occ.job_title", "Górnik".into()),
        ("occ.years", 21.into()),
    ])
}

fn english_submission() -> Answers {
    Answers::from([
        ("dob", "1969-04-02".into()),
        ("sex_at_birth", "Female".into()),
        (
            "cond.list",
            r#"["Inflammatory bowel disease","High blood pressure"]"#.into(),
        ),
        ("cond.ibd.year_dx", 2012.into()),
        ("cond.ibd.status", "Active".into()),
        ("cond.htn.status", "Managed with medication".into()),
        ("gen.tested", true.into()),
        ("gen.genes", r#"["Lynch (MLH1/MSH2/MSH6/PMS2/EPCAM)"]"#.into()),
        ("env.radon.level_cat", "High (>=300)".into()),
        ("env.exposures", r#"["Asbestos"]"#.into()),
        ("env.asbestos.years", 9.into()),
        ("env.smoking_status", "Current smoker".into()),
        ("sex.partners_band", "5-9".into()),
        ("sex.sti.list", r#"["Hepatitis B"]"#.into()),
        ("sex.sti.hbv.status", "Active".into()),
        ("scr.list", r#"["Colonoscopy","Cervical smear (Pap test)"]"#.into()),
        ("scr.colonoscopy.year", 2016.into()),
        ("scr.cervical_smear.year", 2024.into()),
        ("occ.job_title", "Miner".into()),
        ("occ.years", 21.into()),
    ])
}

#[test]
fn rich_submission_produces_full_report() {
    let report = pipeline().run(&english_submission(), "en");

    // Derived spine of the plan below
    assert_eq!(report.derived.number("core.age"), Some(55.0));
    assert_eq!(report.derived.text("core.sex_at_birth"), Some("female"));
    assert!(report.derived.flag("gen.lynch_syndrome"));
    assert!(report.derived.flag("env.radon_high"));
    assert!(report.derived.flag("occ.carcinogen_exposure"));
    assert!(report.derived.flag("sex.hbv_active"));
    assert_eq!(report.derived.text("sex.partner_risk"), Some("high"));
    assert_eq!(report.derived.number("cond.ibd.years_since_dx"), Some(13.0));
    // Colonoscopy 2016 is inside the 10-year interval, cervical smear 2024 inside 3
    assert!(!report.derived.flag("scr.colonoscopy_due"));
    assert!(!report.derived.flag("scr.cervical_smear_due"));

    // Three colorectal rules fire but the action appears once
    assert_eq!(
        report.plan.screenings,
        vec!["COLORECTAL_SCREENING", "LUNG_CT_SCREENING", "MAMMOGRAPHY"]
    );
    assert_eq!(
        report.plan.lifestyle,
        vec![
            "RADON_MITIGATION",
            "SMOKING_CESSATION_PROGRAM",
            "SAFER_SEX_PRACTICES",
            "OCCUPATIONAL_PROTECTION"
        ]
    );
    assert_eq!(
        report.plan.topics_for_doctor,
        vec![
            "DISCUSS_SMOKING",
            "DISCUSS_HBV_MANAGEMENT",
            "GENETIC_COUNSELING",
            "DISCUSS_GENETIC_RESULTS"
        ]
    );
    assert_eq!(report.plan.user_answers, english_submission());
}

#[test]
fn polish_and_english_submissions_agree_end_to_end() {
    let pipeline = pipeline();
    let polish = pipeline.run(&polish_submission(), "pl");
    let english = pipeline.run(&english_submission(), "en");

    // Derived variables are locale-free once answers are standardized
    assert_eq!(polish.derived, english.derived);
    assert_eq!(polish.plan.screenings, english.plan.screenings);
    assert_eq!(polish.plan.lifestyle, english.plan.lifestyle);
    assert_eq!(polish.plan.topics_for_doctor, english.plan.topics_for_doctor);
}

#[test]
fn panel_and_individual_gene_selections_assess_identically() {
    let panel = Answers::from([
        ("gen.tested", true.into()),
        ("gen.genes", r#"["Lynch (MLH1/MSH2/MSH6/PMS2/EPCAM)"]"#.into()),
    ]);
    let individual = Answers::from([
        ("gen.tested", true.into()),
        ("gen.genes", r#"["MLH1","MSH2","MSH6","PMS2","EPCAM"]"#.into()),
    ]);

    let pipeline = pipeline();
    let from_panel = pipeline.run(&panel, "en");
    let from_individual = pipeline.run(&individual, "en");

    assert_eq!(
        from_panel.standardized.advanced.genetics.genes.len(),
        from_individual.standardized.advanced.genetics.genes.len()
    );
    assert_eq!(from_panel.derived, from_individual.derived);
    assert!(from_panel.derived.flag("gen.lynch_syndrome"));
    assert_eq!(
        from_panel.plan.topics_for_doctor,
        from_individual.plan.topics_for_doctor
    );
    assert!(
        from_panel
            .plan
            .topics_for_doctor
            .contains(&"GENETIC_COUNSELING".to_string())
    );
}

#[test]
fn thresholds_override_replaces_the_interval_table() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"version": "pilot-1", "screeningIntervals": {{"colonoscopy": 5}}}}"#
    )
    .unwrap();

    let thresholds = ThresholdsConfig::from_json_file(file.path()).unwrap();
    let pipeline = Assessment::with_config(
        TerminologyRegistry::builtin().unwrap(),
        thresholds,
        GuidelineRegistry::builtin().unwrap(),
    )
    .with_today(reference_date());

    let report = pipeline.run(&english_submission(), "en");

    // A 2016 colonoscopy is overdue under the tightened 5-year interval
    assert!(report.derived.flag("scr.colonoscopy_due"));
    // The replacement table has no cervical smear entry, so no flag is computed
    assert_eq!(report.derived.get("scr.cervical_smear_due"), None);
}

#[test]
fn rule_set_override_replaces_a_locale() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"rules": [{{
            "actionId": "PILOT_ACTION",
            "category": "lifestyle",
            "conditions": [{{"questionId": "env.smoking_status", "value": "Current smoker"}}]
        }}]}}"#
    )
    .unwrap();

    let guidelines = GuidelineRegistry::new();
    guidelines.load_json_file("en", file.path()).unwrap();
    let pipeline = Assessment::with_config(
        TerminologyRegistry::builtin().unwrap(),
        ThresholdsConfig::default(),
        guidelines,
    )
    .with_today(reference_date());

    let report = pipeline.run(&english_submission(), "en");

    assert!(report.plan.screenings.is_empty());
    assert_eq!(report.plan.lifestyle, vec!["PILOT_ACTION"]);
}

#[test]
fn questionnaire_items_gate_on_the_same_conditions() {
    let gate: VisibilityGate = serde_json::from_str(
        r#"{
            "id": "scr.cervical_smear.year",
            "dependsOn": {
                "questionId": "scr.list",
                "operator": "array_contains",
                "value": "Cervical smear (Pap test)"
            }
        }"#,
    )
    .unwrap();

    assert!(is_visible(&gate, &english_submission()));
    assert!(!is_visible(&gate, &Answers::new()));

    let ungated = VisibilityGate::default();
    assert!(is_visible(&ungated, &Answers::new()));
}
