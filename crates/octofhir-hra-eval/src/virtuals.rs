//! Enumerated virtual variables
//!
//! Two question ids resolve to values computed inline rather than stored in
//! the answer map. These are business rules carried over from the legacy
//! questionnaire, kept as named special cases so they stay visible and
//! independently tested.

use chrono::NaiveDate;
use octofhir_hra_types::{Answers, Dob};

/// Virtual variable: anatomical state inferred from surgical history
pub const HAS_CERVIX: &str = "has_cervix";
/// Question id with the age fallback from date of birth
pub const AGE: &str = "age";
/// Date-of-birth question id backing the age fallback
pub const DOB: &str = "dob";
/// Multi-select surgical-history question id
pub const SURGICAL_HISTORY: &str = "sur.list";

/// Surgical-history labels that indicate a prophylactic hysterectomy with
/// cervix removal, per questionnaire locale.
const HYSTERECTOMY_LABELS: &[&str] = &[
    "Prophylactic hysterectomy (with cervix removal)",
    "Histerektomia profilaktyczna (z usunięciem szyjki macicy)",
];

/// Whether the answers imply the user still has a cervix.
///
/// True unless the surgical-history multi-select contains a prophylactic
/// hysterectomy label. An unanswered question or an unparseable payload
/// counts as "not selected".
pub fn has_cervix(answers: &Answers) -> bool {
    match answers.multi_select(SURGICAL_HISTORY) {
        Some(selected) => !selected.iter().any(|label| is_hysterectomy(label)),
        None => true,
    }
}

fn is_hysterectomy(label: &str) -> bool {
    let label = label.trim();
    HYSTERECTOMY_LABELS
        .iter()
        .any(|known| known.eq_ignore_ascii_case(label))
}

/// Age computed from the date-of-birth answer, when `age` itself is
/// unanswered. Absent or unparseable `dob` yields no value.
pub fn age_from_dob(answers: &Answers, today: NaiveDate) -> Option<f64> {
    let raw = answers.text(DOB)?;
    let dob = Dob::parse(&raw)?;
    Some(f64::from(dob.age_on(today)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cervix_present_without_surgical_history() {
        assert!(has_cervix(&Answers::new()));
    }

    #[test]
    fn cervix_present_with_other_surgeries() {
        let answers = Answers::from([("sur.list", r#"["Appendectomy","Tonsillectomy"]"#.into())]);
        assert!(has_cervix(&answers));
    }

    #[test]
    fn hysterectomy_selection_removes_cervix() {
        let answers = Answers::from([(
            "sur.list",
            r#"["Prophylactic hysterectomy (with cervix removal)"]"#.into(),
        )]);
        assert!(!has_cervix(&answers));
    }

    #[test]
    fn polish_hysterectomy_label_matches() {
        let answers = Answers::from([(
            "sur.list",
            r#"["Histerektomia profilaktyczna (z usunięciem szyjki macicy)"]"#.into(),
        )]);
        assert!(!has_cervix(&answers));
    }

    #[test]
    fn unparseable_payload_counts_as_not_selected() {
        let answers = Answers::from([("sur.list", "hysterectomy but not json".into())]);
        assert!(has_cervix(&answers));
    }

    #[test]
    fn age_from_year_only_dob() {
        let answers = Answers::from([("dob", "1980".into())]);
        let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert_eq!(age_from_dob(&answers, today), Some(45.0));
    }

    #[test]
    fn age_from_full_dob_respects_birthday() {
        let answers = Answers::from([("dob", "1985-06-15".into())]);
        let before = NaiveDate::from_ymd_opt(2025, 6, 14).unwrap();
        let after = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        assert_eq!(age_from_dob(&answers, before), Some(39.0));
        assert_eq!(age_from_dob(&answers, after), Some(40.0));
    }

    #[test]
    fn junk_dob_yields_nothing() {
        let answers = Answers::from([("dob", "sometime in the 80s".into())]);
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(age_from_dob(&answers, today), None);
    }
}
