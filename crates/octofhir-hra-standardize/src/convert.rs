//! Small answer-conversion helpers shared by the domain builders

use octofhir_hra_types::{Answers, AnswerValue};

/// Multi-select option labels meaning "nothing applies". They carry no
/// clinical content, so the domain builders drop them instead of producing
/// `other`-bucket codings for them.
const NONE_SELECTED_LABELS: &[&str] = &["None of the above", "Żadne z powyższych"];

/// Decoded multi-select labels with the none-selected options removed.
///
/// A missing or unparseable payload yields an empty list; the domain
/// degrades to empty rather than erroring.
pub(crate) fn select_labels(answers: &Answers, question_id: &str) -> Vec<String> {
    let Some(labels) = answers.multi_select(question_id) else {
        if answers.is_answered(question_id) {
            log::debug!("multi-select {question_id} did not decode, domain degrades to empty");
        }
        return Vec::new();
    };
    labels
        .into_iter()
        .filter(|label| {
            let label = label.trim();
            !NONE_SELECTED_LABELS
                .iter()
                .any(|none| none.eq_ignore_ascii_case(label))
        })
        .collect()
}

/// Calendar year from an answer, if it parses as one
pub(crate) fn year_of(value: &AnswerValue) -> Option<i32> {
    match value {
        AnswerValue::Number(n) if n.fract() == 0.0 && (1900.0..=2200.0).contains(n) => {
            Some(*n as i32)
        }
        AnswerValue::String(s) => {
            let year = s.trim().parse::<i32>().ok()?;
            (1900..=2200).contains(&year).then_some(year)
        }
        _ => None,
    }
}

/// Fractional year count from an answer (e.g. exposure duration)
pub(crate) fn years_of(value: &AnswerValue) -> Option<f64> {
    match value {
        AnswerValue::Number(n) if n.is_finite() && *n >= 0.0 => Some(*n),
        AnswerValue::String(s) => {
            let years = s.trim().parse::<f64>().ok()?;
            (years.is_finite() && years >= 0.0).then_some(years)
        }
        _ => None,
    }
}

/// Whether a yes/no question was answered affirmatively.
///
/// Toggles submit real booleans; older questionnaire exports submit label
/// strings, so those are accepted too.
pub(crate) fn answered_yes(answers: &Answers, question_id: &str) -> bool {
    match answers.get(question_id) {
        Some(AnswerValue::Bool(b)) => *b,
        Some(AnswerValue::String(s)) => {
            let s = s.trim();
            s.eq_ignore_ascii_case("true")
                || s.eq_ignore_ascii_case("yes")
                || s.eq_ignore_ascii_case("tak")
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn select_labels_filters_none_options() {
        let answers = Answers::from([
            ("a", r#"["Asthma","None of the above"]"#.into()),
            ("b", r#"["Żadne z powyższych"]"#.into()),
            ("c", "broken".into()),
        ]);
        assert_eq!(select_labels(&answers, "a"), vec!["Asthma"]);
        assert!(select_labels(&answers, "b").is_empty());
        assert!(select_labels(&answers, "c").is_empty());
        assert!(select_labels(&answers, "missing").is_empty());
    }

    #[rstest]
    #[case(AnswerValue::from(1998), Some(1998))]
    #[case(AnswerValue::from("2015"), Some(2015))]
    #[case(AnswerValue::from(" 2015 "), Some(2015))]
    #[case(AnswerValue::from(2015.5), None)]
    #[case(AnswerValue::from("a while ago"), None)]
    #[case(AnswerValue::from(15), None)]
    #[case(AnswerValue::Bool(true), None)]
    fn year_parsing(#[case] value: AnswerValue, #[case] expected: Option<i32>) {
        assert_eq!(year_of(&value), expected);
    }

    #[rstest]
    #[case(AnswerValue::from(12.5), Some(12.5))]
    #[case(AnswerValue::from("8"), Some(8.0))]
    #[case(AnswerValue::from(-1.0), None)]
    #[case(AnswerValue::from("many"), None)]
    fn years_parsing(#[case] value: AnswerValue, #[case] expected: Option<f64>) {
        assert_eq!(years_of(&value), expected);
    }

    #[test]
    fn yes_answers_across_shapes() {
        let answers = Answers::from([
            ("a", true.into()),
            ("b", "Yes".into()),
            ("c", "tak".into()),
            ("d", false.into()),
            ("e", "no".into()),
        ]);
        assert!(answered_yes(&answers, "a"));
        assert!(answered_yes(&answers, "b"));
        assert!(answered_yes(&answers, "c"));
        assert!(!answered_yes(&answers, "d"));
        assert!(!answered_yes(&answers, "e"));
        assert!(!answered_yes(&answers, "missing"));
    }
}
