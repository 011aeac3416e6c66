//! Wire-format fidelity tests
//!
//! The rule and answer documents these types deserialize were authored for
//! the legacy engine; these tests pin the exact shapes that configuration
//! authors rely on.

use octofhir_hra_types::{
    Answers, Condition, ConditionOperator, ConditionValue, GuidelinePlan, PlanConfig,
    VisibilityGate,
};
use pretty_assertions::assert_eq;

#[test]
fn full_locale_config_parses() {
    let json = r#"{
        "rules": [
            {
                "actionId": "COLORECTAL_SCREENING",
                "category": "screenings",
                "conditions": [
                    {"questionId": "age", "operator": ">=", "value": 40},
                    {"questionId": "age", "operator": "<=", "value": 75}
                ]
            },
            {
                "actionId": "DISCUSS_SMOKING",
                "category": "topicsForDoctor",
                "conditions": [
                    {"questionId": "env.smoking_status", "value": "Current smoker"}
                ]
            },
            {
                "actionId": "GENERAL_CHECKUP",
                "category": "lifestyle",
                "conditions": []
            }
        ]
    }"#;

    let config: PlanConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.rules.len(), 3);
    assert!(config.rules[2].conditions.is_empty());

    // Implicit leaves keep their operator-less shape through a round trip.
    let round_trip = serde_json::to_value(&config).unwrap();
    assert!(round_trip["rules"][1]["conditions"][0].get("operator").is_none());
}

#[test]
fn condition_value_shapes() {
    let scalar: Condition = serde_json::from_str(r#"{"questionId": "q", "value": "Low"}"#).unwrap();
    let numeric: Condition = serde_json::from_str(r#"{"questionId": "q", "value": 3}"#).unwrap();
    let boolean: Condition = serde_json::from_str(r#"{"questionId": "q", "value": true}"#).unwrap();
    let array: Condition =
        serde_json::from_str(r#"{"questionId": "q", "value": ["A", "B"]}"#).unwrap();

    let value_of = |c: &Condition| match c {
        Condition::Leaf(leaf) => leaf.value.clone(),
        _ => panic!("expected leaf"),
    };

    assert_eq!(value_of(&scalar), ConditionValue::String("Low".to_string()));
    assert_eq!(value_of(&numeric), ConditionValue::Number(3.0));
    assert_eq!(value_of(&boolean), ConditionValue::Bool(true));
    assert_eq!(
        value_of(&array),
        ConditionValue::List(vec![
            ConditionValue::String("A".to_string()),
            ConditionValue::String("B".to_string()),
        ])
    );
}

#[test]
fn unknown_operators_survive_round_trips() {
    let json = r#"{"questionId": "q", "operator": "matches_regex", "value": "x"}"#;
    let condition: Condition = serde_json::from_str(json).unwrap();

    let Condition::Leaf(leaf) = &condition else {
        panic!("expected leaf");
    };
    assert_eq!(
        leaf.operator,
        Some(ConditionOperator::Other("matches_regex".to_string()))
    );

    let round_trip = serde_json::to_value(&condition).unwrap();
    assert_eq!(round_trip["operator"], "matches_regex");
}

#[test]
fn plan_buckets_use_the_legacy_field_names() {
    let mut answers = Answers::new();
    answers.insert("age", "45");
    answers.insert("cond.list", r#"["Asthma"]"#);

    let plan = GuidelinePlan {
        screenings: vec!["COLORECTAL_SCREENING".to_string()],
        lifestyle: vec![],
        topics_for_doctor: vec!["DISCUSS_SMOKING".to_string()],
        user_answers: answers,
    };

    let json = serde_json::to_value(&plan).unwrap();
    assert_eq!(json["screenings"][0], "COLORECTAL_SCREENING");
    assert_eq!(json["topicsForDoctor"][0], "DISCUSS_SMOKING");
    assert_eq!(json["userAnswers"]["cond.list"], r#"["Asthma"]"#);

    let reparsed: GuidelinePlan = serde_json::from_value(json).unwrap();
    assert_eq!(reparsed, plan);
}

#[test]
fn questionnaire_items_deserialize_into_visibility_gates() {
    let item = r#"{
        "id": "cond.ibd.year_dx",
        "type": "year",
        "dependsOn": {
            "questionId": "cond.list",
            "operator": "array_contains",
            "value": "Inflammatory bowel disease"
        }
    }"#;

    let gate: VisibilityGate = serde_json::from_str(item).unwrap();
    let Some(Condition::Leaf(leaf)) = &gate.depends_on else {
        panic!("expected leaf dependency");
    };
    assert_eq!(leaf.operator, Some(ConditionOperator::ArrayContains));
}
