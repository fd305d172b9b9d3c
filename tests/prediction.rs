use std::collections::BTreeMap;

use pan_prognosis::biomarker::RawValue;
use pan_prognosis::patient::{Gender, PatientRecord};
use pan_prognosis::prediction::{
    MODEL_FEATURES, ModelFeatures, PredictionOutcome, PredictionResponse, class_label,
    encode_sex, parse_confidence, risk_from_class,
};
use pan_prognosis::scores::{RiskTier, select_tier};

#[test]
fn decodes_service_response() {
    let resp: PredictionResponse = serde_json::from_str(
        r#"{"prediction": "Malignant (Fatal)", "class": 3, "confidence": "87.50%"}"#,
    )
    .unwrap();
    let outcome = PredictionOutcome::from(&resp);
    assert_eq!(outcome.label, "Malignant (Fatal)");
    assert_eq!(outcome.class, 3);
    assert_eq!(outcome.class_label(), "Malignant (Fatal)");
    assert_eq!(outcome.confidence_percent, Some(87.5));
}

#[test]
fn missing_fields_degrade() {
    let resp: PredictionResponse = serde_json::from_str("{}").unwrap();
    let outcome = PredictionOutcome::from(&resp);
    assert_eq!(outcome.label, "N/A");
    assert_eq!(outcome.class, 0);
    assert_eq!(outcome.confidence, "N/A");
    assert_eq!(outcome.confidence_percent, None);
    assert_eq!(outcome.class_label(), "Unknown");
}

#[test]
fn class_labels() {
    assert_eq!(class_label(1), "Healthy");
    assert_eq!(class_label(2), "Benign");
    assert_eq!(class_label(3), "Malignant (Fatal)");
    assert_eq!(class_label(7), "Unknown");
    assert_eq!(parse_confidence(" 64%"), Some(64.0));
}

#[test]
fn feature_row_in_model_order() {
    let mut biomarkers = BTreeMap::new();
    biomarkers.insert("creatinine".to_string(), RawValue::from(1.2));
    biomarkers.insert("LYVE1".to_string(), RawValue::from("3.5"));
    biomarkers.insert("reg1b".to_string(), RawValue::from("bad"));
    biomarkers.insert("TFF1".to_string(), RawValue::from("410.2"));
    let patient = PatientRecord {
        age: Some(58),
        sex: Some("M".to_string()),
        biomarkers,
        ..PatientRecord::default()
    };
    let row = ModelFeatures::from_patient(&patient);
    let cols = row.columns();
    let names: Vec<&str> = cols.iter().map(|(n, _)| *n).collect();
    assert_eq!(names, MODEL_FEATURES.to_vec());
    let values: Vec<f64> = cols.iter().map(|(_, v)| *v).collect();
    assert_eq!(values, vec![58.0, 1.0, 1.2, 3.5, 0.0, 410.2, 0.0]);

    let json = row.to_json();
    assert_eq!(json["LYVE1"], 3.5);
    assert_eq!(json["sex"], 1.0);
}

#[test]
fn sex_encoding() {
    assert_eq!(encode_sex(Some("m")), 1);
    assert_eq!(encode_sex(Some("Male")), 1);
    assert_eq!(encode_sex(Some("F")), 0);
    assert_eq!(encode_sex(None), 0);

    let patient = PatientRecord {
        gender: Some(Gender::Male),
        ..PatientRecord::default()
    };
    assert_eq!(ModelFeatures::from_patient(&patient).sex, 1);
}

#[test]
fn class_steps_map_to_risk() {
    assert_eq!(risk_from_class(1), 33.0);
    assert_eq!(risk_from_class(2), 66.0);
    assert_eq!(risk_from_class(3), 99.0);
    assert_eq!(select_tier(risk_from_class(2)), RiskTier::Moderate);
    assert_eq!(select_tier(risk_from_class(3)), RiskTier::High);
}
