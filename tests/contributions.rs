use std::collections::BTreeMap;

use pan_prognosis::biomarker::{Biomarker, RawValue};
use pan_prognosis::patient::PatientRecord;
use pan_prognosis::scores::contributions::{
    BiomarkerRule, FactorEngine, FactorInput, SeverityWeights,
};
use pan_prognosis::scores::{Impact, compute_factors};

const EPS: f64 = 1e-9;

fn patient(age: Option<u32>, condition: Option<&str>, biomarkers: &[(&str, &str)]) -> PatientRecord {
    let mut map = BTreeMap::new();
    for (k, v) in biomarkers {
        map.insert(k.to_string(), RawValue::from(*v));
    }
    PatientRecord {
        age,
        condition: condition.map(str::to_string),
        biomarkers: map,
        ..PatientRecord::default()
    }
}

#[test]
fn end_to_end_factor_order_and_weights() {
    let p = patient(Some(65), Some("pancreatic mass"), &[("ca199", "120")]);
    let factors = compute_factors(&p, Some(80.0));

    let features: Vec<&str> = factors.iter().map(|f| f.feature.as_str()).collect();
    assert_eq!(
        features,
        vec!["Age Factor", "CA 19-9 Level", "CT Imaging", "Pancreatic Mass"]
    );
    let weights: Vec<f64> = factors.iter().map(|f| f.contribution).collect();
    for (got, want) in weights.iter().zip([0.15, 0.35, 0.24, 0.25]) {
        assert!((got - want).abs() < EPS, "{} != {}", got, want);
    }
    assert!(factors.iter().all(|f| f.impact == Impact::Positive));
    assert_eq!(factors[0].description, "Age 65 - increased risk factor");
    assert_eq!(factors[1].description, "CA 19-9: 120 U/mL - elevated tumor marker");
    assert_eq!(factors[2].description, "AI imaging analysis: 80% confidence");
}

#[test]
fn minimal_patient_gets_age_and_imaging_only() {
    let p = patient(None, None, &[]);
    let factors = compute_factors(&p, None);
    assert_eq!(factors.len(), 2);
    assert!((factors[0].contribution - 0.05).abs() < EPS);
    assert_eq!(factors[0].description, "Age unknown - normal risk factor");
    assert!((factors[1].contribution - 0.15).abs() < EPS);
    assert_eq!(factors[1].description, "AI imaging analysis: N/A% confidence");
}

#[test]
fn age_sixty_is_not_elevated() {
    let factors = compute_factors(&patient(Some(60), None, &[]), Some(50.0));
    assert!((factors[0].contribution - 0.05).abs() < EPS);
    let factors = compute_factors(&patient(Some(61), None, &[]), Some(50.0));
    assert!((factors[0].contribution - 0.15).abs() < EPS);
}

#[test]
fn ca199_precedes_cea_and_tiers_apply() {
    let p = patient(
        Some(40),
        None,
        &[("cea", "4"), ("CA 19-9", "20"), ("lipase", "300")],
    );
    let factors = compute_factors(&p, Some(10.0));
    let features: Vec<&str> = factors.iter().map(|f| f.feature.as_str()).collect();
    assert_eq!(
        features,
        vec!["Age Factor", "CA 19-9 Level", "CEA Level", "CT Imaging"]
    );
    assert!((factors[1].contribution - 0.05).abs() < EPS);
    assert!((factors[2].contribution - 0.15).abs() < EPS);
    assert_eq!(factors[2].description, "CEA: 4 ng/mL - elevated tumor marker");
    assert!((factors[3].contribution - 0.03).abs() < EPS);
}

#[test]
fn presence_not_value_triggers_biomarker_factor() {
    let p = patient(None, None, &[("ca199", "0")]);
    let factors = compute_factors(&p, None);
    assert!(factors.iter().any(|f| f.feature == "CA 19-9 Level"));

    let p = patient(None, None, &[("ca199", "")]);
    let factors = compute_factors(&p, None);
    assert!(!factors.iter().any(|f| f.feature == "CA 19-9 Level"));
}

#[test]
fn condition_match_is_case_insensitive() {
    let factors = compute_factors(&patient(None, Some("Suspected MASS lesion"), &[]), None);
    assert_eq!(factors.last().unwrap().feature, "Pancreatic Mass");
    let factors = compute_factors(&patient(None, Some("pancreatitis"), &[]), None);
    assert_ne!(factors.last().unwrap().feature, "Pancreatic Mass");
}

#[test]
fn contributions_are_not_normalized() {
    let p = patient(Some(70), Some("mass"), &[("ca199", "500"), ("cea", "9")]);
    let factors = compute_factors(&p, Some(100.0));
    let total: f64 = factors.iter().map(|f| f.contribution).sum();
    assert!(total > 1.0);
    assert!(factors.iter().all(|f| (0.0..=1.0).contains(&f.contribution)));
}

#[test]
fn engine_accepts_extra_biomarker_rules() {
    let mut rules = FactorEngine::standard();
    assert_eq!(
        rules.rule_names(),
        vec!["age", "ca199", "cea", "imaging", "condition"]
    );
    rules = FactorEngine::new(vec![Box::new(BiomarkerRule::new(
        Biomarker::Lipase,
        "pancreatic enzyme",
        SeverityWeights {
            high: 0.2,
            moderate: 0.1,
            baseline: 0.02,
        },
    ))]);
    let p = patient(None, None, &[("lipase", "150")]);
    let factors = rules.evaluate(&FactorInput {
        patient: &p,
        imaging_score: None,
    });
    assert_eq!(factors.len(), 1);
    assert_eq!(factors[0].feature, "Lipase Level");
    assert!((factors[0].contribution - 0.1).abs() < EPS);
    assert_eq!(factors[0].description, "Lipase: 150 U/L - elevated pancreatic enzyme");
}
