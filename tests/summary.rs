use std::collections::BTreeMap;

use pan_prognosis::biomarker::{
    BiomarkerReading, ClassifiedBiomarker, Overrides, RawValue, Status, StatusSummary, Trend,
    load_builtin_panel, merge, summarize,
};
use pan_prognosis::ctx::Ctx;
use pan_prognosis::io::summary::format_summary;
use pan_prognosis::patient::PatientRecord;
use pan_prognosis::scores::{FusionAssessment, compute_factors};

fn with_status(status: Status) -> ClassifiedBiomarker {
    ClassifiedBiomarker {
        reading: BiomarkerReading {
            name: "X".to_string(),
            value: "1".to_string(),
            unit: String::new(),
            reference_range: String::new(),
        },
        status,
        trend: Trend::Stable,
    }
}

#[test]
fn counts_partition_input() {
    let list = vec![
        with_status(Status::Normal),
        with_status(Status::Elevated),
        with_status(Status::Low),
        with_status(Status::Elevated),
    ];
    let s = summarize(&list);
    assert_eq!(
        s,
        StatusSummary {
            normal: 1,
            low: 1,
            elevated: 2
        }
    );
    assert_eq!(s.total(), list.len());
    assert_eq!(summarize(&[]).total(), 0);
}

#[test]
fn merged_panel_totals_match_length() {
    let panel = load_builtin_panel().unwrap();
    let overrides = Overrides::from_pairs([("ca199", "150"), ("lipase", "3"), ("cea", "1")]);
    let merged = merge(&panel, &overrides);
    let s = summarize(&merged);
    assert_eq!(s.total(), merged.len());
    assert_eq!(s.elevated, 1);
    assert_eq!(s.low, 1);
    assert_eq!(s.normal, 2);
}

#[test]
fn summary_format() {
    let mut ctx = Ctx::new(
        std::path::PathBuf::from("patient.json"),
        std::path::PathBuf::from("out"),
        false,
        false,
        "0.0.0-test",
    );
    let mut biomarkers = BTreeMap::new();
    biomarkers.insert("ca199".to_string(), RawValue::from("120"));
    let patient = PatientRecord {
        name: Some("Jordan Doe".to_string()),
        age: Some(65),
        biomarkers,
        ..PatientRecord::default()
    };
    ctx.factors = compute_factors(&patient, Some(80.0));
    ctx.patient = Some(patient);
    ctx.fusion = Some(FusionAssessment {
        risk_score: 75.0,
        biomarker_model_score: None,
        imaging_model_score: Some(80.0),
    });
    ctx.summary = StatusSummary {
        normal: 3,
        low: 0,
        elevated: 1,
    };

    let s = format_summary(&ctx).unwrap();
    assert!(s.contains("pan-prognosis v"));
    assert!(s.contains("Patient: Jordan Doe, age=65"));
    assert!(s.contains("Risk: 75% (High Risk)"));
    assert!(s.contains("Biomarkers: 3 normal, 0 low, 1 elevated"));
    assert!(s.contains("Factors: Age Factor +15.0%, CA 19-9 Level +35.0%"));
}
