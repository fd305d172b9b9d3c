use pan_prognosis::patient::{Gender, PatientRecord};
use pan_prognosis::schema::v1::AssessmentV1;
use pan_prognosis::scores::FusionAssessment;

#[test]
fn schema_roundtrip_v1() {
    let report = AssessmentV1::empty("0.0.0-test");
    let json = serde_json::to_string(&report).unwrap();
    let decoded: AssessmentV1 = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded.tool, "pan-prognosis");
    assert_eq!(decoded.schema_version, "v1");
    assert_eq!(decoded.fusion.tier, "low");
}

#[test]
fn patient_record_accepts_mixed_values() {
    let record: PatientRecord = serde_json::from_str(
        r#"{
            "name": "Alex",
            "age": 72,
            "gender": "Other",
            "medicalHistory": "smoker",
            "biomarkers": {"ca199": "45.5", "cea": 2, "LYVE1": ""}
        }"#,
    )
    .unwrap();
    assert_eq!(record.gender, Some(Gender::Other));
    assert_eq!(record.medical_history.as_deref(), Some("smoker"));
    assert_eq!(record.biomarkers.len(), 3);
    assert_eq!(record.overrides().len(), 2);
}

#[test]
fn fusion_accepts_dashboard_field_names() {
    let fusion: FusionAssessment =
        serde_json::from_str(r#"{"riskScore": 55, "biomarkerScore": 40, "ctImageScore": 62}"#)
            .unwrap();
    assert_eq!(fusion.risk_score, 55.0);
    assert_eq!(fusion.biomarker_model_score, Some(40.0));
    assert_eq!(fusion.imaging_model_score, Some(62.0));
}
