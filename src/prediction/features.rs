use serde_json::{Map, Value, json};

use crate::biomarker::Biomarker;
use crate::patient::PatientRecord;

/// Column order the prediction model was trained on.
pub const MODEL_FEATURES: [&str; 7] = ["age", "sex", "creatinine", "LYVE1", "REG1B", "TFF1", "REG1A"];

const PANEL: [Biomarker; 5] = [
    Biomarker::Creatinine,
    Biomarker::Lyve1,
    Biomarker::Reg1b,
    Biomarker::Tff1,
    Biomarker::Reg1a,
];

/// One row of model input. Missing numbers are zero; sex falls back to
/// the recorded gender.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelFeatures {
    pub age: f64,
    pub sex: u8,
    pub panel: [f64; 5],
}

impl ModelFeatures {
    pub fn from_patient(patient: &PatientRecord) -> Self {
        let mut panel = [0.0; 5];
        for (slot, biomarker) in panel.iter_mut().zip(PANEL) {
            *slot = patient
                .biomarker(biomarker)
                .map(|v| v.to_number())
                .unwrap_or(0.0);
        }
        Self {
            age: patient.age.map(f64::from).unwrap_or(0.0),
            sex: encode_sex(
                patient
                    .sex
                    .as_deref()
                    .or(patient.gender.map(|g| g.as_str())),
            ),
            panel,
        }
    }

    /// `(feature, value)` pairs in [`MODEL_FEATURES`] order.
    pub fn columns(&self) -> Vec<(&'static str, f64)> {
        let mut out = Vec::with_capacity(MODEL_FEATURES.len());
        out.push((MODEL_FEATURES[0], self.age));
        out.push((MODEL_FEATURES[1], f64::from(self.sex)));
        for (name, value) in MODEL_FEATURES[2..].iter().zip(self.panel) {
            out.push((*name, value));
        }
        out
    }

    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        for (name, value) in self.columns() {
            map.insert(name.to_string(), json!(value));
        }
        Value::Object(map)
    }
}

/// 1 for "m"/"male" in any case, else 0.
pub fn encode_sex(sex: Option<&str>) -> u8 {
    match sex.map(|s| s.trim().to_lowercase()) {
        Some(s) if s == "m" || s == "male" => 1,
        _ => 0,
    }
}
