use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientMeta {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub condition: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FusionScores {
    pub risk_score: f64,
    pub biomarker_model_score: Option<f64>,
    pub imaging_model_score: Option<f64>,
    pub tier: String,
    pub imaging_tier: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub label: String,
    pub class: i64,
    pub class_label: String,
    pub confidence: String,
    pub confidence_percent: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Biomarker {
    pub name: String,
    pub value: String,
    pub unit: String,
    pub reference_range: String,
    pub status: String,
    pub trend: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusSummary {
    pub normal: u64,
    pub low: u64,
    pub elevated: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContributionFactor {
    pub feature: String,
    pub contribution: f64,
    pub impact: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Narrative {
    pub findings: String,
    pub recommendation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSection {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagingStudy {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub findings: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub patient: PatientMeta,
    pub fusion: FusionScores,
    pub prediction: Option<Prediction>,
    pub biomarkers: Vec<Biomarker>,
    pub summary: StatusSummary,
    pub contributions: Vec<ContributionFactor>,
    pub narrative: Option<Narrative>,
    pub report_sections: Vec<ReportSection>,
    #[serde(default)]
    pub imaging_studies: Vec<ImagingStudy>,
}

impl AssessmentV1 {
    pub fn empty(tool_version: &str) -> Self {
        Self {
            tool: "pan-prognosis".to_string(),
            version: tool_version.to_string(),
            schema_version: "v1".to_string(),
            patient: PatientMeta {
                name: None,
                age: None,
                gender: None,
                condition: None,
            },
            fusion: FusionScores {
                risk_score: 0.0,
                biomarker_model_score: None,
                imaging_model_score: None,
                tier: "low".to_string(),
                imaging_tier: None,
            },
            prediction: None,
            biomarkers: Vec::new(),
            summary: StatusSummary::default(),
            contributions: Vec::new(),
            narrative: None,
            report_sections: Vec::new(),
            imaging_studies: Vec::new(),
        }
    }
}
