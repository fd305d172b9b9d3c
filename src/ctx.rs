use std::path::PathBuf;

use crate::biomarker::{ClassifiedBiomarker, StatusSummary};
use crate::patient::PatientRecord;
use crate::prediction::PredictionOutcome;
use crate::schema::v1::AssessmentV1;
use crate::scores::{
    ContributionFactor, FusionAssessment, ImagingStudy, Narrative, ReportSection, RiskTier,
};

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub json_path: PathBuf,
    pub tsv_path: PathBuf,
}

/// State carried through the assessment stages.
#[derive(Debug)]
pub struct Ctx {
    pub patient_path: PathBuf,
    pub prediction_path: Option<PathBuf>,
    pub panel_path: Option<PathBuf>,
    pub write_json: bool,
    pub write_tsv: bool,
    pub risk_score: Option<f64>,
    pub biomarker_score: Option<f64>,
    pub imaging_score: Option<f64>,
    pub patient: Option<PatientRecord>,
    pub prediction: Option<PredictionOutcome>,
    pub fusion: Option<FusionAssessment>,
    pub panel: Vec<ClassifiedBiomarker>,
    pub classified: Vec<ClassifiedBiomarker>,
    pub summary: StatusSummary,
    pub factors: Vec<ContributionFactor>,
    pub tier: Option<RiskTier>,
    pub narrative: Option<Narrative>,
    pub sections: Vec<ReportSection>,
    pub studies: Vec<ImagingStudy>,
    pub warnings: Vec<String>,
    pub output: OutputPaths,
    pub report: AssessmentV1,
}

impl Ctx {
    pub fn new(
        patient_path: PathBuf,
        out_dir: PathBuf,
        write_json: bool,
        write_tsv: bool,
        tool_version: &str,
    ) -> Self {
        let json_path = out_dir.join("assessment.json");
        let tsv_path = out_dir.join("biomarkers.tsv");
        Self {
            patient_path,
            prediction_path: None,
            panel_path: None,
            write_json,
            write_tsv,
            risk_score: None,
            biomarker_score: None,
            imaging_score: None,
            patient: None,
            prediction: None,
            fusion: None,
            panel: Vec::new(),
            classified: Vec::new(),
            summary: StatusSummary::default(),
            factors: Vec::new(),
            tier: None,
            narrative: None,
            sections: Vec::new(),
            studies: Vec::new(),
            warnings: Vec::new(),
            output: OutputPaths {
                out_dir,
                json_path,
                tsv_path,
            },
            report: AssessmentV1::empty(tool_version),
        }
    }

    pub fn patient(&self) -> anyhow::Result<&PatientRecord> {
        self.patient
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("patient record missing"))
    }

    pub fn fusion(&self) -> anyhow::Result<&FusionAssessment> {
        self.fusion
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("fusion assessment missing"))
    }
}
