use crate::biomarker::{Biomarker, Status, classify_value, format_number};
use crate::patient::PatientRecord;
use crate::scores::FusionAssessment;
use crate::scores::narrative::{NarrativeContext, score_or_na, select_narrative};

const LAB_PANEL: [Biomarker; 4] = [
    Biomarker::Ca199,
    Biomarker::Cea,
    Biomarker::Lipase,
    Biomarker::Amylase,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSection {
    pub title: String,
    pub content: String,
}

impl ReportSection {
    fn new(title: &str, content: String) -> Self {
        Self {
            title: title.to_string(),
            content,
        }
    }
}

/// Clinical summary, imaging findings, laboratory results, fusion analysis
/// and recommendations, in that order.
pub fn build_sections(patient: &PatientRecord, fusion: &FusionAssessment) -> Vec<ReportSection> {
    let narrative = select_narrative(
        fusion.tier(),
        &NarrativeContext {
            imaging_score: fusion.imaging_model_score,
        },
    );
    vec![
        ReportSection::new("Clinical Summary", clinical_summary(patient)),
        ReportSection::new("Imaging Findings", narrative.findings_text),
        ReportSection::new("Laboratory Results", laboratory_results(patient)),
        ReportSection::new("AI Fusion Analysis", fusion_analysis(fusion)),
        ReportSection::new("Clinical Recommendations", narrative.recommendation_text),
    ]
}

fn clinical_summary(patient: &PatientRecord) -> String {
    let age = patient
        .age
        .map(|a| a.to_string())
        .unwrap_or_else(|| "Adult".to_string());
    let gender = patient
        .gender
        .map(|g| g.as_str().to_lowercase())
        .unwrap_or_else(|| "patient".to_string());
    let symptoms = non_empty(&patient.symptoms).unwrap_or("abdominal symptoms");
    let condition = match non_empty(&patient.condition) {
        Some(c) => format!("Primary condition: {}.", c),
        None => "Clinical assessment in progress.".to_string(),
    };
    let history = match non_empty(&patient.medical_history) {
        Some(h) => format!("Medical history: {}", h),
        None => String::new(),
    };
    format!(
        "{}-year-old {} presenting with {}. {} {}",
        age, gender, symptoms, condition, history
    )
    .trim_end()
    .to_string()
}

fn laboratory_results(patient: &PatientRecord) -> String {
    let results: Vec<String> = LAB_PANEL
        .iter()
        .filter_map(|&b| {
            let value = patient.biomarker(b)?.to_number();
            let state = if classify_value(b, value).status == Status::Elevated {
                "elevated"
            } else {
                "normal"
            };
            Some(format!(
                "{}: {} {} ({})",
                b.display_name(),
                format_number(value),
                b.unit(),
                state
            ))
        })
        .collect();
    if results.is_empty() {
        return "Laboratory results pending or not available. Standard pancreatic function tests recommended."
            .to_string();
    }
    format!(
        "{}. Complete blood count and basic metabolic panel results integrated into assessment.",
        results.join(", ")
    )
}

fn fusion_analysis(fusion: &FusionAssessment) -> String {
    format!(
        "Advanced machine learning fusion model indicates {}% overall risk assessment. Biomarker model contribution: {}%, CT imaging model contribution: {}%. The fusion layer combines multiple data sources for comprehensive risk stratification.",
        format_number(fusion.risk_score),
        score_or_na(fusion.biomarker_model_score),
        score_or_na(fusion.imaging_model_score)
    )
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
