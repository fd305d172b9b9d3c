use std::path::Path;

use anyhow::{Context, Result};

use crate::ctx::Ctx;
use crate::schema::v1::{
    AssessmentV1, Biomarker, ContributionFactor, FusionScores, ImagingStudy, Narrative, PatientMeta,
    Prediction, ReportSection, StatusSummary,
};
use crate::scores::select_tier;

pub fn build_report(ctx: &Ctx) -> Result<AssessmentV1> {
    let patient = ctx.patient()?;
    let fusion = ctx.fusion()?;

    let patient_meta = PatientMeta {
        name: patient.name.clone(),
        age: patient.age,
        gender: patient.gender.map(|g| g.as_str().to_string()),
        condition: patient.condition.clone(),
    };

    let fusion_scores = FusionScores {
        risk_score: fusion.risk_score,
        biomarker_model_score: fusion.biomarker_model_score,
        imaging_model_score: fusion.imaging_model_score,
        tier: ctx.tier.unwrap_or_else(|| fusion.tier()).as_str().to_string(),
        imaging_tier: fusion
            .imaging_model_score
            .map(|s| select_tier(s).as_str().to_string()),
    };

    let prediction = ctx.prediction.as_ref().map(|p| Prediction {
        label: p.label.clone(),
        class: p.class,
        class_label: p.class_label().to_string(),
        confidence: p.confidence.clone(),
        confidence_percent: p.confidence_percent,
    });

    let biomarkers = ctx
        .classified
        .iter()
        .map(|b| Biomarker {
            name: b.reading.name.clone(),
            value: b.reading.value.clone(),
            unit: b.reading.unit.clone(),
            reference_range: b.reading.reference_range.clone(),
            status: b.status.as_str().to_string(),
            trend: b.trend.as_str().to_string(),
        })
        .collect::<Vec<_>>();

    let summary = StatusSummary {
        normal: ctx.summary.normal as u64,
        low: ctx.summary.low as u64,
        elevated: ctx.summary.elevated as u64,
    };

    let contributions = ctx
        .factors
        .iter()
        .map(|f| ContributionFactor {
            feature: f.feature.clone(),
            contribution: f.contribution,
            impact: f.impact.as_str().to_string(),
            description: f.description.clone(),
        })
        .collect::<Vec<_>>();

    let narrative = ctx.narrative.as_ref().map(|n| Narrative {
        findings: n.findings_text.clone(),
        recommendation: n.recommendation_text.clone(),
    });

    let report_sections = ctx
        .sections
        .iter()
        .map(|s| ReportSection {
            title: s.title.clone(),
            content: s.content.clone(),
        })
        .collect::<Vec<_>>();

    let imaging_studies = ctx
        .studies
        .iter()
        .map(|s| ImagingStudy {
            id: s.id.clone(),
            name: s.name.clone(),
            kind: s.kind.clone(),
            findings: s.findings.clone(),
        })
        .collect::<Vec<_>>();

    Ok(AssessmentV1 {
        tool: "pan-prognosis".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        schema_version: "v1".to_string(),
        patient: patient_meta,
        fusion: fusion_scores,
        prediction,
        biomarkers,
        summary,
        contributions,
        narrative,
        report_sections,
        imaging_studies,
    })
}

pub fn write_json(path: &Path, report: &AssessmentV1) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}
