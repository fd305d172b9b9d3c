use anyhow::Result;
use tracing::{info, warn};

use crate::biomarker::{load_builtin_panel, load_panel_tsv, merge_panels};
use crate::ctx::Ctx;
use crate::io;
use crate::pipeline::Stage;
use crate::prediction::{PredictionOutcome, risk_from_class};
use crate::scores::FusionAssessment;

pub struct Stage1Input;

impl Stage1Input {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Input {
    fn name(&self) -> &'static str {
        "stage1_input"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let patient = io::load_patient(&ctx.patient_path)?;
        for key in patient.unknown_biomarker_keys() {
            ctx.warnings
                .push(format!("biomarker '{}' is not in the reference table", key));
        }
        for (key, value) in &patient.biomarkers {
            if value.is_present() && value.as_number().is_none() {
                ctx.warnings
                    .push(format!("biomarker '{}' value '{}' is not numeric; read as 0", key, value));
            }
        }
        info!(
            patient = patient.name.as_deref().unwrap_or("unnamed"),
            biomarkers = patient.biomarkers.len(),
            "patient_loaded"
        );

        let mut panel = load_builtin_panel()?;
        if let Some(path) = &ctx.panel_path {
            let user = load_panel_tsv(path)?;
            panel = merge_panels(panel, user);
        }
        info!(entries = panel.len(), "reference_panel_ready");

        let mut predicted_class = None;
        if let Some(path) = &ctx.prediction_path {
            let response = io::load_prediction(path)?;
            if let Some(err) = &response.error {
                warn!(error = %err, "prediction service reported an error");
                ctx.warnings.push(format!("prediction service error: {}", err));
            }
            predicted_class = response.class;
            ctx.prediction = Some(PredictionOutcome::from(&response));
        }

        let risk_score = match (ctx.risk_score, predicted_class) {
            (Some(score), _) => score,
            (None, Some(class)) => {
                let score = risk_from_class(class);
                info!(class, risk_score = score, "risk score derived from predicted class");
                ctx.warnings.push(format!(
                    "risk score not supplied; derived {} from predicted class {}",
                    score, class
                ));
                score
            }
            (None, None) => {
                ctx.warnings
                    .push("risk score not supplied; using 0".to_string());
                0.0
            }
        };
        for (label, score) in [
            ("risk", Some(risk_score)),
            ("biomarker model", ctx.biomarker_score),
            ("imaging model", ctx.imaging_score),
        ] {
            if let Some(s) = score {
                if !(0.0..=100.0).contains(&s) {
                    ctx.warnings
                        .push(format!("{} score {} is outside 0-100", label, s));
                }
            }
        }
        ctx.fusion = Some(FusionAssessment {
            risk_score,
            biomarker_model_score: ctx.biomarker_score,
            imaging_model_score: ctx.imaging_score,
        });

        ctx.patient = Some(patient);
        ctx.panel = panel;
        Ok(())
    }
}
