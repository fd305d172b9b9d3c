mod features;

use serde::{Deserialize, Serialize};

use crate::biomarker::parse_lenient;

pub use features::{MODEL_FEATURES, ModelFeatures, encode_sex};

/// Response body of the prediction service. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    #[serde(default)]
    pub prediction: Option<String>,
    #[serde(default)]
    pub class: Option<i64>,
    #[serde(default)]
    pub confidence: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Prediction with absent fields filled: label and confidence "N/A",
/// class 0.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionOutcome {
    pub label: String,
    pub class: i64,
    pub confidence: String,
    pub confidence_percent: Option<f64>,
}

impl From<&PredictionResponse> for PredictionOutcome {
    fn from(resp: &PredictionResponse) -> Self {
        let class = resp.class.unwrap_or(0);
        let label = resp
            .prediction
            .clone()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| "N/A".to_string());
        let confidence = resp
            .confidence
            .clone()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| "N/A".to_string());
        let confidence_percent = parse_confidence(&confidence);
        Self {
            label,
            class,
            confidence,
            confidence_percent,
        }
    }
}

impl PredictionOutcome {
    /// Label the service would assign to this class index.
    pub fn class_label(&self) -> &'static str {
        class_label(self.class)
    }
}

/// Dashboard risk derived from the predicted class when no fusion score is
/// available: 33 points per class step (3 reads as 99, high).
pub fn risk_from_class(class: i64) -> f64 {
    class as f64 * 33.0
}

pub fn class_label(class: i64) -> &'static str {
    match class {
        1 => "Healthy",
        2 => "Benign",
        3 => "Malignant (Fatal)",
        _ => "Unknown",
    }
}

/// `"87.50%"` reads as 87.5; "N/A" and other text as `None`.
pub fn parse_confidence(raw: &str) -> Option<f64> {
    parse_lenient(raw.trim())
}
