pub mod contributions;
pub mod imaging;
pub mod narrative;
pub mod sections;
pub mod tier;

use serde::{Deserialize, Serialize};

pub use contributions::{FactorEngine, FactorInput, FactorRule, compute_factors};
pub use imaging::{ImagingStudy, build_studies};
pub use narrative::{Narrative, NarrativeContext, select_narrative};
pub use sections::{ReportSection, build_sections};
pub use tier::{RiskTier, select_tier};

/// Scores produced by the external fusion model. Percentages in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FusionAssessment {
    pub risk_score: f64,
    #[serde(default, alias = "biomarkerScore")]
    pub biomarker_model_score: Option<f64>,
    #[serde(default, alias = "ctImageScore")]
    pub imaging_model_score: Option<f64>,
}

impl FusionAssessment {
    pub fn tier(&self) -> RiskTier {
        select_tier(self.risk_score)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Impact {
    Positive,
    Negative,
}

impl Impact {
    pub fn as_str(self) -> &'static str {
        match self {
            Impact::Positive => "positive",
            Impact::Negative => "negative",
        }
    }
}

/// One weighted reason shown next to a risk assessment. Weights are
/// independent and do not sum to one.
#[derive(Debug, Clone, PartialEq)]
pub struct ContributionFactor {
    pub feature: String,
    pub contribution: f64,
    pub impact: Impact,
    pub description: String,
}
