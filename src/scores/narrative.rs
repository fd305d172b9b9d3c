use crate::biomarker::format_number;
use crate::scores::tier::{RiskTier, select_tier};

const SCORE_SLOT: &str = "{score}";

/// Fixed text for one tier. `findings` carries a `{score}` slot.
#[derive(Debug, Clone, Copy)]
pub struct TierNarrative {
    pub tier: RiskTier,
    pub findings: &'static str,
    pub recommendation: &'static str,
}

pub static NARRATIVES: [TierNarrative; 3] = [
    TierNarrative {
        tier: RiskTier::Low,
        findings: "CT imaging appears relatively normal with {score}% AI confidence score. Routine follow-up appropriate.",
        recommendation: "Routine monitoring appropriate. Annual screening recommended for high-risk patients. Lifestyle modifications and dietary counseling may be beneficial.",
    },
    TierNarrative {
        tier: RiskTier::Moderate,
        findings: "CT imaging shows moderate pancreatic changes with {score}% AI confidence score. Continued monitoring and follow-up imaging recommended.",
        recommendation: "Close monitoring and follow-up recommended. Consider repeat imaging in 3-6 months. Oncology consultation may be beneficial for risk stratification and management planning.",
    },
    TierNarrative {
        tier: RiskTier::High,
        findings: "CT imaging reveals significant pancreatic abnormalities with {score}% AI confidence score. Advanced imaging analysis indicates areas of concern requiring immediate attention.",
        recommendation: "Immediate oncology referral strongly recommended. Consider endoscopic ultrasound with fine needle aspiration for tissue diagnosis. Multidisciplinary team evaluation and staging workup indicated.",
    },
];

pub fn narrative_for(tier: RiskTier) -> &'static TierNarrative {
    match tier {
        RiskTier::Low => &NARRATIVES[0],
        RiskTier::Moderate => &NARRATIVES[1],
        RiskTier::High => &NARRATIVES[2],
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NarrativeContext {
    pub imaging_score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Narrative {
    pub findings_text: String,
    pub recommendation_text: String,
}

/// The recommendation follows `tier`; the findings text follows the tier of
/// the imaging score on its own, reading an absent score as low and "N/A".
pub fn select_narrative(tier: RiskTier, ctx: &NarrativeContext) -> Narrative {
    let imaging_tier = ctx
        .imaging_score
        .map(select_tier)
        .unwrap_or(RiskTier::Low);
    Narrative {
        findings_text: findings_text(imaging_tier, ctx.imaging_score),
        recommendation_text: narrative_for(tier).recommendation.to_string(),
    }
}

pub fn findings_text(tier: RiskTier, score: Option<f64>) -> String {
    narrative_for(tier)
        .findings
        .replace(SCORE_SLOT, &score_or_na(score))
}

pub(crate) fn score_or_na(score: Option<f64>) -> String {
    score.map(format_number).unwrap_or_else(|| "N/A".to_string())
}
