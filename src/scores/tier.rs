const HIGH_ABOVE: f64 = 70.0;
// Inclusive: a score of exactly 40 is moderate, not low.
const MODERATE_FROM: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskTier::Low => "low",
            RiskTier::Moderate => "moderate",
            RiskTier::High => "high",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskTier::Low => "Low Risk",
            RiskTier::Moderate => "Moderate Risk",
            RiskTier::High => "High Risk",
        }
    }
}

/// Scores above 70 are high; 40 through 70 inclusive are moderate.
pub fn select_tier(score: f64) -> RiskTier {
    if score > HIGH_ABOVE {
        RiskTier::High
    } else if score >= MODERATE_FROM {
        RiskTier::Moderate
    } else {
        RiskTier::Low
    }
}
