use crate::biomarker::{Biomarker, Severity};

/// Cut-offs for one biomarker. Elevated tiers trigger strictly above their
/// bound, the low tier strictly below.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdRule {
    pub high_above: f64,
    pub moderate_above: f64,
    pub low_below: Option<f64>,
}

const CA199: ThresholdRule = ThresholdRule {
    high_above: 100.0,
    moderate_above: 37.0,
    low_below: None,
};

const CEA: ThresholdRule = ThresholdRule {
    high_above: 5.0,
    moderate_above: 3.0,
    low_below: None,
};

const LIPASE: ThresholdRule = ThresholdRule {
    high_above: 200.0,
    moderate_above: 140.0,
    low_below: Some(10.0),
};

const AMYLASE: ThresholdRule = ThresholdRule {
    high_above: 150.0,
    moderate_above: 110.0,
    low_below: Some(30.0),
};

impl ThresholdRule {
    pub fn severity(&self, value: f64) -> Severity {
        if value > self.high_above {
            return Severity::High;
        }
        if value > self.moderate_above {
            return Severity::Moderate;
        }
        if let Some(low) = self.low_below {
            if value < low {
                return Severity::Low;
            }
        }
        Severity::Normal
    }
}

impl Biomarker {
    /// Threshold table entry; panel-only markers have none and always read
    /// as normal.
    pub fn thresholds(self) -> Option<ThresholdRule> {
        match self {
            Biomarker::Ca199 => Some(CA199),
            Biomarker::Cea => Some(CEA),
            Biomarker::Lipase => Some(LIPASE),
            Biomarker::Amylase => Some(AMYLASE),
            Biomarker::Creatinine
            | Biomarker::Lyve1
            | Biomarker::Reg1b
            | Biomarker::Tff1
            | Biomarker::Reg1a => None,
        }
    }
}
