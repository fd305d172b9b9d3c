use crate::biomarker::{Biomarker, Severity, Status, classify_value, format_number};
use crate::patient::PatientRecord;
use crate::scores::{ContributionFactor, Impact};

const IMAGING_DEFAULT_SCORE: f64 = 50.0;
const IMAGING_WEIGHT: f64 = 0.3;

/// Everything a factor rule may look at.
#[derive(Debug, Clone, Copy)]
pub struct FactorInput<'a> {
    pub patient: &'a PatientRecord,
    pub imaging_score: Option<f64>,
}

/// A predicate with a weight: yields a factor when its trigger is present.
pub trait FactorRule {
    fn name(&self) -> &'static str;
    fn evaluate(&self, input: &FactorInput<'_>) -> Option<ContributionFactor>;
}

/// Runs rules in order; output order is rule order.
pub struct FactorEngine {
    rules: Vec<Box<dyn FactorRule + Send + Sync>>,
}

impl FactorEngine {
    pub fn new(rules: Vec<Box<dyn FactorRule + Send + Sync>>) -> Self {
        Self { rules }
    }

    /// Age, CA 19-9, CEA, imaging, pancreatic mass.
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(AgeRule::new()),
            Box::new(BiomarkerRule::new(
                Biomarker::Ca199,
                "tumor marker",
                SeverityWeights {
                    high: 0.35,
                    moderate: 0.20,
                    baseline: 0.05,
                },
            )),
            Box::new(BiomarkerRule::new(
                Biomarker::Cea,
                "tumor marker",
                SeverityWeights {
                    high: 0.25,
                    moderate: 0.15,
                    baseline: 0.05,
                },
            )),
            Box::new(ImagingRule::new()),
            Box::new(ConditionRule::new(
                "mass",
                "Pancreatic Mass",
                0.25,
                "Identified pancreatic mass - significant risk factor",
            )),
        ])
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    pub fn evaluate(&self, input: &FactorInput<'_>) -> Vec<ContributionFactor> {
        self.rules.iter().filter_map(|r| r.evaluate(input)).collect()
    }
}

pub fn compute_factors(patient: &PatientRecord, imaging_score: Option<f64>) -> Vec<ContributionFactor> {
    FactorEngine::standard().evaluate(&FactorInput {
        patient,
        imaging_score,
    })
}

pub struct AgeRule {
    threshold: u32,
    elevated: f64,
    baseline: f64,
}

impl AgeRule {
    pub fn new() -> Self {
        Self {
            threshold: 60,
            elevated: 0.15,
            baseline: 0.05,
        }
    }
}

impl Default for AgeRule {
    fn default() -> Self {
        Self::new()
    }
}

impl FactorRule for AgeRule {
    fn name(&self) -> &'static str {
        "age"
    }

    fn evaluate(&self, input: &FactorInput<'_>) -> Option<ContributionFactor> {
        let age = input.patient.age;
        let increased = age.is_some_and(|a| a > self.threshold);
        let age_text = age.map(|a| a.to_string()).unwrap_or_else(|| "unknown".to_string());
        Some(ContributionFactor {
            feature: "Age Factor".to_string(),
            contribution: if increased { self.elevated } else { self.baseline },
            impact: Impact::Positive,
            description: format!(
                "Age {} - {} risk factor",
                age_text,
                if increased { "increased" } else { "normal" }
            ),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeverityWeights {
    pub high: f64,
    pub moderate: f64,
    pub baseline: f64,
}

impl SeverityWeights {
    fn weight(&self, severity: Severity) -> f64 {
        match severity {
            Severity::High => self.high,
            Severity::Moderate => self.moderate,
            Severity::Low | Severity::Normal => self.baseline,
        }
    }
}

/// Fires only when the patient supplied a value for `biomarker`; the weight
/// follows the threshold table's severity for that value.
pub struct BiomarkerRule {
    biomarker: Biomarker,
    noun: &'static str,
    weights: SeverityWeights,
}

impl BiomarkerRule {
    pub fn new(biomarker: Biomarker, noun: &'static str, weights: SeverityWeights) -> Self {
        Self {
            biomarker,
            noun,
            weights,
        }
    }
}

impl FactorRule for BiomarkerRule {
    fn name(&self) -> &'static str {
        self.biomarker.key()
    }

    fn evaluate(&self, input: &FactorInput<'_>) -> Option<ContributionFactor> {
        let raw = input.patient.biomarker(self.biomarker)?;
        let value = raw.to_number();
        let classification = classify_value(self.biomarker, value);
        let state = if classification.status == Status::Elevated {
            "elevated"
        } else {
            "normal"
        };
        Some(ContributionFactor {
            feature: format!("{} Level", self.biomarker.display_name()),
            contribution: self.weights.weight(classification.severity),
            impact: Impact::Positive,
            description: format!(
                "{}: {} {} - {} {}",
                self.biomarker.display_name(),
                format_number(value),
                self.biomarker.unit(),
                state,
                self.noun
            ),
        })
    }
}

/// Always present; an absent imaging score counts as 50.
pub struct ImagingRule {
    default_score: f64,
    weight: f64,
}

impl ImagingRule {
    pub fn new() -> Self {
        Self {
            default_score: IMAGING_DEFAULT_SCORE,
            weight: IMAGING_WEIGHT,
        }
    }
}

impl Default for ImagingRule {
    fn default() -> Self {
        Self::new()
    }
}

impl FactorRule for ImagingRule {
    fn name(&self) -> &'static str {
        "imaging"
    }

    fn evaluate(&self, input: &FactorInput<'_>) -> Option<ContributionFactor> {
        let score = input.imaging_score.unwrap_or(self.default_score);
        let shown = input
            .imaging_score
            .map(format_number)
            .unwrap_or_else(|| "N/A".to_string());
        Some(ContributionFactor {
            feature: "CT Imaging".to_string(),
            contribution: score / 100.0 * self.weight,
            impact: Impact::Positive,
            description: format!("AI imaging analysis: {}% confidence", shown),
        })
    }
}

/// Fires when the free-text condition contains `needle`, case-insensitively.
pub struct ConditionRule {
    needle: &'static str,
    feature: &'static str,
    weight: f64,
    description: &'static str,
}

impl ConditionRule {
    pub fn new(
        needle: &'static str,
        feature: &'static str,
        weight: f64,
        description: &'static str,
    ) -> Self {
        Self {
            needle,
            feature,
            weight,
            description,
        }
    }
}

impl FactorRule for ConditionRule {
    fn name(&self) -> &'static str {
        "condition"
    }

    fn evaluate(&self, input: &FactorInput<'_>) -> Option<ContributionFactor> {
        if !input.patient.has_condition(self.needle) {
            return None;
        }
        Some(ContributionFactor {
            feature: self.feature.to_string(),
            contribution: self.weight,
            impact: Impact::Positive,
            description: self.description.to_string(),
        })
    }
}
