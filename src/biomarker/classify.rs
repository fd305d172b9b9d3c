use crate::biomarker::{Biomarker, RawValue, Severity, Status};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub status: Status,
    pub severity: Severity,
}

impl From<Severity> for Classification {
    fn from(severity: Severity) -> Self {
        Self {
            status: severity.status(),
            severity,
        }
    }
}

/// Classifies a raw reading by biomarker name. Unknown names read as normal;
/// unparsable values are classified as zero.
pub fn classify(name: &str, raw: impl Into<RawValue>) -> Classification {
    let value = raw.into().to_number();
    match Biomarker::from_name(name) {
        Some(biomarker) => classify_value(biomarker, value),
        None => Severity::Normal.into(),
    }
}

pub fn classify_value(biomarker: Biomarker, value: f64) -> Classification {
    biomarker
        .thresholds()
        .map(|rule| rule.severity(value))
        .unwrap_or(Severity::Normal)
        .into()
}
