use crate::biomarker::{ClassifiedBiomarker, Status};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusSummary {
    pub normal: usize,
    pub low: usize,
    pub elevated: usize,
}

impl StatusSummary {
    pub fn total(&self) -> usize {
        self.normal + self.low + self.elevated
    }
}

pub fn summarize(classified: &[ClassifiedBiomarker]) -> StatusSummary {
    let mut summary = StatusSummary::default();
    for entry in classified {
        match entry.status {
            Status::Normal => summary.normal += 1,
            Status::Low => summary.low += 1,
            Status::Elevated => summary.elevated += 1,
        }
    }
    summary
}
