mod classify;
mod merge;
mod panel;
mod summary;
mod thresholds;
mod value;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use anyhow::bail;

pub use classify::{Classification, classify, classify_value};
pub use merge::{Overrides, merge};
pub use panel::{load_builtin_panel, load_panel_tsv, merge_panels};
pub use summary::{StatusSummary, summarize};
pub use thresholds::ThresholdRule;
pub use value::{RawValue, format_number, parse_lenient, parse_value};

/// Biomarkers the assessment knows by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Biomarker {
    Ca199,
    Cea,
    Lipase,
    Amylase,
    Creatinine,
    Lyve1,
    Reg1b,
    Tff1,
    Reg1a,
}

impl Biomarker {
    pub const ALL: [Biomarker; 9] = [
        Biomarker::Ca199,
        Biomarker::Cea,
        Biomarker::Lipase,
        Biomarker::Amylase,
        Biomarker::Creatinine,
        Biomarker::Lyve1,
        Biomarker::Reg1b,
        Biomarker::Tff1,
        Biomarker::Reg1a,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Biomarker::Ca199 => "CA 19-9",
            Biomarker::Cea => "CEA",
            Biomarker::Lipase => "Lipase",
            Biomarker::Amylase => "Amylase",
            Biomarker::Creatinine => "Creatinine",
            Biomarker::Lyve1 => "LYVE1",
            Biomarker::Reg1b => "REG1B",
            Biomarker::Tff1 => "TFF1",
            Biomarker::Reg1a => "REG1A",
        }
    }

    /// Key used by patient records and the prediction service.
    pub fn key(self) -> &'static str {
        match self {
            Biomarker::Ca199 => "ca199",
            Biomarker::Cea => "cea",
            Biomarker::Lipase => "lipase",
            Biomarker::Amylase => "amylase",
            Biomarker::Creatinine => "creatinine",
            Biomarker::Lyve1 => "LYVE1",
            Biomarker::Reg1b => "REG1B",
            Biomarker::Tff1 => "TFF1",
            Biomarker::Reg1a => "REG1A",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Biomarker::Ca199 => "U/mL",
            Biomarker::Cea => "ng/mL",
            Biomarker::Lipase | Biomarker::Amylase => "U/L",
            Biomarker::Creatinine => "mg/mL",
            Biomarker::Lyve1 | Biomarker::Reg1b | Biomarker::Tff1 | Biomarker::Reg1a => "ng/mL",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Biomarker::Ca199 => &["ca 19-9", "ca19-9", "ca199", "ca 199", "ca-19-9", "ca_19_9"],
            Biomarker::Cea => &["cea"],
            Biomarker::Lipase => &["lipase"],
            Biomarker::Amylase => &["amylase"],
            Biomarker::Creatinine => &["creatinine"],
            Biomarker::Lyve1 => &["lyve1", "lyve-1"],
            Biomarker::Reg1b => &["reg1b", "reg-1b"],
            Biomarker::Tff1 => &["tff1", "tff-1"],
            Biomarker::Reg1a => &["reg1a", "reg-1a"],
        }
    }

    /// Case-insensitive lookup over every accepted alias.
    pub fn from_name(name: &str) -> Option<Self> {
        ALIAS_INDEX.get(name.trim().to_lowercase().as_str()).copied()
    }
}

impl fmt::Display for Biomarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

static ALIAS_INDEX: LazyLock<HashMap<&'static str, Biomarker>> = LazyLock::new(|| {
    let mut index = HashMap::new();
    for biomarker in Biomarker::ALL {
        for &alias in biomarker.aliases() {
            index.insert(alias, biomarker);
        }
    }
    index
});

/// A biomarker name resolved against the alias table. Names outside the
/// table pass through under their lowercased spelling with whitespace and
/// hyphens removed, so `"Bili-Rubin"` and `"bilirubin"` are one id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BiomarkerId {
    Known(Biomarker),
    Unknown(String),
}

impl BiomarkerId {
    pub fn resolve(name: &str) -> Self {
        match Biomarker::from_name(name) {
            Some(b) => BiomarkerId::Known(b),
            None => BiomarkerId::Unknown(compact_key(name)),
        }
    }

    pub fn known(&self) -> Option<Biomarker> {
        match self {
            BiomarkerId::Known(b) => Some(*b),
            BiomarkerId::Unknown(_) => None,
        }
    }
}

fn compact_key(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Elevated,
    Normal,
    Low,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Elevated => "elevated",
            Status::Normal => "normal",
            Status::Low => "low",
        }
    }
}

impl FromStr for Status {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "elevated" => Ok(Status::Elevated),
            "normal" => Ok(Status::Normal),
            "low" => Ok(Status::Low),
            other => bail!("unknown biomarker status '{}'", other),
        }
    }
}

/// Finer grading behind [`Status`]; high and moderate both read as elevated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    High,
    Moderate,
    Low,
    Normal,
}

impl Severity {
    pub fn status(self) -> Status {
        match self {
            Severity::High | Severity::Moderate => Status::Elevated,
            Severity::Low => Status::Low,
            Severity::Normal => Status::Normal,
        }
    }

    /// Trend assigned to a freshly classified reading. Nothing maps to
    /// [`Trend::Down`].
    pub fn trend(self) -> Trend {
        match self {
            Severity::High | Severity::Moderate => Trend::Up,
            Severity::Low | Severity::Normal => Trend::Stable,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Moderate => "moderate",
            Severity::Low => "low",
            Severity::Normal => "normal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub fn as_str(self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Stable => "stable",
        }
    }
}

impl FromStr for Trend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "up" => Ok(Trend::Up),
            "down" => Ok(Trend::Down),
            "stable" => Ok(Trend::Stable),
            other => bail!("unknown biomarker trend '{}'", other),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BiomarkerReading {
    pub name: String,
    pub value: String,
    pub unit: String,
    pub reference_range: String,
}

impl BiomarkerReading {
    pub fn id(&self) -> BiomarkerId {
        BiomarkerId::resolve(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedBiomarker {
    pub reading: BiomarkerReading,
    pub status: Status,
    pub trend: Trend,
}
