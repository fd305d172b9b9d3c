use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::biomarker::{Biomarker, BiomarkerId, Overrides, RawValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

/// Demographics and lab values for one assessment. Biomarker keys are
/// matched through the alias table, so `"ca199"` and `"CA 19-9"` are the
/// same reading.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<Gender>,
    /// Model-facing sex code ("M"/"F").
    #[serde(default)]
    pub sex: Option<String>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub symptoms: Option<String>,
    #[serde(default)]
    pub medical_history: Option<String>,
    #[serde(default)]
    pub biomarkers: BTreeMap<String, RawValue>,
}

impl PatientRecord {
    /// Supplied value for a known biomarker, if any.
    pub fn biomarker(&self, biomarker: Biomarker) -> Option<&RawValue> {
        self.biomarkers
            .iter()
            .filter(|(_, value)| value.is_present())
            .find(|(key, _)| Biomarker::from_name(key) == Some(biomarker))
            .map(|(_, value)| value)
    }

    pub fn overrides(&self) -> Overrides {
        Overrides::from_pairs(self.biomarkers.iter())
    }

    /// Keys that resolve to no known biomarker.
    pub fn unknown_biomarker_keys(&self) -> Vec<&str> {
        self.biomarkers
            .keys()
            .filter(|key| matches!(BiomarkerId::resolve(key), BiomarkerId::Unknown(_)))
            .map(String::as_str)
            .collect()
    }

    pub fn has_condition(&self, needle: &str) -> bool {
        self.condition
            .as_deref()
            .map(|c| c.to_lowercase().contains(&needle.to_lowercase()))
            .unwrap_or(false)
    }
}
