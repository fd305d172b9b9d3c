use std::collections::HashMap;

use crate::biomarker::{BiomarkerId, ClassifiedBiomarker, RawValue, Severity, classify_value};

/// Patient-supplied values keyed by resolved biomarker id. Absent and empty
/// values are dropped on construction.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    by_id: HashMap<BiomarkerId, RawValue>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<RawValue>,
    {
        let mut overrides = Self::new();
        for (key, value) in pairs {
            overrides.insert(key.as_ref(), value);
        }
        overrides
    }

    /// Records a value unless one is already held for the same biomarker.
    pub fn insert(&mut self, key: &str, value: impl Into<RawValue>) {
        let value = value.into();
        if value.is_present() {
            self.by_id.entry(BiomarkerId::resolve(key)).or_insert(value);
        }
    }

    pub fn get(&self, id: &BiomarkerId) -> Option<&RawValue> {
        self.by_id.get(id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Applies overrides to the reference list. Order and length follow
/// `defaults`; entries without an override are returned untouched.
pub fn merge(defaults: &[ClassifiedBiomarker], overrides: &Overrides) -> Vec<ClassifiedBiomarker> {
    defaults
        .iter()
        .map(|entry| {
            let id = entry.reading.id();
            let Some(value) = overrides.get(&id) else {
                return entry.clone();
            };
            let severity = id
                .known()
                .map(|b| classify_value(b, value.to_number()).severity)
                .unwrap_or(Severity::Normal);
            let mut updated = entry.clone();
            updated.reading.value = value.to_string();
            updated.status = severity.status();
            updated.trend = severity.trend();
            updated
        })
        .collect()
}
