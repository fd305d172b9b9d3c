use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::biomarker::{BiomarkerId, BiomarkerReading, ClassifiedBiomarker, Status, Trend};

pub fn load_builtin_panel() -> Result<Vec<ClassifiedBiomarker>> {
    let content = include_str!("../../assets/panels/reference_panel_v1.tsv");
    parse_panel_tsv(content, "built-in v1")
}

pub fn load_panel_tsv(path: &Path) -> Result<Vec<ClassifiedBiomarker>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read panel TSV {}", path.display()))?;
    parse_panel_tsv(&content, &path.display().to_string())
}

/// Overlays `user` rows on `builtin`: matching biomarkers are replaced in
/// place, the rest are appended in file order.
pub fn merge_panels(
    builtin: Vec<ClassifiedBiomarker>,
    user: Vec<ClassifiedBiomarker>,
) -> Vec<ClassifiedBiomarker> {
    if user.is_empty() {
        return builtin;
    }
    let mut order = Vec::with_capacity(user.len());
    let mut user_map: HashMap<BiomarkerId, ClassifiedBiomarker> = HashMap::new();
    for entry in user {
        let id = entry.reading.id();
        if !user_map.contains_key(&id) {
            order.push(id.clone());
        }
        user_map.insert(id, entry);
    }

    let mut merged = Vec::with_capacity(builtin.len() + user_map.len());
    for entry in builtin {
        match user_map.remove(&entry.reading.id()) {
            Some(user_entry) => merged.push(user_entry),
            None => merged.push(entry),
        }
    }
    for id in order {
        if let Some(entry) = user_map.remove(&id) {
            merged.push(entry);
        }
    }
    merged
}

fn parse_panel_tsv(content: &str, source: &str) -> Result<Vec<ClassifiedBiomarker>> {
    let mut out = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }
        let parts: Vec<&str> = line.split('\t').map(str::trim).collect();
        if parts.len() != 6 {
            bail!("{}:{} malformed TSV (expected 6 columns)", source, line_no);
        }
        if parts[0].is_empty() {
            bail!("{}:{} empty biomarker name", source, line_no);
        }
        let status = parts[4]
            .parse::<Status>()
            .with_context(|| format!("{}:{} invalid status", source, line_no))?;
        let trend = parts[5]
            .parse::<Trend>()
            .with_context(|| format!("{}:{} invalid trend", source, line_no))?;
        out.push(ClassifiedBiomarker {
            reading: BiomarkerReading {
                name: parts[0].to_string(),
                value: parts[1].to_string(),
                unit: parts[2].to_string(),
                reference_range: parts[3].to_string(),
            },
            status,
            trend,
        });
    }
    Ok(out)
}
