use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use crate::patient::PatientRecord;
use crate::prediction::PredictionResponse;

pub mod json_writer;
pub mod summary;
pub mod tsv_writer;

pub fn load_patient(path: &Path) -> Result<PatientRecord> {
    read_json(path).with_context(|| format!("invalid patient record {}", path.display()))
}

pub fn load_prediction(path: &Path) -> Result<PredictionResponse> {
    read_json(path).with_context(|| format!("invalid prediction response {}", path.display()))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let value = serde_json::from_reader(BufReader::new(file))?;
    Ok(value)
}
