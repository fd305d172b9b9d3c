use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::biomarker::ClassifiedBiomarker;

pub fn write_tsv(path: &Path, biomarkers: &[ClassifiedBiomarker]) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);

    writeln!(w, "name\tvalue\tunit\treference_range\tstatus\ttrend")?;
    for b in biomarkers {
        writeln!(
            w,
            "{}\t{}\t{}\t{}\t{}\t{}",
            b.reading.name,
            b.reading.value,
            b.reading.unit,
            b.reading.reference_range,
            b.status.as_str(),
            b.trend.as_str()
        )?;
    }
    w.flush()?;
    Ok(())
}
