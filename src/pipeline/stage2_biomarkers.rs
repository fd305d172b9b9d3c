use anyhow::Result;
use tracing::{debug, info};

use crate::biomarker::{merge, summarize};
use crate::ctx::Ctx;
use crate::pipeline::Stage;

pub struct Stage2Biomarkers;

impl Stage2Biomarkers {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Biomarkers {
    fn name(&self) -> &'static str {
        "stage2_biomarkers"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let overrides = ctx.patient()?.overrides();
        if overrides.is_empty() {
            debug!("no patient biomarker values; reference panel used as is");
        } else {
            debug!(overrides = overrides.len(), "patient biomarker values applied");
        }
        let classified = merge(&ctx.panel, &overrides);
        let summary = summarize(&classified);
        info!(
            normal = summary.normal,
            low = summary.low,
            elevated = summary.elevated,
            "biomarkers_classified"
        );
        ctx.classified = classified;
        ctx.summary = summary;
        Ok(())
    }
}
