use anyhow::Result;
use tracing::{debug, info};

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::scores::{FactorEngine, FactorInput};

pub struct Stage3Contributions;

impl Stage3Contributions {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Contributions {
    fn name(&self) -> &'static str {
        "stage3_contributions"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let imaging_score = ctx.fusion()?.imaging_model_score;
        let engine = FactorEngine::standard();
        debug!(rules = ?engine.rule_names(), "factor rules loaded");
        let factors = engine.evaluate(&FactorInput {
            patient: ctx.patient()?,
            imaging_score,
        });
        info!(factors = factors.len(), "contributions_ready");
        ctx.factors = factors;
        Ok(())
    }
}
