use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::scores::{NarrativeContext, build_sections, build_studies, select_narrative};

pub struct Stage4Narrative;

impl Stage4Narrative {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage4Narrative {
    fn name(&self) -> &'static str {
        "stage4_narrative"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let fusion = *ctx.fusion()?;
        let tier = fusion.tier();
        let narrative = select_narrative(
            tier,
            &NarrativeContext {
                imaging_score: fusion.imaging_model_score,
            },
        );
        let sections = build_sections(ctx.patient()?, &fusion);
        let studies = build_studies(ctx.patient()?);
        info!(
            tier = tier.as_str(),
            sections = sections.len(),
            studies = studies.len(),
            "narrative_ready"
        );
        ctx.tier = Some(tier);
        ctx.narrative = Some(narrative);
        ctx.sections = sections;
        ctx.studies = studies;
        Ok(())
    }
}
