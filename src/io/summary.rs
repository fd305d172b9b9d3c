use anyhow::Result;

use crate::ctx::Ctx;

pub fn format_summary(ctx: &Ctx) -> Result<String> {
    let version = env!("CARGO_PKG_VERSION");
    let patient = ctx.patient()?;
    let fusion = ctx.fusion()?;
    let tier = ctx.tier.unwrap_or_else(|| fusion.tier());

    let mut out = String::new();
    out.push_str(&format!("pan-prognosis v{}\n", version));
    out.push_str(&format!(
        "Patient: {}, age={}\n",
        patient.name.as_deref().unwrap_or("unnamed"),
        patient
            .age
            .map(|a| a.to_string())
            .unwrap_or_else(|| "unknown".to_string())
    ));
    out.push_str(&format!(
        "Risk: {}% ({})\n",
        crate::biomarker::format_number(fusion.risk_score),
        tier.label()
    ));
    if let Some(p) = &ctx.prediction {
        out.push_str(&format!(
            "Prediction: {} (class {}, confidence {})\n",
            p.label, p.class, p.confidence
        ));
    }
    out.push_str(&format!(
        "Biomarkers: {} normal, {} low, {} elevated\n",
        ctx.summary.normal, ctx.summary.low, ctx.summary.elevated
    ));

    if ctx.factors.is_empty() {
        out.push_str("Factors: none\n");
    } else {
        let factors: Vec<String> = ctx
            .factors
            .iter()
            .map(|f| format!("{} {:+.1}%", f.feature, f.contribution * 100.0))
            .collect();
        out.push_str(&format!("Factors: {}\n", factors.join(", ")));
    }

    Ok(out)
}
