use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pan_prognosis::biomarker::{
    self, ClassifiedBiomarker, load_builtin_panel, load_panel_tsv, merge_panels,
};
use pan_prognosis::cli::{AssessArgs, Cli, Commands, PanelCommand, PanelShowArgs, PayloadArgs};
use pan_prognosis::ctx::Ctx;
use pan_prognosis::io;
use pan_prognosis::pipeline::Pipeline;
use pan_prognosis::prediction::ModelFeatures;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Assess(args) => run_assess(args)?,
        Commands::Classify(args) => {
            let c = biomarker::classify(&args.biomarker, args.value.as_str());
            println!(
                "{}\t{}\t{}\t{}",
                args.biomarker,
                args.value,
                c.status.as_str(),
                c.severity.as_str()
            );
        }
        Commands::Panel(args) => match args.command {
            PanelCommand::Show(show) => handle_panel_show(show)?,
        },
        Commands::Payload(args) => handle_payload(args)?,
    }

    Ok(())
}

fn run_assess(args: AssessArgs) -> Result<()> {
    let mut ctx = Ctx::new(
        args.patient,
        args.out,
        args.json,
        args.tsv,
        env!("CARGO_PKG_VERSION"),
    );
    ctx.risk_score = args.risk_score;
    ctx.biomarker_score = args.biomarker_score;
    ctx.imaging_score = args.imaging_score;
    ctx.prediction_path = args.prediction;
    ctx.panel_path = args.panel;

    Pipeline::assessment().run(&mut ctx)?;

    print_summary(&ctx)
}

fn print_summary(ctx: &Ctx) -> Result<()> {
    let summary = io::summary::format_summary(ctx)?;
    print!("{}", summary);
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
    Ok(())
}

fn handle_panel_show(args: PanelShowArgs) -> Result<()> {
    let mut panel = load_builtin_panel()?;
    if let Some(path) = args.panel {
        let user = load_panel_tsv(&path)?;
        panel = merge_panels(panel, user);
    }
    print_panel(&panel);
    Ok(())
}

fn print_panel(panel: &[ClassifiedBiomarker]) {
    println!("reference panel ({} entries):", panel.len());
    for b in panel {
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            b.reading.name,
            b.reading.value,
            b.reading.unit,
            b.reading.reference_range,
            b.status.as_str(),
            b.trend.as_str()
        );
    }
}

fn handle_payload(args: PayloadArgs) -> Result<()> {
    let patient = io::load_patient(&args.patient)?;
    let features = ModelFeatures::from_patient(&patient);
    println!("{}", serde_json::to_string_pretty(&features.to_json())?);
    Ok(())
}
