use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "pan-prognosis",
    version,
    about = "Biomarker classification and risk explanation"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Assess(AssessArgs),
    Classify(ClassifyArgs),
    Panel(PanelArgs),
    Payload(PayloadArgs),
}

#[derive(Debug, Args)]
pub struct AssessArgs {
    #[arg(long, help = "Patient record (JSON)")]
    pub patient: PathBuf,

    #[arg(long)]
    pub out: PathBuf,

    #[arg(long, help = "Fusion model risk score (0-100)")]
    pub risk_score: Option<f64>,

    #[arg(long, help = "Biomarker model score (0-100)")]
    pub biomarker_score: Option<f64>,

    #[arg(long, help = "Imaging model score (0-100)")]
    pub imaging_score: Option<f64>,

    #[arg(long, help = "Prediction service response (JSON)")]
    pub prediction: Option<PathBuf>,

    #[arg(long, help = "Optional reference panel TSV to overlay on the built-in panel")]
    pub panel: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long, default_value_t = false)]
    pub tsv: bool,
}

#[derive(Debug, Args)]
pub struct ClassifyArgs {
    #[arg(long, help = "Biomarker name, e.g. \"CA 19-9\"")]
    pub biomarker: String,

    #[arg(long, allow_hyphen_values = true)]
    pub value: String,
}

#[derive(Debug, Args)]
pub struct PanelArgs {
    #[command(subcommand)]
    pub command: PanelCommand,
}

#[derive(Debug, Subcommand)]
pub enum PanelCommand {
    Show(PanelShowArgs),
}

#[derive(Debug, Args)]
pub struct PanelShowArgs {
    #[arg(long, help = "Optional reference panel TSV to overlay on the built-in panel")]
    pub panel: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct PayloadArgs {
    #[arg(long, help = "Patient record (JSON)")]
    pub patient: PathBuf,
}
