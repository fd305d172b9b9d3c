use clap::Parser;
use pan_prognosis::cli::{Cli, Commands};

#[test]
fn assess_scores_are_optional() {
    let cli = Cli::parse_from([
        "pan-prognosis",
        "assess",
        "--patient",
        "p.json",
        "--out",
        "out",
    ]);
    match cli.command {
        Commands::Assess(args) => {
            assert!(args.risk_score.is_none());
            assert!(args.imaging_score.is_none());
            assert!(!args.json);
        }
        _ => panic!("expected assess command"),
    }
}

#[test]
fn assess_accepts_fractional_scores() {
    let cli = Cli::parse_from([
        "pan-prognosis",
        "assess",
        "--patient",
        "p.json",
        "--out",
        "out",
        "--risk-score",
        "40.5",
        "--imaging-score",
        "80",
        "--json",
    ]);
    match cli.command {
        Commands::Assess(args) => {
            assert_eq!(args.risk_score, Some(40.5));
            assert_eq!(args.imaging_score, Some(80.0));
            assert!(args.json);
        }
        _ => panic!("expected assess command"),
    }
}

#[test]
fn classify_takes_negative_values() {
    let cli = Cli::parse_from([
        "pan-prognosis",
        "classify",
        "--biomarker",
        "Lipase",
        "--value",
        "-4",
    ]);
    match cli.command {
        Commands::Classify(args) => assert_eq!(args.value, "-4"),
        _ => panic!("expected classify command"),
    }
}
