use crate::assess::{run_assessment, AssessArgs};
use crate::demo::{run_demo, DemoArgs};
use crate::render::CatalogText;
use aethermind::error::AppError;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "AetherMind",
    about = "AI risk analysis for C-suite leaders: assess an AI system and review its weighted risk report",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List industries, use cases, jurisdictions, data types, volumes, and impact levels
    Catalog,
    /// Submit an assessment to the scoring service and render the risk report
    Assess(AssessArgs),
    /// Render a risk report offline from a bundled sample or a saved JSON report
    Demo(DemoArgs),
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Catalog => {
            print!("{}", CatalogText);
            Ok(())
        }
        Command::Assess(args) => run_assessment(args).await,
        Command::Demo(args) => run_demo(args).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_repeated_assess_flags() {
        let cli = Cli::try_parse_from([
            "aethermind",
            "assess",
            "--industry",
            "healthcare",
            "--use-case",
            "medical_diagnosis",
            "--jurisdiction",
            "European Union",
            "--jurisdiction",
            "canada",
            "--data-volume",
            "medium",
            "--data-type",
            "health_data",
            "--decision-impact",
            "life_altering",
        ])
        .expect("arguments parse");

        match cli.command {
            Command::Assess(args) => {
                assert_eq!(args.jurisdictions, vec!["European Union", "canada"]);
                assert_eq!(args.use_case.as_deref(), Some("medical_diagnosis"));
                assert!(!args.json);
            }
            other => panic!("expected assess command, got {other:?}"),
        }
    }

    #[test]
    fn demo_accepts_report_file() {
        let cli = Cli::try_parse_from(["aethermind", "demo", "--report-file", "report.json"])
            .expect("arguments parse");
        assert!(matches!(cli.command, Command::Demo(args) if args.report_file.is_some()));
    }
}
