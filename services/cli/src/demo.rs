use crate::render::ReportText;
use aethermind::config::AppConfig;
use aethermind::error::AppError;
use aethermind::telemetry;
use aethermind::workflows::assessment::{
    AssessmentRequest, AssessmentSession, DataType, DataVolume, DecisionImpact, Industry,
    Jurisdiction, Report, ScoringService, SubmissionError, SubmissionState,
};
use async_trait::async_trait;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

const SAMPLE_REPORT: &str = include_str!("../fixtures/sample_report.json");

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Render a saved scoring-service response instead of the bundled sample.
    #[arg(long)]
    pub(crate) report_file: Option<PathBuf>,
}

/// Answers every request with one preloaded report body.
struct FixtureScoringService {
    body: Vec<u8>,
}

#[async_trait]
impl ScoringService for FixtureScoringService {
    async fn analyze(&self, _request: &AssessmentRequest) -> Result<Report, SubmissionError> {
        Ok(Report::from_slice(&self.body)?)
    }
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(environment = ?config.environment, "running offline demo");

    let body = match args.report_file {
        Some(path) => std::fs::read(path)?,
        None => SAMPLE_REPORT.as_bytes().to_vec(),
    };
    let service = FixtureScoringService { body };

    println!("AetherMind offline demo");
    let mut session = AssessmentSession::new();
    select_healthcare_scenario(&mut session)?;

    let request = session.draft().build_request()?;
    println!(
        "- Assessing {} / {} across {} jurisdiction(s)",
        request.industry.label(),
        request.use_case,
        request.jurisdictions.len()
    );

    let outcome = match session.run_submission(&service).await? {
        SubmissionState::Succeeded(report) => {
            print!("\n{}", ReportText(&report.view()));
            Ok(())
        }
        SubmissionState::Failed(message) => Err(AppError::Analysis(message.clone())),
        other => Err(AppError::Analysis(format!(
            "assessment ended in unexpected state '{}'",
            other.label()
        ))),
    };

    session.reset();
    println!("\nSession reset to '{}' for a new analysis.", session.state().label());
    outcome
}

fn select_healthcare_scenario(session: &mut AssessmentSession) -> Result<(), AppError> {
    session.edit(|draft| draft.set_industry(Industry::Healthcare))?;
    session.try_edit(|draft| draft.set_use_case("medical_diagnosis"))?;
    session.edit(|draft| draft.toggle_jurisdiction(Jurisdiction::EuropeanUnion))?;
    session.edit(|draft| draft.set_data_volume(DataVolume::Medium))?;
    session.edit(|draft| draft.toggle_data_type(DataType::Health))?;
    session.edit(|draft| draft.set_decision_impact(DecisionImpact::LifeAltering))?;
    Ok(())
}
