use crate::render::ReportText;
use aethermind::config::{AppConfig, ScoringConfig};
use aethermind::error::AppError;
use aethermind::telemetry;
use aethermind::workflows::assessment::{
    AssessmentSession, DataType, DataVolume, DecisionImpact, HttpScoringClient, Industry,
    Jurisdiction, SubmissionState,
};
use clap::Args;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Industry sector, e.g. `healthcare` or `financial_services`
    #[arg(long)]
    pub(crate) industry: Option<String>,
    /// Use case key offered for the chosen industry
    #[arg(long = "use-case")]
    pub(crate) use_case: Option<String>,
    /// Jurisdiction of operation; repeat for several
    #[arg(long = "jurisdiction")]
    pub(crate) jurisdictions: Vec<String>,
    /// Approximate data volume, e.g. `medium`
    #[arg(long = "data-volume")]
    pub(crate) data_volume: Option<String>,
    /// Data type processed; repeat for several
    #[arg(long = "data-type")]
    pub(crate) data_types: Vec<String>,
    /// Impact of the system's decisions, e.g. `life_altering`
    #[arg(long = "decision-impact")]
    pub(crate) decision_impact: Option<String>,
    /// Override SCORING_API_URL
    #[arg(long = "api-url")]
    pub(crate) api_url: Option<String>,
    /// Override SCORING_TIMEOUT_SECS
    #[arg(long = "timeout-secs", value_parser = clap::value_parser!(u64).range(1..))]
    pub(crate) timeout_secs: Option<u64>,
    /// Print the scoring service's report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) async fn run_assessment(args: AssessArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    if let Some(raw) = args.api_url.as_deref() {
        config.scoring.base_url = ScoringConfig::parse_base_url(raw)?;
    }
    if let Some(secs) = args.timeout_secs {
        config.scoring.timeout_secs = secs;
    }
    telemetry::init(&config.telemetry)?;
    info!(
        environment = ?config.environment,
        scoring_api = %config.scoring.base_url,
        timeout_secs = config.scoring.timeout_secs,
        "configuration loaded"
    );

    let mut session = AssessmentSession::new();
    apply_selections(&mut session, &args)?;

    let client = HttpScoringClient::new(&config.scoring)?;
    info!(endpoint = client.endpoint(), "requesting risk analysis");

    match session.run_submission(&client).await? {
        SubmissionState::Succeeded(report) => {
            if args.json {
                let json = serde_json::to_string_pretty(report).map_err(|err| {
                    AppError::Analysis(format!("unable to serialize report: {err}"))
                })?;
                println!("{json}");
            } else {
                print!("{}", ReportText(&report.view()));
            }
            Ok(())
        }
        SubmissionState::Failed(message) => Err(AppError::Analysis(message.clone())),
        other => Err(AppError::Analysis(format!(
            "assessment ended in unexpected state '{}'",
            other.label()
        ))),
    }
}

/// Replay the flags through the draft controller. Repeated values select once.
pub(crate) fn apply_selections(
    session: &mut AssessmentSession,
    args: &AssessArgs,
) -> Result<(), AppError> {
    if let Some(raw) = args.industry.as_deref() {
        let industry: Industry = raw.parse()?;
        session.edit(|draft| draft.set_industry(industry))?;
    }
    if let Some(key) = args.use_case.as_deref() {
        let key = key.trim();
        session.try_edit(|draft| draft.set_use_case(key))?;
    }
    for raw in &args.jurisdictions {
        let jurisdiction: Jurisdiction = raw.parse()?;
        if !session.draft().jurisdictions().contains(&jurisdiction) {
            session.edit(|draft| draft.toggle_jurisdiction(jurisdiction))?;
        }
    }
    if let Some(raw) = args.data_volume.as_deref() {
        let volume: DataVolume = raw.parse()?;
        session.edit(|draft| draft.set_data_volume(volume))?;
    }
    for raw in &args.data_types {
        let data_type: DataType = raw.parse()?;
        if !session.draft().data_types().contains(&data_type) {
            session.edit(|draft| draft.toggle_data_type(data_type))?;
        }
    }
    if let Some(raw) = args.decision_impact.as_deref() {
        let impact: DecisionImpact = raw.parse()?;
        session.edit(|draft| draft.set_decision_impact(impact))?;
    }
    Ok(())
}
