use super::client::{ScoringService, SubmissionError};
use super::domain::IntakeError;
use super::draft::AssessmentDraft;
use super::report::Report;
use super::request::AssessmentRequest;
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

/// Snapshot of one submission. The request is captured at submit time so
/// later draft edits cannot leak into the in-flight exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionTicket {
    pub epoch: u64,
    pub request: AssessmentRequest,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting(SubmissionTicket),
    Succeeded(Report),
    Failed(String),
}

impl SubmissionState {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting(_) => "submitting",
            Self::Succeeded(_) => "succeeded",
            Self::Failed(_) => "failed",
        }
    }

    pub const fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting(_))
    }
}

/// Whether a resolution was applied to the session or dropped as stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    Discarded,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LifecycleError {
    #[error(transparent)]
    Intake(#[from] IntakeError),
    #[error("an assessment is already being analyzed")]
    SubmissionInFlight,
    #[error("a report is already available; start a new analysis first")]
    ReportPending,
}

/// Single owner of the draft and its submission state.
#[derive(Debug, Default)]
pub struct AssessmentSession {
    draft: AssessmentDraft,
    state: SubmissionState,
    epoch: u64,
}

impl AssessmentSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_draft(draft: AssessmentDraft) -> Self {
        Self {
            draft,
            ..Self::default()
        }
    }

    pub fn draft(&self) -> &AssessmentDraft {
        &self.draft
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn report(&self) -> Option<&Report> {
        match &self.state {
            SubmissionState::Succeeded(report) => Some(report),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            SubmissionState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Apply an infallible controller operation to the draft.
    pub fn edit<F>(&mut self, operation: F) -> Result<(), LifecycleError>
    where
        F: FnOnce(&AssessmentDraft) -> AssessmentDraft,
    {
        self.try_edit(|draft| Ok(operation(draft)))
    }

    /// Apply a fallible controller operation; the draft is untouched on error.
    pub fn try_edit<F>(&mut self, operation: F) -> Result<(), LifecycleError>
    where
        F: FnOnce(&AssessmentDraft) -> Result<AssessmentDraft, IntakeError>,
    {
        if self.state.is_submitting() {
            return Err(LifecycleError::SubmissionInFlight);
        }
        self.draft = operation(&self.draft)?;
        Ok(())
    }

    pub fn can_submit(&self) -> bool {
        matches!(self.state, SubmissionState::Idle | SubmissionState::Failed(_))
            && self.draft.is_submission_ready()
    }

    /// Move to `Submitting`, returning the ticket the caller must resolve.
    ///
    /// Allowed from `Idle` and, as a manual retry, from `Failed`. A delivered
    /// report is never replaced in place: `Succeeded` needs `reset()` first.
    pub fn submit(&mut self) -> Result<SubmissionTicket, LifecycleError> {
        match self.state {
            SubmissionState::Submitting(_) => return Err(LifecycleError::SubmissionInFlight),
            SubmissionState::Succeeded(_) => return Err(LifecycleError::ReportPending),
            SubmissionState::Idle | SubmissionState::Failed(_) => {}
        }

        let request = self.draft.build_request()?;
        self.epoch += 1;
        let ticket = SubmissionTicket {
            epoch: self.epoch,
            request,
            submitted_at: Utc::now(),
        };

        info!(
            epoch = ticket.epoch,
            industry = ticket.request.industry.as_str(),
            use_case = %ticket.request.use_case,
            "assessment submitted"
        );
        self.state = SubmissionState::Submitting(ticket.clone());
        Ok(ticket)
    }

    /// Land the outcome of the exchange identified by `epoch`.
    pub fn resolve(
        &mut self,
        epoch: u64,
        outcome: Result<Report, SubmissionError>,
    ) -> Resolution {
        let active = match &self.state {
            SubmissionState::Submitting(ticket) => ticket.epoch == epoch,
            _ => false,
        };
        if !active {
            debug!(epoch, current = self.epoch, "discarding stale resolution");
            return Resolution::Discarded;
        }

        self.state = match outcome {
            Ok(report) => {
                info!(
                    epoch,
                    risk_score = report.risk_score,
                    risk_level = %report.risk_level,
                    "assessment analyzed"
                );
                SubmissionState::Succeeded(report)
            }
            Err(err) => {
                warn!(epoch, error = %err, "assessment analysis failed");
                SubmissionState::Failed(err.to_string())
            }
        };
        Resolution::Applied
    }

    /// Return to `Idle` with an empty draft. Any in-flight resolution is
    /// discarded when it arrives.
    pub fn reset(&mut self) {
        self.epoch += 1;
        self.state = SubmissionState::Idle;
        self.draft = AssessmentDraft::default();
        debug!(epoch = self.epoch, "assessment session reset");
    }

    /// Submit, await the scoring service, and resolve in one step.
    pub async fn run_submission<S>(
        &mut self,
        service: &S,
    ) -> Result<&SubmissionState, LifecycleError>
    where
        S: ScoringService + ?Sized,
    {
        let ticket = self.submit()?;
        let outcome = service.analyze(&ticket.request).await;
        self.resolve(ticket.epoch, outcome);
        Ok(&self.state)
    }
}
