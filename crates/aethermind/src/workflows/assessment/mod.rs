//! Assessment intake, submission lifecycle, and weighted report rendering.

pub mod catalog;
pub mod client;
pub mod domain;
mod draft;
mod lifecycle;
pub mod report;
mod request;

#[cfg(test)]
mod tests;

pub use catalog::{find_use_case, use_cases, UseCase};
pub use client::{HttpScoringClient, ScoringService, SubmissionError};
pub use domain::{
    DataType, DataVolume, DecisionImpact, DraftField, Industry, IntakeError, Jurisdiction,
};
pub use draft::AssessmentDraft;
pub use lifecycle::{
    AssessmentSession, LifecycleError, Resolution, SubmissionState, SubmissionTicket,
};
pub use report::views::ReportView;
pub use report::{Report, ReportError, ScoreComponent};
pub use request::AssessmentRequest;
