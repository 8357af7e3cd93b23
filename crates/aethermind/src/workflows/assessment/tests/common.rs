use crate::workflows::assessment::report::{
    BreakdownScore, Penalties, Recommendation, Regulation, RegulationCategory, Report,
};
use crate::workflows::assessment::{
    AssessmentDraft, AssessmentRequest, DataType, DataVolume, DecisionImpact, Industry,
    Jurisdiction, ScoringService, SubmissionError,
};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;

pub(super) fn healthcare_draft() -> AssessmentDraft {
    AssessmentDraft::new()
        .set_industry(Industry::Healthcare)
        .set_use_case("medical_diagnosis")
        .expect("medical diagnosis is a healthcare use case")
        .toggle_jurisdiction(Jurisdiction::EuropeanUnion)
        .set_data_volume(DataVolume::Medium)
        .toggle_data_type(DataType::Health)
        .set_decision_impact(DecisionImpact::LifeAltering)
}

pub(super) fn breakdown(entries: &[(&str, f64)]) -> BTreeMap<String, BreakdownScore> {
    entries
        .iter()
        .map(|(key, score)| {
            (
                key.to_string(),
                BreakdownScore {
                    score: *score,
                    explanation: format!("{key} explanation"),
                },
            )
        })
        .collect()
}

pub(super) fn sample_report(risk_score: u8, risk_level: &str) -> Report {
    Report {
        risk_score,
        risk_level: risk_level.to_string(),
        summary: "Diagnostic AI in the EU triggers high-risk obligations.".to_string(),
        risk_breakdown: breakdown(&[
            ("jurisdictionalScore", 8.0),
            ("regulatoryComplexity", 22.0),
            ("dataSensitivityScore", 15.0),
            ("decisionImpactScore", 25.0),
            ("dataVolumeScore", 12.0),
        ]),
        matching_regulations: vec![Regulation {
            name: "EU AI Act".to_string(),
            jurisdiction: "European Union".to_string(),
            category: RegulationCategory::AiSpecific,
            risk_level: "high".to_string(),
            executive_summary: "Medical diagnosis is an Annex III high-risk use.".to_string(),
            penalties: Penalties {
                maximum: "EUR 35M or 7% of global turnover".to_string(),
                authority: "National market surveillance authorities".to_string(),
                notes: None,
            },
            key_requirements: vec![
                "Risk management system".to_string(),
                "Human oversight".to_string(),
            ],
        }],
        recommendations: vec![Recommendation {
            priority: "CRITICAL".to_string(),
            title: "Stand up a conformity assessment".to_string(),
            rationale: "Required before placing the system on the EU market.".to_string(),
            timeline: "0-3 months".to_string(),
            estimated_cost: "$150K-$300K".to_string(),
            responsible_party: "Chief Compliance Officer".to_string(),
            key_steps: vec!["Gap analysis".to_string(), "Notified body review".to_string()],
            business_impact: "Blocks EU launch until complete.".to_string(),
        }],
    }
}

/// Scoring service double that replays a fixed outcome and records requests.
pub(super) struct StubScoringService {
    outcome: fn() -> Result<Report, SubmissionError>,
    requests: Mutex<Vec<AssessmentRequest>>,
}

impl StubScoringService {
    pub(super) fn new(outcome: fn() -> Result<Report, SubmissionError>) -> Self {
        Self {
            outcome,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(super) fn requests(&self) -> Vec<AssessmentRequest> {
        self.requests.lock().expect("stub mutex poisoned").clone()
    }
}

#[async_trait]
impl ScoringService for StubScoringService {
    async fn analyze(&self, request: &AssessmentRequest) -> Result<Report, SubmissionError> {
        self.requests
            .lock()
            .expect("stub mutex poisoned")
            .push(request.clone());
        (self.outcome)()
    }
}
