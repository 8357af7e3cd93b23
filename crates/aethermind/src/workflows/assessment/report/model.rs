use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Highest risk score the scoring service may report.
pub const MAX_RISK_SCORE: u8 = 100;

/// Weighted risk report returned by the scoring service.
///
/// `risk_score`, `risk_level`, `summary` and `risk_breakdown` are required;
/// the regulation and recommendation lists default to empty when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub risk_score: u8,
    pub risk_level: String,
    pub summary: String,
    #[serde(deserialize_with = "recognized_components")]
    pub risk_breakdown: BTreeMap<String, BreakdownScore>,
    #[serde(default)]
    pub matching_regulations: Vec<Regulation>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

impl Report {
    /// Parse and validate a scoring-service response body.
    pub fn from_slice(body: &[u8]) -> Result<Self, ReportError> {
        let report: Report = serde_json::from_slice(body)?;
        report.validate()?;
        Ok(report)
    }

    pub fn validate(&self) -> Result<(), ReportError> {
        if self.risk_score > MAX_RISK_SCORE {
            return Err(ReportError::ScoreOutOfRange(self.risk_score));
        }
        Ok(())
    }

    /// Breakdown entry for a recognized component, if the service sent one.
    pub fn component(&self, component: ScoreComponent) -> Option<&BreakdownScore> {
        self.risk_breakdown.get(component.key())
    }
}

/// Keeps the five recognized components. Other keys are dropped whatever
/// their shape; a recognized key must still hold a `BreakdownScore`.
fn recognized_components<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<String, BreakdownScore>, D::Error>
where
    D: Deserializer<'de>,
{
    BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?
        .into_iter()
        .filter(|(key, _)| ScoreComponent::from_key(key).is_some())
        .map(|(key, value)| {
            serde_json::from_value(value)
                .map(|score| (key, score))
                .map_err(serde::de::Error::custom)
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownScore {
    pub score: f64,
    #[serde(default)]
    pub explanation: String,
}

/// The five weighted dimensions of a risk score. Ceilings are fixed and sum
/// to [`MAX_RISK_SCORE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreComponent {
    RegulatoryComplexity,
    DecisionImpact,
    DataVolume,
    DataSensitivity,
    Jurisdictional,
}

impl ScoreComponent {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::RegulatoryComplexity,
            Self::DecisionImpact,
            Self::DataVolume,
            Self::DataSensitivity,
            Self::Jurisdictional,
        ]
    }

    /// Key used in the report's `riskBreakdown` mapping.
    pub const fn key(self) -> &'static str {
        match self {
            Self::RegulatoryComplexity => "regulatoryComplexity",
            Self::DecisionImpact => "decisionImpactScore",
            Self::DataVolume => "dataVolumeScore",
            Self::DataSensitivity => "dataSensitivityScore",
            Self::Jurisdictional => "jurisdictionalScore",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::RegulatoryComplexity => "Regulatory Complexity",
            Self::DecisionImpact => "Decision Impact",
            Self::DataVolume => "Data Volume",
            Self::DataSensitivity => "Data Sensitivity",
            Self::Jurisdictional => "Jurisdictional Complexity",
        }
    }

    pub const fn ceiling(self) -> u8 {
        match self {
            Self::RegulatoryComplexity => 30,
            Self::DecisionImpact => 25,
            Self::DataVolume => 20,
            Self::DataSensitivity => 15,
            Self::Jurisdictional => 10,
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|component| component.key() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegulationCategory {
    AiSpecific,
    // Any category the service adds later lands here and renders as "Privacy".
    #[default]
    #[serde(other)]
    PrivacyGeneral,
}

impl RegulationCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::AiSpecific => "AI-Specific",
            Self::PrivacyGeneral => "Privacy",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Regulation {
    pub name: String,
    pub jurisdiction: String,
    pub category: RegulationCategory,
    pub risk_level: String,
    pub executive_summary: String,
    pub penalties: Penalties,
    pub key_requirements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Penalties {
    pub maximum: String,
    pub authority: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Recommendation {
    pub priority: String,
    pub title: String,
    pub rationale: String,
    pub timeline: String,
    pub estimated_cost: String,
    pub responsible_party: String,
    pub key_steps: Vec<String>,
    pub business_impact: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("response body is not a valid report: {0}")]
    Json(#[from] serde_json::Error),
    #[error("risk score {0} exceeds the maximum of {}", MAX_RISK_SCORE)]
    ScoreOutOfRange(u8),
}
