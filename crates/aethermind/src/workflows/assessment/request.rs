use super::domain::{DataType, DataVolume, DecisionImpact, Industry, Jurisdiction};
use serde::{Deserialize, Serialize};

/// Payload posted to the scoring service's `/analyze` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRequest {
    pub use_case: String,
    pub jurisdictions: Vec<Jurisdiction>,
    pub data_types: Vec<DataType>,
    pub decision_impact: DecisionImpact,
    pub industry: Industry,
    pub data_volume: DataVolume,
}
