use super::catalog::{find_use_case, UseCase};
use super::domain::{
    DataType, DataVolume, DecisionImpact, DraftField, Industry, IntakeError, Jurisdiction,
};
use super::request::AssessmentRequest;
use std::collections::BTreeSet;

/// In-progress assessment input.
///
/// Every operation takes the current draft and returns the next one; a
/// rejected operation leaves the caller holding the previous draft. The
/// use case, when present, always belongs to the selected industry's catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssessmentDraft {
    industry: Option<Industry>,
    use_case: Option<&'static UseCase>,
    jurisdictions: BTreeSet<Jurisdiction>,
    data_volume: Option<DataVolume>,
    data_types: BTreeSet<DataType>,
    decision_impact: Option<DecisionImpact>,
}

impl AssessmentDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn industry(&self) -> Option<Industry> {
        self.industry
    }

    pub fn use_case(&self) -> Option<&'static UseCase> {
        self.use_case
    }

    pub fn jurisdictions(&self) -> &BTreeSet<Jurisdiction> {
        &self.jurisdictions
    }

    pub fn data_volume(&self) -> Option<DataVolume> {
        self.data_volume
    }

    pub fn data_types(&self) -> &BTreeSet<DataType> {
        &self.data_types
    }

    pub fn decision_impact(&self) -> Option<DecisionImpact> {
        self.decision_impact
    }

    /// Selecting an industry always clears the use case, even when the same
    /// industry is chosen again.
    pub fn set_industry(&self, industry: Industry) -> Self {
        Self {
            industry: Some(industry),
            use_case: None,
            ..self.clone()
        }
    }

    pub fn set_use_case(&self, key: &str) -> Result<Self, IntakeError> {
        let industry = self.industry.ok_or(IntakeError::IndustryNotSelected)?;
        let entry =
            find_use_case(industry, key).ok_or_else(|| IntakeError::UseCaseNotInCatalog {
                industry,
                use_case: key.to_string(),
            })?;

        Ok(Self {
            use_case: Some(entry),
            ..self.clone()
        })
    }

    pub fn toggle_jurisdiction(&self, jurisdiction: Jurisdiction) -> Self {
        let mut next = self.clone();
        if !next.jurisdictions.remove(&jurisdiction) {
            next.jurisdictions.insert(jurisdiction);
        }
        next
    }

    pub fn toggle_data_type(&self, data_type: DataType) -> Self {
        let mut next = self.clone();
        if !next.data_types.remove(&data_type) {
            next.data_types.insert(data_type);
        }
        next
    }

    pub fn set_data_volume(&self, data_volume: DataVolume) -> Self {
        Self {
            data_volume: Some(data_volume),
            ..self.clone()
        }
    }

    pub fn set_decision_impact(&self, decision_impact: DecisionImpact) -> Self {
        Self {
            decision_impact: Some(decision_impact),
            ..self.clone()
        }
    }

    /// Required fields that are still unset, in form order.
    pub fn missing_fields(&self) -> Vec<DraftField> {
        DraftField::ordered()
            .into_iter()
            .filter(|field| match field {
                DraftField::Industry => self.industry.is_none(),
                DraftField::UseCase => self.use_case.is_none(),
                DraftField::Jurisdictions => self.jurisdictions.is_empty(),
                DraftField::DataVolume => self.data_volume.is_none(),
                DraftField::DataTypes => self.data_types.is_empty(),
                DraftField::DecisionImpact => self.decision_impact.is_none(),
            })
            .collect()
    }

    pub fn is_submission_ready(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn build_request(&self) -> Result<AssessmentRequest, IntakeError> {
        match (
            self.industry,
            self.use_case,
            self.data_volume,
            self.decision_impact,
        ) {
            (Some(industry), Some(use_case), Some(data_volume), Some(decision_impact))
                if !self.jurisdictions.is_empty() && !self.data_types.is_empty() =>
            {
                Ok(AssessmentRequest {
                    use_case: use_case.key.to_string(),
                    jurisdictions: self.jurisdictions.iter().copied().collect(),
                    data_types: self.data_types.iter().copied().collect(),
                    decision_impact,
                    industry,
                    data_volume,
                })
            }
            _ => Err(IntakeError::IncompleteDraft {
                missing: self.missing_fields(),
            }),
        }
    }
}
