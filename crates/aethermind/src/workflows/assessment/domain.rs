use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    FinancialServices,
    Healthcare,
    RetailEcommerce,
    Technology,
    HumanResources,
    Education,
}

impl Industry {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::FinancialServices,
            Self::Healthcare,
            Self::RetailEcommerce,
            Self::Technology,
            Self::HumanResources,
            Self::Education,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FinancialServices => "financial_services",
            Self::Healthcare => "healthcare",
            Self::RetailEcommerce => "retail_ecommerce",
            Self::Technology => "technology",
            Self::HumanResources => "human_resources",
            Self::Education => "education",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FinancialServices => "Financial Services",
            Self::Healthcare => "Healthcare & Life Sciences",
            Self::RetailEcommerce => "Retail & E-Commerce",
            Self::Technology => "Technology & Software",
            Self::HumanResources => "Human Resources",
            Self::Education => "Education",
        }
    }
}

/// Operating jurisdictions. The wire value is the display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Jurisdiction {
    #[serde(rename = "European Union")]
    EuropeanUnion,
    #[serde(rename = "India")]
    India,
    #[serde(rename = "California")]
    California,
    #[serde(rename = "Canada")]
    Canada,
}

impl Jurisdiction {
    pub const fn ordered() -> [Self; 4] {
        [Self::EuropeanUnion, Self::India, Self::California, Self::Canada]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::EuropeanUnion => "European Union",
            Self::India => "India",
            Self::California => "California",
            Self::Canada => "Canada",
        }
    }
}

/// Categories of data the assessed system processes. The wire value is the display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DataType {
    #[serde(rename = "Personal Data")]
    Personal,
    #[serde(rename = "Financial Data")]
    Financial,
    #[serde(rename = "Health Data")]
    Health,
    #[serde(rename = "Biometric Data")]
    Biometric,
    #[serde(rename = "Behavioral Data")]
    Behavioral,
    #[serde(rename = "Location Data")]
    Location,
}

impl DataType {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Personal,
            Self::Financial,
            Self::Health,
            Self::Biometric,
            Self::Behavioral,
            Self::Location,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Personal => "Personal Data",
            Self::Financial => "Financial Data",
            Self::Health => "Health Data",
            Self::Biometric => "Biometric Data",
            Self::Behavioral => "Behavioral Data",
            Self::Location => "Location Data",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataVolume {
    Micro,
    Small,
    Medium,
    Large,
    VeryLarge,
}

impl DataVolume {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Micro,
            Self::Small,
            Self::Medium,
            Self::Large,
            Self::VeryLarge,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Micro => "micro",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::VeryLarge => "very_large",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Micro => "Micro",
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
            Self::VeryLarge => "Very Large",
        }
    }

    /// Human-readable record-count band for the tier.
    pub const fn record_band(self) -> &'static str {
        match self {
            Self::Micro => "<1,000 records",
            Self::Small => "1K-50K records",
            Self::Medium => "50K-500K records",
            Self::Large => "500K-5M records",
            Self::VeryLarge => ">5M records",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionImpact {
    Minimal,
    Moderate,
    MajorEconomic,
    LifeAltering,
}

impl DecisionImpact {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Minimal,
            Self::Moderate,
            Self::MajorEconomic,
            Self::LifeAltering,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Moderate => "moderate",
            Self::MajorEconomic => "major_economic",
            Self::LifeAltering => "life_altering",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Minimal => "Minimal",
            Self::Moderate => "Moderate",
            Self::MajorEconomic => "Major Economic",
            Self::LifeAltering => "Life-Altering",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Minimal => "Informational, no significant impact",
            Self::Moderate => "Influences but doesn't determine outcomes",
            Self::MajorEconomic => "Significantly affects financial decisions",
            Self::LifeAltering => "Affects health, freedom, or fundamental rights",
        }
    }
}

/// The six required dimensions of an assessment, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftField {
    Industry,
    UseCase,
    Jurisdictions,
    DataVolume,
    DataTypes,
    DecisionImpact,
}

impl DraftField {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Industry,
            Self::UseCase,
            Self::Jurisdictions,
            Self::DataVolume,
            Self::DataTypes,
            Self::DecisionImpact,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Industry => "industry sector",
            Self::UseCase => "AI use case",
            Self::Jurisdictions => "operating jurisdictions",
            Self::DataVolume => "data volume",
            Self::DataTypes => "data types processed",
            Self::DecisionImpact => "decision impact level",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rejections raised by the intake controller. The draft is never modified
/// when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("select an industry sector before choosing a use case")]
    IndustryNotSelected,
    #[error("use case '{use_case}' is not offered for {}", .industry.label())]
    UseCaseNotInCatalog {
        industry: Industry,
        use_case: String,
    },
    #[error("'{value}' is not a recognized {field}")]
    UnknownValue { field: DraftField, value: String },
    #[error("assessment is incomplete, missing: {}", join_fields(.missing))]
    IncompleteDraft { missing: Vec<DraftField> },
}

fn join_fields(fields: &[DraftField]) -> String {
    fields
        .iter()
        .map(|field| field.label())
        .collect::<Vec<_>>()
        .join(", ")
}

fn normalize(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|ch| match ch {
            ' ' | '-' => '_',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

fn parse_catalog_value<T: Copy>(
    field: DraftField,
    raw: &str,
    candidates: &[T],
    wire: fn(T) -> &'static str,
) -> Result<T, IntakeError> {
    let needle = normalize(raw);
    candidates
        .iter()
        .copied()
        .find(|candidate| normalize(wire(*candidate)) == needle)
        .ok_or_else(|| IntakeError::UnknownValue {
            field,
            value: raw.to_string(),
        })
}

impl FromStr for Industry {
    type Err = IntakeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_catalog_value(DraftField::Industry, raw, &Self::ordered(), Self::as_str)
    }
}

impl FromStr for Jurisdiction {
    type Err = IntakeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_catalog_value(DraftField::Jurisdictions, raw, &Self::ordered(), Self::label)
    }
}

impl FromStr for DataType {
    type Err = IntakeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_catalog_value(DraftField::DataTypes, raw, &Self::ordered(), Self::label)
    }
}

impl FromStr for DataVolume {
    type Err = IntakeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_catalog_value(DraftField::DataVolume, raw, &Self::ordered(), Self::as_str)
    }
}

impl FromStr for DecisionImpact {
    type Err = IntakeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_catalog_value(
            DraftField::DecisionImpact,
            raw,
            &Self::ordered(),
            Self::as_str,
        )
    }
}
