use super::model::{Recommendation, Regulation, Report, ScoreComponent, MAX_RISK_SCORE};
use serde::Serialize;

pub const NO_REGULATIONS_PLACEHOLDER: &str = "No regulations matched your selection";
pub const NO_RECOMMENDATIONS_PLACEHOLDER: &str = "No recommendations generated";

pub const DISCLAIMER_NOTICE: &str = "This analysis is provided for informational purposes only and does not constitute legal advice. Regulations evolve rapidly, and enforcement varies by jurisdiction.";

pub const DISCLAIMER_RECOMMENDATIONS: [&str; 4] = [
    "Consult with qualified legal counsel specializing in AI and data protection law",
    "Conduct secondary research on recent regulatory updates and enforcement actions",
    "Engage with your risk management and compliance teams before implementation",
    "Consider engaging external auditors for independent compliance assessment",
];

/// Presentation severity shared by banners, chips and borders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Error,
    Warning,
    Success,
    Info,
}

impl Tone {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Success => "success",
            Self::Info => "info",
        }
    }
}

/// Tone of the overall banner, keyed on the service's risk label.
pub fn banner_tone(risk_level: &str) -> Tone {
    match risk_level {
        "Critical" => Tone::Error,
        "High" => Tone::Warning,
        _ => Tone::Success,
    }
}

/// Tone of the score chip. Computed from the number alone and allowed to
/// disagree with [`banner_tone`].
pub fn score_tone(risk_score: u8) -> Tone {
    if risk_score >= 80 {
        Tone::Error
    } else if risk_score >= 60 {
        Tone::Warning
    } else {
        Tone::Success
    }
}

pub fn regulation_tone(risk_level: &str) -> Tone {
    if risk_level == "high" {
        Tone::Error
    } else {
        Tone::Warning
    }
}

pub fn priority_tone(priority: &str) -> Tone {
    match priority {
        "CRITICAL" => Tone::Error,
        "HIGH" => Tone::Warning,
        _ => Tone::Info,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RiskBanner {
    pub risk_level: String,
    pub tone: Tone,
    pub score_label: String,
    pub score_tone: Tone,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BreakdownRow {
    pub component: ScoreComponent,
    pub label: &'static str,
    pub score: f64,
    pub ceiling: u8,
    pub weight_pct: u8,
    pub explanation: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PenaltyView {
    pub maximum: String,
    pub authority: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegulationView {
    pub name: String,
    pub jurisdiction: String,
    pub category_label: &'static str,
    pub risk_level: String,
    pub risk_tone: Tone,
    pub executive_summary: String,
    pub penalties: PenaltyView,
    pub key_requirements: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationView {
    pub priority: String,
    pub tone: Tone,
    pub title: String,
    pub rationale: String,
    pub timeline: String,
    pub estimated_cost: String,
    pub owner: String,
    pub key_steps: Vec<String>,
    pub business_impact: String,
}

/// A report list that is either populated or carries an explicit placeholder.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ListSection<T> {
    Items { items: Vec<T> },
    Empty { placeholder: &'static str },
}

impl<T> ListSection<T> {
    fn from_items(items: Vec<T>, placeholder: &'static str) -> Self {
        if items.is_empty() {
            Self::Empty { placeholder }
        } else {
            Self::Items { items }
        }
    }

    pub fn items(&self) -> &[T] {
        match self {
            Self::Items { items } => items,
            Self::Empty { .. } => &[],
        }
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::Items { .. } => None,
            Self::Empty { placeholder } => Some(*placeholder),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Disclaimer {
    pub notice: &'static str,
    pub recommendations: [&'static str; 4],
}

impl Default for Disclaimer {
    fn default() -> Self {
        Self {
            notice: DISCLAIMER_NOTICE,
            recommendations: DISCLAIMER_RECOMMENDATIONS,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportView {
    pub banner: RiskBanner,
    pub breakdown: Vec<BreakdownRow>,
    pub regulation_count: usize,
    pub regulations: ListSection<RegulationView>,
    pub recommendations: ListSection<RecommendationView>,
    pub disclaimer: Disclaimer,
}

impl Report {
    pub fn view(&self) -> ReportView {
        let banner = RiskBanner {
            risk_level: self.risk_level.clone(),
            tone: banner_tone(&self.risk_level),
            score_label: format!("{}/{}", self.risk_score, MAX_RISK_SCORE),
            score_tone: score_tone(self.risk_score),
            summary: self.summary.clone(),
        };

        let breakdown = ScoreComponent::ordered()
            .into_iter()
            .filter_map(|component| {
                self.component(component).map(|entry| BreakdownRow {
                    component,
                    label: component.label(),
                    score: entry.score,
                    ceiling: component.ceiling(),
                    weight_pct: component.ceiling(),
                    explanation: entry.explanation.clone(),
                })
            })
            .collect();

        let regulations = self
            .matching_regulations
            .iter()
            .map(Regulation::to_view)
            .collect();

        let recommendations = self
            .recommendations
            .iter()
            .map(Recommendation::to_view)
            .collect();

        ReportView {
            banner,
            breakdown,
            regulation_count: self.matching_regulations.len(),
            regulations: ListSection::from_items(regulations, NO_REGULATIONS_PLACEHOLDER),
            recommendations: ListSection::from_items(
                recommendations,
                NO_RECOMMENDATIONS_PLACEHOLDER,
            ),
            disclaimer: Disclaimer::default(),
        }
    }
}

impl Regulation {
    pub fn to_view(&self) -> RegulationView {
        RegulationView {
            name: self.name.clone(),
            jurisdiction: self.jurisdiction.clone(),
            category_label: self.category.label(),
            risk_level: self.risk_level.clone(),
            risk_tone: regulation_tone(&self.risk_level),
            executive_summary: self.executive_summary.clone(),
            penalties: PenaltyView {
                maximum: self.penalties.maximum.clone(),
                authority: self.penalties.authority.clone(),
                notes: self
                    .penalties
                    .notes
                    .clone()
                    .filter(|notes| !notes.trim().is_empty()),
            },
            key_requirements: self.key_requirements.clone(),
        }
    }
}

impl Recommendation {
    pub fn to_view(&self) -> RecommendationView {
        RecommendationView {
            priority: self.priority.clone(),
            tone: priority_tone(&self.priority),
            title: self.title.clone(),
            rationale: self.rationale.clone(),
            timeline: self.timeline.clone(),
            estimated_cost: self.estimated_cost.clone(),
            owner: self.responsible_party.clone(),
            key_steps: self.key_steps.clone(),
            business_impact: self.business_impact.clone(),
        }
    }
}
