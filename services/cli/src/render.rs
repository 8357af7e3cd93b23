use aethermind::workflows::assessment::report::views::{ListSection, Tone};
use aethermind::workflows::assessment::{
    use_cases, DataType, DataVolume, DecisionImpact, Industry, Jurisdiction, ReportView,
};
use std::fmt;

/// Plain-text rendering of a [`ReportView`] for the terminal.
pub(crate) struct ReportText<'a>(pub(crate) &'a ReportView);

/// Plain-text listing of every selectable intake value.
pub(crate) struct CatalogText;

fn tag(tone: Tone) -> String {
    format!("[{}]", tone.label().to_ascii_uppercase())
}

impl fmt::Display for ReportText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        let banner = &view.banner;

        writeln!(
            f,
            "{} Risk Level: {} | Score {} {}",
            tag(banner.tone),
            banner.risk_level,
            banner.score_label,
            tag(banner.score_tone)
        )?;
        writeln!(f, "{}", banner.summary)?;

        writeln!(f, "\nRisk Score Breakdown")?;
        for row in &view.breakdown {
            writeln!(
                f,
                "- {} ({}% weight): {}/{} points",
                row.label,
                row.weight_pct,
                row.score,
                row.ceiling
            )?;
            if !row.explanation.is_empty() {
                writeln!(f, "  {}", row.explanation)?;
            }
        }

        writeln!(f, "\nApplicable Regulations ({})", view.regulation_count)?;
        match &view.regulations {
            ListSection::Empty { placeholder } => writeln!(f, "  {placeholder}")?,
            ListSection::Items { items } => {
                for regulation in items {
                    writeln!(
                        f,
                        "- {} [{}] {} | {} risk {}",
                        regulation.name,
                        regulation.category_label,
                        regulation.jurisdiction,
                        regulation.risk_level,
                        tag(regulation.risk_tone)
                    )?;
                    writeln!(f, "  {}", regulation.executive_summary)?;
                    writeln!(
                        f,
                        "  Penalties: {} (enforced by {})",
                        regulation.penalties.maximum, regulation.penalties.authority
                    )?;
                    if let Some(notes) = &regulation.penalties.notes {
                        writeln!(f, "  Note: {notes}")?;
                    }
                    for (index, requirement) in regulation.key_requirements.iter().enumerate() {
                        writeln!(f, "  {}. {}", index + 1, requirement)?;
                    }
                }
            }
        }

        writeln!(f, "\nRecommended Actions")?;
        match &view.recommendations {
            ListSection::Empty { placeholder } => writeln!(f, "  {placeholder}")?,
            ListSection::Items { items } => {
                for recommendation in items {
                    writeln!(
                        f,
                        "- {} {}: {}",
                        tag(recommendation.tone),
                        recommendation.priority,
                        recommendation.title
                    )?;
                    writeln!(f, "  {}", recommendation.rationale)?;
                    writeln!(
                        f,
                        "  Timeline: {} | Cost: {} | Owner: {}",
                        recommendation.timeline,
                        recommendation.estimated_cost,
                        recommendation.owner
                    )?;
                    for step in &recommendation.key_steps {
                        writeln!(f, "    * {step}")?;
                    }
                    writeln!(f, "  Business impact: {}", recommendation.business_impact)?;
                }
            }
        }

        writeln!(f, "\nImportant Disclaimer")?;
        writeln!(f, "{}", view.disclaimer.notice)?;
        for item in view.disclaimer.recommendations {
            writeln!(f, "- {item}")?;
        }
        Ok(())
    }
}

impl fmt::Display for CatalogText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Industries and use cases")?;
        for industry in Industry::ordered() {
            writeln!(f, "- {} ({})", industry.label(), industry.as_str())?;
            for use_case in use_cases(industry) {
                writeln!(f, "    {:<30} {}", use_case.key, use_case.label)?;
            }
        }

        writeln!(f, "\nJurisdictions")?;
        for jurisdiction in Jurisdiction::ordered() {
            writeln!(f, "- {}", jurisdiction.label())?;
        }

        writeln!(f, "\nData volumes")?;
        for volume in DataVolume::ordered() {
            writeln!(
                f,
                "- {:<12} {} ({})",
                volume.as_str(),
                volume.label(),
                volume.record_band()
            )?;
        }

        writeln!(f, "\nData types")?;
        for data_type in DataType::ordered() {
            writeln!(f, "- {}", data_type.label())?;
        }

        writeln!(f, "\nDecision impact")?;
        for impact in DecisionImpact::ordered() {
            writeln!(
                f,
                "- {:<16} {}: {}",
                impact.as_str(),
                impact.label(),
                impact.description()
            )?;
        }
        Ok(())
    }
}
