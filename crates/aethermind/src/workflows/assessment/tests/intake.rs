use super::common::*;
use crate::workflows::assessment::{
    find_use_case, use_cases, AssessmentDraft, DataType, DataVolume, DecisionImpact, DraftField,
    Industry, IntakeError, Jurisdiction,
};

#[test]
fn every_industry_offers_five_or_six_use_cases() {
    for industry in Industry::ordered() {
        let catalog = use_cases(industry);
        assert!(
            (5..=6).contains(&catalog.len()),
            "{} has {} use cases",
            industry.as_str(),
            catalog.len()
        );
    }
    assert_eq!(
        find_use_case(Industry::HumanResources, "hiring").map(|entry| entry.label),
        Some("Resume Screening & Hiring")
    );
}

#[test]
fn set_use_case_requires_an_industry() {
    let draft = AssessmentDraft::new();
    assert_eq!(
        draft.set_use_case("credit_scoring"),
        Err(IntakeError::IndustryNotSelected)
    );
}

#[test]
fn set_use_case_rejects_values_from_other_catalogs() {
    let draft = AssessmentDraft::new().set_industry(Industry::Education);

    match draft.set_use_case("credit_scoring") {
        Err(IntakeError::UseCaseNotInCatalog { industry, use_case }) => {
            assert_eq!(industry, Industry::Education);
            assert_eq!(use_case, "credit_scoring");
        }
        other => panic!("expected catalog rejection, got {other:?}"),
    }
    assert!(draft.use_case().is_none());
}

#[test]
fn changing_industry_clears_use_case() {
    let draft = healthcare_draft();
    assert!(draft.is_submission_ready());

    let switched = draft.set_industry(Industry::Technology);
    assert_eq!(switched.industry(), Some(Industry::Technology));
    assert!(switched.use_case().is_none());
    assert_eq!(switched.missing_fields(), vec![DraftField::UseCase]);
    assert_eq!(switched.jurisdictions(), draft.jurisdictions());
}

#[test]
fn reselecting_the_same_industry_still_requires_a_new_use_case() {
    let draft = healthcare_draft().set_industry(Industry::Healthcare);
    assert!(draft.use_case().is_none());
    assert!(!draft.is_submission_ready());
}

#[test]
fn toggles_add_and_remove_membership() {
    let draft = AssessmentDraft::new()
        .toggle_jurisdiction(Jurisdiction::India)
        .toggle_jurisdiction(Jurisdiction::Canada)
        .toggle_data_type(DataType::Biometric);

    assert_eq!(draft.jurisdictions().len(), 2);
    let removed = draft.toggle_jurisdiction(Jurisdiction::India);
    assert!(!removed.jurisdictions().contains(&Jurisdiction::India));
    assert!(removed.jurisdictions().contains(&Jurisdiction::Canada));

    let cleared = removed.toggle_data_type(DataType::Biometric);
    assert!(cleared.data_types().is_empty());
}

#[test]
fn missing_fields_follow_form_order() {
    let draft = AssessmentDraft::new()
        .set_decision_impact(DecisionImpact::Moderate)
        .set_data_volume(DataVolume::Large);

    assert_eq!(
        draft.missing_fields(),
        vec![
            DraftField::Industry,
            DraftField::UseCase,
            DraftField::Jurisdictions,
            DraftField::DataTypes,
        ]
    );
}

#[test]
fn build_request_reports_missing_fields() {
    let draft = healthcare_draft().toggle_data_type(DataType::Health);

    match draft.build_request() {
        Err(IntakeError::IncompleteDraft { missing }) => {
            assert_eq!(missing, vec![DraftField::DataTypes]);
        }
        other => panic!("expected incomplete draft, got {other:?}"),
    }
}

#[test]
fn catalog_values_parse_from_wire_and_display_forms() {
    assert_eq!("healthcare".parse::<Industry>(), Ok(Industry::Healthcare));
    assert_eq!(
        "European Union".parse::<Jurisdiction>(),
        Ok(Jurisdiction::EuropeanUnion)
    );
    assert_eq!(
        "european-union".parse::<Jurisdiction>(),
        Ok(Jurisdiction::EuropeanUnion)
    );
    assert_eq!("health_data".parse::<DataType>(), Ok(DataType::Health));
    assert_eq!("very_large".parse::<DataVolume>(), Ok(DataVolume::VeryLarge));
    assert_eq!(
        "life_altering".parse::<DecisionImpact>(),
        Ok(DecisionImpact::LifeAltering)
    );
}

#[test]
fn values_outside_the_catalogs_are_rejected() {
    assert_eq!(
        "Brazil".parse::<Jurisdiction>(),
        Err(IntakeError::UnknownValue {
            field: DraftField::Jurisdictions,
            value: "Brazil".to_string(),
        })
    );
    assert!("aerospace".parse::<Industry>().is_err());
    assert!("Genetic Data".parse::<DataType>().is_err());
    assert!("huge".parse::<DataVolume>().is_err());
    assert!("catastrophic".parse::<DecisionImpact>().is_err());
}

#[test]
fn incomplete_draft_message_lists_fields() {
    let err = AssessmentDraft::new()
        .set_industry(Industry::Technology)
        .build_request()
        .expect_err("draft is incomplete");
    let message = err.to_string();
    assert!(message.contains("AI use case"));
    assert!(message.contains("decision impact level"));
    assert!(!message.contains("industry sector"));
}
