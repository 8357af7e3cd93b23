//! Contract tests for the scoring service's `POST /analyze` exchange.

use aethermind::config::ScoringConfig;
use aethermind::workflows::assessment::{
    AssessmentDraft, AssessmentRequest, AssessmentSession, DataType, DataVolume, DecisionImpact,
    HttpScoringClient, Industry, Jurisdiction, ScoringService, SubmissionError, SubmissionState,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpScoringClient {
    let config = ScoringConfig {
        base_url: format!("{}/api", server.uri())
            .parse()
            .expect("mock server uri parses"),
        timeout_secs: 5,
    };
    HttpScoringClient::new(&config).expect("client builds")
}

fn hiring_draft() -> AssessmentDraft {
    AssessmentDraft::new()
        .set_industry(Industry::HumanResources)
        .set_use_case("hiring")
        .expect("hiring is an HR use case")
        .toggle_jurisdiction(Jurisdiction::EuropeanUnion)
        .toggle_jurisdiction(Jurisdiction::California)
        .set_data_volume(DataVolume::Small)
        .toggle_data_type(DataType::Personal)
        .toggle_data_type(DataType::Behavioral)
        .set_decision_impact(DecisionImpact::MajorEconomic)
}

fn hiring_request() -> AssessmentRequest {
    hiring_draft().build_request().expect("complete draft builds")
}

fn report_body() -> serde_json::Value {
    json!({
        "riskScore": 78,
        "riskLevel": "High",
        "summary": "Automated hiring decisions are high-risk in the EU and regulated in California.",
        "riskBreakdown": {
            "jurisdictionalScore": { "score": 8, "explanation": "Two regimes apply." },
            "regulatoryComplexity": { "score": 24, "explanation": "AI Act Annex III." },
            "decisionImpactScore": { "score": 20, "explanation": "Employment outcomes." },
            "dataVolumeScore": { "score": 8, "explanation": "Small candidate pool." },
            "dataSensitivityScore": { "score": 12, "explanation": "Behavioral profiling." }
        },
        "matchingRegulations": [{
            "name": "EU AI Act",
            "jurisdiction": "European Union",
            "category": "ai_specific",
            "riskLevel": "high",
            "executiveSummary": "Recruitment systems are listed as high-risk.",
            "penalties": { "maximum": "EUR 35M", "authority": "AI Office" },
            "keyRequirements": ["Bias testing", "Human oversight"]
        }],
        "recommendations": [{
            "priority": "HIGH",
            "title": "Run a bias audit",
            "rationale": "Required for automated employment decision tools.",
            "timeline": "30 days",
            "estimatedCost": "$40K",
            "responsibleParty": "Head of People Analytics",
            "keySteps": ["Select auditor", "Publish summary"],
            "businessImpact": "Avoids hiring freezes in regulated markets."
        }]
    })
}

#[tokio::test]
async fn analyze_posts_request_and_parses_report() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "useCase": "hiring",
            "jurisdictions": ["European Union", "California"],
            "dataTypes": ["Personal Data", "Behavioral Data"],
            "decisionImpact": "major_economic",
            "industry": "human_resources",
            "dataVolume": "small"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(report_body()))
        .expect(1)
        .mount(&server)
        .await;

    let report = client_for(&server)
        .analyze(&hiring_request())
        .await
        .expect("report parses");

    assert_eq!(report.risk_score, 78);
    assert_eq!(report.risk_level, "High");
    assert_eq!(report.matching_regulations.len(), 1);
    assert_eq!(report.recommendations[0].responsible_party, "Head of People Analytics");
}

#[tokio::test]
async fn extra_breakdown_entries_do_not_fail_the_session() {
    let server = MockServer::start().await;
    let mut body = report_body();
    body["riskBreakdown"]["totalScore"] = json!(78);
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut session = AssessmentSession::with_draft(hiring_draft());
    let state = session
        .run_submission(&client)
        .await
        .expect("ready draft submits");

    match state {
        SubmissionState::Succeeded(report) => {
            assert_eq!(report.risk_score, 78);
            assert_eq!(report.view().breakdown.len(), 5);
        }
        other => panic!("expected succeeded state, got {other:?}"),
    }
}

#[tokio::test]
async fn non_success_status_maps_to_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&server)
        .await;

    match client_for(&server).analyze(&hiring_request()).await {
        Err(SubmissionError::Status { status }) => assert_eq!(status, 503),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn unparsable_body_maps_to_malformed_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let result = client_for(&server).analyze(&hiring_request()).await;
    assert!(matches!(result, Err(SubmissionError::MalformedResponse(_))));
}

#[tokio::test]
async fn body_missing_required_fields_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "riskScore": 40, "summary": "x" })),
        )
        .mount(&server)
        .await;

    let result = client_for(&server).analyze(&hiring_request()).await;
    assert!(matches!(result, Err(SubmissionError::MalformedResponse(_))));
}

#[tokio::test]
async fn out_of_range_score_is_malformed() {
    let server = MockServer::start().await;
    let mut body = report_body();
    body["riskScore"] = json!(140);
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let result = client_for(&server).analyze(&hiring_request()).await;
    assert!(matches!(result, Err(SubmissionError::MalformedResponse(_))));
}

#[tokio::test]
async fn unreachable_service_maps_to_transport_error() {
    let config = ScoringConfig {
        base_url: "http://127.0.0.1:9/api".parse().expect("url parses"),
        timeout_secs: 2,
    };
    let client = HttpScoringClient::new(&config).expect("client builds");

    let result = client.analyze(&hiring_request()).await;
    assert!(matches!(result, Err(SubmissionError::Transport(_))));
}

#[tokio::test]
async fn session_lands_failed_state_on_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut session = AssessmentSession::with_draft(hiring_draft());
    let state = session
        .run_submission(&client)
        .await
        .expect("ready draft submits");

    match state {
        SubmissionState::Failed(message) => assert!(message.contains("Analysis failed")),
        other => panic!("expected failed state, got {other:?}"),
    }
    assert_eq!(session.draft(), &hiring_draft());
}

#[test]
fn endpoint_tolerates_trailing_slash() {
    let config = ScoringConfig {
        base_url: "https://scoring.example.com/api/".parse().expect("url parses"),
        timeout_secs: 5,
    };
    let client = HttpScoringClient::new(&config).expect("client builds");
    assert_eq!(client.endpoint(), "https://scoring.example.com/api/analyze");
}
