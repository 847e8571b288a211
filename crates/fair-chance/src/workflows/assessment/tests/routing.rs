use super::common::*;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use axum::response::IntoResponse;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::workflows::assessment::router::{assessment_router, submit_handler};
use crate::workflows::assessment::scoring::ScoringConfig;
use crate::workflows::assessment::service::AssessmentService;

fn json_request(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

#[tokio::test]
async fn submit_handler_returns_created_report() {
    let (service, _) = build_service();

    let response = submit_handler::<MemoryPublisher>(
        State(Arc::new(service)),
        Ok(axum::Json(submission([7, 7, 7, 7, 1, 1, 1, 1]))),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json_body(response).await;
    assert_eq!(body["recommendation"], "further-review");
    assert_eq!(body["factors"]["compliant"].as_array().map(Vec::len), Some(4));
    assert_eq!(body["factors"]["concerns"].as_array().map(Vec::len), Some(4));
}

#[tokio::test]
async fn router_accepts_contract_shaped_json() {
    let (service, _) = build_service();
    let app = assessment_router(Arc::new(service));

    let factors: Vec<Value> = (1..=8)
        .map(|id| json!({ "factorId": id, "value": 6, "notes": "" }))
        .collect();
    let payload = json!({
        "candidateId": "cand-77",
        "certificateOfRelief": true,
        "decision": "hire",
        "factors": factors,
    });

    let response = app
        .oneshot(json_request("/api/v1/assessments", payload))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json_body(response).await;
    assert_eq!(body["candidateId"], "cand-77");
    assert_eq!(body["certificateOfRelief"], true);
    assert_eq!(body["recommendation"], "hire");
    assert_eq!(body["individualizedAssessment"]["recommendedAction"], "hire");
}

#[tokio::test]
async fn router_returns_unprocessable_for_invalid_ratings() {
    let (service, _) = build_service();
    let app = assessment_router(Arc::new(service));

    let factors: Vec<Value> = (1..=8)
        .map(|id| {
            let value = if id == 5 { 0 } else { 4 };
            json!({ "factorId": id, "value": value })
        })
        .collect();

    let response = app
        .oneshot(json_request(
            "/api/v1/assessments",
            json!({ "factors": factors }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("outside the 1-7 scale"));
}

#[tokio::test]
async fn router_blocks_unjustified_do_not_hire() {
    let (service, _) = build_service();
    let app = assessment_router(Arc::new(service));

    let payload = serde_json::to_value(do_not_hire_submission(Some(""))).expect("serializes");
    let response = app
        .oneshot(json_request("/api/v1/assessments", payload))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn router_lists_the_factor_catalog() {
    let (service, _) = build_service();
    let app = assessment_router(Arc::new(service));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/assessments/factors")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let factors = body.as_array().expect("catalog array");
    assert_eq!(factors.len(), 8);
    assert_eq!(factors[0]["title"], "Public Policy Consideration");
    assert_eq!(factors[7]["statute"], "§ 753(1)(h)");
}

#[tokio::test]
async fn share_endpoint_queues_delivery() {
    let (service, publisher) = build_service();
    let report = service
        .submit(submission([5; 8]))
        .expect("valid submission");
    let app = assessment_router(Arc::new(service));

    let response = app
        .oneshot(json_request(
            "/api/v1/assessments/share",
            json!({ "recipientEmail": "hr@example.org", "report": report }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    assert_eq!(publisher.deliveries().len(), 1);
}

#[tokio::test]
async fn share_endpoint_reports_transport_failures() {
    let service = AssessmentService::new(Arc::new(OfflinePublisher), ScoringConfig::default());
    let report = service
        .submit(submission([5; 8]))
        .expect("valid submission");
    let app = assessment_router(Arc::new(service));

    let response = app
        .oneshot(json_request(
            "/api/v1/assessments/share",
            json!({ "recipientEmail": "hr@example.org", "report": report }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let invalid = AssessmentService::new(Arc::new(OfflinePublisher), ScoringConfig::default());
    let report = invalid
        .submit(submission([5; 8]))
        .expect("valid submission");
    let response = assessment_router(Arc::new(invalid))
        .oneshot(json_request(
            "/api/v1/assessments/share",
            json!({ "recipientEmail": "not-an-address", "report": report }),
        ))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn share_endpoint_rejects_edited_reports() {
    let (service, publisher) = build_service();
    let mut report = service
        .submit(submission([1; 8]))
        .expect("valid submission");
    report.recommendation = crate::workflows::assessment::Recommendation::Hire;
    let app = assessment_router(Arc::new(service));

    let response = app
        .oneshot(json_request(
            "/api/v1/assessments/share",
            json!({ "recipientEmail": "hr@example.org", "report": report }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("report is inconsistent"));
    assert!(publisher.deliveries().is_empty());
}

#[tokio::test]
async fn malformed_bodies_get_json_errors() {
    let (service, _) = build_service();
    let app = assessment_router(Arc::new(service));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/assessments")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{\"factors\": ["))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json_body(response).await;
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .starts_with("rejected request body"));
}

#[tokio::test]
async fn records_endpoint_returns_a_further_review_report() {
    let (service, _) = build_service();
    let app = assessment_router(Arc::new(service));

    let payload = serde_json::to_value(record_assessment()).expect("serializes");
    let response = app
        .oneshot(json_request("/api/v1/assessments/records", payload))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json_body(response).await;
    assert_eq!(body["recommendation"], "further-review");
    assert_eq!(body["candidateId"], "cand-1138");
    assert!(body.get("individualizedAssessment").is_none());
    assert_eq!(body["factors"]["concerns"][0]["factor"], "Employment History");
}

#[tokio::test]
async fn records_endpoint_rejects_mismatched_candidates() {
    let (service, _) = build_service();
    let app = assessment_router(Arc::new(service));

    let mut request = record_assessment();
    request.criminal_record.candidate_id =
        crate::workflows::assessment::CandidateId("someone-else".to_string());
    let payload = serde_json::to_value(request).expect("serializes");

    let response = app
        .oneshot(json_request("/api/v1/assessments/records", payload))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
