use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::publisher::ReportPublisher;
use super::records::RecordAssessment;
use super::report::AssessmentReport;
use super::service::{AssessmentService, AssessmentSubmission};
use crate::error::AppError;

/// Body accepted by the share endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareRequest {
    pub recipient_email: String,
    pub report: AssessmentReport,
}

/// Router builder exposing the catalog, scoring, record review, and share endpoints.
pub fn assessment_router<P>(service: Arc<AssessmentService<P>>) -> Router
where
    P: ReportPublisher + 'static,
{
    Router::new()
        .route("/api/v1/assessments", post(submit_handler::<P>))
        .route("/api/v1/assessments/factors", get(catalog_handler::<P>))
        .route("/api/v1/assessments/records", post(records_handler::<P>))
        .route("/api/v1/assessments/share", post(share_handler::<P>))
        .with_state(service)
}

pub(crate) async fn catalog_handler<P>(
    State(service): State<Arc<AssessmentService<P>>>,
) -> Response
where
    P: ReportPublisher + 'static,
{
    (StatusCode::OK, axum::Json(service.catalog())).into_response()
}

pub(crate) async fn submit_handler<P>(
    State(service): State<Arc<AssessmentService<P>>>,
    payload: Result<axum::Json<AssessmentSubmission>, JsonRejection>,
) -> Result<Response, AppError>
where
    P: ReportPublisher + 'static,
{
    let axum::Json(submission) = payload?;
    let report = service.submit(submission)?;
    Ok((StatusCode::CREATED, axum::Json(report)).into_response())
}

pub(crate) async fn records_handler<P>(
    State(service): State<Arc<AssessmentService<P>>>,
    payload: Result<axum::Json<RecordAssessment>, JsonRejection>,
) -> Result<Response, AppError>
where
    P: ReportPublisher + 'static,
{
    let axum::Json(request) = payload?;
    let report = service.assess_records(request)?;
    Ok((StatusCode::CREATED, axum::Json(report)).into_response())
}

pub(crate) async fn share_handler<P>(
    State(service): State<Arc<AssessmentService<P>>>,
    payload: Result<axum::Json<ShareRequest>, JsonRejection>,
) -> Result<Response, AppError>
where
    P: ReportPublisher + 'static,
{
    let axum::Json(ShareRequest {
        recipient_email,
        report,
    }) = payload?;

    service.share(report, &recipient_email)?;
    let body = json!({ "status": "queued" });
    Ok((StatusCode::ACCEPTED, axum::Json(body)).into_response())
}
