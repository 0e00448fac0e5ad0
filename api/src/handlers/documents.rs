//! Document handlers
//!
//! Deliverables rendered as markdown, plus the JSON export.

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::app::{AuditRoi, Dashboard};
use crate::domain::entities::ProjectId;
use crate::error::AppError;
use crate::report::InterviewRoles;
use crate::AppState;

const MARKDOWN: &str = "text/markdown; charset=utf-8";

/// Optional implementation cost override
#[derive(Debug, Default, Deserialize)]
pub struct CostQuery {
    pub implementation_cost: Option<f64>,
}

/// Which interview sets to include
#[derive(Debug, Default, Deserialize)]
pub struct GuideQuery {
    pub role: Option<String>,
}

fn markdown(body: String) -> Response {
    ([(header::CONTENT_TYPE, MARKDOWN)], body).into_response()
}

/// GET /projects/:id/roi
pub async fn get_roi(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<CostQuery>,
) -> Result<Json<AuditRoi>, AppError> {
    let roi = state
        .audit_service
        .calculate_roi(&ProjectId(id), query.implementation_cost)
        .await?;
    Ok(Json(roi))
}

/// GET /projects/:id/dashboard
pub async fn get_dashboard(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<CostQuery>,
) -> Result<Json<Dashboard>, AppError> {
    let dashboard = state
        .audit_service
        .dashboard(&ProjectId(id), query.implementation_cost)
        .await?;
    Ok(Json(dashboard))
}

/// GET /projects/:id/documents/interview-guide
pub async fn get_interview_guide(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<GuideQuery>,
) -> Result<Response, AppError> {
    let roles = match query.role.as_deref() {
        Some(role) => role.parse::<InterviewRoles>().map_err(AppError::BadRequest)?,
        None => InterviewRoles::default(),
    };
    let doc = state
        .audit_service
        .interview_guide(&ProjectId(id), roles)
        .await?;
    Ok(markdown(doc))
}

/// GET /projects/:id/documents/opportunity-matrix
pub async fn get_opportunity_matrix(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let doc = state
        .audit_service
        .opportunity_matrix(&ProjectId(id))
        .await?;
    Ok(markdown(doc))
}

/// GET /projects/:id/documents/executive-report
pub async fn get_executive_report(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<CostQuery>,
) -> Result<Response, AppError> {
    let doc = state
        .audit_service
        .executive_report(&ProjectId(id), query.implementation_cost)
        .await?;
    Ok(markdown(doc))
}

/// GET /projects/:id/documents/slides
pub async fn get_slides(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<CostQuery>,
) -> Result<Response, AppError> {
    let doc = state
        .audit_service
        .slide_deck(&ProjectId(id), query.implementation_cost)
        .await?;
    Ok(markdown(doc))
}

/// GET /projects/:id/export
///
/// The project record as a download named after the client.
pub async fn export_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let project = state.audit_service.get_project(&ProjectId(id)).await?;
    let disposition = format!("attachment; filename=\"{}\"", project.export_file_name());

    Ok(([(header::CONTENT_DISPOSITION, disposition)], Json(project)).into_response())
}
