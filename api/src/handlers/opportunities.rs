//! Opportunity handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::entities::{AuditProject, NewOpportunity, ProjectId};
use crate::error::{AppError, DomainError};
use crate::AppState;

/// Request to add an opportunity.
///
/// Effort and impact arrive as free text so a bad rating is reported as a
/// classification error rather than a body rejection.
#[derive(Debug, Deserialize)]
pub struct OpportunityRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub hours_saved_weekly: f64,
    pub employees_affected: u32,
    pub effort: String,
    pub impact: String,
}

impl OpportunityRequest {
    pub fn into_new(self) -> Result<NewOpportunity, DomainError> {
        Ok(NewOpportunity {
            effort: self.effort.parse()?,
            impact: self.impact.parse()?,
            name: self.name,
            description: self.description,
            hours_saved_weekly: self.hours_saved_weekly,
            employees_affected: self.employees_affected,
        })
    }
}

/// POST /projects/:id/opportunities
pub async fn add_opportunity(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<OpportunityRequest>,
) -> Result<(StatusCode, Json<AuditProject>), AppError> {
    let new = body.into_new()?;
    let project = state
        .audit_service
        .add_opportunity(&ProjectId(id), new)
        .await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// DELETE /projects/:id/opportunities/:index
///
/// `index` is 1-based, matching the numbering shown in documents.
pub async fn remove_opportunity(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, usize)>,
) -> Result<Json<AuditProject>, AppError> {
    let project = state
        .audit_service
        .remove_opportunity(&ProjectId(id), index)
        .await?;
    Ok(Json(project))
}
