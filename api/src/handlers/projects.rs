//! Project handlers
//!
//! Endpoints for creating, listing and tracking audit projects.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::opportunities::OpportunityRequest;
use crate::app::NewAuditProject;
use crate::domain::entities::{AuditProject, Client, ProjectId, ProjectStatus, DEFAULT_AVG_SALARY};
use crate::error::AppError;
use crate::AppState;

/// Summary row for listing projects
#[derive(Debug, Serialize)]
pub struct ProjectSummary {
    pub id: String,
    pub company_name: String,
    pub industry: String,
    pub employee_count: u32,
    pub status: String,
    pub opportunity_count: usize,
    pub interviews_completed: u32,
    pub created_date: String,
}

impl From<&AuditProject> for ProjectSummary {
    fn from(project: &AuditProject) -> Self {
        Self {
            id: project.id.to_string(),
            company_name: project.client.company_name.clone(),
            industry: project.client.industry.key(),
            employee_count: project.client.employee_count,
            status: project.status.to_string(),
            opportunity_count: project.opportunities.len(),
            interviews_completed: project.interviews_completed,
            created_date: project.created_date.to_rfc3339(),
        }
    }
}

/// Request to create a new project
#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub company_name: String,
    /// Known key such as `healthcare`, or any free-form label
    pub industry: String,
    pub employee_count: u32,
    #[serde(default)]
    pub contact_name: String,
    #[serde(default)]
    pub contact_email: String,
    pub avg_salary: Option<f64>,
    #[serde(default)]
    pub opportunities: Vec<OpportunityRequest>,
    #[serde(default)]
    pub interviews_completed: u32,
    pub status: Option<String>,
}

/// Request to update project progress
#[derive(Debug, Deserialize)]
pub struct UpdateProjectRequest {
    pub status: Option<String>,
    pub interviews_completed: Option<u32>,
}

fn parse_status(status: Option<&str>) -> Result<Option<ProjectStatus>, AppError> {
    status
        .map(|s| s.parse::<ProjectStatus>().map_err(AppError::BadRequest))
        .transpose()
}

/// POST /projects
pub async fn create_project(
    State(state): State<AppState>,
    Json(body): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<AuditProject>), AppError> {
    let status = parse_status(body.status.as_deref())?.unwrap_or_default();
    let client = Client {
        company_name: body.company_name,
        industry: body.industry.into(),
        employee_count: body.employee_count,
        contact_name: body.contact_name,
        contact_email: body.contact_email,
        avg_salary: body.avg_salary.unwrap_or(DEFAULT_AVG_SALARY),
    };
    let opportunities = body
        .opportunities
        .into_iter()
        .map(OpportunityRequest::into_new)
        .collect::<Result<Vec<_>, _>>()?;

    let project = state
        .audit_service
        .create_project(NewAuditProject {
            client,
            opportunities,
            interviews_completed: body.interviews_completed,
            status,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(project)))
}

/// POST /projects/example
pub async fn create_example_project(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<AuditProject>), AppError> {
    let project = state.audit_service.create_example_project().await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// POST /projects/import
///
/// Accepts a previously exported project; stored categories are kept.
pub async fn import_project(
    State(state): State<AppState>,
    Json(project): Json<AuditProject>,
) -> Result<(StatusCode, Json<AuditProject>), AppError> {
    let project = state.audit_service.import_project(project).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /projects
pub async fn list_projects(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProjectSummary>>, AppError> {
    let projects = state.audit_service.list_projects().await?;
    Ok(Json(projects.iter().map(ProjectSummary::from).collect()))
}

/// GET /projects/:id
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AuditProject>, AppError> {
    let project = state.audit_service.get_project(&ProjectId(id)).await?;
    Ok(Json(project))
}

/// PATCH /projects/:id
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateProjectRequest>,
) -> Result<Json<AuditProject>, AppError> {
    let status = parse_status(body.status.as_deref())?;
    let project = state
        .audit_service
        .update_progress(&ProjectId(id), status, body.interviews_completed)
        .await?;
    Ok(Json(project))
}

/// DELETE /projects/:id
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.audit_service.delete_project(&ProjectId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_project;

    #[test]
    fn parse_create_project_minimal() {
        let json = r#"{"company_name": "Acme", "industry": "finance", "employee_count": 12}"#;
        let request: CreateProjectRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.company_name, "Acme");
        assert_eq!(request.employee_count, 12);
        assert!(request.contact_name.is_empty());
        assert!(request.avg_salary.is_none());
        assert!(request.opportunities.is_empty());
        assert_eq!(request.interviews_completed, 0);
        assert!(request.status.is_none());
    }

    #[test]
    fn parse_create_project_with_opportunities() {
        let json = r#"{
            "company_name": "Acme",
            "industry": "Mining Services",
            "employee_count": 80,
            "avg_salary": 90000,
            "opportunities": [
                {"name": "Shift logs", "hours_saved_weekly": 2, "employees_affected": 10,
                 "effort": "low", "impact": "high"}
            ],
            "status": "analysis"
        }"#;
        let request: CreateProjectRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.opportunities.len(), 1);
        assert_eq!(request.opportunities[0].effort, "low");
        assert_eq!(request.status.as_deref(), Some("analysis"));
    }

    #[test]
    fn parse_status_maps_errors_to_bad_request() {
        assert_eq!(
            parse_status(Some("presentation")).unwrap(),
            Some(ProjectStatus::Presentation)
        );
        assert_eq!(parse_status(None).unwrap(), None);
        assert!(matches!(
            parse_status(Some("archived")),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn summary_from_project() {
        let project = test_project();
        let summary = ProjectSummary::from(&project);
        assert_eq!(summary.id, project.id.to_string());
        assert_eq!(summary.industry, "healthcare");
        assert_eq!(summary.status, "discovery");
        assert_eq!(summary.opportunity_count, 0);
    }
}
