//! Audit service
//!
//! Use cases for an audit engagement: capture the client and its
//! opportunities, track progress, and turn the project into ROI figures and
//! deliverables.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde::Serialize;

use crate::app::example_project::example_project;
use crate::app::roi_calculator::{aggregate_roi, compute_roi, AuditRoi, RoiInput, RoiResult};
use crate::app::roi_config::RoiPolicy;
use crate::domain::entities::{
    AuditProject, Category, Client, NewOpportunity, Opportunity, ProjectId, ProjectStatus,
};
use crate::domain::ports::AuditProjectRepository;
use crate::error::{AppError, DomainError};
use crate::report::{
    render_executive_report, render_interview_guide, render_opportunity_matrix,
    render_slide_deck, InterviewRoles,
};

/// Implementation cost assumed when the caller gives none
pub const DEFAULT_IMPLEMENTATION_COST: f64 = 15_000.0;

/// Author shown on reports and slides
pub const DEFAULT_REPORT_AUTHOR: &str = "GVRN-AI";

/// Data needed to create a new project
#[derive(Debug, Clone)]
pub struct NewAuditProject {
    pub client: Client,
    pub opportunities: Vec<NewOpportunity>,
    pub interviews_completed: u32,
    pub status: ProjectStatus,
}

/// Headline view of a project - the dashboard's first screen
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub project_id: String,
    pub company_name: String,
    pub industry: String,
    pub employee_count: u32,
    pub status: ProjectStatus,
    pub opportunity_count: usize,
    pub quick_win_count: usize,
    pub hours_saved_weekly: f64,
    pub annual_savings: f64,
    pub total_annual_value: f64,
    pub roi_percentage: f64,
    /// `None` when nothing is saved
    pub payback_months: Option<f64>,
    /// Quick wins, big swings and nice-to-haves that have members
    pub quadrants: Vec<DashboardQuadrant>,
}

/// One quadrant on the dashboard
#[derive(Debug, Clone, Serialize)]
pub struct DashboardQuadrant {
    pub category: Category,
    pub title: &'static str,
    pub opportunities: Vec<DashboardOpportunity>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardOpportunity {
    pub name: String,
    pub description: String,
    /// Nominal hours per week across everyone affected
    pub weekly_hours: f64,
}

/// Service for managing audit projects
pub struct AuditService<R>
where
    R: AuditProjectRepository,
{
    projects: Arc<R>,
    policy: RoiPolicy,
    default_implementation_cost: f64,
    report_author: String,
}

impl<R> AuditService<R>
where
    R: AuditProjectRepository,
{
    pub fn new(projects: Arc<R>) -> Self {
        Self {
            projects,
            policy: RoiPolicy::default(),
            default_implementation_cost: DEFAULT_IMPLEMENTATION_COST,
            report_author: DEFAULT_REPORT_AUTHOR.to_string(),
        }
    }

    pub fn with_policy(mut self, policy: RoiPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_default_implementation_cost(mut self, cost: f64) -> Self {
        self.default_implementation_cost = cost;
        self
    }

    pub fn with_report_author(mut self, author: impl Into<String>) -> Self {
        self.report_author = author.into();
        self
    }

    pub fn policy(&self) -> &RoiPolicy {
        &self.policy
    }

    pub fn default_implementation_cost(&self) -> f64 {
        self.default_implementation_cost
    }

    // ========== Projects ==========

    /// Create a project, classifying every opportunity as it is added
    pub async fn create_project(&self, new: NewAuditProject) -> Result<AuditProject, AppError> {
        new.client.validate()?;

        let mut project = AuditProject::new(new.client);
        for opportunity in new.opportunities {
            project.add_opportunity(Opportunity::new(opportunity)?);
        }
        project.interviews_completed = new.interviews_completed;
        project.status = new.status;

        self.projects.save(&project).await?;
        tracing::info!(
            project_id = %project.id,
            company = %project.client.company_name,
            opportunities = project.opportunities.len(),
            "Created audit project"
        );

        Ok(project)
    }

    /// Create the bundled aged-care example
    pub async fn create_example_project(&self) -> Result<AuditProject, AppError> {
        let project = example_project()?;
        self.projects.save(&project).await?;
        tracing::info!(project_id = %project.id, "Created example audit project");
        Ok(project)
    }

    /// Store a previously exported project as-is (stored categories are kept)
    pub async fn import_project(&self, project: AuditProject) -> Result<AuditProject, AppError> {
        project.client.validate()?;
        self.projects.save(&project).await?;
        tracing::info!(project_id = %project.id, "Imported audit project");
        Ok(project)
    }

    pub async fn list_projects(&self) -> Result<Vec<AuditProject>, AppError> {
        Ok(self.projects.find_all().await?)
    }

    pub async fn get_project(&self, id: &ProjectId) -> Result<AuditProject, AppError> {
        self.projects
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Project {}", id)).into())
    }

    pub async fn delete_project(&self, id: &ProjectId) -> Result<(), AppError> {
        if !self.projects.delete(id).await? {
            return Err(DomainError::NotFound(format!("Project {}", id)).into());
        }
        tracing::info!(project_id = %id, "Deleted audit project");
        Ok(())
    }

    /// Update the progress labels. Any status may follow any other.
    pub async fn update_progress(
        &self,
        id: &ProjectId,
        status: Option<ProjectStatus>,
        interviews_completed: Option<u32>,
    ) -> Result<AuditProject, AppError> {
        let mut project = self.get_project(id).await?;
        if let Some(status) = status {
            project.status = status;
        }
        if let Some(interviews) = interviews_completed {
            project.interviews_completed = interviews;
        }
        self.projects.save(&project).await?;
        Ok(project)
    }

    // ========== Opportunities ==========

    /// Append an opportunity; its category is fixed here
    pub async fn add_opportunity(
        &self,
        id: &ProjectId,
        new: NewOpportunity,
    ) -> Result<AuditProject, AppError> {
        let mut project = self.get_project(id).await?;
        let opportunity = Opportunity::new(new)?;
        tracing::info!(
            project_id = %id,
            name = %opportunity.name,
            category = %opportunity.category(),
            "Added opportunity"
        );
        project.add_opportunity(opportunity);
        self.projects.save(&project).await?;
        Ok(project)
    }

    /// Remove the opportunity at a 1-based position
    pub async fn remove_opportunity(
        &self,
        id: &ProjectId,
        index: usize,
    ) -> Result<AuditProject, AppError> {
        let mut project = self.get_project(id).await?;
        if index == 0 || index > project.opportunities.len() {
            return Err(AppError::NotFound(format!(
                "Opportunity {} not found (project has {})",
                index,
                project.opportunities.len()
            )));
        }
        let removed = project.opportunities.remove(index - 1);
        tracing::info!(project_id = %id, name = %removed.name, "Removed opportunity");
        self.projects.save(&project).await?;
        Ok(project)
    }

    // ========== ROI ==========

    /// Single-group ROI under this service's policy, optionally with another efficiency
    pub fn compute_roi(
        &self,
        input: &RoiInput,
        automation_efficiency: Option<f64>,
    ) -> Result<RoiResult, DomainError> {
        let policy = match automation_efficiency {
            Some(efficiency) => self.policy.with_automation_efficiency(efficiency),
            None => self.policy,
        };
        compute_roi(input, &policy)
    }

    /// Program ROI for an already-loaded project
    pub fn roi_for(
        &self,
        project: &AuditProject,
        implementation_cost: Option<f64>,
    ) -> Result<AuditRoi, DomainError> {
        aggregate_roi(
            &project.opportunities,
            project.client.avg_salary,
            implementation_cost.unwrap_or(self.default_implementation_cost),
            &self.policy,
        )
    }

    pub async fn calculate_roi(
        &self,
        id: &ProjectId,
        implementation_cost: Option<f64>,
    ) -> Result<AuditRoi, AppError> {
        let project = self.get_project(id).await?;
        Ok(self.roi_for(&project, implementation_cost)?)
    }

    pub async fn dashboard(
        &self,
        id: &ProjectId,
        implementation_cost: Option<f64>,
    ) -> Result<Dashboard, AppError> {
        let project = self.get_project(id).await?;
        let roi = self.roi_for(&project, implementation_cost)?;
        let combined = &roi.combined;

        let quadrants = [Category::QuickWin, Category::BigSwing, Category::NiceToHave]
            .into_iter()
            .filter_map(|category| {
                let members = project.opportunities_in(category);
                if members.is_empty() {
                    return None;
                }
                Some(DashboardQuadrant {
                    category,
                    title: category.title(),
                    opportunities: members
                        .into_iter()
                        .map(|o| DashboardOpportunity {
                            name: o.name.clone(),
                            description: o.description.clone(),
                            weekly_hours: o.total_weekly_hours(),
                        })
                        .collect(),
                })
            })
            .collect();

        Ok(Dashboard {
            project_id: project.id.to_string(),
            company_name: project.client.company_name.clone(),
            industry: project.client.industry.label(),
            employee_count: project.client.employee_count,
            status: project.status,
            opportunity_count: project.opportunities.len(),
            quick_win_count: project.opportunities_in(Category::QuickWin).len(),
            hours_saved_weekly: combined.hours_saved_weekly,
            annual_savings: combined.annual_savings,
            total_annual_value: combined.total_annual_value,
            roi_percentage: combined.roi_percentage,
            payback_months: Some(combined.payback_months).filter(|m| m.is_finite()),
            quadrants,
        })
    }

    // ========== Documents ==========

    pub async fn interview_guide(
        &self,
        id: &ProjectId,
        roles: InterviewRoles,
    ) -> Result<String, AppError> {
        let project = self.get_project(id).await?;
        Ok(render_interview_guide(&project.client, roles, today()))
    }

    pub async fn opportunity_matrix(&self, id: &ProjectId) -> Result<String, AppError> {
        let project = self.get_project(id).await?;
        Ok(render_opportunity_matrix(&project.opportunities))
    }

    pub async fn executive_report(
        &self,
        id: &ProjectId,
        implementation_cost: Option<f64>,
    ) -> Result<String, AppError> {
        let project = self.get_project(id).await?;
        let roi = self.roi_for(&project, implementation_cost)?;
        Ok(render_executive_report(
            &project,
            &roi,
            &self.report_author,
            today(),
        ))
    }

    pub async fn slide_deck(
        &self,
        id: &ProjectId,
        implementation_cost: Option<f64>,
    ) -> Result<String, AppError> {
        let project = self.get_project(id).await?;
        let roi = self.roi_for(&project, implementation_cost)?;
        Ok(render_slide_deck(
            &project,
            &roi,
            &self.report_author,
            today(),
        ))
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}
