//! Audit project domain entity
//!
//! Aggregate root of one engagement: the client, its opportunities in the
//! order they were identified, and the engagement's progress labels.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::client::Client;
use super::opportunity::{Category, Opportunity};

/// Unique identifier for an audit project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectId(pub Uuid);

impl ProjectId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ProjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for ProjectId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Engagement stage. A label only; any value may be set at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Discovery,
    Analysis,
    Presentation,
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectStatus::Discovery => write!(f, "discovery"),
            ProjectStatus::Analysis => write!(f, "analysis"),
            ProjectStatus::Presentation => write!(f, "presentation"),
        }
    }
}

impl std::str::FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "discovery" => Ok(ProjectStatus::Discovery),
            "analysis" => Ok(ProjectStatus::Analysis),
            "presentation" => Ok(ProjectStatus::Presentation),
            _ => Err(format!(
                "Unknown project status: {}. Use: discovery, analysis, presentation",
                s
            )),
        }
    }
}

/// One audit engagement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditProject {
    #[serde(default)]
    pub id: ProjectId,
    pub client: Client,
    #[serde(default)]
    pub opportunities: Vec<Opportunity>,
    pub created_date: DateTime<Utc>,
    #[serde(default)]
    pub interviews_completed: u32,
    #[serde(default)]
    pub status: ProjectStatus,
}

impl AuditProject {
    /// Start a new engagement in the discovery stage
    pub fn new(client: Client) -> Self {
        Self {
            id: ProjectId::new(),
            client,
            opportunities: Vec::new(),
            created_date: Utc::now(),
            interviews_completed: 0,
            status: ProjectStatus::Discovery,
        }
    }

    pub fn add_opportunity(&mut self, opportunity: Opportunity) {
        self.opportunities.push(opportunity);
    }

    /// Opportunities in one quadrant, in insertion order
    pub fn opportunities_in(&self, category: Category) -> Vec<&Opportunity> {
        self.opportunities
            .iter()
            .filter(|o| o.category() == category)
            .collect()
    }

    /// File name used when the project is exported, e.g. `acme_clinic_audit.json`.
    ///
    /// Only `[a-z0-9_-]` survive from the company name, so the result is a
    /// bare file name and a valid header value.
    pub fn export_file_name(&self) -> String {
        let slug: String = self
            .client
            .company_name
            .trim()
            .to_lowercase()
            .chars()
            .filter_map(|c| match c {
                'a'..='z' | '0'..='9' | '_' | '-' => Some(c),
                ' ' => Some('_'),
                _ => None,
            })
            .collect();

        if slug.is_empty() {
            format!("{}_audit.json", self.id)
        } else {
            format!("{}_audit.json", slug)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Level, NewOpportunity};

    fn client() -> Client {
        Client::new(
            "Acme Healthcare Clinic",
            "healthcare",
            45,
            "Dr. Sarah Johnson",
            "sarah@acmeclinic.com",
            72_000.0,
        )
        .unwrap()
    }

    fn opportunity(name: &str, effort: Level, impact: Level) -> Opportunity {
        Opportunity::new(NewOpportunity {
            name: name.to_string(),
            description: String::new(),
            hours_saved_weekly: 5.0,
            employees_affected: 2,
            effort,
            impact,
        })
        .unwrap()
    }

    #[test]
    fn new_project_starts_in_discovery() {
        let project = AuditProject::new(client());
        assert_eq!(project.status, ProjectStatus::Discovery);
        assert_eq!(project.interviews_completed, 0);
        assert!(project.opportunities.is_empty());
    }

    #[test]
    fn opportunities_in_keeps_insertion_order() {
        let mut project = AuditProject::new(client());
        project.add_opportunity(opportunity("b", Level::Low, Level::High));
        project.add_opportunity(opportunity("x", Level::High, Level::High));
        project.add_opportunity(opportunity("a", Level::Low, Level::High));

        let names: Vec<&str> = project
            .opportunities_in(Category::QuickWin)
            .iter()
            .map(|o| o.name.as_str())
            .collect();
        assert_eq!(names, vec!["b", "a"]);
        assert!(project.opportunities_in(Category::NiceToHave).is_empty());
    }

    #[test]
    fn export_file_name_is_snake_case() {
        let project = AuditProject::new(client());
        assert_eq!(project.export_file_name(), "acme_healthcare_clinic_audit.json");
    }

    #[test]
    fn export_file_name_strips_path_characters() {
        let mut project = AuditProject::new(client());

        project.client.company_name = "/tmp/escape/pwn".to_string();
        assert_eq!(project.export_file_name(), "tmpescapepwn_audit.json");

        project.client.company_name = "../../etc/Café \"Co\"".to_string();
        assert_eq!(project.export_file_name(), "etccaf_co_audit.json");

        project.client.company_name = "../".to_string();
        assert_eq!(
            project.export_file_name(),
            format!("{}_audit.json", project.id)
        );
    }

    #[test]
    fn status_from_str() {
        assert_eq!(
            "analysis".parse::<ProjectStatus>().unwrap(),
            ProjectStatus::Analysis
        );
        assert_eq!(
            "Presentation".parse::<ProjectStatus>().unwrap(),
            ProjectStatus::Presentation
        );
        assert!("done".parse::<ProjectStatus>().is_err());
    }

    #[test]
    fn legacy_record_without_id_loads() {
        let json = r#"{
            "client": {
                "company_name": "Acme",
                "industry": "finance",
                "employee_count": 12,
                "contact_name": "Jo",
                "contact_email": "jo@acme.test",
                "avg_salary": 60000
            },
            "opportunities": [{
                "name": "Reconciliation bot",
                "description": "Manual matching",
                "hours_saved_weekly": 4,
                "employees_affected": 2,
                "effort": "low",
                "impact": "high",
                "category": "quick_win"
            }],
            "created_date": "2024-05-01T09:30:00Z",
            "interviews_completed": 3,
            "status": "analysis"
        }"#;

        let project: AuditProject = serde_json::from_str(json).unwrap();
        assert_eq!(project.status, ProjectStatus::Analysis);
        assert_eq!(project.interviews_completed, 3);
        assert_eq!(project.opportunities.len(), 1);
        assert_eq!(project.opportunities[0].category(), Category::QuickWin);
    }
}
