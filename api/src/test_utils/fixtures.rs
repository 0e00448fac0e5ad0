//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use crate::domain::entities::{
    AuditProject, Client, Industry, Level, NewOpportunity, Opportunity,
};

/// Create a test client: a 45-person healthcare clinic
pub fn test_client() -> Client {
    Client {
        company_name: "Acme Healthcare Clinic".to_string(),
        industry: Industry::Healthcare,
        employee_count: 45,
        contact_name: "Dr. Sarah Johnson".to_string(),
        contact_email: "sarah@acmeclinic.com".to_string(),
        avg_salary: 72_000.0,
    }
}

/// Opportunity input saving 5 hours a week for 2 people
pub fn test_new_opportunity(name: &str, effort: Level, impact: Level) -> NewOpportunity {
    NewOpportunity {
        name: name.to_string(),
        description: format!("{} is done by hand today", name),
        hours_saved_weekly: 5.0,
        employees_affected: 2,
        effort,
        impact,
    }
}

/// Classified opportunity built from [`test_new_opportunity`]
pub fn test_opportunity(name: &str, effort: Level, impact: Level) -> Opportunity {
    Opportunity::new(test_new_opportunity(name, effort, impact))
        .expect("fixture opportunity is valid")
}

/// Create a project for the test client with no opportunities yet
pub fn test_project() -> AuditProject {
    AuditProject::new(test_client())
}
