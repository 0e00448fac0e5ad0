//! Bundled example engagement: a residential aged-care provider midway
//! through analysis.

use crate::domain::entities::{
    AuditProject, Client, Industry, Level, NewOpportunity, Opportunity, ProjectStatus,
};
use crate::error::DomainError;

struct ExampleOpportunity {
    name: &'static str,
    description: &'static str,
    hours_saved_weekly: f64,
    employees_affected: u32,
    effort: Level,
    impact: Level,
}

const OPPORTUNITIES: &[ExampleOpportunity] = &[
    ExampleOpportunity {
        name: "Digital Incident Reporting & SIRS Compliance",
        description: "Paper-based incident forms take 30-45 min each; SIRS notifications manually tracked in spreadsheet",
        hours_saved_weekly: 6.0,
        employees_affected: 3,
        effort: Level::Low,
        impact: Level::High,
    },
    ExampleOpportunity {
        name: "AI-Assisted Quality Standards Documentation",
        description: "Admin staff spend 12+ hrs/week compiling evidence portfolios for the 8 Aged Care Quality Standards",
        hours_saved_weekly: 10.0,
        employees_affected: 3,
        effort: Level::Low,
        impact: Level::High,
    },
    ExampleOpportunity {
        name: "Automated AN-ACC Care Minutes Tracking",
        description: "Manual tracking of care minutes across shifts; paper timesheets then re-entered into government portal",
        hours_saved_weekly: 5.0,
        employees_affected: 5,
        effort: Level::Low,
        impact: Level::High,
    },
    ExampleOpportunity {
        name: "Electronic Medication Management",
        description: "Paper medication charts with manual round tracking; double-handling increases medication error risk",
        hours_saved_weekly: 4.0,
        employees_affected: 8,
        effort: Level::High,
        impact: Level::High,
    },
    ExampleOpportunity {
        name: "Clinical Care Plan Automation",
        description: "Quarterly care plan reviews done manually across 45 residents with paper-based assessments",
        hours_saved_weekly: 3.0,
        employees_affected: 8,
        effort: Level::High,
        impact: Level::High,
    },
    ExampleOpportunity {
        name: "Resident & Family Communication Portal",
        description: "Manual phone calls and printed letters to families for care updates and incident notifications",
        hours_saved_weekly: 3.0,
        employees_affected: 4,
        effort: Level::Low,
        impact: Level::Low,
    },
    ExampleOpportunity {
        name: "Staff Rostering Optimisation",
        description: "Manual roster creation in spreadsheets; difficulty balancing care minute targets and award conditions",
        hours_saved_weekly: 5.0,
        employees_affected: 2,
        effort: Level::Low,
        impact: Level::Low,
    },
];

/// Build a fresh copy of the example project (new id, created now)
pub fn example_project() -> Result<AuditProject, DomainError> {
    let client = Client::new(
        "Maplewood Residential Aged Care",
        Industry::AgedCare,
        40,
        "Karen Mitchell",
        "karen.mitchell@maplewoodcare.com.au",
        62_000.0,
    )?;

    let mut project = AuditProject::new(client);
    for example in OPPORTUNITIES {
        project.add_opportunity(Opportunity::new(NewOpportunity {
            name: example.name.to_string(),
            description: example.description.to_string(),
            hours_saved_weekly: example.hours_saved_weekly,
            employees_affected: example.employees_affected,
            effort: example.effort,
            impact: example.impact,
        })?);
    }
    project.interviews_completed = 8;
    project.status = ProjectStatus::Analysis;

    Ok(project)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Category;

    #[test]
    fn example_project_is_classified() {
        let project = example_project().unwrap();

        assert_eq!(project.client.industry, Industry::AgedCare);
        assert_eq!(project.opportunities.len(), 7);
        assert_eq!(project.opportunities_in(Category::QuickWin).len(), 3);
        assert_eq!(project.opportunities_in(Category::BigSwing).len(), 2);
        assert_eq!(project.opportunities_in(Category::NiceToHave).len(), 2);
        assert_eq!(project.status, ProjectStatus::Analysis);
    }

    #[test]
    fn example_projects_get_distinct_ids() {
        assert_ne!(example_project().unwrap().id, example_project().unwrap().id);
    }
}
