//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod documents;
pub mod opportunities;
pub mod projects;
pub mod roi;

pub use documents::{
    export_project, get_dashboard, get_executive_report, get_interview_guide,
    get_opportunity_matrix, get_roi, get_slides,
};
pub use opportunities::{add_opportunity, remove_opportunity};
pub use projects::{
    create_example_project, create_project, delete_project, get_project, import_project,
    list_projects, update_project,
};
pub use roi::{calculate_roi, classify};
