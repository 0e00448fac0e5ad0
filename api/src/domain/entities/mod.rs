//! Domain entities
//!
//! Pure domain models for an audit engagement. Persisted shapes live next to
//! the entity they restore (see `OpportunityRecord`).

pub mod audit_project;
pub mod client;
pub mod opportunity;

pub use audit_project::{AuditProject, ProjectId, ProjectStatus};
pub use client::{Client, Industry, DEFAULT_AVG_SALARY};
pub use opportunity::{classify_labels, Category, Level, NewOpportunity, Opportunity};
