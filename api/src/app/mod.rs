//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and the report renderers.

pub mod audit_service;
pub mod example_project;
pub mod roi_calculator;
pub mod roi_config;

pub use audit_service::{
    AuditService, Dashboard, NewAuditProject, DEFAULT_IMPLEMENTATION_COST, DEFAULT_REPORT_AUTHOR,
};
pub use roi_calculator::{AuditRoi, RoiInput, RoiResult};
// The pure engine is part of the public API even where the service wraps it
#[allow(unused_imports)]
pub use roi_calculator::{aggregate_roi, compute_roi, round_to};
// Policy constants are part of the public API for consumers tuning the model
#[allow(unused_imports)]
pub use roi_config::*;
