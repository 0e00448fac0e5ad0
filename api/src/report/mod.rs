//! Report module
//!
//! Markdown deliverables produced from a project and its computed ROI.

pub mod questions;
pub mod renderer;
pub mod slides;

pub use questions::InterviewRoles;
pub use renderer::{render_executive_report, render_interview_guide, render_opportunity_matrix};
pub use slides::render_slide_deck;
