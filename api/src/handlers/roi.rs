//! Engine handlers
//!
//! Stateless endpoints over the classification and ROI engine.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::app::{RoiInput, RoiResult};
use crate::domain::entities::{classify_labels, Category, DEFAULT_AVG_SALARY};
use crate::error::AppError;
use crate::AppState;

/// Request to classify an effort/impact pair
#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub effort: String,
    pub impact: String,
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub category: Category,
    pub title: &'static str,
    pub quadrant: &'static str,
}

/// Request for a single-group ROI calculation
#[derive(Debug, Deserialize)]
pub struct RoiRequest {
    pub hours_saved_weekly_per_person: f64,
    pub employees_affected: u64,
    #[serde(default = "default_avg_salary")]
    pub avg_annual_salary: f64,
    /// Falls back to the configured default
    pub implementation_cost: Option<f64>,
    /// Overrides the configured automation efficiency for this call
    pub automation_efficiency: Option<f64>,
}

fn default_avg_salary() -> f64 {
    DEFAULT_AVG_SALARY
}

/// POST /classify
pub async fn classify(Json(body): Json<ClassifyRequest>) -> Result<Json<ClassifyResponse>, AppError> {
    let category = classify_labels(&body.effort, &body.impact)?;

    Ok(Json(ClassifyResponse {
        category,
        title: category.title(),
        quadrant: category.quadrant(),
    }))
}

/// POST /roi
pub async fn calculate_roi(
    State(state): State<AppState>,
    Json(body): Json<RoiRequest>,
) -> Result<Json<RoiResult>, AppError> {
    let service = &state.audit_service;
    let input = RoiInput {
        hours_saved_weekly_per_person: body.hours_saved_weekly_per_person,
        employees_affected: body.employees_affected,
        avg_annual_salary: body.avg_annual_salary,
        implementation_cost: body
            .implementation_cost
            .unwrap_or_else(|| service.default_implementation_cost()),
    };

    let result = service.compute_roi(&input, body.automation_efficiency)?;
    Ok(Json(result))
}
