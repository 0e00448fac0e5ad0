//! ROI policy configuration
//!
//! Business assumptions behind the ROI model. Defaults are the standard
//! engagement assumptions; each can be overridden per deployment.

use crate::error::DomainError;

/// Share of promised time savings that is realistically achieved
pub const AUTOMATION_EFFICIENCY: f64 = 0.7;

/// Share of freed time redirected to revenue-generating work
pub const REVENUE_TIME_SHARE: f64 = 0.5;

/// Value of revenue work relative to salary cost
pub const REVENUE_VALUE_MULTIPLIER: f64 = 2.0;

/// Share of the program's implementation cost attributed to each category
pub const CATEGORY_COST_SHARE: f64 = 0.25;

/// Paid hours per year (40 hours * 52 weeks)
pub const HOURS_PER_YEAR: f64 = 2080.0;

pub const WEEKS_PER_YEAR: f64 = 52.0;

pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Tunable assumptions for ROI calculations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoiPolicy {
    pub automation_efficiency: f64,
    pub revenue_time_share: f64,
    pub revenue_value_multiplier: f64,
    pub category_cost_share: f64,
    pub hours_per_year: f64,
    pub weeks_per_year: f64,
}

impl Default for RoiPolicy {
    fn default() -> Self {
        Self {
            automation_efficiency: AUTOMATION_EFFICIENCY,
            revenue_time_share: REVENUE_TIME_SHARE,
            revenue_value_multiplier: REVENUE_VALUE_MULTIPLIER,
            category_cost_share: CATEGORY_COST_SHARE,
            hours_per_year: HOURS_PER_YEAR,
            weeks_per_year: WEEKS_PER_YEAR,
        }
    }
}

impl RoiPolicy {
    pub fn with_automation_efficiency(mut self, efficiency: f64) -> Self {
        self.automation_efficiency = efficiency;
        self
    }

    /// Reject assumptions that would make every figure meaningless
    pub fn validate(&self) -> Result<(), DomainError> {
        check_fraction("automation_efficiency", self.automation_efficiency)?;
        check_fraction("revenue_time_share", self.revenue_time_share)?;
        check_fraction("category_cost_share", self.category_cost_share)?;
        check_positive("revenue_value_multiplier", self.revenue_value_multiplier)?;
        check_positive("hours_per_year", self.hours_per_year)?;
        check_positive("weeks_per_year", self.weeks_per_year)?;
        Ok(())
    }
}

fn check_fraction(name: &str, value: f64) -> Result<(), DomainError> {
    if value.is_finite() && value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(DomainError::InvalidFinancialInput(format!(
            "{} must be in (0, 1], got {}",
            name, value
        )))
    }
}

fn check_positive(name: &str, value: f64) -> Result<(), DomainError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(DomainError::InvalidFinancialInput(format!(
            "{} must be positive, got {}",
            name, value
        )))
    }
}
