//! ROI calculator
//!
//! Pure financial model for automation opportunities: savings from freed
//! hours, revenue potential from redirected time, and payback on a fixed
//! implementation cost. Nothing here performs I/O or holds state, so every
//! function is safe to call from any number of tasks at once.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::app::roi_config::{RoiPolicy, MONTHS_PER_YEAR};
use crate::domain::entities::{Category, Opportunity};
use crate::error::DomainError;

/// Inputs for one ROI calculation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoiInput {
    /// Nominal hours saved per affected person per week
    pub hours_saved_weekly_per_person: f64,
    pub employees_affected: u64,
    pub avg_annual_salary: f64,
    pub implementation_cost: f64,
}

/// Financial return of one group of opportunities.
///
/// Money is rounded to cents; `hours_saved_weekly`, `roi_percentage` and
/// `payback_months` to one decimal. `payback_months` is infinite when nothing
/// is saved and serializes as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiResult {
    pub hourly_rate: f64,
    /// Hours actually saved per week across everyone, after efficiency
    pub hours_saved_weekly: f64,
    pub weekly_savings: f64,
    pub annual_savings: f64,
    pub annual_revenue_potential: f64,
    pub total_annual_value: f64,
    pub roi_percentage: f64,
    #[serde(with = "payback")]
    pub payback_months: f64,
    pub implementation_cost: f64,
}

/// Program-wide ROI plus one entry per non-empty category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRoi {
    pub combined: RoiResult,
    /// Keyed in reporting order (quick_win, big_swing, nice_to_have, deprioritize)
    pub by_category: BTreeMap<Category, RoiResult>,
}

/// Compute the return of a single group
pub fn compute_roi(input: &RoiInput, policy: &RoiPolicy) -> Result<RoiResult, DomainError> {
    validate_input(input)?;
    policy.validate()?;

    let hourly_rate = input.avg_annual_salary / policy.hours_per_year;
    let actual_hours_saved = input.hours_saved_weekly_per_person
        * input.employees_affected as f64
        * policy.automation_efficiency;

    let weekly_savings = actual_hours_saved * hourly_rate;
    let annual_savings = weekly_savings * policy.weeks_per_year;

    let revenue_hours_weekly = actual_hours_saved * policy.revenue_time_share;
    let weekly_revenue_potential =
        revenue_hours_weekly * hourly_rate * policy.revenue_value_multiplier;
    let annual_revenue_potential = weekly_revenue_potential * policy.weeks_per_year;

    let total_annual_value = annual_savings + annual_revenue_potential;

    let roi_percentage = if input.implementation_cost > 0.0 {
        (annual_savings - input.implementation_cost) / input.implementation_cost * 100.0
    } else {
        0.0
    };

    let payback_months = if annual_savings > 0.0 {
        input.implementation_cost / (annual_savings / MONTHS_PER_YEAR)
    } else {
        f64::INFINITY
    };

    Ok(RoiResult {
        hourly_rate: round_to(hourly_rate, 2),
        hours_saved_weekly: round_to(actual_hours_saved, 1),
        weekly_savings: round_to(weekly_savings, 2),
        annual_savings: round_to(annual_savings, 2),
        annual_revenue_potential: round_to(annual_revenue_potential, 2),
        total_annual_value: round_to(total_annual_value, 2),
        roi_percentage: round_to(roi_percentage, 1),
        payback_months: round_to(payback_months, 1),
        implementation_cost: input.implementation_cost,
    })
}

/// ROI for the whole program and for each category present.
///
/// Opportunities are pooled into one weighted per-person rate before the
/// model is applied, rather than summing per-opportunity results. Each
/// category is charged `implementation_cost * category_cost_share`.
pub fn aggregate_roi(
    opportunities: &[Opportunity],
    avg_salary: f64,
    implementation_cost: f64,
    policy: &RoiPolicy,
) -> Result<AuditRoi, DomainError> {
    check_non_negative("avg_salary", avg_salary)?;
    check_non_negative("implementation_cost", implementation_cost)?;
    policy.validate()?;

    let combined = compute_roi(
        &pooled_input(opportunities.iter(), avg_salary, implementation_cost),
        policy,
    )?;

    let category_cost = implementation_cost * policy.category_cost_share;
    let mut by_category = BTreeMap::new();
    for category in Category::ALL {
        let mut members = opportunities
            .iter()
            .filter(|o| o.category() == category)
            .peekable();
        if members.peek().is_none() {
            continue;
        }
        let result = compute_roi(&pooled_input(members, avg_salary, category_cost), policy)?;
        by_category.insert(category, result);
    }

    tracing::debug!(
        opportunities = opportunities.len(),
        categories = by_category.len(),
        total_annual_value = combined.total_annual_value,
        "Aggregated ROI"
    );

    Ok(AuditRoi {
        combined,
        by_category,
    })
}

/// Reduce a group to a single weighted per-person weekly rate.
///
/// The head count is floored at 1 so an empty group yields zero hours
/// instead of dividing by zero.
fn pooled_input<'a>(
    opportunities: impl Iterator<Item = &'a Opportunity>,
    avg_salary: f64,
    implementation_cost: f64,
) -> RoiInput {
    let (total_hours, total_employees) = opportunities.fold((0.0, 0u64), |(hours, people), o| {
        (
            hours + o.total_weekly_hours(),
            people + u64::from(o.employees_affected),
        )
    });
    let employees = total_employees.max(1);

    RoiInput {
        hours_saved_weekly_per_person: total_hours / employees as f64,
        employees_affected: employees,
        avg_annual_salary: avg_salary,
        implementation_cost,
    }
}

fn validate_input(input: &RoiInput) -> Result<(), DomainError> {
    check_non_negative("hours_saved_weekly", input.hours_saved_weekly_per_person)?;
    check_non_negative("avg_annual_salary", input.avg_annual_salary)?;
    check_non_negative("implementation_cost", input.implementation_cost)?;
    if input.employees_affected == 0 {
        return Err(DomainError::InvalidFinancialInput(
            "employees_affected must be at least 1".to_string(),
        ));
    }
    Ok(())
}

fn check_non_negative(name: &str, value: f64) -> Result<(), DomainError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(DomainError::InvalidFinancialInput(format!(
            "{} must be a non-negative number, got {}",
            name, value
        )))
    }
}

/// Round to `decimals` places.
///
/// Works on the exact binary value, so only true ties (30.125) are affected
/// by the tie rule, and those go to the even digit.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*}", decimals, value).parse().unwrap_or(value)
}

mod payback {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(months: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if months.is_finite() {
            serializer.serialize_some(months)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Level, NewOpportunity};

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= 0.02,
            "expected {} got {}",
            expected,
            actual
        );
    }

    fn input(hours: f64, employees: u64, salary: f64, cost: f64) -> RoiInput {
        RoiInput {
            hours_saved_weekly_per_person: hours,
            employees_affected: employees,
            avg_annual_salary: salary,
            implementation_cost: cost,
        }
    }

    fn opportunity(hours: f64, employees: u32, effort: Level, impact: Level) -> Opportunity {
        Opportunity::new(NewOpportunity {
            name: format!("{}-{}", effort, impact),
            description: String::new(),
            hours_saved_weekly: hours,
            employees_affected: employees,
            effort,
            impact,
        })
        .unwrap()
    }

    #[test]
    fn reference_scenario() {
        let result = compute_roi(&input(10.0, 3, 62_000.0, 25_000.0), &RoiPolicy::default())
            .unwrap();

        assert_close(result.hourly_rate, 29.81);
        assert_close(result.hours_saved_weekly, 21.0);
        assert_close(result.weekly_savings, 625.96);
        assert_close(result.annual_savings, 32_550.0);
        assert_close(result.annual_revenue_potential, 32_550.0);
        assert_close(result.total_annual_value, 65_100.0);
        assert_close(result.roi_percentage, 30.2);
        assert_close(result.payback_months, 9.2);
        assert_eq!(result.implementation_cost, 25_000.0);
    }

    #[test]
    fn zero_cost_yields_zero_roi() {
        let result =
            compute_roi(&input(10.0, 3, 62_000.0, 0.0), &RoiPolicy::default()).unwrap();
        assert_eq!(result.roi_percentage, 0.0);
        assert_eq!(result.payback_months, 0.0);
    }

    #[test]
    fn zero_savings_yields_infinite_payback() {
        let result =
            compute_roi(&input(0.0, 3, 62_000.0, 25_000.0), &RoiPolicy::default()).unwrap();
        assert_eq!(result.annual_savings, 0.0);
        assert!(result.payback_months.is_infinite());
        assert!(result.payback_months > 0.0);
        assert_eq!(result.roi_percentage, -100.0);
    }

    #[test]
    fn efficiency_is_configurable() {
        let policy = RoiPolicy::default().with_automation_efficiency(1.0);
        let result = compute_roi(&input(10.0, 3, 62_000.0, 25_000.0), &policy).unwrap();
        assert_close(result.hours_saved_weekly, 30.0);
    }

    #[test]
    fn revenue_assumptions_are_configurable() {
        let policy = RoiPolicy {
            revenue_time_share: 0.25,
            revenue_value_multiplier: 1.0,
            ..RoiPolicy::default()
        };
        let result = compute_roi(&input(10.0, 3, 62_000.0, 25_000.0), &policy).unwrap();
        assert_close(result.annual_revenue_potential, 32_550.0 * 0.25);
    }

    #[test]
    fn negative_inputs_are_rejected() {
        let policy = RoiPolicy::default();
        for bad in [
            input(-1.0, 3, 62_000.0, 1.0),
            input(1.0, 3, -62_000.0, 1.0),
            input(1.0, 3, 62_000.0, -1.0),
            input(1.0, 0, 62_000.0, 1.0),
            input(f64::NAN, 3, 62_000.0, 1.0),
        ] {
            assert!(matches!(
                compute_roi(&bad, &policy),
                Err(DomainError::InvalidFinancialInput(_))
            ));
        }
    }

    #[test]
    fn payback_serializes_infinity_as_null() {
        let result =
            compute_roi(&input(0.0, 1, 62_000.0, 25_000.0), &RoiPolicy::default()).unwrap();
        let json = serde_json::to_value(result).unwrap();
        assert!(json["payback_months"].is_null());

        let back: RoiResult = serde_json::from_value(json).unwrap();
        assert!(back.payback_months.is_infinite());
    }

    #[test]
    fn result_field_names_are_stable() {
        let result =
            compute_roi(&input(10.0, 3, 62_000.0, 25_000.0), &RoiPolicy::default()).unwrap();
        let json = serde_json::to_value(result).unwrap();
        for key in [
            "hourly_rate",
            "hours_saved_weekly",
            "weekly_savings",
            "annual_savings",
            "annual_revenue_potential",
            "total_annual_value",
            "roi_percentage",
            "payback_months",
            "implementation_cost",
        ] {
            assert!(json.get(key).is_some(), "missing {}", key);
        }
    }

    #[test]
    fn aggregate_of_nothing_does_not_fail() {
        let roi = aggregate_roi(&[], 62_000.0, 15_000.0, &RoiPolicy::default()).unwrap();
        assert!(roi.by_category.is_empty());
        assert_eq!(roi.combined.hours_saved_weekly, 0.0);
        assert_eq!(roi.combined.annual_savings, 0.0);
        assert!(roi.combined.payback_months.is_infinite());
        assert_eq!(roi.combined.roi_percentage, -100.0);
    }

    #[test]
    fn aggregate_pools_hours_before_computing() {
        let opportunities = vec![
            opportunity(8.0, 3, Level::Low, Level::High),
            opportunity(10.0, 2, Level::Low, Level::High),
        ];
        let policy = RoiPolicy::default();

        let roi = aggregate_roi(&opportunities, 72_000.0, 15_000.0, &policy).unwrap();
        let expected = compute_roi(&input(44.0 / 5.0, 5, 72_000.0, 15_000.0), &policy).unwrap();

        assert_eq!(roi.combined, expected);
        assert_close(roi.combined.hours_saved_weekly, 30.8);
    }

    #[test]
    fn aggregate_charges_a_quarter_of_cost_per_category() {
        let opportunities = vec![
            opportunity(8.0, 3, Level::Low, Level::High),
            opportunity(10.0, 5, Level::High, Level::High),
        ];
        let roi = aggregate_roi(&opportunities, 72_000.0, 20_000.0, &RoiPolicy::default())
            .unwrap();

        assert_eq!(roi.combined.implementation_cost, 20_000.0);
        for result in roi.by_category.values() {
            assert_eq!(result.implementation_cost, 5_000.0);
        }
    }

    #[test]
    fn aggregate_skips_empty_categories_and_keeps_fixed_order() {
        let opportunities = vec![
            opportunity(3.0, 4, Level::Medium, Level::Medium),
            opportunity(4.0, 8, Level::High, Level::High),
            opportunity(6.0, 3, Level::Low, Level::High),
        ];
        let roi = aggregate_roi(&opportunities, 62_000.0, 25_000.0, &RoiPolicy::default())
            .unwrap();

        let keys: Vec<Category> = roi.by_category.keys().copied().collect();
        assert_eq!(
            keys,
            vec![
                Category::QuickWin,
                Category::BigSwing,
                Category::Deprioritize
            ]
        );
        assert!(!roi.by_category.contains_key(&Category::NiceToHave));

        let json = serde_json::to_string(&roi).unwrap();
        let quick = json.find("\"quick_win\"").unwrap();
        let big = json.find("\"big_swing\"").unwrap();
        let depri = json.find("\"deprioritize\"").unwrap();
        assert!(quick < big && big < depri);
    }

    #[test]
    fn aggregate_category_matches_single_group_computation() {
        let opportunities = vec![
            opportunity(6.0, 3, Level::Low, Level::High),
            opportunity(10.0, 3, Level::Low, Level::High),
            opportunity(5.0, 5, Level::Low, Level::High),
        ];
        let policy = RoiPolicy::default();
        let roi = aggregate_roi(&opportunities, 62_000.0, 25_000.0, &policy).unwrap();

        let expected = compute_roi(&input(73.0 / 11.0, 11, 62_000.0, 6_250.0), &policy).unwrap();
        assert_eq!(roi.by_category[&Category::QuickWin], expected);
    }

    #[test]
    fn aggregate_rejects_negative_salary_or_cost() {
        let policy = RoiPolicy::default();
        assert!(matches!(
            aggregate_roi(&[], -1.0, 0.0, &policy),
            Err(DomainError::InvalidFinancialInput(_))
        ));
        assert!(matches!(
            aggregate_roi(&[], 1.0, -5.0, &policy),
            Err(DomainError::InvalidFinancialInput(_))
        ));
    }

    #[test]
    fn round_to_places() {
        assert_eq!(round_to(29.807_692, 2), 29.81);
        assert_eq!(round_to(9.216_589, 1), 9.2);
        assert_eq!(round_to(-0.25, 1), -0.2);
        assert!(round_to(f64::INFINITY, 1).is_infinite());
    }

    #[test]
    fn round_to_breaks_exact_ties_to_even() {
        assert_eq!(round_to(30.125, 2), 30.12);
        assert_eq!(round_to(30.625, 2), 30.62);
        assert_eq!(round_to(30.375, 2), 30.38);
        assert_eq!(round_to(0.5, 0), 0.0);
        assert_eq!(round_to(1.5, 0), 2.0);
        // 2.675 is stored just below the tie
        assert_eq!(round_to(2.675, 2), 2.67);
    }

    #[test]
    fn hourly_rate_on_a_tie_rounds_to_even() {
        let policy = RoiPolicy::default();
        let at_62660 = compute_roi(&input(1.0, 1, 62_660.0, 0.0), &policy).unwrap();
        let at_63700 = compute_roi(&input(1.0, 1, 63_700.0, 0.0), &policy).unwrap();

        assert_eq!(at_62660.hourly_rate, 30.12);
        assert_eq!(at_63700.hourly_rate, 30.62);
    }
}
