//! Opportunity domain entity
//!
//! An automation candidate identified during an audit, placed into one of
//! four priority quadrants from its effort and impact ratings.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Qualitative rating used for both effort and impact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    #[cfg(test)]
    pub const ALL: [Level; 3] = [Level::Low, Level::Medium, Level::High];
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::Low => write!(f, "low"),
            Level::Medium => write!(f, "medium"),
            Level::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for Level {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Level::Low),
            "medium" => Ok(Level::Medium),
            "high" => Ok(Level::High),
            _ => Err(DomainError::InvalidClassificationInput(format!(
                "'{}' is not a level. Use: low, medium, high",
                s
            ))),
        }
    }
}

/// Priority quadrant of an opportunity.
///
/// Variant order is the reporting order; `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    QuickWin,
    BigSwing,
    NiceToHave,
    Deprioritize,
}

impl Category {
    /// Fixed reporting order
    pub const ALL: [Category; 4] = [
        Category::QuickWin,
        Category::BigSwing,
        Category::NiceToHave,
        Category::Deprioritize,
    ];

    /// Plural display name used in documents
    pub fn title(&self) -> &'static str {
        match self {
            Category::QuickWin => "Quick Wins",
            Category::BigSwing => "Big Swings",
            Category::NiceToHave => "Nice-to-Haves",
            Category::Deprioritize => "Deprioritize",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::QuickWin => "🎯",
            Category::BigSwing => "🚀",
            Category::NiceToHave => "✨",
            Category::Deprioritize => "⏸️",
        }
    }

    /// Quadrant description as shown in the matrix headings
    pub fn quadrant(&self) -> &'static str {
        match self {
            Category::QuickWin => "Low Effort, High Impact",
            Category::BigSwing => "High Effort, High Impact",
            Category::NiceToHave => "Low Effort, Low Impact",
            Category::Deprioritize => "High Effort, Low Impact",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::QuickWin => write!(f, "quick_win"),
            Category::BigSwing => write!(f, "big_swing"),
            Category::NiceToHave => write!(f, "nice_to_have"),
            Category::Deprioritize => write!(f, "deprioritize"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "quick_win" => Ok(Category::QuickWin),
            "big_swing" => Ok(Category::BigSwing),
            "nice_to_have" => Ok(Category::NiceToHave),
            "deprioritize" => Ok(Category::Deprioritize),
            _ => Err(DomainError::Validation(format!("Unknown category: {}", s))),
        }
    }
}

/// Place an (effort, impact) pair into its quadrant.
///
/// Only three cells have a dedicated quadrant; every other pair, including
/// all medium ratings, falls through to `Deprioritize`.
pub fn classify(effort: Level, impact: Level) -> Category {
    match (effort, impact) {
        (Level::Low, Level::High) => Category::QuickWin,
        (Level::High, Level::High) => Category::BigSwing,
        (Level::Low, Level::Low) => Category::NiceToHave,
        _ => Category::Deprioritize,
    }
}

/// Classify raw effort/impact labels, rejecting anything outside low/medium/high
pub fn classify_labels(effort: &str, impact: &str) -> Result<Category, DomainError> {
    let effort: Level = effort.parse().map_err(|_| {
        DomainError::InvalidClassificationInput(format!(
            "effort '{}' must be one of low, medium, high",
            effort
        ))
    })?;
    let impact: Level = impact.parse().map_err(|_| {
        DomainError::InvalidClassificationInput(format!(
            "impact '{}' must be one of low, medium, high",
            impact
        ))
    })?;
    Ok(classify(effort, impact))
}

/// Data needed to create a new opportunity
#[derive(Debug, Clone, Deserialize)]
pub struct NewOpportunity {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub hours_saved_weekly: f64,
    pub employees_affected: u32,
    pub effort: Level,
    pub impact: Level,
}

/// An identified automation candidate.
///
/// `category` is assigned once by [`Opportunity::new`] and is not re-derived
/// if `effort` or `impact` change later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "OpportunityRecord")]
pub struct Opportunity {
    pub name: String,
    pub description: String,
    pub hours_saved_weekly: f64,
    pub employees_affected: u32,
    pub effort: Level,
    pub impact: Level,
    category: Category,
}

impl Opportunity {
    pub fn new(new: NewOpportunity) -> Result<Self, DomainError> {
        validate_workload(new.hours_saved_weekly, new.employees_affected)?;
        if new.name.trim().is_empty() {
            return Err(DomainError::Validation(
                "Opportunity name must not be empty".to_string(),
            ));
        }

        let category = classify(new.effort, new.impact);

        Ok(Self {
            name: new.name,
            description: new.description,
            hours_saved_weekly: new.hours_saved_weekly,
            employees_affected: new.employees_affected,
            effort: new.effort,
            impact: new.impact,
            category,
        })
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Nominal hours saved per week across all affected people
    pub fn total_weekly_hours(&self) -> f64 {
        self.hours_saved_weekly * f64::from(self.employees_affected)
    }
}

fn validate_workload(hours_saved_weekly: f64, employees_affected: u32) -> Result<(), DomainError> {
    if !hours_saved_weekly.is_finite() || hours_saved_weekly < 0.0 {
        return Err(DomainError::InvalidFinancialInput(format!(
            "hours_saved_weekly must be a non-negative number, got {}",
            hours_saved_weekly
        )));
    }
    if employees_affected == 0 {
        return Err(DomainError::InvalidFinancialInput(
            "employees_affected must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// Persisted shape of an opportunity.
///
/// A stored category is kept as-is; records without one are classified on load.
#[derive(Debug, Deserialize)]
pub struct OpportunityRecord {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub hours_saved_weekly: f64,
    pub employees_affected: u32,
    pub effort: String,
    pub impact: String,
    #[serde(default)]
    pub category: Option<String>,
}

impl TryFrom<OpportunityRecord> for Opportunity {
    type Error = DomainError;

    fn try_from(record: OpportunityRecord) -> Result<Self, Self::Error> {
        let effort: Level = record.effort.parse()?;
        let impact: Level = record.impact.parse()?;
        validate_workload(record.hours_saved_weekly, record.employees_affected)?;

        let category = match record.category.as_deref().map(str::trim) {
            Some(stored) if !stored.is_empty() => stored.parse()?,
            _ => classify(effort, impact),
        };

        Ok(Self {
            name: record.name,
            description: record.description,
            hours_saved_weekly: record.hours_saved_weekly,
            employees_affected: record.employees_affected,
            effort,
            impact,
            category,
        })
    }
}
