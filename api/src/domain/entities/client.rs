//! Client domain entity
//!
//! The organisation being audited and its economic baseline.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Average annual salary assumed when none is given
pub const DEFAULT_AVG_SALARY: f64 = 65_000.0;

/// Industry of the client.
///
/// Known industries get tailored interview questions; anything else is kept
/// verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Industry {
    Healthcare,
    ProfessionalServices,
    RetailEcommerce,
    Finance,
    Manufacturing,
    AgedCare,
    Other(String),
}

impl Industry {
    /// Machine key, e.g. `professional_services`
    pub fn key(&self) -> String {
        match self {
            Industry::Healthcare => "healthcare".to_string(),
            Industry::ProfessionalServices => "professional_services".to_string(),
            Industry::RetailEcommerce => "retail_ecommerce".to_string(),
            Industry::Finance => "finance".to_string(),
            Industry::Manufacturing => "manufacturing".to_string(),
            Industry::AgedCare => "aged_care".to_string(),
            Industry::Other(label) => label.clone(),
        }
    }

    /// Human label, e.g. `Professional Services`
    pub fn label(&self) -> String {
        self.key()
            .split('_')
            .filter(|w| !w.is_empty())
            .map(|w| {
                let mut chars = w.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<String> for Industry {
    fn from(s: String) -> Self {
        let key = s.trim().to_lowercase().replace([' ', '-'], "_");
        match key.as_str() {
            "healthcare" => Industry::Healthcare,
            "professional_services" => Industry::ProfessionalServices,
            "retail_ecommerce" => Industry::RetailEcommerce,
            "finance" => Industry::Finance,
            "manufacturing" => Industry::Manufacturing,
            "aged_care" => Industry::AgedCare,
            _ => Industry::Other(s.trim().to_string()),
        }
    }
}

impl From<&str> for Industry {
    fn from(s: &str) -> Self {
        Industry::from(s.to_string())
    }
}

impl From<Industry> for String {
    fn from(industry: Industry) -> Self {
        industry.key()
    }
}

impl std::fmt::Display for Industry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

fn default_avg_salary() -> f64 {
    DEFAULT_AVG_SALARY
}

/// The audited organisation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub company_name: String,
    pub industry: Industry,
    pub employee_count: u32,
    pub contact_name: String,
    pub contact_email: String,
    /// Average annual salary of affected staff
    #[serde(default = "default_avg_salary")]
    pub avg_salary: f64,
}

impl Client {
    /// Build a client, rejecting a blank name, zero head count or a non-positive salary
    pub fn new(
        company_name: impl Into<String>,
        industry: impl Into<Industry>,
        employee_count: u32,
        contact_name: impl Into<String>,
        contact_email: impl Into<String>,
        avg_salary: f64,
    ) -> Result<Self, DomainError> {
        let client = Self {
            company_name: company_name.into(),
            industry: industry.into(),
            employee_count,
            contact_name: contact_name.into(),
            contact_email: contact_email.into(),
            avg_salary,
        };
        client.validate()?;
        Ok(client)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.company_name.trim().is_empty() {
            return Err(DomainError::Validation(
                "Company name must not be empty".to_string(),
            ));
        }
        if self.employee_count == 0 {
            return Err(DomainError::InvalidFinancialInput(
                "employee_count must be at least 1".to_string(),
            ));
        }
        if !self.avg_salary.is_finite() || self.avg_salary <= 0.0 {
            return Err(DomainError::InvalidFinancialInput(format!(
                "avg_salary must be positive, got {}",
                self.avg_salary
            )));
        }
        Ok(())
    }

    /// Recommended interview count for the head count
    pub fn recommended_interviews(&self) -> &'static str {
        if self.employee_count < 50 {
            "3-5"
        } else {
            "10-15"
        }
    }
}
