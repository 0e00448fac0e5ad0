use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::app::{
    RoiPolicy, AUTOMATION_EFFICIENCY, CATEGORY_COST_SHARE, DEFAULT_IMPLEMENTATION_COST,
    DEFAULT_REPORT_AUTHOR, REVENUE_TIME_SHARE, REVENUE_VALUE_MULTIPLIER,
};

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Directory holding one JSON file per project
    pub data_dir: PathBuf,
    /// Used when a request gives no implementation cost
    pub default_implementation_cost: f64,
    pub policy: RoiPolicy,
    /// Shown on reports and slides
    pub report_author: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            data_dir: PathBuf::from("./data"),
            default_implementation_cost: DEFAULT_IMPLEMENTATION_COST,
            policy: RoiPolicy::default(),
            report_author: DEFAULT_REPORT_AUTHOR.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        let policy = RoiPolicy {
            automation_efficiency: parse_var("AUTOMATION_EFFICIENCY", AUTOMATION_EFFICIENCY),
            revenue_time_share: parse_var("REVENUE_TIME_SHARE", REVENUE_TIME_SHARE),
            revenue_value_multiplier: parse_var(
                "REVENUE_VALUE_MULTIPLIER",
                REVENUE_VALUE_MULTIPLIER,
            ),
            category_cost_share: parse_var("CATEGORY_COST_SHARE", CATEGORY_COST_SHARE),
            ..defaults.policy
        };

        Self {
            port: parse_var("PORT", defaults.port),
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            default_implementation_cost: parse_var(
                "DEFAULT_IMPLEMENTATION_COST",
                defaults.default_implementation_cost,
            ),
            policy,
            report_author: env::var("REPORT_AUTHOR").unwrap_or(defaults.report_author),
        }
    }
}

/// Read and parse an env var, falling back to `default` when unset or invalid
fn parse_var<T>(name: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => parse_or(name, &raw, default),
        Err(_) => default,
    }
}

fn parse_or<T>(name: &str, raw: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    raw.trim().parse().unwrap_or_else(|_| {
        tracing::warn!(var = name, value = raw, default = %default, "Invalid value, using default");
        default
    })
}
