//! Interactive new-audit wizard
//!
//! Prompts for the client, then loops on "Add opportunity?" until the user
//! answers anything other than `y`.

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::client::{NewOpportunity, NewProject};

const LEVELS: [&str; 3] = ["low", "medium", "high"];

pub struct Wizard<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Wizard<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn run(&mut self) -> Result<NewProject> {
        writeln!(self.output, "\n{}", "=".repeat(60))?;
        writeln!(self.output, "  NEW AI AUDIT PROJECT")?;
        writeln!(self.output, "{}\n", "=".repeat(60))?;

        let company_name = self.ask_required("Company name")?;
        let industry = self.ask(
            "Industry (healthcare, professional_services, retail_ecommerce, finance, manufacturing, aged_care)",
        )?;
        let employee_count = self.ask_parsed("Employee count", 50u32, at_least_one)?;
        let contact_name = self.ask("Primary contact name")?;
        let contact_email = self.ask("Contact email")?;
        let avg_salary =
            self.ask_parsed("Average annual salary [$65000]", 65_000.0, positive)?;

        let mut opportunities = Vec::new();
        while self.ask("\nAdd opportunity? (y/n)")?.eq_ignore_ascii_case("y") {
            opportunities.push(self.opportunity()?);
        }

        Ok(NewProject {
            company_name,
            industry: if industry.is_empty() {
                "other".to_string()
            } else {
                industry
            },
            employee_count,
            contact_name,
            contact_email,
            avg_salary,
            opportunities,
        })
    }

    fn opportunity(&mut self) -> Result<NewOpportunity> {
        writeln!(self.output, "\n--- Add Opportunity ---\n")?;

        Ok(NewOpportunity {
            name: self.ask_required("Opportunity name")?,
            description: self.ask("Description (current problem)")?,
            hours_saved_weekly: self.ask_parsed(
                "Hours saved per week (per person)",
                5.0,
                non_negative,
            )?,
            employees_affected: self.ask_parsed("Number of employees affected", 1u32, at_least_one)?,
            effort: self.ask_level("Effort")?,
            impact: self.ask_level("Impact")?,
        })
    }

    /// One trimmed line of input; end of input is an error
    fn ask(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{}: ", label)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            bail!("Input ended before the wizard finished");
        }
        Ok(line.trim().to_string())
    }

    fn ask_required(&mut self, label: &str) -> Result<String> {
        loop {
            let answer = self.ask(label)?;
            if !answer.is_empty() {
                return Ok(answer);
            }
            writeln!(self.output, "  A value is required.")?;
        }
    }

    /// Blank input takes the default; unparseable or out-of-range input asks again
    fn ask_parsed<T: FromStr>(
        &mut self,
        label: &str,
        default: T,
        check: fn(&T) -> Result<(), &'static str>,
    ) -> Result<T> {
        loop {
            let answer = self.ask(label)?;
            if answer.is_empty() {
                return Ok(default);
            }
            match answer.parse() {
                Ok(value) => match check(&value) {
                    Ok(()) => return Ok(value),
                    Err(hint) => writeln!(self.output, "  {}", hint)?,
                },
                Err(_) => writeln!(self.output, "  '{}' is not a valid number.", answer)?,
            }
        }
    }

    /// low/medium/high, defaulting to medium
    fn ask_level(&mut self, label: &str) -> Result<String> {
        let prompt = format!("{} (low/medium/high)", label);
        loop {
            let answer = self.ask(&prompt)?.to_lowercase();
            if answer.is_empty() {
                return Ok("medium".to_string());
            }
            if LEVELS.contains(&answer.as_str()) {
                return Ok(answer);
            }
            writeln!(self.output, "  Use low, medium or high.")?;
        }
    }
}

fn at_least_one(value: &u32) -> Result<(), &'static str> {
    if *value >= 1 {
        Ok(())
    } else {
        Err("Must be at least 1.")
    }
}

fn positive(value: &f64) -> Result<(), &'static str> {
    if value.is_finite() && *value > 0.0 {
        Ok(())
    } else {
        Err("Must be greater than zero.")
    }
}

fn non_negative(value: &f64) -> Result<(), &'static str> {
    if value.is_finite() && *value >= 0.0 {
        Ok(())
    } else {
        Err("Must be zero or more.")
    }
}
