//! AI Audit Toolkit CLI
//!
//! Drives the audit API from the terminal and writes deliverables to an
//! output directory:
//! - Generating the bundled example engagement
//! - Capturing a new audit through an interactive wizard
//! - Rendering interview guides, matrices, reports and slides
//! - Printing ROI and project status

mod client;
mod wizard;

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client::{cost_query, AuditClient, Document, DEFAULT_API_URL};
use tracing_subscriber::EnvFilter;
use wizard::Wizard;

/// AI Audit Toolkit
#[derive(Parser, Debug)]
#[command(name = "audit-cli")]
#[command(version)]
#[command(about = "AI readiness audits: interviews, opportunity matrix, ROI and reports")]
struct Cli {
    /// Base URL of the audit API
    #[arg(long, global = true, env = "AUDIT_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Directory deliverables are written to
    #[arg(short, long, global = true, default_value = "./output")]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create the example aged-care audit and write every deliverable
    Example {
        #[arg(long)]
        implementation_cost: Option<f64>,
    },
    /// Start a new audit interactively
    New,
    /// Write the interview guide
    Questions {
        #[arg(short, long)]
        project: String,
        /// both, stakeholder or enduser
        #[arg(long, default_value = "both")]
        role: String,
    },
    /// Write the opportunity matrix
    Matrix {
        #[arg(short, long)]
        project: String,
    },
    /// Print the ROI breakdown as JSON
    Roi {
        #[arg(short, long)]
        project: String,
        #[arg(long)]
        implementation_cost: Option<f64>,
    },
    /// Write the executive report
    Report {
        #[arg(short, long)]
        project: String,
        #[arg(long)]
        implementation_cost: Option<f64>,
    },
    /// Write the slide deck
    Slides {
        #[arg(short, long)]
        project: String,
        #[arg(long)]
        implementation_cost: Option<f64>,
    },
    /// Save the project record as JSON
    Export {
        #[arg(short, long)]
        project: String,
    },
    /// Show one project's headline numbers, or list every project
    Status {
        #[arg(short, long)]
        project: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Log to stderr so stdout stays clean for ROI JSON
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = AuditClient::new(&cli.api_url)?;
    tracing::debug!(api_url = %cli.api_url, "Using audit API");

    match cli.command {
        Command::Example {
            implementation_cost,
        } => {
            let project = client.create_example().await?;
            tracing::info!(project_id = %project.id, "Created example project");
            let cost = cost_query(implementation_cost);

            for document in [
                Document::InterviewGuide,
                Document::OpportunityMatrix,
                Document::ExecutiveReport,
                Document::Slides,
            ] {
                let body = client.document(&project.id, document, &cost).await?;
                let path = write_document(&cli.output, document, &body).await?;
                report_written(document_label(document), &path);
            }

            let path = export(&client, &project.id, &cli.output).await?;
            report_written("Project", &path);

            println!("\n{}", "=".repeat(60));
            println!(
                "Example audit for {} generated in {}",
                project.client.company_name,
                cli.output.display()
            );
            println!("Project id: {}", project.id);
            println!("{}", "=".repeat(60));
        }
        Command::New => {
            let stdin = io::stdin();
            let new_project = Wizard::new(stdin.lock(), io::stdout()).run()?;
            let project = client.create_project(&new_project).await?;

            let path = export(&client, &project.id, &cli.output).await?;
            println!("Project saved to: {}", path.display());
            println!("Project id: {}", project.id);
        }
        Command::Questions { project, role } => {
            let body = client
                .document(&project, Document::InterviewGuide, &[("role", role)])
                .await?;
            let path = write_document(&cli.output, Document::InterviewGuide, &body).await?;
            println!("Saved to: {}", path.display());
        }
        Command::Matrix { project } => {
            let body = client
                .document(&project, Document::OpportunityMatrix, &[])
                .await?;
            let path = write_document(&cli.output, Document::OpportunityMatrix, &body).await?;
            println!("Saved to: {}", path.display());
        }
        Command::Roi {
            project,
            implementation_cost,
        } => {
            let roi = client.roi(&project, implementation_cost).await?;
            println!("{}", serde_json::to_string_pretty(&roi)?);
        }
        Command::Report {
            project,
            implementation_cost,
        } => {
            let body = client
                .document(
                    &project,
                    Document::ExecutiveReport,
                    &cost_query(implementation_cost),
                )
                .await?;
            let path = write_document(&cli.output, Document::ExecutiveReport, &body).await?;
            println!("Saved to: {}", path.display());
        }
        Command::Slides {
            project,
            implementation_cost,
        } => {
            let body = client
                .document(&project, Document::Slides, &cost_query(implementation_cost))
                .await?;
            let path = write_document(&cli.output, Document::Slides, &body).await?;
            println!("Saved to: {}", path.display());
        }
        Command::Export { project } => {
            let path = export(&client, &project, &cli.output).await?;
            println!("Saved to: {}", path.display());
        }
        Command::Status { project: Some(id) } => {
            let view = client.dashboard(&id).await?;
            println!(
                "{} - {} | {} employees",
                view.company_name, view.industry, view.employee_count
            );
            println!("Status:             {}", view.status);
            println!("Opportunities:      {}", view.opportunity_count);
            println!("Quick wins:         {}", view.quick_win_count);
            println!("Hours saved/week:   {:.0}", view.hours_saved_weekly);
            println!("Annual savings:     ${:.0}", view.annual_savings);
            println!("Total annual value: ${:.0}", view.total_annual_value);
            println!("First year ROI:     {:.0}%", view.roi_percentage);
            match view.payback_months {
                Some(months) => println!("Payback:            {:.1} months", months),
                None => println!("Payback:            n/a (no savings)"),
            }
        }
        Command::Status { project: None } => {
            let projects = client.list_projects().await?;
            if projects.is_empty() {
                println!("No projects yet. Run `audit-cli example` or `audit-cli new`.");
            }
            for p in projects {
                println!(
                    "{}  {} ({}) - {}, {} opportunities, {} interviews",
                    p.id,
                    p.company_name,
                    p.industry,
                    p.status,
                    p.opportunity_count,
                    p.interviews_completed
                );
            }
        }
    }

    Ok(())
}

fn document_label(document: Document) -> &'static str {
    match document {
        Document::InterviewGuide => "Interview questions",
        Document::OpportunityMatrix => "Opportunity matrix",
        Document::ExecutiveReport => "Executive report",
        Document::Slides => "Presentation",
    }
}

fn report_written(label: &str, path: &Path) {
    println!("{}: {}", label, path.display());
}

async fn write_document(dir: &Path, document: Document, body: &str) -> Result<PathBuf> {
    write_output(dir, document.file_name(), body).await
}

async fn export(client: &AuditClient, project_id: &str, dir: &Path) -> Result<PathBuf> {
    let (file_name, body) = client.export(project_id).await?;
    write_output(dir, &file_name, &body).await
}

/// Write a file under `dir`, creating the directory first
async fn write_output(dir: &Path, file_name: &str, contents: &str) -> Result<PathBuf> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let path = dir.join(file_name);
    tokio::fs::write(&path, contents)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "Wrote output");
    Ok(path)
}
