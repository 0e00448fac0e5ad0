//! HTTP client for the audit API

use std::path::Path;

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_DISPOSITION};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// HTTP client for communicating with the audit API
#[derive(Clone)]
pub struct AuditClient {
    client: reqwest::Client,
    base_url: String,
}

/// A rendered deliverable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Document {
    InterviewGuide,
    OpportunityMatrix,
    ExecutiveReport,
    Slides,
}

impl Document {
    fn path_segment(&self) -> &'static str {
        match self {
            Document::InterviewGuide => "interview-guide",
            Document::OpportunityMatrix => "opportunity-matrix",
            Document::ExecutiveReport => "executive-report",
            Document::Slides => "slides",
        }
    }

    /// File name used when writing the document to disk
    pub fn file_name(&self) -> &'static str {
        match self {
            Document::InterviewGuide => "interview_questions.md",
            Document::OpportunityMatrix => "opportunity_matrix.md",
            Document::ExecutiveReport => "executive_report.md",
            Document::Slides => "presentation.md",
        }
    }
}

impl AuditClient {
    /// Create a new client with explicit configuration
    pub fn new(base_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[cfg(test)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn create_example(&self) -> Result<ProjectRecord> {
        self.post_json("/projects/example", &serde_json::json!({}))
            .await
    }

    pub async fn create_project(&self, project: &NewProject) -> Result<ProjectRecord> {
        self.post_json("/projects", project).await
    }

    pub async fn list_projects(&self) -> Result<Vec<ProjectSummary>> {
        self.get_json("/projects", &[]).await
    }

    pub async fn dashboard(&self, project_id: &str) -> Result<DashboardView> {
        self.get_json(&format!("/projects/{}/dashboard", project_id), &[])
            .await
    }

    /// ROI for a project as raw JSON, for printing
    pub async fn roi(
        &self,
        project_id: &str,
        implementation_cost: Option<f64>,
    ) -> Result<serde_json::Value> {
        self.get_json(
            &format!("/projects/{}/roi", project_id),
            &cost_query(implementation_cost),
        )
        .await
    }

    /// Fetch a markdown deliverable
    pub async fn document(
        &self,
        project_id: &str,
        document: Document,
        query: &[(&str, String)],
    ) -> Result<String> {
        let path = format!(
            "/projects/{}/documents/{}",
            project_id,
            document.path_segment()
        );
        let response = self.get(&path, query).await?;
        handle_text_response(response).await
    }

    /// Export a project, returning the suggested file name and the JSON body
    pub async fn export(&self, project_id: &str) -> Result<(String, String)> {
        let response = self
            .get(&format!("/projects/{}/export", project_id), &[])
            .await?;
        let file_name = response
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .and_then(attachment_file_name)
            .unwrap_or_else(|| format!("{}_audit.json", project_id));
        let body = handle_text_response(response).await?;
        Ok((file_name, body))
    }

    // --- Internal helpers ---

    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<reqwest::Response> {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .get(&url)
            .query(query)
            .send()
            .await
            .with_context(|| format!("Failed to GET {}", path))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let response = self.get(path, query).await?;
        let body = handle_text_response(response).await?;
        serde_json::from_str(&body).with_context(|| format!("Unexpected response from {}", path))
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to POST {}", path))?;

        let body = handle_text_response(response).await?;
        serde_json::from_str(&body).with_context(|| format!("Unexpected response from {}", path))
    }
}

pub fn cost_query(implementation_cost: Option<f64>) -> Vec<(&'static str, String)> {
    implementation_cost
        .map(|cost| vec![("implementation_cost", cost.to_string())])
        .unwrap_or_default()
}

/// Pull `filename` out of an `attachment; filename="..."` header.
///
/// Any directory part is dropped so the name always lands in the output dir.
fn attachment_file_name(header: &str) -> Option<String> {
    let name = header
        .split(';')
        .map(str::trim)
        .find_map(|part| part.strip_prefix("filename="))?
        .trim_matches('"');

    Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty())
        .map(str::to_string)
}

async fn handle_text_response(response: reqwest::Response) -> Result<String> {
    let status = response.status();
    let body = response
        .text()
        .await
        .context("Failed to read response body")?;

    if !status.is_success() {
        anyhow::bail!("API error ({}): {}", status, body);
    }

    Ok(body)
}

// --- Request Types ---

#[derive(Debug, Serialize)]
pub struct NewProject {
    pub company_name: String,
    pub industry: String,
    pub employee_count: u32,
    pub contact_name: String,
    pub contact_email: String,
    pub avg_salary: f64,
    pub opportunities: Vec<NewOpportunity>,
}

#[derive(Debug, Serialize)]
pub struct NewOpportunity {
    pub name: String,
    pub description: String,
    pub hours_saved_weekly: f64,
    pub employees_affected: u32,
    pub effort: String,
    pub impact: String,
}

// --- Response Types ---

/// The fields of a stored project the CLI reads back
#[derive(Debug, Deserialize)]
pub struct ProjectRecord {
    pub id: String,
    pub client: ClientRecord,
}

#[derive(Debug, Deserialize)]
pub struct ClientRecord {
    pub company_name: String,
}

#[derive(Debug, Deserialize)]
pub struct ProjectSummary {
    pub id: String,
    pub company_name: String,
    pub industry: String,
    pub status: String,
    pub opportunity_count: usize,
    pub interviews_completed: u32,
}

#[derive(Debug, Deserialize)]
pub struct DashboardView {
    pub company_name: String,
    pub industry: String,
    pub employee_count: u32,
    pub status: String,
    pub opportunity_count: usize,
    pub quick_win_count: usize,
    pub hours_saved_weekly: f64,
    pub annual_savings: f64,
    pub total_annual_value: f64,
    pub roi_percentage: f64,
    pub payback_months: Option<f64>,
}
