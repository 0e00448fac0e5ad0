//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., JSON files on disk).

use async_trait::async_trait;

use crate::domain::entities::{AuditProject, ProjectId};
use crate::error::DomainError;

/// Repository for AuditProject aggregates
#[async_trait]
pub trait AuditProjectRepository: Send + Sync {
    /// Find a project by ID
    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<AuditProject>, DomainError>;

    /// List all projects, newest first
    async fn find_all(&self) -> Result<Vec<AuditProject>, DomainError>;

    /// Insert or replace a project
    async fn save(&self, project: &AuditProject) -> Result<(), DomainError>;

    /// Delete a project. Returns false if it did not exist.
    async fn delete(&self, id: &ProjectId) -> Result<bool, DomainError>;
}
