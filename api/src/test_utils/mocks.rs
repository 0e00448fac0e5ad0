//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{AuditProject, ProjectId};
use crate::domain::ports::AuditProjectRepository;
use crate::error::DomainError;

// ============================================================================
// In-Memory Audit Project Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryAuditProjectRepository {
    projects: Arc<RwLock<HashMap<ProjectId, AuditProject>>>,
    should_fail: bool,
}

impl InMemoryAuditProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository whose every call fails with a storage error
    pub fn failing() -> Self {
        Self {
            projects: Arc::new(RwLock::new(HashMap::new())),
            should_fail: true,
        }
    }

    pub fn with_project(self, project: AuditProject) -> Self {
        {
            let mut projects = self.projects.write().unwrap();
            projects.insert(project.id, project);
        }
        self
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.should_fail {
            return Err(DomainError::Storage("Mock storage failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl AuditProjectRepository for InMemoryAuditProjectRepository {
    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<AuditProject>, DomainError> {
        self.check()?;
        let projects = self.projects.read().unwrap();
        Ok(projects.get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<AuditProject>, DomainError> {
        self.check()?;
        let projects = self.projects.read().unwrap();
        let mut all: Vec<AuditProject> = projects.values().cloned().collect();
        all.sort_by(|a, b| b.created_date.cmp(&a.created_date));
        Ok(all)
    }

    async fn save(&self, project: &AuditProject) -> Result<(), DomainError> {
        self.check()?;
        let mut projects = self.projects.write().unwrap();
        projects.insert(project.id, project.clone());
        Ok(())
    }

    async fn delete(&self, id: &ProjectId) -> Result<bool, DomainError> {
        self.check()?;
        let mut projects = self.projects.write().unwrap();
        Ok(projects.remove(id).is_some())
    }
}
