//! JSON file adapter for AuditProjectRepository

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::RwLock;

use crate::domain::entities::{AuditProject, ProjectId};
use crate::domain::ports::AuditProjectRepository;
use crate::error::DomainError;

/// Stores each project as `<data_dir>/<id>.json`
pub struct JsonFileProjectRepository {
    data_dir: PathBuf,
    /// Serialises writers so a reader never sees a half-written directory listing
    lock: RwLock<()>,
}

impl JsonFileProjectRepository {
    /// Open the repository, creating the data directory if needed
    pub async fn open(data_dir: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir).await?;
        tracing::debug!(data_dir = %data_dir.display(), "Opened project store");
        Ok(Self {
            data_dir,
            lock: RwLock::new(()),
        })
    }

    fn path_for(&self, id: &ProjectId) -> PathBuf {
        self.data_dir.join(format!("{}.json", id))
    }

    async fn read_project(path: &Path) -> Result<AuditProject, DomainError> {
        let bytes = fs::read(path).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl AuditProjectRepository for JsonFileProjectRepository {
    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<AuditProject>, DomainError> {
        let _guard = self.lock.read().await;
        let path = self.path_for(id);
        if !fs::try_exists(&path).await? {
            return Ok(None);
        }
        Self::read_project(&path).await.map(Some)
    }

    async fn find_all(&self) -> Result<Vec<AuditProject>, DomainError> {
        let _guard = self.lock.read().await;
        let mut entries = fs::read_dir(&self.data_dir).await?;
        let mut projects = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            match Self::read_project(&path).await {
                Ok(project) => projects.push(project),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Skipping unreadable project file");
                }
            }
        }

        projects.sort_by(|a, b| b.created_date.cmp(&a.created_date));
        Ok(projects)
    }

    async fn save(&self, project: &AuditProject) -> Result<(), DomainError> {
        let _guard = self.lock.write().await;
        let json = serde_json::to_vec_pretty(project)?;

        let path = self.path_for(&project.id);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json).await?;
        fs::rename(&tmp, &path).await?;

        tracing::debug!(project_id = %project.id, path = %path.display(), "Saved project");
        Ok(())
    }

    async fn delete(&self, id: &ProjectId) -> Result<bool, DomainError> {
        let _guard = self.lock.write().await;
        match fs::remove_file(self.path_for(id)).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
