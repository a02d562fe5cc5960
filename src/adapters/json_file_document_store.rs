//! Filesystem-backed document store: one pretty-printed JSON file.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{AppError, Project, UserDelta, UserProfile};
use crate::ports::DocumentStore;

#[derive(Debug, Default, Serialize, Deserialize)]
struct Snapshot {
    #[serde(default)]
    projects: BTreeMap<String, Project>,
    #[serde(default)]
    users: BTreeMap<String, UserProfile>,
}

/// Document store persisted to a single JSON file.
///
/// Every operation reads the file, applies the change and writes it back
/// through a temporary sibling file. Concurrent writers are last-write-wins.
#[derive(Debug, Clone)]
pub struct JsonFileDocumentStore {
    path: PathBuf,
}

impl JsonFileDocumentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Snapshot, AppError> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(Snapshot::default()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Snapshot::default()),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, snapshot: &Snapshot) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(snapshot)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl DocumentStore for JsonFileDocumentStore {
    fn get_project(&self, id: &str) -> Result<Option<Project>, AppError> {
        Ok(self.load()?.projects.remove(id))
    }

    fn set_project(&self, project: &Project) -> Result<(), AppError> {
        let mut snapshot = self.load()?;
        snapshot.projects.insert(project.id.clone(), project.clone());
        self.save(&snapshot)
    }

    fn update_project(&self, project: &Project) -> Result<(), AppError> {
        let mut snapshot = self.load()?;
        if !snapshot.projects.contains_key(&project.id) {
            return Err(AppError::ProjectNotFound(project.id.clone()));
        }
        snapshot.projects.insert(project.id.clone(), project.clone());
        self.save(&snapshot)
    }

    fn projects_for_user(&self, user_id: &str) -> Result<Vec<Project>, AppError> {
        let mut projects: Vec<Project> =
            self.load()?.projects.into_values().filter(|p| p.is_owned_by(user_id)).collect();
        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id)));
        Ok(projects)
    }

    fn get_user(&self, id: &str) -> Result<Option<UserProfile>, AppError> {
        Ok(self.load()?.users.remove(id))
    }

    fn apply_user_delta(&self, user_id: &str, delta: &UserDelta) -> Result<UserProfile, AppError> {
        let mut snapshot = self.load()?;
        let profile =
            snapshot.users.entry(user_id.to_string()).or_insert_with(|| UserProfile::new(user_id));
        profile.apply(delta);
        let updated = profile.clone();
        self.save(&snapshot)?;
        Ok(updated)
    }
}
