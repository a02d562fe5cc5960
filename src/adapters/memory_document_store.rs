use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::{AppError, Project, UserDelta, UserProfile};
use crate::ports::DocumentStore;

#[derive(Debug, Default)]
struct Collections {
    projects: HashMap<String, Project>,
    users: HashMap<String, UserProfile>,
}

/// In-memory document store.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocumentStore {
    // Arc<Mutex> so clones share state
    inner: Arc<Mutex<Collections>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Collections>, AppError> {
        self.inner.lock().map_err(|_| AppError::Internal("document store lock poisoned".into()))
    }
}

impl DocumentStore for MemoryDocumentStore {
    fn get_project(&self, id: &str) -> Result<Option<Project>, AppError> {
        Ok(self.lock()?.projects.get(id).cloned())
    }

    fn set_project(&self, project: &Project) -> Result<(), AppError> {
        self.lock()?.projects.insert(project.id.clone(), project.clone());
        Ok(())
    }

    fn update_project(&self, project: &Project) -> Result<(), AppError> {
        let mut collections = self.lock()?;
        match collections.projects.get_mut(&project.id) {
            Some(existing) => {
                *existing = project.clone();
                Ok(())
            }
            None => Err(AppError::ProjectNotFound(project.id.clone())),
        }
    }

    fn projects_for_user(&self, user_id: &str) -> Result<Vec<Project>, AppError> {
        let collections = self.lock()?;
        let mut projects: Vec<Project> =
            collections.projects.values().filter(|p| p.is_owned_by(user_id)).cloned().collect();
        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id)));
        Ok(projects)
    }

    fn get_user(&self, id: &str) -> Result<Option<UserProfile>, AppError> {
        Ok(self.lock()?.users.get(id).cloned())
    }

    fn apply_user_delta(&self, user_id: &str, delta: &UserDelta) -> Result<UserProfile, AppError> {
        let mut collections = self.lock()?;
        let profile =
            collections.users.entry(user_id.to_string()).or_insert_with(|| UserProfile::new(user_id));
        profile.apply(delta);
        Ok(profile.clone())
    }
}
