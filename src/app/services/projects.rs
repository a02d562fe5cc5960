//! Project creation and lookup on top of the document store.

use chrono::{DateTime, Utc};
use log::info;

use super::curriculum::{CurriculumService, GenerationOutcome};
use crate::domain::{AppError, CurriculumRequest, Project, UserDelta};
use crate::ports::DocumentStore;

/// A freshly stored project and the generation path that produced its chapters.
#[derive(Debug, Clone)]
pub struct CreatedProject {
    pub project: Project,
    pub used_fallback: bool,
}

pub struct ProjectService<'a, S: DocumentStore> {
    store: &'a S,
    curriculum: CurriculumService<'a>,
}

impl<'a, S: DocumentStore> ProjectService<'a, S> {
    pub fn new(store: &'a S, curriculum: CurriculumService<'a>) -> Self {
        Self { store, curriculum }
    }

    /// Generate a curriculum, store it as a new project and link it to the user.
    pub fn create(
        &self,
        user_id: &str,
        request: CurriculumRequest,
    ) -> Result<CreatedProject, AppError> {
        let outcome: GenerationOutcome = self.curriculum.generate_with_outcome(&request);
        let used_fallback = outcome.is_fallback();
        let chapters = outcome.chapters;

        let now = Utc::now();
        let id = self.next_project_id(now)?;
        let project = Project::new(id, user_id, request, chapters, now);

        self.store.set_project(&project)?;
        self.store.apply_user_delta(user_id, &UserDelta::project_added(&project.id))?;
        info!(
            "Created project {} for user {} with {} chapters",
            project.id,
            user_id,
            project.chapters.len()
        );

        Ok(CreatedProject { project, used_fallback })
    }

    /// The user's projects, newest first.
    pub fn list(&self, user_id: &str) -> Result<Vec<Project>, AppError> {
        self.store.projects_for_user(user_id)
    }

    /// Fetch a project, distinguishing a missing project from a foreign one.
    pub fn get(&self, user_id: &str, project_id: &str) -> Result<Project, AppError> {
        let project = self
            .store
            .get_project(project_id)?
            .ok_or_else(|| AppError::ProjectNotFound(project_id.to_string()))?;

        if !project.is_owned_by(user_id) {
            return Err(AppError::AccessDenied(project_id.to_string()));
        }
        Ok(project)
    }

    // Millisecond timestamp, bumped past any id already taken.
    fn next_project_id(&self, now: DateTime<Utc>) -> Result<String, AppError> {
        let mut candidate = now.timestamp_millis();
        while self.store.get_project(&candidate.to_string())?.is_some() {
            candidate += 1;
        }
        Ok(candidate.to_string())
    }
}
