//! Chapter completion tracking and point awards.

use chrono::Utc;
use log::{debug, info};

use crate::domain::{AppError, ChapterId, Project, UserDelta};
use crate::ports::DocumentStore;

/// Applies completion events to projects and user aggregates.
pub struct ProgressTracker<'a, S: DocumentStore> {
    store: &'a S,
}

impl<'a, S: DocumentStore> ProgressTracker<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Mark `chapter_id` complete on a project owned by `user_id`.
    ///
    /// Idempotent: a chapter already recorded leaves the project and the
    /// user's counters untouched. A missing or foreign project yields
    /// `ProjectNotFound` before anything is written.
    pub fn mark_complete(
        &self,
        user_id: &str,
        project_id: &str,
        chapter_id: ChapterId,
    ) -> Result<Project, AppError> {
        let mut project = self.owned_project(user_id, project_id)?;

        if !project.progress.record(chapter_id) {
            debug!("Chapter {} of project {} already completed", chapter_id, project_id);
            return Ok(project);
        }

        if let Some(chapter) = usize::try_from(chapter_id)
            .ok()
            .and_then(|id| id.checked_sub(1))
            .and_then(|index| project.chapters.get_mut(index))
        {
            chapter.completed = true;
        }
        project.updated_at = Utc::now();

        // Points before the project write: a failed write may over-award on retry,
        // never under-award.
        let profile = self.store.apply_user_delta(user_id, &UserDelta::chapter_completed())?;
        self.store.update_project(&project)?;
        info!(
            "User {} completed chapter {} of project {} ({} points total)",
            user_id, chapter_id, project_id, profile.total_points
        );

        Ok(project)
    }

    /// Progress update as received from the host surface.
    ///
    /// `completed == false` only verifies ownership; completions are never
    /// withdrawn.
    pub fn update(
        &self,
        user_id: &str,
        project_id: &str,
        chapter_id: ChapterId,
        completed: bool,
    ) -> Result<Project, AppError> {
        if completed {
            self.mark_complete(user_id, project_id, chapter_id)
        } else {
            self.owned_project(user_id, project_id)
        }
    }

    fn owned_project(&self, user_id: &str, project_id: &str) -> Result<Project, AppError> {
        match self.store.get_project(project_id)? {
            Some(project) if project.is_owned_by(user_id) => Ok(project),
            _ => Err(AppError::ProjectNotFound(project_id.to_string())),
        }
    }
}
