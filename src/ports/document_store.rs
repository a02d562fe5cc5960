//! Document store port: the external database holding projects and user aggregates.

use crate::domain::{AppError, Project, UserDelta, UserProfile};

/// Keyed document access over the `projects` and `users` collections.
pub trait DocumentStore {
    /// Fetch a project by id.
    fn get_project(&self, id: &str) -> Result<Option<Project>, AppError>;

    /// Create or replace a project.
    fn set_project(&self, project: &Project) -> Result<(), AppError>;

    /// Replace an existing project; fails with `ProjectNotFound` if absent.
    fn update_project(&self, project: &Project) -> Result<(), AppError>;

    /// Projects whose owner equals `user_id`, newest `created_at` first.
    fn projects_for_user(&self, user_id: &str) -> Result<Vec<Project>, AppError>;

    /// Fetch a user profile by id.
    fn get_user(&self, id: &str) -> Result<Option<UserProfile>, AppError>;

    /// Merge an additive change into a user profile, creating it if absent.
    fn apply_user_delta(&self, user_id: &str, delta: &UserDelta) -> Result<UserProfile, AppError>;
}
