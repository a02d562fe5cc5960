//! Store records: projects and user aggregates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::chapter::{Chapter, CurriculumRequest};

/// 1-based chapter number within a project's curriculum.
pub type ChapterId = u32;

/// Points granted for each newly completed chapter.
pub const POINTS_PER_CHAPTER: u64 = 10;

/// A user's project with its generated curriculum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub language: String,
    pub difficulty: String,
    pub chapters: Vec<Chapter>,
    pub progress: Progress,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Build a fresh project record around a generated curriculum.
    ///
    /// Every chapter starts incomplete, whatever the model sent.
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        request: CurriculumRequest,
        mut chapters: Vec<Chapter>,
        now: DateTime<Utc>,
    ) -> Self {
        for chapter in &mut chapters {
            chapter.completed = false;
        }
        let progress = Progress::new(chapters.len());
        Self {
            id: id.into(),
            user_id: user_id.into(),
            title: request.title,
            description: request.description,
            language: request.language,
            difficulty: request.difficulty,
            chapters,
            progress,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }
}

/// Chapter-completion state of a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    /// Never decreases.
    pub current_chapter: ChapterId,
    /// Insertion-ordered, unique.
    #[serde(default)]
    pub completed_chapters: Vec<ChapterId>,
    pub total_chapters: u32,
}

impl Progress {
    pub fn new(total_chapters: usize) -> Self {
        Self {
            current_chapter: 1,
            completed_chapters: Vec::new(),
            total_chapters: u32::try_from(total_chapters).unwrap_or(u32::MAX),
        }
    }

    pub fn is_completed(&self, chapter_id: ChapterId) -> bool {
        self.completed_chapters.contains(&chapter_id)
    }

    /// Record a completion. Returns `false` if it was already recorded.
    pub fn record(&mut self, chapter_id: ChapterId) -> bool {
        if self.is_completed(chapter_id) {
            return false;
        }
        self.completed_chapters.push(chapter_id);
        let highest = self.completed_chapters.iter().copied().max().unwrap_or(chapter_id);
        self.current_chapter = self.current_chapter.max(highest);
        true
    }
}

/// Aggregate counters for a user across all projects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    #[serde(default)]
    pub projects: Vec<String>,
    #[serde(default)]
    pub completed_chapters: u64,
    #[serde(default)]
    pub total_points: u64,
}

impl UserProfile {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), ..Self::default() }
    }

    /// Merge an additive change into this profile.
    pub fn apply(&mut self, delta: &UserDelta) {
        self.completed_chapters = self.completed_chapters.saturating_add(delta.completed_chapters);
        self.total_points = self.total_points.saturating_add(delta.total_points);
        if let Some(project_id) = &delta.add_project
            && !self.projects.contains(project_id)
        {
            self.projects.push(project_id.clone());
        }
    }
}

/// Additive update to a [`UserProfile`]; counters are never overwritten.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDelta {
    pub completed_chapters: u64,
    pub total_points: u64,
    pub add_project: Option<String>,
}

impl UserDelta {
    pub fn chapter_completed() -> Self {
        Self { completed_chapters: 1, total_points: POINTS_PER_CHAPTER, add_project: None }
    }

    pub fn project_added(project_id: impl Into<String>) -> Self {
        Self { add_project: Some(project_id.into()), ..Self::default() }
    }
}
