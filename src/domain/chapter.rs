//! Curriculum data model.

use serde::{Deserialize, Serialize};

/// One learning step of a curriculum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub title: String,
    pub description: String,
    pub content: String,
    pub code_example: String,
    pub quiz: Vec<QuizItem>,
    /// Only the progress tracker flips this.
    #[serde(default)]
    pub completed: bool,
}

/// Multiple-choice question attached to a chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizItem {
    pub question: String,
    pub options: Vec<String>,
    /// 0-based index into `options`, as the model sent it. May be out of range.
    pub correct: i64,
}

impl QuizItem {
    /// Index of the correct answer, clamped into `options`.
    ///
    /// Model output is not re-validated, so `correct` may be negative or point
    /// past the end. Returns `None` only when there are no options at all.
    pub fn correct_index(&self) -> Option<usize> {
        let last = self.options.len().checked_sub(1)?;
        Some(usize::try_from(self.correct).map_or(0, |index| index.min(last)))
    }

    /// Text of the correct answer, using the clamped index.
    pub fn correct_option(&self) -> Option<&str> {
        self.correct_index().map(|index| self.options[index].as_str())
    }
}

/// Input to curriculum generation. All fields are free-form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurriculumRequest {
    pub title: String,
    pub description: String,
    pub language: String,
    /// Conventionally beginner, intermediate or advanced; not validated.
    pub difficulty: String,
}

impl CurriculumRequest {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        language: impl Into<String>,
        difficulty: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            language: language.into(),
            difficulty: difficulty.into(),
        }
    }
}
