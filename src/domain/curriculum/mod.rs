//! Curriculum generation building blocks: prompt, extraction, fallback.

pub mod extract;
pub mod fallback;
pub mod prompt;

use crate::domain::{AppError, Chapter};

/// Accept a decoded model curriculum only if it is non-empty and every
/// chapter carries at least one quiz item.
///
/// Quiz answer indices are deliberately left unchecked; readers clamp them
/// through [`crate::domain::QuizItem::correct_option`].
pub fn ensure_usable(chapters: Vec<Chapter>) -> Result<Vec<Chapter>, AppError> {
    if chapters.is_empty() {
        return Err(AppError::EmptyCurriculum);
    }
    if let Some(index) = chapters.iter().position(|chapter| chapter.quiz.is_empty()) {
        return Err(AppError::InvalidChapter { index, reason: "quiz is empty".to_string() });
    }
    Ok(chapters)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_curriculum() {
        assert!(matches!(ensure_usable(vec![]), Err(AppError::EmptyCurriculum)));
    }

    #[test]
    fn rejects_chapter_without_quiz() {
        let mut chapters = fallback::generate("Rust", "t", "beginner");
        chapters.push(chapters[0].clone());
        chapters[1].quiz.clear();

        let err = ensure_usable(chapters).unwrap_err();
        assert!(matches!(err, AppError::InvalidChapter { index: 1, .. }));
    }

    #[test]
    fn accepts_out_of_range_answer_index() {
        let mut chapters = fallback::generate("Rust", "t", "beginner");
        chapters[0].quiz[0].correct = 42;
        assert_eq!(ensure_usable(chapters.clone()).unwrap(), chapters);
    }
}
