use chrono::{DateTime, Utc};

use crate::domain::{Chapter, CurriculumRequest, Project, QuizItem};

pub fn chapter_fixture(title: &str) -> Chapter {
    Chapter {
        title: title.to_string(),
        description: format!("About {}", title),
        content: "Step by step.".to_string(),
        code_example: "console.log(1);".to_string(),
        quiz: vec![QuizItem {
            question: "Which one?".to_string(),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct: 2,
        }],
        completed: false,
    }
}

pub fn project_fixture(id: &str, user_id: &str, created_at: DateTime<Utc>) -> Project {
    let request = CurriculumRequest::new("Todo App", "A simple todo list", "JavaScript", "beginner");
    let chapters = vec![chapter_fixture("Setup"), chapter_fixture("State"), chapter_fixture("UI")];
    Project::new(id, user_id, request, chapters, created_at)
}
