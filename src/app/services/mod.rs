pub mod curriculum;
pub mod progress;
pub mod projects;
pub mod snippet;

pub use curriculum::{CurriculumService, CurriculumSource, GenerationOutcome};
pub use progress::ProgressTracker;
pub use projects::{CreatedProject, ProjectService};
pub use snippet::CodeSnippetService;
