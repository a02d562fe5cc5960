pub mod chapter;
pub mod configuration;
pub mod curriculum;
pub mod error;
pub mod project;
pub mod snippet;

pub use chapter::{Chapter, CurriculumRequest, QuizItem};
pub use configuration::{AppConfig, LlmApiConfig, StoreConfig};
pub use error::{AppError, ExtractionError};
pub use project::{ChapterId, POINTS_PER_CHAPTER, Progress, Project, UserDelta, UserProfile};
