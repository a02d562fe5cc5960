//! learnpath: generate step-by-step coding curricula with an LLM, falling back
//! to a deterministic curriculum, and track chapter progress per project.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

pub use adapters::{HttpLlmClient, JsonFileDocumentStore, MemoryDocumentStore};
pub use app::AppContext;
pub use app::services::{
    CodeSnippetService, CreatedProject, CurriculumService, CurriculumSource, GenerationOutcome,
    ProgressTracker, ProjectService,
};
pub use domain::{
    AppConfig, AppError, Chapter, ChapterId, CurriculumRequest, ExtractionError, LlmApiConfig,
    Progress, Project, QuizItem, UserProfile,
};
pub use ports::{CompletionRequest, DocumentStore, LlmClient};

/// Generate a curriculum using the configuration and credential found for `root`.
///
/// Never fails on the model path: a missing credential, transport error or
/// malformed response yields the fallback curriculum.
pub fn generate_chapters(
    request: &CurriculumRequest,
    root: &Path,
) -> Result<Vec<Chapter>, AppError> {
    let ctx = app::api::open_context(None, root)?;
    Ok(ctx.curriculum().generate(request))
}

/// Build the fallback curriculum for a request without touching the network.
pub fn fallback_chapters(request: &CurriculumRequest) -> Vec<Chapter> {
    domain::curriculum::fallback::generate(&request.language, &request.title, &request.difficulty)
}

/// Locate and decode the chapter array embedded in raw model output.
pub fn extract_chapters(raw: &str) -> Result<Vec<Chapter>, ExtractionError> {
    domain::curriculum::extract::extract(raw)
}

/// Build the curriculum instruction sent to the model.
pub fn build_prompt(request: &CurriculumRequest) -> Result<String, AppError> {
    domain::curriculum::prompt::build(request)
}
