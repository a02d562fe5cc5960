use crate::app::services::{CodeSnippetService, CurriculumService, ProgressTracker, ProjectService};
use crate::domain::AppConfig;
use crate::ports::{DocumentStore, LlmClient};

/// Application context holding injected dependencies for request handling.
pub struct AppContext<S: DocumentStore> {
    store: S,
    llm: Option<Box<dyn LlmClient>>,
    config: AppConfig,
}

impl<S: DocumentStore> AppContext<S> {
    /// Create a new application context. `llm` is `None` when no credential is configured.
    pub fn new(store: S, llm: Option<Box<dyn LlmClient>>, config: AppConfig) -> Self {
        Self { store, llm, config }
    }

    /// Get a reference to the document store.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn curriculum(&self) -> CurriculumService<'_> {
        CurriculumService::new(self.llm.as_deref(), &self.config.llm)
    }

    pub fn snippets(&self) -> CodeSnippetService<'_> {
        CodeSnippetService::new(self.llm.as_deref(), &self.config.llm)
    }

    pub fn progress(&self) -> ProgressTracker<'_, S> {
        ProgressTracker::new(&self.store)
    }

    pub fn projects(&self) -> ProjectService<'_, S> {
        ProjectService::new(&self.store, self.curriculum())
    }
}
