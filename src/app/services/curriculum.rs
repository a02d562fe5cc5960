//! Curriculum generation with model-first, fallback-always semantics.

use log::{debug, error, info, warn};

use crate::domain::curriculum::{ensure_usable, extract, fallback, prompt};
use crate::domain::{AppError, Chapter, CurriculumRequest, LlmApiConfig};
use crate::ports::{CompletionRequest, LlmClient};

/// Where a returned curriculum came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurriculumSource {
    /// Decoded from model output.
    Llm,
    /// Produced by the fallback generator; `cause` is the absorbed failure.
    Fallback { cause: String },
}

/// Result of a generation call, with the path taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOutcome {
    pub chapters: Vec<Chapter>,
    pub source: CurriculumSource,
}

impl GenerationOutcome {
    pub fn is_fallback(&self) -> bool {
        matches!(self.source, CurriculumSource::Fallback { .. })
    }
}

/// Orchestrates prompt → model → extraction, substituting the fallback
/// curriculum on any failure.
pub struct CurriculumService<'a> {
    client: Option<&'a dyn LlmClient>,
    settings: &'a LlmApiConfig,
}

impl<'a> CurriculumService<'a> {
    /// `client` is `None` when no credential is configured.
    pub fn new(client: Option<&'a dyn LlmClient>, settings: &'a LlmApiConfig) -> Self {
        Self { client, settings }
    }

    /// Generate a curriculum. Always returns at least one chapter.
    pub fn generate(&self, request: &CurriculumRequest) -> Vec<Chapter> {
        self.generate_with_outcome(request).chapters
    }

    /// Generate a curriculum and report which path produced it.
    pub fn generate_with_outcome(&self, request: &CurriculumRequest) -> GenerationOutcome {
        let Some(client) = self.client else {
            let cause = AppError::config_error("LLM credential not configured");
            return self.fallback(request, cause);
        };

        match self.generate_with_model(client, request) {
            Ok(chapters) => {
                info!("Generated {} chapters for '{}' via LLM", chapters.len(), request.title);
                GenerationOutcome { chapters, source: CurriculumSource::Llm }
            }
            Err(err) => self.fallback(request, err),
        }
    }

    fn generate_with_model(
        &self,
        client: &dyn LlmClient,
        request: &CurriculumRequest,
    ) -> Result<Vec<Chapter>, AppError> {
        let prompt = prompt::build(request)?;
        debug!("Curriculum prompt: {} chars", prompt.len());

        let raw = client.complete(CompletionRequest {
            prompt,
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        })?;
        debug!("LLM response: {} chars", raw.len());

        let chapters = extract::extract(&raw)?;
        ensure_usable(chapters)
    }

    fn fallback(&self, request: &CurriculumRequest, cause: AppError) -> GenerationOutcome {
        match &cause {
            AppError::Configuration(_) => {
                info!("Using fallback curriculum for '{}': {}", request.title, cause)
            }
            err if err.is_generation_failure() => {
                warn!("AI error, returning fallback curriculum for '{}': {}", request.title, err)
            }
            err => {
                error!("Unexpected error, returning fallback curriculum for '{}': {}", request.title, err)
            }
        }
        GenerationOutcome {
            chapters: fallback::generate(&request.language, &request.title, &request.difficulty),
            source: CurriculumSource::Fallback { cause: cause.to_string() },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeLlmClient, chapter_fixture};

    fn todo_request() -> CurriculumRequest {
        CurriculumRequest::new("Todo App", "A simple todo list", "JavaScript", "beginner")
    }

    fn expected_fallback() -> Vec<Chapter> {
        fallback::generate("JavaScript", "Todo App", "beginner")
    }

    #[test]
    fn unconfigured_client_returns_fallback_without_call() {
        let settings = LlmApiConfig::default();
        let service = CurriculumService::new(None, &settings);

        let outcome = service.generate_with_outcome(&todo_request());

        assert_eq!(outcome.chapters, expected_fallback());
        assert!(outcome.is_fallback());
        let chapter = &outcome.chapters[0];
        assert_eq!(chapter.title, "Introduction");
        assert!(chapter.content.contains("JavaScript"));
        assert_eq!(chapter.quiz[0].options.len(), 4);
        assert_eq!(chapter.quiz[0].correct, 3);
    }

    #[test]
    fn model_output_wrapped_in_prose_is_returned_unchanged() {
        let chapters = vec![chapter_fixture("Project Setup")];
        let raw = format!(
            "Sure! Here you go:\n```json\n{}\n```",
            serde_json::to_string_pretty(&chapters).unwrap()
        );
        let client = FakeLlmClient::replying(raw);
        let settings = LlmApiConfig::default();
        let service = CurriculumService::new(Some(&client), &settings);

        let outcome = service.generate_with_outcome(&todo_request());

        assert_eq!(outcome.source, CurriculumSource::Llm);
        assert_eq!(outcome.chapters, chapters);
    }

    #[test]
    fn sends_one_request_with_configured_budget() {
        let client = FakeLlmClient::replying("no array here");
        let settings = LlmApiConfig { max_tokens: 1234, temperature: 0.3, ..Default::default() };
        let service = CurriculumService::new(Some(&client), &settings);

        service.generate(&todo_request());

        let requests = client.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].max_tokens, 1234);
        assert_eq!(requests[0].temperature, 0.3);
        assert!(requests[0].prompt.contains("Project Title: Todo App"));
    }

    #[test]
    fn transport_failure_falls_back() {
        let client = FakeLlmClient::failing_with_status(500);
        let settings = LlmApiConfig::default();
        let service = CurriculumService::new(Some(&client), &settings);

        let outcome = service.generate_with_outcome(&todo_request());

        assert_eq!(outcome.chapters, expected_fallback());
        assert!(matches!(outcome.source, CurriculumSource::Fallback { cause } if cause.contains("500")));
    }

    #[test]
    fn timeout_falls_back() {
        let client = FakeLlmClient::timing_out();
        let settings = LlmApiConfig::default();
        let service = CurriculumService::new(Some(&client), &settings);

        assert_eq!(service.generate(&todo_request()), expected_fallback());
    }

    #[test]
    fn unexpected_client_error_still_falls_back() {
        let client = FakeLlmClient::broken();
        let settings = LlmApiConfig::default();
        let service = CurriculumService::new(Some(&client), &settings);

        let outcome = service.generate_with_outcome(&todo_request());

        assert_eq!(outcome.chapters, expected_fallback());
        assert!(
            matches!(outcome.source, CurriculumSource::Fallback { cause } if cause.contains("corrupted"))
        );
    }

    #[test]
    fn malformed_payload_falls_back() {
        let client = FakeLlmClient::replying("Here: [not valid json]");
        let settings = LlmApiConfig::default();
        let service = CurriculumService::new(Some(&client), &settings);

        assert_eq!(service.generate(&todo_request()), expected_fallback());
    }

    #[test]
    fn missing_payload_falls_back() {
        let client = FakeLlmClient::replying("I'd rather not.");
        let settings = LlmApiConfig::default();
        let service = CurriculumService::new(Some(&client), &settings);

        assert_eq!(service.generate(&todo_request()), expected_fallback());
    }

    #[test]
    fn empty_array_falls_back() {
        let client = FakeLlmClient::replying("[]");
        let settings = LlmApiConfig::default();
        let service = CurriculumService::new(Some(&client), &settings);

        let outcome = service.generate_with_outcome(&todo_request());
        assert!(outcome.is_fallback());
        assert_eq!(outcome.chapters.len(), 1);
    }

    #[test]
    fn chapter_without_quiz_falls_back() {
        let mut chapter = chapter_fixture("Setup");
        chapter.quiz.clear();
        let client = FakeLlmClient::replying(serde_json::to_string(&vec![chapter]).unwrap());
        let settings = LlmApiConfig::default();
        let service = CurriculumService::new(Some(&client), &settings);

        assert_eq!(service.generate(&todo_request()), expected_fallback());
    }

    #[test]
    fn negative_answer_index_is_kept() {
        let mut chapter = chapter_fixture("Setup");
        chapter.quiz[0].correct = -1;
        let client = FakeLlmClient::replying(serde_json::to_string(&vec![chapter.clone()]).unwrap());
        let settings = LlmApiConfig::default();
        let service = CurriculumService::new(Some(&client), &settings);

        let outcome = service.generate_with_outcome(&todo_request());

        assert_eq!(outcome.source, CurriculumSource::Llm);
        assert_eq!(outcome.chapters, vec![chapter]);
        assert_eq!(outcome.chapters[0].quiz[0].correct_index(), Some(0));
    }

    #[test]
    fn always_returns_at_least_one_chapter() {
        let settings = LlmApiConfig::default();
        let replies = ["", "[", "]", "[{}]", "[[]]", "null"];
        for reply in replies {
            let client = FakeLlmClient::replying(reply);
            let service = CurriculumService::new(Some(&client), &settings);
            assert!(!service.generate(&todo_request()).is_empty(), "reply {:?}", reply);
        }
    }
}
