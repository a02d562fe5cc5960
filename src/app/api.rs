//! API facade for the host surface.
//!
//! Framework-free request handlers: each takes a decoded body and returns the
//! status code and JSON payload the HTTP layer should send. Curriculum
//! generation always answers 200, even when the fallback path was taken.

use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::adapters::{HttpLlmClient, JsonFileDocumentStore};
use crate::app::AppContext;
use crate::app::configuration::load_config;
use crate::domain::configuration::api_key_from_env;
use crate::domain::{AppError, Chapter, ChapterId, CurriculumRequest, Project};
use crate::ports::{DocumentStore, LlmClient};

/// Status code and JSON body produced by a handler.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    fn ok<T: Serialize>(payload: &T) -> Self {
        match serde_json::to_value(payload) {
            Ok(body) => Self { status: 200, body },
            Err(err) => Self::from_error(&AppError::from(err)),
        }
    }

    fn from_error(err: &AppError) -> Self {
        Self { status: err.http_status(), body: json!({ "error": err.to_string() }) }
    }

    fn from_result<T: Serialize>(result: Result<T, AppError>) -> Self {
        match result {
            Ok(payload) => Self::ok(&payload),
            Err(err) => Self::from_error(&err),
        }
    }
}

/// `POST /generate-chapters` body.
pub type GenerateChaptersBody = CurriculumRequest;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChaptersPayload {
    pub chapters: Vec<Chapter>,
}

/// `PUT /progress` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressBody {
    pub chapter_id: ChapterId,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessPayload {
    pub success: bool,
}

/// `POST /generate-code` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateCodeBody {
    pub prompt: String,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodePayload {
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectPayload {
    pub success: bool,
    pub project: Project,
}

/// `POST /generate-chapters`: always 200 with `{chapters}`.
pub fn generate_chapters<S: DocumentStore>(
    ctx: &AppContext<S>,
    body: GenerateChaptersBody,
) -> ApiResponse {
    let chapters = ctx.curriculum().generate(&body);
    ApiResponse::ok(&ChaptersPayload { chapters })
}

/// `PUT /projects/:id/progress`: `{success: true}`, or 404 for a missing or foreign project.
pub fn update_progress<S: DocumentStore>(
    ctx: &AppContext<S>,
    user_id: &str,
    project_id: &str,
    body: ProgressBody,
) -> ApiResponse {
    let result = ctx
        .progress()
        .update(user_id, project_id, body.chapter_id, body.completed)
        .map(|_| SuccessPayload { success: true });
    ApiResponse::from_result(result)
}

/// `POST /generate-code`: `{code}`, or 500 when the model is unavailable.
pub fn generate_code<S: DocumentStore>(
    ctx: &AppContext<S>,
    body: GenerateCodeBody,
) -> ApiResponse {
    let result = ctx
        .snippets()
        .generate(&body.prompt, &body.language)
        .map(|code| CodePayload { code });
    ApiResponse::from_result(result)
}

/// `POST /projects`: generate and store a project for the user.
pub fn create_project<S: DocumentStore>(
    ctx: &AppContext<S>,
    user_id: &str,
    body: CurriculumRequest,
) -> ApiResponse {
    let result = ctx
        .projects()
        .create(user_id, body)
        .map(|created| ProjectPayload { success: true, project: created.project });
    ApiResponse::from_result(result)
}

/// `GET /projects`: the user's projects, newest first.
pub fn list_projects<S: DocumentStore>(ctx: &AppContext<S>, user_id: &str) -> ApiResponse {
    ApiResponse::from_result(ctx.projects().list(user_id))
}

/// `GET /projects/:id`: 404 when missing, 403 when owned by someone else.
pub fn get_project<S: DocumentStore>(
    ctx: &AppContext<S>,
    user_id: &str,
    project_id: &str,
) -> ApiResponse {
    ApiResponse::from_result(ctx.projects().get(user_id, project_id))
}

/// Build a context backed by the JSON-file store under `root`.
///
/// The LLM client is only created when `MISTRAL_API_KEY` is set; without it
/// every curriculum request takes the fallback path without a network call.
pub fn open_context(
    config_path: Option<&Path>,
    root: &Path,
) -> Result<AppContext<JsonFileDocumentStore>, AppError> {
    let config = load_config(config_path, root)?;
    let llm: Option<Box<dyn LlmClient>> = match api_key_from_env() {
        Some(key) => Some(Box::new(HttpLlmClient::new(key, &config.llm)?)),
        None => {
            info!("MISTRAL_API_KEY not set; curriculum generation will use the fallback");
            None
        }
    };
    let store = JsonFileDocumentStore::new(config.store.path.clone());
    Ok(AppContext::new(store, llm, config))
}
