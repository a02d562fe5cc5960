use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::{CompletionRequest, LlmClient};

#[derive(Debug, Clone)]
enum Reply {
    Text(String),
    Status(u16),
    Timeout,
    Internal,
}

/// Scripted LLM client that records every request it receives.
#[derive(Debug, Clone)]
pub struct FakeLlmClient {
    reply: Reply,
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl FakeLlmClient {
    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_reply(Reply::Text(text.into()))
    }

    pub fn failing_with_status(status: u16) -> Self {
        Self::with_reply(Reply::Status(status))
    }

    pub fn timing_out() -> Self {
        Self::with_reply(Reply::Timeout)
    }

    /// Fails with an error outside the generation path.
    pub fn broken() -> Self {
        Self::with_reply(Reply::Internal)
    }

    fn with_reply(reply: Reply) -> Self {
        Self { reply, requests: Arc::new(Mutex::new(vec![])) }
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl LlmClient for FakeLlmClient {
    fn complete(&self, request: CompletionRequest) -> Result<String, AppError> {
        self.requests.lock().unwrap().push(request);
        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Status(status) => Err(AppError::transport("API error", Some(*status))),
            Reply::Timeout => Err(AppError::transport("request timed out", None)),
            Reply::Internal => Err(AppError::Internal("client state corrupted".into())),
        }
    }
}
