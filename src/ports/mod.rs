mod document_store;
mod llm_client;

pub use document_store::DocumentStore;
pub use llm_client::{CompletionRequest, LlmClient};
