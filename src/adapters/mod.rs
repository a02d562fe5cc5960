pub mod json_file_document_store;
pub mod llm_client_http;
pub mod memory_document_store;

pub use json_file_document_store::JsonFileDocumentStore;
pub use llm_client_http::HttpLlmClient;
pub use memory_document_store::MemoryDocumentStore;
