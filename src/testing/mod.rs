mod fake_llm_client;
mod fixtures;

pub use fake_llm_client::FakeLlmClient;
pub use fixtures::{chapter_fixture, project_fixture};
