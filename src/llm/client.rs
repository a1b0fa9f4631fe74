use anyhow::Result;
use async_trait::async_trait;

use crate::config::Settings;
use crate::llm::openai::OpenAiClient;
use crate::DiscoveryError;

/// System instructions and user prompt for one report generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    pub system_instructions: String,
    pub user_prompt: String,
}

#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send the request and return the model's Markdown answer.
    async fn generate(&self, request: &ReportRequest) -> Result<String>;
}

/// Build an LLM provider from runtime settings.
pub fn build_provider(settings: &Settings) -> crate::Result<Box<dyn LlmProvider>> {
    match settings.llm.provider.to_lowercase().as_str() {
        "openai" => Ok(Box::new(OpenAiClient::from_settings(settings)?)),
        other => Err(DiscoveryError::Config(format!(
            "Unsupported llm.provider '{}'. Supported providers: openai",
            other
        ))),
    }
}
