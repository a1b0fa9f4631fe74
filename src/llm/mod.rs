//! LLM module for discovery
//!
//! Builds the report prompt and sends it to the configured model provider.

mod client;
mod openai;
mod prompts;

pub use client::{build_provider, LlmProvider, ReportRequest};
pub use openai::OpenAiClient;
pub use prompts::{format_request, DISCOVERY_SYSTEM};
