//! Report generation and the artifacts derived from it
//!
//! A [`ReportSession`] holds at most one rendered report and its converted
//! document. A new generation replaces both wholesale; a failed one clears
//! them so a stale report is never shown next to an error.

use crate::docx;
use crate::llm::{format_request, LlmProvider};
use crate::payload::SessionInputRecord;
use crate::{DiscoveryError, Result};

/// Markdown returned by the model for one generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedReport {
    markdown: String,
}

impl RenderedReport {
    pub fn new(markdown: impl Into<String>) -> Self {
        Self {
            markdown: markdown.into(),
        }
    }

    pub fn markdown(&self) -> &str {
        &self.markdown
    }

    /// Raw UTF-8 bytes for the Markdown download.
    pub fn as_bytes(&self) -> &[u8] {
        self.markdown.as_bytes()
    }
}

/// DOCX bytes derived from a [`RenderedReport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedDocument {
    bytes: Vec<u8>,
}

impl ConvertedDocument {
    pub fn from_report(report: &RenderedReport) -> Result<Self> {
        Ok(Self {
            bytes: docx::markdown_to_docx(report.markdown())?,
        })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Format the request, call the provider once and wrap the answer.
///
/// Every provider failure is reported as [`DiscoveryError::Generation`].
pub async fn generate_report(
    provider: &dyn LlmProvider,
    record: &SessionInputRecord,
) -> Result<RenderedReport> {
    let request = format_request(record)?;

    tracing::info!(client = %record.client_name, "Generating discovery report");

    match provider.generate(&request).await {
        Ok(markdown) => Ok(RenderedReport::new(markdown)),
        Err(e) => {
            let message = format!("{e:#}");
            tracing::warn!(error = %message, "Report generation failed");
            Err(DiscoveryError::Generation(message))
        }
    }
}

/// The current report and document, if any.
#[derive(Debug, Default)]
pub struct ReportSession {
    report: Option<RenderedReport>,
    document: Option<ConvertedDocument>,
}

impl ReportSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&self) -> Option<&RenderedReport> {
        self.report.as_ref()
    }

    pub fn document(&self) -> Option<&ConvertedDocument> {
        self.document.as_ref()
    }

    /// Generate a new report, replacing any previous one.
    ///
    /// On failure both the report and the document are reset.
    pub async fn generate(
        &mut self,
        provider: &dyn LlmProvider,
        record: &SessionInputRecord,
        include_docx: bool,
    ) -> Result<&RenderedReport> {
        let outcome = self.produce(provider, record, include_docx).await;

        match outcome {
            Ok((report, document)) => {
                self.document = document;
                Ok(&*self.report.insert(report))
            }
            Err(e) => {
                self.clear();
                Err(e)
            }
        }
    }

    /// Discard the report and document.
    pub fn clear(&mut self) {
        self.report = None;
        self.document = None;
    }

    async fn produce(
        &self,
        provider: &dyn LlmProvider,
        record: &SessionInputRecord,
        include_docx: bool,
    ) -> Result<(RenderedReport, Option<ConvertedDocument>)> {
        let report = generate_report(provider, record).await?;
        let document = if include_docx {
            Some(ConvertedDocument::from_report(&report)?)
        } else {
            None
        };
        Ok((report, document))
    }
}
