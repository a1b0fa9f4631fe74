//! Markdown to DOCX conversion
//!
//! [`convert`] classifies report lines into a [`Document`];
//! [`to_docx_bytes`] packs that document into an Office Open XML file.

mod convert;
mod model;
mod writer;

pub use convert::convert;
pub use model::{Block, Document, DEFAULT_FONT, DEFAULT_FONT_SIZE_PT};
pub use writer::{to_docx_bytes, DOCX_MIME, MARKDOWN_MIME};

/// Convert report Markdown straight to DOCX bytes.
pub fn markdown_to_docx(markdown: &str) -> crate::Result<Vec<u8>> {
    to_docx_bytes(&convert(markdown))
}
