//! DOCX serialization of the document model

use std::io::Cursor;

use docx_rs::{
    AbstractNumbering, Docx, IndentLevel, Level, LevelJc, LevelText, NumberFormat, Numbering,
    NumberingId, Paragraph, Run, RunFonts, SpecialIndentType, Start, Style, StyleType,
};

use crate::docx::model::{Block, Document};
use crate::{DiscoveryError, Result};

/// MIME type of the DOCX export.
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// MIME type of the Markdown export.
pub const MARKDOWN_MIME: &str = "text/markdown";

const BULLET_NUMBERING_ID: usize = 1;
const LIST_BULLET_STYLE: &str = "ListBullet";

/// (style id, display name, size in half-points)
const HEADING_STYLES: [(&str, &str, usize); 3] = [
    ("Heading1", "heading 1", 32),
    ("Heading2", "heading 2", 26),
    ("Heading3", "heading 3", 24),
];

/// Serialize a document to DOCX bytes.
pub fn to_docx_bytes(doc: &Document) -> Result<Vec<u8>> {
    let mut docx = base_document(doc);

    for block in &doc.blocks {
        docx = docx.add_paragraph(paragraph_for(block));
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| DiscoveryError::Document(format!("Failed to pack DOCX: {e}")))?;

    Ok(buf.into_inner())
}

fn base_document(doc: &Document) -> Docx {
    let fonts = RunFonts::new()
        .ascii(&doc.font)
        .hi_ansi(&doc.font)
        .east_asia(&doc.font)
        .cs(&doc.font);

    let mut docx = Docx::new()
        .default_fonts(fonts)
        .default_size(doc.font_size_pt * 2)
        .add_style(
            Style::new(LIST_BULLET_STYLE, StyleType::Paragraph).name("List Bullet"),
        )
        .add_abstract_numbering(
            AbstractNumbering::new(BULLET_NUMBERING_ID).add_level(
                Level::new(
                    0,
                    Start::new(1),
                    NumberFormat::new("bullet"),
                    LevelText::new("•"),
                    LevelJc::new("left"),
                )
                .indent(Some(720), Some(SpecialIndentType::Hanging(360)), None, None),
            ),
        )
        .add_numbering(Numbering::new(BULLET_NUMBERING_ID, BULLET_NUMBERING_ID));

    for (id, name, size) in HEADING_STYLES {
        docx = docx.add_style(
            Style::new(id, StyleType::Paragraph)
                .name(name)
                .size(size)
                .bold()
                .color("2F5496"),
        );
    }

    docx
}

fn paragraph_for(block: &Block) -> Paragraph {
    match block {
        Block::Spacer => Paragraph::new(),
        Block::Heading { level, text } => {
            let (style, _, _) = HEADING_STYLES[usize::from((*level).clamp(1, 3)) - 1];
            Paragraph::new()
                .add_run(Run::new().add_text(text))
                .style(style)
        }
        Block::Bullet(text) => Paragraph::new()
            .add_run(Run::new().add_text(text))
            .style(LIST_BULLET_STYLE)
            .numbering(NumberingId::new(BULLET_NUMBERING_ID), IndentLevel::new(0)),
        Block::Paragraph(text) => Paragraph::new().add_run(Run::new().add_text(text)),
    }
}
