//! Styled document model produced from Markdown

/// Default paragraph font family.
pub const DEFAULT_FONT: &str = "Calibri";

/// Default paragraph font size in points.
pub const DEFAULT_FONT_SIZE_PT: usize = 11;

/// One rendered line of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Empty paragraph separating content
    Spacer,
    /// Heading, level 1 to 3
    Heading { level: u8, text: String },
    /// Paragraph in the bulleted list style
    Bullet(String),
    /// Plain body paragraph
    Paragraph(String),
}

/// A document: default styling plus an ordered list of blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub font: String,
    pub font_size_pt: usize,
    pub blocks: Vec<Block>,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            font: DEFAULT_FONT.to_string(),
            font_size_pt: DEFAULT_FONT_SIZE_PT,
            blocks: Vec::new(),
        }
    }
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
