//! Strapi rich-text blocks.
//!
//! Article bodies arrive as a tree of typed blocks. The UI renders them, and
//! the helpers here extract plain text for reading time and summaries.

use serde::{Deserialize, Serialize};

/// Paragraph text that is replaced by the promotional banner.
pub const BANNER_MARKER: &str = "<JUMPER_BANNER>";

/// Reading speed used for the "min read" estimate.
const WORDS_PER_MINUTE: usize = 200;

/// A top-level content block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Block {
    Paragraph {
        #[serde(default)]
        children: Vec<InlineNode>,
    },
    Heading {
        level: u8,
        #[serde(default)]
        children: Vec<InlineNode>,
    },
    List {
        #[serde(default)]
        format: ListFormat,
        #[serde(default)]
        children: Vec<ListItem>,
    },
    Quote {
        #[serde(default)]
        children: Vec<InlineNode>,
    },
    Code {
        #[serde(default)]
        children: Vec<InlineNode>,
    },
    Image {
        image: BlockImage,
    },
    /// Block types this renderer does not know about.
    #[serde(other)]
    Unknown,
}

/// Ordered or bulleted list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListFormat {
    Ordered,
    #[default]
    Unordered,
}

/// A single list entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListItem {
    #[serde(default)]
    pub children: Vec<InlineNode>,
}

/// Image embedded in the article body.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockImage {
    pub url: String,
    #[serde(default)]
    pub alternative_text: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

/// Inline content inside a block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum InlineNode {
    Text {
        text: String,
        #[serde(default)]
        bold: bool,
        #[serde(default)]
        italic: bool,
        #[serde(default)]
        underline: bool,
        #[serde(default)]
        strikethrough: bool,
        #[serde(default)]
        code: bool,
    },
    Link {
        url: String,
        #[serde(default)]
        children: Vec<InlineNode>,
    },
}

impl InlineNode {
    /// Plain text node without formatting.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            bold: false,
            italic: false,
            underline: false,
            strikethrough: false,
            code: false,
        }
    }

    /// Append the node's text to `out`.
    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text { text, .. } => out.push_str(text),
            Self::Link { children, .. } => children.iter().for_each(|c| c.collect_text(out)),
        }
    }
}

fn inline_text(nodes: &[InlineNode]) -> String {
    let mut out = String::new();
    nodes.iter().for_each(|n| n.collect_text(&mut out));
    out
}

impl Block {
    /// Text content of the block, without markup.
    pub fn plain_text(&self) -> String {
        match self {
            Self::Paragraph { children }
            | Self::Heading { children, .. }
            | Self::Quote { children }
            | Self::Code { children } => inline_text(children),
            Self::List { children, .. } => children
                .iter()
                .map(|item| inline_text(&item.children))
                .collect::<Vec<_>>()
                .join("\n"),
            Self::Image { image } => image.alternative_text.clone().unwrap_or_default(),
            Self::Unknown => String::new(),
        }
    }

    /// Whether this paragraph is the banner placeholder.
    pub fn is_banner(&self) -> bool {
        matches!(self, Self::Paragraph { children } if inline_text(children).contains(BANNER_MARKER))
    }
}

/// Plain text of a whole article body, one block per line.
pub fn plain_text(blocks: &[Block]) -> String {
    blocks
        .iter()
        .filter(|b| !b.is_banner())
        .map(Block::plain_text)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Word count of an article body.
pub fn word_count(blocks: &[Block]) -> usize {
    plain_text(blocks).split_whitespace().count()
}

/// Estimated reading time in minutes, at least one.
pub fn reading_time(blocks: &[Block]) -> u32 {
    let minutes = word_count(blocks) / WORDS_PER_MINUTE;
    u32::try_from(minutes).unwrap_or(u32::MAX).max(1)
}
