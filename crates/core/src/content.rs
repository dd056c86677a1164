//! Content Block Types
//!
//! Mirrors the model provider's message content blocks: a tool result is either
//! plain text or an ordered list of text and image blocks.

use serde::{Deserialize, Serialize};

/// Source payload of an image block. Only base64 inline data is produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSource {
    /// Encoding of `data`, always `"base64"`
    #[serde(rename = "type")]
    pub source_type: String,
    /// MIME type parsed from the data URL (e.g. `image/png`)
    pub media_type: String,
    /// Base64 payload without the data URL prefix
    pub data: String,
}

impl ImageSource {
    /// Create a base64 image source.
    pub fn base64(media_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            source_type: "base64".to_string(),
            media_type: media_type.into(),
            data: data.into(),
        }
    }
}

/// A single content block sent back to the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Plain text
    Text { text: String },
    /// Inline image
    Image { source: ImageSource },
}

impl ContentBlock {
    /// Create a text block
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Create a base64 image block
    pub fn image(media_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self::Image {
            source: ImageSource::base64(media_type, data),
        }
    }

    /// Text content if this is a text block
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentBlock::Text { text } => Some(text),
            ContentBlock::Image { .. } => None,
        }
    }
}

/// Result of framing a tool response: bare text when there are no images,
/// otherwise text followed by image blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToolResponse {
    Text(String),
    Blocks(Vec<ContentBlock>),
}

impl ToolResponse {
    /// Whether the response is plain text.
    pub fn is_text(&self) -> bool {
        matches!(self, ToolResponse::Text(_))
    }

    /// Leading text of the response.
    pub fn text(&self) -> Option<&str> {
        match self {
            ToolResponse::Text(text) => Some(text),
            ToolResponse::Blocks(blocks) => blocks.first().and_then(ContentBlock::as_text),
        }
    }
}
