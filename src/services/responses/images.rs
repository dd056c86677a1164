//! Image Blocks
//!
//! Converts `data:` URLs captured by the host (screenshots, pasted images)
//! into model content blocks.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use prompt_modes_core::{ContentBlock, ToolResponse};

use crate::utils::error::{AppError, AppResult};

/// Split `data:<mime>;base64,<payload>` into its media type and payload.
fn parse_data_url(data_url: &str) -> AppResult<(&str, &str)> {
    let rest = data_url
        .strip_prefix("data:")
        .ok_or_else(|| AppError::invalid_image("missing data: prefix"))?;
    let (media_type, payload) = rest
        .split_once(";base64,")
        .ok_or_else(|| AppError::invalid_image("missing ;base64, marker"))?;

    if media_type.is_empty() {
        return Err(AppError::invalid_image("empty media type"));
    }
    BASE64
        .decode(payload)
        .map_err(|e| AppError::invalid_image(format!("bad base64 payload: {}", e)))?;

    Ok((media_type, payload))
}

/// One image block per data URL, in input order.
pub fn image_blocks(images: &[String]) -> AppResult<Vec<ContentBlock>> {
    images
        .iter()
        .map(|url| {
            let (media_type, data) = parse_data_url(url)?;
            Ok(ContentBlock::image(media_type, data))
        })
        .collect()
}

/// Tool output for the model: plain text when there are no images,
/// otherwise the text block followed by the image blocks.
pub fn tool_result(text: &str, images: &[String]) -> AppResult<ToolResponse> {
    if images.is_empty() {
        return Ok(ToolResponse::Text(text.to_string()));
    }

    let mut blocks = Vec::with_capacity(images.len() + 1);
    blocks.push(ContentBlock::text(text));
    blocks.extend(image_blocks(images)?);
    Ok(ToolResponse::Blocks(blocks))
}
