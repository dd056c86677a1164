//! Responses
//!
//! Text and content blocks returned to the model after tool calls: fixed
//! templates, image framing, directory listings, and diff previews.

pub mod files_list;
pub mod images;
pub mod patch;
pub mod templates;

pub use files_list::format_files_list;
pub use images::{image_blocks, tool_result};
pub use patch::create_pretty_patch;
pub use templates::{Locale, ResponseFormatter};
