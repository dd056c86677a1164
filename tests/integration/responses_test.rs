//! Response Formatter Integration Tests
//!
//! Verifies the model-facing output helpers through the public API:
//! - Tool result framing with images
//! - Directory listings with ignore and protection markers
//! - Pretty patches
//! - Localized templates

use std::path::Path;

use prompt_modes::{
    create_pretty_patch, format_files_list, image_blocks, tool_result, AppError, ContentBlock,
    IgnoreChecker, Locale, ProtectionChecker, ResponseFormatter, ToolResponse,
};
use prompt_modes_core::{LOCK_TEXT_SYMBOL, SHIELD_TEXT_SYMBOL};

struct IgnoreDir(&'static str);

impl IgnoreChecker for IgnoreDir {
    fn validate_access(&self, absolute_path: &Path) -> bool {
        !absolute_path.starts_with(self.0)
    }
}

struct ProtectExtension(&'static str);

impl ProtectionChecker for ProtectExtension {
    fn is_write_protected(&self, absolute_path: &Path) -> bool {
        absolute_path
            .extension()
            .map(|ext| ext == self.0)
            .unwrap_or(false)
    }
}

fn files(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ============================================================================
// Tool Result Tests
// ============================================================================

#[test]
fn test_tool_result_text_only() {
    let result = tool_result("hello", &[]).unwrap();
    assert!(result.is_text());
    assert_eq!(result.text(), Some("hello"));
}

#[test]
fn test_tool_result_with_png() {
    let result = tool_result("screenshot", &files(&["data:image/png;base64,iVBORw0KGgo="])).unwrap();
    let ToolResponse::Blocks(blocks) = result else {
        panic!("expected content blocks");
    };
    assert_eq!(blocks.len(), 2);
    match &blocks[1] {
        ContentBlock::Image { source } => {
            assert_eq!(source.source_type, "base64");
            assert_eq!(source.media_type, "image/png");
            assert_eq!(source.data, "iVBORw0KGgo=");
        }
        other => panic!("expected image block, got {:?}", other),
    }

    let wire = serde_json::to_value(&blocks).unwrap();
    assert_eq!(wire[0]["type"], "text");
    assert_eq!(wire[1]["type"], "image");
    assert_eq!(wire[1]["source"]["media_type"], "image/png");
}

#[test]
fn test_image_blocks_reject_malformed() {
    let err = image_blocks(&files(&["https://example.com/a.png"])).unwrap_err();
    assert!(matches!(err, AppError::InvalidImage(_)));
}

// ============================================================================
// File Listing Tests
// ============================================================================

#[test]
fn test_listing_groups_children_under_directories() {
    let listing = format_files_list(
        Path::new("/root"),
        &files(&["/root/sub/b.txt", "/root/sub/", "/root/a.txt"]),
        false,
        None,
        false,
        None,
    );
    assert_eq!(listing, "a.txt\nsub/\nsub/b.txt");
}

#[test]
fn test_listing_markers_and_truncation() {
    let ignore = IgnoreDir("/root/build");
    let protect = ProtectExtension("lock");
    let listing = format_files_list(
        Path::new("/root"),
        &files(&["/root/build/", "/root/build/out.bin", "/root/Cargo.lock", "/root/src/"]),
        true,
        Some(&ignore),
        true,
        Some(&protect),
    );

    let lines: Vec<&str> = listing.lines().collect();
    assert_eq!(lines[0], format!("{} Cargo.lock", SHIELD_TEXT_SYMBOL));
    assert_eq!(lines[1], format!("{} build/", LOCK_TEXT_SYMBOL));
    assert_eq!(lines[2], format!("{} build/out.bin", LOCK_TEXT_SYMBOL));
    assert_eq!(lines[3], "src/");
    assert!(listing.ends_with(
        "\n\n(File list truncated. Use list_files on specific subdirectories if you need to explore further.)"
    ));
}

#[test]
fn test_listing_all_ignored_is_empty() {
    let ignore = IgnoreDir("/root");
    let listing = format_files_list(
        Path::new("/root"),
        &files(&["/root/a.txt"]),
        false,
        Some(&ignore),
        false,
        None,
    );
    assert_eq!(listing, "No files found.");
}

// ============================================================================
// Patch Tests
// ============================================================================

#[test]
fn test_pretty_patch_has_only_hunks() {
    let patch = create_pretty_patch("src\\f.txt", Some("a\n"), Some("b\n"));
    assert!(patch.starts_with("@@ "));
    assert!(!patch.lines().any(|l| l.starts_with("---") || l.starts_with("+++")));
    assert!(!patch.contains("Index:"));
}

#[test]
fn test_pretty_patch_deleted_content() {
    let patch = create_pretty_patch("gone.txt", Some("x\ny\n"), None);
    assert_eq!(patch, "@@ -1,2 +0,0 @@\n-x\n-y\n");
}

// ============================================================================
// Template Tests
// ============================================================================

#[test]
fn test_templates_default_to_english() {
    let fmt = ResponseFormatter::default();
    assert_eq!(fmt.locale, Locale::En);
    assert_eq!(fmt.tool_denied(), "The user denied this operation.");
    assert!(fmt
        .ignore_error("secrets/.env")
        .starts_with("Access to secrets/.env is blocked"));
}

#[test]
fn test_templates_chinese_reminder_shared() {
    let fmt = ResponseFormatter::for_language(Some("zh-CN"));
    let reminder = fmt.tool_use_instructions_reminder();
    assert!(reminder.starts_with("# 提醒：工具使用说明"));
    assert!(fmt.no_tools_used().contains(reminder));
    assert!(fmt.too_many_mistakes(Some("慢一点")).contains("<feedback>\n慢一点\n</feedback>"));
}
