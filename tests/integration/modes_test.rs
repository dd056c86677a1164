//! Mode Registry Integration Tests
//!
//! Exercises the public mode API end to end:
//! - Built-in lookup and custom mode merging
//! - Prompt overrides read from extension state
//! - Tool permission checks with file restrictions and experiments

use prompt_modes::{
    does_file_match_regex, get_all_modes, get_all_modes_with_prompts, get_full_mode_details,
    get_mode_by_slug, get_tools_for_mode, is_tool_allowed_for_mode, AppError,
    BasicInstructionAssembler, ExperimentId, ExperimentalTool, Experiments, GroupEntry,
    MemoryState, ModeConfig, ModeDetailsOptions, ModeRegistry, ToolGroup, ToolId, ToolName,
    ToolRequirements, DEFAULT_MODE_SLUG,
};
use prompt_modes_core::{CUSTOM_MODES_KEY, CUSTOM_MODE_PROMPTS_KEY};
use prompt_modes_tools::switch_mode_description;
use serde_json::json;
use std::collections::HashMap;
use std::path::PathBuf;

fn docs_mode() -> ModeConfig {
    serde_json::from_value(json!({
        "slug": "docs",
        "name": "Docs Writer",
        "roleDefinition": "You write documentation.",
        "groups": ["read", ["edit", { "fileRegex": "\\.(md|mdx)$", "description": "Docs only" }]]
    }))
    .unwrap()
}

// ============================================================================
// Lookup Tests
// ============================================================================

#[tokio::test]
async fn test_unknown_slug_lookup_vs_full_details() {
    assert!(get_mode_by_slug("unknown", None).is_none());

    let details =
        get_full_mode_details("unknown", None, None, None, &BasicInstructionAssembler)
            .await
            .unwrap();
    assert_eq!(details.slug, DEFAULT_MODE_SLUG);
}

#[test]
fn test_custom_mode_parsed_from_host_shape() {
    let docs = docs_mode();
    assert_eq!(
        docs.groups,
        vec![
            GroupEntry::Plain(ToolGroup::Read),
            GroupEntry::restricted(ToolGroup::Edit, "\\.(md|mdx)$", Some("Docs only")),
        ]
    );

    let all = get_all_modes(Some(&[docs]));
    assert_eq!(all.len(), ModeRegistry::builtins().len() + 1);
    assert_eq!(all.last().unwrap().slug, "docs");
}

#[test]
fn test_switch_mode_description_mentions_parameters() {
    let text = switch_mode_description();
    assert!(text.contains("mode_slug"));
    assert!(text.contains("<switch_mode>"));
}

// ============================================================================
// Prompt Override Tests
// ============================================================================

#[tokio::test]
async fn test_state_backed_modes_and_details() {
    let state = MemoryState::new()
        .with_value(CUSTOM_MODES_KEY, json!([docs_mode()]))
        .unwrap()
        .with_value(
            CUSTOM_MODE_PROMPTS_KEY,
            json!({ "docs": { "whenToUse": "When writing docs" } }),
        )
        .unwrap();

    let modes = get_all_modes_with_prompts(&state).await.unwrap();
    let docs = modes.iter().find(|m| m.slug == "docs").unwrap();
    assert_eq!(docs.when_to_use.as_deref(), Some("When writing docs"));

    let options = ModeDetailsOptions {
        cwd: Some(PathBuf::from("/workspace")),
        global_custom_instructions: Some("Always cite sources.".to_string()),
        language: None,
    };
    let details = get_full_mode_details(
        "docs",
        Some(&modes),
        None,
        Some(&options),
        &BasicInstructionAssembler,
    )
    .await
    .unwrap();
    let instructions = details.custom_instructions.unwrap();
    assert!(instructions.contains("USER'S CUSTOM INSTRUCTIONS"));
    assert!(instructions.contains("Global Instructions:\nAlways cite sources."));
}

// ============================================================================
// Permission Tests
// ============================================================================

#[test]
fn test_markdown_restriction_in_architect() {
    let write = ToolId::Tool(ToolName::WriteToFile);

    let allowed = is_tool_allowed_for_mode(
        write,
        "architect",
        &[],
        None,
        Some(&json!({ "path": "README.md", "content": "# Title" })),
        None,
    )
    .unwrap();
    assert!(allowed);

    let err = is_tool_allowed_for_mode(
        write,
        "architect",
        &[],
        None,
        Some(&json!({ "path": "src/main.rs", "content": "fn main() {}" })),
        None,
    )
    .unwrap_err();
    assert!(err.is_file_restriction());
    assert_eq!(
        err.to_string(),
        "This mode (Architect) can only edit files matching pattern: \\.md$ (Markdown files only). Got: src/main.rs"
    );
}

#[test]
fn test_custom_mode_restriction_and_tools() {
    let customs = vec![docs_mode()];
    let apply_diff = ToolId::Tool(ToolName::ApplyDiff);

    assert!(is_tool_allowed_for_mode(
        apply_diff,
        "docs",
        &customs,
        None,
        Some(&json!({ "path": "guide.mdx", "diff": "<<<<<<< SEARCH" })),
        None,
    )
    .unwrap());

    let err = is_tool_allowed_for_mode(
        apply_diff,
        "docs",
        &customs,
        None,
        Some(&json!({ "path": "lib.rs", "diff": "<<<<<<< SEARCH" })),
        None,
    )
    .unwrap_err();
    assert!(matches!(err, AppError::FileRestriction { ref mode, .. } if mode == "Docs Writer"));

    // Command group is not granted to docs
    assert!(!is_tool_allowed_for_mode(
        ToolId::Tool(ToolName::ExecuteCommand),
        "docs",
        &customs,
        None,
        None,
        None,
    )
    .unwrap());

    let tools = get_tools_for_mode(&customs[0].groups);
    assert!(tools.contains(&ToolId::Tool(ToolName::ReadFile)));
    assert!(tools.contains(&ToolId::Tool(ToolName::AttemptCompletion)));
    assert!(!tools.contains(&ToolId::Tool(ToolName::ExecuteCommand)));
}

#[test]
fn test_experiment_and_requirement_gates() {
    let search_and_replace = ToolId::Experimental(ExperimentalTool::SearchAndReplace);

    let off = Experiments::new().with(ExperimentId::SearchAndReplace, false);
    assert!(
        !is_tool_allowed_for_mode(search_and_replace, "code", &[], None, None, Some(&off)).unwrap()
    );

    let on = Experiments::new().with(ExperimentId::SearchAndReplace, true);
    assert!(
        is_tool_allowed_for_mode(search_and_replace, "code", &[], None, None, Some(&on)).unwrap()
    );

    // edit_file is not an experiment id, so a disabled morphFastApply leaves it alone
    let morph_off = Experiments::new().with(ExperimentId::MorphFastApply, false);
    assert!(is_tool_allowed_for_mode(
        ToolId::Tool(ToolName::EditFile),
        "code",
        &[],
        None,
        None,
        Some(&morph_off),
    )
    .unwrap());

    let requirements =
        ToolRequirements::PerTool(HashMap::from([("read_file".to_string(), false)]));
    assert!(!is_tool_allowed_for_mode(
        ToolId::Tool(ToolName::ReadFile),
        "code",
        &[],
        Some(&requirements),
        None,
        None,
    )
    .unwrap());

    // Always-available tools ignore every gate
    assert!(is_tool_allowed_for_mode(
        ToolId::Tool(ToolName::AttemptCompletion),
        "nonexistent",
        &[],
        Some(&ToolRequirements::AllDisabled),
        None,
        None,
    )
    .unwrap());
}

#[test]
fn test_tool_id_parsing_feeds_permission_check() {
    let tool: ToolId = "search_and_replace".parse().unwrap();
    assert_eq!(tool, ToolId::Experimental(ExperimentalTool::SearchAndReplace));
    assert!(is_tool_allowed_for_mode(tool, "code", &[], None, None, None).unwrap());
    assert!("not_a_tool".parse::<ToolId>().is_err());
}

#[test]
fn test_does_file_match_regex() {
    assert!(does_file_match_regex("notes.md", "\\.md$"));
    assert!(!does_file_match_regex("notes.mdx", "\\.md$"));
    assert!(!does_file_match_regex("anything", "("));
}
