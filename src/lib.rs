//! Prompt Modes
//!
//! Response formatting and operating-mode registry for an AI coding assistant
//! hosted inside an editor extension.
//! It includes:
//! - Model-facing response text, image framing, file listings, and diff previews
//! - Built-in and custom modes with prompt overrides
//! - Tool permission checks per mode, including file-edit restrictions
//! - Extension state stores (in-memory and JSON file)

pub mod models;
pub mod services;
pub mod storage;
pub mod utils;

pub use models::mode::{
    get_group_name, CustomModePrompts, GroupEntry, GroupOptions, ModeConfig, PromptComponent,
};
pub use services::modes::{
    does_file_match_regex, find_mode_by_slug, get_all_modes, get_all_modes_with_prompts,
    get_custom_instructions, get_description, get_full_mode_details, get_mode_by_slug,
    get_mode_config, get_mode_selection, get_role_definition, get_tools_for_mode,
    get_when_to_use, is_custom_mode, is_tool_allowed_for_mode, BasicInstructionAssembler,
    ModeDetailsOptions, ModeRegistry, ModeSelection, ToolRequirements, DEFAULT_MODE_SLUG,
};
pub use services::responses::{
    create_pretty_patch, format_files_list, image_blocks, tool_result, Locale, ResponseFormatter,
};
pub use storage::{FileState, MemoryState};
pub use utils::error::{AppError, AppResult};

pub use prompt_modes_core::{
    ContentBlock, ExtensionState, IgnoreChecker, ImageSource, InstructionAssembler,
    ProtectionChecker, ToolResponse,
};
pub use prompt_modes_tools::{ExperimentId, Experiments, ExperimentalTool, ToolGroup, ToolId, ToolName};
