//! Modes
//!
//! Built-in and custom operating modes: lookup, prompt override resolution,
//! and tool permission checks.
//!
//! ## Architecture
//!
//! ```text
//! ModeRegistry (built-ins, immutable)
//!       |
//!       v
//! lookup  ──► details (prompt overrides + custom instructions)
//!       |
//!       v
//! permissions (group expansion, file restrictions, experiments)
//! ```

pub mod details;
pub mod instructions;
pub mod lookup;
pub mod permissions;
pub mod registry;

pub use details::{get_all_modes_with_prompts, get_full_mode_details, ModeDetailsOptions};
pub use instructions::BasicInstructionAssembler;
pub use lookup::{
    find_mode_by_slug, get_all_modes, get_custom_instructions, get_description,
    get_mode_by_slug, get_mode_config, get_mode_selection, get_role_definition,
    get_when_to_use, is_custom_mode, ModeSelection,
};
pub use permissions::{
    does_file_match_regex, get_tools_for_mode, is_tool_allowed_for_mode, ToolRequirements,
};
pub use registry::{ModeRegistry, DEFAULT_MODE_SLUG};
