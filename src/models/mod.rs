//! Data Models
//!
//! Serializable structures shared by services and persisted state.

pub mod mode;

pub use mode::{
    get_group_name, CustomModePrompts, GroupEntry, GroupOptions, ModeConfig, PromptComponent,
};
