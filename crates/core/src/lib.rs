//! Prompt Modes Core
//!
//! Foundational error types, content block types, and editor-host collaborator
//! traits for the Prompt Modes workspace. This crate has zero dependencies on
//! application-level code.
//!
//! ## Module Organization
//!
//! - `error` - Core error types (`CoreError`, `CoreResult`)
//! - `content` - Model-facing content blocks (`ContentBlock`, `ImageSource`, `ToolResponse`)
//! - `host` - Collaborator interfaces (`IgnoreChecker`, `ProtectionChecker`,
//!   `ExtensionState`, `InstructionAssembler`)
//!
//! ## Design Principles
//!
//! 1. **Zero external dependencies beyond serde/async-trait/thiserror**
//! 2. **Trait-based collaborators** - enables test doubles for the editor host
//! 3. **Unidirectional dependency** - this crate depends on nothing else in the workspace

pub mod content;
pub mod error;
pub mod host;

// ── Error Types ────────────────────────────────────────────────────────
pub use error::{CoreError, CoreResult};

// ── Content Blocks ─────────────────────────────────────────────────────
pub use content::{ContentBlock, ImageSource, ToolResponse};

// ── Host Collaborators ─────────────────────────────────────────────────
pub use host::{
    get_state, ExtensionState, IgnoreChecker, InstructionAssembler, InstructionOptions,
    ProtectionChecker, CUSTOM_MODES_KEY, CUSTOM_MODE_PROMPTS_KEY, LOCK_TEXT_SYMBOL,
    SHIELD_TEXT_SYMBOL,
};
