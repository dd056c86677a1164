//! Editor Host Collaborators
//!
//! Query interfaces the prompt layer consults but does not implement:
//! file-ignore policy, write protection, persisted extension state, and
//! custom-instruction assembly.

use std::path::Path;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::CoreResult;

/// Marker prefixed to ignored entries that are still shown in listings.
pub const LOCK_TEXT_SYMBOL: &str = "\u{1F512}";

/// Marker prefixed to write-protected entries in listings.
pub const SHIELD_TEXT_SYMBOL: &str = "\u{1F6E1}\u{FE0F}";

/// Extension state key holding the user's custom modes.
pub const CUSTOM_MODES_KEY: &str = "customModes";

/// Extension state key holding per-mode prompt overrides.
pub const CUSTOM_MODE_PROMPTS_KEY: &str = "customModePrompts";

/// File-ignore policy (e.g. a `.kilocodeignore` file).
pub trait IgnoreChecker: Send + Sync {
    /// Returns true when the agent may access `absolute_path`.
    fn validate_access(&self, absolute_path: &Path) -> bool;
}

/// Write-protection policy for configuration files the agent must not modify.
pub trait ProtectionChecker: Send + Sync {
    fn is_write_protected(&self, absolute_path: &Path) -> bool;
}

/// Read access to the host's persisted global state.
#[async_trait]
pub trait ExtensionState: Send + Sync {
    /// Raw JSON value stored under `key`, `None` when unset.
    async fn get_value(&self, key: &str) -> CoreResult<Option<serde_json::Value>>;
}

/// Read a typed value from extension state.
///
/// A stored `null` is treated the same as a missing key.
pub async fn get_state<T: DeserializeOwned>(
    state: &dyn ExtensionState,
    key: &str,
) -> CoreResult<Option<T>> {
    match state.get_value(key).await? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(value) => Ok(Some(serde_json::from_value(value)?)),
    }
}

/// Options threaded through custom-instruction assembly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstructionOptions {
    /// Preferred response language tag (e.g. `en`, `zh-CN`)
    pub language: Option<String>,
}

/// Combines mode, global, and workspace instructions into the final
/// custom-instructions text for a mode.
#[async_trait]
pub trait InstructionAssembler: Send + Sync {
    async fn add_custom_instructions(
        &self,
        mode_instructions: &str,
        global_instructions: &str,
        cwd: &Path,
        mode_slug: &str,
        options: &InstructionOptions,
    ) -> CoreResult<String>;
}
