//! Mode Details
//!
//! Resolves a mode into its fully expanded form for prompt generation,
//! layering user prompt overrides and assembled custom instructions on top
//! of the base definition.

use std::path::PathBuf;

use prompt_modes_core::{
    get_state, ExtensionState, InstructionAssembler, InstructionOptions, CUSTOM_MODES_KEY,
    CUSTOM_MODE_PROMPTS_KEY,
};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::lookup::{find_mode_by_slug, get_all_modes};
use super::registry::ModeRegistry;
use crate::models::mode::{CustomModePrompts, ModeConfig};
use crate::utils::error::AppResult;

/// Inputs for custom instruction expansion.
#[derive(Debug, Clone, Default)]
pub struct ModeDetailsOptions {
    /// Workspace directory. Instructions are only assembled when set.
    pub cwd: Option<PathBuf>,
    pub global_custom_instructions: Option<String>,
    pub language: Option<String>,
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|v| !v.is_empty()).cloned()
}

/// Fully resolved mode for `slug`.
///
/// Unlike `get_mode_by_slug`, an unknown slug does not fail: the first
/// built-in is used instead. Prompt overrides only apply when non-empty.
pub async fn get_full_mode_details(
    slug: &str,
    custom_modes: Option<&[ModeConfig]>,
    custom_mode_prompts: Option<&CustomModePrompts>,
    options: Option<&ModeDetailsOptions>,
    assembler: &dyn InstructionAssembler,
) -> AppResult<ModeConfig> {
    let base = match find_mode_by_slug(slug, custom_modes).or_else(|| ModeRegistry::get(slug)) {
        Some(mode) => mode,
        None => {
            debug!(slug = slug, "Unknown mode, falling back to default");
            ModeRegistry::default_mode()
        }
    };

    let prompt = custom_mode_prompts.and_then(|prompts| prompts.get(slug));

    let mut mode = base.clone();
    if let Some(prompt) = prompt {
        if let Some(role) = non_empty(prompt.role_definition.as_ref()) {
            mode.role_definition = role;
        }
        if let Some(when_to_use) = non_empty(prompt.when_to_use.as_ref()) {
            mode.when_to_use = Some(when_to_use);
        }
        if let Some(description) = non_empty(prompt.description.as_ref()) {
            mode.description = Some(description);
        }
    }

    let base_instructions = prompt
        .and_then(|p| non_empty(p.custom_instructions.as_ref()))
        .or_else(|| base.custom_instructions.clone())
        .unwrap_or_default();

    match options.and_then(|o| o.cwd.as_deref().map(|cwd| (o, cwd))) {
        Some((opts, cwd)) => {
            let assembled = assembler
                .add_custom_instructions(
                    &base_instructions,
                    opts.global_custom_instructions.as_deref().unwrap_or(""),
                    cwd,
                    slug,
                    &InstructionOptions {
                        language: opts.language.clone(),
                    },
                )
                .await?;
            mode.custom_instructions = Some(assembled);
        }
        None if !base_instructions.is_empty() => {
            mode.custom_instructions = Some(base_instructions);
        }
        None => {}
    }

    Ok(mode)
}

async fn read_state<T: DeserializeOwned>(state: &dyn ExtensionState, key: &str) -> Option<T> {
    match get_state(state, key).await {
        Ok(value) => value,
        Err(e) => {
            warn!(key = key, error = %e, "Ignoring unreadable state value");
            None
        }
    }
}

/// Every mode with the user's stored prompt overrides applied.
///
/// Reads `customModes` and `customModePrompts` from `state`. A present
/// override replaces the field even when empty; `description` is left
/// untouched.
pub async fn get_all_modes_with_prompts(state: &dyn ExtensionState) -> AppResult<Vec<ModeConfig>> {
    let custom_modes: Vec<ModeConfig> = read_state(state, CUSTOM_MODES_KEY)
        .await
        .unwrap_or_default();
    let prompts: CustomModePrompts = read_state(state, CUSTOM_MODE_PROMPTS_KEY)
        .await
        .unwrap_or_default();

    let modes = get_all_modes(Some(&custom_modes))
        .into_iter()
        .map(|mut mode| {
            if let Some(prompt) = prompts.get(&mode.slug) {
                if let Some(role) = &prompt.role_definition {
                    mode.role_definition = role.clone();
                }
                if let Some(when_to_use) = &prompt.when_to_use {
                    mode.when_to_use = Some(when_to_use.clone());
                }
                if let Some(instructions) = &prompt.custom_instructions {
                    mode.custom_instructions = Some(instructions.clone());
                }
            }
            mode
        })
        .collect();

    Ok(modes)
}
