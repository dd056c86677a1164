//! Custom Instruction Assembly
//!
//! In-process `InstructionAssembler` that joins the language preference,
//! global instructions, and mode-specific instructions into the
//! "USER'S CUSTOM INSTRUCTIONS" section of the system prompt.

use std::path::Path;

use async_trait::async_trait;
use prompt_modes_core::{CoreResult, InstructionAssembler, InstructionOptions};
use tracing::debug;

/// Assembler that works purely from the supplied text; it does not load
/// rule files from the workspace.
#[derive(Debug, Clone, Default)]
pub struct BasicInstructionAssembler;

impl BasicInstructionAssembler {
    pub fn new() -> Self {
        Self
    }
}

fn language_display_name(language: &str) -> &str {
    let normalized = language.to_lowercase();
    if normalized.starts_with("zh-tw") {
        "繁體中文"
    } else if normalized.starts_with("zh") {
        "简体中文"
    } else if normalized.starts_with("ja") {
        "日本語"
    } else if normalized.starts_with("en") {
        "English"
    } else {
        language
    }
}

#[async_trait]
impl InstructionAssembler for BasicInstructionAssembler {
    async fn add_custom_instructions(
        &self,
        mode_instructions: &str,
        global_instructions: &str,
        cwd: &Path,
        mode_slug: &str,
        options: &InstructionOptions,
    ) -> CoreResult<String> {
        let mut sections = Vec::with_capacity(3);

        if let Some(language) = options.language.as_deref().filter(|l| !l.trim().is_empty()) {
            sections.push(format!(
                "Language Preference:\nYou should always speak and think in the \"{}\" ({}) language unless the user gives you instructions below to do otherwise.",
                language_display_name(language),
                language
            ));
        }

        if !global_instructions.trim().is_empty() {
            sections.push(format!(
                "Global Instructions:\n{}",
                global_instructions.trim()
            ));
        }

        if !mode_instructions.trim().is_empty() {
            sections.push(format!(
                "Mode-specific Instructions:\n{}",
                mode_instructions.trim()
            ));
        }

        debug!(
            mode = mode_slug,
            cwd = %cwd.display(),
            sections = sections.len(),
            "assembled custom instructions"
        );

        if sections.is_empty() {
            return Ok(String::new());
        }

        Ok(format!(
            "\n====\n\nUSER'S CUSTOM INSTRUCTIONS\n\nThe following additional instructions are provided by the user, and should be followed to the best of your ability without interfering with the TOOL USE guidelines.\n\n{}",
            sections.join("\n\n")
        ))
    }
}
