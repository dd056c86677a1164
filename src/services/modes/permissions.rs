//! Mode Tool Permissions
//!
//! Resolves which tools a mode may use and whether a specific tool call is
//! allowed, including the file-pattern restriction on edit groups.
//!
//! Evaluation order for a single call:
//!
//! | Step | Check | Outcome |
//! |------|-------|---------|
//! | 1 | Tool is always available | allow |
//! | 2 | Experimental tool, experiments supplied, gate off | deny |
//! | 3 | Requirements disable everything / this tool | deny |
//! | 4 | Mode slug unknown | deny |
//! | 5 | First group containing the tool | allow, or file restriction error |
//! | 6 | No group contains the tool | deny |

use std::collections::HashMap;

use prompt_modes_tools::{
    is_always_available, Experiments, ToolGroup, ToolId, ALWAYS_AVAILABLE_TOOLS,
};
use regex::Regex;
use serde_json::Value;
use tracing::{debug, error};

use super::lookup::get_mode_by_slug;
use crate::models::mode::{GroupEntry, ModeConfig};
use crate::utils::error::{AppError, AppResult};

/// Parameters whose presence means a call writes file content.
const CONTENT_PARAMS: [&str; 3] = ["diff", "content", "operations"];

/// Host-level tool enablement, independent of the mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolRequirements {
    /// Every tool outside the always-available set is disabled.
    AllDisabled,
    /// Per-tool flags keyed by wire name; only an explicit `false` disables.
    PerTool(HashMap<String, bool>),
}

impl ToolRequirements {
    fn disables(&self, tool: ToolId) -> bool {
        match self {
            ToolRequirements::AllDisabled => true,
            ToolRequirements::PerTool(flags) => flags.get(tool.as_str()) == Some(&false),
        }
    }
}

/// Whether `path` matches `pattern`. The pattern is compiled on every call;
/// an invalid pattern is logged and treated as a non-match.
pub fn does_file_match_regex(path: &str, pattern: &str) -> bool {
    match Regex::new(pattern) {
        Ok(regex) => regex.is_match(path),
        Err(e) => {
            error!(pattern = pattern, error = %e, "Invalid regex pattern");
            false
        }
    }
}

/// Every tool granted by `groups` plus the always-available set, in first
/// appearance order without duplicates.
pub fn get_tools_for_mode(groups: &[GroupEntry]) -> Vec<ToolId> {
    let mut tools: Vec<ToolId> = Vec::new();

    let granted = groups.iter().flat_map(|entry| entry.group().tools().iter());
    for tool in granted.chain(ALWAYS_AVAILABLE_TOOLS.iter()) {
        if !tools.contains(tool) {
            tools.push(*tool);
        }
    }

    tools
}

/// JavaScript-style truthiness of a tool parameter.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn truthy_param<'a>(params: &'a Value, key: &str) -> Option<&'a Value> {
    params.get(key).filter(|value| is_truthy(value))
}

/// Text a parameter is matched as: strings verbatim, anything else as JSON.
fn param_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Decide whether `tool` may be called in mode `mode_slug`.
///
/// Returns `Err(AppError::FileRestriction)` when an edit-group tool writes
/// content to a path outside the mode's allowed pattern; callers surface
/// that message to the user instead of silently refusing.
pub fn is_tool_allowed_for_mode(
    tool: ToolId,
    mode_slug: &str,
    custom_modes: &[ModeConfig],
    tool_requirements: Option<&ToolRequirements>,
    tool_params: Option<&Value>,
    experiments: Option<&Experiments>,
) -> AppResult<bool> {
    if is_always_available(tool) {
        return Ok(true);
    }

    if let (Some(experiments), Some(experiment)) = (experiments, tool.experiment()) {
        if !experiments.is_enabled(experiment) {
            debug!(tool = tool.as_str(), experiment = experiment.key(), "Experiment disabled");
            return Ok(false);
        }
    }

    if tool_requirements.is_some_and(|requirements| requirements.disables(tool)) {
        return Ok(false);
    }

    let Some(mode) = get_mode_by_slug(mode_slug, Some(custom_modes)) else {
        return Ok(false);
    };

    let Some(entry) = mode.groups.iter().find(|entry| entry.group().contains(tool)) else {
        return Ok(false);
    };

    match entry {
        GroupEntry::Plain(_) => Ok(true),
        GroupEntry::Restricted {
            group,
            file_regex,
            description,
        } => {
            if *group == ToolGroup::Edit {
                check_file_restriction(mode, file_regex, description.as_deref(), tool_params)?;
            }
            Ok(true)
        }
    }
}

fn check_file_restriction(
    mode: &ModeConfig,
    pattern: &str,
    description: Option<&str>,
    tool_params: Option<&Value>,
) -> AppResult<()> {
    let Some(params) = tool_params else {
        return Ok(());
    };
    let Some(path) = truthy_param(params, "path").map(param_text) else {
        return Ok(());
    };
    let writes_content = CONTENT_PARAMS
        .iter()
        .any(|key| truthy_param(params, key).is_some());

    if writes_content && !does_file_match_regex(&path, pattern) {
        return Err(AppError::FileRestriction {
            mode: mode.name.clone(),
            pattern: pattern.to_string(),
            description: description.map(str::to_string),
            path,
        });
    }
    Ok(())
}
