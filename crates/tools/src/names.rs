//! Tool Identifiers
//!
//! Ordinary tools and experiment-gated tools are disjoint enums. A `ToolId`
//! wraps one or the other so permission checks match exhaustively instead of
//! testing a bare string against two lists.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::experiments::ExperimentId;

/// Tools that are always compiled in and never gated by an experiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolName {
    ReadFile,
    FetchInstructions,
    SearchFiles,
    ListFiles,
    ListCodeDefinitionNames,
    CodebaseSearch,
    ApplyDiff,
    WriteToFile,
    EditFile,
    BrowserAction,
    ExecuteCommand,
    UseMcpTool,
    AccessMcpResource,
    AskFollowupQuestion,
    AttemptCompletion,
    SwitchMode,
    NewTask,
    UpdateTodoList,
}

impl ToolName {
    pub const ALL: [ToolName; 18] = [
        ToolName::ReadFile,
        ToolName::FetchInstructions,
        ToolName::SearchFiles,
        ToolName::ListFiles,
        ToolName::ListCodeDefinitionNames,
        ToolName::CodebaseSearch,
        ToolName::ApplyDiff,
        ToolName::WriteToFile,
        ToolName::EditFile,
        ToolName::BrowserAction,
        ToolName::ExecuteCommand,
        ToolName::UseMcpTool,
        ToolName::AccessMcpResource,
        ToolName::AskFollowupQuestion,
        ToolName::AttemptCompletion,
        ToolName::SwitchMode,
        ToolName::NewTask,
        ToolName::UpdateTodoList,
    ];

    /// Wire name used in tool calls.
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolName::ReadFile => "read_file",
            ToolName::FetchInstructions => "fetch_instructions",
            ToolName::SearchFiles => "search_files",
            ToolName::ListFiles => "list_files",
            ToolName::ListCodeDefinitionNames => "list_code_definition_names",
            ToolName::CodebaseSearch => "codebase_search",
            ToolName::ApplyDiff => "apply_diff",
            ToolName::WriteToFile => "write_to_file",
            ToolName::EditFile => "edit_file",
            ToolName::BrowserAction => "browser_action",
            ToolName::ExecuteCommand => "execute_command",
            ToolName::UseMcpTool => "use_mcp_tool",
            ToolName::AccessMcpResource => "access_mcp_resource",
            ToolName::AskFollowupQuestion => "ask_followup_question",
            ToolName::AttemptCompletion => "attempt_completion",
            ToolName::SwitchMode => "switch_mode",
            ToolName::NewTask => "new_task",
            ToolName::UpdateTodoList => "update_todo_list",
        }
    }
}

/// Tools whose wire name is itself an experiment id; they are only offered
/// while that experiment is switched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperimentalTool {
    SearchAndReplace,
    InsertContent,
}

impl ExperimentalTool {
    pub const ALL: [ExperimentalTool; 2] = [
        ExperimentalTool::SearchAndReplace,
        ExperimentalTool::InsertContent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExperimentalTool::SearchAndReplace => "search_and_replace",
            ExperimentalTool::InsertContent => "insert_content",
        }
    }

    /// The experiment that must be enabled for this tool to be offered.
    pub fn experiment(&self) -> ExperimentId {
        match self {
            ExperimentalTool::SearchAndReplace => ExperimentId::SearchAndReplace,
            ExperimentalTool::InsertContent => ExperimentId::InsertBlock,
        }
    }
}

/// Any tool the agent can name in a tool call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToolId {
    Tool(ToolName),
    Experimental(ExperimentalTool),
}

impl ToolId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolId::Tool(name) => name.as_str(),
            ToolId::Experimental(tool) => tool.as_str(),
        }
    }

    /// Gating experiment, if any.
    pub fn experiment(&self) -> Option<ExperimentId> {
        match self {
            ToolId::Tool(_) => None,
            ToolId::Experimental(tool) => Some(tool.experiment()),
        }
    }
}

impl From<ToolName> for ToolId {
    fn from(name: ToolName) -> Self {
        ToolId::Tool(name)
    }
}

impl From<ExperimentalTool> for ToolId {
    fn from(tool: ExperimentalTool) -> Self {
        ToolId::Experimental(tool)
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a tool call names a tool this layer does not know.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown tool: {0}")]
pub struct UnknownToolError(pub String);

impl FromStr for ToolId {
    type Err = UnknownToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(name) = ToolName::ALL.iter().find(|t| t.as_str() == s) {
            return Ok(ToolId::Tool(*name));
        }
        if let Some(tool) = ExperimentalTool::ALL.iter().find(|t| t.as_str() == s) {
            return Ok(ToolId::Experimental(*tool));
        }
        Err(UnknownToolError(s.to_string()))
    }
}
