//! Tool Groups
//!
//! Modes grant tools by group rather than one by one. This table is the
//! single source of truth for which tools each group contains.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::names::{ExperimentalTool, ToolId, ToolName};

/// Named bundle of tools a mode can be granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolGroup {
    Read,
    Edit,
    Browser,
    Command,
    Mcp,
    Modes,
}

const READ_TOOLS: &[ToolId] = &[
    ToolId::Tool(ToolName::ReadFile),
    ToolId::Tool(ToolName::FetchInstructions),
    ToolId::Tool(ToolName::SearchFiles),
    ToolId::Tool(ToolName::ListFiles),
    ToolId::Tool(ToolName::ListCodeDefinitionNames),
    ToolId::Tool(ToolName::CodebaseSearch),
];

const EDIT_TOOLS: &[ToolId] = &[
    ToolId::Tool(ToolName::ApplyDiff),
    ToolId::Tool(ToolName::WriteToFile),
    ToolId::Experimental(ExperimentalTool::InsertContent),
    ToolId::Experimental(ExperimentalTool::SearchAndReplace),
    ToolId::Tool(ToolName::EditFile),
];

const BROWSER_TOOLS: &[ToolId] = &[ToolId::Tool(ToolName::BrowserAction)];

const COMMAND_TOOLS: &[ToolId] = &[ToolId::Tool(ToolName::ExecuteCommand)];

const MCP_TOOLS: &[ToolId] = &[
    ToolId::Tool(ToolName::UseMcpTool),
    ToolId::Tool(ToolName::AccessMcpResource),
];

const MODES_TOOLS: &[ToolId] = &[
    ToolId::Tool(ToolName::SwitchMode),
    ToolId::Tool(ToolName::NewTask),
];

/// Tools every mode gets regardless of its groups.
pub const ALWAYS_AVAILABLE_TOOLS: &[ToolId] = &[
    ToolId::Tool(ToolName::AskFollowupQuestion),
    ToolId::Tool(ToolName::AttemptCompletion),
    ToolId::Tool(ToolName::SwitchMode),
    ToolId::Tool(ToolName::NewTask),
    ToolId::Tool(ToolName::UpdateTodoList),
];

impl ToolGroup {
    pub const ALL: [ToolGroup; 6] = [
        ToolGroup::Read,
        ToolGroup::Edit,
        ToolGroup::Browser,
        ToolGroup::Command,
        ToolGroup::Mcp,
        ToolGroup::Modes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolGroup::Read => "read",
            ToolGroup::Edit => "edit",
            ToolGroup::Browser => "browser",
            ToolGroup::Command => "command",
            ToolGroup::Mcp => "mcp",
            ToolGroup::Modes => "modes",
        }
    }

    /// Tools in this group, in declaration order.
    pub fn tools(&self) -> &'static [ToolId] {
        match self {
            ToolGroup::Read => READ_TOOLS,
            ToolGroup::Edit => EDIT_TOOLS,
            ToolGroup::Browser => BROWSER_TOOLS,
            ToolGroup::Command => COMMAND_TOOLS,
            ToolGroup::Mcp => MCP_TOOLS,
            ToolGroup::Modes => MODES_TOOLS,
        }
    }

    pub fn contains(&self, tool: ToolId) -> bool {
        self.tools().contains(&tool)
    }

    /// Whether the group is granted implicitly to every mode.
    pub fn always_available(&self) -> bool {
        matches!(self, ToolGroup::Modes)
    }
}

impl fmt::Display for ToolGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether `tool` is in the always-available set.
pub fn is_always_available(tool: ToolId) -> bool {
    ALWAYS_AVAILABLE_TOOLS.contains(&tool)
}
