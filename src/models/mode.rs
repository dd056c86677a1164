//! Mode Models
//!
//! Data structures for modes: named operating personas with role text,
//! usage guidance, and the tool groups they may use.

use std::collections::HashMap;

use prompt_modes_tools::ToolGroup;
use serde::{Deserialize, Serialize};

/// Options attached to a group entry in the host's settings format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_regex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Wire shape of a group entry: `"edit"` or `["edit", {"fileRegex": "..."}]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawGroupEntry {
    Plain(ToolGroup),
    WithOptions(ToolGroup, GroupOptions),
}

/// A tool group granted to a mode, optionally restricted to matching files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawGroupEntry", into = "RawGroupEntry")]
pub enum GroupEntry {
    Plain(ToolGroup),
    Restricted {
        group: ToolGroup,
        file_regex: String,
        description: Option<String>,
    },
}

impl GroupEntry {
    /// Restricted entry with a file pattern and optional human description.
    pub fn restricted(
        group: ToolGroup,
        file_regex: impl Into<String>,
        description: Option<&str>,
    ) -> Self {
        GroupEntry::Restricted {
            group,
            file_regex: file_regex.into(),
            description: description.map(str::to_string),
        }
    }

    pub fn group(&self) -> ToolGroup {
        match self {
            GroupEntry::Plain(group) => *group,
            GroupEntry::Restricted { group, .. } => *group,
        }
    }

    pub fn file_regex(&self) -> Option<&str> {
        match self {
            GroupEntry::Plain(_) => None,
            GroupEntry::Restricted { file_regex, .. } => Some(file_regex),
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            GroupEntry::Plain(_) => None,
            GroupEntry::Restricted { description, .. } => description.as_deref(),
        }
    }
}

impl From<ToolGroup> for GroupEntry {
    fn from(group: ToolGroup) -> Self {
        GroupEntry::Plain(group)
    }
}

impl From<RawGroupEntry> for GroupEntry {
    fn from(raw: RawGroupEntry) -> Self {
        match raw {
            RawGroupEntry::Plain(group) => GroupEntry::Plain(group),
            RawGroupEntry::WithOptions(group, options) => match options.file_regex {
                Some(file_regex) => GroupEntry::Restricted {
                    group,
                    file_regex,
                    description: options.description,
                },
                None => GroupEntry::Plain(group),
            },
        }
    }
}

impl From<GroupEntry> for RawGroupEntry {
    fn from(entry: GroupEntry) -> Self {
        match entry {
            GroupEntry::Plain(group) => RawGroupEntry::Plain(group),
            GroupEntry::Restricted {
                group,
                file_regex,
                description,
            } => RawGroupEntry::WithOptions(
                group,
                GroupOptions {
                    file_regex: Some(file_regex),
                    description,
                },
            ),
        }
    }
}

/// Name of the group an entry refers to.
pub fn get_group_name(entry: &GroupEntry) -> ToolGroup {
    entry.group()
}

/// A mode definition, built-in or user supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeConfig {
    /// Unique identifier (e.g. "code")
    pub slug: String,
    /// Display name
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_name: Option<String>,
    /// Identity text placed at the top of the system prompt
    pub role_definition: String,
    /// Guidance for the orchestrator on when to pick this mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when_to_use: Option<String>,
    /// Short description shown in the mode picker
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub groups: Vec<GroupEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_instructions: Option<String>,
}

/// Partial per-mode override stored under `customModePrompts`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptComponent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_definition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when_to_use: Option<String>,
    /// Only honoured by full mode resolution, never by the prompts merge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_instructions: Option<String>,
}

/// Sparse map from mode slug to its prompt override.
pub type CustomModePrompts = HashMap<String, PromptComponent>;
