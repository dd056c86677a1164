//! Experiment Flags
//!
//! Experiments are toggled by the user in extension settings. Some of them
//! gate an experimental tool (see `ExperimentalTool::experiment`).

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Known experiment identifiers, serialized with the host's camelCase keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExperimentId {
    #[serde(rename = "morphFastApply")]
    MorphFastApply,
    #[serde(rename = "multiFileApplyDiff")]
    MultiFileApplyDiff,
    #[serde(rename = "powerSteering")]
    PowerSteering,
    #[serde(rename = "search_and_replace")]
    SearchAndReplace,
    #[serde(rename = "insert_content")]
    InsertBlock,
}

impl ExperimentId {
    pub const ALL: [ExperimentId; 5] = [
        ExperimentId::MorphFastApply,
        ExperimentId::MultiFileApplyDiff,
        ExperimentId::PowerSteering,
        ExperimentId::SearchAndReplace,
        ExperimentId::InsertBlock,
    ];

    /// Look up an experiment by its settings key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.key() == key)
    }

    pub fn key(&self) -> &'static str {
        match self {
            ExperimentId::MorphFastApply => "morphFastApply",
            ExperimentId::MultiFileApplyDiff => "multiFileApplyDiff",
            ExperimentId::PowerSteering => "powerSteering",
            ExperimentId::SearchAndReplace => "search_and_replace",
            ExperimentId::InsertBlock => "insert_content",
        }
    }
}

/// Per-experiment enablement as stored in settings. Missing entries are off.
///
/// Settings may carry flags this crate does not know; those are dropped on
/// deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Experiments(HashMap<ExperimentId, bool>);

impl<'de> Deserialize<'de> for Experiments {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = HashMap::<String, bool>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .filter_map(|(key, enabled)| ExperimentId::from_key(&key).map(|id| (id, enabled)))
            .collect())
    }
}

impl Experiments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style toggle.
    pub fn with(mut self, id: ExperimentId, enabled: bool) -> Self {
        self.0.insert(id, enabled);
        self
    }

    pub fn set(&mut self, id: ExperimentId, enabled: bool) {
        self.0.insert(id, enabled);
    }

    pub fn is_enabled(&self, id: ExperimentId) -> bool {
        self.0.get(&id).copied().unwrap_or(false)
    }
}

impl FromIterator<(ExperimentId, bool)> for Experiments {
    fn from_iter<I: IntoIterator<Item = (ExperimentId, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
