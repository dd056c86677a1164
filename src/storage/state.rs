//! Extension State Stores
//!
//! Key-value stores implementing `ExtensionState`. `MemoryState` lives only
//! in process; `FileState` is backed by a pretty-printed JSON object on disk.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use prompt_modes_core::{CoreResult, ExtensionState};
use serde::Serialize;
use serde_json::{Map, Value};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::utils::error::{AppError, AppResult};
use crate::utils::paths::{ensure_dir, ensure_prompt_modes_dir, state_path};

/// In-memory state, for tests and embedding hosts.
#[derive(Debug, Default)]
pub struct MemoryState {
    values: RwLock<HashMap<String, Value>>,
}

impl MemoryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Serialize) -> AppResult<Self> {
        let value = serde_json::to_value(value)?;
        self.values.get_mut().insert(key.into(), value);
        Ok(self)
    }

    pub async fn set_value(&self, key: impl Into<String>, value: impl Serialize) -> AppResult<()> {
        let value = serde_json::to_value(value)?;
        self.values.write().await.insert(key.into(), value);
        Ok(())
    }

    pub async fn remove(&self, key: &str) -> Option<Value> {
        self.values.write().await.remove(key)
    }
}

#[async_trait]
impl ExtensionState for MemoryState {
    async fn get_value(&self, key: &str) -> CoreResult<Option<Value>> {
        Ok(self.values.read().await.get(key).cloned())
    }
}

/// JSON-file-backed state.
#[derive(Debug)]
pub struct FileState {
    path: PathBuf,
    values: RwLock<Map<String, Value>>,
}

impl FileState {
    /// Open the default store at `~/.prompt-modes/state.json`.
    pub fn new() -> AppResult<Self> {
        ensure_prompt_modes_dir()?;
        Self::open(state_path()?)
    }

    /// Open a store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        let values = Self::load_from_file(&path)?;
        debug!(path = %path.display(), keys = values.len(), "Loaded extension state");
        Ok(Self {
            path,
            values: RwLock::new(values),
        })
    }

    fn load_from_file(path: &Path) -> AppResult<Map<String, Value>> {
        if !path.exists() {
            return Ok(Map::new());
        }
        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str::<Value>(&content)? {
            Value::Object(map) => Ok(map),
            other => Err(AppError::config(format!(
                "State file {} must contain a JSON object, found {}",
                path.display(),
                json_kind(&other)
            ))),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Set a value in memory. Call `save` to persist.
    pub async fn set_value(&self, key: impl Into<String>, value: impl Serialize) -> AppResult<()> {
        let value = serde_json::to_value(value)?;
        self.values.write().await.insert(key.into(), value);
        Ok(())
    }

    /// Write the current state to disk with pretty formatting.
    pub async fn save(&self) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let values = self.values.read().await;
        let content = serde_json::to_string_pretty(&*values)?;
        fs::write(&self.path, content)?;
        info!(path = %self.path.display(), "Saved extension state");
        Ok(())
    }

    /// Replace in-memory state with the file contents.
    pub async fn reload(&self) -> AppResult<()> {
        let values = Self::load_from_file(&self.path)?;
        *self.values.write().await = values;
        Ok(())
    }
}

#[async_trait]
impl ExtensionState for FileState {
    async fn get_value(&self, key: &str) -> CoreResult<Option<Value>> {
        Ok(self.values.read().await.get(key).cloned())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prompt_modes_core::{get_state, CUSTOM_MODES_KEY};
    use serde_json::json;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_memory_state_roundtrip() {
        let state = MemoryState::new().with_value("flag", true).unwrap();
        assert_eq!(state.get_value("flag").await.unwrap(), Some(json!(true)));

        state.set_value("count", 3).await.unwrap();
        let count: Option<u32> = get_state(&state, "count").await.unwrap();
        assert_eq!(count, Some(3));

        assert_eq!(state.remove("flag").await, Some(json!(true)));
        assert!(state.get_value("flag").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_file_state_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let state = FileState::open(dir.path().join("state.json")).unwrap();
        assert!(state.get_value(CUSTOM_MODES_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_file_state_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("state.json");

        let state = FileState::open(&path).unwrap();
        state
            .set_value(CUSTOM_MODES_KEY, json!([{"slug": "docs"}]))
            .await
            .unwrap();
        state.save().await.unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\n  \"customModes\""));

        let reopened = FileState::open(&path).unwrap();
        assert_eq!(
            reopened.get_value(CUSTOM_MODES_KEY).await.unwrap(),
            Some(json!([{"slug": "docs"}]))
        );

        fs::write(&path, r#"{"other": 1}"#).unwrap();
        reopened.reload().await.unwrap();
        assert!(reopened.get_value(CUSTOM_MODES_KEY).await.unwrap().is_none());
    }

    #[test]
    fn test_file_state_rejects_non_object() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "[1, 2]").unwrap();
        let err = FileState::open(&path).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
