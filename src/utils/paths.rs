//! Cross-Platform Path Utilities
//!
//! Application directory resolution (~/.prompt-modes/) and the lexical path
//! arithmetic used when rendering workspace file listings. Nothing here
//! touches the filesystem except the `ensure_*` helpers.

use std::path::{Component, Path, PathBuf};

use crate::utils::error::{AppError, AppResult};

/// Get the user's home directory
pub fn home_dir() -> AppResult<PathBuf> {
    dirs::home_dir().ok_or_else(|| AppError::config("Could not determine home directory"))
}

/// Get the Prompt Modes directory (~/.prompt-modes/)
pub fn prompt_modes_dir() -> AppResult<PathBuf> {
    Ok(home_dir()?.join(".prompt-modes"))
}

/// Get the persisted extension state path (~/.prompt-modes/state.json)
pub fn state_path() -> AppResult<PathBuf> {
    Ok(prompt_modes_dir()?.join("state.json"))
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &Path) -> AppResult<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Get the Prompt Modes directory, creating if it doesn't exist
pub fn ensure_prompt_modes_dir() -> AppResult<PathBuf> {
    let path = prompt_modes_dir()?;
    ensure_dir(&path)?;
    Ok(path)
}

/// Collapse `.` and `..` components without consulting the filesystem.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let popped = matches!(
                    out.components().next_back(),
                    Some(Component::Normal(_))
                ) && out.pop();
                if !popped && !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Path of `path` relative to `root`, with forward slashes.
///
/// Both sides are normalized first. Returns an empty string when they are
/// the same location and climbs with `..` when `path` is outside `root`.
/// A trailing separator on `path` is not preserved.
pub fn relative_posix(root: &Path, path: &Path) -> String {
    let root = normalize_lexically(root);
    let path = normalize_lexically(path);

    let root_parts: Vec<Component> = root.components().collect();
    let path_parts: Vec<Component> = path.components().collect();

    let common = root_parts
        .iter()
        .zip(path_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut segments: Vec<String> = Vec::new();
    for _ in common..root_parts.len() {
        segments.push("..".to_string());
    }
    for part in &path_parts[common..] {
        segments.push(part.as_os_str().to_string_lossy().into_owned());
    }

    to_posix(&segments.join("/"))
}

/// Resolve a listing-relative path back to an absolute one under `root`.
pub fn resolve_relative(root: &Path, relative: &str) -> PathBuf {
    normalize_lexically(&root.join(relative))
}

/// Replace Windows separators with forward slashes.
pub fn to_posix(path: &str) -> String {
    path.replace('\\', "/")
}
