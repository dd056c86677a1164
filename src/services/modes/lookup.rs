//! Mode Lookup
//!
//! Slug-based lookup and custom-mode merging. Custom modes always win over
//! built-ins with the same slug.

use tracing::warn;

use super::registry::ModeRegistry;
use crate::models::mode::{ModeConfig, PromptComponent};
use crate::utils::error::{AppError, AppResult};

/// Find a mode by slug, checking custom modes first and then built-ins.
pub fn get_mode_by_slug<'a>(
    slug: &str,
    custom_modes: Option<&'a [ModeConfig]>,
) -> Option<&'a ModeConfig> {
    find_mode_by_slug(slug, custom_modes).or_else(|| ModeRegistry::get(slug))
}

/// Find a mode by slug in the given list only, without built-in fallback.
pub fn find_mode_by_slug<'a>(
    slug: &str,
    modes: Option<&'a [ModeConfig]>,
) -> Option<&'a ModeConfig> {
    modes?.iter().find(|mode| mode.slug == slug)
}

/// Strict lookup: a missing slug is an error.
pub fn get_mode_config<'a>(
    slug: &str,
    custom_modes: Option<&'a [ModeConfig]>,
) -> AppResult<&'a ModeConfig> {
    get_mode_by_slug(slug, custom_modes).ok_or_else(|| AppError::ModeNotFound(slug.to_string()))
}

/// Built-ins with custom overrides substituted in place, followed by
/// custom-only modes in their given order.
pub fn get_all_modes(custom_modes: Option<&[ModeConfig]>) -> Vec<ModeConfig> {
    let mut all_modes = ModeRegistry::builtins().to_vec();

    for custom in custom_modes.unwrap_or_default() {
        match all_modes.iter().position(|mode| mode.slug == custom.slug) {
            Some(index) => all_modes[index] = custom.clone(),
            None => all_modes.push(custom.clone()),
        }
    }

    all_modes
}

/// Whether `slug` is defined (or overridden) by a custom mode.
pub fn is_custom_mode(slug: &str, custom_modes: Option<&[ModeConfig]>) -> bool {
    find_mode_by_slug(slug, custom_modes).is_some()
}

/// Role, instructions, and description chosen for a mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModeSelection {
    pub role_definition: String,
    pub base_instructions: String,
    pub description: String,
}

/// Pick the prompt pieces for `slug`.
///
/// Role definition and instructions come from the custom mode if one
/// exists, else the prompt component, else the built-in. The description
/// ignores the prompt component.
pub fn get_mode_selection(
    slug: &str,
    prompt_component: Option<&PromptComponent>,
    custom_modes: Option<&[ModeConfig]>,
) -> ModeSelection {
    let custom_mode = find_mode_by_slug(slug, custom_modes);
    let builtin_mode = ModeRegistry::get(slug);

    let (role_definition, base_instructions) = match (custom_mode, prompt_component, builtin_mode)
    {
        (Some(mode), _, _) => (
            Some(mode.role_definition.clone()),
            mode.custom_instructions.clone(),
        ),
        (None, Some(component), _) => (
            component.role_definition.clone(),
            component.custom_instructions.clone(),
        ),
        (None, None, Some(mode)) => (
            Some(mode.role_definition.clone()),
            mode.custom_instructions.clone(),
        ),
        (None, None, None) => (None, None),
    };

    let description = custom_mode
        .or(builtin_mode)
        .and_then(|mode| mode.description.clone());

    ModeSelection {
        role_definition: role_definition.unwrap_or_default(),
        base_instructions: base_instructions.unwrap_or_default(),
        description: description.unwrap_or_default(),
    }
}

fn lookup_for_display<'a>(
    slug: &str,
    custom_modes: Option<&'a [ModeConfig]>,
) -> Option<&'a ModeConfig> {
    let mode = get_mode_by_slug(slug, custom_modes);
    if mode.is_none() {
        warn!(slug = slug, "No mode found for slug");
    }
    mode
}

/// Role definition for display, empty when the mode is unknown.
pub fn get_role_definition(slug: &str, custom_modes: Option<&[ModeConfig]>) -> String {
    lookup_for_display(slug, custom_modes)
        .map(|mode| mode.role_definition.clone())
        .unwrap_or_default()
}

/// Description for display, empty when the mode is unknown or has none.
pub fn get_description(slug: &str, custom_modes: Option<&[ModeConfig]>) -> String {
    lookup_for_display(slug, custom_modes)
        .and_then(|mode| mode.description.clone())
        .unwrap_or_default()
}

pub fn get_when_to_use(slug: &str, custom_modes: Option<&[ModeConfig]>) -> String {
    lookup_for_display(slug, custom_modes)
        .and_then(|mode| mode.when_to_use.clone())
        .unwrap_or_default()
}

pub fn get_custom_instructions(slug: &str, custom_modes: Option<&[ModeConfig]>) -> String {
    lookup_for_display(slug, custom_modes)
        .and_then(|mode| mode.custom_instructions.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::mode::GroupEntry;
    use prompt_modes_tools::ToolGroup;

    fn custom(slug: &str, name: &str) -> ModeConfig {
        ModeConfig {
            slug: slug.to_string(),
            name: name.to_string(),
            icon_name: None,
            role_definition: format!("Custom role for {}", slug),
            when_to_use: None,
            description: Some(format!("{} description", name)),
            groups: vec![GroupEntry::Plain(ToolGroup::Read)],
            custom_instructions: Some(format!("{} instructions", name)),
        }
    }

    #[test]
    fn test_get_mode_by_slug_prefers_custom() {
        let customs = vec![custom("code", "My Code")];
        let mode = get_mode_by_slug("code", Some(&customs)).unwrap();
        assert_eq!(mode.name, "My Code");

        let builtin = get_mode_by_slug("ask", Some(&customs)).unwrap();
        assert_eq!(builtin.name, "Ask");
    }

    #[test]
    fn test_get_mode_by_slug_unknown_is_none() {
        assert!(get_mode_by_slug("unknown", None).is_none());
    }

    #[test]
    fn test_find_mode_by_slug_has_no_builtin_fallback() {
        assert!(find_mode_by_slug("code", None).is_none());
        assert!(find_mode_by_slug("code", Some(&[])).is_none());
        let customs = vec![custom("docs", "Docs")];
        assert!(find_mode_by_slug("docs", Some(&customs)).is_some());
    }

    #[test]
    fn test_get_mode_config_strict() {
        assert_eq!(get_mode_config("debug", None).unwrap().name, "Debug");
        let err = get_mode_config("missing", None).unwrap_err();
        assert!(matches!(err, AppError::ModeNotFound(ref slug) if slug == "missing"));
    }

    #[test]
    fn test_get_all_modes_without_customs() {
        let all = get_all_modes(None);
        assert_eq!(all.len(), ModeRegistry::builtins().len());
        assert_eq!(all, ModeRegistry::builtins().to_vec());
    }

    #[test]
    fn test_get_all_modes_override_in_place_and_append() {
        let customs = vec![
            custom("docs", "Docs"),
            custom("ask", "My Ask"),
            custom("review", "Review"),
        ];
        let all = get_all_modes(Some(&customs));
        let slugs: Vec<&str> = all.iter().map(|m| m.slug.as_str()).collect();
        assert_eq!(
            slugs,
            vec!["architect", "code", "ask", "debug", "orchestrator", "docs", "review"]
        );
        assert_eq!(all[2].name, "My Ask");
    }

    #[test]
    fn test_is_custom_mode() {
        let customs = vec![custom("code", "My Code")];
        assert!(is_custom_mode("code", Some(&customs)));
        assert!(!is_custom_mode("ask", Some(&customs)));
        assert!(!is_custom_mode("code", None));
    }

    #[test]
    fn test_mode_selection_precedence() {
        let component = PromptComponent {
            role_definition: Some("Component role".to_string()),
            custom_instructions: Some("Component instructions".to_string()),
            ..Default::default()
        };

        let from_component = get_mode_selection("code", Some(&component), None);
        assert_eq!(from_component.role_definition, "Component role");
        assert_eq!(from_component.base_instructions, "Component instructions");
        assert_eq!(from_component.description, "Write, modify, and refactor code");

        let customs = vec![custom("code", "My Code")];
        let from_custom = get_mode_selection("code", Some(&component), Some(&customs));
        assert_eq!(from_custom.role_definition, "Custom role for code");
        assert_eq!(from_custom.base_instructions, "My Code instructions");
        assert_eq!(from_custom.description, "My Code description");

        let builtin = get_mode_selection("debug", None, None);
        assert!(builtin.role_definition.contains("debugger"));
    }

    #[test]
    fn test_mode_selection_unknown_is_empty() {
        assert_eq!(get_mode_selection("nope", None, None), ModeSelection::default());
    }

    #[test]
    fn test_display_lookups_degrade_to_empty() {
        assert_eq!(get_role_definition("nope", None), "");
        assert_eq!(get_description("nope", None), "");
        assert_eq!(get_when_to_use("nope", None), "");
        assert_eq!(get_custom_instructions("nope", None), "");
    }

    #[test]
    fn test_display_lookups_for_builtins() {
        assert!(get_role_definition("ask", None).contains("technical assistant"));
        assert_eq!(get_description("ask", None), "Get answers and explanations");
        assert!(get_when_to_use("code", None).starts_with("Use this mode"));
        assert_eq!(get_custom_instructions("code", None), "");
    }
}
