use indexmap::IndexMap;
use propstyle_common::CommonResult;
use propstyle_style::Breakpoints;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_NAME: &str = "propstyle.config.json";

/// Codemod configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodemodConfig {
    /// Generic element that receives `as="<tag>"`
    #[serde(default = "default_wrapper")]
    pub wrapper: String,

    /// HTML tags with a dedicated component (button -> Button)
    #[serde(default = "default_tag_map")]
    pub tag_map: IndexMap<String, String>,

    /// Breakpoint names used as `media` keys
    #[serde(default)]
    pub breakpoints: Breakpoints,

    /// Identifier of the styled-components factory
    #[serde(default = "default_styled_factory")]
    pub styled_factory: String,

    /// Drop `import styled from "styled-components"` once nothing uses it
    #[serde(default = "default_true")]
    pub remove_styled_import: bool,

    /// Module to import the library components from, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import_source: Option<String>,
}

fn default_wrapper() -> String {
    "Box".to_string()
}

fn default_tag_map() -> IndexMap<String, String> {
    [
        ("button", "Button"),
        ("a", "Link"),
        ("img", "Image"),
        ("input", "Input"),
        ("textarea", "Textarea"),
        ("select", "Select"),
    ]
    .into_iter()
    .map(|(tag, component)| (tag.to_string(), component.to_string()))
    .collect()
}

fn default_styled_factory() -> String {
    "styled".to_string()
}

fn default_true() -> bool {
    true
}

impl CodemodConfig {
    /// Load config from a directory, falling back to defaults when absent
    pub fn load(cwd: impl AsRef<Path>) -> CommonResult<Self> {
        let config_path = cwd.as_ref().join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Component a lowercase tag maps to directly
    pub fn mapped_component(&self, tag: &str) -> Option<&str> {
        self.tag_map.get(tag).map(String::as_str)
    }

    /// Whether an element name is the wrapper or a mapped component
    pub fn is_library_component(&self, name: &str) -> bool {
        name == self.wrapper || self.tag_map.values().any(|component| component == name)
    }
}

impl Default for CodemodConfig {
    fn default() -> Self {
        Self {
            wrapper: default_wrapper(),
            tag_map: default_tag_map(),
            breakpoints: Breakpoints::default(),
            styled_factory: default_styled_factory(),
            remove_styled_import: true,
            import_source: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "wrapper": "View",
            "tagMap": { "button": "Btn" },
            "breakpoints": { "tablet": 600, "desktop": 1024 },
            "removeStyledImport": false,
            "importSource": "@acme/ui"
        }"#;

        let config: CodemodConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.wrapper, "View");
        assert_eq!(config.mapped_component("button"), Some("Btn"));
        assert_eq!(config.mapped_component("a"), None);
        assert_eq!(config.breakpoints.name_for_min_width(600), Some("tablet"));
        assert_eq!(config.styled_factory, "styled");
        assert!(!config.remove_styled_import);
        assert_eq!(config.import_source.as_deref(), Some("@acme/ui"));
    }

    #[test]
    fn test_default_config() {
        let config = CodemodConfig::default();
        assert_eq!(config.wrapper, "Box");
        assert_eq!(config.mapped_component("button"), Some("Button"));
        assert!(config.is_library_component("Box"));
        assert!(config.is_library_component("Link"));
        assert!(!config.is_library_component("Card"));
        assert_eq!(config.breakpoints, Breakpoints::default());
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config: CodemodConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CodemodConfig::default());
    }

    #[test]
    fn test_load_missing_and_present() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(CodemodConfig::load(dir.path()).unwrap(), CodemodConfig::default());

        std::fs::write(dir.path().join(DEFAULT_CONFIG_NAME), r#"{ "wrapper": "Stack" }"#).unwrap();
        assert_eq!(CodemodConfig::load(dir.path()).unwrap().wrapper, "Stack");

        std::fs::write(dir.path().join(DEFAULT_CONFIG_NAME), "{ not json").unwrap();
        assert!(CodemodConfig::load(dir.path()).is_err());
    }
}
