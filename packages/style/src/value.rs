use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single style prop value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Number(n) => write!(f, "{}", n),
            StyleValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Number(value)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        StyleValue::Number(f64::from(value))
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Text(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Text(value)
    }
}

/// Insertion-ordered property -> value map
pub type Declarations = IndexMap<String, StyleValue>;

/// Style object as written in component props.
///
/// Root keys are declarations; `media` is keyed by breakpoint name and `on`
/// by pseudo state (`hover`, `focusVisible`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleObject {
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub media: IndexMap<String, Declarations>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub on: IndexMap<String, Declarations>,

    #[serde(flatten)]
    pub declarations: Declarations,
}

impl StyleObject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, property: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.declarations.insert(property.into(), value.into());
        self
    }

    pub fn with_media(mut self, breakpoint: impl Into<String>, declarations: Declarations) -> Self {
        self.media.insert(breakpoint.into(), declarations);
        self
    }

    pub fn with_state(mut self, state: impl Into<String>, declarations: Declarations) -> Self {
        self.on.insert(state.into(), declarations);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty() && self.media.is_empty() && self.on.is_empty()
    }
}
