use serde::{Deserialize, Serialize};

/// Byte range in the original source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Root node: a source file, or the contents of a `{...}` expression container
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Module {
    pub items: Vec<Item>,
}

impl Module {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// A module holding a single run of raw JS text
    pub fn raw(text: impl Into<String>) -> Self {
        Self {
            items: vec![Item::Raw { text: text.into() }],
        }
    }

    /// Returns the text when the module contains no JSX or styled templates
    pub fn as_raw_text(&self) -> Option<String> {
        let mut text = String::new();
        for item in &self.items {
            match item {
                Item::Raw { text: raw } => text.push_str(raw),
                _ => return None,
            }
        }
        Some(text)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Item {
    /// JS text kept verbatim
    Raw { text: String },

    /// JSX element or fragment
    Element(JsxElement),

    /// `styled.tag`...`` or `styled(Target)`...``
    Styled(StyledTemplate),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsxElement {
    /// Empty for fragments
    pub name: String,
    pub attributes: Vec<JsxAttribute>,
    /// Whitespace between the last attribute and `>` or `/>`
    pub trailing: String,
    /// `None` for self-closing elements
    pub children: Option<Vec<JsxChild>>,
    /// Text between `</` and `>` of the closing tag
    pub closing: String,
    pub span: Span,
}

impl JsxElement {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            closing: name.clone(),
            name,
            attributes: Vec::new(),
            trailing: String::new(),
            children: None,
            span: Span::default(),
        }
    }

    pub fn is_fragment(&self) -> bool {
        self.name.is_empty()
    }

    /// Lowercase HTML tag such as `div` or `h1`
    pub fn is_intrinsic(&self) -> bool {
        let mut bytes = self.name.bytes();
        matches!(bytes.next(), Some(b'a'..=b'z'))
            && bytes.all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
    }

    /// Rename the element, keeping the closing tag in sync
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.closing = self.name.clone();
    }

    pub fn attribute(&self, name: &str) -> Option<&JsxAttribute> {
        self.attributes.iter().find(|attr| attr.name() == Some(name))
    }

    pub fn attribute_index(&self, name: &str) -> Option<usize> {
        self.attributes.iter().position(|attr| attr.name() == Some(name))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum JsxAttribute {
    Named {
        /// Whitespace before the attribute name
        leading: String,
        name: String,
        /// Text between the name and the value, normally `=`
        separator: String,
        value: Option<AttributeValue>,
    },
    Spread {
        leading: String,
        /// Text from `{` through `...`
        prefix: String,
        expression: Module,
    },
}

impl JsxAttribute {
    /// ` name=value` with a single leading space
    pub fn named(name: impl Into<String>, value: Option<AttributeValue>) -> Self {
        JsxAttribute::Named {
            leading: " ".to_string(),
            name: name.into(),
            separator: "=".to_string(),
            value,
        }
    }

    /// ` {...expression}`
    pub fn spread(expression: impl Into<String>) -> Self {
        JsxAttribute::Spread {
            leading: " ".to_string(),
            prefix: "{...".to_string(),
            expression: Module::raw(expression),
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            JsxAttribute::Named { name, .. } => Some(name),
            JsxAttribute::Spread { .. } => None,
        }
    }

    pub fn value(&self) -> Option<&AttributeValue> {
        match self {
            JsxAttribute::Named { value, .. } => value.as_ref(),
            JsxAttribute::Spread { .. } => None,
        }
    }

    pub fn leading(&self) -> &str {
        match self {
            JsxAttribute::Named { leading, .. } | JsxAttribute::Spread { leading, .. } => leading,
        }
    }

    pub fn set_leading(&mut self, text: impl Into<String>) {
        match self {
            JsxAttribute::Named { leading, .. } | JsxAttribute::Spread { leading, .. } => {
                *leading = text.into()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AttributeValue {
    /// String literal; JSX strings have no escapes
    Text { quote: char, value: String },
    Expression(Module),
    Element(JsxElement),
}

impl AttributeValue {
    pub fn string(value: impl Into<String>) -> Self {
        AttributeValue::Text {
            quote: '"',
            value: value.into(),
        }
    }

    pub fn expression(source: impl Into<String>) -> Self {
        AttributeValue::Expression(Module::raw(source))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum JsxChild {
    Text { text: String },
    Expression(Module),
    Element(JsxElement),
}

/// What a styled factory call wraps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name")]
pub enum StyledTarget {
    /// `styled.div` or `styled('div')`
    Tag(String),
    /// `styled(Card)`
    Component(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyledTemplate {
    pub target: StyledTarget,
    /// Template contents between the backticks
    pub css: String,
    /// Original text of the whole tagged template
    pub raw: String,
    pub span: Span,
}
