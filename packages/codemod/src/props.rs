//! Prop values produced by the rewrite passes

use crate::css::{tokenize, CssToken};
use indexmap::IndexMap;
use propstyle_parser::ast::{AttributeValue, JsxAttribute};
use propstyle_parser::{significant_tokens, JsToken};

/// Value of a generated JSX prop
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    /// Plain string, rendered as `"..."` when safe
    Text(String),
    /// JS expression source, rendered inside `{}`
    Expression(String),
    /// Object literal such as the `on` and `media` props
    Object(IndexMap<String, PropValue>),
}

impl PropValue {
    /// JS source of the value as it appears inside an expression
    pub fn to_js(&self) -> String {
        match self {
            PropValue::Text(text) => js_string(text),
            PropValue::Expression(source) => source.clone(),
            PropValue::Object(entries) => {
                if entries.is_empty() {
                    return "{}".to_string();
                }
                let body: Vec<String> = entries
                    .iter()
                    .map(|(key, value)| format!("{}: {}", object_key(key), value.to_js()))
                    .collect();
                format!("{{ {} }}", body.join(", "))
            }
        }
    }

    pub fn to_attribute_value(&self) -> AttributeValue {
        match self {
            PropValue::Text(text) if is_plain_attribute_text(text) => AttributeValue::string(text.clone()),
            other => AttributeValue::expression(other.to_js()),
        }
    }

    /// ` name=value` attribute for this value
    pub fn to_attribute(&self, name: &str) -> JsxAttribute {
        JsxAttribute::named(name, Some(self.to_attribute_value()))
    }
}

/// Convert a CSS declaration value into a prop value.
///
/// A lone `${expr}` becomes the expression itself; any other value holding an
/// interpolation becomes a template literal. Function interpolations are
/// called with the component's `props` so the prop gets the computed value.
pub fn css_value_to_prop(value: &str) -> PropValue {
    let value = value.trim();
    let tokens = tokenize(value);

    if let [(CssToken::Interpolation(text), _)] = tokens.as_slice() {
        return PropValue::Expression(interpolated_expression(text));
    }

    let mut body = String::new();
    let mut last = 0;
    for (token, span) in &tokens {
        if let CssToken::Interpolation(text) = token {
            body.push_str(&value[last..span.start]);
            body.push_str(&format!("${{{}}}", interpolated_expression(text)));
            last = span.end;
        }
    }

    if last == 0 {
        return PropValue::Text(value.to_string());
    }
    body.push_str(&value[last..]);
    PropValue::Expression(format!("`{}`", body))
}

/// JS expression of a `${...}` token, invoking function interpolations
fn interpolated_expression(interpolation: &str) -> String {
    let expression = interpolation[2..interpolation.len() - 1].trim();
    if is_function_source(expression) {
        format!("({})(props)", expression)
    } else {
        expression.to_string()
    }
}

/// `function ...`, `async ...` or an arrow function at the top level
fn is_function_source(expression: &str) -> bool {
    let tokens = significant_tokens(expression);
    if matches!(tokens.first(), Some((JsToken::Ident("function" | "async"), _))) {
        return true;
    }

    let mut depth = 0usize;
    tokens.iter().any(|(token, _)| {
        match token {
            JsToken::LBrace | JsToken::LParen | JsToken::LBracket => depth += 1,
            JsToken::RBrace | JsToken::RParen | JsToken::RBracket => depth = depth.saturating_sub(1),
            JsToken::Arrow if depth == 0 => return true,
            _ => {}
        }
        false
    })
}

fn is_plain_attribute_text(text: &str) -> bool {
    !text.contains(['"', '\'', '{', '}'])
}

fn js_string(text: &str) -> String {
    serde_json::Value::String(text.to_string()).to_string()
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

fn object_key(key: &str) -> String {
    if is_identifier(key) {
        key.to_string()
    } else {
        js_string(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use propstyle_parser::serialize_element;
    use propstyle_parser::ast::JsxElement;

    fn render(name: &str, value: PropValue) -> String {
        let mut element = JsxElement::new("Box");
        element.attributes.push(value.to_attribute(name));
        serialize_element(&element)
    }

    #[test]
    fn test_text_values() {
        assert_eq!(render("color", PropValue::Text("red".into())), r#"<Box color="red"/>"#);
        assert_eq!(
            render("fontFamily", PropValue::Text(r#""Fira Sans", serif"#.into())),
            r#"<Box fontFamily={"\"Fira Sans\", serif"}/>"#
        );
    }

    #[test]
    fn test_nested_objects() {
        let mut hover = IndexMap::new();
        hover.insert("color".to_string(), PropValue::Text("blue".into()));
        hover.insert("--accent".to_string(), PropValue::Expression("theme.accent".into()));

        let mut on = IndexMap::new();
        on.insert("hover".to_string(), PropValue::Object(hover));

        assert_eq!(
            render("on", PropValue::Object(on)),
            r#"<Box on={{ hover: { color: "blue", "--accent": theme.accent } }}/>"#
        );
        assert_eq!(PropValue::Object(IndexMap::new()).to_js(), "{}");
    }

    #[test]
    fn test_css_value_to_prop() {
        assert_eq!(css_value_to_prop(" 24px "), PropValue::Text("24px".into()));
        assert_eq!(
            css_value_to_prop("${size}px solid"),
            PropValue::Expression("`${size}px solid`".into())
        );
        assert_eq!(
            css_value_to_prop("${theme.space[2]}"),
            PropValue::Expression("theme.space[2]".into())
        );
    }

    #[test]
    fn test_function_interpolations_are_called() {
        assert_eq!(
            css_value_to_prop("${(p) => p.color}"),
            PropValue::Expression("((p) => p.color)(props)".into())
        );
        assert_eq!(
            css_value_to_prop("${(p) => p.size}px"),
            PropValue::Expression("`${((p) => p.size)(props)}px`".into())
        );
        assert_eq!(
            css_value_to_prop("0 ${function (p) { return p.x }} ${items.map((i) => i)}"),
            PropValue::Expression("`0 ${(function (p) { return p.x })(props)} ${items.map((i) => i)}`".into())
        );
    }
}
