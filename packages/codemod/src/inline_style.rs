//! `style` attributes on library elements -> flat style props

use crate::config::CodemodConfig;
use crate::css::{parse_css, CssNode};
use crate::props::PropValue;
use indexmap::IndexMap;
use propstyle_common::visitor::{walk_element_mut, VisitorMut};
use propstyle_parser::ast::{AttributeValue, JsxAttribute, JsxElement, Module};
use propstyle_parser::{significant_tokens, JsToken};
use propstyle_style::{is_custom_property, kebab_to_camel_case};
use std::ops::Range;
use tracing::{debug, instrument};

type Spanned<'src> = (JsToken<'src>, Range<usize>);

/// Flat props from a CSS declaration string such as `"color: red; margin: 0"`
pub fn style_string_to_props(style: &str) -> IndexMap<String, PropValue> {
    let mut props = IndexMap::new();

    for node in parse_css(style) {
        match node {
            CssNode::Declaration(declaration) if !is_custom_property(&declaration.property) => {
                props.insert(
                    kebab_to_camel_case(&declaration.property),
                    PropValue::Text(declaration.value),
                );
            }
            other => debug!(node = ?other, "Skipping style entry"),
        }
    }

    props
}

/// Flat props from an object literal such as `{ color: 'red', margin: 0 }`.
///
/// Returns `None` when the object uses spreads, computed keys, methods or
/// anything else that cannot be expressed as plain props.
pub fn style_object_to_props(source: &str) -> Option<IndexMap<String, PropValue>> {
    let tokens = significant_tokens(source);
    let [(JsToken::LBrace, _), body @ .., (JsToken::RBrace, _)] = tokens.as_slice() else {
        return None;
    };
    let mut props = IndexMap::new();

    for entry in split_top_level(body, JsToken::Comma) {
        let (key, value) = match entry {
            // trailing comma
            [] => continue,
            [(JsToken::Ident(name), _)] => (name.to_string(), PropValue::Expression(name.to_string())),
            [(key, _), (JsToken::Colon, _), value @ ..] if !value.is_empty() => {
                let key = match key {
                    JsToken::Ident(name) => name.to_string(),
                    JsToken::Str(literal) => simple_string(literal)?,
                    other => {
                        debug!(key = %other, "Unsupported style object key");
                        return None;
                    }
                };
                (key, literal_to_prop(source, value))
            }
            _ => {
                debug!(entry = ?entry, "Unsupported style object entry");
                return None;
            }
        };

        if is_custom_property(&key) {
            debug!(property = %key, "Skipping custom property");
            continue;
        }

        props.insert(kebab_to_camel_case(&key), value);
    }

    Some(props)
}

/// Prop for the value tokens of one entry, read back from `source`
fn literal_to_prop(source: &str, value: &[Spanned<'_>]) -> PropValue {
    if let [(JsToken::Str(literal), _)] = value {
        if let Some(text) = simple_string(literal) {
            return PropValue::Text(text);
        }
    }

    let start = value.first().map_or(0, |(_, span)| span.start);
    let end = value.last().map_or(0, |(_, span)| span.end);
    PropValue::Expression(source[start..end].to_string())
}

/// Contents of a quoted string literal token without escapes
fn simple_string(literal: &str) -> Option<String> {
    let inner = &literal[1..literal.len() - 1];
    if inner.contains('\\') {
        return None;
    }
    Some(inner.to_string())
}

/// Split `tokens` on `separator` outside brackets
fn split_top_level<'t, 's>(tokens: &'t [Spanned<'s>], separator: JsToken<'s>) -> Vec<&'t [Spanned<'s>]> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, (token, _)) in tokens.iter().enumerate() {
        match token {
            JsToken::LBrace | JsToken::LParen | JsToken::LBracket => depth += 1,
            JsToken::RBrace | JsToken::RParen | JsToken::RBracket => depth = depth.saturating_sub(1),
            _ if depth == 0 && *token == separator => {
                parts.push(&tokens[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    parts.push(&tokens[start..]);
    parts
}

/// Replaces `style` on library elements with the equivalent flat props
pub struct InlineStyleFlattener<'a> {
    config: &'a CodemodConfig,
    flattened: usize,
}

impl<'a> InlineStyleFlattener<'a> {
    pub fn new(config: &'a CodemodConfig) -> Self {
        Self { config, flattened: 0 }
    }

    pub fn flattened(&self) -> usize {
        self.flattened
    }

    fn flatten(&mut self, element: &mut JsxElement) {
        let Some(index) = element.attribute_index("style") else {
            return;
        };

        let props = match element.attributes[index].value() {
            Some(AttributeValue::Text { value, .. }) => Some(style_string_to_props(value)),
            Some(AttributeValue::Expression(module)) => {
                module.as_raw_text().and_then(|source| style_object_to_props(&source))
            }
            _ => None,
        };

        let Some(props) = props else {
            debug!(element = %element.name, "Leaving style attribute unchanged");
            return;
        };

        let leading = element.attributes[index].leading().to_string();
        let mut replacement: Vec<JsxAttribute> = props
            .iter()
            .map(|(name, value)| value.to_attribute(name))
            .collect();
        if let Some(first) = replacement.first_mut() {
            first.set_leading(leading);
        }

        element.attributes.splice(index..=index, replacement);
        self.flattened += 1;
    }
}

impl VisitorMut for InlineStyleFlattener<'_> {
    fn visit_element_mut(&mut self, element: &mut JsxElement) {
        if self.config.is_library_component(&element.name) {
            self.flatten(element);
        }
        walk_element_mut(self, element);
    }
}

/// Flatten `style` attributes across the module; returns the number replaced
#[instrument(skip_all)]
pub fn flatten_inline_styles(module: &mut Module, config: &CodemodConfig) -> usize {
    let mut flattener = InlineStyleFlattener::new(config);
    flattener.visit_module_mut(module);
    flattener.flattened()
}

#[cfg(test)]
mod tests {
    use super::*;
    use propstyle_parser::{parse, serialize};

    fn rewrite(source: &str) -> String {
        let mut module = parse(source).unwrap();
        flatten_inline_styles(&mut module, &CodemodConfig::default());
        serialize(&module)
    }

    #[test]
    fn test_object_style() {
        assert_eq!(
            rewrite("<Box style={{backgroundColor:'blue', color:'white'}} />"),
            r#"<Box backgroundColor="blue" color="white" />"#
        );
    }

    #[test]
    fn test_numbers_and_expressions() {
        assert_eq!(
            rewrite(r#"<Button id="b" style={{ padding: 8, "margin-top": "4px", color: dark ? theme.light : theme.dark, width }}>Go</Button>"#),
            r#"<Button id="b" padding={8} marginTop="4px" color={dark ? theme.light : theme.dark} width={width}>Go</Button>"#
        );
    }

    #[test]
    fn test_string_style() {
        assert_eq!(
            rewrite(r#"<Link style="color: red; text-decoration: none" href="/" />"#),
            r#"<Link color="red" textDecoration="none" href="/" />"#
        );
    }

    #[test]
    fn test_unsupported_objects_unchanged() {
        for source in [
            "<Box style={{ ...base, color: 'red' }} />",
            "<Box style={{ [key]: 'red' }} />",
            "<Box style={{ width() { return 1 } }} />",
            "<Box style={styles.card} />",
            "<Box style={{ color: }} />",
        ] {
            assert_eq!(rewrite(source), source);
        }
    }

    #[test]
    fn test_only_library_elements() {
        let source = "<div style={{ color: 'red' }}><Card style={{ color: 'red' }} /></div>";
        assert_eq!(rewrite(source), source);
    }

    #[test]
    fn test_comments_in_style_object() {
        assert_eq!(
            rewrite("<Box style={{ /* brand */ color: 'red', // spacing\n margin: 0, }} />"),
            r#"<Box color="red" margin={0} />"#
        );
    }

    #[test]
    fn test_split_top_level() {
        let tokens = significant_tokens("a: f(1, 2), b: 'x,y', c: [1, 2]");
        let parts = split_top_level(&tokens, JsToken::Comma);
        assert_eq!(parts.len(), 3);
        assert_eq!(
            parts[1].iter().map(|(token, _)| *token).collect::<Vec<_>>(),
            vec![JsToken::Ident("b"), JsToken::Colon, JsToken::Str("'x,y'")]
        );
        assert_eq!(parts[2].len(), 7);
    }
}
