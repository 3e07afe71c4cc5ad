//! styled-components templates -> prop-based components

use crate::config::CodemodConfig;
use crate::css::{parse_css, CssNode, Declaration};
use crate::props::{css_value_to_prop, PropValue};
use crate::transform::PassSummary;
use indexmap::{IndexMap, IndexSet};
use once_cell::sync::Lazy;
use propstyle_common::visitor::VisitorMut;
use propstyle_parser::ast::{AttributeValue, Item, JsxAttribute, JsxElement, Module, StyledTarget, StyledTemplate};
use propstyle_style::{is_custom_property, kebab_to_camel_case};
use regex::Regex;
use tracing::{debug, instrument};

static STATE_SELECTOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^&?\s*:([A-Za-z][A-Za-z-]*)$").expect("state selector regex"));

static MIN_WIDTH_QUERY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^@media\s+(?:(?:only\s+)?screen\s+and\s+)?\(\s*min-width\s*:\s*(\d+)px\s*\)$")
        .expect("media query regex")
});

type PropMap = IndexMap<String, PropValue>;

/// Style props recovered from a template body
#[derive(Debug, Default, PartialEq)]
pub struct TemplateProps {
    pub flat: PropMap,
    pub on: IndexMap<String, PropMap>,
    pub media: IndexMap<String, PropMap>,
}

impl TemplateProps {
    /// Split a template body into flat, state and breakpoint props
    pub fn from_css(css: &str, config: &CodemodConfig) -> Self {
        let mut props = Self::default();

        for node in parse_css(css) {
            match node {
                CssNode::Declaration(declaration) => {
                    if is_custom_property(&declaration.property) {
                        debug!(property = %declaration.property, "Skipping custom property");
                        continue;
                    }
                    insert_declaration(&mut props.flat, &declaration);
                }
                CssNode::Block { prelude, children } => {
                    if let Some(captures) = STATE_SELECTOR.captures(&prelude) {
                        let state = kebab_to_camel_case(&captures[1]);
                        extend_block(props.on.entry(state).or_default(), &children);
                    } else if let Some(name) = media_breakpoint(&prelude, config) {
                        extend_block(props.media.entry(name).or_default(), &children);
                    } else {
                        debug!(selector = %prelude, "Skipping unsupported nested block");
                    }
                }
            }
        }

        props
    }

    /// `name=value` attributes in output order: flat props, `on`, `media`
    pub fn into_attributes(self) -> Vec<JsxAttribute> {
        let mut attributes: Vec<JsxAttribute> = self
            .flat
            .iter()
            .map(|(name, value)| value.to_attribute(name))
            .collect();

        for (name, blocks) in [("on", self.on), ("media", self.media)] {
            if blocks.is_empty() {
                continue;
            }
            let object = blocks
                .into_iter()
                .map(|(key, props)| (key, PropValue::Object(props)))
                .collect();
            attributes.push(PropValue::Object(object).to_attribute(name));
        }

        attributes
    }
}

fn insert_declaration(props: &mut PropMap, declaration: &Declaration) {
    props.insert(
        kebab_to_camel_case(&declaration.property),
        css_value_to_prop(&declaration.value),
    );
}

fn extend_block(props: &mut PropMap, children: &[CssNode]) {
    for child in children {
        match child {
            CssNode::Declaration(declaration) => insert_declaration(props, declaration),
            CssNode::Block { prelude, .. } => {
                debug!(selector = %prelude, "Skipping block nested in a rule");
            }
        }
    }
}

fn media_breakpoint(prelude: &str, config: &CodemodConfig) -> Option<String> {
    let captures = MIN_WIDTH_QUERY.captures(prelude)?;
    let width: u32 = captures[1].parse().ok()?;

    match config.breakpoints.name_for_min_width(width) {
        Some(name) => Some(name.to_string()),
        None => {
            debug!(width, "No breakpoint matches media query");
            None
        }
    }
}

/// Replaces styled tagged templates with `(props) => <Component ... />`
pub struct StyledRewriter<'a> {
    config: &'a CodemodConfig,
    rewritten: usize,
    components: IndexSet<String>,
}

impl<'a> StyledRewriter<'a> {
    pub fn new(config: &'a CodemodConfig) -> Self {
        Self {
            config,
            rewritten: 0,
            components: IndexSet::new(),
        }
    }

    pub fn rewritten(&self) -> usize {
        self.rewritten
    }

    pub fn into_summary(self) -> PassSummary {
        PassSummary {
            changed: self.rewritten,
            components: self.components,
        }
    }

    /// Build the element that replaces a styled template
    pub fn rewrite(&mut self, styled: &StyledTemplate) -> JsxElement {
        let mut attributes = Vec::new();

        let name = match &styled.target {
            StyledTarget::Tag(tag) => match self.config.mapped_component(tag) {
                Some(component) => component.to_string(),
                None => {
                    attributes.push(PropValue::Text(tag.clone()).to_attribute("as"));
                    self.config.wrapper.clone()
                }
            },
            StyledTarget::Component(component) => {
                attributes.push(JsxAttribute::named(
                    "as",
                    Some(AttributeValue::expression(component.as_str())),
                ));
                self.config.wrapper.clone()
            }
        };

        attributes.extend(TemplateProps::from_css(&styled.css, self.config).into_attributes());
        attributes.push(JsxAttribute::spread("props"));

        let mut element = JsxElement::new(name);
        element.attributes = attributes;
        element.trailing = " ".to_string();
        element.span = styled.span;

        debug!(component = %element.name, attributes = element.attributes.len(), "Rewrote styled template");
        self.rewritten += 1;
        self.components.insert(element.name.clone());

        element
    }
}

impl VisitorMut for StyledRewriter<'_> {
    fn visit_module_mut(&mut self, module: &mut Module) {
        let items = std::mem::take(&mut module.items);

        for item in items {
            match item {
                Item::Styled(styled) => {
                    let element = self.rewrite(&styled);
                    module.items.push(Item::Raw {
                        text: "(props) => ".to_string(),
                    });
                    module.items.push(Item::Element(element));
                }
                Item::Element(mut element) => {
                    self.visit_element_mut(&mut element);
                    module.items.push(Item::Element(element));
                }
                raw @ Item::Raw { .. } => module.items.push(raw),
            }
        }
    }
}

/// Rewrite every styled template in the module
#[instrument(skip_all)]
pub fn rewrite_styled(module: &mut Module, config: &CodemodConfig) -> PassSummary {
    let mut rewriter = StyledRewriter::new(config);
    rewriter.visit_module_mut(module);
    rewriter.into_summary()
}

#[cfg(test)]
mod tests {
    use super::*;
    use propstyle_parser::{parse, serialize};

    fn rewrite(source: &str) -> String {
        let config = CodemodConfig::default();
        let mut module = parse(source).unwrap();
        rewrite_styled(&mut module, &config);
        serialize(&module)
    }

    #[test]
    fn test_flat_props() {
        assert_eq!(
            rewrite("const Title = styled.h1`\n  font-size: 24px;\n  color: red;\n`;"),
            r#"const Title = (props) => <Box as="h1" fontSize="24px" color="red" {...props} />;"#
        );
    }

    #[test]
    fn test_mapped_tag_and_component_targets() {
        assert_eq!(
            rewrite("const A = styled.button`padding: 4px;`;"),
            r#"const A = (props) => <Button padding="4px" {...props} />;"#
        );
        assert_eq!(
            rewrite("const B = styled(Card)`margin: 0;`;"),
            r#"const B = (props) => <Box as={Card} margin="0" {...props} />;"#
        );
        assert_eq!(
            rewrite("const C = styled('section')``;"),
            r#"const C = (props) => <Box as="section" {...props} />;"#
        );
    }

    #[test]
    fn test_states_and_media() {
        let source = "const Title = styled.h1`
  font-size: 24px;
  &:hover { color: blue; }
  @media (min-width: 768px) { font-size: 32px; }
`;";
        assert_eq!(
            rewrite(source),
            r#"const Title = (props) => <Box as="h1" fontSize="24px" on={{ hover: { color: "blue" } }} media={{ md: { fontSize: "32px" } }} {...props} />;"#
        );
    }

    #[test]
    fn test_interpolations_and_quotes() {
        let source = "const T = styled.p`color: ${(p) => p.color}; border: ${w}px solid; font-family: \"Inter\", sans-serif;`;";
        assert_eq!(
            rewrite(source),
            r#"const T = (props) => <Box as="p" color={((p) => p.color)(props)} border={`${w}px solid`} fontFamily={"\"Inter\", sans-serif"} {...props} />;"#
        );
    }

    #[test]
    fn test_unsupported_blocks_skipped() {
        let config = CodemodConfig::default();
        let css = "
            --gap: 4px;
            color: red;
            & > span { color: blue; }
            @media (min-width: 1000px) { color: green; }
            @media (min-width: 576px) and (max-width: 767px) { color: pink; }
            &::before { content: ''; }
            &:focus-visible { outline-width: 2px; }
        ";
        let props = TemplateProps::from_css(css, &config);

        assert_eq!(props.flat.keys().collect::<Vec<_>>(), vec!["color"]);
        assert!(props.media.is_empty());
        assert_eq!(props.on.keys().collect::<Vec<_>>(), vec!["focusVisible"]);
        assert_eq!(
            props.on["focusVisible"]["outlineWidth"],
            PropValue::Text("2px".into())
        );
    }

    #[test]
    fn test_nested_styled_in_jsx() {
        let config = CodemodConfig::default();
        let mut module = parse("render(<Frame>{make(styled.div`color: red;`)}</Frame>)").unwrap();
        let mut rewriter = StyledRewriter::new(&config);
        rewriter.visit_module_mut(&mut module);

        assert_eq!(rewriter.rewritten(), 1);
        assert_eq!(
            serialize(&module),
            r#"render(<Frame>{make((props) => <Box as="div" color="red" {...props} />)}</Frame>)"#
        );
    }

    #[test]
    fn test_bare_state_selector() {
        assert_eq!(
            rewrite("const A = styled.a`color: red; :hover { color: blue; } & :active { color: navy; }`;"),
            r#"const A = (props) => <Link color="red" on={{ hover: { color: "blue" }, active: { color: "navy" } }} {...props} />;"#
        );
    }

    #[test]
    fn test_summary_lists_components() {
        let mut module = parse("const A = styled.p`margin: 0;`; const B = styled.a``; const C = styled.h2``;").unwrap();
        let summary = rewrite_styled(&mut module, &CodemodConfig::default());

        assert_eq!(summary.changed, 3);
        assert_eq!(summary.components.iter().collect::<Vec<_>>(), vec!["Box", "Link"]);
    }
}
