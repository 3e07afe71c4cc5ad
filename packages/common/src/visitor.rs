use propstyle_parser::ast::*;

/// Visitor pattern for traversing the syntax tree immutably
///
/// This trait provides default implementations that walk the entire tree,
/// including JSX nested inside expression containers and attribute values.
/// Override specific visit_* methods to perform custom actions on nodes.
pub trait Visitor: Sized {
    fn visit_module(&mut self, module: &Module) {
        walk_module(self, module);
    }

    fn visit_raw(&mut self, _text: &str) {
        // Leaf node, no children to walk
    }

    fn visit_element(&mut self, element: &JsxElement) {
        walk_element(self, element);
    }

    fn visit_attribute(&mut self, attribute: &JsxAttribute) {
        walk_attribute(self, attribute);
    }

    fn visit_child(&mut self, child: &JsxChild) {
        walk_child(self, child);
    }

    fn visit_styled(&mut self, _styled: &StyledTemplate) {
        // Leaf node, no children to walk
    }
}

/// Mutable visitor pattern for transforming the syntax tree
///
/// Similar to Visitor, but provides mutable access to nodes.
/// Override `visit_module_mut` to replace items rather than edit them.
pub trait VisitorMut: Sized {
    fn visit_module_mut(&mut self, module: &mut Module) {
        walk_module_mut(self, module);
    }

    fn visit_raw_mut(&mut self, _text: &mut String) {
        // Leaf node, no children to walk
    }

    fn visit_element_mut(&mut self, element: &mut JsxElement) {
        walk_element_mut(self, element);
    }

    fn visit_attribute_mut(&mut self, attribute: &mut JsxAttribute) {
        walk_attribute_mut(self, attribute);
    }

    fn visit_child_mut(&mut self, child: &mut JsxChild) {
        walk_child_mut(self, child);
    }

    fn visit_styled_mut(&mut self, _styled: &mut StyledTemplate) {
        // Leaf node, no children to walk
    }
}

// Default walk implementations for immutable visitor

pub fn walk_module<V: Visitor>(visitor: &mut V, module: &Module) {
    for item in &module.items {
        match item {
            Item::Raw { text } => visitor.visit_raw(text),
            Item::Element(element) => visitor.visit_element(element),
            Item::Styled(styled) => visitor.visit_styled(styled),
        }
    }
}

pub fn walk_element<V: Visitor>(visitor: &mut V, element: &JsxElement) {
    for attribute in &element.attributes {
        visitor.visit_attribute(attribute);
    }

    if let Some(children) = &element.children {
        for child in children {
            visitor.visit_child(child);
        }
    }
}

pub fn walk_attribute<V: Visitor>(visitor: &mut V, attribute: &JsxAttribute) {
    match attribute {
        JsxAttribute::Named { value, .. } => match value {
            Some(AttributeValue::Expression(module)) => visitor.visit_module(module),
            Some(AttributeValue::Element(element)) => visitor.visit_element(element),
            Some(AttributeValue::Text { .. }) | None => {
                // Leaf values
            }
        },
        JsxAttribute::Spread { expression, .. } => visitor.visit_module(expression),
    }
}

pub fn walk_child<V: Visitor>(visitor: &mut V, child: &JsxChild) {
    match child {
        JsxChild::Text { .. } => {
            // Leaf node
        }
        JsxChild::Expression(module) => visitor.visit_module(module),
        JsxChild::Element(element) => visitor.visit_element(element),
    }
}

// Default walk implementations for mutable visitor

pub fn walk_module_mut<V: VisitorMut>(visitor: &mut V, module: &mut Module) {
    for item in &mut module.items {
        match item {
            Item::Raw { text } => visitor.visit_raw_mut(text),
            Item::Element(element) => visitor.visit_element_mut(element),
            Item::Styled(styled) => visitor.visit_styled_mut(styled),
        }
    }
}

pub fn walk_element_mut<V: VisitorMut>(visitor: &mut V, element: &mut JsxElement) {
    for attribute in &mut element.attributes {
        visitor.visit_attribute_mut(attribute);
    }

    if let Some(children) = &mut element.children {
        for child in children {
            visitor.visit_child_mut(child);
        }
    }
}

pub fn walk_attribute_mut<V: VisitorMut>(visitor: &mut V, attribute: &mut JsxAttribute) {
    match attribute {
        JsxAttribute::Named { value, .. } => match value {
            Some(AttributeValue::Expression(module)) => visitor.visit_module_mut(module),
            Some(AttributeValue::Element(element)) => visitor.visit_element_mut(element),
            Some(AttributeValue::Text { .. }) | None => {
                // Leaf values
            }
        },
        JsxAttribute::Spread { expression, .. } => visitor.visit_module_mut(expression),
    }
}

pub fn walk_child_mut<V: VisitorMut>(visitor: &mut V, child: &mut JsxChild) {
    match child {
        JsxChild::Text { .. } => {
            // Leaf node
        }
        JsxChild::Expression(module) => visitor.visit_module_mut(module),
        JsxChild::Element(element) => visitor.visit_element_mut(element),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use propstyle_parser::{parse, serialize};

    #[derive(Default)]
    struct ElementNames(Vec<String>);

    impl Visitor for ElementNames {
        fn visit_element(&mut self, element: &JsxElement) {
            self.0.push(element.name.clone());
            walk_element(self, element);
        }
    }

    struct Uppercase;

    impl VisitorMut for Uppercase {
        fn visit_element_mut(&mut self, element: &mut JsxElement) {
            let upper = element.name.to_uppercase();
            element.rename(upper);
            walk_element_mut(self, element);
        }
    }

    const SOURCE: &str = r#"<div title=<b /> {...rest}>{items.map(i => <li>{i}</li>)}<span /></div>"#;

    #[test]
    fn test_visitor_reaches_nested_elements() {
        let module = parse(SOURCE).unwrap();
        let mut names = ElementNames::default();
        names.visit_module(&module);

        assert_eq!(names.0, vec!["div", "b", "li", "span"]);
    }

    #[test]
    fn test_visitor_mut_rewrites_in_place() {
        let mut module = parse(SOURCE).unwrap();
        Uppercase.visit_module_mut(&mut module);

        assert_eq!(
            serialize(&module),
            r#"<DIV title=<B /> {...rest}>{items.map(i => <LI>{i}</LI>)}<SPAN /></DIV>"#
        );
    }
}
