use crate::ast::*;

/// Serializer converts the tree back to source text.
///
/// Raw text, attribute spacing and closing tags are stored on the nodes, so
/// a tree that was parsed and not modified serializes to the exact input.
pub struct Serializer {
    output: String,
}

impl Serializer {
    pub fn new() -> Self {
        Self {
            output: String::new(),
        }
    }

    pub fn finish(self) -> String {
        self.output
    }

    pub fn write_module(&mut self, module: &Module) {
        for item in &module.items {
            self.write_item(item);
        }
    }

    pub fn write_item(&mut self, item: &Item) {
        match item {
            Item::Raw { text } => self.output.push_str(text),
            Item::Element(element) => self.write_element(element),
            Item::Styled(styled) => self.output.push_str(&styled.raw),
        }
    }

    pub fn write_element(&mut self, element: &JsxElement) {
        self.output.push('<');
        self.output.push_str(&element.name);

        for attribute in &element.attributes {
            self.write_attribute(attribute);
        }

        self.output.push_str(&element.trailing);

        match &element.children {
            None => self.output.push_str("/>"),
            Some(children) => {
                self.output.push('>');
                for child in children {
                    self.write_child(child);
                }
                self.output.push_str("</");
                self.output.push_str(&element.closing);
                self.output.push('>');
            }
        }
    }

    fn write_attribute(&mut self, attribute: &JsxAttribute) {
        match attribute {
            JsxAttribute::Named {
                leading,
                name,
                separator,
                value,
            } => {
                self.output.push_str(leading);
                self.output.push_str(name);
                if let Some(value) = value {
                    self.output.push_str(separator);
                    self.write_attribute_value(value);
                }
            }
            JsxAttribute::Spread {
                leading,
                prefix,
                expression,
            } => {
                self.output.push_str(leading);
                self.output.push_str(prefix);
                self.write_module(expression);
                self.output.push('}');
            }
        }
    }

    fn write_attribute_value(&mut self, value: &AttributeValue) {
        match value {
            AttributeValue::Text { quote, value } => {
                self.output.push(*quote);
                self.output.push_str(value);
                self.output.push(*quote);
            }
            AttributeValue::Expression(module) => {
                self.output.push('{');
                self.write_module(module);
                self.output.push('}');
            }
            AttributeValue::Element(element) => self.write_element(element),
        }
    }

    fn write_child(&mut self, child: &JsxChild) {
        match child {
            JsxChild::Text { text } => self.output.push_str(text),
            JsxChild::Expression(module) => {
                self.output.push('{');
                self.write_module(module);
                self.output.push('}');
            }
            JsxChild::Element(element) => self.write_element(element),
        }
    }
}

impl Default for Serializer {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function to serialize a module
pub fn serialize(module: &Module) -> String {
    let mut serializer = Serializer::new();
    serializer.write_module(module);
    serializer.finish()
}

/// Serialize a single element
pub fn serialize_element(element: &JsxElement) -> String {
    let mut serializer = Serializer::new();
    serializer.write_element(element);
    serializer.finish()
}
