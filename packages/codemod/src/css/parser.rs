use super::tokenizer::{tokenize, CssToken};
use std::ops::Range;
use tracing::debug;

/// `property: value` pair as written in the template
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CssNode {
    Declaration(Declaration),
    /// Nested rule such as `&:hover { ... }` or `@media (...) { ... }`
    Block {
        prelude: String,
        children: Vec<CssNode>,
    },
}

/// Block parser over template tokens.
///
/// Statements that do not form a `property: value` declaration (mixin
/// interpolations, stray text) are dropped.
pub struct CssParser<'src> {
    tokens: Vec<(CssToken<'src>, Range<usize>)>,
    pos: usize,
}

impl<'src> CssParser<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            tokens: tokenize(source),
            pos: 0,
        }
    }

    pub fn parse(&mut self) -> Vec<CssNode> {
        self.parse_block(false)
    }

    fn parse_block(&mut self, nested: bool) -> Vec<CssNode> {
        let mut nodes = Vec::new();
        let mut buffer = String::new();

        while let Some((token, span)) = self.advance() {
            match token {
                CssToken::LBrace => {
                    let prelude = buffer.trim().to_string();
                    buffer.clear();
                    let children = self.parse_block(true);
                    nodes.push(CssNode::Block { prelude, children });
                }
                CssToken::RBrace if nested => {
                    flush_declaration(&mut buffer, &mut nodes);
                    return nodes;
                }
                CssToken::RBrace => {
                    debug!(offset = span.start, "Ignoring unbalanced {}", token);
                }
                CssToken::Semicolon => flush_declaration(&mut buffer, &mut nodes),
                CssToken::Whitespace => {
                    if !buffer.is_empty() && !buffer.ends_with(' ') {
                        buffer.push(' ');
                    }
                }
                other => buffer.push_str(other.text()),
            }
        }

        flush_declaration(&mut buffer, &mut nodes);
        nodes
    }

    fn advance(&mut self) -> Option<(CssToken<'src>, Range<usize>)> {
        let token = self.tokens.get(self.pos).cloned();
        self.pos += 1;
        token
    }
}

fn flush_declaration(buffer: &mut String, nodes: &mut Vec<CssNode>) {
    let statement = buffer.trim();

    if !statement.is_empty() {
        match parse_declaration(statement) {
            Some(declaration) => nodes.push(CssNode::Declaration(declaration)),
            None => debug!(statement = %statement, "Skipping unrecognized CSS statement"),
        }
    }

    buffer.clear();
}

fn parse_declaration(statement: &str) -> Option<Declaration> {
    let (property, value) = statement.split_once(':')?;
    let property = property.trim();
    let value = value.trim();

    let is_property = !property.is_empty()
        && property
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');

    if !is_property || value.is_empty() {
        return None;
    }

    Some(Declaration {
        property: property.to_string(),
        value: value.to_string(),
    })
}

/// Parse a template body into declarations and nested blocks
pub fn parse_css(source: &str) -> Vec<CssNode> {
    CssParser::new(source).parse()
}
