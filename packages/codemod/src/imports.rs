//! Import bookkeeping around the rewrite passes

use propstyle_common::visitor::Visitor;
use propstyle_parser::ast::{Item, Module};
use propstyle_parser::{significant_tokens, JsToken};
use std::collections::BTreeSet;
use std::ops::Range;
use tracing::debug;

const STYLED_MODULE: &str = "styled-components";

/// Collects the raw JS text of a module, including nested expressions
#[derive(Default)]
struct RawText(String);

impl Visitor for RawText {
    fn visit_raw(&mut self, text: &str) {
        self.0.push_str(text);
        self.0.push('\n');
    }
}

/// `import <factory>[, { ... }] from "styled-components";` in a piece of text
#[derive(Debug, PartialEq)]
struct StyledImport {
    /// Statement range, widened to its indentation and line break
    range: Range<usize>,
    indent: String,
    /// `{ css }` when the statement also has named imports
    named: Option<String>,
    /// The module specifier as written, quotes included
    specifier: String,
}

impl StyledImport {
    /// Text left behind once the default import is gone
    fn replacement(&self) -> String {
        match &self.named {
            Some(named) => format!("{}import {} from {};\n", self.indent, named, self.specifier),
            None => String::new(),
        }
    }
}

fn module_specifier(literal: &str) -> &str {
    &literal[1..literal.len() - 1]
}

fn find_styled_import(text: &str, factory: &str) -> Option<StyledImport> {
    let tokens = significant_tokens(text);

    (0..tokens.len()).find_map(|start| {
        if start > 0 && matches!(tokens[start - 1].0, JsToken::Dot) {
            return None;
        }

        let mut rest = tokens[start..].iter();
        let (JsToken::Ident("import"), import) = rest.next()? else {
            return None;
        };
        if rest.next()?.0 != JsToken::Ident(factory) {
            return None;
        }

        let mut next = rest.next()?;
        let mut named = None;
        if next.0 == JsToken::Comma {
            let (JsToken::LBrace, open) = rest.next()? else {
                return None;
            };
            let (_, close) = rest.by_ref().find(|(token, _)| *token == JsToken::RBrace)?;
            named = Some(text[open.start..close.end].to_string());
            next = rest.next()?;
        }

        if next.0 != JsToken::Ident("from") {
            return None;
        }
        let (JsToken::Str(literal), specifier) = rest.next()? else {
            return None;
        };
        if module_specifier(literal) != STYLED_MODULE {
            return None;
        }

        let mut end = specifier.end;
        if let Some((JsToken::Semicolon, semicolon)) = rest.next() {
            end = semicolon.end;
        }

        Some(StyledImport {
            range: widen_to_line(text, import.start..end),
            indent: line_indent(text, import.start).to_string(),
            named,
            specifier: literal.to_string(),
        })
    })
}

/// Indentation before `pos` when nothing else precedes it on its line
fn line_indent(text: &str, pos: usize) -> &str {
    let line_start = text[..pos].rfind('\n').map_or(0, |i| i + 1);
    let indent = &text[line_start..pos];
    if indent.chars().all(|c| c == ' ' || c == '\t') {
        indent
    } else {
        ""
    }
}

fn widen_to_line(text: &str, range: Range<usize>) -> Range<usize> {
    let start = range.start - line_indent(text, range.start).len();
    let after = &text[range.end..];
    let mut end = range.end + after.len() - after.trim_start_matches([' ', '\t']).len();

    if text[end..].starts_with("\r\n") {
        end += 2;
    } else if text[end..].starts_with('\n') {
        end += 1;
    }

    start..end
}

/// Whether `ident` is referenced as an identifier, not as a property
fn uses_identifier(text: &str, ident: &str) -> bool {
    let tokens = significant_tokens(text);

    tokens.iter().enumerate().any(|(i, (token, _))| {
        *token == JsToken::Ident(ident)
            && !(i > 0 && matches!(tokens[i - 1].0, JsToken::Dot | JsToken::Operator("?.")))
    })
}

/// Remove the default styled-components import once the factory is unused.
///
/// Named imports on the same statement (`import styled, { css } from ...`)
/// are kept. Returns whether the module changed.
pub fn remove_styled_import(module: &mut Module, factory: &str) -> bool {
    let mut raw = RawText::default();
    raw.visit_module(module);

    let Some(found) = find_styled_import(&raw.0, factory) else {
        return false;
    };
    let mut remaining = raw.0;
    remaining.replace_range(found.range, "");
    if uses_identifier(&remaining, factory) {
        debug!(factory, "Factory still referenced, keeping import");
        return false;
    }

    for item in &mut module.items {
        if let Item::Raw { text } = item {
            if let Some(found) = find_styled_import(text, factory) {
                text.replace_range(found.range.clone(), &found.replacement());
                debug!(factory, "Removed styled-components import");
                return true;
            }
        }
    }

    false
}

/// Whether some import statement already loads `source`
fn imports_from(text: &str, source: &str) -> bool {
    significant_tokens(text).windows(2).any(|pair| {
        matches!(
            pair,
            [(JsToken::Ident("from"), _), (JsToken::Str(literal), _)] if module_specifier(literal) == source
        )
    })
}

/// Prepend `import { A, B } from "<source>";` unless the source is already imported
pub fn add_library_import(module: &mut Module, source: &str, components: &BTreeSet<String>) -> bool {
    if components.is_empty() {
        return false;
    }

    let mut raw = RawText::default();
    raw.visit_module(module);
    if imports_from(&raw.0, source) {
        debug!(source, "Library import already present");
        return false;
    }

    let names: Vec<&str> = components.iter().map(String::as_str).collect();
    let line = format!("import {{ {} }} from \"{}\";\n", names.join(", "), source);
    module.items.insert(0, Item::Raw { text: line });
    true
}
