use crate::ast::*;
use crate::error::{ParseError, ParseResult};
use crate::lexer::{self, JsToken, TemplatePart};
use logos::Logos;
use std::ops::Range;

type Spanned<'src> = (JsToken<'src>, Range<usize>);

/// Keywords after which an expression (and so JSX or a regex) may start
const EXPRESSION_KEYWORDS: &[&str] = &[
    "return", "typeof", "instanceof", "in", "of", "new", "delete", "void", "throw", "case", "do",
    "else", "yield", "await",
];

/// Keywords whose parenthesized head is followed by a statement
const CONTROL_KEYWORDS: &[&str] = &["if", "while", "for", "with"];

/// Options that change what the parser recognizes
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Identifier of the styled-components factory
    pub styled_factory: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            styled_factory: "styled".to_string(),
        }
    }
}

/// Lossless parser for JS/JSX source over [`JsToken`]s.
///
/// Only JSX elements and styled tagged templates become structured nodes;
/// everything else is kept as raw text. Tokens are lexed on demand from the
/// current position because `/`, template bodies and JSX text each lex
/// differently depending on where they appear.
pub struct Parser<'src> {
    source: &'src str,
    pos: usize,
    options: ParseOptions,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, options: ParseOptions) -> Self {
        Self {
            source,
            pos: 0,
            options,
        }
    }

    /// Parse a complete source file
    pub fn parse_module(&mut self) -> ParseResult<Module> {
        let mut items = Vec::new();
        self.parse_items(&mut items, false)?;
        Ok(Module { items })
    }

    fn rest(&self) -> &'src str {
        &self.source[self.pos..]
    }

    /// Token at the current position
    fn peek(&self) -> ParseResult<Option<Spanned<'src>>> {
        let mut lexer = JsToken::lexer(self.rest());
        let Some(token) = lexer.next() else {
            return Ok(None);
        };
        let span = self.pos + lexer.span().start..self.pos + lexer.span().end;

        match token {
            Ok(token) => Ok(Some((token, span))),
            Err(()) => self.lex_error(span).map(Some),
        }
    }

    /// Like [`Parser::peek`] for positions where a lex error means "not JSX"
    fn peek_lenient(&self) -> Option<Spanned<'src>> {
        self.peek().ok().flatten()
    }

    /// Map a lexer failure to the literal it left open. Any other stray
    /// character is passed through as a one-character operator.
    fn lex_error(&self, span: Range<usize>) -> ParseResult<Spanned<'src>> {
        let pos = span.start;
        let rest = &self.source[pos..];

        if rest.starts_with("/*") {
            return Err(ParseError::UnterminatedComment { pos });
        }
        if rest.starts_with('`') {
            return Err(ParseError::UnterminatedTemplate { pos });
        }
        if rest.starts_with(['"', '\'']) {
            return Err(ParseError::UnterminatedString { pos });
        }

        let width = rest.chars().next().map_or(1, char::len_utf8);
        let end = span.end.max(pos + width);
        Ok((JsToken::Operator(&self.source[pos..end]), pos..end))
    }

    /// Consume whitespace and comments, returning their text
    fn read_trivia(&mut self) -> ParseResult<&'src str> {
        let start = self.pos;

        loop {
            let mut lexer = JsToken::lexer(self.rest());
            match lexer.next() {
                Some(Ok(token)) if token.is_trivia() => self.pos += lexer.span().end,
                Some(Err(())) if self.rest().starts_with("/*") => {
                    return Err(ParseError::UnterminatedComment { pos: self.pos });
                }
                _ => break,
            }
        }

        Ok(&self.source[start..self.pos])
    }

    /// Scan items into `items` until end of input or, inside an expression
    /// container, the unbalanced `}` that closes it (left unconsumed).
    fn parse_items(&mut self, items: &mut Vec<Item>, in_container: bool) -> ParseResult<()> {
        let mut raw_start = self.pos;
        let mut depth = 0usize;
        // Whether the last significant token can end an expression
        let mut expr_end = false;
        let mut after_dot = false;
        let mut after_control = false;
        // One entry per open paren: whether it is the head of `if (...)` etc.
        let mut parens: Vec<bool> = Vec::new();

        while let Some((token, span)) = self.peek()? {
            if token.is_trivia() {
                self.pos = span.end;
                continue;
            }

            let follows_dot = after_dot;
            let heads_control = after_control;
            after_dot = matches!(token, JsToken::Dot | JsToken::Operator("?."));
            after_control = false;
            self.pos = span.end;

            match token {
                JsToken::Template(_) => {
                    self.pos = span.start + 1;
                    self.parse_template(items, &mut raw_start)?;
                    expr_end = true;
                }
                JsToken::Slash | JsToken::Operator("/=") if !expr_end => {
                    match lexer::regex_literal_len(&self.source[span.start..]) {
                        Some(len) => {
                            self.pos = span.start + len;
                            expr_end = true;
                        }
                        None => expr_end = false,
                    }
                }
                JsToken::LBrace => {
                    depth += 1;
                    expr_end = false;
                }
                JsToken::RBrace => {
                    if depth == 0 && in_container {
                        self.pos = span.start;
                        break;
                    }
                    depth = depth.saturating_sub(1);
                    expr_end = false;
                }
                JsToken::LParen => {
                    parens.push(heads_control);
                    expr_end = false;
                }
                // `if (ok) <div />`: a statement starts after a control head
                JsToken::RParen => expr_end = !parens.pop().unwrap_or(false),
                JsToken::RBracket | JsToken::Str(_) | JsToken::Number(_) => expr_end = true,
                JsToken::LAngle if !expr_end => match self.try_parse_element(span.start)? {
                    Some(element) => {
                        self.flush_raw(items, raw_start, span.start);
                        items.push(Item::Element(element));
                        raw_start = self.pos;
                        expr_end = true;
                    }
                    None => {
                        self.pos = span.end;
                        expr_end = false;
                    }
                },
                JsToken::Ident(ident) => {
                    if ident == self.options.styled_factory && !follows_dot {
                        if let Some(styled) = self.try_parse_styled(span.start)? {
                            self.flush_raw(items, raw_start, span.start);
                            items.push(Item::Styled(styled));
                            raw_start = self.pos;
                            expr_end = true;
                            continue;
                        }
                    }

                    // `obj.return` is a property, not a keyword
                    expr_end = follows_dot || !EXPRESSION_KEYWORDS.contains(&ident);
                    after_control = !follows_dot && CONTROL_KEYWORDS.contains(&ident);
                }
                _ => expr_end = false,
            }
        }

        self.flush_raw(items, raw_start, self.pos);
        Ok(())
    }

    fn flush_raw(&self, items: &mut Vec<Item>, start: usize, end: usize) {
        if end > start {
            items.push(Item::Raw {
                text: self.source[start..end].to_string(),
            });
        }
    }

    /// Walk a template literal body, starting after its opening backtick.
    ///
    /// The literal text stays raw; items found inside `${}` are pushed to
    /// `items` in order, so `` `${render(<a />)}` `` yields an element.
    fn parse_template(&mut self, items: &mut Vec<Item>, raw_start: &mut usize) -> ParseResult<()> {
        let open = self.pos - 1;

        loop {
            let (part, span) = lexer::template_part(self.source, self.pos)
                .ok_or(ParseError::UnterminatedTemplate { pos: open })?;
            self.pos = span.end;

            match part {
                TemplatePart::End => return Ok(()),
                TemplatePart::InterpolationStart => {
                    self.flush_raw(items, *raw_start, self.pos);
                    self.parse_items(items, true)?;
                    if !self.rest().starts_with('}') {
                        return Err(ParseError::UnterminatedTemplate { pos: open });
                    }
                    *raw_start = self.pos;
                    self.pos += 1;
                }
                TemplatePart::Escape | TemplatePart::Dollar | TemplatePart::Text => {}
            }
        }
    }

    // ---------------------------------------------------------------------
    // JSX
    // ---------------------------------------------------------------------

    /// Parse an element whose `<` is at `start`. Returns `None` (position
    /// unspecified) when the opening tag does not parse, so the caller can
    /// treat `<` as an operator.
    fn try_parse_element(&mut self, start: usize) -> ParseResult<Option<JsxElement>> {
        self.pos = start + 1;

        // Fragment
        let name = if self.rest().starts_with('>') {
            String::new()
        } else {
            match self.peek_lenient() {
                Some((JsToken::Ident(_), _)) => self.read_jsx_name().to_string(),
                _ => return Ok(None),
            }
        };

        let mut attributes = Vec::new();

        let (trailing, self_closing) = loop {
            let leading = self.read_trivia()?.to_string();
            let rest = self.rest();

            if rest.starts_with('>') {
                self.pos += 1;
                break (leading, false);
            }
            if name.is_empty() {
                return Ok(None);
            }
            if rest.starts_with("/>") {
                self.pos += 2;
                break (leading, true);
            }

            match self.peek_lenient() {
                Some((JsToken::LBrace, brace)) => {
                    self.pos = brace.end;
                    self.read_trivia()?;
                    match self.peek_lenient() {
                        Some((JsToken::Spread, spread)) => self.pos = spread.end,
                        _ => return Ok(None),
                    }
                    let prefix = self.source[brace.start..self.pos].to_string();
                    let expression = self.parse_container_body()?;

                    attributes.push(JsxAttribute::Spread {
                        leading,
                        prefix,
                        expression,
                    });
                }
                Some((JsToken::Ident(_), _)) => {
                    let attr_name = self.read_jsx_name().to_string();

                    // `<T extends U>` is a TypeScript generic, not JSX
                    if attributes.is_empty() && attr_name == "extends" {
                        return Ok(None);
                    }

                    let separator_start = self.pos;
                    self.read_trivia()?;
                    if !self.rest().starts_with('=') {
                        self.pos = separator_start;
                        attributes.push(JsxAttribute::Named {
                            leading,
                            name: attr_name,
                            separator: String::new(),
                            value: None,
                        });
                        continue;
                    }
                    self.pos += 1;
                    self.read_trivia()?;
                    let separator = self.source[separator_start..self.pos].to_string();

                    let value = match self.rest().chars().next() {
                        Some(quote @ ('"' | '\'')) => self.read_jsx_string(quote)?,
                        Some('{') => {
                            self.pos += 1;
                            AttributeValue::Expression(self.parse_container_body()?)
                        }
                        Some('<') => match self.try_parse_element(self.pos)? {
                            Some(element) => AttributeValue::Element(element),
                            None => return Ok(None),
                        },
                        _ => return Ok(None),
                    };

                    attributes.push(JsxAttribute::Named {
                        leading,
                        name: attr_name,
                        separator,
                        value: Some(value),
                    });
                }
                _ => return Ok(None),
            }
        };

        let (children, closing) = if self_closing {
            (None, String::new())
        } else {
            let (children, closing) = self.parse_children(&name, start)?;
            (Some(children), closing)
        };

        Ok(Some(JsxElement {
            name,
            attributes,
            trailing,
            children,
            closing,
            span: Span::new(start, self.pos),
        }))
    }

    /// Parse children up to and including the matching closing tag.
    /// Returns the children and the text between `</` and `>`.
    fn parse_children(&mut self, name: &str, open_pos: usize) -> ParseResult<(Vec<JsxChild>, String)> {
        let mut children = Vec::new();

        loop {
            let text_len = lexer::jsx_text_len(self.rest());
            if text_len > 0 {
                children.push(JsxChild::Text {
                    text: self.rest()[..text_len].to_string(),
                });
                self.pos += text_len;
            }

            let rest = self.rest();
            if rest.is_empty() {
                return Err(ParseError::unclosed_element(open_pos, name));
            }

            if rest.starts_with('{') {
                self.pos += 1;
                children.push(JsxChild::Expression(self.parse_container_body()?));
            } else if rest.starts_with("</") {
                let close_pos = self.pos;
                self.pos += 2;
                let closing_start = self.pos;
                self.read_trivia()?;
                let found = self.read_jsx_name().to_string();
                self.read_trivia()?;
                let closing = self.source[closing_start..self.pos].to_string();

                if !self.rest().starts_with('>') {
                    return Err(ParseError::invalid_syntax(self.pos, "expected '>' after closing tag name"));
                }
                self.pos += 1;

                if found != name {
                    return Err(ParseError::mismatched_closing_tag(close_pos, name, found));
                }
                return Ok((children, closing));
            } else {
                let child_pos = self.pos;
                match self.try_parse_element(child_pos)? {
                    Some(element) => children.push(JsxChild::Element(element)),
                    None => {
                        return Err(ParseError::invalid_syntax(child_pos, "unexpected '<' in JSX children"));
                    }
                }
            }
        }
    }

    /// Parse an expression container body after its `{`, consuming the `}`
    fn parse_container_body(&mut self) -> ParseResult<Module> {
        let mut items = Vec::new();
        self.parse_items(&mut items, true)?;
        if !self.rest().starts_with('}') {
            return Err(ParseError::unexpected_eof(self.pos));
        }
        self.pos += 1;
        Ok(Module { items })
    }

    fn read_jsx_string(&mut self, quote: char) -> ParseResult<AttributeValue> {
        let start = self.pos;
        let len = lexer::jsx_string_len(self.rest()).ok_or(ParseError::UnterminatedString { pos: start })?;
        self.pos += len;

        Ok(AttributeValue::Text {
            quote,
            value: self.source[start + 1..self.pos - 1].to_string(),
        })
    }

    /// `div`, `Foo.Bar`, `data-id` or `svg:rect`
    fn read_jsx_name(&mut self) -> &'src str {
        let start = self.pos;

        while let Some((JsToken::Ident(_) | JsToken::Number(_), part)) = self.peek_lenient() {
            self.pos = part.end;
            match self.peek_lenient() {
                Some((JsToken::Dot | JsToken::Colon | JsToken::Operator("-"), separator)) => {
                    self.pos = separator.end;
                }
                _ => break,
            }
        }

        &self.source[start..self.pos]
    }

    // ---------------------------------------------------------------------
    // Styled templates
    // ---------------------------------------------------------------------

    /// Called with the position just past the factory identifier at `start`
    fn try_parse_styled(&mut self, start: usize) -> ParseResult<Option<StyledTemplate>> {
        let after_factory = self.pos;

        let Some(target) = self.read_styled_target()? else {
            self.pos = after_factory;
            return Ok(None);
        };

        self.read_trivia()?;
        if !self.rest().starts_with('`') {
            self.pos = after_factory;
            return Ok(None);
        }

        let template_start = self.pos;
        self.pos += 1;
        // Interpolations belong to the CSS text; their items are discarded
        let mut interpolated = Vec::new();
        let mut interpolated_start = self.pos;
        self.parse_template(&mut interpolated, &mut interpolated_start)?;

        Ok(Some(StyledTemplate {
            target,
            css: self.source[template_start + 1..self.pos - 1].to_string(),
            raw: self.source[start..self.pos].to_string(),
            span: Span::new(start, self.pos),
        }))
    }

    /// `.tag`, `('tag')` or `(Component)` after the factory
    fn read_styled_target(&mut self) -> ParseResult<Option<StyledTarget>> {
        self.read_trivia()?;

        match self.peek_lenient() {
            Some((JsToken::Dot, dot)) => {
                self.pos = dot.end;
                self.read_trivia()?;
                Ok(match self.peek_lenient() {
                    Some((JsToken::Ident(tag), span)) => {
                        self.pos = span.end;
                        Some(StyledTarget::Tag(tag.to_string()))
                    }
                    _ => None,
                })
            }
            Some((JsToken::LParen, paren)) => {
                self.pos = paren.end;
                self.read_trivia()?;
                let target = match self.peek_lenient() {
                    Some((JsToken::Str(literal), span)) => {
                        self.pos = span.end;
                        simple_string(literal).map(StyledTarget::Tag)
                    }
                    Some((JsToken::Ident(_), _)) => {
                        Some(StyledTarget::Component(self.read_member_path().to_string()))
                    }
                    _ => None,
                };

                self.read_trivia()?;
                match self.peek_lenient() {
                    Some((JsToken::RParen, span)) if target.is_some() => {
                        self.pos = span.end;
                        Ok(target)
                    }
                    _ => Ok(None),
                }
            }
            _ => Ok(None),
        }
    }

    /// `Card` or `Layout.Header`
    fn read_member_path(&mut self) -> &'src str {
        let start = self.pos;

        while let Some((JsToken::Ident(_), part)) = self.peek_lenient() {
            self.pos = part.end;
            match self.peek_lenient() {
                Some((JsToken::Dot, dot)) => self.pos = dot.end,
                _ => break,
            }
        }

        &self.source[start..self.pos]
    }
}

/// Contents of a quoted string literal without escapes, e.g. `'div'`
fn simple_string(literal: &str) -> Option<String> {
    let inner = &literal[1..literal.len() - 1];
    if inner.contains('\\') {
        return None;
    }
    Some(inner.to_string())
}

/// Parse source text with default options
pub fn parse(source: &str) -> ParseResult<Module> {
    parse_with_options(source, ParseOptions::default())
}

pub fn parse_with_options(source: &str, options: ParseOptions) -> ParseResult<Module> {
    let mut parser = Parser::new(source, options);
    parser.parse_module()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn elements(module: &Module) -> Vec<&JsxElement> {
        module
            .items
            .iter()
            .filter_map(|item| match item {
                Item::Element(element) => Some(element),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_plain_js_is_raw() {
        let source = "const a = b < c && d > e;\nif (x < 10) { y(); }";
        let module = parse(source).unwrap();
        assert_eq!(module.items.len(), 1);
        assert!(matches!(&module.items[0], Item::Raw { text } if text == source));
    }

    #[test]
    fn test_simple_element() {
        let module = parse(r#"const el = <button className="x">Go</button>;"#).unwrap();
        let found = elements(&module);
        assert_eq!(found.len(), 1);

        let button = found[0];
        assert_eq!(button.name, "button");
        assert_eq!(button.attributes.len(), 1);
        assert_eq!(
            button.attribute("className").and_then(|a| a.value()),
            Some(&AttributeValue::Text {
                quote: '"',
                value: "x".to_string()
            })
        );
        assert_eq!(button.children.as_ref().map(|c| c.len()), Some(1));
    }

    #[test]
    fn test_self_closing_and_fragment() {
        let module = parse("return <><img src={url} /><br/></>;").unwrap();
        let fragment = elements(&module)[0];
        assert!(fragment.is_fragment());

        let children = fragment.children.as_ref().unwrap();
        assert_eq!(children.len(), 2);
        match &children[0] {
            JsxChild::Element(img) => {
                assert_eq!(img.name, "img");
                assert!(img.children.is_none());
                assert_eq!(img.trailing, " ");
            }
            other => panic!("expected element, got {:?}", other),
        }
    }

    #[test]
    fn test_nested_jsx_in_expression() {
        let module = parse("<ul>{items.map(i => <li key={i}>{i}</li>)}</ul>").unwrap();
        let ul = elements(&module)[0];
        let children = ul.children.as_ref().unwrap();

        match &children[0] {
            JsxChild::Expression(inner) => {
                let li = elements(inner)[0];
                assert_eq!(li.name, "li");
            }
            other => panic!("expected expression, got {:?}", other),
        }
    }

    #[test]
    fn test_strings_and_comments_are_opaque() {
        let source = "const s = '<div>'; // <span>\n/* <p> */ const t = `<a>${'<b>'}`;";
        let module = parse(source).unwrap();
        assert!(elements(&module).is_empty());
    }

    #[test]
    fn test_regex_literal() {
        let module = parse("const re = /<div>/g; const x = a / b; const el = <i />;").unwrap();
        let found = elements(&module);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "i");
    }

    #[test]
    fn test_typescript_generics_stay_raw() {
        let source = "const f = <T,>(x: T) => x;\nconst g = <T extends object>(x: T) => x;\nuseState<string>('');";
        let module = parse(source).unwrap();
        assert!(elements(&module).is_empty());
    }

    #[test]
    fn test_styled_member_form() {
        let module = parse("const Title = styled.h1`\n  color: red;\n`;").unwrap();
        let styled = module
            .items
            .iter()
            .find_map(|item| match item {
                Item::Styled(styled) => Some(styled),
                _ => None,
            })
            .unwrap();

        assert_eq!(styled.target, StyledTarget::Tag("h1".to_string()));
        assert_eq!(styled.css, "\n  color: red;\n");
        assert_eq!(styled.raw, "styled.h1`\n  color: red;\n`");
    }

    #[test]
    fn test_styled_call_forms() {
        let module = parse("const A = styled('div')`a: b;`; const B = styled(Card)`c: d;`;").unwrap();
        let targets: Vec<_> = module
            .items
            .iter()
            .filter_map(|item| match item {
                Item::Styled(styled) => Some(styled.target.clone()),
                _ => None,
            })
            .collect();

        assert_eq!(
            targets,
            vec![
                StyledTarget::Tag("div".to_string()),
                StyledTarget::Component("Card".to_string())
            ]
        );
    }

    #[test]
    fn test_styled_unmatched_forms_stay_raw() {
        let module = parse("const A = styled.div.attrs({})`a: b;`; theme.styled`x`; styled;").unwrap();
        assert!(module.items.iter().all(|item| matches!(item, Item::Raw { .. })));
    }

    #[test]
    fn test_custom_factory() {
        let options = ParseOptions {
            styled_factory: "emotion".to_string(),
        };
        let module = parse_with_options("const A = emotion.div`a: b;`;", options).unwrap();
        assert!(module.items.iter().any(|item| matches!(item, Item::Styled(_))));
    }

    #[test]
    fn test_mismatched_closing_tag() {
        let err = parse("<div><span></div>").unwrap_err();
        assert!(matches!(
            err,
            ParseError::MismatchedClosingTag { ref expected, ref found, .. }
                if expected == "span" && found == "div"
        ));
    }

    #[test]
    fn test_unclosed_element() {
        let err = parse("const a = <div>hello").unwrap_err();
        assert!(matches!(err, ParseError::UnclosedElement { pos: 10, .. }));
    }

    #[test]
    fn test_unterminated_string() {
        let err = parse("const a = 'oops\n").unwrap_err();
        assert_eq!(err, ParseError::UnterminatedString { pos: 10 });
    }

    #[test]
    fn test_unterminated_comment() {
        assert!(matches!(
            parse("/* never closed").unwrap_err(),
            ParseError::UnterminatedComment { pos: 0 }
        ));
    }

    #[test]
    fn test_comments_inside_tags() {
        let source = "const a = <div /* note */ className=\"x\" // why\n>hi</div>;";
        let module = parse(source).unwrap();
        let div = elements(&module)[0];

        assert_eq!(div.name, "div");
        assert_eq!(div.attributes[0].leading(), " /* note */ ");
        assert_eq!(div.trailing, " // why\n");
        assert_eq!(crate::serialize(&module), source);
    }

    #[test]
    fn test_element_after_control_head() {
        let module = parse("if (ok) <div />;\nwhile (busy()) <Spinner />;").unwrap();
        let names: Vec<_> = elements(&module).iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["div", "Spinner"]);

        let module = parse("const x = (a) < b; obj.if(c) < d;").unwrap();
        assert!(elements(&module).is_empty());
    }

    #[test]
    fn test_elements_inside_template_interpolations() {
        let source = "const s = `${render(<span />)} and ${`${<b>x</b>}`}`;";
        let module = parse(source).unwrap();
        let names: Vec<_> = elements(&module).iter().map(|e| e.name.as_str()).collect();

        assert_eq!(names, vec!["span", "b"]);
        assert_eq!(crate::serialize(&module), source);
    }

    #[test]
    fn test_unterminated_template() {
        assert_eq!(
            parse("const t = `a ${b}").unwrap_err(),
            ParseError::UnterminatedTemplate { pos: 10 }
        );
    }
}
