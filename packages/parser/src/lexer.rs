use logos::{Lexer, Logos};
use std::fmt;
use std::ops::Range;

/// JavaScript tokens.
///
/// Trivia is kept as tokens so the parser can stay lossless. Regex literals,
/// template bodies and JSX text depend on context and have their own lexers
/// below; the parser picks one per position.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum JsToken<'src> {
    #[regex(r"[ \t\r\n\x0B\x0C]+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("/*", block_comment)]
    BlockComment,

    #[regex(r#""([^"\\\n]|\\[^\r\n]|\\\r?\n)*""#, |lex| lex.slice())]
    #[regex(r"'([^'\\\n]|\\[^\r\n]|\\\r?\n)*'", |lex| lex.slice())]
    Str(&'src str),

    // Whole template literal, including nested `${}`
    #[token("`", template)]
    Template(&'src str),

    #[regex(r"[a-zA-Z_$\u{80}-\u{10FFFF}][a-zA-Z0-9_$\u{80}-\u{10FFFF}]*", |lex| lex.slice())]
    Ident(&'src str),

    #[regex(r"[0-9][0-9a-zA-Z_.]*", |lex| lex.slice())]
    Number(&'src str),

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token("<")]
    LAngle,

    #[token(">")]
    RAngle,

    #[token("/")]
    Slash,

    #[token(".")]
    Dot,

    #[token("...")]
    Spread,

    #[token("=>")]
    Arrow,

    #[token("=")]
    Equals,

    #[token(":")]
    Colon,

    #[token(",")]
    Comma,

    #[token(";")]
    Semicolon,

    #[token("?")]
    Question,

    #[regex(
        r"[-+*%&|^!~@#]|\+\+|--|\*\*|&&|\|\||\?\?|\?\.|<<|>>>?|[-+*%&|^!<>/]=|<<=|>>>?=|\*\*=|&&=|\|\|=|\?\?=|===?|!==",
        |lex| lex.slice()
    )]
    Operator(&'src str),
}

fn block_comment<'src>(lex: &mut Lexer<'src, JsToken<'src>>) -> bool {
    match lex.remainder().find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            true
        }
        None => false,
    }
}

fn template<'src>(lex: &mut Lexer<'src, JsToken<'src>>) -> Option<&'src str> {
    let len = template_len(lex.remainder())?;
    lex.bump(len);
    Some(lex.slice())
}

impl<'src> JsToken<'src> {
    /// Whitespace and comments
    pub fn is_trivia(&self) -> bool {
        matches!(self, JsToken::Whitespace | JsToken::LineComment | JsToken::BlockComment)
    }
}

impl<'src> fmt::Display for JsToken<'src> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsToken::Whitespace => write!(f, "whitespace"),
            JsToken::LineComment | JsToken::BlockComment => write!(f, "comment"),
            JsToken::Str(s) => write!(f, "string {}", s),
            JsToken::Template(_) => write!(f, "template literal"),
            JsToken::Ident(s) => write!(f, "identifier '{}'", s),
            JsToken::Number(s) => write!(f, "number {}", s),
            JsToken::LBrace => write!(f, "{{"),
            JsToken::RBrace => write!(f, "}}"),
            JsToken::LParen => write!(f, "("),
            JsToken::RParen => write!(f, ")"),
            JsToken::LBracket => write!(f, "["),
            JsToken::RBracket => write!(f, "]"),
            JsToken::LAngle => write!(f, "<"),
            JsToken::RAngle => write!(f, ">"),
            JsToken::Slash => write!(f, "/"),
            JsToken::Dot => write!(f, "."),
            JsToken::Spread => write!(f, "..."),
            JsToken::Arrow => write!(f, "=>"),
            JsToken::Equals => write!(f, "="),
            JsToken::Colon => write!(f, ":"),
            JsToken::Comma => write!(f, ","),
            JsToken::Semicolon => write!(f, ";"),
            JsToken::Question => write!(f, "?"),
            JsToken::Operator(s) => write!(f, "{}", s),
        }
    }
}

/// Pieces of a template literal body, after the opening backtick
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub(crate) enum TemplatePart {
    #[token("`")]
    End,

    #[token("${")]
    InterpolationStart,

    #[regex(r"\\[^\n]|\\\n")]
    Escape,

    #[token("$")]
    Dollar,

    #[regex(r"[^`\\$]+")]
    Text,
}

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum RegexLiteral {
    #[regex(r"/([^/\\\[\n]|\\[^\n]|\[([^\]\\\n]|\\[^\n])*\])+/[a-zA-Z]*")]
    Literal,
}

/// Runs of JSX child text
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum JsxText {
    #[regex(r"[^<{]+")]
    Text,
}

/// JSX attribute strings; no escapes, newlines allowed
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum JsxString {
    #[regex(r#""[^"]*""#)]
    #[regex(r"'[^']*'")]
    Literal,
}

/// All tokens of `source` with their byte ranges; unlexable input is dropped
pub fn tokenize(source: &str) -> Vec<(JsToken<'_>, Range<usize>)> {
    let mut lexer = JsToken::lexer(source);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next() {
        if let Ok(token) = token {
            tokens.push((token, lexer.span()));
        }
    }

    tokens
}

/// Non-trivia tokens of `source`
pub fn significant_tokens(source: &str) -> Vec<(JsToken<'_>, Range<usize>)> {
    tokenize(source)
        .into_iter()
        .filter(|(token, _)| !token.is_trivia())
        .collect()
}

/// Length of an interpolation body through its closing `}`, given the text
/// right after `${`
pub fn interpolation_len(source: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut lexer = JsToken::lexer(source);

    while let Some(token) = lexer.next() {
        match token {
            Ok(JsToken::LBrace) => depth += 1,
            Ok(JsToken::RBrace) if depth == 0 => return Some(lexer.span().end),
            Ok(JsToken::RBrace) => depth -= 1,
            _ => {}
        }
    }

    None
}

/// Length of a template body through the closing backtick
pub(crate) fn template_len(body: &str) -> Option<usize> {
    let mut pos = 0;

    loop {
        let (part, span) = template_part(body, pos)?;
        pos = span.end;
        match part {
            TemplatePart::End => return Some(pos),
            TemplatePart::InterpolationStart => pos += interpolation_len(&body[pos..])?,
            _ => {}
        }
    }
}

/// Next template part at `pos`
pub(crate) fn template_part(source: &str, pos: usize) -> Option<(TemplatePart, Range<usize>)> {
    let mut lexer = TemplatePart::lexer(&source[pos..]);
    let part = lexer.next()?.ok()?;
    let span = lexer.span();
    Some((part, pos + span.start..pos + span.end))
}

/// Length of a regex literal starting at the `/` of `source`
pub(crate) fn regex_literal_len(source: &str) -> Option<usize> {
    let mut lexer = RegexLiteral::lexer(source);
    match lexer.next()? {
        Ok(RegexLiteral::Literal) => Some(lexer.span().end),
        Err(()) => None,
    }
}

/// Length of the JSX text run at the start of `source`
pub(crate) fn jsx_text_len(source: &str) -> usize {
    let mut lexer = JsxText::lexer(source);
    match lexer.next() {
        Some(Ok(JsxText::Text)) => lexer.span().end,
        _ => 0,
    }
}

/// Length of the quoted JSX attribute string at the start of `source`
pub(crate) fn jsx_string_len(source: &str) -> Option<usize> {
    let mut lexer = JsxString::lexer(source);
    match lexer.next()? {
        Ok(JsxString::Literal) => Some(lexer.span().end),
        Err(()) => None,
    }
}
