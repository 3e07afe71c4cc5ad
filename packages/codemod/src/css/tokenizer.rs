use logos::{Lexer, Logos};
use propstyle_parser::lexer::interpolation_len;
use std::fmt;

/// Tokens of a styled-components template body
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"/\*([^*]|\*+[^*/])*\*+/")]
pub enum CssToken<'src> {
    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token(";")]
    Semicolon,

    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    #[regex(r#""([^"\\]|\\.)*""#, |lex| lex.slice())]
    #[regex(r#"'([^'\\]|\\.)*'"#, |lex| lex.slice())]
    Str(&'src str),

    // `${...}` up to its closing brace, skipping nested literals
    #[token("${", interpolation)]
    Interpolation(&'src str),

    #[regex(r#"[^{};'"\s/$]+"#, |lex| lex.slice())]
    Chunk(&'src str),

    #[token("/", |lex| lex.slice())]
    #[token("$", |lex| lex.slice())]
    Punct(&'src str),
}

fn interpolation<'src>(lex: &mut Lexer<'src, CssToken<'src>>) -> Option<&'src str> {
    let len = interpolation_len(lex.remainder())?;
    lex.bump(len);
    Some(lex.slice())
}

impl<'src> CssToken<'src> {
    /// Source text of the token; whitespace collapses to a single space
    pub fn text(&self) -> &'src str {
        match self {
            CssToken::LBrace => "{",
            CssToken::RBrace => "}",
            CssToken::Semicolon => ";",
            CssToken::Whitespace => " ",
            CssToken::Str(s) | CssToken::Interpolation(s) | CssToken::Chunk(s) | CssToken::Punct(s) => s,
        }
    }
}

impl<'src> fmt::Display for CssToken<'src> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CssToken::Whitespace => write!(f, "whitespace"),
            CssToken::Str(s) => write!(f, "string {}", s),
            CssToken::Interpolation(s) => write!(f, "interpolation {}", s),
            CssToken::Chunk(s) => write!(f, "'{}'", s),
            other => write!(f, "{}", other.text()),
        }
    }
}

/// Tokenize a template body, dropping characters that do not lex
pub fn tokenize(source: &str) -> Vec<(CssToken<'_>, std::ops::Range<usize>)> {
    let lexer = CssToken::lexer(source);
    lexer
        .spanned()
        .filter_map(|(result, span)| result.ok().map(|token| (token, span)))
        .collect()
}
