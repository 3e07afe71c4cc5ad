use thiserror::Error;

pub type ParseResult<T> = Result<T, ParseError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Unterminated string literal at {pos}")]
    UnterminatedString { pos: usize },

    #[error("Unterminated template literal at {pos}")]
    UnterminatedTemplate { pos: usize },

    #[error("Unterminated comment at {pos}")]
    UnterminatedComment { pos: usize },

    #[error("Unclosed element <{name}> at {pos}")]
    UnclosedElement { pos: usize, name: String },

    #[error("Mismatched closing tag at {pos}: expected </{expected}>, found </{found}>")]
    MismatchedClosingTag {
        pos: usize,
        expected: String,
        found: String,
    },

    #[error("Unexpected end of file at {pos}")]
    UnexpectedEof { pos: usize },

    #[error("Invalid syntax at {pos}: {message}")]
    InvalidSyntax { pos: usize, message: String },
}

impl ParseError {
    pub fn unclosed_element(pos: usize, name: impl Into<String>) -> Self {
        Self::UnclosedElement {
            pos,
            name: name.into(),
        }
    }

    pub fn mismatched_closing_tag(pos: usize, expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::MismatchedClosingTag {
            pos,
            expected: expected.into(),
            found: found.into(),
        }
    }

    pub fn unexpected_eof(pos: usize) -> Self {
        Self::UnexpectedEof { pos }
    }

    pub fn invalid_syntax(pos: usize, message: impl Into<String>) -> Self {
        Self::InvalidSyntax {
            pos,
            message: message.into(),
        }
    }

    /// Byte offset the error points at
    pub fn pos(&self) -> usize {
        match self {
            Self::UnterminatedString { pos }
            | Self::UnterminatedTemplate { pos }
            | Self::UnterminatedComment { pos }
            | Self::UnclosedElement { pos, .. }
            | Self::MismatchedClosingTag { pos, .. }
            | Self::UnexpectedEof { pos }
            | Self::InvalidSyntax { pos, .. } => *pos,
        }
    }
}

/// Pretty-print an error with source context using ariadne
#[cfg(feature = "pretty-errors")]
pub fn format_error(source: &str, filename: &str, error: &ParseError) -> String {
    use ariadne::{Color, Label, Report, ReportKind, Source};

    // ariadne spans count chars, error positions count bytes
    let start = char_offset(source, error.pos());
    let end = (start + 1).min(source.chars().count());

    let label = match error {
        ParseError::MismatchedClosingTag { expected, .. } => format!("expected </{}>", expected),
        ParseError::UnclosedElement { name, .. } => format!("<{}> opened here", name),
        ParseError::InvalidSyntax { message, .. } => message.clone(),
        _ => "starts here".to_string(),
    };

    let report = Report::build(ReportKind::Error, filename, start)
        .with_message(error.to_string())
        .with_label(
            Label::new((filename, start..end))
                .with_color(Color::Red)
                .with_message(label),
        )
        .finish();

    let mut output = Vec::new();
    if report.write((filename, Source::from(source)), &mut output).is_err() {
        return error.to_string();
    }

    String::from_utf8(output).unwrap_or_else(|_| error.to_string())
}

/// Char index of a byte position, clamped to the source
#[cfg(feature = "pretty-errors")]
fn char_offset(source: &str, pos: usize) -> usize {
    source
        .char_indices()
        .take_while(|(index, _)| *index < pos)
        .count()
}
