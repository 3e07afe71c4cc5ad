//! CSS template parsing for styled-components bodies

mod parser;
mod tokenizer;

pub use parser::{parse_css, CssNode, CssParser, Declaration};
pub use tokenizer::{tokenize, CssToken};
