pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod serializer;


pub use error::{ParseError, ParseResult};
pub use lexer::{significant_tokens, tokenize, JsToken};
pub use parser::{parse, parse_with_options, ParseOptions, Parser};
pub use serializer::{serialize, serialize_element, Serializer};

#[cfg(feature = "pretty-errors")]
pub use error::format_error;
