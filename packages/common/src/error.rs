use propstyle_parser::ParseError;
use thiserror::Error;

/// Common error type shared by the propstyle crates
#[derive(Error, Debug)]
pub enum CommonError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sources_convert() {
        let err: CommonError = ParseError::unexpected_eof(3).into();
        assert!(matches!(err, CommonError::Parse(_)));
        assert!(err.to_string().starts_with("Parse error: "));

        let err: CommonError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert!(matches!(err, CommonError::Config(_)));
    }
}
