use std::fmt;

use thiserror::Error;

/// Errors raised while configuring a wrapper.
///
/// Reading and writing a wrapped field never fails. Only building a policy
/// (bounds, date patterns) or loading a configuration file can.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WrapperError {
    #[error("Invalid bounds: minimum {min} is greater than maximum {max}")]
    InvertedBounds { min: String, max: String },

    #[error("Unsupported field '{field}' in date pattern \"{pattern}\"")]
    UnsupportedPatternField { field: char, pattern: String },

    #[error("Unterminated quoted literal in date pattern \"{pattern}\"")]
    UnterminatedQuote { pattern: String },

    #[error("Failed to parse config at line {line}, column {col}: {message}")]
    Parse {
        line: usize,
        col: usize,
        message: String,
    },

    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },
}

impl WrapperError {
    pub fn inverted_bounds(min: impl fmt::Debug, max: impl fmt::Debug) -> Self {
        Self::InvertedBounds {
            min: format!("{min:?}"),
            max: format!("{max:?}"),
        }
    }

    pub fn unsupported_field(field: char, pattern: impl Into<String>) -> Self {
        Self::UnsupportedPatternField {
            field,
            pattern: pattern.into(),
        }
    }

    pub fn parse_error(line: usize, col: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            col,
            message: message.into(),
        }
    }

    /// Locates a TOML error in `source`. Line and column are 1-based, like
    /// `serde_json`'s. Errors without a span report `0, 0` and keep toml's
    /// full rendering as the message.
    pub fn from_toml(err: toml::de::Error, source: &str) -> Self {
        let before = err.span().and_then(|span| source.get(..span.start));
        match before {
            Some(before) => {
                let line = before.matches('\n').count() + 1;
                let col = before
                    .rsplit('\n')
                    .next()
                    .map_or(0, |tail| tail.chars().count())
                    + 1;
                WrapperError::parse_error(line, col, err.message())
            }
            None => WrapperError::parse_error(0, 0, err.to_string()),
        }
    }
}

impl From<serde_json::Error> for WrapperError {
    fn from(err: serde_json::Error) -> Self {
        WrapperError::Parse {
            line: err.line(),
            col: err.column(),
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, WrapperError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverted_bounds_message_names_both_bounds() {
        let err = WrapperError::inverted_bounds(80, 10);
        assert_eq!(
            err.to_string(),
            "Invalid bounds: minimum 80 is greater than maximum 10"
        );
    }

    #[test]
    fn json_errors_keep_their_position() {
        let err: WrapperError = serde_json::from_str::<serde_json::Value>("{\n  \"a\": }")
            .unwrap_err()
            .into();
        match err {
            WrapperError::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("expected a parse error, got {other:?}"),
        }
    }

    #[test]
    fn toml_errors_are_located_in_the_source() {
        let source = "[exam]\nmin = 10\nmax = = 80\n";
        let err = toml::from_str::<toml::Table>(source).unwrap_err();
        match WrapperError::from_toml(err, source) {
            WrapperError::Parse { line, col, .. } => {
                assert_eq!(line, 3);
                assert!(col > 1);
            }
            other => panic!("expected a parse error, got {other:?}"),
        }
    }

    #[test]
    fn bounds_render_without_display() {
        let err = WrapperError::inverted_bounds(2.5, 0.5);
        assert_eq!(
            err.to_string(),
            "Invalid bounds: minimum 2.5 is greater than maximum 0.5"
        );
    }
}
