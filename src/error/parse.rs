//! Errors for textual option values (CLI flags, environment, deep links).

use thiserror::Error;

/// An option value that does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}

impl ParseError {
    pub fn new(kind: &'static str, value: impl Into<String>, expected: &'static str) -> Self {
        Self {
            kind,
            value: value.into(),
            expected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ParseError::new("export format", "xml", "json, csv, text");
        assert_eq!(
            err.to_string(),
            "unknown export format 'xml' (expected one of: json, csv, text)"
        );
    }
}
