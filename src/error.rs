//! Error types for k2suffix.

use thiserror::Error;

/// Error type for resolving domain names.
#[derive(Error, Debug)]
pub enum Error {
    /// Name is empty after lowercasing
    #[error("name is blank")]
    EmptyName,

    /// Name starts with a dot
    #[error("name {0} starts with a dot")]
    LeadingDot(String),

    /// Name is itself a public suffix
    #[error("{0} is a suffix")]
    IsASuffix(String),

    /// No rule matched, not even the default rule
    #[error("no rule matching name {0}")]
    NoRuleMatched(String),

    /// IDNA conversion failure
    #[error("IDNA conversion failed for {name}: {reason}")]
    Idna { name: String, reason: String },

    /// Input has no usable host
    #[error("invalid host: {0}")]
    InvalidHost(String),

    /// List parsing error
    #[error("list parsing error: {0}")]
    Parse(#[from] ParseError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for k2suffix operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for rule and list parsing.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Rule line cannot be interpreted
    #[error("malformed rule {rule:?}: {reason}")]
    MalformedRule { rule: String, reason: &'static str },

    /// Rule value is not a valid internationalized domain
    #[error("IDNA conversion failed for rule {rule:?}: {reason}")]
    Idna { rule: String, reason: String },

    /// IO error while reading list text
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    pub(crate) fn malformed(rule: &str, reason: &'static str) -> Self {
        ParseError::MalformedRule {
            rule: rule.to_string(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(Error::EmptyName.to_string(), "name is blank");
        assert_eq!(
            Error::LeadingDot(".example.com".into()).to_string(),
            "name .example.com starts with a dot"
        );
        assert_eq!(Error::IsASuffix("com".into()).to_string(), "com is a suffix");
    }

    #[test]
    fn test_parse_error_converts() {
        let err: Error = ParseError::malformed("*ck", "wildcard must be followed by a dot").into();
        assert!(matches!(err, Error::Parse(ParseError::MalformedRule { .. })));
        assert!(err.to_string().contains("*ck"));
    }
}
