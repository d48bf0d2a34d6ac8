//! Public suffix list rule line parser.

use super::{Rule, RuleKind};
use crate::error::ParseError;
use crate::idn;

/// Parser for single rule lines.
///
/// Lines handed to the parser are already trimmed and are neither blank
/// nor comments; [`SuffixList`](crate::SuffixList) takes care of that.
pub struct RuleParser;

impl RuleParser {
    /// Parse an ASCII rule line.
    ///
    /// - `*.ck` and the bare `*` are wildcard rules
    /// - `!www.ck` is an exception rule
    /// - anything else is a normal rule
    pub fn parse_line(line: &str) -> Result<Rule, ParseError> {
        let (kind, value) = split_marker(line)?;
        validate_value(line, value)?;

        let kind = match kind {
            RuleKind::Exception { .. } => {
                let dot = value
                    .find('.')
                    .ok_or_else(|| ParseError::malformed(line, "exception needs a parent suffix"))?;
                RuleKind::Exception { base: dot + 1 }
            }
            other => other,
        };

        Ok(Rule::new(kind, value.to_string()))
    }

    /// Parse a rule line whose value may contain Unicode labels.
    ///
    /// Only the value is converted to ASCII; the marker is kept as is.
    pub fn parse_unicode_line(line: &str) -> Result<Rule, ParseError> {
        let (kind, value) = split_marker(line)?;
        if value.is_empty() {
            return Self::parse_line(line);
        }

        let ascii = idn::domain_to_ascii(value).map_err(|reason| ParseError::Idna {
            rule: line.to_string(),
            reason,
        })?;

        Self::parse_line(&format!("{}{}", kind.marker(), ascii))
    }
}

/// Separate the `*.`/`!` marker from the value.
fn split_marker(line: &str) -> Result<(RuleKind, &str), ParseError> {
    if line.is_empty() {
        return Err(ParseError::malformed(line, "empty rule"));
    }

    if let Some(rest) = line.strip_prefix('*') {
        if rest.is_empty() {
            return Ok((RuleKind::Wildcard, ""));
        }
        let value = rest
            .strip_prefix('.')
            .ok_or_else(|| ParseError::malformed(line, "wildcard must be followed by a dot"))?;
        if value.is_empty() {
            return Err(ParseError::malformed(line, "wildcard without suffix"));
        }
        return Ok((RuleKind::Wildcard, value));
    }

    if let Some(value) = line.strip_prefix('!') {
        if value.is_empty() {
            return Err(ParseError::malformed(line, "exception without suffix"));
        }
        return Ok((RuleKind::Exception { base: 0 }, value));
    }

    Ok((RuleKind::Normal, line))
}

fn validate_value(line: &str, value: &str) -> Result<(), ParseError> {
    if value.is_empty() {
        return Ok(());
    }
    if value.split('.').any(str::is_empty) {
        return Err(ParseError::malformed(line, "empty label"));
    }
    if value.contains(['*', '!']) {
        return Err(ParseError::malformed(line, "marker inside suffix"));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(ParseError::malformed(line, "whitespace inside suffix"));
    }
    Ok(())
}
