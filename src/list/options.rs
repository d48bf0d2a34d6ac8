//! Options for list loading and lookup.

use crate::rule::Rule;

/// Options controlling how list text is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Keep rules after the `===BEGIN PRIVATE DOMAINS===` marker
    pub include_private_domains: bool,
    /// Rule lines are already ASCII, skip IDNA conversion
    pub input_is_ascii_encoded: bool,
}

impl ParseOptions {
    /// Create ParseOptions.
    pub fn new(include_private_domains: bool, input_is_ascii_encoded: bool) -> Self {
        Self {
            include_private_domains,
            input_is_ascii_encoded,
        }
    }

    /// Options that stop parsing at the private section.
    pub fn icann_only() -> Self {
        Self::new(false, false)
    }

    pub fn with_ascii_input(mut self, ascii: bool) -> Self {
        self.input_is_ascii_encoded = ascii;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::new(true, false)
    }
}

/// Options controlling a suffix lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindOptions {
    /// Skip rules from the private section
    pub ignore_private: bool,
    /// Rule returned when nothing else matches
    pub default_rule: Rule,
}

impl FindOptions {
    /// Create FindOptions with the standard default rule.
    pub fn new(ignore_private: bool) -> Self {
        Self {
            ignore_private,
            default_rule: Rule::default_rule(),
        }
    }

    /// Options that only consider ICANN rules.
    pub fn icann_only() -> Self {
        Self::new(true)
    }

    pub fn with_default_rule(mut self, rule: Rule) -> Self {
        self.default_rule = rule;
        self
    }
}

impl Default for FindOptions {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_options_defaults() {
        let options = ParseOptions::default();
        assert!(options.include_private_domains);
        assert!(!options.input_is_ascii_encoded);

        let options = ParseOptions::icann_only().with_ascii_input(true);
        assert!(!options.include_private_domains);
        assert!(options.input_is_ascii_encoded);
    }

    #[test]
    fn test_find_options_defaults() {
        let options = FindOptions::default();
        assert!(!options.ignore_private);
        assert!(options.default_rule.is_default());

        let options = FindOptions::icann_only();
        assert!(options.ignore_private);
    }
}
