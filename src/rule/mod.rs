//! Public suffix rules and their match/decompose semantics.

mod parser;

pub use parser::RuleParser;

use std::fmt;

use crate::error::ParseError;

/// RuleKind is the matching behaviour of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// Plain suffix: `co.uk`
    Normal,
    /// Suffix plus one extra label: `*.ck`
    Wildcard,
    /// Registrable carve-out of a wildcard: `!www.ck`.
    ///
    /// `base` is the byte offset in the value where the suffix that
    /// actually applies begins (`ck` in `www.ck`).
    Exception { base: usize },
}

impl RuleKind {
    /// Get the marker prefix this kind carries in list source.
    pub fn marker(&self) -> &'static str {
        match self {
            RuleKind::Normal => "",
            RuleKind::Wildcard => "*.",
            RuleKind::Exception { .. } => "!",
        }
    }
}

/// Rule is one line of the public suffix list.
///
/// The value never carries the `*.` or `!` marker; that information lives
/// in [`RuleKind`] only.
///
/// # Examples
/// ```
/// use k2suffix::rule::{Rule, RuleKind};
///
/// let rule = Rule::parse("*.ck").unwrap();
/// assert_eq!(rule.kind(), RuleKind::Wildcard);
/// assert_eq!(rule.value(), "ck");
/// assert_eq!(rule.label_count(), 2);
/// assert!(rule.matches("b.ck"));
/// assert!(!rule.matches("ck"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    kind: RuleKind,
    value: String,
    label_count: usize,
    private: bool,
}

impl Rule {
    pub(crate) fn new(kind: RuleKind, value: String) -> Self {
        let mut label_count = count_labels(&value);
        if kind == RuleKind::Wildcard {
            label_count += 1;
        }
        Self {
            kind,
            value,
            label_count,
            private: false,
        }
    }

    /// Parse an ASCII rule line.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        RuleParser::parse_line(line)
    }

    /// Parse a rule line that may contain Unicode labels.
    pub fn parse_unicode(line: &str) -> Result<Self, ParseError> {
        RuleParser::parse_unicode_line(line)
    }

    /// The rule used when nothing in a list matches: `*` with an empty value.
    pub fn default_rule() -> Self {
        Self::new(RuleKind::Wildcard, String::new())
    }

    /// Return this rule tagged as belonging to the private section.
    pub fn with_private(mut self, private: bool) -> Self {
        self.private = private;
        self
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    /// Suffix pattern without its marker.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Number of labels the rule covers, including the implicit wildcard label.
    pub fn label_count(&self) -> usize {
        self.label_count
    }

    pub fn is_private(&self) -> bool {
        self.private
    }

    /// Check if this is the empty wildcard, i.e. a rule that names no suffix.
    pub fn is_default(&self) -> bool {
        self.kind == RuleKind::Wildcard && self.value.is_empty()
    }

    /// The suffix left after applying an exception (`kawasaki.jp` for
    /// `!city.kawasaki.jp`). Equal to the value for other kinds.
    pub fn base_suffix(&self) -> &str {
        match self.kind {
            RuleKind::Exception { base } => &self.value[base..],
            _ => &self.value,
        }
    }

    /// Check whether this rule applies to `name`.
    ///
    /// `name` must end with the rule value on a label boundary. A wildcard
    /// additionally needs one more label in front of its value.
    pub fn matches(&self, name: &str) -> bool {
        let Some(left) = name.strip_suffix(self.value.as_str()) else {
            return false;
        };
        if left.is_empty() {
            return self.kind != RuleKind::Wildcard;
        }
        left.ends_with('.')
    }

    /// Split `name` into the part left of the public suffix and the suffix.
    ///
    /// Returns `None` when nothing is left of the suffix, i.e. `name` is a
    /// public suffix itself. Both returned slices borrow from `name`.
    pub fn decompose<'a>(&self, name: &'a str) -> Option<(&'a str, &'a str)> {
        if self.is_default() {
            let i = name.rfind('.')?;
            return Some((&name[..i], &name[i + 1..]));
        }

        match self.kind {
            RuleKind::Normal => split_at_suffix(name, &self.value),
            RuleKind::Wildcard => {
                let rest = name.strip_suffix(self.value.as_str())?;
                let rest = rest.strip_suffix('.')?;
                let i = rest.rfind('.')?;
                Some((&name[..i], &name[i + 1..]))
            }
            RuleKind::Exception { .. } => split_at_suffix(name, self.base_suffix()),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_default() {
            return f.write_str("*");
        }
        write!(f, "{}{}", self.kind.marker(), self.value)
    }
}

/// Strip `suffix` and the dot before it from `name`.
fn split_at_suffix<'a>(name: &'a str, suffix: &str) -> Option<(&'a str, &'a str)> {
    let rest = name.strip_suffix(suffix)?;
    if rest.is_empty() {
        return None;
    }
    let left = rest.strip_suffix('.')?;
    Some((left, &name[rest.len()..]))
}

/// Count dot-separated labels. The empty string has none.
pub(crate) fn count_labels(value: &str) -> usize {
    if value.is_empty() {
        0
    } else {
        value.split('.').count()
    }
}
