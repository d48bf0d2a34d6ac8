//! In-memory public suffix list.

mod options;

pub use options::{FindOptions, ParseOptions};

use ahash::AHashMap;
use flate2::read::GzDecoder;
use std::fs;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use crate::error::ParseError;
use crate::rule::{Rule, RuleParser};

/// Marker line that opens the private section of the list.
pub const PRIVATE_DOMAINS_MARKER: &str = "===BEGIN PRIVATE DOMAINS===";

/// SuffixList holds public suffix rules keyed by their value.
///
/// A list is filled once through [`load`](SuffixList::load) or
/// [`add_rule`](SuffixList::add_rule) and is read-only afterwards; lookups
/// take `&self`, so a built list can be shared across threads as is.
///
/// # Examples
/// ```
/// use k2suffix::{FindOptions, ParseOptions, SuffixList};
///
/// let mut list = SuffixList::new();
/// list.load_str("com\n*.ck\n!www.ck\n", &ParseOptions::default()).unwrap();
///
/// let options = FindOptions::default();
/// assert_eq!(list.find("example.com", &options).value(), "com");
/// assert_eq!(list.find("www.ck", &options).to_string(), "!www.ck");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SuffixList {
    /// Rules by value; later rules with the same value replace earlier ones
    rules: AHashMap<String, Rule>,
}

impl SuffixList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a list from list text.
    pub fn from_text(text: &str, options: &ParseOptions) -> Result<Self, ParseError> {
        let mut list = Self::new();
        list.load_str(text, options)?;
        Ok(list)
    }

    /// Create a list by reading list text from a reader.
    pub fn from_reader<R: Read>(
        reader: R,
        options: &ParseOptions,
    ) -> Result<Self, ParseError> {
        let mut list = Self::new();
        list.load(reader, options)?;
        Ok(list)
    }

    /// Create a list from raw bytes, which may be gzip compressed.
    pub fn from_bytes(data: &[u8], options: &ParseOptions) -> Result<Self, ParseError> {
        if is_gzip(data) {
            Self::from_reader(GzDecoder::new(data), options)
        } else {
            Self::from_reader(data, options)
        }
    }

    /// Create a list from a file (`.dat` or gzip compressed `.dat.gz`).
    pub fn from_file<P: AsRef<Path>>(
        path: P,
        options: &ParseOptions,
    ) -> Result<Self, ParseError> {
        let path = path.as_ref();
        let data = fs::read(path)?;
        let list = Self::from_bytes(&data, options)?;
        log::info!("Loaded suffix list from {:?}: {} rules", path, list.size());
        Ok(list)
    }

    /// Parse list text from a reader and add its rules.
    ///
    /// Blank lines and `//` comments are skipped. Rules following the
    /// private-domains marker are tagged private, or not read at all when
    /// `include_private_domains` is off.
    ///
    /// Returns the parsed rules in source order. The first malformed line
    /// aborts the load.
    pub fn load<R: Read>(
        &mut self,
        reader: R,
        options: &ParseOptions,
    ) -> Result<Vec<Rule>, ParseError> {
        let buf_reader = BufReader::new(reader);
        let mut parsed = Vec::new();
        let mut private = false;

        for (index, line) in buf_reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();

            if line.is_empty() {
                continue;
            }

            // The marker itself sits in a comment line
            if line.contains(PRIVATE_DOMAINS_MARKER) {
                if !options.include_private_domains {
                    log::debug!("Stopped at private section on line {}", index + 1);
                    break;
                }
                private = true;
                continue;
            }

            if line.starts_with("//") {
                continue;
            }

            // Only the first whitespace-separated token is the rule
            let text = line.split_whitespace().next().unwrap_or(line);

            let rule = if options.input_is_ascii_encoded {
                RuleParser::parse_line(text)
            } else {
                RuleParser::parse_unicode_line(text)
            };
            let rule = match rule {
                Ok(rule) => rule.with_private(private),
                Err(e) => {
                    log::warn!("Malformed rule on line {}: {}", index + 1, e);
                    return Err(e);
                }
            };

            self.rules.insert(rule.value().to_string(), rule.clone());
            parsed.push(rule);
        }

        log::debug!(
            "Parsed {} rules, list now holds {} suffixes",
            parsed.len(),
            self.size()
        );

        Ok(parsed)
    }

    /// Parse list text and add its rules.
    pub fn load_str(
        &mut self,
        text: &str,
        options: &ParseOptions,
    ) -> Result<Vec<Rule>, ParseError> {
        self.load(text.as_bytes(), options)
    }

    /// Add a rule, replacing any rule with the same value.
    pub fn add_rule(&mut self, rule: Rule) {
        self.rules.insert(rule.value().to_string(), rule);
    }

    /// Get the number of distinct rule values.
    pub fn size(&self) -> usize {
        self.rules.len()
    }

    /// Check if this list has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over all rules, in no particular order.
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.rules.values()
    }

    /// Get the number of rules from the ICANN section.
    pub fn icann_count(&self) -> usize {
        self.rules().filter(|rule| !rule.is_private()).count()
    }

    /// Get the number of rules from the private section.
    pub fn private_count(&self) -> usize {
        self.rules().filter(|rule| rule.is_private()).count()
    }

    /// Find the rule that decides the public suffix of `name`.
    ///
    /// `name` is matched as given, so it should already be lowercase ASCII.
    /// Right-aligned parts of the name are probed from longest to shortest,
    /// so the most specific rule wins. When nothing matches, the default
    /// rule from `options` is returned.
    ///
    /// The rule is returned by value, so it does not borrow from `options`.
    pub fn find(&self, name: &str, options: &FindOptions) -> Rule {
        let mut part = name;

        loop {
            if let Some(rule) = self.rules.get(part) {
                if rule.matches(name) && !(options.ignore_private && rule.is_private()) {
                    return rule.clone();
                }
            }

            match part.find('.') {
                Some(pos) => part = &part[pos + 1..],
                None => return options.default_rule.clone(),
            }
        }
    }
}

impl FromStr for SuffixList {
    type Err = ParseError;

    /// Parse list text with default options.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s, &ParseOptions::default())
    }
}

/// Check if data is gzip compressed.
fn is_gzip(data: &[u8]) -> bool {
    data.len() >= 2 && data[0] == 0x1f && data[1] == 0x8b
}
