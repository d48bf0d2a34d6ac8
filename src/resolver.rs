//! Registrable domain resolution on top of a [`SuffixList`].

use std::fmt;

use crate::error::{Error, Result};
use crate::idn;
use crate::list::{FindOptions, SuffixList};
use crate::rule::Rule;

/// DomainName is a name split around its public suffix.
///
/// For `www.example.co.uk`: `tld` is `co.uk`, `sld` is `example` and
/// `trd` is `www`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainName {
    tld: String,
    sld: String,
    trd: String,
    rule: Rule,
}

impl DomainName {
    /// The public suffix.
    pub fn tld(&self) -> &str {
        &self.tld
    }

    /// The label directly left of the public suffix.
    pub fn sld(&self) -> &str {
        &self.sld
    }

    /// Everything left of the sld, possibly empty.
    pub fn trd(&self) -> &str {
        &self.trd
    }

    /// The rule that produced this split.
    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    /// The registrable domain, `sld.tld`.
    pub fn registrable(&self) -> String {
        format!("{}.{}", self.sld, self.tld)
    }

    /// Check if the suffix comes from an ICANN rule.
    pub fn is_icann(&self) -> bool {
        !self.rule.is_private() && !self.rule.is_default()
    }

    /// Render the full name with Punycode labels decoded.
    pub fn to_unicode(&self) -> Result<String> {
        idn::to_unicode(&self.to_string())
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.trd.is_empty() {
            write!(f, "{}.", self.trd)?;
        }
        write!(f, "{}.{}", self.sld, self.tld)
    }
}

/// Lowercase `name` and reject names that cannot be resolved.
pub fn normalize(name: &str) -> Result<String> {
    let name = name.to_lowercase();
    if name.is_empty() {
        return Err(Error::EmptyName);
    }
    if name.starts_with('.') {
        return Err(Error::LeadingDot(name));
    }
    Ok(name)
}

impl SuffixList {
    /// Split `name` into trd, sld and tld using default find options.
    ///
    /// # Examples
    /// ```
    /// use k2suffix::SuffixList;
    ///
    /// let list: SuffixList = "uk\nco.uk\n".parse().unwrap();
    /// let name = list.parse("www.example.co.uk").unwrap();
    /// assert_eq!(name.tld(), "co.uk");
    /// assert_eq!(name.sld(), "example");
    /// assert_eq!(name.trd(), "www");
    /// ```
    pub fn parse(&self, name: &str) -> Result<DomainName> {
        self.parse_with_options(name, &FindOptions::default())
    }

    /// Split `name` into trd, sld and tld.
    pub fn parse_with_options(&self, name: &str, options: &FindOptions) -> Result<DomainName> {
        let name = normalize(name)?;

        let rule = self.find(&name, options);
        if !rule.is_default() && !rule.matches(&name) {
            // Only reachable through a default rule that does not fit the name
            return Err(Error::NoRuleMatched(name));
        }

        let (left, tld) = match rule.decompose(&name) {
            Some((left, tld)) if !tld.is_empty() => (left, tld),
            _ => return Err(Error::IsASuffix(name.clone())),
        };

        let (trd, sld) = match left.rfind('.') {
            Some(pos) => (&left[..pos], &left[pos + 1..]),
            None => ("", left),
        };

        Ok(DomainName {
            tld: tld.to_string(),
            sld: sld.to_string(),
            trd: trd.to_string(),
            rule,
        })
    }

    /// Like [`parse`](SuffixList::parse), converting a Unicode name to ASCII first.
    pub fn parse_unicode(&self, name: &str) -> Result<DomainName> {
        let name = normalize(name)?;
        let ascii = idn::to_ascii(&name)?;
        self.parse(&ascii)
    }

    /// Get the registrable domain (`sld.tld`) of `name`.
    pub fn domain(&self, name: &str) -> Result<String> {
        self.domain_with_options(name, &FindOptions::default())
    }

    /// Get the registrable domain of `name` with the given find options.
    pub fn domain_with_options(&self, name: &str, options: &FindOptions) -> Result<String> {
        Ok(self.parse_with_options(name, options)?.registrable())
    }

    /// Alias of [`domain`](SuffixList::domain).
    pub fn effective_tld_plus_one(&self, name: &str) -> Result<String> {
        self.domain(name)
    }

    /// Get the public suffix of `name` and whether an ICANN rule backs it.
    ///
    /// Never fails. A name that is itself a suffix, or has a single unknown
    /// label, yields an empty suffix.
    pub fn public_suffix(&self, name: &str) -> (String, bool) {
        let name = name.to_lowercase();
        let options = FindOptions::default();
        let rule = self.find(&name, &options);

        let suffix = rule
            .decompose(&name)
            .map(|(_, tld)| tld.to_string())
            .unwrap_or_default();
        let icann = !rule.is_private() && !rule.is_default();

        (suffix, icann)
    }
}
