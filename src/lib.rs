//! K2Suffix - Public Suffix List parsing and registrable domain resolution.
//!
//! This crate answers "which part of this name can be registered by an end
//! user?" using the rules of the [Public Suffix List](https://publicsuffix.org/).
//!
//! # Features
//!
//! - **Rule model**: normal, wildcard (`*.ck`) and exception (`!www.ck`) rules
//! - **List parsing**: the PSL text format, with ICANN/private sections and
//!   Unicode rules converted to Punycode
//! - **Longest-match lookup**: O(labels) hash probes per name
//! - **Decomposition**: split names into trd, sld and tld
//! - **Built-in snapshot**: a lazily parsed list for quick use
//!
//! # Quick Start
//!
//! ```
//! use k2suffix::{ParseOptions, SuffixList};
//!
//! let list = SuffixList::from_text("uk\nco.uk\n*.ck\n!www.ck\n", &ParseOptions::default())?;
//!
//! assert_eq!(list.domain("www.example.co.uk")?, "example.co.uk");
//!
//! let name = list.parse("a.b.ck")?;
//! assert_eq!(name.tld(), "b.ck");
//! assert_eq!(name.sld(), "a");
//! # Ok::<(), k2suffix::Error>(())
//! ```
//!
//! The built-in list is available through free functions:
//!
//! ```
//! assert_eq!(k2suffix::domain("www.example.com").unwrap(), "example.com");
//! assert_eq!(k2suffix::public_suffix("foo.github.io"), ("github.io".to_string(), false));
//! ```
//!
//! # Rule Precedence
//!
//! 1. The longest rule matching the name wins
//! 2. An exception outranks the wildcard it carves out of, being longer
//! 3. Names no rule covers fall back to the `*` default rule

mod error;
mod global;
mod resolver;

pub mod host;
pub mod idn;
pub mod list;
pub mod rule;

// Re-export core types
pub use error::{Error, ParseError, Result};
pub use list::{FindOptions, ParseOptions, SuffixList, PRIVATE_DOMAINS_MARKER};
pub use resolver::{normalize, DomainName};
pub use rule::{Rule, RuleKind, RuleParser};

// Re-export global API functions
pub use global::{
    default_list, domain, effective_tld_plus_one, main_domain, parse, public_suffix, BUILTIN_LIST,
};
