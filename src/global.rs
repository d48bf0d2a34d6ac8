//! Built-in suffix list and convenience API.

use once_cell::sync::Lazy;
use std::sync::Arc;

use crate::error::Result;
use crate::host;
use crate::list::{ParseOptions, SuffixList};
use crate::resolver::DomainName;

/// Public suffix list snapshot compiled into the crate.
pub const BUILTIN_LIST: &str = include_str!("../data/public_suffix_list.dat");

/// Built-in list, parsed on first use
static DEFAULT_LIST: Lazy<Arc<SuffixList>> = Lazy::new(|| {
    match SuffixList::from_text(BUILTIN_LIST, &ParseOptions::default()) {
        Ok(list) => {
            log::debug!("Built-in suffix list ready: {} rules", list.size());
            Arc::new(list)
        }
        Err(e) => {
            log::error!("Failed to parse built-in suffix list: {}", e);
            Arc::new(SuffixList::new())
        }
    }
});

/// Get a shared handle to the built-in list.
pub fn default_list() -> Arc<SuffixList> {
    Arc::clone(&DEFAULT_LIST)
}

/// Get the registrable domain of `name` using the built-in list.
///
/// # Examples
/// ```
/// assert_eq!(k2suffix::domain("www.example.co.uk").unwrap(), "example.co.uk");
/// ```
pub fn domain(name: &str) -> Result<String> {
    DEFAULT_LIST.domain(name)
}

/// Split `name` into trd, sld and tld using the built-in list.
pub fn parse(name: &str) -> Result<DomainName> {
    DEFAULT_LIST.parse(name)
}

/// Get the public suffix of `name` using the built-in list.
pub fn public_suffix(name: &str) -> (String, bool) {
    DEFAULT_LIST.public_suffix(name)
}

/// Alias of [`domain`].
pub fn effective_tld_plus_one(name: &str) -> Result<String> {
    DEFAULT_LIST.effective_tld_plus_one(name)
}

/// Get the registrable domain of a hostname or URL using the built-in list.
pub fn main_domain(input: &str) -> Result<String> {
    host::main_domain(&DEFAULT_LIST, input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_default_list_loaded() {
        let list = default_list();
        assert_eq!(list.size(), 9506);
        assert_eq!(list.icann_count(), 7380);
        assert_eq!(list.private_count(), 2126);
        assert!(Arc::ptr_eq(&list, &default_list()));
    }

    #[test]
    fn test_convenience_functions() {
        assert_eq!(domain("www.example.com").unwrap(), "example.com");
        assert_eq!(effective_tld_plus_one("www.example.co.uk").unwrap(), "example.co.uk");
        assert_eq!(parse("a.b.c.kobe.jp").unwrap().tld(), "c.kobe.jp");
        assert_eq!(public_suffix("foo.github.io"), ("github.io".to_string(), false));
        assert_eq!(main_domain("https://www.example.com/index.html").unwrap(), "example.com");
        assert!(matches!(domain("com"), Err(Error::IsASuffix(_))));
    }
}
