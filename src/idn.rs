//! Internationalized domain name conversion.

use crate::error::{Error, Result};

/// Convert a Unicode domain name to its ASCII (Punycode) form.
///
/// The result is lowercase. ASCII input passes through after validation.
pub fn to_ascii(name: &str) -> Result<String> {
    domain_to_ascii(name).map_err(|reason| Error::Idna {
        name: name.to_string(),
        reason,
    })
}

/// ASCII conversion reporting the failure reason only.
pub(crate) fn domain_to_ascii(name: &str) -> std::result::Result<String, String> {
    idna::domain_to_ascii(name)
        .map_err(|_| invalid_label(name, |label| idna::domain_to_ascii(label).is_err()))
}

/// Convert an ASCII (Punycode) domain name to its Unicode form.
pub fn to_unicode(name: &str) -> Result<String> {
    let (unicode, result) = idna::domain_to_unicode(name);
    result.map_err(|_| Error::Idna {
        name: name.to_string(),
        reason: invalid_label(name, |label| idna::domain_to_unicode(label).1.is_err()),
    })?;
    Ok(unicode)
}

/// Name the first label of `name` that fails conversion on its own.
///
/// `idna::Errors` carries no detail, so the labels are retried one by one.
fn invalid_label<F>(name: &str, fails: F) -> String
where
    F: Fn(&str) -> bool,
{
    match name.split('.').find(|label| fails(label)) {
        Some(label) => format!("invalid label {:?}", label),
        None => "invalid domain name".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_ascii() {
        assert_eq!(to_ascii("食狮.com.cn").unwrap(), "xn--85x722f.com.cn");
        assert_eq!(to_ascii("公司.cn").unwrap(), "xn--55qx5d.cn");
        assert_eq!(to_ascii("Example.COM").unwrap(), "example.com");
    }

    #[test]
    fn test_to_unicode() {
        assert_eq!(to_unicode("xn--85x722f.com.cn").unwrap(), "食狮.com.cn");
        assert_eq!(to_unicode("example.com").unwrap(), "example.com");
    }

    #[test]
    fn test_invalid_punycode() {
        match to_unicode("www.xn--a.com") {
            Err(Error::Idna { name, reason }) => {
                assert_eq!(name, "www.xn--a.com");
                assert_eq!(reason, "invalid label \"xn--a\"");
            }
            other => panic!("expected an IDNA error, got {other:?}"),
        }

        let err = to_ascii("xn--a.com").unwrap_err();
        assert_eq!(
            err.to_string(),
            "IDNA conversion failed for xn--a.com: invalid label \"xn--a\""
        );
    }
}
