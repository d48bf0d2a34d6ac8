//! Host extraction from hostnames and URLs.

use std::net::IpAddr;

use crate::error::{Error, Result};
use crate::list::SuffixList;

/// Host is the host part of some input, either an IP literal or a domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Host {
    /// IPv4 or IPv6 literal
    Ip(IpAddr),
    /// Domain name, lowercase ASCII
    Domain(String),
}

/// Extract the host from a bare hostname, `host:port` or an absolute URL.
///
/// Unicode hostnames come back Punycode encoded.
pub fn extract_host(input: &str) -> Result<Host> {
    let input = input.trim();
    if input.is_empty() {
        return Err(Error::EmptyName);
    }

    // Bare IPv6 literals do not survive URL parsing without brackets
    if let Ok(ip) = input.parse::<IpAddr>() {
        return Ok(Host::Ip(ip));
    }

    let normalized = if input.contains("://") {
        input.to_string()
    } else {
        format!("http://{input}")
    };

    let parsed = url::Url::parse(&normalized).map_err(|_| Error::InvalidHost(input.to_string()))?;
    match parsed.host() {
        Some(url::Host::Domain(domain)) => Ok(Host::Domain(domain.to_lowercase())),
        Some(url::Host::Ipv4(ip)) => Ok(Host::Ip(IpAddr::V4(ip))),
        Some(url::Host::Ipv6(ip)) => Ok(Host::Ip(IpAddr::V6(ip))),
        None => Err(Error::InvalidHost(input.to_string())),
    }
}

/// Get the registrable domain for a hostname or URL.
///
/// IP literals are returned unchanged since suffix rules do not apply to them.
pub fn main_domain(list: &SuffixList, input: &str) -> Result<String> {
    match extract_host(input)? {
        Host::Ip(ip) => Ok(ip.to_string()),
        Host::Domain(domain) => list.domain(&domain),
    }
}
