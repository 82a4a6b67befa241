//! # Network Addresses
//!
//! `host:port` parsing for `network-address` items. The host is kept as
//! written (it may be empty, a name, or a bracketed IPv6 literal); only the
//! split and the port range are validated.

use std::fmt;
use std::str::FromStr;

use crate::error::AddressError;

/// A validated `host:port` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkAddress {
    /// Host component without brackets. May be empty (`:8080`).
    pub host: String,
    /// Port component.
    pub port: u16,
}

impl FromStr for NetworkAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (host, port) = split_host_port(s)?;
        Ok(Self {
            host: host.to_string(),
            port: parse_port(port)?,
        })
    }
}

impl fmt::Display for NetworkAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}

/// Split `host:port`, `[host]:port` or `[ipv6]:port` into its components.
///
/// The split happens at the last colon. A host containing a colon must be
/// bracketed; brackets anywhere else are rejected.
pub fn split_host_port(input: &str) -> Result<(&str, &str), AddressError> {
    let colon = input.rfind(':').ok_or(AddressError::MissingPort)?;

    let (host, host_start, host_end) = if input.starts_with('[') {
        let close = input.find(']').ok_or(AddressError::MissingBracket)?;
        if close + 1 == input.len() {
            return Err(AddressError::MissingPort);
        }
        if close + 1 != colon {
            return Err(if input.as_bytes()[close + 1] == b':' {
                AddressError::TooManyColons
            } else {
                AddressError::MissingPort
            });
        }
        (&input[1..close], 1, close + 1)
    } else {
        let host = &input[..colon];
        if host.contains(':') {
            return Err(AddressError::TooManyColons);
        }
        (host, 0, 0)
    };

    if input[host_start..].contains('[') {
        return Err(AddressError::UnexpectedBracket('['));
    }
    if input[host_end..].contains(']') {
        return Err(AddressError::UnexpectedBracket(']'));
    }

    Ok((host, &input[colon + 1..]))
}

fn parse_port(port: &str) -> Result<u16, AddressError> {
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AddressError::InvalidPort {
            port: port.to_string(),
            reason: "invalid syntax",
        });
    }
    port.parse::<u16>().map_err(|_| AddressError::InvalidPort {
        port: port.to_string(),
        reason: "value out of range",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_ipv4_host_and_port() {
        let addr: NetworkAddress = "0.0.0.0:8080".parse().unwrap();
        assert_eq!(addr.host, "0.0.0.0");
        assert_eq!(addr.port, 8080);
    }

    #[test]
    fn parses_bracketed_ipv6() {
        let addr: NetworkAddress = "[::1]:443".parse().unwrap();
        assert_eq!(addr.host, "::1");
        assert_eq!(addr.port, 443);
        assert_eq!(addr.to_string(), "[::1]:443");
    }

    #[test]
    fn empty_host_is_allowed() {
        let addr: NetworkAddress = ":9000".parse().unwrap();
        assert_eq!(addr.host, "");
        assert_eq!(addr.port, 9000);
    }

    #[test]
    fn port_out_of_range_is_rejected() {
        let err = "0.0.0.0:70000".parse::<NetworkAddress>().unwrap_err();
        assert_eq!(
            err,
            AddressError::InvalidPort {
                port: "70000".to_string(),
                reason: "value out of range",
            }
        );
    }

    #[test]
    fn non_numeric_port_is_rejected() {
        assert!(matches!(
            "localhost:http".parse::<NetworkAddress>(),
            Err(AddressError::InvalidPort { .. })
        ));
        assert!(matches!(
            "localhost:+80".parse::<NetworkAddress>(),
            Err(AddressError::InvalidPort { .. })
        ));
        assert!(matches!(
            "localhost:".parse::<NetworkAddress>(),
            Err(AddressError::InvalidPort { .. })
        ));
    }

    #[test]
    fn split_errors() {
        assert_eq!(split_host_port("localhost"), Err(AddressError::MissingPort));
        assert_eq!(split_host_port(""), Err(AddressError::MissingPort));
        assert_eq!(split_host_port("::1:80"), Err(AddressError::TooManyColons));
        assert_eq!(split_host_port("[::1:80"), Err(AddressError::MissingBracket));
        assert_eq!(split_host_port("[::1]"), Err(AddressError::MissingPort));
        assert_eq!(
            split_host_port("[::1]:80:90"),
            Err(AddressError::TooManyColons)
        );
        assert_eq!(
            split_host_port("host]:80"),
            Err(AddressError::UnexpectedBracket(']'))
        );
    }

    proptest! {
        /// Every port beyond the 16-bit range is rejected.
        #[test]
        fn ports_above_u16_rejected(port in 65536u32..10_000_000u32) {
            let input = format!("host:{port}");
            prop_assert!(input.parse::<NetworkAddress>().is_err());
        }

        /// Every port inside the 16-bit range is accepted.
        #[test]
        fn ports_within_u16_accepted(port in any::<u16>()) {
            let addr: NetworkAddress = format!("example.com:{port}").parse().unwrap();
            prop_assert_eq!(addr.port, port);
        }
    }
}
