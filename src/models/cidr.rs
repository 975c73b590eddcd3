//! IPv4 CIDR parsing and range conversion.
//!
//! Provides [`CidrBlock`] for a parsed `A.B.C.D/N` string and [`AddressRange`]
//! for the inclusive numeric interval it covers.

use serde::Serialize;
use std::net::Ipv4Addr;
use std::str::FromStr;
use thiserror::Error;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Reasons a CIDR string can be rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid CIDR format '{0}': expected ip/prefix")]
    Format(String),
    #[error("Invalid IP address '{addr}': expected 4 octets, found {found}")]
    OctetCount { addr: String, found: usize },
    #[error("Invalid octet '{0}': not a number")]
    OctetNotNumeric(String),
    #[error("Invalid octet {0}: must be between 0 and 255")]
    OctetOutOfRange(i64),
    #[error("Invalid prefix '{0}': not a number")]
    PrefixNotNumeric(String),
    #[error("Invalid prefix {0}: must be between 0 and 32")]
    PrefixOutOfRange(i64),
}

/// An IPv4 address with its prefix length, exactly as written.
///
/// The address is kept literally; `192.168.1.5/24` is not masked down to
/// `192.168.1.0`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CidrBlock {
    /// The address as given.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub prefix: u8,
}

/// Inclusive address interval covered by a [`CidrBlock`].
///
/// Bounds are 64 bit so a non-aligned block near `255.255.255.255` can run
/// past the top of the IPv4 space without wrapping.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AddressRange {
    pub start: u64,
    pub end: u64,
}

fn parse_number(token: &str) -> Option<i64> {
    token.trim().parse::<i64>().ok()
}

impl CidrBlock {
    /// Parse a CIDR string (e.g. "10.0.0.0/24").
    ///
    /// # Examples
    /// ```
    /// use cidr_conflict_check::models::CidrBlock;
    /// let block = CidrBlock::parse("10.1.2.3/16").unwrap();
    /// assert_eq!(block.prefix, 16);
    /// assert_eq!(block.addr.octets(), [10, 1, 2, 3]);
    /// ```
    pub fn parse(cidr: &str) -> Result<CidrBlock, ParseError> {
        let cidr = cidr.trim();
        let parts: Vec<&str> = cidr.split('/').collect();
        if parts.len() != 2 {
            return Err(ParseError::Format(cidr.to_string()));
        }

        let octet_tokens: Vec<&str> = parts[0].split('.').collect();
        if octet_tokens.len() != 4 {
            return Err(ParseError::OctetCount {
                addr: parts[0].to_string(),
                found: octet_tokens.len(),
            });
        }

        let mut octets = [0u8; 4];
        for (slot, token) in octets.iter_mut().zip(octet_tokens) {
            let value = parse_number(token)
                .ok_or_else(|| ParseError::OctetNotNumeric(token.to_string()))?;
            *slot = u8::try_from(value).map_err(|_| ParseError::OctetOutOfRange(value))?;
        }

        let prefix = parse_number(parts[1])
            .ok_or_else(|| ParseError::PrefixNotNumeric(parts[1].to_string()))?;
        if !(0..=MAX_LENGTH as i64).contains(&prefix) {
            return Err(ParseError::PrefixOutOfRange(prefix));
        }

        Ok(CidrBlock {
            addr: Ipv4Addr::from(octets),
            prefix: prefix as u8,
        })
    }

    /// Number of addresses the prefix covers, `2^(32 - prefix)`.
    pub fn size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.prefix)
    }

    /// The inclusive interval starting at the literal address.
    pub fn range(&self) -> AddressRange {
        let start = u32::from(self.addr) as u64;
        AddressRange {
            start,
            end: start + self.size() - 1,
        }
    }
}

impl FromStr for CidrBlock {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CidrBlock::parse(s)
    }
}

impl std::fmt::Display for CidrBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

impl AddressRange {
    /// Number of addresses in the interval.
    pub fn len(&self) -> u64 {
        self.end - self.start + 1
    }

    /// Always false; a range holds at least one address.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn overlaps(&self, other: &AddressRange) -> bool {
        crate::processing::overlaps(self, other)
    }
}

/// Convert a CIDR string into the inclusive address range it covers.
///
/// # Examples
/// ```
/// use cidr_conflict_check::models::convert;
/// let range = convert("192.168.1.0/24").unwrap();
/// assert_eq!(range.end - range.start + 1, 256);
/// ```
pub fn convert(cidr: &str) -> Result<AddressRange, ParseError> {
    Ok(CidrBlock::parse(cidr)?.range())
}
