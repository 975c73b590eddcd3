//! Legacy (classful) IPv4 address categories.

use super::CidrBlock;
use serde::Serialize;
use std::net::Ipv4Addr;

/// Historical address class, decided by the first octet only.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum AddressClass {
    A,
    B,
    C,
    Other,
}

/// Classify an address: 1-126 A, 128-191 B, 192-223 C, everything else Other.
pub fn classify_addr(addr: Ipv4Addr) -> AddressClass {
    match addr.octets()[0] {
        1..=126 => AddressClass::A,
        128..=191 => AddressClass::B,
        192..=223 => AddressClass::C,
        _ => AddressClass::Other,
    }
}

/// Classify the address part of a CIDR string.
///
/// Unparseable input is reported as [`AddressClass::Other`].
pub fn classify(cidr: &str) -> AddressClass {
    match CidrBlock::parse(cidr) {
        Ok(block) => classify_addr(block.addr),
        Err(e) => {
            log::trace!("classify({cidr}) unparseable: {e}");
            AddressClass::Other
        }
    }
}

impl std::fmt::Display for AddressClass {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            AddressClass::A => "A",
            AddressClass::B => "B",
            AddressClass::C => "C",
            AddressClass::Other => "Other",
        };
        write!(f, "{name}")
    }
}
