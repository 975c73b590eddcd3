//! Domain models for the CIDR conflict check.
//!
//! This module contains the core data structures used throughout the application:
//! - [`CidrBlock`] and [`AddressRange`] - CIDR parsing and numeric ranges
//! - [`AddressClass`] - Legacy A/B/C classification
//! - [`CidrPair`], [`ConflictRow`], [`ErrorRow`] - Input and output records

mod cidr;
mod class;
mod rows;

// Re-export public types
pub use cidr::{convert, AddressRange, CidrBlock, ParseError, MAX_LENGTH};
pub use class::{classify, classify_addr, AddressClass};
pub use rows::{CidrPair, ConflictReport, ConflictRow, ErrorRow};
