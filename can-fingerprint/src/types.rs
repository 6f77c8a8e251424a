//! Core types for the platform fingerprinting library
//!
//! This module defines the data model the matcher operates on. The matcher is
//! stateless and only inspects message addresses and payload lengths - it never
//! looks at payload content.

use std::collections::HashMap;
use std::fmt;

/// A bus message channel identifier (CAN arbitration ID)
pub type Address = u32;

/// First address value that requires an extended (29-bit) identifier.
/// Everything below fits in a standard 11-bit identifier.
pub const EXTENDED_ID_MIN: Address = 0x800;

/// Result type for fingerprinting operations
pub type Result<T> = std::result::Result<T, FingerprintError>;

/// A single observed bus message, as reported by the transport/decoder layer
///
/// Only the address and the payload length are carried; fingerprinting never
/// inspects payload bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Observation {
    /// Message address (11-bit or 29-bit)
    pub address: Address,
    /// Payload length in bytes
    pub length: usize,
}

impl Observation {
    /// Create a new observation
    pub fn new(address: Address, length: usize) -> Self {
        Self { address, length }
    }

    /// True if this observation uses an extended (29-bit) identifier
    pub fn is_extended(&self) -> bool {
        self.address >= EXTENDED_ID_MIN
    }
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:X} [{}]", self.address, self.length)
    }
}

/// A platform fingerprint signature: expected payload length per address
///
/// Signatures are immutable once built. A platform may carry several
/// signatures; it matches an observation if any one of them does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signature {
    entries: HashMap<Address, usize>,
}

impl Signature {
    /// Create an empty signature
    pub fn new() -> Self {
        Self::default()
    }

    /// Expected payload length for an address, if the address is cataloged
    pub fn expected_length(&self, address: Address) -> Option<usize> {
        self.entries.get(&address).copied()
    }

    /// True if the signature catalogs this address
    pub fn contains(&self, address: Address) -> bool {
        self.entries.contains_key(&address)
    }

    /// Number of cataloged addresses
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no addresses are cataloged
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (address, expected length) entries
    pub fn iter(&self) -> impl Iterator<Item = (Address, usize)> + '_ {
        self.entries.iter().map(|(a, l)| (*a, *l))
    }
}

impl FromIterator<(Address, usize)> for Signature {
    fn from_iter<I: IntoIterator<Item = (Address, usize)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Errors that can occur while building or querying the registry
#[derive(Debug, thiserror::Error)]
pub enum FingerprintError {
    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),

    #[error("Invalid address key in catalog: {0:?}")]
    InvalidAddress(String),

    #[error("Failed to parse catalog: {0}")]
    CatalogParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
