//! CAN Platform Fingerprinting Library
//!
//! A stateless, reusable library for identifying which vehicle platform a
//! controller is attached to by observing raw bus traffic and eliminating
//! candidates against a registry of known per-platform signatures.
//!
//! # Architecture
//!
//! This library is intentionally minimal and focused on matching:
//! - Builds an immutable registry from per-brand catalog documents
//! - Validates single observations against single signatures
//! - Narrows caller-owned candidate sets one observation at a time
//! - Resolves retired platform-name spellings to canonical identifiers
//!
//! The library does NOT:
//! - Acquire or decode bus traffic (transport layer concern)
//! - Author or maintain the signature catalogs themselves
//! - Identify platforms by firmware version strings
//! - Persist identification results
//!
//! All stream handling and session state lives in the application layer
//! (can-fingerprint-cli).
//!
//! # Example Usage
//!
//! ```no_run
//! use can_fingerprint::{Matcher, Observation, RegistryBuilder};
//! use std::collections::HashSet;
//! use std::path::Path;
//!
//! // One-time registry construction from brand catalogs
//! let mut builder = RegistryBuilder::new();
//! builder.add_catalog_file(Path::new("honda.json")).unwrap();
//! builder.add_catalog_file(Path::new("toyota.json")).unwrap();
//! let registry = builder.build();
//!
//! // Caller owns the running candidate set
//! let matcher = Matcher::new(&registry);
//! let mut candidates: HashSet<String> = registry
//!     .fingerprinted_names()
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//!
//! for observation in [Observation::new(0x1A0, 8), Observation::new(0x2C1, 8)] {
//!     candidates = matcher.narrow(&observation, &candidates).unwrap();
//! }
//!
//! match candidates.len() {
//!     0 => println!("no known platform fits"),
//!     1 => println!("identified: {}", candidates.iter().next().unwrap()),
//!     n => println!("still ambiguous between {} platforms", n),
//! }
//! ```

// Public modules
pub mod catalog;
pub mod legacy;
pub mod matcher;
pub mod registry;
pub mod types;

// Re-export main types for convenience
pub use catalog::{BrandCatalog, PlatformEntry};
pub use legacy::LegacyResolver;
pub use matcher::{is_compatible, Matcher, DEBUG_CHANNELS};
pub use registry::{Registry, RegistryBuilder, RegistryStats};
pub use types::{Address, FingerprintError, Observation, Result, Signature, EXTENDED_ID_MIN};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
