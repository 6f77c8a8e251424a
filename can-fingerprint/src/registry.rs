//! Signature registry
//!
//! Aggregates per-brand catalogs into a single immutable registry mapping
//! platform names to their fingerprint signatures. Construction happens once
//! at startup through [`RegistryBuilder`]; after [`RegistryBuilder::build`]
//! the registry is read-only and safe to share across threads.

use crate::catalog::BrandCatalog;
use crate::types::{FingerprintError, Result, Signature};
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Builder for the one-time registry construction phase
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    fingerprints: HashMap<String, Vec<Signature>>,
    firmware_known: HashSet<String>,
}

impl RegistryBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a parsed brand catalog into the registry under construction
    ///
    /// Repeated platform names accumulate signatures; a platform matches an
    /// observation if any of its signatures does.
    pub fn add_catalog(&mut self, catalog: &BrandCatalog) -> Result<()> {
        for (name, entry) in &catalog.platforms {
            let signatures = entry.signatures()?;
            if !signatures.is_empty() {
                self.fingerprints
                    .entry(name.clone())
                    .or_default()
                    .extend(signatures);
            } else {
                // Keep the name enumerable even without bus signatures
                self.fingerprints.entry(name.clone()).or_default();
            }
            if entry.firmware {
                self.firmware_known.insert(name.clone());
            }
        }
        log::debug!(
            "Merged catalog '{}' ({} platform(s))",
            catalog.brand,
            catalog.platforms.len()
        );
        Ok(())
    }

    /// Load a brand catalog file and merge it
    pub fn add_catalog_file(&mut self, path: &Path) -> Result<()> {
        let catalog = BrandCatalog::from_file(path)?;
        self.add_catalog(&catalog)
    }

    /// Add a platform programmatically (used by embedders and tests)
    pub fn add_platform(
        &mut self,
        name: impl Into<String>,
        signatures: Vec<Signature>,
    ) -> &mut Self {
        self.fingerprints
            .entry(name.into())
            .or_default()
            .extend(signatures);
        self
    }

    /// Mark a platform as known through firmware-version data
    pub fn add_firmware_platform(&mut self, name: impl Into<String>) -> &mut Self {
        self.firmware_known.insert(name.into());
        self
    }

    /// Finish construction and produce the immutable registry
    pub fn build(self) -> Registry {
        let registry = Registry {
            fingerprints: self.fingerprints,
            firmware_known: self.firmware_known,
        };
        let stats = registry.stats();
        log::info!(
            "Registry built: {} platform(s), {} signature(s), {} distinct address(es)",
            stats.num_platforms,
            stats.num_signatures,
            stats.num_addresses
        );
        registry
    }
}

/// Immutable collection of known platforms and their signatures
#[derive(Debug, Clone)]
pub struct Registry {
    /// Signatures per platform; empty vector for firmware-only platforms
    fingerprints: HashMap<String, Vec<Signature>>,
    /// Platforms known through firmware-version data (names only; firmware
    /// matching itself lives elsewhere in the system)
    firmware_known: HashSet<String>,
}

impl Registry {
    /// Signatures for a platform
    ///
    /// Errors with [`FingerprintError::UnknownPlatform`] for names outside the
    /// registry enumeration - that is a caller bug (e.g. an unresolved legacy
    /// name), not a data condition. Firmware-only platforms yield an empty
    /// slice.
    pub fn signatures_for(&self, name: &str) -> Result<&[Signature]> {
        if let Some(signatures) = self.fingerprints.get(name) {
            return Ok(signatures.as_slice());
        }
        if self.firmware_known.contains(name) {
            return Ok(&[]);
        }
        Err(FingerprintError::UnknownPlatform(name.to_string()))
    }

    /// True if the registry enumerates this platform name
    pub fn contains(&self, name: &str) -> bool {
        self.fingerprints.contains_key(name) || self.firmware_known.contains(name)
    }

    /// All known platform names: union of bus-fingerprinted and
    /// firmware-known platforms, sorted for determinism
    pub fn platform_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .fingerprints
            .keys()
            .chain(self.firmware_known.iter())
            .map(String::as_str)
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    /// Platform names with at least one bus signature - the valid starting
    /// candidate set for elimination
    pub fn fingerprinted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .fingerprints
            .iter()
            .filter(|(_, sigs)| !sigs.is_empty())
            .map(|(name, _)| name.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    /// Registry statistics
    pub fn stats(&self) -> RegistryStats {
        let num_signatures: usize = self.fingerprints.values().map(Vec::len).sum();
        let addresses: HashSet<u32> = self
            .fingerprints
            .values()
            .flat_map(|sigs| sigs.iter())
            .flat_map(|sig| sig.iter().map(|(addr, _)| addr))
            .collect();

        RegistryStats {
            num_platforms: self.platform_names().len(),
            num_signatures,
            num_addresses: addresses.len(),
        }
    }
}

/// Registry statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryStats {
    /// Total number of enumerated platforms
    pub num_platforms: usize,
    /// Total number of signatures across all platforms
    pub num_signatures: usize,
    /// Number of distinct cataloged addresses
    pub num_addresses: usize,
}
