//! Per-brand catalog documents
//!
//! The registry is assembled from brand catalogs maintained outside this
//! library - one JSON document per manufacturer. A catalog names the brand's
//! platforms, their bus fingerprints, and whether firmware-version data exists
//! for them elsewhere in the system.
//!
//! Signature maps use string keys because JSON objects require them; both
//! decimal (`"420"`) and hex (`"0x1A4"`) spellings are accepted.

use crate::types::{Address, FingerprintError, Result, Signature};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

/// A parsed per-brand catalog document
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BrandCatalog {
    /// Brand name (e.g. "honda", "toyota")
    pub brand: String,

    /// Platform definitions keyed by canonical platform identifier
    #[serde(default)]
    pub platforms: BTreeMap<String, PlatformEntry>,
}

/// A single platform definition inside a brand catalog
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlatformEntry {
    /// Bus fingerprint signatures; address keys map to expected payload length.
    /// May be empty for platforms known only through firmware data.
    #[serde(default)]
    pub fingerprints: Vec<HashMap<String, usize>>,

    /// True if the wider system holds firmware-version data for this platform
    #[serde(default)]
    pub firmware: bool,
}

impl BrandCatalog {
    /// Parse a catalog from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| FingerprintError::CatalogParse(e.to_string()))
    }

    /// Load a catalog from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        log::info!("Loading brand catalog: {:?}", path);
        let json = fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        log::debug!(
            "Catalog '{}' defines {} platform(s)",
            catalog.brand,
            catalog.platforms.len()
        );
        Ok(catalog)
    }
}

impl PlatformEntry {
    /// Convert the raw string-keyed fingerprint maps into signatures
    pub fn signatures(&self) -> Result<Vec<Signature>> {
        self.fingerprints
            .iter()
            .map(|raw| {
                raw.iter()
                    .map(|(key, len)| Ok((parse_address(key)?, *len)))
                    .collect::<Result<Signature>>()
            })
            .collect()
    }
}

/// Parse a catalog address key: decimal or 0x-prefixed hex
pub fn parse_address(key: &str) -> Result<Address> {
    let key = key.trim();
    let parsed = if let Some(hex) = key.strip_prefix("0x").or_else(|| key.strip_prefix("0X")) {
        Address::from_str_radix(hex, 16)
    } else {
        key.parse::<Address>()
    };
    parsed.map_err(|_| FingerprintError::InvalidAddress(key.to_string()))
}
