//! Legacy platform-name resolution
//!
//! Platform identifiers have been renamed over the years; configuration
//! written by older software versions may still carry the retired spellings.
//! [`LegacyResolver`] maps those historical names onto the current canonical
//! identifiers so they can be used as registry keys.
//!
//! Unrecognized names pass through unchanged - the caller may already hold a
//! canonical name, so the resolver is safe to apply unconditionally.

mod table;

use std::collections::HashMap;

/// Resolver for historical platform-name spellings
#[derive(Debug, Clone)]
pub struct LegacyResolver {
    aliases: HashMap<&'static str, &'static str>,
}

impl LegacyResolver {
    /// Build the resolver from the compiled alias table
    pub fn new() -> Self {
        Self {
            aliases: table::PLATFORM_ALIASES.iter().copied().collect(),
        }
    }

    /// Resolve a platform name to its canonical identifier
    ///
    /// Returns the mapped canonical name for a retired spelling, or the input
    /// unchanged. Canonical names are never further remapped, so resolution
    /// is a fixed point.
    pub fn resolve<'a>(&self, name: &'a str) -> &'a str {
        match self.aliases.get(name) {
            Some(canonical) => canonical,
            None => name,
        }
    }

    /// True if the name is a retired spelling with a canonical replacement
    pub fn is_legacy(&self, name: &str) -> bool {
        self.aliases.contains_key(name)
    }

    /// Number of known historical spellings
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    /// True if the alias table is empty (never the case for the built-in table)
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

impl Default for LegacyResolver {
    fn default() -> Self {
        Self::new()
    }
}
