//! Observation validation and candidate elimination
//!
//! The heart of platform identification: a pure compatibility test between a
//! single observation and a single signature, and an elimination step that
//! narrows a candidate set against the registry one observation at a time.
//!
//! The matcher holds no state between calls. Callers own the running
//! candidate set and feed it back in with every observation, so independent
//! identification sessions can run in parallel against one shared registry.

use crate::registry::Registry;
use crate::types::{Address, Observation, Result, Signature, EXTENDED_ID_MIN};
use std::collections::HashSet;

/// Reserved diagnostic traffic, overlaid on every signature before
/// validation. On an address collision the debug entry wins.
pub const DEBUG_CHANNELS: &[(Address, usize)] = &[(0x758, 8)];

fn debug_expected(address: Address) -> Option<usize> {
    DEBUG_CHANNELS
        .iter()
        .find(|(addr, _)| *addr == address)
        .map(|(_, len)| *len)
}

/// Test whether a single observation is consistent with a single signature
///
/// Extended-identifier traffic (address >= 0x800) is never cataloged by
/// address/length, so it is treated as non-discriminating and accepted
/// unconditionally. Standard-identifier traffic must hit a cataloged address
/// with the exact expected payload length, with the reserved debug channels
/// overriding any colliding signature entry.
pub fn is_compatible(observation: &Observation, signature: &Signature) -> bool {
    if observation.address >= EXTENDED_ID_MIN {
        return true;
    }
    if let Some(expected) = debug_expected(observation.address) {
        return observation.length == expected;
    }
    signature.expected_length(observation.address) == Some(observation.length)
}

/// Candidate elimination engine
///
/// Borrows an injected [`Registry`]; stateless between calls.
pub struct Matcher<'a> {
    registry: &'a Registry,
}

impl<'a> Matcher<'a> {
    /// Create a matcher over a registry
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// The registry this matcher consults
    pub fn registry(&self) -> &Registry {
        self.registry
    }

    /// Narrow a candidate set against one observation
    ///
    /// A candidate is retained iff the observation is compatible with at
    /// least one of its signatures. The result is always a subset of the
    /// input; an empty result is ordinary data meaning no cataloged platform
    /// fits the observed traffic. Candidates without any signature are never
    /// retained.
    ///
    /// Errors with [`crate::FingerprintError::UnknownPlatform`] if a
    /// candidate name lies outside the registry enumeration - legacy names
    /// must be resolved before they reach this point.
    pub fn narrow(
        &self,
        observation: &Observation,
        candidates: &HashSet<String>,
    ) -> Result<HashSet<String>> {
        let mut compatible = HashSet::new();

        for name in candidates {
            let signatures = self.registry.signatures_for(name)?;
            if signatures.iter().any(|sig| is_compatible(observation, sig)) {
                compatible.insert(name.clone());
            }
        }

        if compatible.len() < candidates.len() {
            log::debug!(
                "Observation {} narrowed candidates {} -> {}",
                observation,
                candidates.len(),
                compatible.len()
            );
        }

        Ok(compatible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::RegistryBuilder;

    fn signature(pairs: &[(u32, usize)]) -> Signature {
        pairs.iter().copied().collect()
    }

    fn candidates(names: &[&str]) -> HashSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    /// Registry from the reference narrowing scenario:
    /// A = {0x100: 8}, B = {0x100: 8, 0x200: 4}
    fn scenario_registry() -> Registry {
        let mut builder = RegistryBuilder::new();
        builder.add_platform("A", vec![signature(&[(0x100, 8)])]);
        builder.add_platform("B", vec![signature(&[(0x100, 8), (0x200, 4)])]);
        builder.build()
    }

    #[test]
    fn test_extended_id_always_compatible() {
        let sig = signature(&[(0x100, 8)]);
        assert!(is_compatible(&Observation::new(0x800, 3), &sig));
        assert!(is_compatible(&Observation::new(0x850, 8), &sig));
        assert!(is_compatible(&Observation::new(0x18DB33F1, 64), &sig));
        // Even against an empty signature
        assert!(is_compatible(&Observation::new(0x900, 0), &Signature::new()));
    }

    #[test]
    fn test_standard_id_requires_exact_length() {
        let sig = signature(&[(0x100, 8)]);
        assert!(is_compatible(&Observation::new(0x100, 8), &sig));
        assert!(!is_compatible(&Observation::new(0x100, 7), &sig));
        assert!(!is_compatible(&Observation::new(0x101, 8), &sig));
    }

    #[test]
    fn test_debug_channel_always_validates() {
        // 0x758 is not in the signature at all
        let sig = signature(&[(0x100, 8)]);
        assert!(is_compatible(&Observation::new(0x758, 8), &sig));
        assert!(!is_compatible(&Observation::new(0x758, 4), &sig));
    }

    #[test]
    fn test_debug_entry_overrides_conflicting_signature() {
        // Signature disagrees about the debug address length; debug wins
        let sig = signature(&[(0x758, 5)]);
        assert!(is_compatible(&Observation::new(0x758, 8), &sig));
        assert!(!is_compatible(&Observation::new(0x758, 5), &sig));
    }

    #[test]
    fn test_narrow_scenario() {
        let registry = scenario_registry();
        let matcher = Matcher::new(&registry);
        let both = candidates(&["A", "B"]);

        // (0x100, 8) matches both
        let kept = matcher.narrow(&Observation::new(0x100, 8), &both).unwrap();
        assert_eq!(kept, both);

        // (0x200, 4) only matches B
        let kept = matcher.narrow(&Observation::new(0x200, 4), &both).unwrap();
        assert_eq!(kept, candidates(&["B"]));

        // (0x200, 3): length mismatch on B, address missing from A -> empty
        let kept = matcher.narrow(&Observation::new(0x200, 3), &both).unwrap();
        assert!(kept.is_empty());
    }

    #[test]
    fn test_narrow_extended_id_keeps_everything() {
        let registry = scenario_registry();
        let matcher = Matcher::new(&registry);
        let both = candidates(&["A", "B"]);

        let kept = matcher.narrow(&Observation::new(0x850, 8), &both).unwrap();
        assert_eq!(kept, both);
    }

    #[test]
    fn test_narrow_empty_input() {
        let registry = scenario_registry();
        let matcher = Matcher::new(&registry);

        let kept = matcher
            .narrow(&Observation::new(0x100, 8), &HashSet::new())
            .unwrap();
        assert!(kept.is_empty());
    }

    #[test]
    fn test_narrow_monotonic_and_idempotent() {
        let registry = scenario_registry();
        let matcher = Matcher::new(&registry);
        let both = candidates(&["A", "B"]);
        let obs = Observation::new(0x200, 4);

        let once = matcher.narrow(&obs, &both).unwrap();
        assert!(once.is_subset(&both));

        let twice = matcher.narrow(&obs, &once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_narrow_unknown_candidate_errors() {
        let registry = scenario_registry();
        let matcher = Matcher::new(&registry);

        let result = matcher.narrow(&Observation::new(0x100, 8), &candidates(&["A", "GHOST"]));
        assert!(result.is_err());
    }

    #[test]
    fn test_narrow_multi_signature_or_semantics() {
        let mut builder = RegistryBuilder::new();
        builder.add_platform(
            "TWO_FACED",
            vec![signature(&[(0x100, 8)]), signature(&[(0x200, 4)])],
        );
        let registry = builder.build();
        let matcher = Matcher::new(&registry);
        let set = candidates(&["TWO_FACED"]);

        // Either signature alone is enough to keep the platform
        assert_eq!(
            matcher.narrow(&Observation::new(0x100, 8), &set).unwrap(),
            set
        );
        assert_eq!(
            matcher.narrow(&Observation::new(0x200, 4), &set).unwrap(),
            set
        );
        assert!(matcher
            .narrow(&Observation::new(0x300, 8), &set)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_narrow_never_retains_signatureless_platform() {
        let mut builder = RegistryBuilder::new();
        builder.add_platform("A", vec![signature(&[(0x100, 8)])]);
        builder.add_firmware_platform("FW_ONLY");
        let registry = builder.build();
        let matcher = Matcher::new(&registry);

        let kept = matcher
            .narrow(&Observation::new(0x100, 8), &candidates(&["A", "FW_ONLY"]))
            .unwrap();
        assert_eq!(kept, candidates(&["A"]));
    }
}
