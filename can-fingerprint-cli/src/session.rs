//! Identification session state
//!
//! The matching library is stateless; the running candidate set across a
//! stream of observations belongs to the caller. A session owns exactly one
//! such set, so independent captures can be identified in parallel without
//! any shared mutable state.

use can_fingerprint::{Matcher, Observation, Registry, Result};
use std::collections::HashSet;

/// Outcome of an identification session so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentificationStatus {
    /// Narrowed to exactly one platform
    Identified(String),
    /// More than one platform still fits
    Ambiguous(usize),
    /// No cataloged platform is consistent with the observed traffic
    NoMatch,
}

impl std::fmt::Display for IdentificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdentificationStatus::Identified(name) => write!(f, "identified: {}", name),
            IdentificationStatus::Ambiguous(n) => write!(f, "ambiguous ({} candidates)", n),
            IdentificationStatus::NoMatch => write!(f, "no match"),
        }
    }
}

/// One streaming identification attempt over a single capture
pub struct IdentificationSession<'a> {
    matcher: Matcher<'a>,
    candidates: HashSet<String>,
    frames_seen: usize,
    /// Frame index at which the candidate set first stopped being ambiguous
    settled_after: Option<usize>,
}

impl<'a> IdentificationSession<'a> {
    /// Start a session over every bus-fingerprinted platform in the registry
    pub fn new(registry: &'a Registry) -> Self {
        let candidates = registry
            .fingerprinted_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        Self::with_candidates(registry, candidates)
    }

    /// Start a session from an explicit candidate set
    ///
    /// Names must already be canonical registry keys; resolve legacy
    /// spellings first.
    pub fn with_candidates(registry: &'a Registry, candidates: HashSet<String>) -> Self {
        Self {
            matcher: Matcher::new(registry),
            candidates,
            frames_seen: 0,
            settled_after: None,
        }
    }

    /// Feed one observation through the eliminator
    ///
    /// Returns the status after narrowing. The set only ever shrinks;
    /// eliminated candidates are never re-added.
    pub fn observe(&mut self, observation: &Observation) -> Result<IdentificationStatus> {
        self.candidates = self.matcher.narrow(observation, &self.candidates)?;
        self.frames_seen += 1;

        if self.candidates.len() <= 1 && self.settled_after.is_none() {
            self.settled_after = Some(self.frames_seen);
            log::debug!(
                "Candidate set settled after {} frame(s): {}",
                self.frames_seen,
                self.status()
            );
        }

        Ok(self.status())
    }

    /// Current session status
    pub fn status(&self) -> IdentificationStatus {
        match self.candidates.len() {
            0 => IdentificationStatus::NoMatch,
            1 => {
                let name = self.candidates.iter().next().cloned().unwrap_or_default();
                IdentificationStatus::Identified(name)
            }
            n => IdentificationStatus::Ambiguous(n),
        }
    }

    /// Remaining candidates
    pub fn candidates(&self) -> &HashSet<String> {
        &self.candidates
    }

    /// Number of observations fed so far
    pub fn frames_seen(&self) -> usize {
        self.frames_seen
    }

    /// Frame count at which the set first became a singleton or empty
    pub fn settled_after(&self) -> Option<usize> {
        self.settled_after
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use can_fingerprint::{RegistryBuilder, Signature};

    fn registry() -> Registry {
        let sig_a: Signature = [(0x100, 8)].into_iter().collect();
        let sig_b: Signature = [(0x100, 8), (0x200, 4)].into_iter().collect();

        let mut builder = RegistryBuilder::new();
        builder.add_platform("A", vec![sig_a]);
        builder.add_platform("B", vec![sig_b]);
        builder.build()
    }

    #[test]
    fn test_session_identifies() {
        let registry = registry();
        let mut session = IdentificationSession::new(&registry);

        assert_eq!(
            session.observe(&Observation::new(0x100, 8)).unwrap(),
            IdentificationStatus::Ambiguous(2)
        );
        assert_eq!(
            session.observe(&Observation::new(0x200, 4)).unwrap(),
            IdentificationStatus::Identified("B".to_string())
        );
        assert_eq!(session.frames_seen(), 2);
        assert_eq!(session.settled_after(), Some(2));
    }

    #[test]
    fn test_session_no_match_is_terminal() {
        let registry = registry();
        let mut session = IdentificationSession::new(&registry);

        assert_eq!(
            session.observe(&Observation::new(0x200, 3)).unwrap(),
            IdentificationStatus::NoMatch
        );
        // Later compatible traffic cannot resurrect candidates
        assert_eq!(
            session.observe(&Observation::new(0x100, 8)).unwrap(),
            IdentificationStatus::NoMatch
        );
        assert_eq!(session.settled_after(), Some(1));
    }

    #[test]
    fn test_session_with_explicit_candidates() {
        let registry = registry();
        let only_a = HashSet::from(["A".to_string()]);
        let mut session = IdentificationSession::with_candidates(&registry, only_a);

        assert_eq!(
            session.observe(&Observation::new(0x100, 8)).unwrap(),
            IdentificationStatus::Identified("A".to_string())
        );
    }
}
