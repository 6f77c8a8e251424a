//! Minimal identification walkthrough: build a registry programmatically and
//! narrow a candidate set against a short burst of observations.
//!
//! Run with: cargo run --example identify

use can_fingerprint::{Matcher, Observation, RegistryBuilder, Signature};
use std::collections::HashSet;

fn main() -> can_fingerprint::Result<()> {
    env_logger::init();

    let civic: Signature = [(0x92, 8), (0x1A4, 8), (0x30C, 8)].into_iter().collect();
    let accord: Signature = [(0x92, 8), (0x1A4, 8), (0x1DC, 4)].into_iter().collect();

    let mut builder = RegistryBuilder::new();
    builder.add_platform("HONDA_CIVIC", vec![civic]);
    builder.add_platform("HONDA_ACCORD", vec![accord]);
    let registry = builder.build();

    let matcher = Matcher::new(&registry);
    let mut candidates: HashSet<String> = registry
        .fingerprinted_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    let traffic = [
        Observation::new(0x92, 8),      // shared between both platforms
        Observation::new(0x18DAF110, 8), // extended ID, non-discriminating
        Observation::new(0x30C, 8),     // Civic only
    ];

    for observation in traffic {
        candidates = matcher.narrow(&observation, &candidates)?;
        println!("{} -> {} candidate(s)", observation, candidates.len());
    }

    match candidates.len() {
        0 => println!("no known platform fits"),
        1 => println!("identified: {}", candidates.iter().next().unwrap()),
        n => println!("still ambiguous between {} platforms", n),
    }

    Ok(())
}
