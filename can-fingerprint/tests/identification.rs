//! End-to-end identification tests: brand catalogs on disk, registry
//! construction, streaming elimination, and legacy-name resolution working
//! together the way the surrounding system drives them.

use can_fingerprint::{LegacyResolver, Matcher, Observation, RegistryBuilder};
use std::collections::HashSet;
use std::io::Write;

fn write_catalog(dir: &tempfile::TempDir, name: &str, json: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(json.as_bytes()).unwrap();
    path
}

const HONDA_CATALOG: &str = r#"{
    "brand": "honda",
    "platforms": {
        "HONDA_CIVIC": {
            "fingerprints": [{ "0x92": 8, "0x1A4": 8, "0x30C": 8 }],
            "firmware": true
        },
        "HONDA_ACCORD": {
            "fingerprints": [
                { "0x92": 8, "0x1A4": 8, "0x1DC": 4 },
                { "0x92": 8, "0x1A4": 8, "0x1DC": 4, "0x221": 8 }
            ],
            "firmware": true
        },
        "HONDA_FREED": {
            "firmware": true
        }
    }
}"#;

const TOYOTA_CATALOG: &str = r#"{
    "brand": "toyota",
    "platforms": {
        "TOYOTA_PRIUS": {
            "fingerprints": [{ "0x2C1": 8, "0x3F9": 8 }],
            "firmware": true
        }
    }
}"#;

fn built_registry() -> can_fingerprint::Registry {
    let dir = tempfile::tempdir().unwrap();
    let honda = write_catalog(&dir, "honda.json", HONDA_CATALOG);
    let toyota = write_catalog(&dir, "toyota.json", TOYOTA_CATALOG);

    let mut builder = RegistryBuilder::new();
    builder.add_catalog_file(&honda).unwrap();
    builder.add_catalog_file(&toyota).unwrap();
    builder.build()
}

#[test]
fn registry_enumerates_catalog_platforms() {
    let registry = built_registry();
    assert_eq!(
        registry.platform_names(),
        vec!["HONDA_ACCORD", "HONDA_CIVIC", "HONDA_FREED", "TOYOTA_PRIUS"]
    );
    // Firmware-only platform is excluded from the elimination start set
    assert_eq!(
        registry.fingerprinted_names(),
        vec!["HONDA_ACCORD", "HONDA_CIVIC", "TOYOTA_PRIUS"]
    );

    let stats = registry.stats();
    assert_eq!(stats.num_platforms, 4);
    assert_eq!(stats.num_signatures, 4);
}

#[test]
fn streaming_elimination_reaches_a_singleton() {
    let registry = built_registry();
    let matcher = Matcher::new(&registry);

    let mut candidates: HashSet<String> = registry
        .fingerprinted_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    // Shared Honda traffic eliminates Toyota but keeps both Hondas
    candidates = matcher
        .narrow(&Observation::new(0x92, 8), &candidates)
        .unwrap();
    assert_eq!(candidates.len(), 2);
    assert!(candidates.contains("HONDA_CIVIC"));
    assert!(candidates.contains("HONDA_ACCORD"));

    // Extended-ID traffic is non-discriminating
    candidates = matcher
        .narrow(&Observation::new(0x18DAF110, 8), &candidates)
        .unwrap();
    assert_eq!(candidates.len(), 2);

    // Accord-only address settles it (second signature, OR semantics)
    candidates = matcher
        .narrow(&Observation::new(0x221, 8), &candidates)
        .unwrap();
    assert_eq!(
        candidates,
        HashSet::from(["HONDA_ACCORD".to_string()])
    );
}

#[test]
fn streaming_elimination_can_reach_no_match() {
    let registry = built_registry();
    let matcher = Matcher::new(&registry);

    let candidates: HashSet<String> = registry
        .fingerprinted_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    // An address no catalog knows with a standard ID rules everything out
    let kept = matcher
        .narrow(&Observation::new(0x7A0, 8), &candidates)
        .unwrap();
    assert!(kept.is_empty());

    // Feeding the empty set back in stays empty, without error
    let still_empty = matcher
        .narrow(&Observation::new(0x92, 8), &kept)
        .unwrap();
    assert!(still_empty.is_empty());
}

#[test]
fn debug_traffic_never_discriminates() {
    let registry = built_registry();
    let matcher = Matcher::new(&registry);

    let candidates: HashSet<String> = registry
        .fingerprinted_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    // 0x758 with the reserved length validates against every platform
    let kept = matcher
        .narrow(&Observation::new(0x758, 8), &candidates)
        .unwrap();
    assert_eq!(kept, candidates);
}

#[test]
fn legacy_names_resolve_to_registry_keys() {
    let registry = built_registry();
    let resolver = LegacyResolver::new();

    // A stored identifier from an old install resolves to a usable key
    let resolved = resolver.resolve("HONDA CIVIC 2016");
    assert_eq!(resolved, "HONDA_CIVIC");
    assert!(registry.contains(resolved));
    assert!(!registry.signatures_for(resolved).unwrap().is_empty());

    // Unresolved legacy names are exactly what UnknownPlatform guards against
    assert!(registry.signatures_for("HONDA CIVIC 2016").is_err());
}

#[test]
fn two_retired_spellings_converge() {
    let resolver = LegacyResolver::new();
    let a = resolver.resolve("AUDI A3");
    let b = resolver.resolve("AUDI A3 3RD GEN");
    assert_eq!(a, "AUDI_A3_MK3");
    assert_eq!(a, b);
    // Fixed point
    assert_eq!(resolver.resolve(a), a);
}
