//! End-to-end lookup and distribution scenarios.

mod common;

use common::{five_nodes, imbalance, WORDS};
use scaled_hashring::{Error, HashFunction, Ring, RingConfig};
use std::collections::{HashMap, HashSet};

fn key_counts<'a>(ring: &Ring, keys: impl Iterator<Item = &'a str>) -> HashMap<String, usize> {
    let mut counts: HashMap<String, usize> =
        ring.members().into_iter().map(|n| (n, 0)).collect();
    for key in keys {
        *counts.get_mut(&ring.get(key).unwrap()).unwrap() += 1;
    }
    counts
}

#[test]
fn test_five_node_scenario() {
    let ring = Ring::new(five_nodes(), 1);

    assert_eq!(ring.members(), five_nodes());
    assert_eq!(ring.size(), 5);

    // Stable across runs and processes: FNV-1a is unseeded.
    assert_eq!(ring.get("someRandomKey").unwrap(), "node-c");

    let replicas = ring.get_n("someRandomKey", 3).unwrap();
    assert_eq!(replicas, vec!["node-c", "node-d", "node-e"]);

    let replicas = ring.get_n("someRandomKey", 8).unwrap();
    assert_eq!(replicas, vec!["node-c", "node-d", "node-e", "node-a", "node-b"]);
}

#[test]
fn test_membership_bookkeeping() {
    let ring = Ring::default();
    let mut expected = 0usize;

    for i in 0..20 {
        if ring.add_node(&format!("node-{:02}", i)).is_ok() {
            expected += 1;
        }
    }
    for i in (0..20).step_by(3) {
        if ring.remove_node(&format!("node-{:02}", i)).is_ok() {
            expected -= 1;
        }
    }
    assert!(ring.add_node("node-01").is_err());
    assert!(ring.remove_node("node-00").is_err());

    let members = ring.members();
    assert_eq!(members.len(), expected);
    assert_eq!(ring.size(), expected);

    let mut sorted = members.clone();
    sorted.sort();
    assert_eq!(members, sorted, "members must be ascending");
}

#[test]
fn test_lookup_depends_only_on_membership() {
    let ring = Ring::new(five_nodes(), 3);
    let before: Vec<String> = WORDS.iter().map(|k| ring.get(k).unwrap()).collect();

    ring.add_node("node-f").unwrap();
    ring.remove_node("node-f").unwrap();
    ring.add_node("node-a").unwrap_err();

    let after: Vec<String> = WORDS.iter().map(|k| ring.get(k).unwrap()).collect();
    assert_eq!(before, after);
}

#[test]
fn test_get_n_distinct_for_every_size() {
    let ring = Ring::new(five_nodes(), 3);

    for key in WORDS {
        let owner = ring.get(key).unwrap();
        for n in 1..=7 {
            let replicas = ring.get_n(key, n).unwrap();
            assert_eq!(replicas.len(), n.min(5));
            assert_eq!(replicas[0], owner);

            let distinct: HashSet<&String> = replicas.iter().collect();
            assert_eq!(distinct.len(), replicas.len(), "duplicate replica for {}", key);
        }
    }
}

#[test]
fn test_empty_ring_scenario() {
    let ring = Ring::new(Vec::<String>::new(), 3);

    assert!(ring.members().is_empty());
    assert_eq!(ring.get("someRandomKey"), Err(Error::EmptyRing));
    assert_eq!(ring.get_n("someRandomKey", 3), Err(Error::EmptyRing));
}

#[test]
fn test_distribution_word_corpus() {
    let ring = Ring::new(five_nodes(), 3);

    let counts = key_counts(&ring, WORDS.iter().copied());
    let values: Vec<usize> = counts.values().copied().collect();

    assert_eq!(values.iter().sum::<usize>(), WORDS.len());
    let ratio = imbalance(&values);
    assert!(ratio < 2.0, "max/min imbalance {:.2}: {:?}", ratio, counts);
}

#[test]
fn test_distribution_synthetic_keys() {
    let keys: Vec<String> = (0..10_000).map(|i| format!("key-{}", i)).collect();

    for hash in [HashFunction::Fnv1a64, HashFunction::Fnv1a32] {
        let config = RingConfig::default()
            .with_nodes(five_nodes())
            .with_hash(hash);
        let ring = Ring::with_config(config);

        let counts = key_counts(&ring, keys.iter().map(String::as_str));
        let values: Vec<usize> = counts.values().copied().collect();

        let ratio = imbalance(&values);
        assert!(ratio < 1.6, "{}: max/min imbalance {:.2}: {:?}", hash, ratio, counts);
    }
}

#[test]
fn test_node_change_rescales_keys() {
    // Lookups are O(1) at the cost of moving more keys than a classical ring
    // (ideal is 1/6 when growing from five to six nodes).
    let before = Ring::new(five_nodes(), 3);
    let after = Ring::new(five_nodes(), 3);
    after.add_node("node-f").unwrap();

    let total = 10_000;
    let moved = (0..total)
        .map(|i| format!("key-{}", i))
        .filter(|k| before.get(k).unwrap() != after.get(k).unwrap())
        .count();

    let pct = moved as f64 / total as f64;
    assert!(pct > 1.0 / 6.0, "moved {:.3} of keys", pct);
    assert!(pct < 0.9, "moved {:.3} of keys", pct);
}
