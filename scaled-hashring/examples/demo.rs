//! Demo of scaled-hashring key placement.
//!
//!   HASHRING_NODES=node-a,node-b,node-c cargo run -p scaled-hashring --example demo -- user-1 user-2
//!
//! Prints the owner and replicas of each key given on the command line, the
//! load spread over 10,000 synthetic keys, and how many keys move when a node
//! joins. Set `RUST_LOG=scaled_hashring=debug` to see ring logging.

use scaled_hashring::{MembershipEvent, Ring, RingConfig};
use std::collections::BTreeMap;
use tracing_subscriber::EnvFilter;

const SAMPLE_KEYS: usize = 10_000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut config = RingConfig::from_env()?;
    if config.nodes.is_empty() {
        config = config.with_nodes(["node-a", "node-b", "node-c", "node-d", "node-e"]);
    }

    let ring = Ring::with_config(config);
    let mut events = ring.subscribe();

    println!(
        "Ring: {} node(s), replication factor {}, {} slots, hash {}",
        ring.size(),
        ring.replication_factor(),
        ring.slot_count(),
        ring.hash_function()
    );
    println!("Members: {}", ring.members().join(", "));
    println!();

    let mut keys: Vec<String> = std::env::args().skip(1).collect();
    if keys.is_empty() {
        keys.push("someRandomKey".to_string());
    }
    for key in &keys {
        println!(
            "{:<24} -> {:<12} replicas: {}",
            key,
            ring.get(key)?,
            ring.get_n(key, 3)?.join(", ")
        );
    }
    println!();

    let sample: Vec<String> = (0..SAMPLE_KEYS).map(|i| format!("key-{}", i)).collect();
    let before = owners(&ring, &sample)?;

    let mut load: BTreeMap<&str, usize> = BTreeMap::new();
    for owner in &before {
        *load.entry(owner.as_str()).or_default() += 1;
    }
    println!("Load over {} keys:", SAMPLE_KEYS);
    for (node, count) in &load {
        let pct = *count as f64 * 100.0 / SAMPLE_KEYS as f64;
        println!("  {:<12} {:>6} ({:.1}%)", node, count, pct);
    }
    println!();

    ring.add_node("node-new")?;
    if let Ok(MembershipEvent::Joined(name)) = events.try_recv() {
        println!("Joined: {}", name);
    }

    let after = owners(&ring, &sample)?;
    let moved = before.iter().zip(&after).filter(|(a, b)| a != b).count();
    println!(
        "Keys moved after join: {} ({:.1}%, classical ideal {:.1}%)",
        moved,
        moved as f64 * 100.0 / SAMPLE_KEYS as f64,
        100.0 / ring.size() as f64
    );
    println!();

    print!("{}", ring.metrics().to_prometheus());
    Ok(())
}

fn owners(ring: &Ring, keys: &[String]) -> Result<Vec<String>, scaled_hashring::Error> {
    keys.iter().map(|key| ring.get(key)).collect()
}
