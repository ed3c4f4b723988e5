//! In-process consistent hashing with O(1) lookups.
//!
//! This crate provides:
//! - A named node registry with online add/remove
//! - Single-owner lookups (`get`) and ordered distinct replica lookups (`get_n`)
//! - FNV-1a key hashing (32 or 64 bit), unseeded and stable across processes
//! - Per-ring metrics in Prometheus text format and membership change events
//!
//! # Example
//!
//! ```rust
//! use scaled_hashring::{Error, Ring};
//!
//! let ring = Ring::new(["node-a", "node-b", "node-c", "node-d", "node-e"], 1);
//!
//! assert_eq!(ring.get("someRandomKey")?, "node-c");
//! assert_eq!(ring.get_n("someRandomKey", 3)?, ["node-c", "node-d", "node-e"]);
//!
//! ring.remove_node("node-c")?;
//! assert_eq!(ring.add_node("node-a"), Err(Error::NodeExists("node-a".into())));
//! # Ok::<(), Error>(())
//! ```
//!
//! # How lookups work
//!
//! Nodes are kept sorted by name and the list is repeated `replication_factor`
//! times (default 3). A key's hash is scaled linearly onto that list's index
//! range and rounded half up; the node at that index owns the key. There is
//! no search step.
//!
//! # Trade-offs
//!
//! - Lookups are O(1); adds are O(m log m) because the list is rebuilt.
//! - Adding or removing one node remaps more keys than a classical ring.
//!   Each key's position is rescaled against the new list length.
//!
//! Appropriate for:
//! - Read-heavy routing with rare membership changes
//! - Callers that own liveness detection and call `remove_node` themselves
//!
//! Not suitable for:
//! - High-frequency membership churn
//! - Workloads that need minimal key movement on rebalance
//! - Adversarial keys (FNV-1a is not a cryptographic hash)

mod config;
mod error;
mod hash;
mod metrics;
mod registry;
mod ring;
mod scale;

pub use config::{RingConfig, DEFAULT_REPLICATION_FACTOR, MAX_REPLICATION_FACTOR};
pub use error::Error;
pub use hash::{fnv1a_32, fnv1a_64, HashFunction};
pub use metrics::RingMetrics;
pub use registry::{Node, NodeRegistry};
pub use ring::{MembershipEvent, Ring};
pub use scale::{index_for, scale};
