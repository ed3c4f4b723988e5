use std::collections::HashMap;
use std::fmt;

use crate::config::{DEFAULT_REPLICATION_FACTOR, MAX_REPLICATION_FACTOR};
use crate::Error;

/// A named member of the ring. Identity is the name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Node {
    pub name: String,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Unsynchronised node bookkeeping behind [`crate::Ring`].
///
/// Holds three views of the same membership:
/// - `members`: name lookup for O(1) existence checks, never iterated for lookups
/// - `unique`: every node once, ascending by name
/// - `slots`: `unique` repeated `replication_factor` times back to back; this
///   is the address space keys are scaled into
///
/// Every insert re-sorts and re-replicates the whole list (O(m log m)).
/// Membership changes are expected to be rare next to lookups; callers with
/// heavy churn should batch changes or look elsewhere.
#[derive(Debug, Clone)]
pub struct NodeRegistry {
    members: HashMap<String, Node>,
    unique: Vec<Node>,
    slots: Vec<Node>,
    replication_factor: usize,
}

impl NodeRegistry {
    /// Empty registry. A replication factor of 0 falls back to the default;
    /// one above [`MAX_REPLICATION_FACTOR`] is clamped to it.
    pub fn new(replication_factor: usize) -> Self {
        let replication_factor = match replication_factor {
            0 => DEFAULT_REPLICATION_FACTOR,
            rf if rf > MAX_REPLICATION_FACTOR => {
                tracing::warn!(
                    requested = rf,
                    max = MAX_REPLICATION_FACTOR,
                    "Replication factor clamped"
                );
                MAX_REPLICATION_FACTOR
            }
            rf => rf,
        };

        Self {
            members: HashMap::new(),
            unique: Vec::new(),
            slots: Vec::new(),
            replication_factor,
        }
    }

    pub fn insert(&mut self, name: &str) -> Result<(), Error> {
        if self.members.contains_key(name) {
            return Err(Error::NodeExists(name.to_string()));
        }

        self.members.insert(name.to_string(), Node::new(name));
        self.rebuild();
        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> Result<(), Error> {
        if self.members.remove(name).is_none() {
            return Err(Error::NodeNotExists(name.to_string()));
        }

        // Filtering keeps every block identically ordered, so no re-sort.
        self.unique.retain(|node| node.name != name);
        self.slots.retain(|node| node.name != name);
        Ok(())
    }

    fn rebuild(&mut self) {
        let mut unique: Vec<Node> = self.members.values().cloned().collect();
        unique.sort();

        let capacity = unique.len().saturating_mul(self.replication_factor);
        let mut slots = Vec::with_capacity(capacity);
        for _ in 0..self.replication_factor {
            slots.extend(unique.iter().cloned());
        }

        self.unique = unique;
        self.slots = slots;
    }

    pub fn contains(&self, name: &str) -> bool {
        self.members.contains_key(name)
    }

    /// Number of real nodes, independent of the replication factor.
    pub fn len(&self) -> usize {
        self.unique.len()
    }

    pub fn is_empty(&self) -> bool {
        self.unique.is_empty()
    }

    /// Ring length: `len() * replication_factor()`.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn replication_factor(&self) -> usize {
        self.replication_factor
    }

    /// Real nodes, sorted ascending by name.
    pub fn unique(&self) -> &[Node] {
        &self.unique
    }

    pub fn slot(&self, idx: usize) -> Option<&Node> {
        self.slots.get(idx)
    }

    /// Position in `unique()` of the node occupying slot `idx`.
    pub fn unique_position(&self, idx: usize) -> Option<usize> {
        if idx >= self.slots.len() {
            return None;
        }
        Some(idx % self.unique.len())
    }

    pub fn names(&self) -> Vec<String> {
        self.unique.iter().map(|node| node.name.clone()).collect()
    }
}

impl Default for NodeRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_REPLICATION_FACTOR)
    }
}
