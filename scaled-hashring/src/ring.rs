use parking_lot::RwLock;
use tokio::sync::broadcast;

use crate::registry::NodeRegistry;
use crate::scale::index_for;
use crate::{Error, HashFunction, RingConfig, RingMetrics};

/// Capacity of the membership event channel. Slow subscribers lag and skip.
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Membership change event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MembershipEvent {
    Joined(String),
    Left(String),
}

/// Consistent hash ring with O(1) scaled-index lookups.
///
/// The sorted (and replicated) node list is the key space: a key's hash is
/// scaled linearly onto the list's index range, see [`crate::index_for`].
/// Lookups take a shared lock; `add_node`/`remove_node` hold the exclusive
/// lock for the whole rebuild, so readers only ever see a complete list.
///
/// Share between threads with `Arc<Ring>`.
#[derive(Debug)]
pub struct Ring {
    registry: RwLock<NodeRegistry>,
    hash: HashFunction,
    metrics: RingMetrics,
    event_tx: broadcast::Sender<MembershipEvent>,
}

impl Ring {
    /// Build a ring from `config`. Duplicate initial nodes are skipped.
    pub fn with_config(config: RingConfig) -> Self {
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        let ring = Self {
            registry: RwLock::new(NodeRegistry::new(config.replication_factor)),
            hash: config.hash,
            metrics: RingMetrics::default(),
            event_tx,
        };

        ring.add_nodes(&config.nodes);

        tracing::debug!(
            size = ring.size(),
            replication_factor = ring.replication_factor(),
            hash = %ring.hash,
            "Hash ring created"
        );
        ring
    }

    /// Build a ring with the default hash function.
    pub fn new<I, S>(nodes: I, replication_factor: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_config(
            RingConfig::default()
                .with_nodes(nodes)
                .with_replication_factor(replication_factor),
        )
    }

    /// Add a node by name.
    ///
    /// # Errors
    ///
    /// [`Error::NodeExists`] if the name is already a member; the ring is unchanged.
    pub fn add_node(&self, name: &str) -> Result<(), Error> {
        let mut registry = self.registry.write();
        if let Err(e) = registry.insert(name) {
            self.metrics.inc_add_rejected();
            tracing::debug!(node = %name, "Node already in ring");
            return Err(e);
        }

        self.metrics.inc_node_added();
        self.metrics.set_size(registry.len(), registry.slot_count());
        tracing::debug!(
            node = %name,
            size = registry.len(),
            slots = registry.slot_count(),
            "Node added to ring"
        );

        // Sent under the write lock so events arrive in commit order.
        let _ = self.event_tx.send(MembershipEvent::Joined(name.to_string()));
        Ok(())
    }

    /// Add each name in order. A duplicate does not stop the remaining adds.
    pub fn add_nodes<I, S>(&self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            // Rejections are logged and counted by add_node.
            let _ = self.add_node(name.as_ref());
        }
    }

    /// Remove a node and all of its slots.
    ///
    /// # Errors
    ///
    /// [`Error::NodeNotExists`] if the name is not a member; the ring is unchanged.
    pub fn remove_node(&self, name: &str) -> Result<(), Error> {
        let mut registry = self.registry.write();
        if let Err(e) = registry.remove(name) {
            self.metrics.inc_remove_rejected();
            tracing::debug!(node = %name, "Node not in ring");
            return Err(e);
        }

        self.metrics.inc_node_removed();
        self.metrics.set_size(registry.len(), registry.slot_count());
        tracing::debug!(
            node = %name,
            size = registry.len(),
            slots = registry.slot_count(),
            "Node removed from ring"
        );

        let _ = self.event_tx.send(MembershipEvent::Left(name.to_string()));
        Ok(())
    }

    /// Node owning `key`.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyRing`] if the ring has no nodes.
    pub fn get(&self, key: &str) -> Result<String, Error> {
        let registry = self.registry.read();
        let slot = self.locate(&registry, key)?;
        let name = registry
            .slot(slot)
            .map(|node| node.name.clone())
            .ok_or(Error::EmptyRing)?;

        self.metrics.inc_lookup();
        tracing::trace!(key, slot, node = %name, "Resolved key");
        Ok(name)
    }

    /// Up to `n` distinct nodes for `key`, starting with the owner from
    /// [`Ring::get`] and continuing through the sorted node list with
    /// wraparound. `n` is clamped to [`Ring::size`].
    ///
    /// The walk runs over real nodes, not slots, so replication never
    /// yields the same node twice.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyRing`] if the ring has no nodes.
    pub fn get_n(&self, key: &str, n: usize) -> Result<Vec<String>, Error> {
        let registry = self.registry.read();
        let slot = self.locate(&registry, key)?;
        let start = registry.unique_position(slot).ok_or(Error::EmptyRing)?;

        let unique = registry.unique();
        let count = n.min(unique.len());
        let replicas: Vec<String> = (0..count)
            .map(|i| unique[(start + i) % unique.len()].name.clone())
            .collect();

        self.metrics.inc_lookup();
        tracing::trace!(key, slot, count, "Resolved key replicas");
        Ok(replicas)
    }

    fn locate(&self, registry: &NodeRegistry, key: &str) -> Result<usize, Error> {
        let hash = self.hash.hash(key.as_bytes());
        match index_for(hash, self.hash.max(), registry.slot_count()) {
            Some(slot) => Ok(slot),
            None => {
                self.metrics.inc_lookup_empty_ring();
                tracing::debug!(key, "Lookup on empty hash ring");
                Err(Error::EmptyRing)
            }
        }
    }

    /// Real node names, sorted ascending and deduplicated.
    pub fn members(&self) -> Vec<String> {
        self.registry.read().names()
    }

    /// Number of real nodes, independent of the replication factor.
    pub fn size(&self) -> usize {
        self.registry.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.read().is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.registry.read().contains(name)
    }

    /// Ring length: `size() * replication_factor()`.
    pub fn slot_count(&self) -> usize {
        self.registry.read().slot_count()
    }

    pub fn replication_factor(&self) -> usize {
        self.registry.read().replication_factor()
    }

    pub fn hash_function(&self) -> HashFunction {
        self.hash
    }

    pub fn metrics(&self) -> &RingMetrics {
        &self.metrics
    }

    /// Subscribe to membership changes.
    ///
    /// Events are broadcast while the write lock is still held, so they arrive
    /// in the same order the changes were committed and a subscriber that
    /// queries the ring after `recv` sees at least that change. Nodes added
    /// during construction produce no events.
    pub fn subscribe(&self) -> broadcast::Receiver<MembershipEvent> {
        self.event_tx.subscribe()
    }
}

impl Default for Ring {
    fn default() -> Self {
        Self::with_config(RingConfig::default())
    }
}
