use std::sync::atomic::{AtomicU64, Ordering};

/// Per-ring counters, updated with relaxed atomics.
///
/// Owned by the [`crate::Ring`] they describe; two rings never share counters.
#[derive(Debug, Default)]
pub struct RingMetrics {
    /// Successful `get`/`get_n` lookups
    pub lookups: AtomicU64,
    /// Lookups refused because the ring had no nodes
    pub lookups_empty_ring: AtomicU64,
    /// Nodes added
    pub nodes_added: AtomicU64,
    /// Nodes removed
    pub nodes_removed: AtomicU64,
    /// Adds refused because the node was already present
    pub add_rejected: AtomicU64,
    /// Removes refused because the node was absent
    pub remove_rejected: AtomicU64,
    /// Full rebuilds of the positional list
    pub rebuilds: AtomicU64,
    /// Current number of real nodes
    pub node_count: AtomicU64,
    /// Current ring length (nodes times replication factor)
    pub slot_count: AtomicU64,
}

impl RingMetrics {
    pub fn inc_lookup(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_lookup_empty_ring(&self) {
        self.lookups_empty_ring.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_node_added(&self) {
        self.nodes_added.fetch_add(1, Ordering::Relaxed);
        self.rebuilds.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_node_removed(&self) {
        self.nodes_removed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_add_rejected(&self) {
        self.add_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_remove_rejected(&self) {
        self.remove_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn set_size(&self, nodes: usize, slots: usize) {
        self.node_count.store(nodes as u64, Ordering::Relaxed);
        self.slot_count.store(slots as u64, Ordering::Relaxed);
    }

    /// Format all metrics as Prometheus text
    pub fn to_prometheus(&self) -> String {
        let mut output = String::new();

        write_metric(
            &mut output,
            "hashring_lookups_total",
            "Key lookups answered by the ring",
            "counter",
            &self.lookups,
        );
        write_metric(
            &mut output,
            "hashring_lookups_empty_ring_total",
            "Key lookups refused because the ring had no nodes",
            "counter",
            &self.lookups_empty_ring,
        );
        write_metric(
            &mut output,
            "hashring_nodes_added_total",
            "Nodes added to the ring",
            "counter",
            &self.nodes_added,
        );
        write_metric(
            &mut output,
            "hashring_nodes_removed_total",
            "Nodes removed from the ring",
            "counter",
            &self.nodes_removed,
        );
        write_metric(
            &mut output,
            "hashring_add_rejected_total",
            "Node adds rejected because the node already existed",
            "counter",
            &self.add_rejected,
        );
        write_metric(
            &mut output,
            "hashring_remove_rejected_total",
            "Node removals rejected because the node did not exist",
            "counter",
            &self.remove_rejected,
        );
        write_metric(
            &mut output,
            "hashring_rebuilds_total",
            "Full sorts and rebuilds of the positional node list",
            "counter",
            &self.rebuilds,
        );
        write_metric(
            &mut output,
            "hashring_nodes",
            "Real nodes currently in the ring",
            "gauge",
            &self.node_count,
        );
        write_metric(
            &mut output,
            "hashring_slots",
            "Ring length (nodes times replication factor)",
            "gauge",
            &self.slot_count,
        );

        output
    }
}

fn write_metric(output: &mut String, name: &str, help: &str, kind: &str, value: &AtomicU64) {
    if !output.is_empty() {
        output.push('\n');
    }
    output.push_str(&format!("# HELP {} {}\n", name, help));
    output.push_str(&format!("# TYPE {} {}\n", name, kind));
    output.push_str(&format!("{} {}\n", name, value.load(Ordering::Relaxed)));
}
