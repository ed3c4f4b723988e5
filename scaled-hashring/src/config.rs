use std::env;

use crate::{Error, HashFunction};

/// Replication factor used when none (or zero) is given.
pub const DEFAULT_REPLICATION_FACTOR: usize = 3;

/// Largest accepted replication factor. Larger values are rejected by
/// [`RingConfig::from_env`] and clamped by [`crate::NodeRegistry::new`].
pub const MAX_REPLICATION_FACTOR: usize = 1024;

const ENV_NODES: &str = "HASHRING_NODES";
const ENV_REPLICATION_FACTOR: &str = "HASHRING_REPLICATION_FACTOR";
const ENV_HASH: &str = "HASHRING_HASH";

/// Construction parameters for a [`crate::Ring`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingConfig {
    /// Nodes added at construction, in order. Duplicates are skipped.
    pub nodes: Vec<String>,
    /// Contiguous copies of the sorted node list on the ring. 0 means default,
    /// values above [`MAX_REPLICATION_FACTOR`] are clamped.
    pub replication_factor: usize,
    pub hash: HashFunction,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            replication_factor: DEFAULT_REPLICATION_FACTOR,
            hash: HashFunction::default(),
        }
    }
}

impl RingConfig {
    pub fn with_nodes<I, S>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.nodes = nodes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_replication_factor(mut self, replication_factor: usize) -> Self {
        self.replication_factor = replication_factor;
        self
    }

    pub fn with_hash(mut self, hash: HashFunction) -> Self {
        self.hash = hash;
        self
    }

    /// Read configuration from the environment.
    ///
    /// - `HASHRING_NODES`: comma separated node names (blank entries skipped)
    /// - `HASHRING_REPLICATION_FACTOR`: integer in `0..=MAX_REPLICATION_FACTOR`, 0 means default
    /// - `HASHRING_HASH`: `fnv1a32` or `fnv1a64`
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars<F>(var: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(nodes) = var(ENV_NODES) {
            config.nodes = nodes
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(String::from)
                .collect();
        }

        if let Some(raw) = var(ENV_REPLICATION_FACTOR) {
            let replication_factor: usize = raw.trim().parse().map_err(|_| {
                Error::Config(format!(
                    "{} must be a non-negative integer, got {:?}",
                    ENV_REPLICATION_FACTOR, raw
                ))
            })?;
            if replication_factor > MAX_REPLICATION_FACTOR {
                return Err(Error::Config(format!(
                    "{} must be at most {}, got {}",
                    ENV_REPLICATION_FACTOR, MAX_REPLICATION_FACTOR, replication_factor
                )));
            }
            config.replication_factor = replication_factor;
        }

        if let Some(raw) = var(ENV_HASH) {
            config.hash = raw.parse()?;
        }

        Ok(config)
    }
}
