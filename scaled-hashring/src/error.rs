use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Node already exists: {0}")]
    NodeExists(String),

    #[error("Node does not exist: {0}")]
    NodeNotExists(String),

    #[error("Hash ring has no nodes")]
    EmptyRing,

    #[error("Configuration error: {0}")]
    Config(String),
}
