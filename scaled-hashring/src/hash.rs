use std::fmt;
use std::str::FromStr;

use crate::Error;

const FNV32_OFFSET: u32 = 0x811c9dc5;
const FNV32_PRIME: u32 = 0x01000193;

const FNV64_OFFSET: u64 = 0xcbf29ce484222325;
const FNV64_PRIME: u64 = 0x100000001b3;

/// FNV-1a, 32-bit variant.
#[inline]
pub fn fnv1a_32(key: &[u8]) -> u32 {
    let mut hash = FNV32_OFFSET;
    for byte in key {
        hash ^= *byte as u32;
        hash = hash.wrapping_mul(FNV32_PRIME);
    }
    hash
}

/// FNV-1a, 64-bit variant.
#[inline]
pub fn fnv1a_64(key: &[u8]) -> u64 {
    let mut hash = FNV64_OFFSET;
    for byte in key {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(FNV64_PRIME);
    }
    hash
}

/// Key hash used to place keys on the ring.
///
/// Both variants are unseeded: the same bytes hash to the same value in
/// every process. Not suitable where an adversary controls the keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HashFunction {
    Fnv1a32,
    #[default]
    Fnv1a64,
}

impl HashFunction {
    /// Hash `key` into this function's domain, widened to `u64`.
    #[inline]
    pub fn hash(&self, key: &[u8]) -> u64 {
        match self {
            Self::Fnv1a32 => fnv1a_32(key) as u64,
            Self::Fnv1a64 => fnv1a_64(key),
        }
    }

    /// Largest value `hash` can return.
    pub fn max(&self) -> u64 {
        match self {
            Self::Fnv1a32 => u32::MAX as u64,
            Self::Fnv1a64 => u64::MAX,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fnv1a32 => "fnv1a32",
            Self::Fnv1a64 => "fnv1a64",
        }
    }
}

impl fmt::Display for HashFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HashFunction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fnv1a32" => Ok(Self::Fnv1a32),
            "fnv1a64" => Ok(Self::Fnv1a64),
            other => Err(Error::Config(format!("unknown hash function: {}", other))),
        }
    }
}
