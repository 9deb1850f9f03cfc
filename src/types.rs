use crate::error::MerkleError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Size of one SHA-256 message block in bytes (512 bits)
pub const BLOCK_SIZE: usize = 64;

/// Length of a digest rendered as lowercase hex
pub const DIGEST_HEX_LEN: usize = 64;

/// A 256-bit SHA-256 digest held as eight big-endian 32-bit words.
///
/// The canonical external form is 64 lowercase hex characters with no
/// separators. Equality compares all 256 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest([u32; 8]);

impl Digest {
    pub const fn from_words(words: [u32; 8]) -> Self {
        Self(words)
    }

    pub fn words(&self) -> &[u32; 8] {
        &self.0
    }

    /// Digest bytes, each word written big-endian
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.0.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        out
    }

    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        let mut words = [0u32; 8];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
            *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Self(words)
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Parse a 64-character hex string
    pub fn from_hex(s: &str) -> Result<Self, MerkleError> {
        if s.len() != DIGEST_HEX_LEN {
            return Err(MerkleError::InvalidDigest(format!(
                "expected {} hex characters, got {}",
                DIGEST_HEX_LEN,
                s.len()
            )));
        }

        let mut bytes = [0u8; 32];
        hex::decode_to_slice(s, &mut bytes)
            .map_err(|e| MerkleError::InvalidDigest(e.to_string()))?;
        Ok(Self::from_bytes(bytes))
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in &self.0 {
            write!(f, "{:08x}", word)?;
        }
        Ok(())
    }
}

impl FromStr for Digest {
    type Err = MerkleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Digest {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Digest::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// How an unpaired digest at the end of an odd-length layer moves up a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OddNodePolicy {
    /// Parent is `hash(hex(orphan) ++ "")`
    #[default]
    HashWithEmpty,
    /// Parent is `hash(hex(orphan) ++ hex(orphan))`
    Duplicate,
    /// Orphan is carried into the next layer unchanged
    Promote,
}

impl fmt::Display for OddNodePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OddNodePolicy::HashWithEmpty => write!(f, "hash-with-empty"),
            OddNodePolicy::Duplicate => write!(f, "duplicate"),
            OddNodePolicy::Promote => write!(f, "promote"),
        }
    }
}

/// Configuration for Merkle assembly
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MerkleConfig {
    /// Rule applied to the last digest of every odd-length layer
    pub odd_node: OddNodePolicy,
}

impl MerkleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_odd_node_policy(mut self, policy: OddNodePolicy) -> Self {
        self.odd_node = policy;
        self
    }
}
