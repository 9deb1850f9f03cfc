use crate::error::{MerkleError, Result};
use crate::sha256;
use crate::types::{Digest, MerkleConfig, OddNodePolicy};
use serde::{Deserialize, Serialize};

/// Hash every value into a leaf digest, keeping input order
pub fn hash_leaves<V: AsRef<[u8]>>(values: &[V]) -> Vec<Digest> {
    values.iter().map(|v| sha256::hash(v.as_ref())).collect()
}

/// Hash two child digests into their parent.
///
/// Children are concatenated in their hex form, so the hashed message is
/// always 128 ASCII bytes.
pub fn hash_pair(left: &Digest, right: &Digest) -> Digest {
    let mut buf = String::with_capacity(128);
    buf.push_str(&left.to_hex());
    buf.push_str(&right.to_hex());
    sha256::hash(buf.as_bytes())
}

/// Parent of an orphan paired with the empty string
fn hash_with_empty(orphan: &Digest) -> Digest {
    sha256::hash(orphan.to_hex().as_bytes())
}

/// Produce the next layer by pairing consecutive digests left to right
pub fn pair_hashes(layer: &[Digest], policy: OddNodePolicy) -> Vec<Digest> {
    layer
        .chunks(2)
        .map(|chunk| match chunk {
            [left, right] => hash_pair(left, right),
            [orphan] => match policy {
                OddNodePolicy::HashWithEmpty => hash_with_empty(orphan),
                OddNodePolicy::Duplicate => hash_pair(orphan, orphan),
                OddNodePolicy::Promote => *orphan,
            },
            _ => unreachable!("chunks(2) yields one or two items"),
        })
        .collect()
}

/// Compute the Merkle root of `values` with the default configuration
pub fn build_merkle_root<V: AsRef<[u8]>>(values: &[V]) -> Result<Digest> {
    build_merkle_root_with_config(values, &MerkleConfig::default())
}

/// Compute the Merkle root of `values`.
///
/// Only the current layer is kept between rounds. Fails with
/// [`MerkleError::EmptyInput`] when `values` is empty.
pub fn build_merkle_root_with_config<V: AsRef<[u8]>>(
    values: &[V],
    config: &MerkleConfig,
) -> Result<Digest> {
    if values.is_empty() {
        return Err(MerkleError::EmptyInput);
    }

    let mut layer = hash_leaves(values);
    while layer.len() > 1 {
        layer = pair_hashes(&layer, config.odd_node);
    }

    Ok(layer[0])
}

/// Recompute the root of `values` and compare it to `expected`
pub fn verify_root<V: AsRef<[u8]>>(values: &[V], expected: &Digest) -> Result<()> {
    let root = build_merkle_root(values)?;
    if root == *expected {
        Ok(())
    } else {
        Err(MerkleError::RootMismatch {
            expected: expected.to_hex(),
            got: root.to_hex(),
        })
    }
}

/// Merkle tree with every layer kept, leaves first and root last
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleTree {
    /// Root digest
    root: Digest,

    /// Odd-node rule the layers were built with
    odd_node: OddNodePolicy,

    /// All layers from the leaves up to the single root
    levels: Vec<Vec<Digest>>,
}

impl MerkleTree {
    /// Create a Merkle tree from values
    pub fn new<V: AsRef<[u8]>>(values: &[V]) -> Result<Self> {
        Self::with_config(values, &MerkleConfig::default())
    }

    pub fn with_config<V: AsRef<[u8]>>(values: &[V], config: &MerkleConfig) -> Result<Self> {
        if values.is_empty() {
            return Err(MerkleError::EmptyInput);
        }

        let leaves = hash_leaves(values);
        let levels = build_levels(leaves, config.odd_node);
        let root = levels[levels.len() - 1][0];

        Ok(Self {
            root,
            odd_node: config.odd_node,
            levels,
        })
    }

    pub fn root(&self) -> Digest {
        self.root
    }

    pub fn odd_node(&self) -> OddNodePolicy {
        self.odd_node
    }

    pub fn levels(&self) -> &[Vec<Digest>] {
        &self.levels
    }

    pub fn leaves(&self) -> &[Digest] {
        self.levels.first().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves().len()
    }

    /// Number of reduction rounds between the leaves and the root
    pub fn depth(&self) -> usize {
        self.levels.len().saturating_sub(1)
    }

    /// Check that every layer is derived from the one below it and that
    /// the top layer is exactly the root
    pub fn verify(&self) -> Result<()> {
        let leaves = self.leaves();
        if leaves.is_empty() {
            return Err(MerkleError::EmptyInput);
        }

        let expected = build_levels(leaves.to_vec(), self.odd_node);
        if expected != self.levels {
            return Err(MerkleError::RootMismatch {
                expected: expected[expected.len() - 1][0].to_hex(),
                got: self.root.to_hex(),
            });
        }

        let derived = expected[expected.len() - 1][0];
        if derived != self.root {
            return Err(MerkleError::RootMismatch {
                expected: derived.to_hex(),
                got: self.root.to_hex(),
            });
        }

        Ok(())
    }
}

/// Build levels bottom up. `leaves` must not be empty.
fn build_levels(leaves: Vec<Digest>, policy: OddNodePolicy) -> Vec<Vec<Digest>> {
    let mut levels = vec![leaves];

    while levels[levels.len() - 1].len() > 1 {
        let next = pair_hashes(&levels[levels.len() - 1], policy);
        levels.push(next);
    }

    levels
}

/// Builder for creating Merkle trees
pub struct MerkleTreeBuilder {
    values: Vec<Vec<u8>>,
    config: MerkleConfig,
}

impl MerkleTreeBuilder {
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            config: MerkleConfig::default(),
        }
    }

    pub fn with_config(mut self, config: MerkleConfig) -> Self {
        self.config = config;
        self
    }

    pub fn add_leaf(&mut self, value: impl Into<Vec<u8>>) {
        self.values.push(value.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn build(self) -> Result<MerkleTree> {
        MerkleTree::with_config(&self.values, &self.config)
    }
}

impl Default for MerkleTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
