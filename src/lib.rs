//! # SHA-256 Merkle
//!
//! A from-scratch SHA-256 engine and an order-sensitive Merkle root built
//! on top of it.
//!
//! ## Features
//!
//! - **SHA-256**: padding, message schedule and 64-round compression over a
//!   complete in-memory message
//! - **Merkle roots**: leaves hashed in input order, folded pairwise until a
//!   single digest remains
//! - **Odd-node rule**: an unpaired digest is hashed with an empty partner
//!   by default; duplicate and promote rules are available for matching
//!   other systems
//! - **Intermediate tree**: every layer can be kept and serialized to JSON or
//!   CBOR
//!
//! Parent digests hash the concatenation of their children's lowercase hex
//! strings, so a parent is always the hash of 128 ASCII bytes (or 64 for an
//! orphan paired with the empty string).
//!
//! ## Quick Start
//!
//! ```
//! use sha256_merkle_rs::{build_merkle_root, sha256};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let digest = sha256::hash(b"");
//! assert_eq!(
//!     digest.to_hex(),
//!     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
//! );
//!
//! let root = build_merkle_root(&["a", "b", "c"])?;
//! assert_eq!(root.to_hex().len(), 64);
//! # Ok(())
//! # }
//! ```
//!
//! ## Keeping the tree
//!
//! ```
//! use sha256_merkle_rs::{MerkleConfig, MerkleTree, OddNodePolicy};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = MerkleConfig::new().with_odd_node_policy(OddNodePolicy::Duplicate);
//! let tree = MerkleTree::with_config(&["1", "2", "3"], &config)?;
//!
//! assert_eq!(tree.levels().len(), 3);
//! let json = tree.to_json()?;
//! let restored = MerkleTree::from_json(&json)?;
//! restored.verify()?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod input;
pub mod merkle_tree;
pub mod serialize;
pub mod sha256;
pub mod types;

// Re-export commonly used items
pub use error::{MerkleError, Result};
pub use merkle_tree::{
    build_merkle_root, build_merkle_root_with_config, verify_root, MerkleTree, MerkleTreeBuilder,
};
pub use types::{Digest, MerkleConfig, OddNodePolicy, BLOCK_SIZE, DIGEST_HEX_LEN};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
