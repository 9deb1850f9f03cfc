use crate::error::{MerkleError, Result};
use crate::merkle_tree::MerkleTree;
use std::fs;
use std::path::Path;

impl MerkleTree {
    /// Serialize tree to JSON
    pub fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| MerkleError::Serialization(e.to_string()))
    }

    /// Serialize tree to pretty JSON
    pub fn to_json_pretty(&self) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(self).map_err(|e| MerkleError::Serialization(e.to_string()))
    }

    /// Deserialize tree from JSON
    pub fn from_json(data: &[u8]) -> Result<Self> {
        serde_json::from_slice(data).map_err(|e| MerkleError::Deserialization(e.to_string()))
    }

    /// Serialize tree to CBOR
    pub fn to_cbor(&self) -> Result<Vec<u8>> {
        serde_cbor::to_vec(self).map_err(|e| MerkleError::Serialization(e.to_string()))
    }

    /// Deserialize tree from CBOR
    pub fn from_cbor(data: &[u8]) -> Result<Self> {
        serde_cbor::from_slice(data).map_err(|e| MerkleError::Deserialization(e.to_string()))
    }

    /// Save tree to file (CBOR format)
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let data = self.to_cbor()?;
        fs::write(path, data)?;
        Ok(())
    }

    /// Load tree from file (CBOR format). The loaded layers are not
    /// checked; call [`MerkleTree::verify`] before trusting them.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let data = fs::read(path)?;
        Self::from_cbor(&data)
    }
}
