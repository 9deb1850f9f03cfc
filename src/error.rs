use thiserror::Error;

#[derive(Error, Debug)]
pub enum MerkleError {
    #[error("Cannot build a Merkle root from zero values")]
    EmptyInput,

    #[error("Merkle root mismatch: expected {expected}, got {got}")]
    RootMismatch { expected: String, got: String },

    #[error("Invalid digest: {0}")]
    InvalidDigest(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Path not found: {0}")]
    PathNotFound(String),
}

pub type Result<T> = std::result::Result<T, MerkleError>;
