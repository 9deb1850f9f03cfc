use sha256_merkle_rs::{build_merkle_root, input, sha256, MerkleError, MerkleTree, Result};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_empty_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let file = temp_dir.path().join("empty.txt");
    fs::write(&file, "")?;

    let data = input::read_file(&file)?;
    assert_eq!(
        sha256::hash(&data).to_hex(),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );

    Ok(())
}

#[test]
fn test_file_at_block_boundary() -> Result<()> {
    let temp_dir = TempDir::new()?;

    for len in [55usize, 56, 63, 64, 65] {
        let file = temp_dir.path().join(format!("boundary-{}.bin", len));
        let content = vec![b'B'; len];
        fs::write(&file, &content)?;

        assert_eq!(sha256::hash(&input::read_file(&file)?), sha256::hash(&content));
    }

    Ok(())
}

#[test]
fn test_large_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let file = temp_dir.path().join("large.bin");

    let content: Vec<u8> = (0..3 * 1024 * 1024).map(|i| (i % 251) as u8).collect();
    fs::write(&file, &content)?;

    let digest = sha256::hash(&input::read_file(&file)?);
    assert_eq!(digest, sha256::hash(&content));
    assert_eq!(digest.to_hex().len(), 64);

    Ok(())
}

#[test]
fn test_binary_leaves_in_directory() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let dir = temp_dir.path().join("blobs");
    fs::create_dir(&dir)?;

    let blobs: Vec<Vec<u8>> = (0..7)
        .map(|n| (0..=255u8).cycle().skip(n * 13).take(100 + n).collect())
        .collect();
    for (i, blob) in blobs.iter().enumerate() {
        fs::write(dir.join(format!("blob{}.bin", i)), blob)?;
    }

    let leaves = input::collect_directory(&dir)?;
    assert_eq!(leaves.len(), 7);
    assert_eq!(build_merkle_root(&leaves)?, build_merkle_root(&blobs)?);

    Ok(())
}

#[test]
fn test_empty_directory_has_no_root() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let dir = temp_dir.path().join("empty_dir");
    fs::create_dir(&dir)?;

    let leaves = input::collect_directory(&dir)?;
    assert!(leaves.is_empty());
    assert!(matches!(
        build_merkle_root(&leaves),
        Err(MerkleError::EmptyInput)
    ));

    Ok(())
}

#[test]
fn test_many_identical_leaves() -> Result<()> {
    let values = vec!["same"; 100];
    let tree = MerkleTree::new(&values)?;
    tree.verify()?;

    assert_eq!(tree.leaf_count(), 100);
    assert_eq!(tree.depth(), 7);
    assert!(tree.leaves().iter().all(|l| *l == tree.leaves()[0]));

    Ok(())
}

#[test]
fn test_missing_path() {
    let temp_dir = TempDir::new().unwrap();
    let result = input::collect_paths(&[temp_dir.path().join("missing")]);
    assert!(matches!(result, Err(MerkleError::PathNotFound(_))));
}
