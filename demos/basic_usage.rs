use sha256_merkle_rs::{
    build_merkle_root, input, sha256, verify_root, MerkleConfig, MerkleTree, OddNodePolicy, Result,
};
use std::fs;
use tempfile::TempDir;

fn main() -> Result<()> {
    println!("=== SHA-256 Merkle - Basic Usage Example ===\n");

    // Single digests
    println!("1. Hashing single values...");
    println!("   sha256(\"\")    = {}", sha256::hash(b""));
    println!("   sha256(\"abc\") = {}\n", sha256::hash(b"abc"));

    // Merkle root over strings
    println!("2. Building a Merkle root over 9 values...");
    let values = ["1", "2", "3", "4", "5", "6", "7", "8", "9"];
    let root = build_merkle_root(&values)?;
    println!("   Root: {}\n", root);

    // Keep every layer
    println!("3. Keeping the intermediate tree...");
    let tree = MerkleTree::new(&values)?;
    for (depth, level) in tree.levels().iter().enumerate() {
        println!("   level {}: {} digests", depth, level.len());
    }
    tree.verify()?;
    println!("   ✓ Tree verified\n");

    // Other odd-node conventions
    println!("4. Comparing odd-node rules...");
    for policy in [
        OddNodePolicy::HashWithEmpty,
        OddNodePolicy::Duplicate,
        OddNodePolicy::Promote,
    ] {
        let config = MerkleConfig::new().with_odd_node_policy(policy);
        let tree = MerkleTree::with_config(&values, &config)?;
        println!("   {:<16} {}", policy.to_string(), tree.root());
    }
    println!();

    // Files as leaves
    println!("5. Building a root over files...");
    let temp_dir = TempDir::new()?;
    let input_dir = temp_dir.path().join("example_input");
    fs::create_dir(&input_dir)?;
    fs::write(input_dir.join("readme.txt"), b"Welcome!")?;
    fs::write(input_dir.join("data.txt"), b"Some important data here.")?;

    let leaves = input::collect_directory(&input_dir)?;
    let file_root = build_merkle_root(&leaves)?;
    println!("   {} files, root: {}", leaves.len(), file_root);

    verify_root(&leaves, &file_root)?;
    println!("   ✓ Root verified\n");

    // Persist the tree
    println!("6. Saving the tree as CBOR...");
    let tree_file = temp_dir.path().join("tree.cbor");
    tree.save_to_file(&tree_file)?;
    let loaded = MerkleTree::load_from_file(&tree_file)?;
    loaded.verify()?;
    println!("   ✓ Loaded tree has root {}\n", loaded.root());

    println!("=== Example completed successfully! ===");

    Ok(())
}
