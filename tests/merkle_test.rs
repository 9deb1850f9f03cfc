/// Merkle assembly checked against roots computed by hand from
/// `sha256::hash`, for each odd-node rule.
use sha256_merkle_rs::merkle_tree::{hash_leaves, hash_pair, pair_hashes};
use sha256_merkle_rs::{
    build_merkle_root, build_merkle_root_with_config, sha256, Digest, MerkleConfig, MerkleError,
    MerkleTree, OddNodePolicy, Result,
};

/// hash(hex(left) ++ hex(right))
fn parent(left: &Digest, right: &Digest) -> Digest {
    let joined = format!("{}{}", left.to_hex(), right.to_hex());
    sha256::hash(joined.as_bytes())
}

/// hash(hex(orphan) ++ "")
fn orphan(node: &Digest) -> Digest {
    sha256::hash(node.to_hex().as_bytes())
}

fn leaf(value: &str) -> Digest {
    sha256::hash(value.as_bytes())
}

#[test]
fn test_deterministic_root() -> Result<()> {
    let first = build_merkle_root(&["a", "b", "c"])?;
    let second = build_merkle_root(&["a", "b", "c"])?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_order_sensitive() -> Result<()> {
    let forward = build_merkle_root(&["a", "b", "c"])?;
    let reversed = build_merkle_root(&["c", "b", "a"])?;
    assert_ne!(forward, reversed);

    let swapped = build_merkle_root(&["b", "a"])?;
    assert_ne!(build_merkle_root(&["a", "b"])?, swapped);
    Ok(())
}

#[test]
fn test_single_value_is_its_own_root() -> Result<()> {
    assert_eq!(build_merkle_root(&["only"])?, leaf("only"));

    for policy in [
        OddNodePolicy::HashWithEmpty,
        OddNodePolicy::Duplicate,
        OddNodePolicy::Promote,
    ] {
        let config = MerkleConfig::new().with_odd_node_policy(policy);
        assert_eq!(build_merkle_root_with_config(&["only"], &config)?, leaf("only"));
    }
    Ok(())
}

#[test]
fn test_empty_input_is_an_error() {
    let values: Vec<Vec<u8>> = Vec::new();
    assert!(matches!(
        build_merkle_root(&values),
        Err(MerkleError::EmptyInput)
    ));
    assert!(matches!(
        MerkleTree::new(&values),
        Err(MerkleError::EmptyInput)
    ));
}

#[test]
fn test_empty_value_is_a_valid_leaf() -> Result<()> {
    let root = build_merkle_root(&[""])?;
    assert_eq!(
        root.to_hex(),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
    Ok(())
}

#[test]
fn test_two_leaves_match_manual_parent() -> Result<()> {
    let expected = parent(&leaf("x"), &leaf("y"));
    assert_eq!(build_merkle_root(&["x", "y"])?, expected);
    assert_eq!(hash_pair(&leaf("x"), &leaf("y")), expected);
    Ok(())
}

#[test]
fn test_three_leaves_hash_with_empty() -> Result<()> {
    // Level 1: [p(a,b), o(c)]
    // Root:    p(p(a,b), o(c))
    let l1_0 = parent(&leaf("a"), &leaf("b"));
    let l1_1 = orphan(&leaf("c"));
    let expected = parent(&l1_0, &l1_1);

    assert_eq!(build_merkle_root(&["a", "b", "c"])?, expected);
    Ok(())
}

#[test]
fn test_five_leaves_each_policy() -> Result<()> {
    let values = ["1", "2", "3", "4", "5"];
    let l: Vec<Digest> = values.iter().map(|v| leaf(v)).collect();
    let p12 = parent(&l[0], &l[1]);
    let p34 = parent(&l[2], &l[3]);
    let top = parent(&p12, &p34);

    // Level 1: [p12, p34, o(5)], level 2: [top, o(o(5))]
    let empty_root = parent(&top, &orphan(&orphan(&l[4])));

    // Level 1: [p12, p34, p(5,5)], level 2: [top, p(p55, p55)]
    let p55 = parent(&l[4], &l[4]);
    let duplicate_root = parent(&top, &parent(&p55, &p55));

    // Level 1: [p12, p34, 5], level 2: [top, 5]
    let promote_root = parent(&top, &l[4]);

    let cases = [
        (OddNodePolicy::HashWithEmpty, empty_root),
        (OddNodePolicy::Duplicate, duplicate_root),
        (OddNodePolicy::Promote, promote_root),
    ];

    for (policy, expected) in cases {
        let config = MerkleConfig::new().with_odd_node_policy(policy);
        assert_eq!(
            build_merkle_root_with_config(&values, &config)?,
            expected,
            "policy {}",
            policy
        );
    }

    assert_ne!(empty_root, duplicate_root);
    assert_ne!(empty_root, promote_root);
    Ok(())
}

#[test]
fn test_nine_leaves_odd_at_several_rounds() -> Result<()> {
    let values = ["1", "2", "3", "4", "5", "6", "7", "8", "9"];

    let tree = MerkleTree::new(&values)?;
    let widths: Vec<usize> = tree.levels().iter().map(Vec::len).collect();
    assert_eq!(widths, vec![9, 5, 3, 2, 1]);

    let root = build_merkle_root(&values)?;
    assert_eq!(tree.root(), root);
    assert_eq!(build_merkle_root(&values)?, root);

    // The orphan at each odd layer is hashed with the empty string
    let levels = tree.levels();
    assert_eq!(levels[1][4], orphan(&levels[0][8]));
    assert_eq!(levels[2][2], orphan(&levels[1][4]));
    assert_eq!(levels[3][1], orphan(&levels[2][2]));
    Ok(())
}

#[test]
fn test_even_leaves_no_orphans() -> Result<()> {
    let values = ["1", "2", "3", "4"];
    let l: Vec<Digest> = values.iter().map(|v| leaf(v)).collect();
    let expected = parent(&parent(&l[0], &l[1]), &parent(&l[2], &l[3]));

    for policy in [
        OddNodePolicy::HashWithEmpty,
        OddNodePolicy::Duplicate,
        OddNodePolicy::Promote,
    ] {
        let config = MerkleConfig::new().with_odd_node_policy(policy);
        assert_eq!(build_merkle_root_with_config(&values, &config)?, expected);
    }
    Ok(())
}

#[test]
fn test_manual_rounds_match_root() -> Result<()> {
    let values: Vec<String> = (0..13).map(|i| format!("value-{}", i)).collect();

    let mut layer = hash_leaves(&values);
    while layer.len() > 1 {
        layer = pair_hashes(&layer, OddNodePolicy::HashWithEmpty);
    }

    assert_eq!(layer[0], build_merkle_root(&values)?);
    Ok(())
}

#[test]
fn test_byte_values_and_strings_agree() -> Result<()> {
    let as_bytes: Vec<Vec<u8>> = vec![b"left".to_vec(), b"right".to_vec()];
    assert_eq!(
        build_merkle_root(&as_bytes)?,
        build_merkle_root(&["left", "right"])?
    );
    Ok(())
}
