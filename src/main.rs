//! # sha256-merkle CLI
//!
//! Hashes strings and files, and prints Merkle roots over them.

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use sha256_merkle_rs::{input, sha256, MerkleConfig, MerkleTree, OddNodePolicy};
use std::ffi::{OsStr, OsString};
use std::io::{self, Write};
use std::path::PathBuf;

/// SHA-256 digests and Merkle roots.
#[derive(Parser, Debug)]
#[command(name = "sha256-merkle", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the SHA-256 digest of an argument's raw bytes.
    Hash { value: OsString },
    /// Print the SHA-256 digest of a file's contents.
    HashFile { path: PathBuf },
    /// Print the Merkle root of the given arguments' raw bytes, in order.
    Root {
        #[arg(required = true)]
        values: Vec<OsString>,
        #[command(flatten)]
        tree: TreeArgs,
    },
    /// Print the Merkle root of file contents. Directories expand to their
    /// files in path order.
    RootFiles {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        #[command(flatten)]
        tree: TreeArgs,
    },
}

#[derive(Args, Debug)]
struct TreeArgs {
    /// Rule for the unpaired digest of an odd-length layer.
    #[arg(long, value_enum, default_value_t = OddNode::HashWithEmpty)]
    odd_node: OddNode,
    /// Print every layer, leaves first.
    #[arg(long)]
    levels: bool,
    /// Print the whole tree as JSON.
    #[arg(long, conflicts_with = "levels")]
    json: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OddNode {
    HashWithEmpty,
    Duplicate,
    Promote,
}

impl From<OddNode> for OddNodePolicy {
    fn from(value: OddNode) -> Self {
        match value {
            OddNode::HashWithEmpty => OddNodePolicy::HashWithEmpty,
            OddNode::Duplicate => OddNodePolicy::Duplicate,
            OddNode::Promote => OddNodePolicy::Promote,
        }
    }
}

/// Bytes of a command-line argument exactly as the OS passed them
#[cfg(unix)]
fn arg_bytes(arg: &OsStr) -> Vec<u8> {
    use std::os::unix::ffi::OsStrExt;
    arg.as_bytes().to_vec()
}

/// Arguments that are not valid Unicode are hashed after lossy conversion
#[cfg(not(unix))]
fn arg_bytes(arg: &OsStr) -> Vec<u8> {
    arg.to_string_lossy().into_owned().into_bytes()
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    run(cli, &mut stdout.lock())
}

fn run(cli: Cli, out: &mut impl Write) -> anyhow::Result<()> {
    match cli.command {
        Commands::Hash { value } => {
            writeln!(out, "{}", sha256::hash(&arg_bytes(&value)))?;
        }
        Commands::HashFile { path } => {
            let data = input::read_file(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            writeln!(out, "{}", sha256::hash(&data))?;
        }
        Commands::Root { values, tree } => {
            let values: Vec<Vec<u8>> = values.iter().map(|v| arg_bytes(v)).collect();
            print_tree(out, &values, &tree)?;
        }
        Commands::RootFiles { paths, tree } => {
            let leaves = input::collect_paths(&paths).context("failed to load input files")?;
            tracing::info!(leaves = leaves.len(), "loaded leaf files");
            print_tree(out, &leaves, &tree)?;
        }
    }

    Ok(())
}

fn print_tree<V: AsRef<[u8]>>(
    out: &mut impl Write,
    values: &[V],
    args: &TreeArgs,
) -> anyhow::Result<()> {
    let config = MerkleConfig::new().with_odd_node_policy(args.odd_node.into());
    let tree = MerkleTree::with_config(values, &config)?;
    tracing::debug!(
        leaves = tree.leaf_count(),
        rounds = tree.depth(),
        root = %tree.root(),
        "built merkle root"
    );

    if args.json {
        out.write_all(&tree.to_json_pretty()?)?;
        writeln!(out)?;
    } else if args.levels {
        for (depth, level) in tree.levels().iter().enumerate() {
            writeln!(out, "level {}:", depth)?;
            for digest in level {
                writeln!(out, "  {}", digest)?;
            }
        }
    } else {
        writeln!(out, "{}", tree.root())?;
    }

    Ok(())
}
