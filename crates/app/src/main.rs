use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use sverka_core::ImportedOperation;
use sverka_import::{find_similar_operations, group_similar_operations, import, ReconcileConfig};

#[derive(Parser, Debug)]
#[command(name = "sverka", version, about = "Enrich and compare parsed bank statement records")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Tag, hash and orient every operation and flag duplicates
    Enrich {
        /// JSON array of parsed operations
        #[arg(long, value_name = "PATH")]
        input: PathBuf,

        /// Company identity and tag rules
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,

        /// Hashes of already stored operations, one per line
        #[arg(long, value_name = "PATH")]
        known_hashes: Option<PathBuf>,

        /// JSON array of already stored operations, for exact and probable
        /// duplicate detection
        #[arg(long, value_name = "PATH")]
        known_operations: Option<PathBuf>,
    },
    /// Print the operations similar to the one with the given id
    Similar {
        #[arg(long, value_name = "PATH")]
        input: PathBuf,

        #[arg(long)]
        id: String,
    },
    /// Print groups of similar operations
    Groups {
        #[arg(long, value_name = "PATH")]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Enrich {
            input,
            config,
            known_hashes,
            known_operations,
        } => {
            let operations = read_operations(&input)?;
            let config = match config {
                Some(path) => import::load_config(&path)
                    .with_context(|| format!("Failed to load config from {:?}", path))?,
                None => ReconcileConfig::default(),
            };
            let mut index = match known_hashes {
                Some(path) => import::create_duplicate_index(read_hashes(&path)?),
                None => import::create_duplicate_index(Vec::<String>::new()),
            };
            if let Some(path) = known_operations {
                for op in read_operations(&path)? {
                    index.record(&op.document);
                }
            }
            let enricher = import::create_enricher(&config);
            print_json(&enricher.enrich_batch(operations, &index))
        }
        Command::Similar { input, id } => {
            let operations = read_operations(&input)?;
            let target = operations
                .iter()
                .find(|op| op.id == id)
                .ok_or_else(|| anyhow::anyhow!("No operation with id '{}' in {:?}", id, input))?;
            print_json(&find_similar_operations(target, &operations))
        }
        Command::Groups { input } => {
            let operations = read_operations(&input)?;
            print_json(&group_similar_operations(&operations))
        }
    }
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_operations(path: &Path) -> Result<Vec<ImportedOperation>> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    let operations: Vec<ImportedOperation> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse operations from {:?}", path))?;
    tracing::debug!(count = operations.len(), "read operations");
    Ok(operations)
}

fn read_hashes(path: &Path) -> Result<Vec<String>> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}
