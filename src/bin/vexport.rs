//! VEXPORT Export Binary
//!
//! Loads a record store and reports the reconstructed embedding matrix.

use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use vexport::{find_default_store, VectorStore};

/// VEXPORT - Embedding Matrix Exporter
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to the record store (defaults to the first existing candidate:
    /// vectors.db, build/vectors.db, build/Release/vectors.db)
    store: Option<PathBuf>,

    /// Suppress the sample-row preview
    #[arg(long)]
    no_preview: bool,

    /// Number of preview rows to print
    #[arg(long, default_value_t = 1)]
    limit: usize,

    /// Write an id/text CSV dump to this path
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("vexport=info".parse()?))
        .init();

    let args = Args::parse();

    let store_path = match args.store {
        Some(path) => path,
        None => match find_default_store(Path::new(".")) {
            Some(path) => {
                println!("Loading data from {}...", path.display());
                path
            }
            None => anyhow::bail!("could not find vectors.db in the current or build folders"),
        },
    };

    let store = VectorStore::open_read_only(&store_path)?;
    let export = store.export()?;

    println!("Successfully loaded {} chunks.", export.len());
    println!("Embedding matrix shape: ({}, {})", export.len(), export.dim());

    if !args.no_preview && !export.is_empty() {
        println!("\nSample Data:");
        for (i, text) in export.texts.iter().take(args.limit).enumerate() {
            let truncated: String = text.chars().take(50).collect();
            let head: Vec<f32> = export.matrix.row(i).iter().take(5).copied().collect();
            println!("Text: {}...", truncated);
            println!("Vector (first 5 values): {:?}", head);
        }
    }

    if let Some(csv) = args.csv {
        store.export_to_csv(&csv)?;
        info!("wrote CSV dump to {}", csv.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let args = Args::try_parse_from(["vexport"]).unwrap();
        assert!(!args.no_preview);
        assert_eq!(args.limit, 1);
        assert_eq!(args.store, None);
        assert_eq!(args.csv, None);
    }

    #[test]
    fn test_limit_controls_preview_rows() {
        let args = Args::try_parse_from(["vexport", "--limit", "3"]).unwrap();
        assert_eq!(args.limit, 3);
        assert!(!args.no_preview);
    }

    #[test]
    fn test_preview_can_be_disabled() {
        let args = Args::try_parse_from(["vexport", "--no-preview", "vectors.db"]).unwrap();
        assert!(args.no_preview);
        assert_eq!(args.store, Some(PathBuf::from("vectors.db")));
    }
}
