use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use keyremap_core::{FileProvider, Layer, MappingProvider};

#[derive(Parser, Debug)]
#[command(author, version, about = "Print the entries of a key mapping file", long_about = None)]
struct Args {
    /// Mapping JSON file
    mapping: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error")).init();
    let args = Args::parse();

    let provider = FileProvider::new(&args.mapping);
    let loaded = provider
        .load()
        .with_context(|| format!("failed to load {}", provider.describe()))?;

    println!("Mapping: {}", args.mapping.display());
    println!("Entries: {}", loaded.table.len());

    for layer in Layer::ALL {
        let entries = loaded.table.entries(layer);
        println!("\n=== {} ({} entries) ===", layer, entries.len());
        for (key, action) in entries {
            println!("  {:<16} => {}", key.to_string(), action);
        }
    }

    if !loaded.issues.is_empty() {
        println!("\n=== SKIPPED ({}) ===", loaded.issues.len());
        for issue in &loaded.issues {
            println!("  {}", issue);
        }
    }

    Ok(())
}
