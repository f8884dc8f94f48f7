use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use keyremap_tools::{load_mapping, load_script_file, Replayer};

#[derive(Parser, Debug)]
#[command(author, version, about = "Replay a key event script through the remapping engine", long_about = None)]
struct Args {
    /// Mapping JSON file (falls back to the bundled default mapping)
    #[arg(short, long)]
    mapping: Option<PathBuf>,

    /// Event script path
    script: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn run(args: &Args) -> Result<()> {
    let loaded = load_mapping(args.mapping.as_deref());
    for issue in &loaded.issues {
        eprintln!("warning: skipped mapping entry: {}", issue);
    }
    let script = load_script_file(&args.script)?;

    if args.verbose {
        eprintln!(
            "Replaying {} commands with {} mapping entries",
            script.len(),
            loaded.table.len()
        );
    }

    let mut replayer = Replayer::new(loaded.table);
    for command in &script.commands {
        for event in replayer.step(command) {
            if args.verbose {
                println!("{:<28} -> {}", command.to_string(), event);
            } else {
                println!("{}", event);
            }
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
