//! Roster merge CLI
//!
//! Merges a Guild attendee export and a Meetup RSVP export into one
//! deduplicated, alphabetised CSV.

use clap::Parser;
use roster_core::{merge_files, MergeJob, NameCorrections};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "roster-merge")]
#[command(about = "Merge Guild and Meetup attendee lists", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the raw Guild CSV file
    #[arg(long)]
    guild: PathBuf,

    /// Path to the raw Meetup CSV file
    #[arg(long)]
    meetup: PathBuf,

    /// Path to the output CSV file
    #[arg(long)]
    output: PathBuf,

    /// JSON object of name corrections, replacing the built-in table
    #[arg(long)]
    corrections: Option<PathBuf>,
}

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn run() -> roster_core::Result<()> {
    let cli = Cli::parse();

    let corrections = match &cli.corrections {
        Some(path) => {
            let table = NameCorrections::load(path)?;
            tracing::info!(
                path = %path.display(),
                entries = table.len(),
                "loaded name corrections"
            );
            table
        }
        None => NameCorrections::default(),
    };

    let job = MergeJob::new(cli.guild, cli.meetup, cli.output).with_corrections(corrections);
    let report = merge_files(&job)?;

    if report.duplicates_dropped > 0 {
        println!("Removed {} duplicate rows", report.duplicates_dropped);
    }
    println!(
        "File generated: {} ({} rows)",
        report.output.display(),
        report.rows_written
    );

    Ok(())
}
