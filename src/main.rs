use clap::Parser;
use env_logger::Env;
use log::{debug, error, info, warn};
use std::fs;
use std::path::PathBuf;
use std::process;
use thiserror::Error;

use fenboard::{Position, SAMPLE_FENS};

/// Parse FEN records and print the boards they describe.
///
/// With no records on the command line and no `--file`, the built-in sample
/// positions are printed.
#[derive(Parser)]
#[command(name = "fenboard")]
#[command(about = "Parse FEN records and print the boards they describe")]
#[command(version)]
struct Args {
    /// FEN records to parse (quote each one)
    #[arg(value_name = "FEN")]
    fens: Vec<String>,

    /// Read FEN records from a file, one per line ('#' starts a comment line)
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Only report records that fail to parse
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let env = Env::default().filter_or("FENBOARD_LOG", "info");
    env_logger::Builder::from_env(env).init();

    let args = Args::parse();

    let records = match collect_records(&args) {
        Ok(records) => records,
        Err(e) => {
            error!("Error reading FEN records: {}", e);
            process::exit(1);
        }
    };

    let mut failures = 0;

    for fen in &records {
        match Position::from_fen(fen) {
            Ok(position) => {
                debug!("Parsed '{}'", fen);
                if !args.quiet {
                    println!("{}", fen);
                    println!("{}", position);
                }
            }
            Err(e) => {
                failures += 1;
                error!("{}\n  {}\n  {:>width$}", e, fen, "^", width = e.offset() + 1);
            }
        }
    }

    info!(
        "Parsed {} of {} FEN records",
        records.len() - failures,
        records.len()
    );

    if failures > 0 {
        process::exit(1);
    }
}

/// Failure while gathering FEN records
#[derive(Error, Debug)]
enum RecordError {
    #[error("cannot read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Gathers records from the command line and `--file`, falling back to the samples
fn collect_records(args: &Args) -> Result<Vec<String>, RecordError> {
    let mut records = args.fens.clone();

    if let Some(path) = &args.file {
        let content = fs::read_to_string(path).map_err(|source| RecordError::Read {
            path: path.clone(),
            source,
        })?;

        let before = records.len();
        records.extend(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(String::from),
        );

        if records.len() == before {
            warn!("'{}' contains no FEN records", path.display());
        }
    }

    if records.is_empty() {
        info!("No FEN records given, using the built-in samples");
        records.extend(SAMPLE_FENS.iter().map(|fen| fen.to_string()));
    }

    Ok(records)
}
