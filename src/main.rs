use clap::Parser;
use itertools::Itertools;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use look::{Look, LookOptions, Outcome, compile, execute};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File to search (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Chain script to run, e.g. `after "you" replaceall "scream" "dream"`
    #[arg(short = 'e', long, value_name = "SCRIPT")]
    script: String,

    /// Match case exactly
    #[arg(short = 'c', long)]
    case_sensitive: bool,

    /// Do not let `.` match line breaks
    #[arg(short = 'N', long)]
    no_dot_newline: bool,

    /// Print the final scope's line:column range on stderr
    #[arg(short = 'p', long)]
    positions: bool,
}

/// Console logging; filter with RUST_LOG (e.g. `RUST_LOG=look=trace`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    match run(Args::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::from(2)
        }
    }
}

/// Returns false when a find came back empty.
fn run(args: Args) -> Result<bool> {
    let code = compile(&args.script)?;

    let text = match args.file.as_ref() {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            text
        }
    };
    tracing::debug!(bytes = text.len(), steps = code.steps.len(), "running script");

    let look = Look::from_options(
        LookOptions::new()
            .text(text)
            .case_sensitive(args.case_sensitive)
            .dot_newline(!args.no_dot_newline),
    );
    let finished = execute(&code, &look)?;

    if args.positions {
        let (start, end) = finished.look.scope_positions();
        eprintln!("{start}-{end}");
    }

    match &finished.outcome {
        Outcome::Scope(text) | Outcome::Replaced(text) => print!("{text}"),
        Outcome::Found(Some(found)) => println!("{found}"),
        Outcome::Found(None) => {}
        Outcome::FoundAll(found) => {
            if !found.is_empty() {
                println!("{}", found.iter().join("\n"));
            }
        }
    }
    Ok(finished.outcome.is_success())
}
