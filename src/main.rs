// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use quill_cfg::{QuillError, export};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Compile a Quill config file to JSON
#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Quill source file
    file: PathBuf,

    /// Leave declared constants out of the output
    #[arg(long)]
    no_constants: bool,

    /// Print JSON on a single line
    #[arg(long)]
    compact: bool,

    /// Write the JSON here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quill_cfg=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), QuillError> {
    let json = export::export_file(&args.file, !args.no_constants, !args.compact)?;

    match &args.output {
        Some(path) => {
            fs::write(path, json + "\n").map_err(|source| QuillError::FileError {
                path: path.clone(),
                source,
            })?;
            tracing::info!(path = %path.display(), "wrote output");
        }
        None => println!("{json}"),
    }
    Ok(())
}
