#![deny(missing_docs)]
//! A command-line interface for the Baconian cipher.
//!
//! Without a subcommand the program runs the interactive menu on stdin and
//! stdout. The `encrypt` and `decrypt` subcommands transform a single text
//! given on the command line.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};

use crate::report::Report;
use crate::session::{Operation, Session};

mod line_source;
mod report;
mod session;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "EXAMPLES:\n  \n# Start the interactive menu\nbacon-cli\n\n# Encrypt a message\nbacon-cli encrypt \"Hello World\"\n\n# Decrypt a message and print a JSON report\nbacon-cli --json decrypt \"AAAAA AAAAB\""
)]
struct Cli {
    /// Print the result of `encrypt`/`decrypt` as a JSON report.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt plain text (letters and single spaces) into ciphertext
    Encrypt {
        /// The plain text to encrypt
        #[arg()]
        text: String,
    },
    /// Decrypt ciphertext back into upper-case plain text
    Decrypt {
        /// The ciphertext to decrypt
        #[arg()]
        text: String,
    },
}

fn main() -> Result<ExitCode> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        None => {
            info!("Starting interactive session.");
            Session::new(io::stdin().lock(), io::stdout().lock())
                .run()
                .context("Interactive session failed")?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Encrypt { text }) => run_once(Operation::Encrypt, &text, cli.json),
        Some(Commands::Decrypt { text }) => run_once(Operation::Decrypt, &text, cli.json),
    }
}

fn run_once(operation: Operation, text: &str, json: bool) -> Result<ExitCode> {
    let result = operation.apply(text);
    let mut stdout = io::stdout().lock();

    if json {
        let report = Report::new(operation, text, &result);
        serde_json::to_writer_pretty(&mut stdout, &report)
            .context("Failed to serialize report")?;
        writeln!(stdout)?;
    } else {
        match &result {
            Ok(output) => writeln!(stdout, "{output}")?,
            Err(e) => {
                warn!("Failed to {operation} {text:?}: {e}");
                eprintln!("{}", operation.failure_message());
            }
        }
    }

    Ok(if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
