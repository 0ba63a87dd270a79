//! Command-line arguments

use crate::output::OutputFormat;
use crate::session::Request;
use clap::Parser;
use spmx_core::Operation;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(author, version, long_about = None)]
#[command(
    about = "SPMX - Add, subtract or multiply sparse integer matrices stored as text",
    after_help = "Anything not given on the command line is asked for interactively."
)]
pub struct Cli {
    /// First matrix file
    pub first: Option<PathBuf>,

    /// Second matrix file
    pub second: Option<PathBuf>,

    /// Operation to apply: add, subtract or multiply (or 1, 2, 3)
    #[arg(short, long)]
    pub operation: Option<Operation>,

    /// Output format of the result
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Session request built from the parsed arguments
    pub fn request(&self) -> Request {
        Request {
            operation: self.operation,
            first: self.first.clone(),
            second: self.second.clone(),
            format: self.format,
        }
    }

    /// Default log filter for the requested verbosity
    ///
    /// `RUST_LOG` takes precedence over this when set.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
