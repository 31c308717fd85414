//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{LogLevel, OutputFormat};

/// Evaluate RPN arithmetic and match boolean queries against documents.
#[derive(Parser, Debug)]
#[command(name = "rpnq", version, about)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,

    /// Output format (text, json).
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Operation to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Operations exposed by the CLI.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Evaluate a space-separated RPN arithmetic expression.
    Eval {
        /// Expression such as "3 4 + 5 6 + *".
        #[arg(allow_hyphen_values = true)]
        expression: String,
        /// Print the stack after every token.
        #[arg(long)]
        trace: bool,
    },
    /// Check whether a document satisfies a boolean query.
    Match {
        /// Query such as "(python OR java) AND guide".
        query: String,
        /// Document text.
        document: String,
        /// Print every pipeline stage.
        #[arg(long)]
        trace: bool,
    },
    /// Print the documents that satisfy a boolean query.
    Search {
        /// Query such as "python AND tutorial".
        query: String,
        /// Documents given inline.
        documents: Vec<String>,
        /// File holding one document per line.
        #[arg(long)]
        documents_file: Option<PathBuf>,
    },
}
