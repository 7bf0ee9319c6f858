//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Convert Doxygen XML into MDX API reference pages
#[derive(Parser, Debug)]
#[command(name = "doxmdx")]
#[command(about = "Convert Doxygen XML into MDX API reference pages")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert the configured API groups into one reference page
    Build {
        /// Config file path (defaults to doxmdx.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Directory holding Doxygen's XML output
        #[arg(long)]
        xml_dir: Option<PathBuf>,

        /// Output file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (mdx or json)
        #[arg(long, value_parser = ["mdx", "json"])]
        format: Option<String>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// List the compounds in the Doxygen catalog
    List {
        /// Directory holding Doxygen's XML output
        #[arg(long, default_value = "_doxygen/xml")]
        xml_dir: PathBuf,

        /// Only show compounds of this kind (class, namespace, file, ...)
        #[arg(short, long)]
        kind: Option<String>,
    },

    /// Convert a single symbol and print its MDX block
    Inspect {
        /// Fully qualified symbol name, e.g. SimpleBLE::Adapter
        symbol: String,

        /// Directory holding Doxygen's XML output
        #[arg(long, default_value = "_doxygen/xml")]
        xml_dir: PathBuf,
    },

    /// Show version information
    Version,
}
