//! CLI module for doxmdx

mod args;

pub use args::{Args, Command};

use crate::batch::{convert_symbol, Batch};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::locator::Catalog;
use crate::render::render_symbol;
use std::path::Path;
use std::process::ExitCode;

const DEFAULT_CONFIG: &str = "doxmdx.toml";

/// Run the CLI application
pub fn run() -> ExitCode {
    let args = Args::parse_args();

    match execute(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn execute(args: Args) -> Result<()> {
    match args.command {
        Command::Build {
            config,
            xml_dir,
            output,
            format,
            verbose,
        } => {
            // An explicit config must load; the default one is optional
            let mut cfg = match &config {
                Some(path) => Config::load(path)?,
                None => Config::load_or_default(Path::new(DEFAULT_CONFIG)),
            };

            cfg.merge_cli(xml_dir, output, format);
            cfg.validate()?;

            if verbose {
                println!("XML: {}", cfg.input.xml_dir.display());
                println!("Output: {}", cfg.output.path.display());
                println!("Format: {:?}", cfg.output.format);
                for group in &cfg.groups {
                    println!("Group {}: {} symbols", group.id, group.symbols.len());
                }
            }

            if !cfg.input.xml_dir.exists() {
                return Err(Error::other(format!(
                    "XML directory does not exist: {}",
                    cfg.input.xml_dir.display()
                )));
            }

            println!("Converting API groups...");
            let report = Batch::new(cfg).with_verbose(verbose).run()?;

            println!("{}", report.summary());
            println!("Documentation written to: {}", report.output_path.display());
            Ok(())
        }

        Command::List { xml_dir, kind } => {
            let catalog = Catalog::load(&xml_dir)?;

            let entries: Vec<_> = match &kind {
                Some(kind) => catalog.of_kind(kind).collect(),
                None => catalog.entries().iter().collect(),
            };

            for entry in &entries {
                println!("{:<10} {:<50} {}", entry.kind, entry.name, entry.refid);
            }
            println!("\n{} compounds", entries.len());
            Ok(())
        }

        Command::Inspect { symbol, xml_dir } => {
            let catalog = Catalog::load(&xml_dir)?;
            let descriptor = convert_symbol(&catalog, &xml_dir, &symbol)?;

            print!("{}", render_symbol(&descriptor));

            let members: Vec<_> = descriptor.members().collect();
            if !members.is_empty() {
                println!("Return types:");
                for member in members {
                    let return_type = if member.return_type.is_empty() {
                        "-"
                    } else {
                        member.return_type.as_str()
                    };
                    println!("  {:<30} {}", member.name, return_type);
                }
            }
            Ok(())
        }

        Command::Version => {
            println!("doxmdx {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
