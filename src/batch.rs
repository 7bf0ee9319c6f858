// Batch driver: resolve, convert and render every configured API group
//
// Only the catalog is shared between symbols. Each symbol is located, read
// and assembled independently, so groups are converted in parallel and then
// reassembled in their configured order.

use crate::assemble::{build_symbol, SymbolDescriptor};
use crate::config::{ApiGroup, Config};
use crate::error::{Error, Result};
use crate::locator::Catalog;
use crate::render::{create_renderer, GroupDocs};
use crate::tree::read_tree_file;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// A symbol that was skipped, and why
#[derive(Debug)]
pub struct SymbolWarning {
    pub group: String,
    pub symbol: String,
    pub error: Error,
}

impl std::fmt::Display for SymbolWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]: {}", self.symbol, self.group, self.error)
    }
}

/// Converted groups plus the symbols that could not be converted
#[derive(Debug)]
pub struct BatchResult {
    pub groups: Vec<GroupDocs>,
    pub warnings: Vec<SymbolWarning>,
}

impl BatchResult {
    pub fn symbol_count(&self) -> usize {
        self.groups.iter().map(|g| g.symbols.len()).sum()
    }
}

/// Summary of a completed run
#[derive(Debug, Default)]
pub struct BatchReport {
    pub symbols_written: usize,
    pub symbols_skipped: usize,
    pub output_path: PathBuf,
}

impl BatchReport {
    pub fn summary(&self) -> String {
        if self.symbols_skipped == 0 {
            format!("Documented {} symbols", self.symbols_written)
        } else {
            format!(
                "Documented {} symbols ({} skipped)",
                self.symbols_written, self.symbols_skipped
            )
        }
    }
}

/// Convert one symbol: locate it, read its detail tree, assemble it.
///
/// Pure apart from reading the detail file; every error is local to this
/// symbol.
pub fn convert_symbol(catalog: &Catalog, xml_dir: &Path, qualified_name: &str) -> Result<SymbolDescriptor> {
    let entry = catalog
        .locate(qualified_name)
        .ok_or_else(|| Error::SymbolNotFound(qualified_name.to_string()))?;

    let path = entry.detail_path(xml_dir);
    if !path.is_file() {
        return Err(Error::missing_detail(qualified_name, path));
    }

    let forest = read_tree_file(&path)?;
    build_symbol(&forest).ok_or_else(|| Error::malformed(&path, "no doxygen/compounddef element"))
}

/// Orchestrates a documentation build
pub struct Batch {
    config: Config,
    verbose: bool,
}

impl Batch {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            verbose: false,
        }
    }

    /// Enable progress output
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Convert every configured group.
    ///
    /// Fails only when the catalog cannot be loaded; per-symbol failures are
    /// collected as warnings and the symbol is left out.
    pub fn collect(&self) -> Result<BatchResult> {
        let xml_dir = &self.config.input.xml_dir;
        let catalog = Catalog::load(xml_dir)?;

        let total: usize = self.config.groups.iter().map(|g| g.symbols.len()).sum();
        let progress = if self.verbose {
            let pb = ProgressBar::new(total as u64);
            if let Ok(style) = ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            {
                pb.set_style(style.progress_chars("#>-"));
            }
            Some(pb)
        } else {
            None
        };

        let mut groups = Vec::with_capacity(self.config.groups.len());
        let mut warnings = Vec::new();

        for group in &self.config.groups {
            let outcomes: Vec<(&String, Result<SymbolDescriptor>)> = group
                .symbols
                .par_iter()
                .map(|name| {
                    let outcome = convert_symbol(&catalog, xml_dir, name);
                    if let Some(ref pb) = progress {
                        pb.set_message(name.clone());
                        pb.inc(1);
                    }
                    (name, outcome)
                })
                .collect();

            groups.push(self.gather(group, outcomes, &mut warnings));
        }

        if let Some(pb) = progress {
            pb.finish_with_message("Conversion complete");
        }

        Ok(BatchResult { groups, warnings })
    }

    fn gather(
        &self,
        group: &ApiGroup,
        outcomes: Vec<(&String, Result<SymbolDescriptor>)>,
        warnings: &mut Vec<SymbolWarning>,
    ) -> GroupDocs {
        let mut symbols = Vec::new();

        for (name, outcome) in outcomes {
            match outcome {
                Ok(symbol) => symbols.push(symbol),
                Err(error) => warnings.push(SymbolWarning {
                    group: group.title.clone(),
                    symbol: name.clone(),
                    error,
                }),
            }
        }

        GroupDocs {
            title: group.title.clone(),
            id: group.id.clone(),
            symbols,
        }
    }

    /// Convert, render and write the combined document
    pub fn run(&self) -> Result<BatchReport> {
        let result = self.collect()?;

        for warning in &result.warnings {
            eprintln!("Warning: {}", warning);
        }

        let renderer = create_renderer(&self.config.output)?;
        let document = renderer.render(&self.config.project, &result.groups)?;

        let mut output_path = self.config.output.path.clone();
        if output_path.extension().is_none() {
            output_path.set_extension(renderer.file_extension());
        }
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&output_path, document)?;

        Ok(BatchReport {
            symbols_written: result.symbol_count(),
            symbols_skipped: result.warnings.len(),
            output_path,
        })
    }
}
