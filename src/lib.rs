//! doxmdx - Generate MDX API reference pages from Doxygen XML
//!
//! Reads the per-class XML Doxygen writes, extracts descriptions, callouts
//! and member signatures, and renders one reference page for a
//! documentation site.

pub mod assemble;
pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod locator;
pub mod notes;
pub mod render;
pub mod signature;
pub mod tree;

// Re-export main types
pub use assemble::{build_symbol, MemberDescriptor, SymbolDescriptor};
pub use batch::{convert_symbol, Batch, BatchReport};
pub use config::Config;
pub use error::{Error, Result};
pub use locator::Catalog;
pub use render::{create_renderer, GroupDocs, Renderer};
