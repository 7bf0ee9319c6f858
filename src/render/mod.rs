//! Renderers: trait-based dispatch over output formats.

pub mod json;
pub mod mdx;
pub mod page;

pub use json::JsonRenderer;
pub use mdx::{escape_jsx, render_callout, render_member, render_symbol, MdxRenderer};
pub use page::PageTemplate;

use crate::assemble::SymbolDescriptor;
use crate::config::{OutputConfig, OutputFormat, ProjectConfig};
use crate::error::Result;
use serde::Serialize;

/// The converted symbols of one API group, in configured order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupDocs {
    pub title: String,
    pub id: String,
    pub symbols: Vec<SymbolDescriptor>,
}

/// Render converted groups into one output document
pub trait Renderer {
    fn render(&self, project: &ProjectConfig, groups: &[GroupDocs]) -> Result<String>;
    fn file_extension(&self) -> &str;
}

/// Create the renderer for the configured output format
pub fn create_renderer(output: &OutputConfig) -> Result<Box<dyn Renderer>> {
    match output.format {
        OutputFormat::Mdx => {
            let renderer = match &output.template {
                Some(path) => MdxRenderer::with_template(PageTemplate::from_file(path)?),
                None => MdxRenderer::new()?,
            };
            Ok(Box::new(renderer))
        }
        OutputFormat::Json => Ok(Box::new(JsonRenderer)),
    }
}
