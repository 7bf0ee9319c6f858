//! JSON renderer: the descriptor model serialized as-is.
//!
//! Carries everything the MDX form drops, such as brief-description callouts
//! and derived return types, for tooling that builds its own pages.

use crate::config::ProjectConfig;
use crate::error::Result;
use crate::render::{GroupDocs, Renderer};
use serde::Serialize;

pub struct JsonRenderer;

#[derive(Serialize)]
struct JsonDocument<'a> {
    title: &'a str,
    description: &'a str,
    groups: &'a [GroupDocs],
}

impl Renderer for JsonRenderer {
    fn render(&self, project: &ProjectConfig, groups: &[GroupDocs]) -> Result<String> {
        let document = JsonDocument {
            title: &project.title,
            description: &project.description,
            groups,
        };
        let mut json = serde_json::to_string_pretty(&document)?;
        json.push('\n');
        Ok(json)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
