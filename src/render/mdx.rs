//! MDX emission for symbol descriptors.
//!
//! Each class becomes an `<ApiClass>` block under a `##` heading, each member
//! function an `<ApiMethod>` block. Descriptions travel as JSX attributes;
//! callouts are nested as `<Callout>` children.

use crate::assemble::{MemberDescriptor, SymbolDescriptor};
use crate::config::ProjectConfig;
use crate::error::Result;
use crate::notes::Admonition;
use crate::render::page::PageTemplate;
use crate::render::{GroupDocs, Renderer};

pub struct MdxRenderer {
    template: PageTemplate,
}

impl MdxRenderer {
    pub fn new() -> Result<Self> {
        Ok(Self::with_template(PageTemplate::new()?))
    }

    pub fn with_template(template: PageTemplate) -> Self {
        Self { template }
    }
}

impl Renderer for MdxRenderer {
    fn render(&self, project: &ProjectConfig, groups: &[GroupDocs]) -> Result<String> {
        let bodies: Vec<String> = groups
            .iter()
            .map(|group| group.symbols.iter().map(render_symbol).collect())
            .collect();

        self.template.render(project, groups, &bodies)
    }

    fn file_extension(&self) -> &str {
        "mdx"
    }
}

/// Render one class block, including its member sections
pub fn render_symbol(symbol: &SymbolDescriptor) -> String {
    let mut mdx = format!("## {} [#{}] [toc]\n\n", symbol.qualified_name, symbol.anchor);

    mdx.push_str(&format!("<ApiClass name=\"{}\"", escape_jsx(&symbol.qualified_name)));
    if !symbol.brief.text.is_empty() {
        mdx.push_str(&format!(" brief=\"{}\"", escape_jsx(&symbol.brief.text)));
    }
    if !symbol.detailed.text.is_empty() {
        mdx.push_str(&format!(" detailed=\"{}\"", escape_jsx(&symbol.detailed.text)));
    }
    mdx.push_str(">\n\n");

    for admonition in &symbol.detailed.admonitions {
        mdx.push_str(&render_callout(admonition));
        mdx.push_str("\n\n");
    }

    for section in &symbol.member_sections {
        mdx.push_str(&format!("### {} [!toc]\n\n", section.kind.title()));
        for member in &section.members {
            mdx.push_str(&render_member(member));
        }
    }

    mdx.push_str("</ApiClass>\n\n");
    mdx
}

/// Render one member block.
///
/// Members with detailed callouts use the open/close form with the callouts
/// as children; all others use the self-closing form.
pub fn render_member(member: &MemberDescriptor) -> String {
    let mut mdx = String::from("<ApiMethod\n");
    mdx.push_str(&format!("  signature=\"{}\"\n", escape_jsx(&member.signature)));
    if !member.brief.text.is_empty() {
        mdx.push_str(&format!("  brief=\"{}\"\n", escape_jsx(&member.brief.text)));
    }
    if !member.detailed.text.is_empty() {
        mdx.push_str(&format!("  detailed=\"{}\"\n", escape_jsx(&member.detailed.text)));
    }
    if !member.parameters.is_empty() {
        // Parameter is a plain string pair; serialization cannot fail
        let params = serde_json::to_string(&member.parameters).unwrap_or_else(|_| "[]".to_string());
        mdx.push_str(&format!("  parameters={{{}}}\n", params));
    }

    if member.has_callouts() {
        mdx.push_str(">\n\n");
        for admonition in &member.detailed.admonitions {
            mdx.push_str(&render_callout(admonition));
            mdx.push_str("\n\n");
        }
        mdx.push_str("</ApiMethod>\n\n");
    } else {
        mdx.push_str("/>\n\n");
    }

    mdx
}

/// Render a callout block; the body keeps its Markdown as-is
pub fn render_callout(admonition: &Admonition) -> String {
    format!(
        "<Callout type=\"{}\" title=\"{}\">\n{}\n</Callout>",
        admonition.kind.as_str(),
        admonition.title,
        admonition.body
    )
}

/// Escape text for a double-quoted JSX attribute
pub fn escape_jsx(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', " ")
        .replace('\r', "")
        .trim()
        .to_string()
}
