// Page envelope rendered through Tera
//
// Frontmatter, page heading and the `<ApiSection>` wrapper per API group.
// The symbol blocks themselves are assembled in `mdx.rs` and passed in as
// pre-rendered bodies.

use crate::config::ProjectConfig;
use crate::error::Result;
use crate::render::GroupDocs;
use serde::Serialize;
use std::path::Path;
use tera::{Context, Tera};

const PAGE_TEMPLATE: &str = "page.mdx";

/// Template engine wrapping Tera with the page template
pub struct PageTemplate {
    tera: Tera,
}

#[derive(Debug, Serialize)]
struct SectionContext<'a> {
    title: &'a str,
    id: &'a str,
    body: &'a str,
}

impl PageTemplate {
    /// Create the engine with the embedded page template
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(PAGE_TEMPLATE, include_str!("../../templates/page.mdx.tera"))?;
        Ok(Self { tera })
    }

    /// Create the engine from a custom template file
    pub fn from_file(path: &Path) -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_template_file(path, Some(PAGE_TEMPLATE))?;
        Ok(Self { tera })
    }

    /// Render the page; `bodies[i]` is the rendered content of `groups[i]`
    pub fn render(&self, project: &ProjectConfig, groups: &[GroupDocs], bodies: &[String]) -> Result<String> {
        let sections: Vec<SectionContext> = groups
            .iter()
            .zip(bodies)
            .map(|(group, body)| SectionContext {
                title: &group.title,
                id: &group.id,
                body,
            })
            .collect();

        let mut context = Context::new();
        context.insert("project", project);
        context.insert("groups", &sections);

        Ok(self.tera.render(PAGE_TEMPLATE, &context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn group(title: &str, id: &str) -> GroupDocs {
        GroupDocs {
            title: title.to_string(),
            id: id.to_string(),
            symbols: vec![],
        }
    }

    #[test]
    fn test_render_envelope() {
        let template = PageTemplate::new().unwrap();
        let project = ProjectConfig::default();
        let groups = vec![group("Standard API", "standard-api"), group("Safe API", "safe-api")];
        let bodies = vec!["BODY-A\n\n".to_string(), String::new()];

        let page = template.render(&project, &groups, &bodies).unwrap();

        assert!(page.starts_with(
            "---\ntitle: API Reference\ndescription: Architecture overview and API documentation for SimpleBLE.\n---\n\nimport { ApiClass, ApiMethod, ApiSection } from \"@/components/api\";\n\n# API Reference\n\nThe following notes"
        ));
        assert!(page.contains(
            "understanding.\n\n<ApiSection title=\"Standard API\" id=\"standard-api\">\n\nBODY-A\n\n</ApiSection>\n\n<ApiSection title=\"Safe API\" id=\"safe-api\">\n\n</ApiSection>\n"
        ));
        assert!(page.ends_with("</ApiSection>\n"));
    }

    #[test]
    fn test_render_without_intro() {
        let template = PageTemplate::new().unwrap();
        let project = ProjectConfig {
            intro: None,
            ..ProjectConfig::default()
        };
        let groups = vec![group("Core", "core")];
        let page = template
            .render(&project, &groups, &["X\n\n".to_string()])
            .unwrap();
        assert!(page.contains("# API Reference\n\n<ApiSection title=\"Core\" id=\"core\">\n\nX\n\n</ApiSection>\n"));
    }

    #[test]
    fn test_body_is_not_escaped() {
        let template = PageTemplate::new().unwrap();
        let page = template
            .render(
                &ProjectConfig::default(),
                &[group("Core", "core")],
                &["<ApiClass name=\"A&B\">\n\n".to_string()],
            )
            .unwrap();
        assert!(page.contains("<ApiClass name=\"A&B\">"));
    }

    #[test]
    fn test_custom_template_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{% for group in groups %}}[{{{{ group.id }}}}]{{% endfor %}}").unwrap();

        let template = PageTemplate::from_file(file.path()).unwrap();
        let page = template
            .render(
                &ProjectConfig::default(),
                &[group("A", "a"), group("B", "b")],
                &[String::new(), String::new()],
            )
            .unwrap();
        assert_eq!(page, "[a][b]");
    }
}
