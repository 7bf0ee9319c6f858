use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Main configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub project: ProjectConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
    pub groups: Vec<ApiGroup>,
}

/// Page metadata written into the generated document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Frontmatter title
    pub title: String,
    /// Frontmatter description
    pub description: String,
    /// Top-level page heading
    pub heading: String,
    /// Paragraph placed under the heading
    pub intro: Option<String>,
}

/// Where the Doxygen XML lives
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub xml_dir: PathBuf,
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: PathBuf,
    pub format: OutputFormat,
    /// Custom Tera page template replacing the embedded one
    pub template: Option<PathBuf>,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Mdx,
    Json,
}

/// A named tier of the API, rendered as one `ApiSection`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiGroup {
    pub title: String,
    pub id: String,
    pub symbols: Vec<String>,
}

impl ApiGroup {
    pub fn new(title: &str, id: &str, symbols: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            id: id.to_string(),
            symbols: symbols.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project: ProjectConfig::default(),
            input: InputConfig::default(),
            output: OutputConfig::default(),
            groups: default_groups(),
        }
    }
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            title: "API Reference".to_string(),
            description: "Architecture overview and API documentation for SimpleBLE.".to_string(),
            heading: "API Reference".to_string(),
            intro: Some(
                "The following notes provide an overview of the architecture of some of the \
                 higher-level classes in the library, as to facilitate their understanding."
                    .to_string(),
            ),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            xml_dir: PathBuf::from("_doxygen/xml"),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("content/docs/simpleble/api.mdx"),
            format: OutputFormat::default(),
            template: None,
        }
    }
}

/// The SimpleBLE API tiers
pub fn default_groups() -> Vec<ApiGroup> {
    vec![
        ApiGroup::new(
            "Standard API",
            "standard-api",
            &[
                "SimpleBLE::Adapter",
                "SimpleBLE::Peripheral",
                "SimpleBLE::Service",
                "SimpleBLE::Characteristic",
                "SimpleBLE::Descriptor",
            ],
        ),
        ApiGroup::new(
            "Safe API",
            "safe-api",
            &["SimpleBLE::Safe::Adapter", "SimpleBLE::Safe::Peripheral"],
        ),
        ApiGroup::new("External API", "external-api", &["kvn::bytearray"]),
    ]
}

impl OutputFormat {
    /// Parse a CLI format name; unknown names fall back to MDX
    pub fn from_name(name: &str) -> Self {
        match name {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Mdx,
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from file or return defaults
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Merge CLI arguments into config (CLI takes precedence)
    pub fn merge_cli(
        &mut self,
        xml_dir: Option<PathBuf>,
        output: Option<PathBuf>,
        format: Option<String>,
    ) {
        if let Some(dir) = xml_dir {
            self.input.xml_dir = dir;
        }

        if let Some(out) = output {
            self.output.path = out;
        }

        if let Some(fmt) = format {
            self.output.format = OutputFormat::from_name(&fmt);
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.groups.is_empty() {
            return Err(Error::config_validation("at least one API group required"));
        }

        let mut ids = HashSet::new();
        for group in &self.groups {
            if group.title.trim().is_empty() {
                return Err(Error::config_validation("group title cannot be empty"));
            }
            if group.id.trim().is_empty() {
                return Err(Error::config_validation(format!(
                    "group '{}' needs an id",
                    group.title
                )));
            }
            if !ids.insert(group.id.as_str()) {
                return Err(Error::config_validation(format!(
                    "duplicate group id '{}'",
                    group.id
                )));
            }
            if group.symbols.iter().any(|s| s.trim().is_empty()) {
                return Err(Error::config_validation(format!(
                    "group '{}' lists an empty symbol name",
                    group.title
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.project.title, "API Reference");
        assert_eq!(config.input.xml_dir, PathBuf::from("_doxygen/xml"));
        assert_eq!(config.output.format, OutputFormat::Mdx);
        let ids: Vec<&str> = config.groups.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["standard-api", "safe-api", "external-api"]);
        assert_eq!(config.groups[0].symbols.len(), 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_valid_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[project]
title = "Reference"
description = "Generated reference"
heading = "Reference"

[input]
xml_dir = "build/xml"

[output]
path = "out/api.json"
format = "json"

[[groups]]
title = "Core"
id = "core"
symbols = ["SimpleBLE::Adapter"]
"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.project.title, "Reference");
        assert!(config.project.intro.is_some());
        assert_eq!(config.input.xml_dir, PathBuf::from("build/xml"));
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.groups, vec![ApiGroup::new("Core", "core", &["SimpleBLE::Adapter"])]);
    }

    #[test]
    fn test_load_without_groups_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[input]\nxml_dir = \"xml\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.groups, default_groups());
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load(Path::new("/nonexistent/doxmdx.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = Config::load_or_default(Path::new("/nonexistent/doxmdx.toml"));
        assert_eq!(config.groups.len(), 3);
    }

    #[test]
    fn test_validation_empty_groups() {
        let mut config = Config::default();
        config.groups.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_duplicate_ids() {
        let mut config = Config::default();
        config.groups[1].id = "standard-api".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate group id"));
    }

    #[test]
    fn test_validation_empty_symbol() {
        let mut config = Config::default();
        config.groups[2].symbols.push("  ".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_merge_cli() {
        let mut config = Config::default();
        config.merge_cli(
            Some(PathBuf::from("/tmp/xml")),
            Some(PathBuf::from("/tmp/api.json")),
            Some("json".to_string()),
        );
        assert_eq!(config.input.xml_dir, PathBuf::from("/tmp/xml"));
        assert_eq!(config.output.path, PathBuf::from("/tmp/api.json"));
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_merge_cli_keeps_unset_values() {
        let mut config = Config::default();
        config.merge_cli(None, None, None);
        assert_eq!(config.input.xml_dir, PathBuf::from("_doxygen/xml"));
        assert_eq!(config.output.format, OutputFormat::Mdx);
    }

    #[test]
    fn test_output_format_parsing() {
        let toml_str = r#"format = "json""#;
        let output: OutputConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(output.format, OutputFormat::Json);
        assert_eq!(OutputFormat::from_name("mdx"), OutputFormat::Mdx);
        assert_eq!(OutputFormat::from_name("unknown"), OutputFormat::Mdx);
    }
}
