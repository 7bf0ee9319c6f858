// Descriptor types for documented symbols
//
// Built once per symbol from its detail tree and never mutated afterwards.
// They serialize directly for the JSON output format.

use crate::notes::Description;
use serde::Serialize;

/// A documented class with its member sections
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolDescriptor {
    /// Fully qualified name, e.g. `SimpleBLE::Safe::Adapter`
    pub qualified_name: String,
    /// Heading anchor id derived from the qualified name
    pub anchor: String,
    pub brief: Description,
    pub detailed: Description,
    pub member_sections: Vec<MemberSection>,
}

impl SymbolDescriptor {
    /// Iterate over every member across all sections
    pub fn members(&self) -> impl Iterator<Item = &MemberDescriptor> {
        self.member_sections.iter().flat_map(|s| s.members.iter())
    }
}

/// Member section kinds that are documented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKind {
    PublicFunc,
    PublicStaticFunc,
}

impl SectionKind {
    /// Map a `sectiondef` kind attribute; other kinds are not documented
    pub fn from_attr(kind: &str) -> Option<Self> {
        match kind {
            "public-func" => Some(SectionKind::PublicFunc),
            "public-static-func" => Some(SectionKind::PublicStaticFunc),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::PublicFunc => "Public Functions",
            SectionKind::PublicStaticFunc => "Public Static Functions",
        }
    }
}

/// A section of members in document order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberSection {
    pub kind: SectionKind,
    pub members: Vec<MemberDescriptor>,
}

/// A documented member function
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDescriptor {
    pub name: String,
    pub signature: String,
    pub return_type: String,
    pub is_virtual: bool,
    pub is_static: bool,
    pub brief: Description,
    pub detailed: Description,
    pub parameters: Vec<Parameter>,
}

impl MemberDescriptor {
    /// Whether the member needs the expanded form with nested callouts
    pub fn has_callouts(&self) -> bool {
        !self.detailed.admonitions.is_empty()
    }
}

/// A function parameter; only emitted when both name and type are known
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
}

impl Parameter {
    /// Create a parameter, rejecting entries missing a name or a type
    pub fn new(name: &str, type_name: &str) -> Option<Self> {
        if name.is_empty() || type_name.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            type_name: type_name.to_string(),
        })
    }
}

/// Heading anchor for a qualified name: `SimpleBLE::Safe::Adapter` becomes
/// `simpleble-safe-adapter`
pub fn symbol_anchor(qualified_name: &str) -> String {
    qualified_name
        .to_lowercase()
        .replace("::", "-")
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}
