// Symbol locator backed by Doxygen's index.xml
//
// The catalog lists every compound Doxygen documented, keyed by its refid.
// A compound's detail tree lives next to the index as `<refid>.xml`.

use crate::error::{Error, Result};
use crate::extract::extract_text;
use crate::tree::{first_child, read_tree_file, Node};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// File name of the catalog inside the XML directory
pub const INDEX_FILE: &str = "index.xml";

/// One compound entry from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexEntry {
    pub name: String,
    pub refid: String,
    pub kind: String,
}

impl IndexEntry {
    /// Path of this compound's detail tree
    pub fn detail_path(&self, xml_dir: &Path) -> PathBuf {
        xml_dir.join(format!("{}.xml", self.refid))
    }
}

/// The catalog of documented compounds
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<IndexEntry>,
}

impl Catalog {
    /// Build a catalog from a parsed `index.xml`.
    ///
    /// Compounds without a `refid` cannot be located and are left out.
    pub fn from_tree(forest: &[Node]) -> Self {
        let entries = first_child(forest, "doxygenindex")
            .map(|index| {
                index
                    .children_named("compound")
                    .filter_map(|compound| {
                        let refid = compound.attr("refid")?;
                        let name = compound
                            .first_child("name")
                            .map(|n| extract_text(&n.children))
                            .unwrap_or_default();
                        Some(IndexEntry {
                            name,
                            refid: refid.to_string(),
                            kind: compound.attr("kind").unwrap_or_default().to_string(),
                        })
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self { entries }
    }

    /// Load `index.xml` from the XML directory.
    ///
    /// Any failure here is fatal for a batch, so it is reported as
    /// [`Error::CatalogUnavailable`].
    pub fn load(xml_dir: &Path) -> Result<Self> {
        let path = xml_dir.join(INDEX_FILE);
        let forest = read_tree_file(&path).map_err(|e| Error::catalog(&path, e.to_string()))?;
        Ok(Self::from_tree(&forest))
    }

    /// Find the entry with exactly this qualified name (case-sensitive)
    pub fn locate(&self, qualified_name: &str) -> Option<&IndexEntry> {
        self.entries.iter().find(|e| e.name == qualified_name)
    }

    /// Resolve a qualified name straight to its detail file path
    pub fn locate_file(&self, qualified_name: &str, xml_dir: &Path) -> Option<PathBuf> {
        self.locate(qualified_name).map(|e| e.detail_path(xml_dir))
    }

    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    /// Entries of a given compound kind (`class`, `namespace`, `file`, ...)
    pub fn of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a IndexEntry> + 'a {
        self.entries.iter().filter(move |e| e.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
