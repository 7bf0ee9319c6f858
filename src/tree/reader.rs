// XML reader producing order-preserving element trees
//
// Text runs are trimmed and whitespace-only runs dropped, matching how
// Doxygen output is meant to be read: indentation between tags is not prose.

use super::node::{Element, Node};
use crate::error::{Error, Result};
use std::path::Path;
use sxd_document::dom::{ChildOfElement, ChildOfRoot, Element as DomElement};
use sxd_document::parser;

/// Parse XML text into a forest of root-level nodes
pub fn parse_tree(xml: &str) -> Result<Vec<Node>> {
    let package = parser::parse(xml)?;
    let document = package.as_document();

    let roots = document
        .root()
        .children()
        .into_iter()
        .filter_map(|child| match child {
            ChildOfRoot::Element(el) => Some(Node::Element(convert_element(el))),
            _ => None,
        })
        .collect();

    Ok(roots)
}

/// Read and parse an XML file from disk
pub fn read_tree_file(path: &Path) -> Result<Vec<Node>> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        Error::Io(std::io::Error::new(e.kind(), format!("{}: {}", path.display(), e)))
    })?;

    parse_tree(&contents).map_err(|e| match e {
        Error::Xml(e) => Error::malformed(path, e.to_string()),
        other => other,
    })
}

fn convert_element(el: DomElement) -> Element {
    let attributes = el
        .attributes()
        .into_iter()
        .map(|attr| (attr.name().local_part().to_string(), attr.value().to_string()))
        .collect();

    let mut children = Vec::new();
    // The parser may split one run of character data around entity references
    let mut pending_text = String::new();

    for child in el.children() {
        match child {
            ChildOfElement::Text(text) => pending_text.push_str(text.text()),
            ChildOfElement::Element(inner) => {
                flush_text(&mut pending_text, &mut children);
                children.push(Node::Element(convert_element(inner)));
            }
            ChildOfElement::Comment(_) | ChildOfElement::ProcessingInstruction(_) => {}
        }
    }
    flush_text(&mut pending_text, &mut children);

    Element {
        name: el.name().local_part().to_string(),
        attributes,
        children,
    }
}

fn flush_text(pending: &mut String, children: &mut Vec<Node>) {
    let trimmed = pending.trim();
    if !trimmed.is_empty() {
        children.push(Node::Text(trimmed.to_string()));
    }
    pending.clear();
}
