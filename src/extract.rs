//! Mixed-content extraction.
//!
//! Flattens the children of a Doxygen description element into one line of
//! Markdown prose: inline code, emphasis and bold become their Markdown forms,
//! cross-references become anchor links where the target id is stable, and
//! nested paragraphs continue the same run of text.

use crate::tree::{Element, Node};
use regex::Regex;
use std::sync::LazyLock;

/// Refids carrying a long hash segment are generated for disambiguation and
/// do not correspond to any heading we emit.
static UNSTABLE_REFID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"class_.*_1[a-f0-9]{30,}").unwrap());

static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

static RE_SPACE_BEFORE_PERIOD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+\.").unwrap());

static RE_SPACE_BEFORE_COMMA: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+,").unwrap());

static RE_SPACE_AFTER_OPEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(\s+").unwrap());

static RE_SPACE_BEFORE_CLOSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+\)").unwrap());

const REFID_PREFIX: &str = "class_";
const NAMESPACE_SEPARATOR: &str = "_1_1";

/// Inline element kinds understood by the extractor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineKind {
    CrossRef,
    Code,
    Emphasis,
    Bold,
    Paragraph,
    /// `simplesect` blocks, owned by the note classifier
    Admonition,
    Unknown,
}

impl InlineKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "ref" => InlineKind::CrossRef,
            "computeroutput" => InlineKind::Code,
            "emphasis" => InlineKind::Emphasis,
            "bold" => InlineKind::Bold,
            "para" => InlineKind::Paragraph,
            "simplesect" => InlineKind::Admonition,
            _ => InlineKind::Unknown,
        }
    }
}

/// Convert a Doxygen refid into an in-page anchor (`#namespace-class`).
///
/// Returns `None` for refids that are not class references or that carry an
/// auto-generated hash; callers fall back to plain text.
pub fn anchor_for_refid(refid: &str) -> Option<String> {
    let rest = refid.strip_prefix(REFID_PREFIX)?;
    if UNSTABLE_REFID.is_match(refid) {
        return None;
    }

    let id = rest
        .split(NAMESPACE_SEPARATOR)
        .map(|segment| segment.replace('_', ""))
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();

    Some(format!("#{}", id))
}

/// Flatten a sequence of mixed-content nodes into normalized prose
pub fn extract_text(nodes: &[Node]) -> String {
    let parts: Vec<String> = nodes
        .iter()
        .filter_map(|node| match node {
            Node::Text(text) if !text.is_empty() => Some(text.clone()),
            Node::Text(_) => None,
            Node::Element(el) => render_inline(el),
        })
        .collect();

    normalize_whitespace(&parts.join(" "))
}

/// Render one inline element, or `None` if it contributes nothing to the prose
fn render_inline(el: &Element) -> Option<String> {
    match InlineKind::from_tag(&el.name) {
        InlineKind::CrossRef => {
            let text = non_empty(extract_text(&el.children))?;
            match el.attr("refid").and_then(anchor_for_refid) {
                Some(anchor) => Some(format!("[{}]({})", text, anchor)),
                None => Some(text),
            }
        }
        InlineKind::Code => wrap(el, "`"),
        InlineKind::Emphasis => wrap(el, "*"),
        InlineKind::Bold => wrap(el, "**"),
        InlineKind::Paragraph => non_empty(extract_text(&el.children)),
        InlineKind::Admonition | InlineKind::Unknown => None,
    }
}

fn wrap(el: &Element, marker: &str) -> Option<String> {
    let text = non_empty(extract_text(&el.children))?;
    Some(format!("{marker}{text}{marker}"))
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Collapse whitespace and tidy the spaces introduced between inline segments
pub fn normalize_whitespace(text: &str) -> String {
    let result = RE_WHITESPACE.replace_all(text, " ");
    let result = RE_SPACE_BEFORE_PERIOD.replace_all(&result, ".");
    let result = RE_SPACE_BEFORE_COMMA.replace_all(&result, ",");
    let result = RE_SPACE_AFTER_OPEN.replace_all(&result, "(");
    let result = RE_SPACE_BEFORE_CLOSE.replace_all(&result, ")");
    result.trim().to_string()
}
