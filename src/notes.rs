//! Note and callout classification.
//!
//! Admonitions reach us two ways: as `<simplesect kind="...">` blocks that
//! Doxygen emits for `@note`/`@warning`, and as informal `NOTE:` style markers
//! typed straight into running prose. Both are pulled out of the text and
//! returned separately so the renderer can emit them as callout blocks.

use crate::extract::extract_text;
use crate::tree::Element;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Callout category understood by the rendering front end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CalloutKind {
    Info,
    Warn,
    Idea,
}

impl CalloutKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CalloutKind::Info => "info",
            CalloutKind::Warn => "warn",
            CalloutKind::Idea => "idea",
        }
    }

    /// Map a `simplesect` kind attribute to a callout category.
    ///
    /// `return`, `see`, `since` and every other kind stay unmapped and are
    /// dropped by the caller.
    pub fn from_section_kind(kind: &str) -> Option<Self> {
        match kind {
            "note" => Some(CalloutKind::Info),
            "warning" | "attention" => Some(CalloutKind::Warn),
            "remark" => Some(CalloutKind::Idea),
            _ => None,
        }
    }
}

/// A callout separated from the main prose
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Admonition {
    pub kind: CalloutKind,
    pub title: String,
    pub body: String,
}

impl Admonition {
    pub fn new(kind: CalloutKind, title: &str, body: &str) -> Self {
        Self {
            kind,
            title: title.to_string(),
            body: body.to_string(),
        }
    }
}

/// Prose of a brief or detailed description with its callouts split out
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Description {
    pub text: String,
    pub admonitions: Vec<Admonition>,
}

impl Description {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.admonitions.is_empty()
    }
}

/// One piece of a prose string after splitting on informal markers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    Marked(Admonition),
}

struct InlineMarker {
    pattern: Regex,
    kind: CalloutKind,
    title: &'static str,
}

static INLINE_MARKERS: LazyLock<Vec<InlineMarker>> = LazyLock::new(|| {
    [
        ("NOTE", CalloutKind::Info, "Note"),
        ("WARNING", CalloutKind::Warn, "Warning"),
        ("IMPORTANT", CalloutKind::Warn, "Important"),
        ("TODO", CalloutKind::Idea, "Todo"),
        ("ATTENTION", CalloutKind::Warn, "Attention"),
    ]
    .into_iter()
    .map(|(word, kind, title)| InlineMarker {
        pattern: Regex::new(&format!(r"(?i){}:\s*", word)).unwrap(),
        kind,
        title,
    })
    .collect()
});

struct MarkerMatch {
    start: usize,
    end: usize,
    kind: CalloutKind,
    title: &'static str,
}

/// Split prose on informal `NOTE:`/`WARNING:`/... markers.
///
/// Text before the first marker is plain; the text following each marker up
/// to the next one is that marker's body. Empty pieces are dropped. Prose with
/// no markers comes back as a single trimmed plain segment.
pub fn split_inline_notes(text: &str) -> Vec<Segment> {
    let mut matches: Vec<MarkerMatch> = INLINE_MARKERS
        .iter()
        .flat_map(|marker| {
            marker.pattern.find_iter(text).map(move |m| MarkerMatch {
                start: m.start(),
                end: m.end(),
                kind: marker.kind,
                title: marker.title,
            })
        })
        .collect();

    if matches.is_empty() {
        return vec![Segment::Plain(text.trim().to_string())];
    }

    matches.sort_by_key(|m| m.start);

    let mut segments = Vec::new();
    let mut last = 0;

    for (i, current) in matches.iter().enumerate() {
        if current.start > last {
            let before = text[last..current.start].trim();
            if !before.is_empty() {
                segments.push(Segment::Plain(before.to_string()));
            }
        }

        let body_start = current.end.max(last);
        let body_end = matches
            .get(i + 1)
            .map_or(text.len(), |next| next.start)
            .max(body_start);
        let body = text[body_start..body_end].trim();

        if !body.is_empty() {
            segments.push(Segment::Marked(Admonition::new(current.kind, current.title, body)));
        }

        last = body_end;
    }

    segments
}

/// Extract the structural (`simplesect`) admonitions that sit directly in a paragraph
pub fn structural_admonitions(para: &Element) -> Vec<Admonition> {
    para.children_named("simplesect")
        .filter_map(|sect| {
            let kind_attr = sect.attr("kind")?;
            let kind = CalloutKind::from_section_kind(kind_attr)?;

            let body = sect
                .children_named("para")
                .map(|p| extract_text(&p.children))
                .filter(|text| !text.is_empty())
                .collect::<Vec<_>>()
                .join("\n\n");

            if body.is_empty() {
                None
            } else {
                Some(Admonition::new(kind, &capitalize(kind_attr), &body))
            }
        })
        .collect()
}

/// Parse a `briefdescription` or `detaileddescription` element.
///
/// Paragraphs are visited in order. Each paragraph contributes its plain
/// prose to `text`, then its informal markers, then its `simplesect` blocks
/// to `admonitions`.
pub fn parse_description(desc: &Element) -> Description {
    let mut text_parts: Vec<String> = Vec::new();
    let mut admonitions = Vec::new();

    for para in desc.children_named("para") {
        let prose = extract_text(&para.children);

        if !prose.is_empty() {
            for segment in split_inline_notes(&prose) {
                match segment {
                    Segment::Plain(text) => text_parts.push(text),
                    Segment::Marked(admonition) => admonitions.push(admonition),
                }
            }
        }

        admonitions.extend(structural_admonitions(para));
    }

    let text = text_parts
        .into_iter()
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
        .trim()
        .to_string();

    Description { text, admonitions }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
