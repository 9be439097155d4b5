//! Tree normalizer. Rewrites a freshly parsed chapter tree into the
//! canonical form the segmenters scan:
//!
//! 1. `<a>` nodes are removed outright — they hold page-number
//!    cross-references, not data.
//! 2. Literal newlines inside text nodes become spaces; the digitization
//!    embedded line-wrap artifacts as real newline characters.
//! 3. Every `<p>` whose first child is an `<i>` run gets the synthetic
//!    `class="peak"` marker. That exact adjacency is the one structural
//!    signal that a paragraph opens a new peak or pass record; route
//!    paragraphs in the source always carry whitespace between `<p>` and
//!    `<i>` and must stay unmarked.
//!
//! Normalizing an already-normalized tree is a no-op.

use crate::markup::{Element, Node};

pub fn normalize(root: &mut Element) {
    strip_links(root);
    collapse_newlines(root);
    mark_entity_openings(root);
}

fn strip_links(el: &mut Element) {
    el.children
        .retain(|c| !matches!(c, Node::Element(e) if e.tag == "a"));
    for child in &mut el.children {
        if let Node::Element(e) = child {
            strip_links(e);
        }
    }
}

fn collapse_newlines(el: &mut Element) {
    for child in &mut el.children {
        match child {
            Node::Text(t) => {
                if t.contains(['\n', '\r']) {
                    *t = t.replace(['\n', '\r'], " ");
                }
            }
            Node::Element(e) => collapse_newlines(e),
        }
    }
}

fn mark_entity_openings(el: &mut Element) {
    if el.tag == "p" && el.attr("class").is_none() && opens_with_italic(el) {
        el.set_attr("class", "peak");
    }
    for child in &mut el.children {
        if let Node::Element(e) = child {
            mark_entity_openings(e);
        }
    }
}

/// True when the very first child is an `<i>` element. A leading text node,
/// even pure whitespace, means the paragraph does not open an entity.
fn opens_with_italic(el: &Element) -> bool {
    matches!(el.children.first(), Some(Node::Element(e)) if e.tag == "i")
}

// ── Tests ──
