//! Peak segmentation. A peak record starts at an entity-opening paragraph
//! and runs forward through its siblings until the next entity opening or
//! the end-of-chapter marker.

use tracing::warn;

use crate::markup::{classify, Element, Node, NodeClass};
use crate::models::{slug_for, Peak, Region};
use crate::parser::fields::{looks_like_untitled_route, split_name_elevation_location};

use super::is_back_matter;
use super::routes::{segment_route, RouteDialect};

/// Segment every peak in the document, in document order. Back-matter
/// headings that matched the entity-opening pattern are filtered here,
/// after segmentation.
pub fn extract(root: &mut Element, region: &Region) -> Vec<Peak> {
    let mut peaks = Vec::new();
    walk(root, region, &mut peaks);
    peaks
}

fn walk(el: &mut Element, region: &Region, out: &mut Vec<Peak>) {
    let mut i = 0;
    while i < el.children.len() {
        let opens = matches!(
            &el.children[i],
            Node::Element(e) if classify(e) == NodeClass::EntityOpen
        );
        if opens {
            let peak = segment(&mut el.children, i, region);
            if !is_back_matter(&peak.name) {
                out.push(peak);
            }
        } else if let Node::Element(child) = &mut el.children[i] {
            walk(child, region, out);
        }
        i += 1;
    }
}

/// State machine over the sibling stream starting at `start`.
///
/// The terminal checks run before any field classification, so a peak
/// followed immediately by another opening or by the chapter end is a
/// valid, empty record — zero routes and an empty description.
fn segment(children: &mut [Node], start: usize, region: &Region) -> Peak {
    let mut peak = Peak::new();

    if let Some(Node::Element(opening)) = children.get_mut(start) {
        if let Some(title) = opening.take_first_italic() {
            let (name, elevations, location) = split_name_elevation_location(&title.text());
            peak.name = name;
            peak.elevations = elevations;
            peak.location_description = location;
        }
    }

    for node in children.iter_mut().skip(start + 1) {
        let sibling = match node {
            Node::Element(e) => e,
            Node::Text(_) => continue,
        };
        match classify(sibling) {
            NodeClass::EntityOpen | NodeClass::SectionEnd => break,
            NodeClass::SectionBreak | NodeClass::Plain => {}
        }

        let text = sibling.text();
        let first_word = text.trim().split(' ').next().unwrap_or("");
        let dialect = match first_word {
            "Route" => Some(RouteDialect::Route),
            "Class" => Some(RouteDialect::Class),
            _ if looks_like_untitled_route(sibling) => Some(RouteDialect::Route),
            _ => None,
        };

        match dialect {
            Some(dialect) => match segment_route(sibling, dialect, &peak.peak_id) {
                Ok(route) => peak.routes.push(route),
                Err(err) => {
                    warn!(peak = %peak.name, %err, "skipping malformed route paragraph");
                }
            },
            None => {
                peak.description.push_str(text.trim());
                peak.description.push('\n');
            }
        }
    }

    peak.slug = slug_for(&peak.name, &peak.peak_id);
    peak.region = region.name.clone();
    peak.region_slug = region.slug.clone();
    peak
}

// ── Tests ──
