//! Pass segmentation. Passes live in their own chapter section, fenced by
//! `<h4>` headings: the section opens at the heading mentioning "passes"
//! and closes at the next heading of the same kind.

use tracing::warn;

use crate::markup::{Element, Node};
use crate::models::{slug_for, Pass, Region};
use crate::parser::fields::{split_class_and_description, split_name_elevation_location};
use crate::parser::SegmentError;

use super::is_back_matter;

/// Segment the document's pass section. A missing section means the region
/// simply has no passes — an empty result, not an error.
pub fn extract(root: &mut Element, region: &Region) -> Vec<Pass> {
    let mut passes = Vec::new();
    walk(root, region, &mut passes);
    passes
}

fn walk(el: &mut Element, region: &Region, out: &mut Vec<Pass>) {
    let start = el
        .children
        .iter()
        .position(|c| matches!(c, Node::Element(e) if is_passes_heading(e)));

    if let Some(start) = start {
        for node in el.children.iter_mut().skip(start + 1) {
            let sibling = match node {
                Node::Element(e) => e,
                Node::Text(_) => continue,
            };
            if sibling.tag == "h4" {
                break;
            }
            if sibling.tag != "p" {
                continue;
            }
            match segment(sibling, region) {
                Some(Ok(pass)) => {
                    if !is_back_matter(&pass.name) {
                        out.push(pass);
                    }
                }
                Some(Err(err)) => warn!(%err, "skipping malformed pass paragraph"),
                // Untitled continuation paragraphs carry no record of their
                // own and are skipped.
                None => {}
            }
        }
        return;
    }

    for child in &mut el.children {
        if let Node::Element(e) = child {
            walk(e, region, out);
        }
    }
}

fn is_passes_heading(el: &Element) -> bool {
    el.tag == "h4" && el.text().to_lowercase().contains("passes")
}

fn segment(el: &mut Element, region: &Region) -> Option<Result<Pass, SegmentError>> {
    let title = el.take_first_italic()?;
    let (name, elevations, location) = split_name_elevation_location(&title.text());

    let (rating, description) = match split_class_and_description(&el.text()) {
        Ok(parts) => parts,
        Err(err) => return Some(Err(err)),
    };

    let mut pass = Pass::new();
    pass.name = name;
    pass.elevations = elevations;
    pass.location_description = location;
    pass.class_rating = rating;
    pass.description = description;
    pass.slug = slug_for(&pass.name, &pass.pass_id);
    pass.region = region.name.clone();
    pass.region_slug = region.slug.clone();
    Some(Ok(pass))
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::parse;
    use crate::parser::normalize::normalize;

    fn passes_from(html: &str) -> Vec<Pass> {
        let mut root = parse(html);
        normalize(&mut root);
        let region = Region::new("Test Region");
        extract(&mut root, &region)
    }

    #[test]
    fn section_bounded_by_headings() {
        let passes = passes_from(
            "<body>\
             <h4>Principal Passes of the Region</h4>\
             <p><i>Glacier Notch (13,000+).</i> Class 3. Cross the bergschrund.</p>\
             <p><i>Southfork Pass (12,560; 1 SE of Mount Bolton Brown).</i> Class 2. Follow the moraine.</p>\
             <h4>Peaks of the Region</h4>\
             <p><i>Stray Paragraph.</i> Class 1. Should not be a pass.</p>\
             </body>",
        );
        assert_eq!(passes.len(), 2);
        assert_eq!(passes[0].name, "Glacier Notch");
        assert_eq!(passes[0].elevations, vec!["13,000+"]);
        assert_eq!(passes[0].class_rating, "Class 3");
        assert_eq!(passes[1].name, "Southfork Pass");
        assert_eq!(passes[1].location_description, "1 SE of Mount Bolton Brown");
    }

    #[test]
    fn no_passes_heading_means_no_passes() {
        let passes = passes_from(
            "<body><h4>Peaks of the Region</h4><p><i>A Peak (9,000).</i> Class 1. Walk.</p></body>",
        );
        assert!(passes.is_empty());
    }

    #[test]
    fn heading_match_is_case_insensitive() {
        let passes = passes_from(
            "<body><h4>PASSES</h4><p><i>Low Gap (8,000).</i> Class 1. Stroll over.</p></body>",
        );
        assert_eq!(passes.len(), 1);
    }

    #[test]
    fn untitled_paragraph_skipped() {
        let passes = passes_from(
            "<body>\
             <h4>Passes</h4>\
             <p>An untitled continuation paragraph about approaches.</p>\
             <p><i>Real Pass (10,000).</i> Class 2. Cross the saddle.</p>\
             </body>",
        );
        assert_eq!(passes.len(), 1);
        assert_eq!(passes[0].name, "Real Pass");
    }

    #[test]
    fn malformed_pass_skipped() {
        let passes = passes_from(
            "<body>\
             <h4>Passes</h4>\
             <p><i>Broken Pass (9,500)</i> no separator here</p>\
             <p><i>Fine Pass (9,600).</i> Class 2. Cross it.</p>\
             </body>",
        );
        assert_eq!(passes.len(), 1);
        assert_eq!(passes[0].name, "Fine Pass");
    }

    #[test]
    fn back_matter_filtered() {
        let passes = passes_from(
            "<body>\
             <h4>Passes</h4>\
             <p><i>References for the Chapter.</i> Class 1. Not a pass.</p>\
             </body>",
        );
        assert!(passes.is_empty());
    }

    #[test]
    fn region_fields_back_filled() {
        let mut root = parse(
            "<body><h4>Passes</h4><p><i>Gap (7,000).</i> Class 1. Go.</p></body>",
        );
        normalize(&mut root);
        let region = Region::new("The Kaweahs");
        let passes = extract(&mut root, &region);
        assert_eq!(passes[0].region, "The Kaweahs");
        assert_eq!(passes[0].region_slug, region.slug);
    }
}
