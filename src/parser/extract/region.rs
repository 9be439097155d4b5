//! Region detection. Chapters open with the book's running title in
//! italics ("A Climber's Guide to the High Sierra"); the first `<h3>` after
//! that landmark is the region name. Chapters missing the landmark get an
//! unnamed region rather than an error.

use crate::markup::{preorder, Element};
use crate::models::Region;

pub fn extract(root: &Element) -> Region {
    let name = detect_title(root).unwrap_or_default();
    Region::new(&name)
}

fn detect_title(root: &Element) -> Option<String> {
    let nodes = preorder(root);
    let landmark = nodes
        .iter()
        .position(|e| e.tag == "i" && e.text().contains("Sierra"))?;
    nodes[landmark + 1..]
        .iter()
        .find(|e| e.tag == "h3")
        .map(|e| e.text().trim().to_string())
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::parse;

    #[test]
    fn title_from_heading_after_landmark() {
        let root = parse(
            "<body>\
             <i>A Climber's Guide to the High Sierra</i>\
             <h3>The Palisades</h3>\
             </body>",
        );
        let region = extract(&root);
        assert_eq!(region.name, "The Palisades");
        assert!(region.slug.starts_with("the-palisades-"));
    }

    #[test]
    fn heading_before_landmark_ignored() {
        let root = parse(
            "<body>\
             <h3>Table of Contents</h3>\
             <i>A Climber's Guide to the High Sierra</i>\
             <h3>The Kaweahs</h3>\
             </body>",
        );
        assert_eq!(extract(&root).name, "The Kaweahs");
    }

    #[test]
    fn missing_landmark_yields_unnamed_region() {
        let root = parse("<body><h3>Orphan Heading</h3></body>");
        let region = extract(&root);
        assert_eq!(region.name, "");
        // Slug still unique via the id suffix.
        assert!(!region.slug.is_empty());
    }
}
