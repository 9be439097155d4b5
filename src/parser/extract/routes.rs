//! Route segmentation. A route lives in a single paragraph; the two
//! dialects differ only in how the name arrives.

use crate::markup::Element;
use crate::models::{slug_for, Route};
use crate::parser::fields::split_class_and_description;
use crate::parser::SegmentError;

/// How the paragraph introduced the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDialect {
    /// "Route N. <title>." in a leading italic run, or an untitled-dialect
    /// italic short title promoted to this dialect by the caller.
    Route,
    /// "Class N. <prose>" with no italic: the peak's single unnumbered
    /// route, named "Route 1" by convention.
    Class,
}

/// Segment one paragraph into a Route owned by `peak_id`. The italic title
/// run, when the dialect requires one, is detached from the node so the
/// remaining text feeds the rating/description split untainted.
pub fn segment_route(
    el: &mut Element,
    dialect: RouteDialect,
    peak_id: &str,
) -> Result<Route, SegmentError> {
    let mut route = Route::new();

    match dialect {
        RouteDialect::Route => {
            let title = el
                .take_first_italic()
                .ok_or(SegmentError::MissingRouteTitle)?;
            route.name = title.text().trim_matches([' ', '.', ',']).to_string();
        }
        RouteDialect::Class => route.name = "Route 1".to_string(),
    }

    let (rating, description) = split_class_and_description(&el.text())?;
    route.class_rating = rating;
    route.description = description;
    route.slug = slug_for(&route.name, &route.route_id);
    route.peak_id = peak_id.to_string();
    Ok(route)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::parse;

    fn paragraph(html: &str) -> Element {
        parse(html)
    }

    #[test]
    fn numbered_route() {
        let mut el = paragraph(
            "<p> <i>Route 1. West slope.</i> Class 1. This is the easiest of the major peaks.</p>",
        );
        let route = segment_route(&mut el, RouteDialect::Route, "peak-1").unwrap();
        assert_eq!(route.name, "Route 1. West slope");
        assert_eq!(route.class_rating, "Class 1");
        assert_eq!(route.description, "This is the easiest of the major peaks.");
        assert_eq!(route.peak_id, "peak-1");
        assert!(route.slug.starts_with("route-1-west-slope-"));
    }

    #[test]
    fn untitled_dialect_route() {
        let mut el = paragraph(
            "<p> <i>Kat Walk.</i> Class 4. First ascent September 1929 by Ralph S. Griswold.</p>",
        );
        let route = segment_route(&mut el, RouteDialect::Route, "peak-1").unwrap();
        assert_eq!(route.name, "Kat Walk");
        assert_eq!(route.class_rating, "Class 4");
    }

    #[test]
    fn class_dialect_names_route_one() {
        let mut el = paragraph("<p>Class 3. Ascend the north slope from the pass.</p>");
        let route = segment_route(&mut el, RouteDialect::Class, "peak-1").unwrap();
        assert_eq!(route.name, "Route 1");
        assert_eq!(route.class_rating, "Class 3");
        assert_eq!(route.description, "Ascend the north slope from the pass.");
    }

    #[test]
    fn route_dialect_without_italic_fails() {
        let mut el = paragraph("<p>Route 2 has lost its markup. Class 4.</p>");
        let err = segment_route(&mut el, RouteDialect::Route, "peak-1").unwrap_err();
        assert!(matches!(err, SegmentError::MissingRouteTitle));
    }

    #[test]
    fn text_without_period_fails() {
        let mut el = paragraph("<p> <i>Route 3. Arete.</i> Unrated scramble</p>");
        let err = segment_route(&mut el, RouteDialect::Route, "peak-1").unwrap_err();
        assert!(matches!(err, SegmentError::MissingSeparator(_)));
    }
}
