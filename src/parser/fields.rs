//! Pure text splitters shared by the segmenters. These carry the book's
//! prose conventions: "Name (elevation; elevation).", "Class N. <prose>",
//! and the untitled-route dialect where a short italic title stands in for
//! a "Route N." label.

use std::sync::LazyLock;

use regex::Regex;

use crate::markup::Element;

use super::SegmentError;

/// Narrative relative-position note inside an elevation field, e.g.
/// "1 NW of Recess Peak".
static LOCATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d\s[NEWS]").unwrap());

/// Untitled-dialect route title: uppercase start, ends in a period that is
/// not preceded by another period or a closing parenthesis.
static UNTITLED_TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z].+[^.)]\.").unwrap());

/// Split "Class 4. First ascent ..." into the rating before the first
/// period and the description after it. Text without any period cannot be
/// split soundly, so it is an error rather than a guess.
pub fn split_class_and_description(text: &str) -> Result<(String, String), SegmentError> {
    let (rating, description) = text
        .split_once('.')
        .ok_or_else(|| SegmentError::MissingSeparator(text.trim().to_string()))?;
    Ok((rating.trim().to_string(), description.trim().to_string()))
}

/// Split an entity title like "Peak 12,135 (12,205n; 1 NW of Recess Peak)"
/// into name, elevation tokens, and an optional narrative location note.
///
/// The text before the first `(` is the name, trimmed of trailing
/// punctuation. The remainder splits on `;` into elevation tokens. At most
/// one token — the first that looks like "digit space compass-letter" — is
/// pulled out as the location description; any later match stays where it
/// is, matching the corpus assumption of one note per field.
pub fn split_name_elevation_location(text: &str) -> (String, Vec<String>, String) {
    let (name, elevation_field) = match text.split_once('(') {
        Some((name, rest)) => (name, rest),
        None => (text, ""),
    };
    let name = name.trim_matches([' ', ',', '.']).to_string();

    let mut elevations: Vec<String> = elevation_field
        .split(';')
        .map(|e| e.trim_matches(['.', ',', ')', '(', ' ']).to_string())
        .filter(|e| !e.is_empty())
        .collect();

    let mut location = String::new();
    if let Some(i) = elevations.iter().position(|e| LOCATION_RE.is_match(e)) {
        location = elevations.remove(i);
    }

    (name, elevations, location)
}

/// Heuristic for the untitled-route dialect (e.g. the Yosemite chapter):
/// a route paragraph opening with a short italic title like "Kat Walk."
/// instead of a "Route N." label. Best-effort; false positives and
/// negatives exist at the corpus edges.
pub fn looks_like_untitled_route(el: &Element) -> bool {
    el.first_italic()
        .map(|i| UNTITLED_TITLE_RE.is_match(&i.text()))
        .unwrap_or(false)
}

// ── Tests ──
