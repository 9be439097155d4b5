//! End-to-end parse of a Palisades-style chapter excerpt.

use std::path::PathBuf;

use climbers_guide_parser::config::Config;
use climbers_guide_parser::models::Region;
use climbers_guide_parser::parser::{parse_corpus, parse_document};

fn fixture_path() -> PathBuf {
    PathBuf::from("tests/fixtures/palisades_excerpt.html")
}

fn parse_fixture() -> Region {
    let html = std::fs::read_to_string(fixture_path()).unwrap();
    parse_document(&html).region
}

#[test]
fn region_title_detected() {
    let region = parse_fixture();
    assert_eq!(region.name, "The Palisades");
    assert!(region.slug.starts_with("the-palisades-"));
}

#[test]
fn every_entity_opening_becomes_a_peak() {
    // Seven entity-opening paragraphs, two discarded as back matter.
    let region = parse_fixture();
    let names: Vec<&str> = region.peaks.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Southfork Pass",
            "Glacier Notch",
            "Middle Palisade",
            "Disappointment Peak",
            "Kat Pinnacle",
        ]
    );
}

#[test]
fn middle_palisade_fields() {
    let region = parse_fixture();
    let peak = region
        .peaks
        .iter()
        .find(|p| p.name == "Middle Palisade")
        .unwrap();
    assert_eq!(peak.elevations, vec!["14,040n", "14,012"]);
    assert_eq!(
        peak.description,
        "First ascent August 26, 1921, by F. P. Farquhar and A. F. Hall, by Route 1 (SCB, 1922, 264).\n"
    );
    assert_eq!(peak.routes.len(), 3);
    assert_eq!(peak.routes[0].name, "Route 1. East face");
    assert_eq!(peak.routes[0].class_rating, "Class 3");
    assert_eq!(peak.routes[1].name, "Route 2. Northeast face");
    assert_eq!(peak.routes[2].name, "Route 3. Northwest ridge");
    assert_eq!(peak.routes[2].class_rating, "Class 4");
    assert!(peak.routes.iter().all(|r| r.peak_id == peak.peak_id));
}

#[test]
fn class_dialect_yields_single_unnumbered_route() {
    let region = parse_fixture();
    let peak = region
        .peaks
        .iter()
        .find(|p| p.name == "Disappointment Peak")
        .unwrap();
    assert_eq!(peak.elevations, vec!["13,900+", "13,917n"]);
    assert_eq!(peak.routes.len(), 1);
    assert_eq!(peak.routes[0].name, "Route 1");
    assert_eq!(peak.routes[0].class_rating, "Class 4");
}

#[test]
fn untitled_dialect_and_narrative_location() {
    let region = parse_fixture();
    let peak = region
        .peaks
        .iter()
        .find(|p| p.name == "Kat Pinnacle")
        .unwrap();
    assert_eq!(peak.elevations, vec!["12,135"]);
    assert_eq!(peak.location_description, "1 NW of Recess Peak");
    assert_eq!(peak.routes.len(), 1);
    assert_eq!(peak.routes[0].name, "Kat Walk");
    assert_eq!(peak.routes[0].class_rating, "Maximum class 5");
}

#[test]
fn passes_section_extracted() {
    let region = parse_fixture();
    assert_eq!(region.passes.len(), 2);
    let southfork = &region.passes[0];
    assert_eq!(southfork.name, "Southfork Pass");
    assert_eq!(southfork.elevations, vec!["12,560"]);
    assert_eq!(southfork.location_description, "1 SE of Mount Bolton Brown");
    assert_eq!(southfork.class_rating, "Class 2");
    assert_eq!(
        southfork.description,
        "First crossed in 1921. Follow the moraine to the notch."
    );
    assert_eq!(region.passes[1].name, "Glacier Notch");
    assert_eq!(region.passes[1].elevations, vec!["13,000+"]);
}

#[test]
fn region_back_fill_round_trip() {
    let region = parse_fixture();
    for peak in &region.peaks {
        assert_eq!(peak.region, region.name);
        assert_eq!(peak.region_slug, region.slug);
    }
    for pass in &region.passes {
        assert_eq!(pass.region, region.name);
        assert_eq!(pass.region_slug, region.slug);
    }
}

#[test]
fn corpus_fold_survives_missing_document() {
    let config = Config::from_documents(vec![
        fixture_path(),
        PathBuf::from("tests/fixtures/no_such_chapter.html"),
    ]);
    let result = parse_corpus(&config);
    assert_eq!(result.regions.len(), 1);
    assert_eq!(result.failed.len(), 1);
    assert_eq!(result.peaks.len(), 5);
    assert_eq!(result.passes.len(), 2);
    assert_eq!(result.route_count(), 5);
}
