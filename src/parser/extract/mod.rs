//! Entity segmenters. Each walks the canonical node stream produced by the
//! normalizer and assembles one kind of record.

pub mod passes;
pub mod peaks;
pub mod region;
pub mod routes;

/// Back-matter headings ("References", "Photographs") match the
/// entity-opening pattern but are not records. Substring match on the
/// extracted name, applied after segmentation rather than inside the
/// segmenter state machines.
pub(crate) fn is_back_matter(name: &str) -> bool {
    name.contains("References") || name.contains("Photographs")
}
