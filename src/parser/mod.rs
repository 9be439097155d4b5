//! Document-to-record extraction: normalize the markup tree, segment it
//! into entities, and fold the corpus.

pub mod extract;
pub mod fields;
pub mod normalize;

use std::path::PathBuf;

use anyhow::Result;
use rayon::prelude::*;
use thiserror::Error;
use tracing::{error, info};

use crate::config::Config;
use crate::markup;
use crate::models::{Pass, Peak, Region};
use crate::source;

/// Per-entity failure inside one chapter. Always recovered at the
/// segmentation loop: the entity is skipped, the document continues.
#[derive(Debug, Error)]
pub enum SegmentError {
    /// The rating/description split found no sentence separator; splitting
    /// anyway would produce a silently wrong rating.
    #[error("no sentence separator in {0:?}")]
    MissingSeparator(String),
    /// A "Route"-dialect paragraph without the italic title run it promises.
    #[error("route paragraph has no italic title")]
    MissingRouteTitle,
}

pub struct ParsedDocument {
    pub region: Region,
}

/// Parse one chapter. The Region comes back with its peaks and passes
/// attached and their `region`/`region_slug` fields back-filled.
pub fn parse_document(html: &str) -> ParsedDocument {
    let mut root = markup::parse(html);
    normalize::normalize(&mut root);

    let mut region = extract::region::extract(&root);
    // Peak and pass segmentation both detach italic title runs from the
    // paragraphs they consume, and pass paragraphs double as peak records,
    // so each segmenter gets its own working copy of the tree.
    let mut peak_tree = root.clone();
    let peaks = extract::peaks::extract(&mut peak_tree, &region);
    let passes = extract::passes::extract(&mut root, &region);
    region.peaks = peaks;
    region.passes = passes;

    ParsedDocument { region }
}

#[derive(Default)]
pub struct CorpusResult {
    pub peaks: Vec<Peak>,
    pub passes: Vec<Pass>,
    pub regions: Vec<Region>,
    pub failed: Vec<PathBuf>,
}

impl CorpusResult {
    pub fn route_count(&self) -> usize {
        self.peaks.iter().map(|p| p.routes.len()).sum()
    }
}

/// Fold the whole corpus. Chapters are independent, so they parse in
/// parallel; `collect` keeps per-document order, so output matches a
/// sequential run. A chapter that fails to load is logged and skipped,
/// never aborting the rest of the corpus.
pub fn parse_corpus(config: &Config) -> CorpusResult {
    let parsed: Vec<(&PathBuf, Result<ParsedDocument>)> = config
        .documents
        .par_iter()
        .map(|path| {
            let result = source::read_chapter(path).map(|html| parse_document(&html));
            (path, result)
        })
        .collect();

    let mut out = CorpusResult::default();
    for (path, result) in parsed {
        match result {
            Ok(doc) => {
                info!(
                    document = %path.display(),
                    region = %doc.region.name,
                    peaks = doc.region.peaks.len(),
                    passes = doc.region.passes.len(),
                    "parsed chapter"
                );
                out.peaks.extend(doc.region.peaks.iter().cloned());
                out.passes.extend(doc.region.passes.iter().cloned());
                out.regions.push(doc.region);
            }
            Err(err) => {
                error!(document = %path.display(), "skipping chapter: {err:#}");
                out.failed.push(path.clone());
            }
        }
    }
    out
}
