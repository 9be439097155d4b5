//! Pipeline configuration. The corpus is the fixed set of book chapters;
//! the config names them explicitly so the pipeline takes no globals.

use std::path::{Path, PathBuf};

/// The seventeen digitized chapters, in the book's processing order.
pub const DEFAULT_CHAPTERS: &[&str] = &[
    "mono_pass_to_pine_creek_pass.html",
    "kaweahs_great_western_divide.html",
    "palisades_to_kearsarge_pass.html",
    "bond_to_tioga_other_peaks.html",
    "mammoth_pass_to_mono_pass.html",
    "evolution_black_divide.html",
    "minarets_ritter_range.html",
    "palisades.html",
    "kings-kern_divide.html",
    "yosemite_valley.html",
    "cathedral_range.html",
    "mount_humphreys.html",
    "sawtooth_ridge.html",
    "leconte_divide.html",
    "kings_canyon.html",
    "clark_range.html",
    "whitney.html",
];

#[derive(Debug, Clone)]
pub struct Config {
    /// Ordered source documents; output lists follow this order.
    pub documents: Vec<PathBuf>,
}

impl Config {
    /// The default corpus rooted at `dir`.
    pub fn from_chapter_dir(dir: &Path) -> Self {
        Config {
            documents: DEFAULT_CHAPTERS.iter().map(|name| dir.join(name)).collect(),
        }
    }

    pub fn from_documents(documents: Vec<PathBuf>) -> Self {
        Config { documents }
    }
}

// ── Tests ──
