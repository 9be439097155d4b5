//! JSON sink: one file per entity kind, truncated and rewritten each run.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::parser::CorpusResult;

pub fn write_outputs(dir: &Path, result: &CorpusResult) -> Result<()> {
    write_file(&dir.join("output-peaks.json"), &result.peaks)?;
    write_file(&dir.join("output-passes.json"), &result.passes)?;
    write_file(&dir.join("output-regions.json"), &result.regions)?;
    Ok(())
}

fn write_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("creating {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), value)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
