//! Document source. The digitized chapters are windows-1252, not ISO or
//! UTF-8; decoding is lossy-safe (unmappable bytes become U+FFFD) so a
//! stray byte never fails a whole chapter.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use encoding_rs::WINDOWS_1252;

pub fn read_chapter(path: &Path) -> Result<String> {
    let bytes = fs::read(path)
        .with_context(|| format!("reading chapter {}", path.display()))?;
    let (text, _, _) = WINDOWS_1252.decode(&bytes);
    Ok(text.into_owned())
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_windows_1252() {
        let dir = std::env::temp_dir();
        let path = dir.join("guide-parser-encoding-test.html");
        // "ar\xEAte" — windows-1252 for "arête".
        fs::write(&path, b"<p>ar\xEAte</p>").unwrap();
        let text = read_chapter(&path).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(text, "<p>arête</p>");
    }

    #[test]
    fn missing_file_names_the_document() {
        let err = read_chapter(Path::new("/nonexistent/whitney.html")).unwrap_err();
        assert!(format!("{err:#}").contains("whitney.html"));
    }
}
