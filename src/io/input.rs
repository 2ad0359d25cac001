use std::path::Path;

use anyhow::{Context, Result};

/// Read a transcript file into memory
///
/// The transcript is an opaque blob to this layer; all structure is
/// recovered later by the segmenter.
pub fn read_transcript(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read transcript: {:?}", path))
}

/// Read an extra-stopword file: one word per line, blank lines and
/// `#`-prefixed comment lines skipped
pub fn read_stopword_file(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read stopword file: {:?}", path))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}
