use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{debug, info};

use crate::io::{MachineReport, StatementsReport};
use crate::models::{SpeakerSegments, WordFrequency};
use crate::render::CloudRenderer;

/// Configuration for the output stage
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// How many ranked words the machine report keeps per speaker
    pub top_words: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { top_words: 5 }
    }
}

/// Result of the output stage
#[derive(Debug)]
pub struct RenderResult {
    /// Path of the cleaned-statements text file
    pub statements_path: PathBuf,
    /// Path of the machine report (if requested)
    pub machine_path: Option<PathBuf>,
    /// One cloud image per speaker that had any words
    pub cloud_paths: Vec<PathBuf>,
}

/// Write every output view of one analyzed transcript
///
/// Produces up to three views:
/// 1. Cleaned statements: one text block per speaker (always written)
/// 2. Machine report: statements plus ranked frequencies as JSON
/// 3. Word clouds: one image per speaker, via the supplied renderer
///
/// `frequencies` must parallel `segments` in label order. Speakers whose
/// turns all cleaned down to nothing are skipped when rendering clouds;
/// an empty mapping is degenerate input for any renderer.
pub fn execute_render(
    segments: &SpeakerSegments,
    frequencies: &[WordFrequency],
    statements_output: &Path,
    machine_output: Option<&Path>,
    cloud_renderer: Option<&dyn CloudRenderer>,
    config: &RenderConfig,
) -> Result<RenderResult> {
    info!("Writing cleaned statements to {:?}", statements_output);
    StatementsReport::new(segments).write_file(statements_output)?;

    let mut machine_path = None;
    if let Some(path) = machine_output {
        info!("Writing machine report to {:?}", path);
        let report = MachineReport::from_analysis(segments, frequencies, config.top_words);
        report.write_json(path)?;
        machine_path = Some(path.to_path_buf());
    }

    let mut cloud_paths = Vec::new();
    if let Some(renderer) = cloud_renderer {
        for (entry, freq) in segments.iter().zip(frequencies.iter()) {
            if freq.is_empty() {
                debug!("No words survived cleaning for {}, skipping cloud", entry.label);
                continue;
            }
            let path = renderer.render(&entry.label, freq)?;
            info!("Wrote word cloud for {} to {:?}", entry.label, path);
            cloud_paths.push(path);
        }
    }

    Ok(RenderResult {
        statements_path: statements_output.to_path_buf(),
        machine_path,
        cloud_paths,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::SvgCloudRenderer;
    use crate::stages::analyze_statements;

    fn analyzed() -> (SpeakerSegments, Vec<WordFrequency>) {
        let labels = vec!["A:".to_string(), "B:".to_string()];
        let mut segments = SpeakerSegments::with_labels(&labels);
        segments.push_statement("A:", "hello world hello".to_string());
        segments.push_statement("B:", String::new());

        let frequencies = segments
            .iter()
            .map(|e| analyze_statements(&e.statements))
            .collect();
        (segments, frequencies)
    }

    #[test]
    fn test_writes_statements_file() {
        let (segments, frequencies) = analyzed();
        let dir = tempfile::tempdir().unwrap();
        let statements = dir.path().join("statements.txt");

        let result = execute_render(
            &segments,
            &frequencies,
            &statements,
            None,
            None,
            &RenderConfig::default(),
        )
        .unwrap();

        assert_eq!(result.statements_path, statements);
        assert!(result.machine_path.is_none());
        assert!(result.cloud_paths.is_empty());

        let text = std::fs::read_to_string(&statements).unwrap();
        assert!(text.contains("A: cleaned statements:\n- hello world hello\n"));
    }

    #[test]
    fn test_writes_machine_report_when_requested() {
        let (segments, frequencies) = analyzed();
        let dir = tempfile::tempdir().unwrap();
        let statements = dir.path().join("statements.txt");
        let machine = dir.path().join("report.json");

        let result = execute_render(
            &segments,
            &frequencies,
            &statements,
            Some(&machine),
            None,
            &RenderConfig::default(),
        )
        .unwrap();

        assert_eq!(result.machine_path, Some(machine.clone()));
        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&machine).unwrap()).unwrap();
        assert_eq!(json["speakers"][0]["top_words"][0]["word"], "hello");
        assert_eq!(json["speakers"][0]["top_words"][0]["count"], 2);
    }

    #[test]
    fn test_skips_clouds_for_empty_speakers() {
        let (segments, frequencies) = analyzed();
        let dir = tempfile::tempdir().unwrap();
        let statements = dir.path().join("statements.txt");
        let renderer = SvgCloudRenderer::new(&dir.path().join("clouds"));

        let result = execute_render(
            &segments,
            &frequencies,
            &statements,
            None,
            Some(&renderer),
            &RenderConfig::default(),
        )
        .unwrap();

        // B: had no surviving words, so only A: gets a cloud
        assert_eq!(result.cloud_paths.len(), 1);
        assert!(result.cloud_paths[0].ends_with("a.svg"));
    }
}
