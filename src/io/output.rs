use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::models::{SpeakerSegments, WordFrequency};

/// Human-readable export of cleaned statements
///
/// One block per speaker label in configuration order:
///
/// ```text
/// TRUMP: cleaned statements:
/// - first statement
/// - second statement
///
/// BIDEN: cleaned statements:
/// ...
/// ```
pub struct StatementsReport<'a> {
    segments: &'a SpeakerSegments,
}

impl<'a> StatementsReport<'a> {
    pub fn new(segments: &'a SpeakerSegments) -> Self {
        Self { segments }
    }

    /// Format all speaker blocks as text
    pub fn format(&self) -> String {
        let mut output = String::new();

        for entry in self.segments.iter() {
            output.push_str(&format!("{} cleaned statements:\n", entry.label));
            for statement in &entry.statements {
                output.push_str(&format!("- {}\n", statement));
            }
            output.push('\n');
        }

        output
    }

    /// Write the formatted report to a text file
    pub fn write_file(&self, path: &Path) -> Result<()> {
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        write!(file, "{}", self.format())?;
        Ok(())
    }
}

/// Machine-readable analysis report
#[derive(Debug, Clone, Serialize)]
pub struct MachineReport {
    /// Per-speaker statements and frequencies, in label order
    pub speakers: Vec<SpeakerReport>,
    /// Totals across the whole transcript
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize)]
pub struct SpeakerReport {
    pub label: String,
    pub statements: Vec<String>,
    /// Total tokens across this speaker's cleaned statements
    pub word_count: u64,
    /// Most frequent words, highest first
    pub top_words: Vec<RankedWord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankedWord {
    pub word: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    pub speaker_count: usize,
    pub total_statements: usize,
    pub total_words: u64,
}

impl MachineReport {
    /// Assemble from segments and their per-speaker frequencies
    ///
    /// `frequencies` must be in the same label order as `segments`; the
    /// render stage builds both from the same iteration.
    pub fn from_analysis(
        segments: &SpeakerSegments,
        frequencies: &[WordFrequency],
        top_n: usize,
    ) -> Self {
        let speakers: Vec<SpeakerReport> = segments
            .iter()
            .zip(frequencies.iter())
            .map(|(entry, freq)| SpeakerReport {
                label: entry.label.clone(),
                statements: entry.statements.clone(),
                word_count: freq.total(),
                top_words: freq
                    .top(top_n)
                    .into_iter()
                    .map(|(word, count)| RankedWord {
                        word: word.to_string(),
                        count,
                    })
                    .collect(),
            })
            .collect();

        let metadata = ReportMetadata {
            speaker_count: speakers.len(),
            total_statements: segments.total_statements(),
            total_words: speakers.iter().map(|s| s.word_count).sum(),
        };

        Self { speakers, metadata }
    }

    /// Write to a JSON file
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        serde_json::to_writer_pretty(file, self).context("Failed to write JSON")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_segments() -> SpeakerSegments {
        let labels = vec!["A:".to_string(), "B:".to_string()];
        let mut segments = SpeakerSegments::with_labels(&labels);
        segments.push_statement("A:", "hello world".to_string());
        segments.push_statement("A:", String::new());
        segments.push_statement("B:", "reply".to_string());
        segments
    }

    #[test]
    fn test_statements_report_format() {
        let segments = sample_segments();
        let report = StatementsReport::new(&segments);

        assert_eq!(
            report.format(),
            "A: cleaned statements:\n- hello world\n- \n\nB: cleaned statements:\n- reply\n\n"
        );
    }

    #[test]
    fn test_statements_report_includes_empty_speakers() {
        let labels = vec!["A:".to_string()];
        let segments = SpeakerSegments::with_labels(&labels);
        let report = StatementsReport::new(&segments);

        assert_eq!(report.format(), "A: cleaned statements:\n\n");
    }

    #[test]
    fn test_statements_report_writes_file() {
        let segments = sample_segments();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("statements.txt");

        StatementsReport::new(&segments).write_file(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("A: cleaned statements:\n"));
        assert!(written.contains("- reply\n"));
    }

    #[test]
    fn test_machine_report_metadata() {
        let segments = sample_segments();
        let frequencies: Vec<WordFrequency> = segments
            .iter()
            .map(|e| crate::stages::analyze_statements(&e.statements))
            .collect();

        let report = MachineReport::from_analysis(&segments, &frequencies, 5);

        assert_eq!(report.metadata.speaker_count, 2);
        assert_eq!(report.metadata.total_statements, 3);
        assert_eq!(report.metadata.total_words, 3);
        assert_eq!(report.speakers[0].word_count, 2);
        assert_eq!(report.speakers[1].top_words[0].word, "reply");
    }

    #[test]
    fn test_machine_report_serializes() {
        let segments = sample_segments();
        let frequencies: Vec<WordFrequency> = segments
            .iter()
            .map(|e| crate::stages::analyze_statements(&e.statements))
            .collect();

        let report = MachineReport::from_analysis(&segments, &frequencies, 2);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["metadata"]["speaker_count"], 2);
        assert_eq!(json["speakers"][0]["label"], "A:");
        assert_eq!(json["speakers"][0]["statements"][0], "hello world");
    }
}
