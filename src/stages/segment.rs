use tracing::debug;

use crate::models::SpeakerSegments;
use crate::nlp::{clean_text, StopwordSet};

/// Configuration for the segmentation stage
#[derive(Debug, Clone)]
pub struct SegmenterConfig {
    /// Speaker label prefixes in priority order; first match wins when a
    /// line could start with more than one
    pub speaker_labels: Vec<String>,
    /// Stopword set applied when flushing each statement
    pub stopwords: StopwordSet,
}

impl SegmenterConfig {
    pub fn new(speaker_labels: Vec<String>, stopwords: StopwordSet) -> Self {
        Self {
            speaker_labels,
            stopwords,
        }
    }
}

/// Result of segmenting one transcript
#[derive(Debug, Clone)]
pub struct SegmentResult {
    /// Cleaned statements per speaker, in label order
    pub segments: SpeakerSegments,
    /// Number of lines that opened a new speaker turn
    pub label_matches: usize,
    /// Lines before the first recognized label, dropped from all speakers
    pub dropped_lines: usize,
}

/// Split a transcript into per-speaker cleaned statements
///
/// Scans line by line. A line starting with a known label closes the open
/// statement (cleaning and appending it to the previous speaker's list) and
/// opens a new one seeded with the rest of that line. Any other line joins
/// the open statement, or is dropped if no turn has started yet. The final
/// open statement is flushed at end of input.
///
/// Every label match produces exactly one statement, even when the turn
/// cleans down to an empty string; statement counts reflect turn-taking,
/// not surviving content.
pub fn segment_transcript(transcript: &str, config: &SegmenterConfig) -> SegmentResult {
    let mut segments = SpeakerSegments::with_labels(&config.speaker_labels);
    let mut label_matches = 0;
    let mut dropped_lines = 0;

    let mut current_speaker: Option<&str> = None;
    let mut buffer: Vec<&str> = Vec::new();

    for line in transcript.lines() {
        if let Some(label) = match_label(line, &config.speaker_labels) {
            if let Some(speaker) = current_speaker {
                flush(&mut segments, speaker, &buffer, &config.stopwords);
                buffer.clear();
            }
            current_speaker = Some(label);
            label_matches += 1;
            buffer.push(line[label.len()..].trim());
        } else if current_speaker.is_some() {
            buffer.push(line.trim());
        } else {
            // Preamble before any speaker turn; belongs to no one
            dropped_lines += 1;
        }
    }

    if let Some(speaker) = current_speaker {
        if !buffer.is_empty() {
            flush(&mut segments, speaker, &buffer, &config.stopwords);
        }
    }

    debug!(
        "Segmented {} turns into {} statements ({} preamble lines dropped)",
        label_matches,
        segments.total_statements(),
        dropped_lines
    );

    SegmentResult {
        segments,
        label_matches,
        dropped_lines,
    }
}

/// First configured label the line starts with, if any
fn match_label<'a>(line: &str, labels: &'a [String]) -> Option<&'a str> {
    labels
        .iter()
        .find(|label| line.starts_with(label.as_str()))
        .map(|label| label.as_str())
}

fn flush(segments: &mut SpeakerSegments, speaker: &str, buffer: &[&str], stopwords: &StopwordSet) {
    let statement = clean_text(&buffer.join(" "), stopwords);
    segments.push_statement(speaker, statement);
}
