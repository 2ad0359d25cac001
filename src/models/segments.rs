use serde::Serialize;

/// One speaker's ordered list of cleaned statements
#[derive(Debug, Clone, Serialize)]
pub struct SpeakerEntry {
    /// The label prefix that identifies this speaker (e.g. "TAPPER:")
    pub label: String,
    /// Cleaned statements in transcript order; may contain empty strings
    /// for turns that cleaned down to nothing
    pub statements: Vec<String>,
}

/// Per-speaker statement lists for one transcript, in label priority order
///
/// Every configured label gets an entry, even if it never matched a line.
/// Built once by the segmenter and read-only afterward.
#[derive(Debug, Clone, Serialize)]
pub struct SpeakerSegments {
    entries: Vec<SpeakerEntry>,
}

impl SpeakerSegments {
    /// Create with one empty entry per label, preserving label order
    pub fn with_labels(labels: &[String]) -> Self {
        Self {
            entries: labels
                .iter()
                .map(|label| SpeakerEntry {
                    label: label.clone(),
                    statements: Vec::new(),
                })
                .collect(),
        }
    }

    /// Append a cleaned statement to the given speaker's list
    ///
    /// Unknown labels are ignored; the segmenter only pushes labels it was
    /// configured with.
    pub fn push_statement(&mut self, label: &str, statement: String) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.label == label) {
            entry.statements.push(statement);
        }
    }

    /// Statements for one speaker, if the label is known
    pub fn statements(&self, label: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.statements.as_slice())
    }

    /// Entries in label priority order
    pub fn iter(&self) -> impl Iterator<Item = &SpeakerEntry> {
        self.entries.iter()
    }

    /// Configured labels in priority order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.label.as_str())
    }

    /// Total statements across all speakers
    pub fn total_statements(&self) -> usize {
        self.entries.iter().map(|e| e.statements.len()).sum()
    }

    /// True when no speaker received any statement
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.statements.is_empty())
    }
}
