//! Word-cloud rendering boundary
//!
//! The pipeline hands a renderer a word-to-weight mapping and nothing
//! else; everything about layout, color, and output format lives behind
//! [`CloudRenderer`].

pub mod svg;

pub use svg::*;

use std::path::PathBuf;

use thiserror::Error;

use crate::models::WordFrequency;

#[derive(Debug, Error)]
pub enum RenderError {
    /// An empty frequency mapping has nothing to draw; callers should
    /// skip speakers whose turns all cleaned down to nothing
    #[error("no words to render for {label}")]
    EmptyCloud { label: String },

    #[error("failed to write cloud image")]
    Io(#[from] std::io::Error),
}

/// Renders one speaker's word frequencies to an image file
pub trait CloudRenderer {
    /// Render a cloud for `label`, returning the path written
    ///
    /// `frequencies` must be non-empty; every weight is a positive count.
    fn render(&self, label: &str, frequencies: &WordFrequency) -> Result<PathBuf, RenderError>;
}
