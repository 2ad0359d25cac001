use std::path::{Path, PathBuf};

use super::{CloudRenderer, RenderError};
use crate::models::WordFrequency;

/// Default palette, cycled per word in rank order
const PALETTE: &[&str] = &[
    "#4fc3f7", "#ffb74d", "#81c784", "#e57373", "#ba68c8", "#fff176", "#f06292", "#aed581",
];

/// Layout parameters for the SVG cloud
#[derive(Debug, Clone)]
pub struct SvgCloudConfig {
    pub width: u32,
    pub height: u32,
    pub background: String,
    /// Words beyond this rank are left out of the image
    pub max_words: usize,
    pub min_font_px: f64,
    pub max_font_px: f64,
}

impl Default for SvgCloudConfig {
    fn default() -> Self {
        // Canvas matches the original analysis: 1000x800 on black
        Self {
            width: 1000,
            height: 800,
            background: "#000000".to_string(),
            max_words: 60,
            min_font_px: 16.0,
            max_font_px: 92.0,
        }
    }
}

/// Deterministic row-layout word cloud written as an SVG file
///
/// Words are placed in rank order, left to right, wrapping to a new row
/// when the canvas width runs out. Font size scales linearly with count
/// between the configured bounds. The same frequencies always produce the
/// same bytes.
pub struct SvgCloudRenderer {
    output_dir: PathBuf,
    config: SvgCloudConfig,
}

impl SvgCloudRenderer {
    pub fn new(output_dir: &Path) -> Self {
        Self::with_config(output_dir, SvgCloudConfig::default())
    }

    pub fn with_config(output_dir: &Path, config: SvgCloudConfig) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
            config,
        }
    }

    fn build_svg(&self, label: &str, frequencies: &WordFrequency) -> String {
        let cfg = &self.config;
        let ranked = frequencies.top(cfg.max_words);

        let max_count = ranked.first().map(|&(_, c)| c).unwrap_or(1);
        let min_count = ranked.last().map(|&(_, c)| c).unwrap_or(1);

        let mut svg = String::new();
        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" \
             viewBox=\"0 0 {} {}\">\n",
            cfg.width, cfg.height, cfg.width, cfg.height
        ));
        svg.push_str(&format!("  <title>Word cloud for {}</title>\n", escape(label)));
        svg.push_str(&format!(
            "  <rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n",
            cfg.background
        ));

        let margin = 20.0;
        let gap = 18.0;
        let mut x = margin;
        let mut y = margin + cfg.max_font_px;
        let mut row_peak = 0.0_f64;

        for (rank, (word, count)) in ranked.iter().enumerate() {
            let size = font_size(*count, min_count, max_count, cfg);
            // Rough glyph-width estimate; exact metrics don't matter for a cloud
            let width = size * 0.6 * word.chars().count() as f64;

            if x + width > cfg.width as f64 - margin && x > margin {
                x = margin;
                y += row_peak * 1.25;
                row_peak = 0.0;
            }
            if y > cfg.height as f64 - margin {
                break;
            }

            let color = PALETTE[rank % PALETTE.len()];
            svg.push_str(&format!(
                "  <text x=\"{:.0}\" y=\"{:.0}\" font-size=\"{:.0}\" fill=\"{}\" \
                 font-family=\"sans-serif\">{}</text>\n",
                x,
                y,
                size,
                color,
                escape(word)
            ));

            x += width + gap;
            row_peak = row_peak.max(size);
        }

        svg.push_str("</svg>\n");
        svg
    }
}

impl CloudRenderer for SvgCloudRenderer {
    fn render(&self, label: &str, frequencies: &WordFrequency) -> Result<PathBuf, RenderError> {
        if frequencies.is_empty() {
            return Err(RenderError::EmptyCloud {
                label: label.to_string(),
            });
        }

        std::fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(format!("{}.svg", file_stem(label)));
        std::fs::write(&path, self.build_svg(label, frequencies))?;
        Ok(path)
    }
}

/// Linear count-to-size scaling; a uniform cloud gets the maximum size
fn font_size(count: u64, min_count: u64, max_count: u64, cfg: &SvgCloudConfig) -> f64 {
    if max_count == min_count {
        return cfg.max_font_px;
    }
    let t = (count - min_count) as f64 / (max_count - min_count) as f64;
    cfg.min_font_px + t * (cfg.max_font_px - cfg.min_font_px)
}

/// Turn a speaker label into a safe file stem ("TAPPER:" -> "tapper")
fn file_stem(label: &str) -> String {
    let stem: String = label
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect::<String>()
        .to_lowercase();
    if stem.is_empty() { "speaker".to_string() } else { stem }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
