pub mod io;
pub mod models;
pub mod nlp;
pub mod render;
pub mod stages;

pub use io::{read_stopword_file, read_transcript, MachineReport, StatementsReport};
pub use models::{SpeakerSegments, WordFrequency};
pub use nlp::{clean_text, StopwordSet};
pub use render::{CloudRenderer, RenderError, SvgCloudConfig, SvgCloudRenderer};
pub use stages::{
    analyze_statements, execute_render, segment_transcript, RenderConfig, RenderResult,
    SegmentResult, SegmenterConfig,
};
