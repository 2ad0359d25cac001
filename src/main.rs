use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use rostrum::{
    analyze_statements, execute_render, read_stopword_file, read_transcript, segment_transcript,
    CloudRenderer, RenderConfig, SegmenterConfig, StopwordSet, SvgCloudRenderer, WordFrequency,
};

/// Words the standard English list misses that carry no topical signal in
/// debate speech; skipped with --no-custom-stopwords
const CUSTOM_STOPWORDS: &[&str] = &[
    "president", "number", "time", "want", "wants", "lot", "look", "took", "come", "times",
    "could", "went", "debate", "thank", "done", "like", "going", "said", "us", "one", "back",
    "seen", "well", "day", "ago", "make", "sure", "never", "think", "know", "would", "fact",
    "things", "coming", "made", "many", "get", "got", "put", "take", "thing", "see", "three",
    "place", "wanted", "situation", "good", "every", "much", "say", "says", "guy", "even",
    "across", "year", "brought", "whole", "able", "way", "ever", "right", "go", "still", "half",
];

#[derive(Parser)]
#[command(name = "rostrum")]
#[command(author, version, about = "Speaker-turn word-frequency analysis for transcripts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Segment a transcript, export cleaned statements, and render word clouds
    Process {
        /// Input transcript file (plain text)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for cleaned statements (text)
        #[arg(short, long)]
        output: PathBuf,

        /// Output file for the machine-readable report (JSON)
        #[arg(long)]
        machine_output: Option<PathBuf>,

        /// Directory for per-speaker word-cloud images
        #[arg(long)]
        cloud_dir: Option<PathBuf>,

        /// Speaker labels in priority order, comma-separated
        #[arg(long, value_delimiter = ',', default_value = "TRUMP:,BIDEN:,TAPPER:,BASH:")]
        speakers: Vec<String>,

        /// File of additional stopwords, one per line
        #[arg(long)]
        extra_stopwords: Option<PathBuf>,

        /// Use only the standard English stopword list
        #[arg(long)]
        no_custom_stopwords: bool,

        /// How many top words to report per speaker
        #[arg(long, default_value = "5")]
        top_words: usize,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Inspect per-speaker statistics without writing any files
    Analyze {
        /// Input transcript file (plain text)
        #[arg(short, long)]
        input: PathBuf,

        /// Speaker labels in priority order, comma-separated
        #[arg(long, value_delimiter = ',', default_value = "TRUMP:,BIDEN:,TAPPER:,BASH:")]
        speakers: Vec<String>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Process {
            input,
            output,
            machine_output,
            cloud_dir,
            speakers,
            extra_stopwords,
            no_custom_stopwords,
            top_words,
            verbose,
        } => {
            setup_logging(verbose);
            process_transcript(
                input,
                output,
                machine_output,
                cloud_dir,
                speakers,
                extra_stopwords,
                no_custom_stopwords,
                top_words,
            )
        }
        Commands::Analyze {
            input,
            speakers,
            verbose,
        } => {
            setup_logging(verbose);
            analyze_transcript(input, speakers)
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn build_stopwords(
    extra_stopwords: Option<&PathBuf>,
    no_custom_stopwords: bool,
) -> Result<StopwordSet> {
    let mut stopwords = if no_custom_stopwords {
        StopwordSet::english()
    } else {
        StopwordSet::english_with(CUSTOM_STOPWORDS.iter().copied())
    };

    if let Some(path) = extra_stopwords {
        let words = read_stopword_file(path).context("Failed to load extra stopwords")?;
        info!("Loaded {} extra stopwords from {:?}", words.len(), path);
        stopwords.extend(words);
    }

    Ok(stopwords)
}

fn process_transcript(
    input: PathBuf,
    output: PathBuf,
    machine_output: Option<PathBuf>,
    cloud_dir: Option<PathBuf>,
    speakers: Vec<String>,
    extra_stopwords: Option<PathBuf>,
    no_custom_stopwords: bool,
    top_words: usize,
) -> Result<()> {
    info!("Loading transcript from {:?}", input);
    let transcript = read_transcript(&input)?;

    let stopwords = build_stopwords(extra_stopwords.as_ref(), no_custom_stopwords)?;
    let config = SegmenterConfig::new(speakers, stopwords);

    info!("Segmenting by {} speaker labels...", config.speaker_labels.len());
    let result = segment_transcript(&transcript, &config);
    info!(
        "Found {} speaker turns ({} preamble lines dropped)",
        result.label_matches, result.dropped_lines
    );

    let frequencies: Vec<WordFrequency> = result
        .segments
        .iter()
        .map(|entry| analyze_statements(&entry.statements))
        .collect();

    for (entry, freq) in result.segments.iter().zip(frequencies.iter()) {
        println!("Word Frequencies for {}", entry.label);
        for (word, count) in freq.top(top_words) {
            println!("{}: {}", word, count);
        }
        println!();
    }

    let renderer = cloud_dir.as_deref().map(SvgCloudRenderer::new);
    let render_config = RenderConfig { top_words };
    let render_result = execute_render(
        &result.segments,
        &frequencies,
        &output,
        machine_output.as_deref(),
        renderer.as_ref().map(|r| r as &dyn CloudRenderer),
        &render_config,
    )?;

    info!(
        "Complete: {} statements, {} clouds written",
        result.segments.total_statements(),
        render_result.cloud_paths.len()
    );

    Ok(())
}

fn analyze_transcript(input: PathBuf, speakers: Vec<String>) -> Result<()> {
    info!("Analyzing transcript from {:?}", input);
    let transcript = read_transcript(&input)?;

    let stopwords = StopwordSet::english_with(CUSTOM_STOPWORDS.iter().copied());
    let config = SegmenterConfig::new(speakers, stopwords);
    let result = segment_transcript(&transcript, &config);

    println!("Transcript Analysis");
    println!("==================");
    println!("Speaker turns: {}", result.label_matches);
    println!("Preamble lines dropped: {}", result.dropped_lines);
    println!();

    println!("Speaker Statistics");
    println!("------------------");
    for entry in result.segments.iter() {
        let freq = analyze_statements(&entry.statements);
        let top: Vec<String> = freq
            .top(5)
            .into_iter()
            .map(|(word, count)| format!("{} ({})", word, count))
            .collect();

        println!(
            "{} {} statements, {} words, {} distinct; top: {}",
            entry.label,
            entry.statements.len(),
            freq.total(),
            freq.len(),
            if top.is_empty() { "-".to_string() } else { top.join(", ") }
        );
    }

    Ok(())
}
