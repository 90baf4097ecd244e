use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use console::style;

use confscribe_core::{OutputTarget, RunOptions, YouTubeTranscripts, pipeline};

/// Output layout for the enriched records.
#[derive(Clone, Default, ValueEnum)]
enum OutputFormat {
    /// One JSON record per line in a single file, written only after every
    /// transcript fetch has succeeded
    #[default]
    Ndjson,
    /// One pretty-printed JSON file per presentation, written as each
    /// transcript arrives
    Files,
}

#[derive(Parser)]
#[command(name = "confscribe")]
#[command(
    about = "Scrape a conference page snapshot and capture the caption transcript of every recorded session"
)]
struct Cli {
    /// Page snapshot to scrape
    #[arg(short, long, default_value = "google-next.html")]
    input: PathBuf,

    /// Output layout
    #[arg(short, long, value_enum, default_value = "ndjson")]
    format: OutputFormat,

    /// Output file (ndjson) or directory (files). Defaults to
    /// transcripts.ndjson or transcripts/ depending on the layout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Preferred caption language
    #[arg(short, long, default_value = "en")]
    lang: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = match cli.format {
        OutputFormat::Ndjson => OutputTarget::Ndjson(
            cli.output.unwrap_or_else(|| PathBuf::from("transcripts.ndjson")),
        ),
        OutputFormat::Files => {
            OutputTarget::Directory(cli.output.unwrap_or_else(|| PathBuf::from("transcripts")))
        }
    };
    let options = RunOptions {
        input: cli.input,
        output,
    };

    println!(
        "\n{}  {}\n",
        style("confscribe").cyan().bold(),
        style("Session Transcript Scraper").dim()
    );

    let source = YouTubeTranscripts::new(cli.lang);
    let summary = pipeline::run(&source, &options).await?;

    let saved = match &options.output {
        OutputTarget::Ndjson(path) => path,
        OutputTarget::Directory(dir) => dir,
    };
    println!(
        "\n{} {} cards parsed, {} without video, {} transcripts written",
        style("✓").green().bold(),
        summary.cards,
        summary.skipped,
        summary.written
    );
    println!(
        "{} {}\n",
        style("Saved:").dim(),
        style(saved.display()).cyan()
    );

    Ok(())
}
