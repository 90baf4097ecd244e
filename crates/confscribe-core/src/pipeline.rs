use std::path::PathBuf;

use tokio::fs;

use crate::{
    error::Result,
    extract::extract_presentations,
    output::{write_ndjson, write_presentation_file},
    sanitize::sanitize_text,
    transcript::TranscriptSource,
    types::Presentation,
};

/// Where enriched records end up.
#[derive(Debug, Clone)]
pub enum OutputTarget {
    /// All records in one newline-delimited JSON file, written only after
    /// the last fetch succeeds (all-or-nothing).
    Ndjson(PathBuf),
    /// One JSON document per record, written as soon as its fetch succeeds
    /// (a later failure leaves the earlier files in place).
    Directory(PathBuf),
}

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub input: PathBuf,
    pub output: OutputTarget,
}

/// Outcome counters for a completed run.
#[derive(Debug)]
pub struct RunSummary {
    /// Cards parsed out of the snapshot.
    pub cards: usize,
    /// Cards dropped because their thumbnail named no hosted video.
    pub skipped: usize,
    /// Enriched records handed to the writer.
    pub written: usize,
}

/// Full batch run: load the snapshot, sanitize, extract, then capture a
/// transcript for every recorded presentation.
pub async fn run(source: &impl TranscriptSource, options: &RunOptions) -> Result<RunSummary> {
    let raw = fs::read_to_string(&options.input).await?;
    let presentations = extract_presentations(&sanitize_text(&raw)?)?;
    collect_transcripts(source, presentations, &options.output).await
}

/// Walk the parsed records in document order, fetch a transcript for each
/// one that has a video, and hand the enriched records to the writer. The
/// first fetch failure aborts the remaining loop.
pub async fn collect_transcripts(
    source: &impl TranscriptSource,
    presentations: Vec<Presentation>,
    output: &OutputTarget,
) -> Result<RunSummary> {
    let cards = presentations.len();
    let mut skipped = 0;
    let mut records = Vec::new();

    if let OutputTarget::Directory(dir) = output {
        fs::create_dir_all(dir).await?;
    }

    for presentation in presentations {
        let Some(video_id) = presentation.video_id.as_deref() else {
            skipped += 1;
            continue;
        };

        // Operator-visible progress, one line per fetch.
        println!("{}", presentation.title);
        let transcript = source.transcript(video_id).await?;

        // Presence of the video id was checked above.
        let Some(record) = presentation.into_transcribed(transcript) else {
            continue;
        };

        if let OutputTarget::Directory(dir) = output {
            write_presentation_file(&record, dir).await?;
        }
        records.push(record);
    }

    if let OutputTarget::Ndjson(path) = output {
        write_ndjson(&records, path).await?;
    }

    Ok(RunSummary {
        cards,
        skipped,
        written: records.len(),
    })
}
