//! Confscribe Core Library
//!
//! Scrapes presentation metadata out of a conference-site snapshot and joins
//! every recorded session with the caption transcript of its video.

pub mod error;
pub mod extract;
pub mod output;
pub mod pipeline;
pub mod sanitize;
pub mod transcript;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{ConfscribeError, Result};
pub use extract::extract_presentations;
pub use output::{file_stem, write_ndjson, write_presentation_file};
pub use pipeline::{OutputTarget, RunOptions, RunSummary, run};
pub use sanitize::sanitize_text;
pub use transcript::{TranscriptSource, YouTubeTranscripts, collapse_whitespace};
pub use types::{Presentation, TranscribedPresentation};
