use serde::{Deserialize, Serialize};

/// One presentation card parsed out of the page snapshot.
///
/// `video_id` is set only when the card's thumbnail points at a hosted
/// video; cards without one are dropped before transcript capture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Presentation {
    pub title: String,
    pub presentation_type: String,
    pub categories: Vec<String>,
    pub video_id: Option<String>,
    pub time: String,
}

/// A presentation joined with the transcript of its recording. This is the
/// record shape that reaches the output writer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscribedPresentation {
    pub title: String,
    pub presentation_type: String,
    pub categories: Vec<String>,
    pub video_id: String,
    pub time: String,
    pub transcript: String,
}

impl Presentation {
    /// Consume the parsed record and produce the enriched one. Returns
    /// `None` for cards without a video, so callers can't attach a
    /// transcript to a presentation that was never recorded.
    pub fn into_transcribed(self, transcript: String) -> Option<TranscribedPresentation> {
        let video_id = self.video_id?;
        Some(TranscribedPresentation {
            title: self.title,
            presentation_type: self.presentation_type,
            categories: self.categories,
            video_id,
            time: self.time,
            transcript,
        })
    }
}
