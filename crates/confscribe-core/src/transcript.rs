use async_trait::async_trait;
use serde::Deserialize;

use crate::error::{ConfscribeError, Result};

const WATCH_URL: &str = "https://www.youtube.com/watch?v=";

/// Where transcripts come from. Production talks to the video host; tests
/// substitute a canned source.
#[async_trait]
pub trait TranscriptSource {
    /// Fetch the caption track for a video and flatten it into a single
    /// whitespace-normalized string.
    async fn transcript(&self, video_id: &str) -> Result<String>;
}

/// Caption track entry embedded in the watch page player config.
#[derive(Debug, Deserialize)]
struct CaptionTrack {
    #[serde(rename = "baseUrl")]
    base_url: String,
    #[serde(rename = "languageCode")]
    language_code: String,
}

/// Caption payload in the `json3` wire format.
#[derive(Debug, Deserialize)]
struct CaptionPayload {
    #[serde(default)]
    events: Vec<CaptionEvent>,
}

#[derive(Debug, Deserialize)]
struct CaptionEvent {
    #[serde(default)]
    segs: Vec<CaptionFragment>,
}

#[derive(Debug, Deserialize)]
struct CaptionFragment {
    #[serde(default)]
    utf8: String,
}

/// Fetches caption tracks straight from the video host's watch pages.
pub struct YouTubeTranscripts {
    client: reqwest::Client,
    language: String,
}

impl YouTubeTranscripts {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            language: language.into(),
        }
    }
}

#[async_trait]
impl TranscriptSource for YouTubeTranscripts {
    async fn transcript(&self, video_id: &str) -> Result<String> {
        let watch_page = self
            .client
            .get(format!("{WATCH_URL}{video_id}"))
            .header("Accept-Language", "en-US")
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let tracks = caption_tracks(&watch_page, video_id)?;
        let track = pick_track(&tracks, &self.language);

        let payload: CaptionPayload = self
            .client
            .get(format!("{}&fmt=json3", track.base_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(flatten_captions(&payload))
    }
}

/// Pull the `captionTracks` array out of the player config the watch page
/// embeds. A page without the marker, or with an empty array, has no
/// captions published.
fn caption_tracks(watch_page: &str, video_id: &str) -> Result<Vec<CaptionTrack>> {
    const MARKER: &str = "\"captionTracks\":";

    let no_captions = || ConfscribeError::NoCaptions {
        video_id: video_id.to_string(),
    };

    let start = watch_page.find(MARKER).ok_or_else(no_captions)?;
    let tail = &watch_page[start + MARKER.len()..];

    // The array is followed by more player config; deserialize just the
    // array and leave the trailing text unconsumed.
    let mut deserializer = serde_json::Deserializer::from_str(tail);
    let tracks = Vec::<CaptionTrack>::deserialize(&mut deserializer)?;

    if tracks.is_empty() {
        return Err(no_captions());
    }
    Ok(tracks)
}

/// Prefer the requested language; otherwise take the first track listed.
fn pick_track<'a>(tracks: &'a [CaptionTrack], language: &str) -> &'a CaptionTrack {
    tracks
        .iter()
        .find(|track| track.language_code == language)
        .unwrap_or(&tracks[0])
}

/// Concatenate every caption fragment with no separator, then collapse the
/// whitespace runs (including the seams between fragments).
fn flatten_captions(payload: &CaptionPayload) -> String {
    let mut combined = String::new();
    for event in &payload.events {
        for fragment in &event.segs {
            combined.push_str(&fragment.utf8);
        }
    }
    collapse_whitespace(&combined)
}

/// Collapse every run of whitespace to a single space and trim the ends.
/// Idempotent: re-applying it to its own output changes nothing.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
