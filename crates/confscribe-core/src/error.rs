use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfscribeError {
    #[error("Card {index}: no element matching `{selector}`")]
    MissingElement { index: usize, selector: &'static str },

    #[error("Unmapped non-ASCII character {ch:?} at byte {offset}")]
    UnmappedCharacter { ch: char, offset: usize },

    #[error("No caption track published for video {video_id}")]
    NoCaptions { video_id: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, ConfscribeError>;
