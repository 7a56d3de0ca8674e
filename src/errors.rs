use std::io;
use teloxide::RequestError;
use thiserror::Error;
use url::ParseError;

#[derive(Error, Debug)]
pub enum MyError {
    #[error("Teloxide API Error: {0}")]
    Teloxide(#[from] RequestError),

    #[error("Reqwest Error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO Error: {0}")]
    Io(#[from] io::Error),

    #[error("Serde json error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("Failed to parse URL: {0}")]
    UrlParse(#[from] ParseError),

    #[error("Random generator error: {0}")]
    Random(#[from] rand::Error),

    #[error("failed to get transcription")]
    TranscriptionFailed,

    #[error("Application Error: {0}")]
    Other(String),
}

impl From<&str> for MyError {
    fn from(s: &str) -> Self {
        MyError::Other(s.to_string())
    }
}

impl From<String> for MyError {
    fn from(s: String) -> Self {
        MyError::Other(s)
    }
}
