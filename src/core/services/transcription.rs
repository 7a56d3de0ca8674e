use crate::{core::config::DEFAULT_INFERENCE_URL, errors::MyError};
use log::debug;
use reqwest::{header::CONTENT_TYPE, Client, StatusCode};
use serde::Deserialize;
use std::path::Path;

// Sent for every upload, whatever the real encoding of the file is.
pub const AUDIO_CONTENT_TYPE: &str = "audio/wav";

#[derive(Debug, Deserialize)]
pub struct TranscriptionResponse {
    #[serde(default)]
    pub text: String,
}

/// Client for a hosted speech-to-text endpoint that takes raw audio as the
/// request body and answers with `{"text": "..."}`.
pub struct TranscriptionClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl TranscriptionClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: DEFAULT_INFERENCE_URL.to_string(),
            token: token.into(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn transcribe(&self, file_path: &Path) -> Result<String, MyError> {
        let data = tokio::fs::read(file_path).await?;
        debug!(
            "Uploading {} bytes from {} for transcription",
            data.len(),
            file_path.display()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .header(CONTENT_TYPE, AUDIO_CONTENT_TYPE)
            .body(data)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            debug!("Inference endpoint answered {}", response.status());
            return Err(MyError::TranscriptionFailed);
        }

        let body = response.bytes().await?;
        let result: TranscriptionResponse = serde_json::from_slice(&body)?;
        Ok(result.text)
    }
}
