use crate::{
    core::{
        config::Config,
        services::{downloader::FileDownloader, transcription::TranscriptionClient},
    },
    errors::MyError,
};
use async_trait::async_trait;
use log::{debug, error, info, warn};

/// The chat side of one incoming voice message.
#[async_trait]
pub trait VoiceChat: Send + Sync {
    /// Exchanges an attachment id for a URL the audio can be fetched from.
    async fn file_url(&self, file_id: &str) -> Result<String, MyError>;

    /// Plain message to the chat the voice came from.
    async fn send_text(&self, text: &str) -> Result<(), MyError>;

    /// Message sent as a reply to the voice message itself.
    async fn reply_text(&self, text: &str) -> Result<(), MyError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailedStage {
    FileLink,
    Download,
    Transcription,
}

impl FailedStage {
    pub fn user_message(self) -> &'static str {
        match self {
            FailedStage::FileLink => "Error getting file link",
            FailedStage::Download => "Error downloading file",
            FailedStage::Transcription => "Error processing transcription",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceOutcome {
    Replied,
    Failed(FailedStage),
}

pub struct SpeechRecognition {
    downloader: FileDownloader,
    transcriber: TranscriptionClient,
}

impl SpeechRecognition {
    pub fn new(downloader: FileDownloader, transcriber: TranscriptionClient) -> Self {
        Self {
            downloader,
            transcriber,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let transcriber = TranscriptionClient::new(config.get_hf_token())
            .with_endpoint(config.get_inference_url());
        info!("Transcribing voice messages with {}", transcriber.endpoint());

        Self::new(FileDownloader::new(config.get_temp_dir()), transcriber)
    }

    /// Runs one voice message through link lookup, download, transcription
    /// and the reply. The downloaded file is gone by the time this returns.
    pub async fn handle_voice<C>(&self, chat: &C, file_id: &str) -> VoiceOutcome
    where
        C: VoiceChat + ?Sized,
    {
        let url = match chat.file_url(file_id).await {
            Ok(url) => url,
            Err(e) => return fail(chat, FailedStage::FileLink, e).await,
        };

        let audio = match self.downloader.download(&url).await {
            Ok(audio) => audio,
            Err(e) => return fail(chat, FailedStage::Download, e).await,
        };

        let text = match self.transcriber.transcribe(audio.path()).await {
            Ok(text) => text,
            Err(e) => return fail(chat, FailedStage::Transcription, e).await,
        };
        info!(
            "Transcribed {} into {} chars",
            audio.path().display(),
            text.chars().count()
        );

        if let Err(e) = chat.reply_text(&text).await {
            warn!("Failed to send transcription reply: {}", e);
        }

        drop(audio);
        VoiceOutcome::Replied
    }
}

async fn fail<C>(chat: &C, stage: FailedStage, err: MyError) -> VoiceOutcome
where
    C: VoiceChat + ?Sized,
{
    error!("Voice message failed at {:?}: {}", stage, err);
    if let Err(e) = chat.send_text(stage.user_message()).await {
        warn!("Failed to notify chat about {:?}: {}", stage, e);
    }
    debug!("Voice message finished with {:?}", stage);
    VoiceOutcome::Failed(stage)
}
