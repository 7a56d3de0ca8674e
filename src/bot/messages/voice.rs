use crate::{
    core::services::speech_recognition::{SpeechRecognition, VoiceChat},
    errors::MyError,
};
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;
use teloxide::{
    prelude::*,
    types::{FileId, ReplyParameters, Voice},
};

/// A voice message as seen from the bot: where it came from and how to answer.
pub struct TelegramVoiceChat<'a> {
    bot: &'a Bot,
    message: &'a Message,
}

impl<'a> TelegramVoiceChat<'a> {
    pub fn new(bot: &'a Bot, message: &'a Message) -> Self {
        Self { bot, message }
    }
}

#[async_trait]
impl VoiceChat for TelegramVoiceChat<'_> {
    async fn file_url(&self, file_id: &str) -> Result<String, MyError> {
        let file = self.bot.get_file(FileId(file_id.to_string())).await?;
        let url = self
            .bot
            .api_url()
            .join(&format!("file/bot{}/{}", self.bot.token(), file.path))?;
        Ok(url.to_string())
    }

    async fn send_text(&self, text: &str) -> Result<(), MyError> {
        self.bot.send_message(self.message.chat.id, text).await?;
        Ok(())
    }

    async fn reply_text(&self, text: &str) -> Result<(), MyError> {
        self.bot
            .send_message(self.message.chat.id, text)
            .reply_parameters(ReplyParameters::new(self.message.id))
            .await?;
        Ok(())
    }
}

pub async fn voice_handler(
    bot: Bot,
    message: Message,
    voice: Voice,
    speech: Arc<SpeechRecognition>,
) -> Result<(), MyError> {
    debug!(
        "Voice message {} in chat {} ({} bytes)",
        message.id, message.chat.id, voice.file.size
    );

    let chat = TelegramVoiceChat::new(&bot, &message);
    let outcome = speech.handle_voice(&chat, &voice.file.id.0).await;
    debug!("Voice message {} handled: {:?}", message.id, outcome);

    Ok(())
}
