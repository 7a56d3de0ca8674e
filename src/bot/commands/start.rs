use crate::errors::MyError;
use teloxide::prelude::*;

pub const GREETING: &str = "Hello, I am a transcribator3000";

pub async fn start_handler(bot: Bot, message: Message) -> Result<(), MyError> {
    bot.send_message(message.chat.id, GREETING).await?;
    Ok(())
}
