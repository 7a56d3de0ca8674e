use crate::{bot::commands::start::start_handler, errors::MyError, util::enums::Command};
use teloxide::{prelude::Message, Bot};

pub async fn command_handlers(bot: Bot, message: Message, cmd: Command) -> Result<(), MyError> {
    match cmd {
        Command::Start => start_handler(bot, message).await,
    }
}
