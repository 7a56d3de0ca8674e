use crate::{
    bot::{commander::command_handlers, messages::voice::voice_handler},
    core::{config::Config, services::speech_recognition::SpeechRecognition},
    errors::MyError,
    util::enums::Command,
};
use log::{debug, info, warn};
use std::{sync::Arc, time::Duration};
use teloxide::{
    dispatching::{Dispatcher, HandlerExt, MessageFilterExt, UpdateFilterExt, UpdateHandler},
    dptree,
    error_handlers::LoggingErrorHandler,
    prelude::{Message, Requester},
    types::Update,
    update_listeners::Polling,
    utils::command::BotCommands,
};

const POLL_TIMEOUT: Duration = Duration::from_secs(10);

pub fn schema() -> UpdateHandler<MyError> {
    dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(command_handlers),
        )
        .branch(
            Update::filter_message().branch(Message::filter_voice().endpoint(voice_handler)),
        )
}

async fn run_bot(config: Arc<Config>) -> Result<(), MyError> {
    let bot = config.get_bot().clone();

    let me = bot.get_me().await?;
    info!("Bot started successfully as @{}", me.username());

    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        warn!("Failed to register the command menu: {}", e);
    }

    let temp_dir = config.get_temp_dir();
    if !temp_dir.is_dir() {
        warn!(
            "Temp directory {} does not exist, downloads will fail until it is created",
            temp_dir.display()
        );
    }

    let speech = Arc::new(SpeechRecognition::from_config(&config));
    let listener = Polling::builder(bot.clone()).timeout(POLL_TIMEOUT).build();

    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![speech, me])
        .default_handler(|update| async move {
            debug!("Unhandled update: {:?}", update.id);
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "An error has occurred in the dispatcher",
        ))
        .enable_ctrlc_handler()
        .build()
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("An error from the update listener"),
        )
        .await;

    Ok(())
}

pub async fn run() -> Result<(), MyError> {
    let config = Arc::new(Config::new());
    run_bot(config).await
}
