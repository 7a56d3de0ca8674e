use log::warn;
use std::path::{Path, PathBuf};
use teloxide::prelude::*;

pub const DEFAULT_TEMP_DIR: &str = "./temp";
pub const DEFAULT_INFERENCE_URL: &str =
    "https://api-inference.huggingface.co/models/openai/whisper-large-v3-turbo";

#[derive(Clone)]
pub struct Config {
    bot: Bot,
    hf_token: String,
    temp_dir: PathBuf,
    inference_url: String,
}

impl Config {
    pub fn new() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Missing tokens are not fatal,
    /// they surface later as authentication errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let telegram_token = lookup("TELEGRAM_TOKEN").unwrap_or_else(|| {
            warn!("TELEGRAM_TOKEN is not set");
            String::new()
        });
        let hf_token = lookup("HF_TOKEN").unwrap_or_else(|| {
            warn!("HF_TOKEN is not set");
            String::new()
        });

        let temp_dir = lookup("TEMP_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMP_DIR));

        let inference_url = lookup("INFERENCE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_INFERENCE_URL.to_string());

        Config {
            bot: Bot::new(telegram_token),
            hf_token,
            temp_dir,
            inference_url,
        }
    }

    pub fn get_bot(&self) -> &Bot {
        &self.bot
    }

    pub fn get_hf_token(&self) -> &str {
        &self.hf_token
    }

    pub fn get_temp_dir(&self) -> &Path {
        &self.temp_dir
    }

    pub fn get_inference_url(&self) -> &str {
        &self.inference_url
    }
}
