pub mod downloader;
pub mod speech_recognition;
pub mod transcription;
