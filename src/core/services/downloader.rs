use crate::{errors::MyError, util::temp_file::TempFile};
use log::debug;
use rand::{rngs::OsRng, RngCore};
use reqwest::Client;
use std::path::PathBuf;
use tokio::{fs::File, io::AsyncWriteExt};

pub const DEFAULT_EXTENSION: &str = "wav";

pub struct FileDownloader {
    client: Client,
    temp_dir: PathBuf,
}

impl FileDownloader {
    pub fn new(temp_dir: impl Into<PathBuf>) -> Self {
        Self::with_client(Client::new(), temp_dir)
    }

    pub fn with_client(client: Client, temp_dir: impl Into<PathBuf>) -> Self {
        Self {
            client,
            temp_dir: temp_dir.into(),
        }
    }

    /// Fetches `url` into a fresh file under the temp directory.
    ///
    /// The status code is not checked, whatever body comes back is stored.
    /// The directory has to exist already. Errors never carry the URL, it
    /// may embed a bot token.
    pub async fn download(&self, url: &str) -> Result<TempFile, MyError> {
        let mut response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| e.without_url())?;

        let file_name = format!("{}.{}", random_file_stem()?, file_extension(url));
        let path = self.temp_dir.join(file_name);

        let mut file = File::create(&path).await?;
        let temp_file = TempFile::new(path);

        let mut written = 0usize;
        while let Some(chunk) = response.chunk().await.map_err(|e| e.without_url())? {
            file.write_all(&chunk).await?;
            written += chunk.len();
        }
        file.flush().await?;

        debug!(
            "Downloaded {} bytes into {}",
            written,
            temp_file.path().display()
        );
        Ok(temp_file)
    }
}

/// 16 bytes from the OS generator, hex encoded.
fn random_file_stem() -> Result<String, MyError> {
    let mut bytes = [0u8; 16];
    OsRng.try_fill_bytes(&mut bytes)?;
    Ok(hex::encode(bytes))
}

/// Extension of the last path segment of `url`, or `wav` when it has none.
pub fn file_extension(url: &str) -> &str {
    let segment = url.rsplit('/').next().unwrap_or(url);
    match segment.rsplit_once('.') {
        Some((_, ext)) => ext,
        None => DEFAULT_EXTENSION,
    }
}
