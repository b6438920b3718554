pub mod fs;
pub mod http;

use async_trait::async_trait;
use thiserror::Error;

use crate::player::catalog::{LyricsRef, Song};

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("failed to read lyrics file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to fetch lyrics: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unsupported lyrics reference for this source")]
    Unsupported,
}

/// Produces the raw LRC payload for a song. The parser never sees a failed
/// fetch; errors surface to the player as "track unavailable".
#[async_trait]
pub trait TrackSource: Send + Sync {
    async fn fetch(&self, song: &Song) -> Result<String, SourceError>;
}

/// Dispatches to the filesystem or HTTP source based on the song's
/// lyrics reference.
#[derive(Debug, Default)]
pub struct AutoSource {
    fs: fs::FsSource,
    http: http::HttpSource,
}

impl AutoSource {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TrackSource for AutoSource {
    async fn fetch(&self, song: &Song) -> Result<String, SourceError> {
        match &song.lyrics {
            LyricsRef::Path(_) => self.fs.fetch(song).await,
            LyricsRef::Url(_) => self.http.fetch(song).await,
        }
    }
}
