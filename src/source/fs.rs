use async_trait::async_trait;
use tracing::debug;

use crate::player::catalog::{LyricsRef, Song};

use super::{SourceError, TrackSource};

/// Reads LRC payloads from local files.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

#[async_trait]
impl TrackSource for FsSource {
    async fn fetch(&self, song: &Song) -> Result<String, SourceError> {
        let LyricsRef::Path(path) = &song.lyrics else {
            return Err(SourceError::Unsupported);
        };
        debug!(path = %path.display(), "reading lyrics file");
        Ok(tokio::fs::read_to_string(path).await?)
    }
}
