use async_trait::async_trait;
use tracing::debug;

use crate::player::catalog::{LyricsRef, Song};

use super::{SourceError, TrackSource};

/// Fetches LRC payloads over HTTP. One request per load; a non-success
/// status is an error, there are no retries.
#[derive(Debug, Clone, Default)]
pub struct HttpSource {
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TrackSource for HttpSource {
    async fn fetch(&self, song: &Song) -> Result<String, SourceError> {
        let LyricsRef::Url(url) = &song.lyrics else {
            return Err(SourceError::Unsupported);
        };
        debug!(%url, "fetching lyrics");
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[tokio::test]
    async fn rejects_path_refs() {
        let song = Song {
            title: "local".into(),
            lyrics: LyricsRef::Path(PathBuf::from("song.lrc")),
        };
        assert!(matches!(
            HttpSource::new().fetch(&song).await,
            Err(SourceError::Unsupported)
        ));
    }
}
