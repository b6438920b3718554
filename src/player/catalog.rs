use std::path::{Path, PathBuf};

use rand::Rng;
use tracing::info;

use super::error::PlayerError;

/// Where a song's lyrics come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LyricsRef {
    Path(PathBuf),
    Url(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub title: String,
    pub lyrics: LyricsRef,
}

/// The songs available to play, plus which one is current. Selection is
/// random but never repeats the current song while more than one exists.
#[derive(Debug, Default)]
pub struct Catalog {
    songs: Vec<Song>,
    current: Option<usize>,
}

impl Catalog {
    pub fn from_songs(songs: Vec<Song>) -> Self {
        Self {
            songs,
            current: None,
        }
    }

    /// Build a catalog from the `.lrc` files directly under `dir`, sorted by
    /// title. Subdirectories are not descended into.
    pub fn scan(dir: &Path) -> Result<Self, PlayerError> {
        let entries = std::fs::read_dir(dir).map_err(|source| PlayerError::CatalogIo {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut songs = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("lrc") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            songs.push(Song {
                title: stem.to_string(),
                lyrics: LyricsRef::Path(path),
            });
        }
        songs.sort_by(|a, b| a.title.cmp(&b.title));

        info!(dir = %dir.display(), count = songs.len(), "scanned music directory");
        Ok(Self::from_songs(songs))
    }

    /// Pick a random song and make it current. Returns `None` only for an
    /// empty catalog.
    pub fn pick_random<R: Rng>(&mut self, rng: &mut R) -> Option<usize> {
        if self.songs.is_empty() {
            return None;
        }

        let mut index = rng.random_range(0..self.songs.len());
        while Some(index) == self.current && self.songs.len() > 1 {
            index = rng.random_range(0..self.songs.len());
        }

        self.current = Some(index);
        Some(index)
    }

    pub fn current(&self) -> Option<&Song> {
        self.songs.get(self.current?)
    }

    pub fn get(&self, index: usize) -> Option<&Song> {
        self.songs.get(index)
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn songs(n: usize) -> Vec<Song> {
        (0..n)
            .map(|i| Song {
                title: format!("song {i}"),
                lyrics: LyricsRef::Path(PathBuf::from(format!("song-{i}.lrc"))),
            })
            .collect()
    }

    #[test]
    fn empty_catalog_picks_nothing() {
        let mut catalog = Catalog::default();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(catalog.pick_random(&mut rng), None);
        assert!(catalog.current().is_none());
    }

    #[test]
    fn single_song_repeats() {
        let mut catalog = Catalog::from_songs(songs(1));
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(catalog.pick_random(&mut rng), Some(0));
        assert_eq!(catalog.pick_random(&mut rng), Some(0));
    }

    #[test]
    fn never_repeats_the_current_song() {
        let mut catalog = Catalog::from_songs(songs(3));
        let mut rng = StdRng::seed_from_u64(42);

        let mut previous = catalog.pick_random(&mut rng);
        for _ in 0..100 {
            let picked = catalog.pick_random(&mut rng);
            assert!(picked.is_some());
            assert_ne!(picked, previous);
            previous = picked;
        }
    }

    #[test]
    fn current_follows_the_pick() {
        let mut catalog = Catalog::from_songs(songs(5));
        let mut rng = StdRng::seed_from_u64(7);
        let index = catalog.pick_random(&mut rng).unwrap();
        assert_eq!(catalog.current(), catalog.get(index));
    }
}
