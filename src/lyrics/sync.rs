use std::sync::Arc;

use tracing::debug;

use super::locate::active_line;
use super::track::{LyricTrack, TimedLine};

/// Where the display currently stands relative to the loaded track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    /// No track loaded.
    Idle,
    /// Track loaded, playback position before the first timestamp.
    BeforeFirstLine,
    /// The line at this index is the one to display.
    ActiveLine(usize),
}

/// Stateful wrapper around the pure locator: owns the current track and
/// remembers the last active index so the host can detect transitions.
/// Driven entirely by `load_track`/`clear` and `on_time_update`.
#[derive(Debug, Default)]
pub struct LyricSync {
    track: Option<Arc<LyricTrack>>,
    index: Option<usize>,
}

impl LyricSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the track wholesale. The remembered index is reset; the next
    /// time update re-evaluates from scratch.
    pub fn load_track(&mut self, track: Arc<LyricTrack>) {
        debug!(lines = track.len(), "lyric track replaced");
        self.track = Some(track);
        self.index = None;
    }

    /// Drop the current track (failed load, playback stopped).
    pub fn clear(&mut self) {
        self.track = None;
        self.index = None;
    }

    /// Re-run the locator for `at`. Returns true when the active index
    /// changed, which is the signal to restart the line-entry animation.
    pub fn on_time_update(&mut self, at: f64) -> bool {
        let Some(track) = &self.track else {
            return false;
        };
        let new_index = active_line(track, at);
        if new_index == self.index {
            return false;
        }
        debug!(from = ?self.index, to = ?new_index, at, "active line changed");
        self.index = new_index;
        true
    }

    pub fn state(&self) -> SyncState {
        match (&self.track, self.index) {
            (None, _) => SyncState::Idle,
            (Some(_), None) => SyncState::BeforeFirstLine,
            (Some(_), Some(i)) => SyncState::ActiveLine(i),
        }
    }

    pub fn track(&self) -> Option<&Arc<LyricTrack>> {
        self.track.as_ref()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.index
    }

    pub fn current_line(&self) -> Option<&TimedLine> {
        self.track.as_ref()?.get(self.index?)
    }
}
