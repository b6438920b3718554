use std::time::Instant;

/// Monotonic playback position for the lyric display. There is no audio
/// pipeline behind it; the clock is the single authority for "current time"
/// and the host drives it with play/pause/seek.
#[derive(Debug, Default)]
pub struct PlaybackClock {
    anchor_secs: f64,
    started_at: Option<Instant>,
}

impl PlaybackClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn play(&mut self) {
        if self.started_at.is_none() {
            self.started_at = Some(Instant::now());
        }
    }

    pub fn pause(&mut self) {
        if let Some(started) = self.started_at.take() {
            self.anchor_secs += started.elapsed().as_secs_f64();
        }
    }

    pub fn toggle(&mut self) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    pub fn is_playing(&self) -> bool {
        self.started_at.is_some()
    }

    /// Jump to an absolute position, keeping the play/pause state.
    pub fn seek_to(&mut self, secs: f64) {
        self.anchor_secs = secs.max(0.0);
        if self.started_at.is_some() {
            self.started_at = Some(Instant::now());
        }
    }

    /// Relative seek, clamped at the start of the track.
    pub fn seek_by(&mut self, delta_secs: f64) {
        let pos = self.position_secs();
        self.seek_to(pos + delta_secs);
    }

    pub fn position_secs(&self) -> f64 {
        match self.started_at {
            Some(started) => self.anchor_secs + started.elapsed().as_secs_f64(),
            None => self.anchor_secs,
        }
    }

    /// Back to zero, paused. Called when a new song is chosen.
    pub fn reset(&mut self) {
        self.anchor_secs = 0.0;
        self.started_at = None;
    }
}
