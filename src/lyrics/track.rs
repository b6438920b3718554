use std::cmp::Ordering;

/// One timestamped lyric line. `time` is seconds from track start.
#[derive(Debug, Clone, PartialEq)]
pub struct TimedLine {
    pub time: f64,
    pub text: String,
}

impl TimedLine {
    pub fn new(time: f64, text: impl Into<String>) -> Self {
        Self {
            time,
            text: text.into(),
        }
    }
}

/// Immutable, time-ordered sequence of lyric lines. Replaced wholesale when
/// a new song loads, never mutated in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LyricTrack {
    lines: Vec<TimedLine>,
}

impl LyricTrack {
    /// Build a track from arbitrary lines: lines with a NaN time are dropped,
    /// negative times are clamped to 0, and the result is stably sorted so
    /// equal timestamps keep their source order.
    pub fn from_lines(lines: Vec<TimedLine>) -> Self {
        let mut lines: Vec<TimedLine> = lines
            .into_iter()
            .filter_map(|mut l| {
                if l.time.is_nan() {
                    return None;
                }
                if l.time < 0.0 {
                    l.time = 0.0;
                }
                Some(l)
            })
            .collect();

        // Vec::sort_by is stable.
        lines.sort_by(|a, b| a.time.partial_cmp(&b.time).unwrap_or(Ordering::Equal));

        Self { lines }
    }

    pub fn lines(&self) -> &[TimedLine] {
        &self.lines
    }

    pub fn get(&self, index: usize) -> Option<&TimedLine> {
        self.lines.get(index)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
