use super::track::LyricTrack;

/// How long the last line of a track stays "in progress" when there is no
/// following timestamp to measure against.
pub const FALLBACK_LINE_SECS: f64 = 3.0;

/// Index of the line whose interval contains `at`, or `None` when the track
/// is empty or `at` precedes the first timestamp.
///
/// The active line is the last line with `time <= at`; intervals are
/// half-open, so a line becomes active exactly at its own timestamp and the
/// final line stays active until the track is replaced.
pub fn active_line(track: &LyricTrack, at: f64) -> Option<usize> {
    if at.is_nan() {
        return None;
    }
    let idx = track.lines().partition_point(|l| l.time <= at);
    if idx == 0 { None } else { Some(idx - 1) }
}

/// Fraction in `[0, 1]` of line `index` already elapsed at `at`.
///
/// The line's duration is the gap to the next line, or `fallback_secs` for
/// the last line. Out-of-range indices yield 0.0; a non-positive duration
/// (duplicate timestamps) yields 1.0 once the line has started.
pub fn line_progress(track: &LyricTrack, index: usize, at: f64, fallback_secs: f64) -> f64 {
    let Some(line) = track.get(index) else {
        return 0.0;
    };
    if at.is_nan() {
        return 0.0;
    }

    let duration = match track.get(index + 1) {
        Some(next) => next.time - line.time,
        None => fallback_secs,
    };
    if duration <= 0.0 {
        return if at >= line.time { 1.0 } else { 0.0 };
    }

    ((at - line.time) / duration).clamp(0.0, 1.0)
}
