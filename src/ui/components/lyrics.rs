use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::lyrics::locate::{FALLBACK_LINE_SECS, line_progress};
use crate::lyrics::sync::LyricSync;
use crate::ui::state::UiState;
use crate::util::colors;

/// Previous, current and next line centered around the middle row, with the
/// current line colored left-to-right as it elapses.
pub struct LyricsWidget<'a> {
    sync: &'a LyricSync,
    position: f64,
    state: &'a UiState,
}

impl<'a> LyricsWidget<'a> {
    pub fn new(sync: &'a LyricSync, position: f64, state: &'a UiState) -> Self {
        Self {
            sync,
            position,
            state,
        }
    }

    fn hint(&self) -> Option<&str> {
        if self.state.is_loading {
            Some("loading lyrics...")
        } else if self.state.error_message.is_some() {
            Some("lyrics unavailable")
        } else if self.sync.track().is_none() {
            Some("no lyrics loaded")
        } else if self.sync.track().is_some_and(|t| t.is_empty()) {
            Some("no synced lyrics in this file")
        } else {
            None
        }
    }
}

// Split so the left part occupies at most `cols` terminal columns, never
// cutting a char in half.
fn split_at_width(text: &str, cols: usize) -> (&str, &str) {
    let mut used = 0;
    for (offset, ch) in text.char_indices() {
        let next = used + ch.width().unwrap_or(0);
        if next > cols {
            return text.split_at(offset);
        }
        used = next;
    }
    (text, "")
}

fn centered_x(inner: Rect, line: &str) -> u16 {
    inner.x + (inner.width.saturating_sub(UnicodeWidthStr::width(line) as u16)) / 2
}

impl Widget for LyricsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };
        if inner.width == 0 || inner.height == 0 {
            return;
        }
        let center_row = inner.y + inner.height / 2;

        if let Some(hint) = self.hint() {
            let x = centered_x(inner, hint);
            buf.set_stringn(
                x,
                center_row,
                hint,
                inner.width as usize,
                Style::default().fg(colors::NEUTRAL),
            );
            return;
        }

        let Some(track) = self.sync.track() else {
            return;
        };

        let Some(index) = self.sync.current_index() else {
            // Before the first timestamp: tease the opening line below the
            // center marker.
            let marker = "- - -";
            buf.set_stringn(
                centered_x(inner, marker),
                center_row,
                marker,
                inner.width as usize,
                Style::default().fg(colors::NEUTRAL),
            );
            if let Some(first) = track.get(0) {
                let y = center_row.saturating_add(1);
                if y < inner.y + inner.height {
                    buf.set_stringn(
                        centered_x(inner, &first.text),
                        y,
                        &first.text,
                        inner.width as usize,
                        Style::default().fg(colors::NEUTRAL),
                    );
                }
            }
            return;
        };

        if index > 0 {
            if let Some(prev) = track.get(index - 1) {
                let y = center_row.saturating_sub(1);
                if y >= inner.y {
                    buf.set_stringn(
                        centered_x(inner, &prev.text),
                        y,
                        &prev.text,
                        inner.width as usize,
                        Style::default().fg(colors::NEUTRAL),
                    );
                }
            }
        }

        if let Some(current) = track.get(index) {
            let frac = line_progress(track, index, self.position, FALLBACK_LINE_SECS);
            let width = UnicodeWidthStr::width(current.text.as_str());
            let elapsed_cols = (frac * width as f64).round() as usize;
            let (done, rest) = split_at_width(&current.text, elapsed_cols);

            let x = centered_x(inner, &current.text);
            buf.set_stringn(
                x,
                center_row,
                done,
                inner.width as usize,
                Style::default()
                    .fg(self.state.accent)
                    .add_modifier(Modifier::BOLD),
            );
            buf.set_stringn(
                x + UnicodeWidthStr::width(done) as u16,
                center_row,
                rest,
                inner.width as usize,
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            );
        }

        if let Some(next) = track.get(index + 1) {
            let y = center_row.saturating_add(1);
            if y < inner.y + inner.height {
                buf.set_stringn(
                    centered_x(inner, &next.text),
                    y,
                    &next.text,
                    inner.width as usize,
                    Style::default().fg(colors::NEUTRAL),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_respects_char_boundaries() {
        assert_eq!(split_at_width("hello", 0), ("", "hello"));
        assert_eq!(split_at_width("hello", 2), ("he", "llo"));
        assert_eq!(split_at_width("hello", 99), ("hello", ""));
    }

    #[test]
    fn split_never_halves_a_wide_char() {
        // CJK chars are two columns wide; an odd budget leaves the char on
        // the right side.
        assert_eq!(split_at_width("你好", 1), ("", "你好"));
        assert_eq!(split_at_width("你好", 2), ("你", "好"));
        assert_eq!(split_at_width("你好", 3), ("你", "好"));
        assert_eq!(split_at_width("你好", 4), ("你好", ""));
    }
}
