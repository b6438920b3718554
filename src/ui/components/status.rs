use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use unicode_width::UnicodeWidthStr;

use crate::ui::state::UiState;
use crate::util::{colors, time::format_clock};

/// One-line status bar: song title, play state and position on the left,
/// key hints on the right.
pub struct StatusBar<'a> {
    state: &'a UiState,
    position_secs: f64,
    playing: bool,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a UiState, position_secs: f64, playing: bool) -> Self {
        Self {
            state,
            position_secs,
            playing,
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let title = self.state.song_title.as_deref().unwrap_or("no song");
        let glyph = if self.playing { "▶" } else { "⏸" };
        let clock = format_clock(self.position_secs.max(0.0) as u64);

        let left = Line::from(vec![
            Span::styled(
                format!(" {glyph} {title} "),
                Style::default()
                    .fg(self.state.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(clock, Style::default().fg(colors::PRIMARY)),
        ]);

        let hints = "space play/pause · n next · ←/→ seek · q quit ";
        buf.set_line(area.x, area.y, &left, area.width);

        let hints_width = UnicodeWidthStr::width(hints) as u16;
        if area.width > hints_width {
            buf.set_stringn(
                area.x + area.width - hints_width,
                area.y,
                hints,
                hints_width as usize,
                Style::default().fg(colors::NEUTRAL),
            );
        }
    }
}
