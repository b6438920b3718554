use ratatui::style::Color;

use crate::util::colors;

/// Presentation state the widgets read; the playback truth lives in the
/// clock, sync wrapper and loader.
#[derive(Debug, Clone)]
pub struct UiState {
    pub song_title: Option<String>,
    pub is_loading: bool,
    pub error_message: Option<String>,
    /// Highlight color for the current song.
    pub accent: Color,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            song_title: None,
            is_loading: false,
            error_message: None,
            accent: colors::ACCENT,
        }
    }
}
