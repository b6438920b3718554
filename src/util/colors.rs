use ratatui::style::Color;

pub const PRIMARY: Color = Color::from_u32(0x00ff6b9d);
pub const NEUTRAL: Color = Color::from_u32(0x00585858);
pub const BACKGROUND: Color = Color::from_u32(0x00101010);
pub const ACCENT: Color = Color::from_u32(0x00ffb86c);

/// Per-song accents; a fresh one is drawn whenever a new song starts.
pub const SONG_ACCENTS: [Color; 6] = [
    Color::from_u32(0x00ff5e62),
    Color::from_u32(0x00ff9966),
    Color::from_u32(0x00a8ff78),
    Color::from_u32(0x0078ffd6),
    Color::from_u32(0x0033b5e5),
    Color::from_u32(0x008e54e9),
];
