pub mod locate;
pub mod parse;
pub mod sync;
pub mod track;

pub use locate::{FALLBACK_LINE_SECS, active_line, line_progress};
pub use parse::parse_track;
pub use sync::{LyricSync, SyncState};
pub use track::{LyricTrack, TimedLine};
