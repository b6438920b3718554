use std::sync::Arc;

use crate::lyrics::track::LyricTrack;

/// Application events riding the flume channel between the loader tasks and
/// the main loop. Each load-related event carries the generation it was
/// issued for so the receiver can drop results of superseded loads.
#[derive(Debug, Clone)]
pub enum Event {
    TrackLoaded(u64, Arc<LyricTrack>),
    TrackUnavailable(u64, String),
}
