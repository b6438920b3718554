pub mod catalog;
pub mod clock;
pub mod error;
pub mod loader;

pub use catalog::{Catalog, LyricsRef, Song};
pub use clock::PlaybackClock;
pub use error::PlayerError;
pub use loader::TrackLoader;
