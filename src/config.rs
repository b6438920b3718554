use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_MUSIC_DIR: &str = "lyrics";
const DEFAULT_TICK_MS: u64 = 33;

/// Runtime configuration, read from the environment (a `.env` file is
/// honored via dotenv in setup).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory scanned for `.lrc` files.
    pub music_dir: PathBuf,
    /// How often the UI re-runs the locator against the clock.
    pub tick_rate: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            music_dir: PathBuf::from(DEFAULT_MUSIC_DIR),
            tick_rate: Duration::from_millis(DEFAULT_TICK_MS),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let music_dir = env::var("LYRIN_MUSIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_MUSIC_DIR));

        let tick_rate = env::var("LYRIN_TICK_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(Duration::from_millis(DEFAULT_TICK_MS));

        Self {
            music_dir,
            tick_rate,
        }
    }
}
