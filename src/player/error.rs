use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlayerError {
    #[error("failed to read music directory {path}: {source}")]
    CatalogIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no .lrc files found in {0} (set LYRIN_MUSIC_DIR)")]
    EmptyCatalog(PathBuf),
}
