use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use arc_swap::ArcSwapOption;
use flume::Sender;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::event::events::Event;
use crate::lyrics::parse::parse_track;
use crate::lyrics::track::LyricTrack;
use crate::player::catalog::Song;
use crate::source::{SourceError, TrackSource};

/// One-shot fetch, parse, replace. Each `load` supersedes the previous one:
/// the in-flight task is aborted and, should its result still arrive, the
/// generation check in `commit` discards it.
pub struct TrackLoader {
    source: Arc<dyn TrackSource>,
    shared: Arc<LoaderShared>,
    task: Option<JoinHandle<()>>,
}

struct LoaderShared {
    current: ArcSwapOption<LyricTrack>,
    generation: AtomicU64,
    event_tx: Sender<Event>,
}

impl LoaderShared {
    /// Apply a load result if `generation` is still the latest. Returns
    /// whether the result was applied.
    fn commit(&self, generation: u64, result: Result<Arc<LyricTrack>, SourceError>) -> bool {
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(generation, "discarding superseded lyrics load");
            return false;
        }

        match result {
            Ok(track) => {
                self.current.store(Some(track.clone()));
                let _ = self.event_tx.send(Event::TrackLoaded(generation, track));
            }
            Err(e) => {
                warn!(error = %e, "lyrics load failed");
                self.current.store(None);
                let _ = self
                    .event_tx
                    .send(Event::TrackUnavailable(generation, e.to_string()));
            }
        }
        true
    }
}

impl TrackLoader {
    pub fn new(source: Arc<dyn TrackSource>, event_tx: Sender<Event>) -> Self {
        Self {
            source,
            shared: Arc::new(LoaderShared {
                current: ArcSwapOption::empty(),
                generation: AtomicU64::new(0),
                event_tx,
            }),
            task: None,
        }
    }

    /// Start loading lyrics for `song`, superseding any load in flight.
    /// Returns the generation of this load.
    pub fn load(&mut self, song: &Song) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(task) = self.task.take() {
            task.abort();
        }

        debug!(song = %song.title, generation, "loading lyrics");
        let source = self.source.clone();
        let shared = self.shared.clone();
        let song = song.clone();

        self.task = Some(tokio::spawn(async move {
            let result = source
                .fetch(&song)
                .await
                .map(|text| Arc::new(parse_track(&text)));
            shared.commit(generation, result);
        }));

        generation
    }

    /// The generation of the most recent `load`. Events carrying an older
    /// generation belong to a superseded load.
    pub fn generation(&self) -> u64 {
        self.shared.generation.load(Ordering::SeqCst)
    }

    /// Snapshot of the currently loaded track, if any. The swap in `commit`
    /// is atomic; readers never observe a half-replaced track.
    pub fn current(&self) -> Option<Arc<LyricTrack>> {
        self.shared.current.load_full()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::catalog::LyricsRef;
    use async_trait::async_trait;
    use std::time::Duration;

    struct FakeSource {
        delay: Duration,
        payload: Result<&'static str, ()>,
    }

    #[async_trait]
    impl TrackSource for FakeSource {
        async fn fetch(&self, _song: &Song) -> Result<String, SourceError> {
            tokio::time::sleep(self.delay).await;
            match self.payload {
                Ok(text) => Ok(text.to_string()),
                Err(()) => Err(SourceError::Unsupported),
            }
        }
    }

    fn song(title: &str) -> Song {
        Song {
            title: title.into(),
            lyrics: LyricsRef::Path(format!("{title}.lrc").into()),
        }
    }

    #[tokio::test]
    async fn load_commits_the_parsed_track() {
        let (tx, rx) = flume::unbounded();
        let source = Arc::new(FakeSource {
            delay: Duration::ZERO,
            payload: Ok("[00:01.00]hello\n"),
        });
        let mut loader = TrackLoader::new(source, tx);

        let generation = loader.load(&song("a"));
        match rx.recv_async().await.unwrap() {
            Event::TrackLoaded(g, track) => {
                assert_eq!(g, generation);
                assert_eq!(track.len(), 1);
            }
            other => panic!("unexpected event: {other:?}"),
        }
        assert_eq!(loader.current().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn failed_load_reports_unavailable_and_clears_the_track() {
        let (tx, rx) = flume::unbounded();
        let mut loader = TrackLoader::new(
            Arc::new(FakeSource {
                delay: Duration::ZERO,
                payload: Ok("[00:01.00]hello\n"),
            }),
            tx.clone(),
        );
        loader.load(&song("a"));
        rx.recv_async().await.unwrap();
        assert!(loader.current().is_some());

        let mut loader = TrackLoader {
            source: Arc::new(FakeSource {
                delay: Duration::ZERO,
                payload: Err(()),
            }),
            shared: loader.shared,
            task: None,
        };
        let generation = loader.load(&song("b"));
        match rx.recv_async().await.unwrap() {
            Event::TrackUnavailable(g, _) => assert_eq!(g, generation),
            other => panic!("unexpected event: {other:?}"),
        }
        assert!(loader.current().is_none());
    }

    #[tokio::test]
    async fn a_newer_load_supersedes_the_older_one() {
        let (tx, rx) = flume::unbounded();
        let slow = Arc::new(FakeSource {
            delay: Duration::from_millis(80),
            payload: Ok("[00:01.00]slow song\n"),
        });
        let fast = Arc::new(FakeSource {
            delay: Duration::ZERO,
            payload: Ok("[00:01.00]fast song\n[00:02.00]two lines\n"),
        });

        let mut loader = TrackLoader::new(slow, tx.clone());
        let first = loader.load(&song("slow"));

        let mut loader = TrackLoader {
            source: fast,
            shared: loader.shared,
            task: loader.task,
        };
        let second = loader.load(&song("fast"));
        assert!(second > first);

        match rx.recv_async().await.unwrap() {
            Event::TrackLoaded(g, track) => {
                assert_eq!(g, second);
                assert_eq!(track.len(), 2);
            }
            other => panic!("unexpected event: {other:?}"),
        }

        // The superseded load must never surface, even after its delay.
        tokio::time::sleep(Duration::from_millis(120)).await;
        assert!(rx.try_recv().is_err());
        assert_eq!(loader.current().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn commit_rejects_stale_generations() {
        let (tx, rx) = flume::unbounded();
        let shared = LoaderShared {
            current: ArcSwapOption::empty(),
            generation: AtomicU64::new(2),
            event_tx: tx,
        };

        let stale = Arc::new(LyricTrack::default());
        assert!(!shared.commit(1, Ok(stale)));
        assert!(shared.current.load().is_none());
        assert!(rx.try_recv().is_err());

        assert!(shared.commit(2, Ok(Arc::new(LyricTrack::default()))));
        assert!(matches!(
            rx.try_recv(),
            Ok(Event::TrackLoaded(2, _))
        ));
    }
}
