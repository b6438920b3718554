use std::sync::Arc;

use flume::{Receiver, Sender};
use rand::Rng;
use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Constraint, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use tracing::info;

use crate::{
    config::Config,
    event::events::Event,
    lyrics::sync::LyricSync,
    player::{catalog::Catalog, clock::PlaybackClock, error::PlayerError, loader::TrackLoader},
    source::AutoSource,
    util::colors,
};

use super::{
    components::{lyrics::LyricsWidget, status::StatusBar},
    state::UiState,
    tui::{TerminalEvent, Tui},
};

const SEEK_STEP_SECS: f64 = 5.0;

pub struct App {
    pub event_rx: Receiver<Event>,
    pub event_tx: Sender<Event>,
    config: Config,
    catalog: Catalog,
    loader: TrackLoader,
    clock: PlaybackClock,
    sync: LyricSync,
    state: UiState,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub async fn new(config: Config) -> color_eyre::Result<Self> {
        let (event_tx, event_rx) = flume::unbounded();

        let catalog = Catalog::scan(&config.music_dir)?;
        if catalog.is_empty() {
            return Err(PlayerError::EmptyCatalog(config.music_dir.clone()).into());
        }

        let loader = TrackLoader::new(Arc::new(AutoSource::new()), event_tx.clone());

        Ok(Self {
            event_rx,
            event_tx,
            config,
            catalog,
            loader,
            clock: PlaybackClock::new(),
            sync: LyricSync::new(),
            state: UiState::default(),
            has_focus: true,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = Tui::new(self.config.tick_rate)?;
        tui.enter()?;

        self.next_song();
        while !self.should_quit {
            tui.draw(|f| {
                self.ui(f);
            })?;

            self.handle_events(&mut tui).await?;
        }

        tui.exit()
    }

    fn ui(&self, frame: &mut Frame) {
        if !self.has_focus {
            return;
        }

        frame.render_widget(
            Block::new().style(Style::default().bg(colors::BACKGROUND)),
            frame.area(),
        );

        let [lyrics_area, status_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

        let position = self.clock.position_secs();
        frame.render_widget(LyricsWidget::new(&self.sync, position, &self.state), lyrics_area);
        frame.render_widget(
            StatusBar::new(&self.state, position, self.clock.is_playing()),
            status_area,
        );
    }

    async fn handle_events(&mut self, tui: &mut Tui) -> color_eyre::Result<()> {
        if let Some(evt) = tui.next().await {
            match evt {
                TerminalEvent::Key(key) => self.handle_key(key),
                TerminalEvent::Tick => self.on_tick(),
                TerminalEvent::FocusGained => {
                    self.has_focus = true;
                    tui.clear()?;
                }
                TerminalEvent::FocusLost => self.has_focus = false,
                TerminalEvent::Resize(..) => {}
            }
        }

        while let Ok(event) = self.event_rx.try_recv() {
            self.on_event(event);
        }

        Ok(())
    }

    // The locator re-runs on every tick; the changed flag only matters to
    // hosts that animate line entry, which a terminal does not.
    fn on_tick(&mut self) {
        let _ = self.sync.on_time_update(self.clock.position_secs());
    }

    fn on_event(&mut self, event: Event) {
        match event {
            Event::TrackLoaded(generation, track) => {
                // A stale event can still be queued after a newer load
                // started; the generation tag says which load it belongs to.
                if generation != self.loader.generation() {
                    return;
                }
                self.state.is_loading = false;
                self.state.error_message = None;
                self.sync.load_track(track);
            }
            Event::TrackUnavailable(generation, message) => {
                if generation != self.loader.generation() {
                    return;
                }
                self.state.is_loading = false;
                self.state.error_message = Some(message);
                self.sync.clear();
                self.clock.pause();
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers == KeyModifiers::CONTROL => {
                self.should_quit = true;
            }
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char(' ') => self.clock.toggle(),
            KeyCode::Char('n') => self.next_song(),
            KeyCode::Left => self.clock.seek_by(-SEEK_STEP_SECS),
            KeyCode::Right => self.clock.seek_by(SEEK_STEP_SECS),
            _ => {}
        }
    }

    fn next_song(&mut self) {
        let mut rng = rand::rng();
        let Some(index) = self.catalog.pick_random(&mut rng) else {
            return;
        };
        let Some(song) = self.catalog.get(index) else {
            return;
        };
        info!(song = %song.title, "song selected");

        self.state.accent = colors::SONG_ACCENTS[rng.random_range(0..colors::SONG_ACCENTS.len())];
        self.state.song_title = Some(song.title.clone());
        self.state.is_loading = true;
        self.state.error_message = None;
        self.sync.clear();
        self.clock.reset();
        self.clock.play();
        self.loader.load(song);
    }
}
