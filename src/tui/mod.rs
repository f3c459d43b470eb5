//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Idle**: sleeps up to 500ms, only redraws on events, fetch results or
//!   notice expiry.
//!
//! ## Fetches
//!
//! A fetch runs on a tokio task and reports back through an mpsc channel as
//! `Action::FetchResolved`. Generate stays live while a fetch is loading so a
//! hung request never locks the screen; the reducer drops stale resolutions.

mod component;
mod components;
mod event;
mod ui;

use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use log::{debug, info, warn};

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::jokes::{JokeApiSource, JokeSource};
use crate::tui::component::EventHandler;
use crate::tui::components::{FavoritesEvent, FavoritesListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// How long a notice stays on screen.
const NOTICE_TTL: Duration = Duration::from_secs(3);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub favorites: FavoritesListState,
    /// When the current notice was raised (None = no notice showing)
    pub notice_since: Option<Instant>,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            favorites: FavoritesListState::new(),
            notice_since: None,
        }
    }
}

/// Build the joke source from a resolved config.
pub fn build_source(config: &ResolvedConfig) -> Arc<dyn JokeSource> {
    let source = JokeApiSource::new(Some(config.base_url.clone()));
    info!("Using joke source '{}' at {}", source.name(), source.base_url());
    Arc::new(source)
}

/// What the loop should do after routing one event.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Runs an action through the reducer and carries out the resulting effect.
fn dispatch(app: &mut App, tui: &mut TuiState, action: Action, tx: &mpsc::Sender<Action>) -> Flow {
    let raises_notice = matches!(action, Action::AddToFavorites);
    let effect = update(app, action);

    if raises_notice && app.notice.is_some() {
        tui.notice_since = Some(Instant::now());
    }

    match effect {
        Effect::Quit => Flow::Quit,
        Effect::SpawnFetch {
            request_id,
            category,
        } => {
            spawn_fetch(app.source.clone(), request_id, category, tx.clone());
            Flow::Continue
        }
        Effect::None => Flow::Continue,
    }
}

/// Translates one terminal event into actions or component updates.
fn handle_event(
    app: &mut App,
    tui: &mut TuiState,
    event: TuiEvent,
    tx: &mpsc::Sender<Action>,
) -> Flow {
    match event {
        TuiEvent::Quit | TuiEvent::ForceQuit => dispatch(app, tui, Action::Quit, tx),
        TuiEvent::Generate => {
            if app.is_loading() {
                debug!("Generate while fetch #{:?} is in flight", app.pending_request);
            }
            dispatch(app, tui, Action::GenerateJoke, tx)
        }
        TuiEvent::AddFavorite => dispatch(app, tui, Action::AddToFavorites, tx),
        TuiEvent::ToggleFavorites => dispatch(app, tui, Action::ToggleFavorites, tx),
        TuiEvent::CycleCategory => dispatch(app, tui, Action::CycleCategory, tx),
        TuiEvent::CursorUp | TuiEvent::CursorDown | TuiEvent::RemoveSelected => {
            if !app.favorites.is_visible() {
                return Flow::Continue;
            }
            tui.favorites.sync_len(app.favorites.len());
            let Some(FavoritesEvent::Remove(idx)) = tui.favorites.handle_event(&event) else {
                return Flow::Continue;
            };
            let Some(joke) = app.favorites.list().get(idx).cloned() else {
                return Flow::Continue;
            };
            let flow = dispatch(app, tui, Action::RemoveFavorite(joke), tx);
            tui.favorites.sync_len(app.favorites.len());
            flow
        }
        TuiEvent::Resize => Flow::Continue,
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source = build_source(&config);
    let mut app = App::from_config(source, &config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    'main: loop {
        let animating = app.is_loading();
        if animating {
            needs_redraw = true;
        }

        // Expire the notice
        match (app.notice.is_some(), tui.notice_since) {
            (false, _) => tui.notice_since = None,
            (true, None) => tui.notice_since = Some(Instant::now()),
            (true, Some(since)) if since.elapsed() >= NOTICE_TTL => {
                dispatch(&mut app, &mut tui, Action::DismissNotice, &tx);
                tui.notice_since = None;
                needs_redraw = true;
            }
            (true, Some(_)) => {}
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain all pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if handle_event(&mut app, &mut tui, event, &tx) == Flow::Quit {
                break 'main;
            }
        }

        // Handle background task actions (fetch results)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if dispatch(&mut app, &mut tui, action, &tx) == Flow::Quit {
                break 'main;
            }
        }
    }

    info!("Shutting down with {} favorites", app.favorites.len());
    ratatui::restore();
    Ok(())
}

fn spawn_fetch(
    source: Arc<dyn JokeSource>,
    request_id: u64,
    category: String,
    tx: mpsc::Sender<Action>,
) {
    info!("Spawning fetch #{} (category={})", request_id, category);
    tokio::spawn(async move {
        let outcome = source.fetch(&category).await;
        if tx
            .send(Action::FetchResolved {
                request_id,
                outcome,
            })
            .is_err()
        {
            warn!(
                "Failed to deliver fetch #{}: receiver dropped",
                request_id
            );
        }
    });
}
