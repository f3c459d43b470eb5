//! # Actions
//!
//! Everything that can happen in Jokebox becomes an `Action`.
//! User presses g? That's `Action::GenerateJoke`.
//! The service answers? That's `Action::FetchResolved { .. }`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing any I/O the adapter should
//! perform. No side effects here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::state::{App, FetchState};
use crate::jokes::{FETCH_ERROR_TEXT, Joke, JokeError, next_category};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    GenerateJoke,
    FetchResolved {
        request_id: u64,
        outcome: Result<Joke, JokeError>,
    },
    AddToFavorites,
    RemoveFavorite(Joke),
    ToggleFavorites,
    CycleCategory,
    DismissNotice,
    Quit,
}

/// I/O the adapter must perform after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    SpawnFetch { request_id: u64, category: String },
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::GenerateJoke => {
            let request_id = app.next_request_id;
            app.next_request_id += 1;
            app.pending_request = Some(request_id);
            app.fetch_state = FetchState::Loading;
            app.notice = None;
            app.status_message = format!("Fetching a {} joke...", app.category);
            debug!("Fetch #{} requested (category={})", request_id, app.category);
            Effect::SpawnFetch {
                request_id,
                category: app.category.clone(),
            }
        }
        Action::FetchResolved {
            request_id,
            outcome,
        } => {
            if app.pending_request != Some(request_id) {
                debug!(
                    "Dropping stale fetch #{} (latest is {:?})",
                    request_id, app.pending_request
                );
                return Effect::None;
            }
            app.pending_request = None;
            match outcome {
                Ok(joke) => {
                    info!("Fetch #{} succeeded", request_id);
                    app.joke = joke.clone();
                    app.fetch_state = FetchState::Succeeded(joke);
                    app.status_message = String::from("Here's one");
                }
                Err(e) => {
                    warn!("Fetch #{} failed: {}", request_id, e);
                    app.joke = FETCH_ERROR_TEXT.to_string();
                    app.fetch_state = FetchState::Failed(FETCH_ERROR_TEXT.to_string());
                    app.status_message = String::from("Fetch failed");
                }
            }
            Effect::None
        }
        Action::AddToFavorites => {
            match app.favorites.add(app.joke.clone()) {
                Ok(()) => {
                    debug!("Added favorite (now {})", app.favorites.len());
                    app.notice = None;
                    app.status_message = format!("Favorites: {}", app.favorites.len());
                }
                Err(reason) => {
                    debug!("Add to favorites rejected: {:?}", reason);
                    app.notice = Some(reason.to_string());
                }
            }
            Effect::None
        }
        Action::RemoveFavorite(joke) => {
            app.favorites.remove(&joke);
            app.status_message = format!("Favorites: {}", app.favorites.len());
            Effect::None
        }
        Action::ToggleFavorites => {
            let visible = app.favorites.toggle_visibility();
            debug!("Favorites visible: {}", visible);
            Effect::None
        }
        Action::CycleCategory => {
            app.category = next_category(&app.category).to_string();
            app.status_message = format!("Category: {}", app.category);
            Effect::None
        }
        Action::DismissNotice => {
            app.notice = None;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
