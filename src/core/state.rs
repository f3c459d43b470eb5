//! # Application State
//!
//! Core business state for Jokebox. Domain logic only, no TUI types.
//! Presentation state (list selection, notice timers) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── source: Arc<dyn JokeSource>     // where jokes come from
//! ├── category: String                // sent with every fetch
//! ├── joke: String                    // text currently displayed
//! ├── fetch_state: FetchState         // lifecycle of the latest fetch
//! ├── favorites: Favorites            // kept jokes + show/hide flag
//! ├── notice: Option<String>          // transient user notification
//! ├── status_message: String          // title bar text
//! ├── next_request_id: u64            // sequence for fetch ordering
//! └── pending_request: Option<u64>    // id of the fetch that may still resolve
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::core::config::ResolvedConfig;
use crate::core::favorites::Favorites;
use crate::jokes::{Joke, JokeSource};

/// Lifecycle of the most recent fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    Idle,
    Loading,
    Succeeded(Joke),
    Failed(String),
}

pub struct App {
    pub source: Arc<dyn JokeSource>,
    pub category: String,
    /// Displayed joke text. Survives a new `Loading` state until the fetch resolves.
    pub joke: String,
    pub fetch_state: FetchState,
    pub favorites: Favorites,
    pub notice: Option<String>,
    pub status_message: String,
    pub next_request_id: u64,
    pub pending_request: Option<u64>,
}

impl App {
    pub fn new(source: Arc<dyn JokeSource>, category: String) -> Self {
        Self {
            source,
            category,
            joke: String::new(),
            fetch_state: FetchState::Idle,
            favorites: Favorites::new(),
            notice: None,
            status_message: String::from("Press g for a joke"),
            next_request_id: 1,
            pending_request: None,
        }
    }

    pub fn from_config(source: Arc<dyn JokeSource>, config: &ResolvedConfig) -> Self {
        Self::new(source, config.category.clone())
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.fetch_state, FetchState::Loading)
    }
}
