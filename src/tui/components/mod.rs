//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as props:
//! - `TitleBar`: header with category, favorites count and status
//! - `JokePanel`: current joke, or a spinner while fetching
//! - `ActionBar`: key hints standing in for buttons
//! - `NoticeBar`: transient notification line
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `FavoritesList`: selectable favorites with per-item removal
//!
//! Components receive external data as props, not by reaching into `App`:
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! JokePanel::new(&app.joke, app.is_loading(), spinner_frame).render(frame, area);
//!
//! // Bad: hidden dependency on global state
//! JokePanel::render(frame, area); // reads from App
//! ```

pub mod action_bar;
pub mod favorites_list;
pub mod joke_panel;
pub mod notice;
pub mod title_bar;

pub use action_bar::ActionBar;
pub use favorites_list::{FavoritesEvent, FavoritesList, FavoritesListState};
pub use joke_panel::JokePanel;
pub use notice::NoticeBar;
pub use title_bar::TitleBar;
