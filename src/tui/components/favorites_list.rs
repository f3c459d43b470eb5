//! # FavoritesList Component
//!
//! Scrollable list of favorite jokes with keyboard selection and removal.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `FavoritesListState` lives in `TuiState`
//! - `FavoritesList` is created each frame with borrowed state and the jokes as props

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph};

use crate::jokes::Joke;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Columns taken by the borders plus the highlight symbol.
const HORIZONTAL_OVERHEAD: u16 = 2 + 2;

/// Persistent selection state for the favorites panel.
#[derive(Default)]
pub struct FavoritesListState {
    pub list_state: ListState,
    /// Number of items at the last sync, used to clamp the selection.
    len: usize,
}

/// Events emitted by the favorites list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoritesEvent {
    /// Remove the favorite at this index.
    Remove(usize),
}

impl FavoritesListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Keeps the selection inside `0..len` after the list changed.
    pub fn sync_len(&mut self, len: usize) {
        self.len = len;
        match self.list_state.selected() {
            _ if len == 0 => self.list_state.select(None),
            None => self.list_state.select(Some(0)),
            Some(idx) if idx >= len => self.list_state.select(Some(len - 1)),
            Some(_) => {}
        }
    }
}

impl EventHandler for FavoritesListState {
    type Event = FavoritesEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<FavoritesEvent> {
        if self.len == 0 {
            return None;
        }
        match event {
            TuiEvent::CursorUp => {
                let idx = self.selected().map_or(0, |i| i.saturating_sub(1));
                self.list_state.select(Some(idx));
                None
            }
            TuiEvent::CursorDown => {
                let idx = self.selected().map_or(0, |i| (i + 1).min(self.len - 1));
                self.list_state.select(Some(idx));
                None
            }
            TuiEvent::RemoveSelected => self.selected().map(FavoritesEvent::Remove),
            _ => None,
        }
    }
}

/// Transient render wrapper for the favorites panel.
pub struct FavoritesList<'a> {
    state: &'a mut FavoritesListState,
    jokes: &'a [Joke],
}

impl<'a> FavoritesList<'a> {
    pub fn new(state: &'a mut FavoritesListState, jokes: &'a [Joke]) -> Self {
        Self { state, jokes }
    }
}

/// Wraps one joke into display lines for a list item.
fn wrap_joke(joke: &str, width: u16) -> Text<'static> {
    let width = width.saturating_sub(HORIZONTAL_OVERHEAD).max(1) as usize;
    let options = textwrap::Options::new(width).break_words(true);
    let lines: Vec<Line> = textwrap::wrap(joke, options)
        .into_iter()
        .map(|line| Line::from(line.into_owned()))
        .collect();
    Text::from(lines)
}

impl Component for FavoritesList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.sync_len(self.jokes.len());

        let block = Block::bordered()
            .title(format!(" Favorites ({}) ", self.jokes.len()))
            .title_bottom(Line::from(" ↑/↓ select · d remove ").right_aligned())
            .border_style(Style::default().fg(Color::Blue));

        if self.jokes.is_empty() {
            let empty = Paragraph::new("No favorite jokes")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::White))
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self
            .jokes
            .iter()
            .map(|joke| ListItem::new(wrap_joke(joke, area.width)))
            .collect();

        let list = List::new(items)
            .block(block)
            .style(Style::default().fg(Color::White))
            .highlight_style(
                Style::default()
                    .fg(Color::LightRed)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn jokes(items: &[&str]) -> Vec<Joke> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn rendered(state: &mut FavoritesListState, jokes: &[Joke]) -> String {
        let backend = TestBackend::new(50, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                FavoritesList::new(state, jokes).render(f, f.area());
            })
            .unwrap();
        buffer_text(&terminal)
    }

    #[test]
    fn test_empty_list_placeholder() {
        let mut state = FavoritesListState::new();
        let text = rendered(&mut state, &[]);
        assert!(text.contains("No favorite jokes"));
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_render_selects_first_item() {
        let mut state = FavoritesListState::new();
        let items = jokes(&["first joke", "second joke"]);
        let text = rendered(&mut state, &items);
        assert!(text.contains("first joke"));
        assert!(text.contains("second joke"));
        assert!(text.contains("Favorites (2)"));
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_navigation_is_clamped() {
        let mut state = FavoritesListState::new();
        state.sync_len(2);
        state.handle_event(&TuiEvent::CursorDown);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected(), Some(1));
        state.handle_event(&TuiEvent::CursorUp);
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_remove_emits_selected_index() {
        let mut state = FavoritesListState::new();
        state.sync_len(3);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(
            state.handle_event(&TuiEvent::RemoveSelected),
            Some(FavoritesEvent::Remove(1))
        );
    }

    #[test]
    fn test_remove_on_empty_is_ignored() {
        let mut state = FavoritesListState::new();
        state.sync_len(0);
        assert_eq!(state.handle_event(&TuiEvent::RemoveSelected), None);
    }

    #[test]
    fn test_selection_clamped_after_shrink() {
        let mut state = FavoritesListState::new();
        state.sync_len(3);
        state.list_state.select(Some(2));
        state.sync_len(2);
        assert_eq!(state.selected(), Some(1));
    }

    #[test]
    fn test_wrap_joke_splits_long_text() {
        let text = wrap_joke("one two three four five six", 12);
        assert!(text.lines.len() > 1);
    }
}
