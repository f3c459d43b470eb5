//! # ActionBar Component
//!
//! One line of key hints standing in for the screen's buttons.
//! The favorites hint flips between "Show" and "Hide" with the panel state.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub struct ActionBar {
    pub favorites_visible: bool,
    /// Generate is greyed out while a fetch is in flight.
    pub is_loading: bool,
}

impl ActionBar {
    pub fn new(favorites_visible: bool, is_loading: bool) -> Self {
        Self {
            favorites_visible,
            is_loading,
        }
    }

    fn hints(&self) -> Vec<(&'static str, &'static str, bool)> {
        let toggle = if self.favorites_visible {
            "Hide Favorites"
        } else {
            "Show Favorites"
        };
        vec![
            ("g", "Generate Joke", !self.is_loading),
            ("a", "Add to Favorites", true),
            ("f", toggle, true),
            ("c", "Category", true),
            ("q", "Quit", true),
        ]
    }
}

impl Component for ActionBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let key_style = Style::default()
            .fg(Color::Black)
            .bg(Color::LightBlue)
            .add_modifier(Modifier::BOLD);
        let label_style = Style::default().fg(Color::White);
        let disabled = Style::default().fg(Color::DarkGray);

        let mut spans = Vec::new();
        for (key, label, enabled) in self.hints() {
            let (k, l) = if enabled {
                (key_style, label_style)
            } else {
                (disabled, disabled)
            };
            spans.push(Span::styled(format!(" {key} "), k));
            spans.push(Span::styled(format!(" {label}  "), l));
        }
        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_label_follows_visibility() {
        let labels = |visible| {
            ActionBar::new(visible, false)
                .hints()
                .into_iter()
                .map(|(_, label, _)| label)
                .collect::<Vec<_>>()
        };
        assert!(labels(false).contains(&"Show Favorites"));
        assert!(labels(true).contains(&"Hide Favorites"));
    }

    #[test]
    fn test_generate_disabled_while_loading() {
        let hints = ActionBar::new(false, true).hints();
        assert_eq!(hints[0], ("g", "Generate Joke", false));
    }
}
