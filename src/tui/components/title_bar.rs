//! # TitleBar Component
//!
//! Single-line header: app name, selected category, favorites count, status.
//!
//! Stateless. Everything arrives as props, so the parent decides where each
//! value comes from:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(&app.category, &app.status_message, app.favorites.len());
//! title_bar.render(frame, area);
//! ```

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub struct TitleBar<'a> {
    pub category: &'a str,
    pub status_message: &'a str,
    pub favorites_count: usize,
}

impl<'a> TitleBar<'a> {
    pub fn new(category: &'a str, status_message: &'a str, favorites_count: usize) -> Self {
        Self {
            category,
            status_message,
            favorites_count,
        }
    }

    /// Plain-text form of the bar, also used by tests.
    pub fn text(&self) -> String {
        let base = format!(
            "Jokebox (category: {}) | ★ {}",
            self.category, self.favorites_count
        );
        if self.status_message.is_empty() {
            base
        } else {
            format!("{} | {}", base, self.status_message)
        }
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = Style::default()
            .fg(Color::LightBlue)
            .add_modifier(Modifier::BOLD);
        frame.render_widget(Line::from(Span::styled(self.text(), style)), area);
    }
}
