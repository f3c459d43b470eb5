//! # NoticeBar Component
//!
//! Bottom line for transient notifications (e.g. duplicate favorite).
//! Renders nothing when there is no notice; the TUI loop handles expiry.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub struct NoticeBar<'a> {
    pub notice: Option<&'a str>,
}

impl<'a> NoticeBar<'a> {
    pub fn new(notice: Option<&'a str>) -> Self {
        Self { notice }
    }
}

impl Component for NoticeBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(notice) = self.notice else {
            return;
        };
        let style = Style::default()
            .fg(Color::Black)
            .bg(Color::LightRed)
            .add_modifier(Modifier::BOLD);
        frame.render_widget(
            Line::from(Span::styled(format!(" ! {notice} "), style)).centered(),
            area,
        );
    }
}
