//! # JokePanel Component
//!
//! Bordered box showing the current joke, or a spinner while a fetch is in
//! flight. Text is wrapped and centered.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use crate::tui::component::Component;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;

pub struct JokePanel<'a> {
    pub joke: &'a str,
    pub is_loading: bool,
    pub spinner_frame: usize,
}

impl<'a> JokePanel<'a> {
    pub fn new(joke: &'a str, is_loading: bool, spinner_frame: usize) -> Self {
        Self {
            joke,
            is_loading,
            spinner_frame,
        }
    }

    /// Height the panel needs at `width`, borders included.
    ///
    /// Uses textwrap with options close to ratatui's `Paragraph` wrapping so
    /// the layout can be sized before rendering.
    pub fn calculate_height(&self, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 || self.is_loading || self.joke.is_empty() {
            return 1 + VERTICAL_OVERHEAD;
        }

        let options = textwrap::Options::new(content_width as usize)
            .break_words(true)
            .word_separator(textwrap::WordSeparator::AsciiSpace);
        let lines = textwrap::wrap(self.joke, options);
        (lines.len() as u16).max(1) + VERTICAL_OVERHEAD
    }

    fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }
}

impl Component for JokePanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(" Joke ")
            .border_style(Style::default().fg(Color::Blue))
            .padding(Padding::horizontal(CONTENT_PAD_H));

        let paragraph = if self.is_loading {
            Paragraph::new(format!("{} fetching...", self.spinner()))
                .style(Style::default().fg(Color::Blue))
        } else {
            Paragraph::new(self.joke)
                .style(Style::default().fg(Color::LightCyan))
                .wrap(Wrap { trim: true })
        };

        frame.render_widget(
            paragraph.block(block).alignment(Alignment::Center),
            area,
        );
    }
}
