//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::jokes::{Joke, JokeError, JokeSource};

/// A source that answers every fetch with the same canned outcome.
pub struct StubSource {
    pub outcome: Result<Joke, JokeError>,
}

#[async_trait]
impl JokeSource for StubSource {
    fn name(&self) -> &str {
        "stub"
    }

    async fn fetch(&self, _category: &str) -> Result<Joke, JokeError> {
        self.outcome.clone()
    }
}

/// A source whose fetch never completes, like a request the network swallowed.
pub struct HangingSource;

#[async_trait]
impl JokeSource for HangingSource {
    fn name(&self) -> &str {
        "hanging"
    }

    async fn fetch(&self, _category: &str) -> Result<Joke, JokeError> {
        std::future::pending().await
    }
}

/// Flattens a TestBackend buffer into one string of cell symbols.
pub fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect::<String>()
}

/// Creates a test App with a StubSource and the default category.
pub fn test_app() -> crate::core::state::App {
    let source = StubSource {
        outcome: Ok("stub joke".to_string()),
    };
    crate::core::state::App::new(Arc::new(source), "Spooky".to_string())
}
