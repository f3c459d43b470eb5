//! # Favorites
//!
//! Ordered, duplicate-free list of jokes the user chose to keep, plus the
//! show/hide flag for the favorites panel.
//!
//! Lives only as long as the process. Membership is exact string equality.

use std::fmt;

use crate::jokes::Joke;

/// Why `Favorites::add` refused a joke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    Empty,
    Duplicate,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::Empty => write!(f, "There is no joke to add yet!"),
            RejectReason::Duplicate => write!(f, "This joke is already in favorites!"),
        }
    }
}

impl std::error::Error for RejectReason {}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Favorites {
    jokes: Vec<Joke>,
    visible: bool,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `joke` unless it is empty or already present.
    pub fn add(&mut self, joke: Joke) -> Result<(), RejectReason> {
        if joke.is_empty() {
            return Err(RejectReason::Empty);
        }
        if self.contains(&joke) {
            return Err(RejectReason::Duplicate);
        }
        self.jokes.push(joke);
        Ok(())
    }

    /// Removes every entry equal to `joke`. Absent jokes are a no-op.
    pub fn remove(&mut self, joke: &str) {
        self.jokes.retain(|j| j != joke);
    }

    pub fn list(&self) -> &[Joke] {
        &self.jokes
    }

    pub fn contains(&self, joke: &str) -> bool {
        self.jokes.iter().any(|j| j == joke)
    }

    pub fn len(&self) -> usize {
        self.jokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jokes.is_empty()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Flips the display flag and returns the new value.
    pub fn toggle_visibility(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }
}
