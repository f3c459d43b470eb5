//! Jokebox library exports for testing

pub mod core;
pub mod jokes;
pub mod tui;

#[cfg(test)]
pub mod test_support;
