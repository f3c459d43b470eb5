use std::fmt;

use async_trait::async_trait;

use super::types::Joke;

/// Text shown in place of a joke whenever a fetch fails, whatever the cause.
pub const FETCH_ERROR_TEXT: &str = "Error fetching joke";

/// Errors that can occur while fetching a joke.
/// The screen only ever shows `FETCH_ERROR_TEXT`; the variants exist for the log.
#[derive(Debug, Clone, PartialEq)]
pub enum JokeError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The service answered with a non-2xx status.
    Api { status: u16, message: String },
    /// The body was not the JSON shape we expect.
    Parse(String),
    /// The service answered 200 but flagged `error: true`.
    Service(String),
}

impl fmt::Display for JokeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JokeError::Network(msg) => write!(f, "network error: {msg}"),
            JokeError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            JokeError::Parse(msg) => write!(f, "parse error: {msg}"),
            JokeError::Service(msg) => write!(f, "service reported error: {msg}"),
        }
    }
}

impl std::error::Error for JokeError {}

#[async_trait]
pub trait JokeSource: Send + Sync {
    /// Returns the name of the source.
    fn name(&self) -> &str;

    /// Fetches one joke for the given category. The category is passed through unvalidated.
    async fn fetch(&self, category: &str) -> Result<Joke, JokeError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_carries_detail() {
        let err = JokeError::Api {
            status: 503,
            message: "down for maintenance".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API error (HTTP 503): down for maintenance"
        );
        assert_eq!(
            JokeError::Service("No matching joke found".to_string()).to_string(),
            "service reported error: No matching joke found"
        );
    }
}
