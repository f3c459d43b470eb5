use serde::Deserialize;

/// A joke is plain text. No id, no category, nothing else survives the fetch.
pub type Joke = String;

/// Category sent when nothing else is configured.
pub const DEFAULT_CATEGORY: &str = "Spooky";

/// Categories the joke service advertises. Used only for cycling in the UI;
/// a configured category outside this list is still sent as-is.
pub const KNOWN_CATEGORIES: &[&str] = &[
    "Any",
    "Misc",
    "Programming",
    "Dark",
    "Pun",
    "Spooky",
    "Christmas",
];

/// Returns the category after `current` in `KNOWN_CATEGORIES`, wrapping around.
/// Unknown categories restart at the first entry.
pub fn next_category(current: &str) -> &'static str {
    match KNOWN_CATEGORIES.iter().position(|c| *c == current) {
        Some(idx) => KNOWN_CATEGORIES[(idx + 1) % KNOWN_CATEGORIES.len()],
        None => KNOWN_CATEGORIES[0],
    }
}

/// Response body of `GET /joke/Any?type=single`.
///
/// Only `error` is required; on the error path the service sends `message`
/// (and friends) instead of `joke`.
#[derive(Deserialize, Debug)]
pub struct JokeResponse {
    pub error: bool,
    #[serde(default)]
    pub joke: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
