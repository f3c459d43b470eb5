pub mod jokeapi;
pub mod source;
pub mod types;

pub use jokeapi::JokeApiSource;
pub use source::{FETCH_ERROR_TEXT, JokeError, JokeSource};
pub use types::{DEFAULT_CATEGORY, Joke, JokeResponse, KNOWN_CATEGORIES, next_category};
