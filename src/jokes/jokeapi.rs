//! JokeAPI source (`https://v2.jokeapi.dev`).
//!
//! One GET per fetch, no retry, no timeout override. Every failure path is
//! logged with its detail before being handed back as a `JokeError`.

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::jokes::{Joke, JokeError, JokeResponse, JokeSource};

pub const DEFAULT_JOKEAPI_BASE_URL: &str = "https://v2.jokeapi.dev";

/// Turns a decoded body into a joke, or the reason it isn't one.
fn response_to_joke(response: JokeResponse) -> Result<Joke, JokeError> {
    if response.error {
        let message = response
            .message
            .unwrap_or_else(|| "no message given".to_string());
        return Err(JokeError::Service(message));
    }
    response
        .joke
        .ok_or_else(|| JokeError::Parse("response has no `joke` field".to_string()))
}

pub struct JokeApiSource {
    base_url: String,
    client: reqwest::Client,
}

impl JokeApiSource {
    pub fn new(base_url: Option<String>) -> Self {
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_JOKEAPI_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl JokeSource for JokeApiSource {
    fn name(&self) -> &str {
        "jokeapi"
    }

    async fn fetch(&self, category: &str) -> Result<Joke, JokeError> {
        info!("JokeAPI request: category={}", category);

        let response = self
            .client
            .get(format!("{}/joke/Any", self.base_url))
            .query(&[("type", "single"), ("category", category)])
            .send()
            .await
            .map_err(|e| {
                warn!("JokeAPI network error: {}", e);
                JokeError::Network(e.to_string())
            })?;

        debug!("JokeAPI response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("JokeAPI error: {} - {}", status, err_body);
            return Err(JokeError::Api {
                status,
                message: err_body,
            });
        }

        let body = response.text().await.map_err(|e| {
            warn!("JokeAPI body read failed: {}", e);
            JokeError::Network(e.to_string())
        })?;
        debug!("JokeAPI body: {}", body);

        let parsed: JokeResponse = serde_json::from_str(&body).map_err(|e| {
            warn!("JokeAPI body did not parse: {}", e);
            JokeError::Parse(e.to_string())
        })?;

        let result = response_to_joke(parsed);
        match &result {
            Ok(joke) => info!("JokeAPI returned joke ({} bytes)", joke.len()),
            Err(e) => warn!("JokeAPI fetch failed: {}", e),
        }
        result
    }
}
