//! Stateless HTTP request builder and response shaper for the joke API.
//!
//! # Design
//! `JokeClient` holds the base host and the `User-Agent` it sends, both fixed
//! at `build()` time. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. `DadJokes` glues the two halves to a `Transport`; callers
//! with their own HTTP stack can drive the halves directly.

use serde_json::Value;

use crate::error::Error;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{JokeResponse, SearchedJokesResponse, SlackJokeResponse};
use crate::url::{self, BASE_URL};

/// Placeholder `User-Agent`. The service asks every client to identify
/// itself, so requests sent with this value log a warning.
pub const DEFAULT_USER_AGENT: &str = "dad_jokes rust crate";

/// Parameters for `GET /search`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub term: String,
    pub page: u32,
    pub limit: u32,
}

impl SearchQuery {
    /// First page of up to 20 results for `term`.
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            ..Self::default()
        }
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// `/search?term=..&page=..&limit=..` with the term percent-encoded.
    pub fn endpoint(&self) -> String {
        format!(
            "/search?term={}&page={}&limit={}",
            urlencoding::encode(&self.term),
            self.page,
            self.limit
        )
    }
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            term: String::new(),
            page: 1,
            limit: 20,
        }
    }
}

/// Configures a `JokeClient`.
#[derive(Debug, Clone)]
pub struct JokeClientBuilder {
    base_url: String,
    user_agent: String,
}

impl Default for JokeClientBuilder {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl JokeClientBuilder {
    /// Point the client somewhere other than the public service. A trailing
    /// slash is stripped.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Identify the calling application. An empty value is accepted but
    /// logged as a warning.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        let user_agent = user_agent.into();
        if user_agent.is_empty() {
            tracing::warn!("a user agent should not be an empty string");
        }
        self.user_agent = user_agent;
        self
    }

    pub fn build(self) -> JokeClient {
        JokeClient {
            base_url: self.base_url,
            user_agent: self.user_agent,
        }
    }
}

/// Synchronous, stateless client for the joke API.
///
/// Builds `HttpRequest` values and shapes `HttpResponse` values without
/// touching the network.
#[derive(Debug, Clone)]
pub struct JokeClient {
    base_url: String,
    user_agent: String,
}

impl Default for JokeClient {
    fn default() -> Self {
        JokeClientBuilder::default().build()
    }
}

impl JokeClient {
    pub fn builder() -> JokeClientBuilder {
        JokeClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn has_default_user_agent(&self) -> bool {
        self.user_agent == DEFAULT_USER_AGENT
    }

    /// Page link for `id` on this client's host.
    pub fn joke_url(&self, id: &str) -> String {
        format!("{}{}", self.base_url, url::joke_url(id, false))
    }

    /// Image link for `id` on this client's host.
    pub fn joke_image_url(&self, id: &str) -> String {
        format!("{}{}", self.base_url, url::joke_image_url(id, false))
    }

    /// GET `{base_url}{endpoint}` with the JSON `Accept` header and this
    /// client's `User-Agent`.
    pub fn build_request(&self, endpoint: &str) -> HttpRequest {
        if self.has_default_user_agent() {
            tracing::warn!("please set a user agent for requests using `JokeClientBuilder::user_agent`");
        }
        HttpRequest {
            url: format!("{}{endpoint}", self.base_url),
            headers: vec![
                ("accept".to_string(), "application/json".to_string()),
                ("user-agent".to_string(), self.user_agent.clone()),
            ],
        }
    }

    pub fn build_random_joke(&self) -> HttpRequest {
        self.build_request("/")
    }

    pub fn build_random_slack_joke(&self) -> HttpRequest {
        self.build_request("/slack")
    }

    pub fn build_get_joke(&self, id: &str) -> HttpRequest {
        self.build_request(&url::joke_url(id, false))
    }

    /// The path-only image link; `build_request` adds the host.
    pub fn build_joke_image(&self, id: &str) -> HttpRequest {
        self.build_request(&url::joke_image_url(id, false))
    }

    pub fn build_search(&self, query: &SearchQuery) -> HttpRequest {
        self.build_request(&query.endpoint())
    }

    /// Parse the body as JSON regardless of status; error envelopes are JSON
    /// too.
    pub fn parse_json(&self, response: &HttpResponse) -> Result<Value, Error> {
        Ok(serde_json::from_slice(&response.body)?)
    }

    pub fn parse_joke(&self, response: &HttpResponse) -> Result<JokeResponse, Error> {
        JokeResponse::from_value(self.parse_json(response)?)
    }

    pub fn parse_slack_joke(&self, response: &HttpResponse) -> Result<SlackJokeResponse, Error> {
        SlackJokeResponse::from_value(self.parse_json(response)?)
    }

    pub fn parse_searched_jokes(&self, response: &HttpResponse) -> Result<SearchedJokesResponse, Error> {
        SearchedJokesResponse::from_value(self.parse_json(response)?)
    }

    /// The body as-is. A 404 yields the JSON error body's bytes.
    pub fn parse_joke_image(&self, response: HttpResponse) -> Vec<u8> {
        response.body
    }
}
