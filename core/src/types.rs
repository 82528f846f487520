//! Response records for the joke API, and the shapers that build them.
//!
//! # Design
//! The service is trusted: every field is optional and nothing is validated.
//! A payload that leaves a field out yields `None` rather than an error, and
//! unknown fields are ignored. The only way a shaper fails is a field holding
//! a JSON type that cannot be represented (a string where a number belongs).
//!
//! Error envelopes (`{"status": 404, "message": "..."}`) shape into the same
//! records as successful ones. `into_result` splits them apart for callers
//! that prefer a `Result`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, RemoteError};
use crate::http::is_success_status;

/// A single joke as the service returns it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Joke {
    pub id: Option<String>,
    pub joke: Option<String>,
}

/// Envelope for `GET /` and `GET /j/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct JokeResponse {
    #[serde(flatten)]
    pub joke: Joke,
    pub status: Option<u16>,
    pub message: Option<String>,
}

/// One attachment of a Slack-formatted joke.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SlackAttachment {
    pub fallback: Option<String>,
    pub footer: Option<String>,
    pub text: Option<String>,
}

/// Envelope for `GET /slack`, ready to post back to a Slack slash command.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SlackJokeResponse {
    pub attachments: Option<Vec<SlackAttachment>>,
    pub response_type: Option<String>,
    pub username: Option<String>,
}

/// One page of `GET /search` results.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchedJokesResponse {
    pub status: Option<u16>,
    pub message: Option<String>,
    pub current_page: Option<u64>,
    pub limit: Option<u64>,
    pub next_page: Option<u64>,
    pub previous_page: Option<u64>,
    pub results: Option<Vec<Joke>>,
    pub search_term: Option<String>,
    pub total_jokes: Option<u64>,
    pub total_pages: Option<u64>,
}

/// `Err` when `status` is present and outside 2xx.
fn check_status(status: Option<u16>, message: &Option<String>) -> Result<(), RemoteError> {
    match status {
        Some(status) if !is_success_status(status) => Err(RemoteError {
            status,
            message: message.clone(),
        }),
        _ => Ok(()),
    }
}

impl JokeResponse {
    pub fn from_value(value: Value) -> Result<Self, Error> {
        Ok(serde_json::from_value(value)?)
    }

    /// The joke, or the error the service reported in its place.
    pub fn into_result(self) -> Result<Joke, RemoteError> {
        check_status(self.status, &self.message)?;
        Ok(self.joke)
    }
}

impl SlackJokeResponse {
    pub fn from_value(value: Value) -> Result<Self, Error> {
        Ok(serde_json::from_value(value)?)
    }
}

impl SearchedJokesResponse {
    pub fn from_value(value: Value) -> Result<Self, Error> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn into_result(self) -> Result<Self, RemoteError> {
        check_status(self.status, &self.message)?;
        Ok(self)
    }
}
