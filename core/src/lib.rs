//! Blocking client for the icanhazdadjoke API.
//!
//! # Overview
//! `JokeClient` builds `HttpRequest` values and shapes `HttpResponse` values
//! without touching the network (host-does-IO pattern). `DadJokes` pairs it
//! with a `Transport` (ureq by default) and exposes one method per endpoint.
//!
//! # Design
//! - Configuration (base host, `User-Agent`) is fixed when the client is
//!   built; there is no global state.
//! - Response records trust the server: every field is optional and nothing
//!   is validated.
//! - The service's own error envelopes are records, not `Err`. `Error` is
//!   reserved for transport failures and undecodable bodies.
//! - `joke_url` / `joke_image_url` are pure helpers usable without a client.

pub mod api;
pub mod client;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;
pub mod url;

#[cfg(test)]
mod test_support;

pub use api::DadJokes;
pub use client::{JokeClient, JokeClientBuilder, SearchQuery, DEFAULT_USER_AGENT};
pub use error::{Error, RemoteError};
pub use http::{HttpRequest, HttpResponse};
pub use transport::{Transport, UreqTransport};
pub use types::{Joke, JokeResponse, SearchedJokesResponse, SlackAttachment, SlackJokeResponse};
pub use url::{joke_image_url, joke_url, BASE_URL};
