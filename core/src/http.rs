//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! `JokeClient` builds `HttpRequest` values and shapes `HttpResponse` values
//! without touching the network. A `Transport` executes the round-trip in
//! between. Every call against the joke service is a GET, so requests carry
//! no method or body.
//!
//! Bodies are raw bytes because the image endpoint returns PNG data.

/// An outbound GET request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

impl HttpRequest {
    /// First header named `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Whether `status` is in the 2xx range.
pub fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// An HTTP response described as plain data.
///
/// Non-2xx responses are still responses: the service reports application
/// errors (unknown joke id and the like) in a JSON body alongside the status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        is_success_status(self.status)
    }
}
