//! Canonical page and image links for a joke.
//!
//! These never touch the network. The id is inserted into the path verbatim;
//! callers that accept untrusted ids are responsible for escaping them.

/// Public host of the joke service.
pub const BASE_URL: &str = "https://icanhazdadjoke.com";

/// Link to the page for joke `id`, e.g. `https://icanhazdadjoke.com/j/123`.
///
/// With `include_base_host == false` only the path (`/j/123`) is returned.
pub fn joke_url(id: &str, include_base_host: bool) -> String {
    let host = if include_base_host { BASE_URL } else { "" };
    format!("{host}/j/{id}")
}

/// Link to the rendered PNG for joke `id`: `joke_url` with a `.png` suffix.
pub fn joke_image_url(id: &str, include_base_host: bool) -> String {
    format!("{}.png", joke_url(id, include_base_host))
}
