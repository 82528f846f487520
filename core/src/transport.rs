//! Executes `HttpRequest` values against the network.
//!
//! # Design
//! `Transport` is the seam between the pure client core and real I/O. The
//! default `UreqTransport` runs a blocking ureq agent configured to hand back
//! 4xx/5xx responses as data: the joke service reports unknown ids in a JSON
//! body, and that body is shaped into a record rather than turned into an
//! error. Only failures that produce no response surface as `Error`.

use std::io::Read;

use crate::error::Error;
use crate::http::{HttpRequest, HttpResponse};

/// Performs one HTTP round-trip.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Error>;
}

/// Blocking transport backed by `ureq`.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl Default for UreqTransport {
    fn default() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl UreqTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a caller-configured agent, e.g. one with timeouts or a proxy.
    ///
    /// The agent should be built with `http_status_as_error(false)`;
    /// otherwise error envelopes arrive as `Error::Transport`.
    pub fn with_agent(agent: ureq::Agent) -> Self {
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
        let mut builder = self.agent.get(&request.url);
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        let mut response = builder.call()?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| Some((k.as_str().to_string(), v.to_str().ok()?.to_string())))
            .collect();
        let mut body = Vec::new();
        response.body_mut().as_reader().read_to_end(&mut body)?;

        Ok(HttpResponse { status, headers, body })
    }
}
