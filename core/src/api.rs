//! The joke API as plain function calls.
//!
//! Each operation performs exactly one request through the configured
//! `Transport` and returns the shaped record. Nothing is cached or retried.

use serde_json::Value;

use crate::client::{JokeClient, SearchQuery};
use crate::error::Error;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{Transport, UreqTransport};
use crate::types::{JokeResponse, SearchedJokesResponse, SlackJokeResponse};

/// A `JokeClient` paired with the transport that executes its requests.
///
/// ```no_run
/// use dad_jokes::{DadJokes, JokeClient};
///
/// let client = JokeClient::builder()
///     .user_agent("my-bot (https://example.com/my-bot)")
///     .build();
/// let jokes = DadJokes::new(client);
/// let joke = jokes.get_random_joke()?;
/// println!("{}", joke.joke.joke.unwrap_or_default());
/// # Ok::<(), dad_jokes::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct DadJokes<T = UreqTransport> {
    client: JokeClient,
    transport: T,
}

impl DadJokes<UreqTransport> {
    pub fn new(client: JokeClient) -> Self {
        Self::with_transport(client, UreqTransport::default())
    }
}

impl Default for DadJokes<UreqTransport> {
    fn default() -> Self {
        Self::new(JokeClient::default())
    }
}

impl<T: Transport> DadJokes<T> {
    pub fn with_transport(client: JokeClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &JokeClient {
        &self.client
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn send(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
        tracing::debug!(url = %request.url, "sending joke api request");
        let response = self.transport.execute(request)?;
        tracing::debug!(status = response.status, bytes = response.body.len(), "joke api responded");
        Ok(response)
    }

    /// GET `endpoint` (a path such as `/slack`) on the configured host.
    pub fn send_request(&self, endpoint: &str) -> Result<HttpResponse, Error> {
        self.send(self.client.build_request(endpoint))
    }

    /// `send_request`, then parse the body as JSON.
    pub fn send_request_json(&self, endpoint: &str) -> Result<Value, Error> {
        let response = self.send_request(endpoint)?;
        self.client.parse_json(&response)
    }

    pub fn get_random_joke(&self) -> Result<JokeResponse, Error> {
        let response = self.send(self.client.build_random_joke())?;
        self.client.parse_joke(&response)
    }

    pub fn get_random_slack_joke(&self) -> Result<SlackJokeResponse, Error> {
        let response = self.send(self.client.build_random_slack_joke())?;
        self.client.parse_slack_joke(&response)
    }

    /// Look a joke up by id. An unknown id is not an `Err`: the returned
    /// record carries the service's `status` and `message` instead.
    pub fn get_joke(&self, id: &str) -> Result<JokeResponse, Error> {
        let response = self.send(self.client.build_get_joke(id))?;
        self.client.parse_joke(&response)
    }

    /// Raw PNG bytes for the joke's image.
    pub fn get_joke_image_bytes(&self, id: &str) -> Result<Vec<u8>, Error> {
        let response = self.send(self.client.build_joke_image(id))?;
        Ok(self.client.parse_joke_image(response))
    }

    /// One page of jokes matching `term`. `page` and `limit` are passed
    /// through unchecked.
    pub fn get_searched_jokes(&self, term: &str, page: u32, limit: u32) -> Result<SearchedJokesResponse, Error> {
        self.get_searched_jokes_with(&SearchQuery::new(term).page(page).limit(limit))
    }

    pub fn get_searched_jokes_with(&self, query: &SearchQuery) -> Result<SearchedJokesResponse, Error> {
        let response = self.send(self.client.build_search(query))?;
        self.client.parse_searched_jokes(&response)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::test_support::captured_logs;

    /// Replies with a canned response and remembers every request.
    struct RecordingTransport {
        status: u16,
        body: Vec<u8>,
        requests: Mutex<Vec<HttpRequest>>,
    }

    impl RecordingTransport {
        fn new(status: u16, body: &[u8]) -> Self {
            Self {
                status,
                body: body.to_vec(),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<HttpRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl Transport for RecordingTransport {
        fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
            self.requests.lock().unwrap().push(request);
            Ok(HttpResponse {
                status: self.status,
                headers: Vec::new(),
                body: self.body.clone(),
            })
        }
    }

    struct FailingTransport;

    impl Transport for FailingTransport {
        fn execute(&self, _request: HttpRequest) -> Result<HttpResponse, Error> {
            Err(Error::Io(std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused")))
        }
    }

    fn jokes(status: u16, body: &str) -> DadJokes<RecordingTransport> {
        let client = JokeClient::builder().user_agent("dad_jokes tests").build();
        DadJokes::with_transport(client, RecordingTransport::new(status, body.as_bytes()))
    }

    #[test]
    fn random_joke_requests_root_and_shapes() {
        let api = jokes(200, r#"{"id":"abc","joke":"Ha.","status":200}"#);
        let joke = api.get_random_joke().unwrap();
        assert_eq!(joke.joke.joke.as_deref(), Some("Ha."));

        let requests = api.transport().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, "https://icanhazdadjoke.com/");
        assert_eq!(requests[0].header("accept"), Some("application/json"));
        assert_eq!(requests[0].header("user-agent"), Some("dad_jokes tests"));
    }

    #[test]
    fn random_slack_joke_requests_slack() {
        let body = r#"{"attachments":[{"fallback":"Ha.","footer":"f","text":"Ha."}],"response_type":"in_channel","username":"icanhazdadjoke"}"#;
        let api = jokes(200, body);
        let slack = api.get_random_slack_joke().unwrap();
        assert_eq!(slack.response_type.as_deref(), Some("in_channel"));
        assert_eq!(slack.attachments.unwrap().len(), 1);
        assert_eq!(api.transport().requests()[0].url, "https://icanhazdadjoke.com/slack");
    }

    #[test]
    fn get_joke_shapes_not_found_envelope() {
        let api = jokes(404, r#"{"message":"Joke with id \"nope\" not found","status":404}"#);
        let joke = api.get_joke("nope").unwrap();
        assert_eq!(joke.status, Some(404));
        assert!(joke.clone().into_result().is_err());
        assert_eq!(api.transport().requests()[0].url, "https://icanhazdadjoke.com/j/nope");
    }

    #[test]
    fn image_bytes_bypass_json() {
        let client = JokeClient::builder().user_agent("dad_jokes tests").build();
        let api = DadJokes::with_transport(client, RecordingTransport::new(200, b"\x89PNG\r\n\x1a\nrest"));
        let bytes = api.get_joke_image_bytes("abc").unwrap();
        assert_eq!(bytes, b"\x89PNG\r\n\x1a\nrest");
        assert_eq!(api.transport().requests()[0].url, "https://icanhazdadjoke.com/j/abc.png");
    }

    #[test]
    fn image_bytes_pass_through_error_body() {
        let body = br#"{"message":"Joke with id \"nope\" not found","status":404}"#;
        let client = JokeClient::builder().user_agent("dad_jokes tests").build();
        let api = DadJokes::with_transport(client, RecordingTransport::new(404, body));
        let bytes = api.get_joke_image_bytes("nope").unwrap();
        assert_eq!(bytes, body.to_vec());
        assert_eq!(api.transport().requests()[0].url, "https://icanhazdadjoke.com/j/nope.png");
    }

    #[test]
    fn searched_jokes_query_string() {
        let api = jokes(200, r#"{"current_page":2,"limit":5,"results":[],"search_term":"dad","status":200}"#);
        let page = api.get_searched_jokes("dad", 2, 5).unwrap();
        assert_eq!(page.current_page, Some(2));
        assert_eq!(
            api.transport().requests()[0].url,
            "https://icanhazdadjoke.com/search?term=dad&page=2&limit=5"
        );
    }

    #[test]
    fn searched_jokes_with_defaults() {
        let api = jokes(200, "{}");
        api.get_searched_jokes_with(&SearchQuery::new("cat")).unwrap();
        assert_eq!(
            api.transport().requests()[0].url,
            "https://icanhazdadjoke.com/search?term=cat&page=1&limit=20"
        );
    }

    #[test]
    fn send_request_json_parses_any_json() {
        let api = jokes(200, "[1,2,3]");
        let value = api.send_request_json("/anything").unwrap();
        assert_eq!(value, serde_json::json!([1, 2, 3]));
    }

    #[test]
    fn malformed_json_propagates() {
        let api = jokes(200, "Why did the chicken cross the road?");
        assert!(matches!(api.get_random_joke(), Err(Error::Json(_))));
    }

    #[test]
    fn transport_failure_propagates() {
        let api = DadJokes::with_transport(JokeClient::default(), FailingTransport);
        assert!(matches!(api.get_joke("x"), Err(Error::Io(_))));
        assert!(matches!(api.get_joke_image_bytes("x"), Err(Error::Io(_))));
    }

    #[test]
    fn one_request_per_call() {
        let api = jokes(200, "{}");
        api.get_random_joke().unwrap();
        api.get_random_joke().unwrap();
        assert_eq!(api.transport().requests().len(), 2);
    }

    #[test]
    fn configured_user_agent_suppresses_warning() {
        let api = jokes(200, "{}");
        let logs = captured_logs(|| {
            api.get_random_joke().unwrap();
        });
        assert!(!logs.contains("please set a user agent"), "{logs}");
    }

    #[test]
    fn default_user_agent_warns_per_request() {
        let api = DadJokes::with_transport(JokeClient::default(), RecordingTransport::new(200, b"{}"));
        let logs = captured_logs(|| {
            api.get_random_joke().unwrap();
        });
        assert!(logs.contains("please set a user agent"), "{logs}");
    }
}
