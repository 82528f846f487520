use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub const SITE_URL: &str = "https://icanhazdadjoke.com";

/// The real service caps search pages at this many results.
pub const MAX_SEARCH_LIMIT: usize = 30;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Joke {
    pub id: String,
    pub joke: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JokeEnvelope {
    pub id: String,
    pub joke: String,
    pub status: u16,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub message: String,
    pub status: u16,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SlackAttachment {
    pub fallback: String,
    pub footer: String,
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SlackEnvelope {
    pub attachments: Vec<SlackAttachment>,
    pub response_type: String,
    pub username: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchEnvelope {
    pub current_page: usize,
    pub limit: usize,
    pub next_page: usize,
    pub previous_page: usize,
    pub results: Vec<Joke>,
    pub search_term: String,
    pub status: u16,
    pub total_jokes: usize,
    pub total_pages: usize,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub term: String,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

pub type Catalogue = Arc<Vec<Joke>>;

/// The jokes served by `app()`.
pub fn default_jokes() -> Vec<Joke> {
    [
        ("R7UfaahVfFd", "My dog used to chase people on a bike a lot. It got so bad I had to take his bike away."),
        ("0189hNRf2g", "I'm tired of following my dreams. I'm just going to ask them where they are going and meet up with them later."),
        ("08EQZ8EQukb", "Did you hear about the guy whose whole left side was cut off? He's all right now."),
        ("0DtrrOZDlyd", "Why didn't the skeleton cross the road? Because he had no guts."),
        ("0LuXvkq4Muc", "What did one nut say as he chased another nut? I'm a cashew!"),
        ("0ga2EdN7prc", "How do you make a tissue dance? Put a little boogie in it."),
        ("1DQZDY0gVnb", "I used to hate facial hair, but then it grew on me."),
        ("2wkykjyIYDd", "What do you call a fake noodle? An impasta."),
    ]
    .into_iter()
    .map(|(id, joke)| Joke {
        id: id.to_string(),
        joke: joke.to_string(),
    })
    .collect()
}

pub fn app() -> Router {
    app_with(default_jokes())
}

pub fn app_with(jokes: Vec<Joke>) -> Router {
    let catalogue: Catalogue = Arc::new(jokes);
    Router::new()
        .route("/", get(random_joke))
        .route("/slack", get(random_slack_joke))
        .route("/j/{id}", get(joke_by_id))
        .route("/search", get(search_jokes))
        .layer(TraceLayer::new_for_http())
        .with_state(catalogue)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("application/json"))
}

fn pick(catalogue: &Catalogue) -> Option<&Joke> {
    catalogue.choose(&mut rand::thread_rng())
}

fn not_found(message: String) -> Response {
    let envelope = ErrorEnvelope {
        message,
        status: StatusCode::NOT_FOUND.as_u16(),
    };
    (StatusCode::NOT_FOUND, Json(envelope)).into_response()
}

async fn random_joke(State(catalogue): State<Catalogue>, headers: HeaderMap) -> Response {
    let Some(joke) = pick(&catalogue) else {
        return not_found("No jokes available".to_string());
    };
    if !wants_json(&headers) {
        return joke.joke.clone().into_response();
    }
    Json(JokeEnvelope {
        id: joke.id.clone(),
        joke: joke.joke.clone(),
        status: StatusCode::OK.as_u16(),
    })
    .into_response()
}

async fn random_slack_joke(State(catalogue): State<Catalogue>) -> Response {
    let Some(joke) = pick(&catalogue) else {
        return not_found("No jokes available".to_string());
    };
    let attachment = SlackAttachment {
        fallback: joke.joke.clone(),
        footer: format!(
            "<{SITE_URL}/j/{id}|permalink> - <{SITE_URL}|icanhazdadjoke.com>",
            id = joke.id
        ),
        text: joke.joke.clone(),
    };
    Json(SlackEnvelope {
        attachments: vec![attachment],
        response_type: "in_channel".to_string(),
        username: "icanhazdadjoke".to_string(),
    })
    .into_response()
}

/// Serves both `/j/{id}` and `/j/{id}.png`; axum captures the suffix as part
/// of the id segment.
async fn joke_by_id(
    State(catalogue): State<Catalogue>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    if let Some(image_id) = id.strip_suffix(".png") {
        return joke_image(&catalogue, image_id);
    }
    let Some(joke) = catalogue.iter().find(|j| j.id == id) else {
        return not_found(format!("Joke with id \"{id}\" not found"));
    };
    if !wants_json(&headers) {
        return joke.joke.clone().into_response();
    }
    Json(JokeEnvelope {
        id: joke.id.clone(),
        joke: joke.joke.clone(),
        status: StatusCode::OK.as_u16(),
    })
    .into_response()
}

fn joke_image(catalogue: &Catalogue, id: &str) -> Response {
    if !catalogue.iter().any(|j| j.id == id) {
        return not_found(format!("Joke with id \"{id}\" not found"));
    }
    let mut body = PNG_SIGNATURE.to_vec();
    body.extend_from_slice(id.as_bytes());
    ([(header::CONTENT_TYPE, "image/png")], body).into_response()
}

async fn search_jokes(
    State(catalogue): State<Catalogue>,
    Query(params): Query<SearchParams>,
) -> Json<SearchEnvelope> {
    Json(search(&catalogue, params))
}

/// One page of case-insensitive substring matches.
pub fn search(jokes: &[Joke], params: SearchParams) -> SearchEnvelope {
    let needle = params.term.to_lowercase();
    let matches: Vec<&Joke> = jokes
        .iter()
        .filter(|j| j.joke.to_lowercase().contains(&needle))
        .collect();

    let limit = params.limit.unwrap_or(20).clamp(1, MAX_SEARCH_LIMIT);
    let page = params.page.unwrap_or(1).max(1);
    let total_jokes = matches.len();
    let total_pages = total_jokes.div_ceil(limit).max(1);

    let results = matches
        .into_iter()
        .skip(page.saturating_sub(1).saturating_mul(limit))
        .take(limit)
        .cloned()
        .collect();

    SearchEnvelope {
        current_page: page,
        limit,
        next_page: page.saturating_add(1).min(total_pages),
        previous_page: page.saturating_sub(1).max(1),
        results,
        search_term: params.term,
        status: StatusCode::OK.as_u16(),
        total_jokes,
        total_pages,
    }
}
