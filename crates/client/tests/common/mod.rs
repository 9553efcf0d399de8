//! Shared stub image server for integration tests.
//!
//! Implements just enough of the server's HTTP surface to exercise the
//! client: challenge issuance, signature verification against a fixed
//! challenge, a cookie-carried session, and the scoped/unscoped resource
//! endpoints backed by in-memory state.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::Deserialize;
use url::Url;

use ::common::crypto::{PublicKey, Signature};
use pict_client::api::requests::Index;

/// The one challenge the stub ever issues (16 random-looking bytes).
pub const CHALLENGE: [u8; 16] = [
    0x8f, 0x1a, 0x42, 0x07, 0xd3, 0x5c, 0xee, 0x91, 0x0b, 0x77, 0xa4, 0x38, 0x62, 0xc9, 0x15, 0xf0,
];

const SESSION_COOKIE: &str = "session=stub-session";

#[derive(Clone, Default)]
pub struct StubServer {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    fail_challenge: bool,
    reject_auth: bool,
    auth_attempts: usize,
    // (identifier, topic, file name)
    images: Vec<(String, String, String)>,
    // (topic, tag)
    tags: Vec<(String, String)>,
    indexes: Vec<Index>,
}

impl StubServer {
    pub fn set_fail_challenge(&self, fail: bool) {
        self.inner.lock().unwrap().fail_challenge = fail;
    }

    pub fn set_reject_auth(&self, reject: bool) {
        self.inner.lock().unwrap().reject_auth = reject;
    }

    pub fn auth_attempts(&self) -> usize {
        self.inner.lock().unwrap().auth_attempts
    }

    pub fn images(&self) -> Vec<(String, String, String)> {
        self.inner.lock().unwrap().images.clone()
    }

    pub fn seed_image(&self, identifier: &str, topic: &str, name: &str) {
        self.inner.lock().unwrap().images.push((
            identifier.to_string(),
            topic.to_string(),
            name.to_string(),
        ));
    }

    pub fn tags(&self) -> Vec<(String, String)> {
        self.inner.lock().unwrap().tags.clone()
    }
}

/// Start the stub on an ephemeral port and return its base URL.
pub async fn spawn(state: StubServer) -> Url {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    Url::parse(&format!("http://{}", addr)).unwrap()
}

fn router(state: StubServer) -> Router {
    Router::new()
        .route("/generate-challenge", get(generate_challenge))
        .route("/authenticate", post(authenticate))
        .route("/all-indexes", get(all_indexes))
        .route("/new-index", post(new_index))
        .route("/index/:name", get(get_index))
        .route("/:topic/tags", get(list_tags))
        .route("/:topic/new-tag", post(new_tag))
        .route("/:topic/remove-tag", post(remove_tag))
        .route("/:id/:topic/images", get(list_images))
        .route("/:id/:topic/new-image", post(new_image))
        .with_state(state)
}

fn has_session(headers: &HeaderMap) -> bool {
    headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(|cookies| cookies.contains(SESSION_COOKIE))
        .unwrap_or(false)
}

async fn generate_challenge(State(state): State<StubServer>) -> Response {
    if state.inner.lock().unwrap().fail_challenge {
        return (StatusCode::INTERNAL_SERVER_ERROR, "challenge unavailable").into_response();
    }
    BASE64.encode(CHALLENGE).into_response()
}

#[derive(Debug, Deserialize)]
struct AuthBody {
    signature: Vec<u8>,
    public_key: String,
}

async fn authenticate(State(state): State<StubServer>, Json(body): Json<AuthBody>) -> Response {
    {
        let mut inner = state.inner.lock().unwrap();
        inner.auth_attempts += 1;
        if inner.reject_auth {
            return (StatusCode::UNAUTHORIZED, "rejected").into_response();
        }
    }

    let public_key = match PublicKey::from_base64(&body.public_key) {
        Ok(pk) => pk,
        Err(_) => return (StatusCode::BAD_REQUEST, "bad public key").into_response(),
    };
    let signature_bytes: [u8; 64] = match body.signature.as_slice().try_into() {
        Ok(bytes) => bytes,
        Err(_) => return (StatusCode::BAD_REQUEST, "bad signature length").into_response(),
    };
    let signature = Signature::from_bytes(&signature_bytes);

    if public_key.verify(&CHALLENGE, &signature).is_err() {
        return (StatusCode::UNAUTHORIZED, "bad signature").into_response();
    }

    let mut headers = HeaderMap::new();
    headers.insert(
        header::SET_COOKIE,
        format!("{}; Path=/", SESSION_COOKIE).parse().unwrap(),
    );
    (StatusCode::OK, headers, "ok").into_response()
}

async fn list_images(
    State(state): State<StubServer>,
    Path((id, topic)): Path<(String, String)>,
    headers: HeaderMap,
) -> Response {
    if !has_session(&headers) {
        return (StatusCode::UNAUTHORIZED, "no session").into_response();
    }

    let names: Vec<String> = state
        .inner
        .lock()
        .unwrap()
        .images
        .iter()
        .filter(|(i, t, _)| *i == id && *t == topic)
        .map(|(_, _, name)| name.clone())
        .collect();
    Json(names).into_response()
}

async fn new_image(
    State(state): State<StubServer>,
    Path((id, topic)): Path<(String, String)>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Response {
    if !has_session(&headers) {
        return (StatusCode::UNAUTHORIZED, "no session").into_response();
    }

    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.file_name().unwrap_or("unnamed").to_string();
        // Drain the body before recording
        let _bytes = field.bytes().await.unwrap();
        state
            .inner
            .lock()
            .unwrap()
            .images
            .push((id.clone(), topic.clone(), name));
    }
    (StatusCode::OK, "Success").into_response()
}

#[derive(Debug, Deserialize)]
struct TagBody {
    tag: String,
}

async fn list_tags(State(state): State<StubServer>, Path(topic): Path<String>) -> Response {
    let tags: Vec<String> = state
        .inner
        .lock()
        .unwrap()
        .tags
        .iter()
        .filter(|(t, _)| *t == topic)
        .map(|(_, tag)| tag.clone())
        .collect();
    Json(tags).into_response()
}

async fn new_tag(
    State(state): State<StubServer>,
    Path(topic): Path<String>,
    Json(body): Json<TagBody>,
) -> Response {
    state.inner.lock().unwrap().tags.push((topic, body.tag));
    (StatusCode::OK, "").into_response()
}

async fn remove_tag(
    State(state): State<StubServer>,
    Path(topic): Path<String>,
    Json(body): Json<TagBody>,
) -> Response {
    state
        .inner
        .lock()
        .unwrap()
        .tags
        .retain(|(t, tag)| !(*t == topic && *tag == body.tag));
    (StatusCode::OK, "").into_response()
}

async fn all_indexes(State(state): State<StubServer>) -> Response {
    let names: Vec<String> = state
        .inner
        .lock()
        .unwrap()
        .indexes
        .iter()
        .map(|index| index.name.clone())
        .collect();
    Json(names).into_response()
}

async fn get_index(State(state): State<StubServer>, Path(name): Path<String>) -> Response {
    let inner = state.inner.lock().unwrap();
    match inner.indexes.iter().find(|index| index.name == name) {
        Some(index) => Json(index.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, "no such index").into_response(),
    }
}

async fn new_index(State(state): State<StubServer>, Json(index): Json<Index>) -> Response {
    state.inner.lock().unwrap().indexes.push(index);
    (StatusCode::OK, "").into_response()
}
