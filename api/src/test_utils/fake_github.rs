//! Fake GitHub search endpoint
//!
//! A real HTTP server on an ephemeral localhost port, so adapter and router
//! tests exercise reqwest end to end (status codes, bodies, timeouts).

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    body::Body,
    extract::{Query, State},
    http::{header, HeaderMap, Response, StatusCode},
    routing::get,
    Router,
};

/// What the fake saw for one request
#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub query: HashMap<String, String>,
    pub accept: Option<String>,
    pub user_agent: Option<String>,
}

#[derive(Clone)]
pub struct FakeGitHub {
    status: u16,
    body: String,
    headers: Vec<(&'static str, &'static str)>,
    delay: Option<Duration>,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

impl FakeGitHub {
    pub fn with_body(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            headers: Vec::new(),
            delay: None,
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_header(mut self, name: &'static str, value: &'static str) -> Self {
        self.headers.push((name, value));
        self
    }

    /// Sleep before answering
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn requests(&self) -> Vec<SeenRequest> {
        self.seen.lock().unwrap().clone()
    }
}

async fn search_issues(
    State(fake): State<FakeGitHub>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response<Body> {
    let header_str = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    fake.seen.lock().unwrap().push(SeenRequest {
        query,
        accept: header_str(header::ACCEPT),
        user_agent: header_str(header::USER_AGENT),
    });

    if let Some(delay) = fake.delay {
        tokio::time::sleep(delay).await;
    }

    let mut builder = Response::builder()
        .status(StatusCode::from_u16(fake.status).unwrap())
        .header(header::CONTENT_TYPE, "application/json");
    for (name, value) in &fake.headers {
        builder = builder.header(*name, *value);
    }
    builder.body(Body::from(fake.body.clone())).unwrap()
}

/// Serve `fake` on localhost and return its base URL
pub async fn spawn_fake_github(fake: FakeGitHub) -> String {
    let app = Router::new()
        .route("/search/issues", get(search_issues))
        .with_state(fake);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}
