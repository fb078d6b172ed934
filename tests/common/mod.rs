//! In-process mock of the Energi Data Service API.
//!
//! Every request, whatever the path, is answered with one canned status and body,
//! and recorded (path, decoded query, `Accept` header) for later inspection.
#![allow(dead_code)]

use axum::{
    Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, Uri, header},
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub struct Captured {
    pub path: String,
    pub raw_query: Option<String>,
    pub params: HashMap<String, String>,
    pub accept: Option<String>,
}

struct MockState {
    status: StatusCode,
    body: String,
    requests: Mutex<Vec<Captured>>,
}

pub struct MockApi {
    pub base_url: String,
    state: Arc<MockState>,
}

impl MockApi {
    pub fn requests(&self) -> Vec<Captured> {
        self.state.requests.lock().unwrap().clone()
    }
}

/// Start the mock on a random local port and return its base URL.
pub fn spawn(status: u16, body: &str) -> MockApi {
    let state = Arc::new(MockState {
        status: StatusCode::from_u16(status).unwrap(),
        body: body.to_string(),
        requests: Mutex::new(Vec::new()),
    });

    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    let app = Router::new().fallback(handle).with_state(state.clone());
    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            axum::serve(listener, app).await
        })
        .unwrap();
    });

    MockApi {
        base_url: format!("http://{addr}"),
        state,
    }
}

/// A base URL nothing listens on.
pub fn dead_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

async fn handle(
    State(state): State<Arc<MockState>>,
    uri: Uri,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    state.requests.lock().unwrap().push(Captured {
        path: uri.path().to_string(),
        raw_query: uri.query().map(str::to_string),
        params,
        accept: headers
            .get(header::ACCEPT)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    });
    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.clone(),
    )
}
