//! In-process fake of the TMDB HTTP API.
//!
//! Serves canned JSON per path from an axum server bound to `127.0.0.1:0` and
//! records every request path, so importer tests run without the network.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use serde_json::Value;
use tokio::task::JoinHandle;

#[derive(Default)]
struct Routes {
    responses: HashMap<String, (StatusCode, Value)>,
    hits: Mutex<Vec<RecordedRequest>>,
}

/// A request the fake server received.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
}

/// Builder for [`FakeTmdb`].
#[derive(Default)]
pub struct FakeTmdbBuilder {
    responses: HashMap<String, (StatusCode, Value)>,
}

impl FakeTmdbBuilder {
    /// Answer `GET path` with 200 and `body`.
    pub fn route(mut self, path: &str, body: Value) -> Self {
        self.responses
            .insert(path.to_owned(), (StatusCode::OK, body));
        self
    }

    /// Answer `GET path` with `status` and a TMDB-style error body.
    pub fn failing(mut self, path: &str, status: StatusCode) -> Self {
        let body = serde_json::json!({
            "success": false,
            "status_message": "The resource you requested could not be found.",
        });
        self.responses.insert(path.to_owned(), (status, body));
        self
    }

    pub async fn start(self) -> FakeTmdb {
        let routes = Arc::new(Routes {
            responses: self.responses,
            hits: Mutex::new(Vec::new()),
        });
        let app = Router::new()
            .fallback(serve)
            .with_state(Arc::clone(&routes));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .unwrap();
        let addr = listener.local_addr().unwrap();
        let task = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        FakeTmdb {
            base_url: format!("http://{addr}"),
            routes,
            task,
        }
    }
}

/// Running fake server. Aborted on drop.
pub struct FakeTmdb {
    base_url: String,
    routes: Arc<Routes>,
    task: JoinHandle<()>,
}

impl FakeTmdb {
    pub fn builder() -> FakeTmdbBuilder {
        FakeTmdbBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.routes.hits.lock().unwrap().clone()
    }

    /// How many times `path` was requested.
    pub fn hits(&self, path: &str) -> usize {
        self.requests().iter().filter(|r| r.path == path).count()
    }
}

impl Drop for FakeTmdb {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn serve(State(routes): State<Arc<Routes>>, headers: HeaderMap, uri: Uri) -> Response {
    let path = uri.path().to_owned();
    routes.hits.lock().unwrap().push(RecordedRequest {
        path: path.clone(),
        query: uri.query().map(str::to_owned),
        authorization: headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned),
    });
    match routes.responses.get(&path) {
        Some((status, body)) => (*status, Json(body.clone())).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "success": false })),
        )
            .into_response(),
    }
}
