//! Fake station admin backend for development and testing.
//!
//! Serves canned responses over real HTTP on a loopback port, so a
//! `StationClient` pointed at it goes through its full request and decode
//! path. Every request is recorded for later inspection.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

/// What FastAPI answers for a path it has no route for.
const NOT_FOUND_BODY: &str = r#"{"detail":"Not Found"}"#;

#[derive(Default)]
struct Routes {
    /// Canned responses, keyed by exact path and query.
    canned: HashMap<String, (StatusCode, String)>,
    /// Every path and query received, in arrival order.
    seen: Vec<String>,
}

type SharedRoutes = Arc<RwLock<Routes>>;

/// In-process HTTP server standing in for the station admin API.
///
/// The server task is stopped when the backend is dropped.
pub struct MockBackend {
    addr: SocketAddr,
    routes: SharedRoutes,
    task: JoinHandle<()>,
}

impl MockBackend {
    /// Bind to a free loopback port and start serving.
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let routes = SharedRoutes::default();

        let app = Router::new()
            .fallback(serve_canned)
            .with_state(routes.clone());

        let task = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!("mock backend stopped: {e}");
            }
        });

        tracing::debug!(%addr, "mock backend listening");

        Ok(Self { addr, routes, task })
    }

    /// Base URL to hand to `StationClientConfig`.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Serve `body` with `status` for requests to exactly `path`.
    ///
    /// `path` includes the query string, if any. Registering the same path
    /// again replaces the earlier response.
    pub async fn respond(&self, path: impl Into<String>, status: StatusCode, body: impl Into<String>) {
        let mut routes = self.routes.write().await;
        routes.canned.insert(path.into(), (status, body.into()));
    }

    /// Paths requested so far, oldest first.
    pub async fn requests(&self) -> Vec<String> {
        self.routes.read().await.seen.clone()
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn serve_canned(State(routes): State<SharedRoutes>, uri: Uri) -> Response {
    let key = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());

    let (status, body) = {
        let mut routes = routes.write().await;
        routes.seen.push(key.clone());
        routes
            .canned
            .get(&key)
            .cloned()
            .unwrap_or_else(|| (StatusCode::NOT_FOUND, NOT_FOUND_BODY.to_string()))
    };

    let content_type = if serde_json::from_str::<serde_json::Value>(&body).is_ok() {
        "application/json"
    } else {
        "text/plain; charset=utf-8"
    };

    (status, [(header::CONTENT_TYPE, content_type)], body).into_response()
}
