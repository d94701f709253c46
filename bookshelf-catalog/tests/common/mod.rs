//! Local stand-in for the Google Books volumes endpoint.
//!
//! Each [`CatalogStub`] runs an axum server on its own thread and runtime so
//! the blocking catalog client can be driven from a plain `#[test]`.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::extract::{RawQuery, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::get;
use tokio::sync::oneshot;

pub const VOLUMES_PATH: &str = "/books/v1/volumes";

struct Reply {
    status: StatusCode,
    body: String,
    delay: Option<Duration>,
    queries: Mutex<Vec<String>>,
}

/// A running stub. Shuts the server down when dropped.
pub struct CatalogStub {
    /// Full volumes endpoint URL, ready for `CatalogConfig::endpoint`.
    pub endpoint: String,
    reply: Arc<Reply>,
    _shutdown_tx: oneshot::Sender<()>,
}

impl CatalogStub {
    /// Answer every volumes request with `status` and a JSON `body`.
    pub fn spawn(status: u16, body: &str) -> Self {
        Self::start(status, body, None)
    }

    /// Accept requests but hold the response for `delay`.
    pub fn spawn_slow(delay: Duration) -> Self {
        Self::start(200, r#"{"items":[]}"#, Some(delay))
    }

    /// Raw query strings received so far, in arrival order.
    pub fn queries(&self) -> Vec<String> {
        self.reply.queries.lock().unwrap().clone()
    }

    fn start(status: u16, body: &str, delay: Option<Duration>) -> Self {
        let reply = Arc::new(Reply {
            status: StatusCode::from_u16(status).expect("valid status code"),
            body: body.to_string(),
            delay,
            queries: Mutex::new(Vec::new()),
        });

        let listener =
            std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind to random port");
        listener
            .set_nonblocking(true)
            .expect("Failed to make listener non-blocking");
        let addr: SocketAddr = listener.local_addr().expect("Failed to get local address");

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let app = Router::new()
            .route(VOLUMES_PATH, get(volumes))
            .with_state(reply.clone());

        std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("Failed to build test runtime");
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::from_std(listener)
                    .expect("Failed to adopt listener");
                axum::serve(listener, app)
                    .with_graceful_shutdown(async {
                        shutdown_rx.await.ok();
                    })
                    .await
                    .expect("Stub server failed");
            });
        });

        Self {
            endpoint: format!("http://{addr}{VOLUMES_PATH}"),
            reply,
            _shutdown_tx: shutdown_tx,
        }
    }
}

async fn volumes(State(reply): State<Arc<Reply>>, RawQuery(query): RawQuery) -> impl IntoResponse {
    reply
        .queries
        .lock()
        .unwrap()
        .push(query.unwrap_or_default());
    if let Some(delay) = reply.delay {
        tokio::time::sleep(delay).await;
    }
    (
        reply.status,
        [(header::CONTENT_TYPE, "application/json")],
        reply.body.clone(),
    )
}

/// An endpoint on a port nothing is listening on.
pub fn closed_endpoint() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get local address");
    drop(listener);
    format!("http://{addr}{VOLUMES_PATH}")
}
