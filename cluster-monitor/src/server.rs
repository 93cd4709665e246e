//! HTTP endpoint serving cluster snapshots to visualization clients.
use axum::extract::State;
use axum::http::header::{ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tracing::*;

use crate::cluster::ClusterStateProvider;
use crate::error::{Error, Result};
use crate::monitor::ClusterMonitor;

/// Path of the snapshot endpoint.
pub const CLUSTER_STATE_PATH: &str = "/cluster-state";

const CLUSTER_STATE_CONTENT_TYPE: &str = "application/javascript; charset=utf-8";

/// Creates the monitor router. Only the snapshot endpoint is served; every other path results in
/// `404 Not Found`.
pub fn router<P: ClusterStateProvider + 'static>(monitor: Arc<ClusterMonitor<P>>) -> Router {
    Router::new()
        .route(CLUSTER_STATE_PATH, get(cluster_state::<P>))
        .fallback(not_found)
        .with_state(monitor)
}

/// Responds with a freshly built snapshot, or `500 Internal Server Error` if the snapshot cannot
/// be built.
pub async fn cluster_state<P: ClusterStateProvider>(
    State(monitor): State<Arc<ClusterMonitor<P>>>,
) -> Response {
    info!(path = CLUSTER_STATE_PATH, "HTTP request");

    match monitor
        .snapshot()
        .and_then(|snapshot| snapshot.to_json_pretty())
    {
        Ok(body) => (
            StatusCode::ACCEPTED,
            [
                (CONTENT_TYPE, CLUSTER_STATE_CONTENT_TYPE),
                (ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            ],
            body,
        )
            .into_response(),
        Err(error) => {
            error!(%error, "Error building cluster state response.");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn not_found(uri: Uri) -> StatusCode {
    info!(path = uri.path(), "HTTP request");
    StatusCode::NOT_FOUND
}

/// Handle to a running monitor server.
#[derive(Debug)]
pub struct MonitorServerHandle {
    local_addr: SocketAddr,
    shutdown_sender: oneshot::Sender<()>,
    task: JoinHandle<io::Result<()>>,
}

impl MonitorServerHandle {
    /// Address the server listens on.
    #[inline]
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Stops accepting connections and waits for in-flight requests to finish.
    pub async fn shutdown(self) -> Result<()> {
        // the server might have already stopped on its own
        let _ = self.shutdown_sender.send(());

        self.task
            .await
            .map_err(|error| Error::General(format!("Monitor server task failed: {error}")))?
            .map_err(Into::into)
    }
}

/// Starts serving snapshots on the local node's monitor port, as determined by
/// [`MonitorConfig::http_port`](crate::config::MonitorConfig::http_port). Returns `None` without
/// starting anything if the local node is outside of the valid range.
pub async fn start<P: ClusterStateProvider + 'static>(
    monitor: ClusterMonitor<P>,
) -> Result<Option<MonitorServerHandle>> {
    let Some(port) = monitor.http_port()? else {
        info!("Local node is outside of the valid port range - not starting HTTP server.");
        return Ok(None);
    };

    let bind_host = monitor.config().bind_host().to_string();
    let bind_timeout = monitor.config().bind_timeout();

    let listener = timeout(bind_timeout, TcpListener::bind((bind_host.as_str(), port)))
        .await
        .map_err(|_| {
            Error::Timeout(format!(
                "Binding monitor HTTP server to {bind_host}:{port} took longer than {bind_timeout:?}"
            ))
        })??;

    let local_addr = listener.local_addr()?;
    let app = router(Arc::new(monitor));

    let (shutdown_sender, shutdown_receiver) = oneshot::channel::<()>();
    let task = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown_receiver.await;
            })
            .await
    });

    info!(%local_addr, "HTTP server started.");

    Ok(Some(MonitorServerHandle {
        local_addr,
        shutdown_sender,
        task,
    }))
}
