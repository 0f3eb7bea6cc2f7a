//! Server lifecycle: serve until a shutdown signal or a server failure,
//! then drain in-flight requests for a bounded time.
//!
//! Connections are driven by hyper's HTTP/1 builder directly so the read
//! buffer can hold the full 1 MiB header block that
//! `middleware::limits` allows.

use std::{future::Future, time::Duration};

use axum::Router;
use hyper::{Request, body::Incoming, server::conn::http1};
use hyper_util::{
    rt::{TokioIo, TokioTimer},
    server::graceful::GracefulShutdown,
};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower::Service;
use tracing::{debug, error, info, warn};

use crate::{middleware::limits::MAX_HEADER_BYTES, routes::REQUEST_TIMEOUT};

/// How long in-flight requests may take to finish once shutdown starts.
pub const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// Per-connection read buffer: the header limit plus room for the request line.
const MAX_BUF_SIZE: usize = MAX_HEADER_BYTES + 64 * 1024;

/// Resolves on SIGINT (Ctrl+C) or, on Unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("received SIGINT"),
        () = terminate => info!("received SIGTERM"),
    }
}

/// Serve `app` on `listener` until `shutdown` resolves or the server fails.
///
/// Once shutdown starts, in-flight requests get `drain_timeout` to finish;
/// after that they are abandoned. Neither a server failure nor a drain
/// timeout is returned as an error, both are only logged.
pub async fn run<F>(listener: TcpListener, app: Router, shutdown: F, drain_timeout: Duration)
where
    F: Future<Output = ()> + Send,
{
    let token = CancellationToken::new();
    let mut server = tokio::spawn(serve_connections(listener, app, token.clone()));

    tokio::select! {
        result = &mut server => {
            match result {
                Ok(()) => warn!("server stopped without a shutdown request"),
                Err(err) => error!(error = %err, "server task failed"),
            }
            return;
        }
        () = shutdown => {}
    }

    info!("shutting down the server");
    token.cancel();

    match tokio::time::timeout(drain_timeout, server).await {
        Ok(Ok(())) => info!("server stopped"),
        Ok(Err(err)) => error!(error = %err, "server task failed during shutdown"),
        Err(_) => warn!(
            timeout = ?drain_timeout,
            "server shutdown timed out, abandoning in-flight requests"
        ),
    }
}

/// Accept connections until `token` is cancelled, then wait for the open
/// ones to finish their in-flight requests.
async fn serve_connections(listener: TcpListener, app: Router, token: CancellationToken) {
    let mut builder = http1::Builder::new();
    builder
        .timer(TokioTimer::new())
        .header_read_timeout(REQUEST_TIMEOUT)
        .max_buf_size(MAX_BUF_SIZE);
    let graceful = GracefulShutdown::new();

    loop {
        let (socket, remote_addr) = tokio::select! {
            accepted = listener.accept() => match accepted {
                Ok(accepted) => accepted,
                Err(err) => {
                    // usually fd exhaustion; back off instead of spinning
                    error!(error = %err, "failed to accept connection");
                    tokio::time::sleep(Duration::from_secs(1)).await;
                    continue;
                }
            },
            () = token.cancelled() => break,
        };

        let tower_service = app.clone();
        let hyper_service = hyper::service::service_fn(move |request: Request<Incoming>| {
            tower_service.clone().call(request)
        });

        let connection =
            graceful.watch(builder.serve_connection(TokioIo::new(socket), hyper_service));
        tokio::spawn(async move {
            if let Err(err) = connection.await {
                debug!(%remote_addr, error = %err, "connection closed with error");
            }
        });
    }

    drop(listener);
    graceful.shutdown().await;
}
