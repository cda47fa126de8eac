// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Standalone HTTP server for processes that do not run their own router.

use crate::config::ServeConfig;
use crate::handler::monitor_routes;
use crate::registry::Registry;
use axum::Router;
use std::future::Future;
use std::io;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Bind `config.addr()` and serve the monitor endpoint until the process
/// exits.
pub async fn serve(config: &ServeConfig, registry: Arc<Registry>) -> io::Result<()> {
    config
        .validate()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

    let listener = TcpListener::bind(config.addr()).await?;
    serve_with_listener(listener, &config.path, registry).await
}

/// Serve the monitor endpoint on an already bound listener.
pub async fn serve_with_listener(
    listener: TcpListener,
    path: &str,
    registry: Arc<Registry>,
) -> io::Result<()> {
    serve_with_shutdown(listener, path, registry, std::future::pending()).await
}

/// Like [`serve_with_listener`], stopping gracefully once `signal` resolves.
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    path: &str,
    registry: Arc<Registry>,
    signal: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_router(path, registry);

    let addr = listener.local_addr()?;
    tracing::info!("Monitor endpoint: http://{}{}", addr, path);

    axum::serve(listener, app)
        .with_graceful_shutdown(signal)
        .await
}

/// Monitor routes with HTTP request tracing.
pub fn build_router(path: &str, registry: Arc<Registry>) -> Router {
    monitor_routes(path, registry).layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::MonitorFuncs;

    #[tokio::test]
    async fn test_serve_rejects_invalid_config() {
        let config = ServeConfig {
            port: 0,
            path: "monitors".into(),
            ..Default::default()
        };

        let err = serve(&config, Arc::new(Registry::new())).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(err.to_string().contains("path"));
    }

    #[tokio::test]
    async fn test_serve_with_listener_serves_registry() {
        let registry = Arc::new(Registry::new());
        registry.register(Arc::new(MonitorFuncs::new("runtime", || {}, || {}, || true)));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/debug/monitors", listener.local_addr().unwrap());
        let server = tokio::spawn(async move {
            serve_with_listener(listener, "/debug/monitors", registry).await
        });

        let states = tokio::task::spawn_blocking(move || crate::client::list_monitors(&url))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(states.get("runtime"), Some(&true));

        server.abort();
    }
}
