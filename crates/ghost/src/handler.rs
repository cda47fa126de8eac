// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! HTTP protocol handler for the monitor registry.
//!
//! One endpoint, dispatched on method:
//!
//! - `GET`  - JSON object of every monitor's current state
//! - `POST` - form `action=enable|disable&name=<monitor>` toggles one monitor
//! - anything else - 405

use crate::error::HandlerError;
use crate::protocol::{Action, ToggleForm};
use crate::registry::Registry;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, MethodRouter},
    Router,
};
use std::sync::Arc;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Method router serving the monitor protocol, ready to be mounted with
/// [`Router::route`] at any path.
///
/// ```no_run
/// # use std::sync::Arc;
/// # let registry = Arc::new(ghost::Registry::new());
/// let app: axum::Router = axum::Router::new()
///     .route("/monitors", ghost::monitor_handler(registry));
/// ```
pub fn monitor_handler<S>(registry: Arc<Registry>) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    // axum answers HEAD with the GET handler unless told otherwise.
    get(list_monitors)
        .post(switch_monitor)
        .head(method_not_allowed)
        .with_state(registry)
}

/// Router with the handler mounted at `path`.
pub fn monitor_routes(path: &str, registry: Arc<Registry>) -> Router {
    Router::new().route(path, monitor_handler(registry))
}

/// GET - snapshot of all monitors
async fn list_monitors(State(registry): State<Arc<Registry>>) -> Result<Response, HandlerError> {
    let states = registry.snapshot();
    let body = serde_json::to_vec(&states).map_err(|e| {
        tracing::error!("failed to encode monitor states: {}", e);
        HandlerError::Encode(e)
    })?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}

/// POST - enable or disable one monitor
async fn switch_monitor(
    State(registry): State<Arc<Registry>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, HandlerError> {
    if !has_form_content_type(&headers) {
        tracing::debug!("rejecting toggle request without a form content type");
        return Err(HandlerError::BadRequest(format!(
            "expected content type {}",
            FORM_CONTENT_TYPE
        )));
    }

    let form = ToggleForm::decode(&body).map_err(|e| {
        tracing::debug!("rejecting malformed toggle request: {}", e);
        HandlerError::BadRequest(e.to_string())
    })?;

    let Some(monitor) = registry.lookup(&form.name) else {
        tracing::debug!(monitor = %form.name, "toggle for unknown monitor");
        return Err(HandlerError::NotFound(form.name));
    };

    let action: Action = form.action.parse().map_err(|e| {
        tracing::debug!(monitor = %form.name, "rejecting toggle: {}", e);
        HandlerError::BadRequest(format!("{}", e))
    })?;

    // The registry lock is already released; the callback runs unguarded.
    match action {
        Action::Enable => monitor.enable(),
        Action::Disable => monitor.disable(),
    }
    tracing::info!(monitor = %form.name, %action, "monitor switched");

    Ok(StatusCode::OK)
}

fn has_form_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case(FORM_CONTENT_TYPE))
}

async fn method_not_allowed() -> StatusCode {
    StatusCode::METHOD_NOT_ALLOWED
}
