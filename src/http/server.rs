//! HTTP server setup and the per-request pipeline.
//!
//! # Responsibilities
//! - Create the axum Router with the catch-all gateway handler
//! - Wire up middleware (tracing, timeout, request ID)
//! - Run the per-request flow: session continuity → classification →
//!   root dispatch → route resolution → handler registry
//! - Serve with graceful shutdown
//!
//! # Design Decisions
//! - AppState holds only immutable Arcs; no locks on the request path
//! - The handler registry here is the minimal collaborator set (entry
//!   points, sitemap, account, service activation); real rendering is an
//!   external concern
//! - NoMatch and expired sessions are normal outcomes, logged at debug

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderValue, Request, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::any,
    Json, Router,
};
use chrono::Utc;
use tokio::net::TcpListener;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::client::profile::ClientProfile;
use crate::client::support::SupportMatrix;
use crate::config::schema::{DispatchConfig, GatewayConfig, SessionConfig};
use crate::dispatch::rewrite::dispatch;
use crate::http::request::{request_id, request_meta, session_cookie, GatewayRequestId};
use crate::lifecycle::shutdown::{wait_for_signal, Shutdown};
use crate::observability::metrics;
use crate::routing::registry::{default_routes, handler, Resolution, RouteRegistry};
use crate::session::continuity::{maybe_renew, Renewal};
use crate::session::token::SessionToken;

/// Application state injected into the handler. Built once at startup;
/// every field is immutable and safe for unsynchronized concurrent reads.
#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteRegistry>,
    pub matrix: Arc<SupportMatrix>,
    pub dispatch: Arc<DispatchConfig>,
    pub session: Arc<SessionConfig>,
}

/// HTTP server for the gateway.
pub struct GatewayServer {
    router: Router,
    config: GatewayConfig,
}

impl GatewayServer {
    /// Create a new server with the given configuration.
    pub fn new(config: GatewayConfig) -> Self {
        let state = AppState {
            routes: Arc::new(default_routes(&config.dispatch)),
            matrix: Arc::new(SupportMatrix::new(config.support_matrix.minimums.clone())),
            dispatch: Arc::new(config.dispatch.clone()),
            session: Arc::new(config.session.clone()),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the axum router with all middleware layers.
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(gateway_handler))
            .route("/", any(gateway_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(GatewayRequestId))
            .layer(TraceLayer::new_for_http())
    }

    /// The assembled application, for in-process testing.
    pub fn app(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Run the server, accepting connections until Ctrl+C.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let shutdown = Shutdown::new();

        let signal = shutdown.clone();
        tokio::spawn(async move {
            wait_for_signal().await;
            signal.trigger();
        });

        self.run_with_shutdown(listener, shutdown).await
    }

    /// Run the server, stopping gracefully when the coordinator fires.
    pub async fn run_with_shutdown(
        self,
        listener: TcpListener,
        shutdown: Shutdown,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "Gateway starting");

        let mut rx = shutdown.subscribe();
        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = rx.recv().await;
                tracing::info!("Draining connections");
            })
            .await?;

        tracing::info!("Gateway stopped");
        Ok(())
    }
}

/// The per-request pipeline.
async fn gateway_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start = Instant::now();
    let request_id = request_id(&request);

    // Session continuity runs first, independent of routing. The cookie's
    // presence is the token event; absence means nothing to do.
    let reissue = evaluate_session(&state, &request, &request_id);

    let meta = request_meta(&request);
    let profile = ClientProfile::classify(&meta);

    let target = dispatch(&meta.path, &profile, &state.matrix, &state.dispatch);
    if target.is_rewritten() {
        tracing::debug!(
            request_id = %request_id,
            target = %target.path(),
            "Root rewritten"
        );
    }

    let mut response = match state.routes.resolve(target.path(), &profile) {
        Some(resolution) => {
            tracing::debug!(
                request_id = %request_id,
                path = %meta.path,
                handler = %resolution.handler,
                "Route resolved"
            );
            let response = invoke_handler(&resolution);
            metrics::record_request(resolution.handler.0, response.status().as_u16(), start);
            response
        }
        None => {
            // Normal outcome: the caller-facing not-found path.
            tracing::debug!(request_id = %request_id, path = %meta.path, "No route matched");
            metrics::record_request("none", 404, start);
            (StatusCode::NOT_FOUND, "No matching route found").into_response()
        }
    };

    if let Some(cookie) = reissue {
        if let Ok(value) = HeaderValue::from_str(&cookie) {
            response.headers_mut().insert(header::SET_COOKIE, value);
        }
    }

    response
}

/// Apply the sliding-renewal policy to an inbound session cookie.
/// Returns the Set-Cookie value to attach when the credential must be
/// reissued.
fn evaluate_session(state: &AppState, request: &Request<Body>, request_id: &str) -> Option<String> {
    let value = session_cookie(request, &state.session.cookie_name)?;

    let token = match SessionToken::decode(&value) {
        Ok(token) => token,
        Err(e) => {
            // Malformed credential: drop it and let authentication restart.
            tracing::debug!(request_id = %request_id, error = %e, "Undecodable session cookie");
            return None;
        }
    };

    match maybe_renew(&token, Utc::now(), state.session.renewal_window()) {
        Renewal::Renewed {
            token,
            reissue_credential,
        } => {
            metrics::record_session_renewal(true);
            reissue_credential.then(|| reissue_cookie(&state.session.cookie_name, &token))
        }
        Renewal::Unchanged => {
            metrics::record_session_renewal(false);
            None
        }
    }
}

/// Build the Set-Cookie value carrying a renewed token.
fn reissue_cookie(name: &str, token: &SessionToken) -> String {
    let mut cookie = format!("{name}={}; Path=/; HttpOnly; SameSite=Lax", token.encode());
    if token.is_persistent {
        let max_age = (token.valid_to - token.issued_at).num_seconds();
        cookie.push_str(&format!("; Max-Age={max_age}"));
    }
    cookie
}

/// Minimal handler registry. These render placeholder bodies for the
/// external collaborators named by the route table.
fn invoke_handler(resolution: &Resolution) -> Response {
    let h = resolution.handler;
    if h == handler::RICH_CLIENT {
        Html(rich_client_page(resolution)).into_response()
    } else if h == handler::CRAWLER_RENDERING {
        Html(crawler_page(resolution)).into_response()
    } else if h == handler::FALLBACK {
        Html(FALLBACK_PAGE.to_string()).into_response()
    } else if h == handler::SITEMAP {
        (
            [(header::CONTENT_TYPE, "application/xml")],
            SITEMAP_DOCUMENT,
        )
            .into_response()
    } else if h == handler::ACCOUNT {
        Json(serde_json::json!({
            "controller": "account",
            "action": resolution.params.get("action"),
        }))
        .into_response()
    } else if h == handler::SERVICE {
        Json(serde_json::json!({ "service": "collection", "status": "active" })).into_response()
    } else {
        (StatusCode::NOT_FOUND, "Handler not registered").into_response()
    }
}

/// Placeholder names in hierarchy order, for reassembling the content path.
const HIERARCHY: [&str; 6] = [
    "supercollection",
    "collection",
    "timelineTitle",
    "exhibitTitle",
    "contentItemTitle",
    "reference",
];

fn rich_client_page(resolution: &Resolution) -> String {
    let crumbs: Vec<&str> = HIERARCHY
        .iter()
        .filter_map(|name| resolution.params.get(*name).map(String::as_str))
        .collect();
    format!(
        "<!DOCTYPE html><html><head><title>Collection Explorer</title></head>\
         <body data-path=\"{}\"></body></html>",
        crumbs.join("/")
    )
}

fn crawler_page(resolution: &Resolution) -> String {
    let mut items = String::new();
    for (name, value) in &resolution.params {
        items.push_str(&format!("<li>{name}: {value}</li>"));
    }
    format!(
        "<!DOCTYPE html><html><head><title>Collection Index</title></head>\
         <body><ul>{items}</ul></body></html>"
    )
}

const FALLBACK_PAGE: &str = "<!DOCTYPE html><html><head><title>Browser Not Supported</title></head>\
     <body><p>Your browser version is not supported. Please upgrade.</p></body></html>";

const SITEMAP_DOCUMENT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9"></urlset>"#;
