use crate::logging;
use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue},
    middleware::{self, Next},
    response::Response,
    Router,
};
use log::LevelFilter;
use std::{
    io,
    net::SocketAddr,
    path::PathBuf,
    sync::atomic::{AtomicU64, Ordering},
    time::{Instant, SystemTime, UNIX_EPOCH},
};
use thiserror::Error;
use tower_http::services::{ServeDir, ServeFile};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DIST_DIR: &str = "dist";
const DEFAULT_ASSET_MAX_AGE_SECONDS: u64 = 3_600;
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

const ASSET_MAX_AGE_SECONDS_BOUNDS: (u64, u64) = (0, 365 * 24 * 60 * 60);
const REQUEST_ID_HEADER: &str = "x-request-id";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: SocketAddr,
        #[source]
        source: io::Error,
    },
    #[error("server stopped: {0}")]
    Serve(#[source] io::Error),
}

#[derive(Clone, Debug, PartialEq)]
pub struct HostConfig {
    pub port: u16,
    pub dist_dir: PathBuf,
    pub asset_max_age_seconds: u64,
    pub log_level: LevelFilter,
}

impl HostConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|value| value.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let dist_dir = non_empty(lookup("SITE_DIST_DIR"))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));
        let asset_max_age_seconds = parse_u64_with_bounds(
            lookup("SITE_ASSET_MAX_AGE_SECONDS"),
            DEFAULT_ASSET_MAX_AGE_SECONDS,
            ASSET_MAX_AGE_SECONDS_BOUNDS,
        );
        let log_level = non_empty(lookup("LOG_LEVEL"))
            .and_then(|value| logging::parse_level(&value))
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            port,
            dist_dir,
            asset_max_age_seconds,
            log_level,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_u64_with_bounds(value: Option<String>, default: u64, bounds: (u64, u64)) -> u64 {
    value
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

/// Static files from the dist directory; unknown paths get `index.html`.
pub fn router(config: &HostConfig) -> Router {
    let index = config.dist_dir.join("index.html");
    let static_service = ServeDir::new(&config.dist_dir).fallback(ServeFile::new(index));

    Router::new()
        .fallback_service(static_service)
        .layer(middleware::from_fn_with_state(
            config.asset_max_age_seconds,
            annotate_response,
        ))
}

pub async fn run(config: HostConfig) -> Result<(), ServerError> {
    let address = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|source| ServerError::Bind { address, source })?;

    let dist_dir = config.dist_dir.display().to_string();
    log::info!(port = config.port, dist_dir = dist_dir.as_str(); "server_listening");

    axum::serve(listener, router(&config))
        .await
        .map_err(ServerError::Serve)
}

async fn annotate_response(
    State(asset_max_age_seconds): State<u64>,
    request: Request,
    next: Next,
) -> Response {
    let started_at = Instant::now();
    let request_id = resolve_request_id(request.headers());
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;

    let cache = cache_control_for(response.headers(), asset_max_age_seconds);
    let headers = response.headers_mut();
    headers.insert(header::CACHE_CONTROL, cache);
    if let Ok(request_id_header) = HeaderValue::from_str(&request_id) {
        headers.insert(REQUEST_ID_HEADER, request_id_header);
    }

    log::info!(
        request_id = request_id.as_str(),
        method = method.as_str(),
        path = path.as_str(),
        status = response.status().as_u16(),
        duration_ms = started_at.elapsed().as_millis() as u64;
        "request_complete"
    );

    response
}

fn cache_control_for(headers: &HeaderMap, asset_max_age_seconds: u64) -> HeaderValue {
    let is_html = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("text/html"));

    if is_html {
        return HeaderValue::from_static("no-cache");
    }

    HeaderValue::from_str(&format!("public, max-age={asset_max_age_seconds}"))
        .unwrap_or_else(|_| HeaderValue::from_static("no-cache"))
}

fn now_unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis())
        .unwrap_or(0)
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("req-{}-{counter}", now_unix_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    let value = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string);

    value.unwrap_or_else(generate_request_id)
}
