use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use tracing::{error, info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_DIR: &str = "storage/logs";

pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let matched_path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let request_id = uuid::Uuid::new_v4().to_string();

    info!(
        request_id = %request_id,
        method = %method,
        path = %matched_path,
        "Incoming request"
    );

    let response = next.run(req).await;
    let latency_ms = start.elapsed().as_millis() as u64;
    let status = response.status().as_u16();

    match status {
        400..=499 => warn!(
            request_id = %request_id,
            method = %method,
            path = %matched_path,
            status,
            latency_ms,
            "Client error"
        ),
        500..=599 => error!(
            request_id = %request_id,
            method = %method,
            path = %matched_path,
            status,
            latency_ms,
            "Server error"
        ),
        _ => info!(
            request_id = %request_id,
            method = %method,
            path = %matched_path,
            status,
            latency_ms,
            "Request completed"
        ),
    }

    response
}

fn console_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}=info,tower_http=warn,sqlx=warn",
            env!("CARGO_CRATE_NAME")
        ))
    })
}

/// Console output (`LOG_FORMAT=json` or pretty) plus two daily files under
/// `LOG_DIR`: `campusdesk.log` for errors and `campusdesk.json` for
/// structured info-level events.
pub fn init_tracing() -> anyhow::Result<()> {
    let log_dir = std::env::var("LOG_DIR").unwrap_or_else(|_| DEFAULT_LOG_DIR.to_string());
    std::fs::create_dir_all(&log_dir)?;

    let json_console = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let console_json_layer = json_console.then(|| {
        fmt::layer()
            .json()
            .with_current_span(true)
            .with_filter(console_filter())
    });

    let console_pretty_layer = (!json_console).then(|| {
        fmt::layer()
            .with_target(false)
            .with_file(true)
            .with_line_number(true)
            .compact()
            .with_filter(console_filter())
    });

    let file_layer = fmt::layer()
        .with_writer(RollingFileAppender::new(
            Rotation::DAILY,
            &log_dir,
            "campusdesk.log",
        ))
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false)
        .with_filter(EnvFilter::new("error"));

    let json_layer = fmt::layer()
        .json()
        .with_writer(RollingFileAppender::new(
            Rotation::DAILY,
            &log_dir,
            "campusdesk.json",
        ))
        .with_current_span(true)
        .with_span_list(true)
        .with_filter(EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(console_json_layer)
        .with(console_pretty_layer)
        .with(file_layer)
        .with(json_layer)
        .try_init()?;

    info!(log_dir = %log_dir, "Tracing initialized");
    Ok(())
}
