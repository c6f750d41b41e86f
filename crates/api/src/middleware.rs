use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

/// Log every request with its outcome and latency.
pub async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let started = Instant::now();

    let res = next.run(req).await;

    tracing::debug!(
        %method,
        %path,
        status = res.status().as_u16(),
        elapsed = ?started.elapsed(),
        "request handled"
    );
    res
}
