use axum::body::{Body, HttpBody};
use axum::http::{header, Request};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Utc;

/// Logs one line per request: UTC time, duration, body size, status, method
/// and path. The body is passed through untouched.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;

    let size = response_size(&response).map_or_else(|| "streamed".to_string(), format_size);
    let status = response.status();
    let line = format!(
        "{} | {:>5}ms | {:>12} | {} {:>6} {}",
        Utc::now().format("%H:%M:%S"),
        start.elapsed().as_millis(),
        size,
        status.as_u16(),
        method,
        uri.path()
    );
    if status.is_success() {
        tracing::info!("{line}");
    } else {
        tracing::warn!("{line}");
    }

    response
}

/// Body size from `content-length`, else from an exact size hint.
pub fn response_size(response: &Response) -> Option<u64> {
    response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .or_else(|| response.body().size_hint().exact())
}

/// Byte count with dot-separated thousands, e.g. `12.345 B`.
pub fn format_size(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped.push_str(" B");
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(999), "999 B");
        assert_eq!(format_size(1000), "1.000 B");
        assert_eq!(format_size(1234567), "1.234.567 B");
    }

    #[test]
    fn test_response_size_without_buffering() {
        let declared = Response::builder()
            .header(header::CONTENT_LENGTH, "1234")
            .body(Body::empty())
            .unwrap();
        assert_eq!(response_size(&declared), Some(1234));

        let full = Response::new(Body::from("hello"));
        assert_eq!(response_size(&full), Some(5));
    }
}
