//! Request metadata extraction.
//!
//! # Responsibilities
//! - Pull the upstream device-detection capability headers into RequestMeta
//! - Extract the session cookie value when present
//!
//! # Design Decisions
//! - The gateway never parses user-agent strings itself; the device
//!   detection layer in front of it injects the capability headers
//! - Missing or malformed headers degrade (unknown browser, not a crawler),
//!   they never fail the request

use axum::body::Body;
use axum::http::{header, HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

use crate::client::profile::RequestMeta;

/// UUID v4 request IDs, set as early as possible for tracing.
#[derive(Clone, Copy, Default)]
pub struct GatewayRequestId;

impl MakeRequestId for GatewayRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Browser family injected by the device-detection layer.
pub const BROWSER_HEADER: &str = "x-client-browser";
/// Browser version injected by the device-detection layer.
pub const VERSION_HEADER: &str = "x-client-browser-version";
/// Crawler signal from the platform's client-capability inference.
pub const CRAWLER_HEADER: &str = "x-client-crawler";

/// Build the request metadata record the core subsystems work on.
pub fn request_meta(req: &Request<Body>) -> RequestMeta {
    let text = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    let is_crawler = text(CRAWLER_HEADER)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    RequestMeta {
        path: req.uri().path().to_string(),
        browser_family: text(BROWSER_HEADER),
        browser_version: text(VERSION_HEADER),
        is_crawler,
    }
}

/// Extract the named cookie's value from the Cookie header, if present.
pub fn session_cookie(req: &Request<Body>, name: &str) -> Option<String> {
    let header = req.headers().get(header::COOKIE)?.to_str().ok()?;
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}

/// Request ID placed by the request-id layer; "unknown" if absent.
pub fn request_id(req: &Request<Body>) -> String {
    req.headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_headers_extracted() {
        let req = Request::builder()
            .uri("http://gateway.test/cosmos")
            .header(BROWSER_HEADER, "Chrome")
            .header(VERSION_HEADER, "20.0")
            .header(CRAWLER_HEADER, "0")
            .body(Body::default())
            .unwrap();

        let meta = request_meta(&req);
        assert_eq!(meta.path, "/cosmos");
        assert_eq!(meta.browser_family.as_deref(), Some("Chrome"));
        assert_eq!(meta.browser_version.as_deref(), Some("20.0"));
        assert!(!meta.is_crawler);
    }

    #[test]
    fn test_missing_headers_degrade() {
        let req = Request::builder()
            .uri("http://gateway.test/")
            .body(Body::default())
            .unwrap();

        let meta = request_meta(&req);
        assert_eq!(meta.browser_family, None);
        assert!(!meta.is_crawler);
    }

    #[test]
    fn test_crawler_signal_accepts_true_and_one() {
        for value in ["1", "true", "TRUE"] {
            let req = Request::builder()
                .uri("http://gateway.test/")
                .header(CRAWLER_HEADER, value)
                .body(Body::default())
                .unwrap();
            assert!(request_meta(&req).is_crawler, "value {value}");
        }
    }

    #[test]
    fn test_session_cookie_found_among_others() {
        let req = Request::builder()
            .uri("http://gateway.test/")
            .header("Cookie", "theme=dark; session=abc123; lang=en")
            .body(Body::default())
            .unwrap();

        assert_eq!(session_cookie(&req, "session").as_deref(), Some("abc123"));
        assert_eq!(session_cookie(&req, "missing"), None);
    }
}
