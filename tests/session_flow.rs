//! Session continuity: renewal policy and the cookie round trip through
//! the assembled gateway.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use chrono::{Duration, Utc};
use tower::ServiceExt;

use collection_gateway::config::GatewayConfig;
use collection_gateway::session::continuity::{maybe_renew, Renewal};
use collection_gateway::session::token::{Claim, SessionToken};
use collection_gateway::GatewayServer;

fn token(valid_to: chrono::DateTime<Utc>) -> SessionToken {
    SessionToken {
        claims: vec![
            Claim::new("name-identifier", "dev@local.test"),
            Claim::new("identity-provider", "DEV"),
        ],
        issued_at: valid_to - Duration::minutes(60),
        valid_to,
        is_persistent: false,
        context: "ctx-1".to_string(),
    }
}

#[test]
fn test_renewal_slides_expiry_to_now_plus_window() {
    let now = Utc::now();
    let inbound = token(now + Duration::minutes(5));

    let Renewal::Renewed {
        token: renewed,
        reissue_credential,
    } = maybe_renew(&inbound, now, Duration::minutes(60))
    else {
        panic!("a token valid for five more minutes must renew");
    };

    assert!(reissue_credential);
    assert_eq!(renewed.issued_at, now);
    assert_eq!(renewed.valid_to, now + Duration::minutes(60));
    assert_eq!(renewed.claims, inbound.claims);
}

#[test]
fn test_expired_token_is_left_alone() {
    let now = Utc::now();
    let inbound = token(now - Duration::seconds(1));
    assert_eq!(
        maybe_renew(&inbound, now, Duration::minutes(60)),
        Renewal::Unchanged
    );
}

#[tokio::test]
async fn test_valid_session_cookie_is_reissued() {
    let server = GatewayServer::new(GatewayConfig::default());
    let inbound = token(Utc::now() + Duration::minutes(5));

    let request = Request::builder()
        .uri("http://gateway.test/cosmos")
        .header("x-client-browser", "Chrome")
        .header("x-client-browser-version", "20")
        .header(header::COOKIE, format!("session={}", inbound.encode()))
        .body(Body::empty())
        .unwrap();

    let response = server.app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("renewed session must reissue the cookie")
        .to_str()
        .unwrap();
    assert!(set_cookie.starts_with("session="));

    let value = set_cookie
        .strip_prefix("session=")
        .unwrap()
        .split(';')
        .next()
        .unwrap();
    let renewed = SessionToken::decode(value).unwrap();
    assert_eq!(renewed.claims, inbound.claims);
    assert!(renewed.valid_to > inbound.valid_to);
}

#[tokio::test]
async fn test_expired_session_cookie_is_not_reissued() {
    let server = GatewayServer::new(GatewayConfig::default());
    let inbound = token(Utc::now() - Duration::seconds(1));

    let request = Request::builder()
        .uri("http://gateway.test/cosmos")
        .header(header::COOKIE, format!("session={}", inbound.encode()))
        .body(Body::empty())
        .unwrap();

    let response = server.app().oneshot(request).await.unwrap();
    // The request itself still succeeds; only re-authentication is forced.
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::SET_COOKIE).is_none());
}

#[tokio::test]
async fn test_garbage_cookie_does_not_fail_the_request() {
    let server = GatewayServer::new(GatewayConfig::default());

    let request = Request::builder()
        .uri("http://gateway.test/cosmos")
        .header(header::COOKIE, "session=!!not-a-token!!")
        .body(Body::empty())
        .unwrap();

    let response = server.app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::SET_COOKIE).is_none());
}

#[tokio::test]
async fn test_requests_without_cookie_skip_continuity() {
    let server = GatewayServer::new(GatewayConfig::default());

    let request = Request::builder()
        .uri("http://gateway.test/cosmos")
        .body(Body::empty())
        .unwrap();

    let response = server.app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::SET_COOKIE).is_none());
}
