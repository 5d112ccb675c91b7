//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: resolve the route, run exactly
//! one handler, write the access log line.

use hyper::body::Body;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use crate::config::AppState;
use crate::handler::catalog;
use crate::http::ResponseBody;
use crate::logger::{self, AccessLogEntry};
use crate::routing::RouteKind;

/// Main entry point for HTTP request handling
///
/// Generic over the request body because no handler reads it.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<ResponseBody>, Infallible> {
    let started = Instant::now();
    let method = req.method();
    let path = req.uri().path();

    if state.debug {
        logger::log_debug(&format!("{method} {} {:?}", req.uri(), req.version()));
    }

    let response = route_request(method, path, &state);

    if state.access_log {
        let mut entry = AccessLogEntry::from_request(&req, peer_addr);
        entry.status = response.status().as_u16();
        entry.body_bytes = response
            .body()
            .size_hint()
            .exact()
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(0);
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Resolve `path` against the route table and run its handler
pub fn route_request(method: &Method, path: &str, state: &AppState) -> Response<ResponseBody> {
    let collection = state.catalog.as_ref();
    let Some(route) = state.routes.resolve(path) else {
        // The table always carries a `/` catch-all, so only malformed paths land here
        return catalog::home(collection);
    };

    match route.kind {
        RouteKind::Home => catalog::home(collection),
        RouteKind::List => catalog::list(method, collection),
        RouteKind::Lookup => catalog::lookup(method, route.remainder(path), collection),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogVariant;
    use crate::config::Config;
    use http_body_util::BodyExt;
    use hyper::StatusCode;

    fn state_for(variant: CatalogVariant) -> Arc<AppState> {
        let mut cfg = Config::load_from("does-not-exist-catalog-config").unwrap();
        cfg.catalog.variant = variant;
        cfg.logging.access_log = false;
        Arc::new(AppState::new(&cfg, variant.build()))
    }

    fn peer() -> SocketAddr {
        "127.0.0.1:50000".parse().unwrap()
    }

    async fn send(
        state: &Arc<AppState>,
        method: Method,
        uri: &str,
    ) -> (StatusCode, hyper::HeaderMap, Vec<u8>) {
        let req = Request::builder().method(method).uri(uri).body(()).unwrap();
        let resp = handle_request(req, Arc::clone(state), peer()).await.unwrap();
        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp.into_body().collect().await.unwrap().to_bytes().to_vec();
        (status, headers, body)
    }

    fn json(body: &[u8]) -> serde_json::Value {
        serde_json::from_slice(body).unwrap()
    }

    #[tokio::test]
    async fn test_list_users() {
        let state = state_for(CatalogVariant::Users);
        let (status, headers, body) = send(&state, Method::GET, "/users").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers["Content-Type"], "application/json");
        assert_eq!(headers["Access-Control-Allow-Origin"], "*");

        let value = json(&body);
        let users = value.as_array().unwrap();
        assert_eq!(users.len(), state.catalog.len());
        assert_eq!(users[0]["name"], "John Doe");
        assert_eq!(users[1]["name"], "Jane Smith");
    }

    #[tokio::test]
    async fn test_list_rejects_other_methods() {
        let state = state_for(CatalogVariant::Users);
        for method in [Method::POST, Method::PUT, Method::DELETE, Method::HEAD] {
            let (status, headers, body) = send(&state, method, "/users").await;
            assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
            assert_eq!(headers["Access-Control-Allow-Origin"], "*");
            assert_eq!(body, b"Method not allowed\n".to_vec());
        }
        // Store is unchanged afterwards
        let (_, _, body) = send(&state, Method::GET, "/users").await;
        assert_eq!(json(&body).as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_lookup_scenario() {
        let state = state_for(CatalogVariant::Users);

        let (status, _, body) = send(&state, Method::GET, "/users/2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            b"{\"id\":2,\"name\":\"Jane Smith\",\"email\":\"jane@example.com\",\"active\":true,\"created\":\"2025-09-01\"}\n"
                .to_vec()
        );

        let (status, _, body) = send(&state, Method::GET, "/users/99").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, b"User not found\n".to_vec());

        let (status, _, body) = send(&state, Method::GET, "/users/abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, b"Invalid user ID\n".to_vec());

        let (status, _, _) = send(&state, Method::POST, "/users").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

        let (status, _, _) = send(&state, Method::DELETE, "/users/1").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_lookup_every_seed_id() {
        let state = state_for(CatalogVariant::Users);
        for id in [1, 2] {
            let (status, _, body) = send(&state, Method::GET, &format!("/users/{id}")).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(json(&body)["id"], id);
        }
        for id in [0, -1, 3, i64::MAX] {
            let (status, _, _) = send(&state, Method::GET, &format!("/users/{id}")).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
        }
        // Escaped tokens are decoded before parsing
        for uri in ["/users/%32", "/users/%2B2"] {
            let (status, _, body) = send(&state, Method::GET, uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert_eq!(json(&body)["id"], 2);
        }
        let (status, _, _) = send(&state, Method::GET, "/users/%322").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        for token in ["", "1.0", "one", "1/2", "%31%2F2", "%FF", "%20%31"] {
            let (status, _, _) = send(&state, Method::GET, &format!("/users/{token}")).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn test_home() {
        let state = state_for(CatalogVariant::Users);
        for (method, uri) in [
            (Method::GET, "/"),
            (Method::POST, "/"),
            (Method::GET, "/anything/else"),
        ] {
            let (status, headers, body) = send(&state, method, uri).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(headers["Content-Type"], "application/json");
            let value = json(&body);
            assert_eq!(value["message"], "Welcome to the User Management API");
            assert_eq!(value["version"], "1.0.0");
            assert_eq!(value["endpoints"], "/users, /users/{id}");
        }
    }

    #[tokio::test]
    async fn test_products_variant() {
        let state = state_for(CatalogVariant::Products);
        let (status, _, body) = send(&state, Method::GET, "/products").await;
        assert_eq!(status, StatusCode::OK);
        let value = json(&body);
        let products = value.as_array().unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0]["TITLE"], "Orange");
        assert!(String::from_utf8_lossy(&body).contains(r#""PRICE":100,"#));

        let (status, _, _) = send(&state, Method::POST, "/products").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

        // No lookup route: falls through to home
        let (status, _, body) = send(&state, Method::GET, "/products/1").await;
        assert_eq!(status, StatusCode::OK);
        assert!(json(&body).get("message").is_some());
    }

    #[tokio::test]
    async fn test_items_variant() {
        let state = state_for(CatalogVariant::Items);
        let (status, _, body) = send(&state, Method::GET, "/items").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            b"[{\"id\":1,\"name\":\"Sample Item 1\"},{\"id\":2,\"name\":\"Sample Item 2\"}]\n".to_vec()
        );
    }

    #[tokio::test]
    async fn test_repeated_gets_are_identical() {
        let state = state_for(CatalogVariant::Users);
        let (_, _, first) = send(&state, Method::GET, "/users").await;
        for _ in 0..5 {
            let (_, _, again) = send(&state, Method::GET, "/users").await;
            assert_eq!(first, again);
        }
        let (_, _, one) = send(&state, Method::GET, "/users/1").await;
        let (_, _, two) = send(&state, Method::GET, "/users/1").await;
        assert_eq!(one, two);
    }
}
