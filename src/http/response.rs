//! HTTP response building module
//!
//! JSON success bodies and plain-text error bodies. Every catalog response
//! carries `Access-Control-Allow-Origin: *`, error paths included.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

pub type ResponseBody = Full<Bytes>;

const JSON_CONTENT_TYPE: &str = "application/json";
const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Build 200-style JSON response from an already encoded body
pub fn build_json_response(status: StatusCode, body: Vec<u8>) -> Response<ResponseBody> {
    Response::builder()
        .status(status)
        .header("Content-Type", JSON_CONTENT_TYPE)
        .header("Access-Control-Allow-Origin", "*")
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|e| {
            log_build_error(status.as_str(), &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 400 Bad Request response
pub fn build_400_response(message: &str) -> Response<ResponseBody> {
    build_text_error(StatusCode::BAD_REQUEST, message)
}

/// Build 404 Not Found response
pub fn build_404_response(message: &str) -> Response<ResponseBody> {
    build_text_error(StatusCode::NOT_FOUND, message)
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<ResponseBody> {
    let mut response = build_text_error(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed");
    response
        .headers_mut()
        .insert("Allow", hyper::header::HeaderValue::from_static("GET"));
    response
}

/// Build 500 response when a body could not be serialized
pub fn build_500_response() -> Response<ResponseBody> {
    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header("Content-Type", JSON_CONTENT_TYPE)
        .header("Access-Control-Allow-Origin", "*")
        .body(Full::new(Bytes::from_static(
            b"{\"error\":\"Internal server error\"}\n",
        )))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Plain-text error body, newline terminated
fn build_text_error(status: StatusCode, message: &str) -> Response<ResponseBody> {
    Response::builder()
        .status(status)
        .header("Content-Type", TEXT_CONTENT_TYPE)
        .header("X-Content-Type-Options", "nosniff")
        .header("Access-Control-Allow-Origin", "*")
        .body(Full::new(Bytes::from(format!("{message}\n"))))
        .unwrap_or_else(|e| {
            log_build_error(status.as_str(), &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
