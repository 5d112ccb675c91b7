//! Catalog handlers
//!
//! Home, list-all and lookup-by-id over a [`Collection`].

use hyper::{Method, Response, StatusCode};
use percent_encoding::percent_decode_str;

use crate::catalog::{encode_json, Collection, LookupError};
use crate::http::{self, ResponseBody};
use crate::logger;

/// Static descriptive payload; any method is accepted
pub fn home(collection: &dyn Collection) -> Response<ResponseBody> {
    match encode_json(collection.home()) {
        Ok(body) => http::build_json_response(StatusCode::OK, body),
        Err(e) => {
            logger::log_error(&format!("Failed to serialize home payload: {e}"));
            http::build_500_response()
        }
    }
}

/// Whole store as a JSON array
pub fn list(method: &Method, collection: &dyn Collection) -> Response<ResponseBody> {
    if *method != Method::GET {
        logger::log_warning(&format!(
            "Method not allowed: {method} {}",
            collection.collection_path()
        ));
        return http::build_405_response();
    }

    match collection.list_json() {
        Ok(body) => http::build_json_response(StatusCode::OK, body),
        Err(e) => {
            logger::log_error(&format!(
                "Failed to serialize {} list: {e}",
                collection.noun()
            ));
            http::build_500_response()
        }
    }
}

/// Single record by the id token that follows the collection prefix.
/// The token is percent-decoded first, so `/users/%32` looks up id 2.
pub fn lookup(method: &Method, token: &str, collection: &dyn Collection) -> Response<ResponseBody> {
    if *method != Method::GET {
        logger::log_warning(&format!(
            "Method not allowed: {method} {}/{token}",
            collection.collection_path()
        ));
        return http::build_405_response();
    }

    // Non-UTF-8 escapes can never form an integer
    let Ok(token) = percent_decode_str(token).decode_utf8() else {
        return http::build_400_response(&format!("Invalid {} ID", collection.noun()));
    };

    match collection.lookup_json(&token) {
        Ok(body) => http::build_json_response(StatusCode::OK, body),
        Err(LookupError::InvalidId) => {
            http::build_400_response(&format!("Invalid {} ID", collection.noun()))
        }
        Err(LookupError::NotFound) => {
            http::build_404_response(&format!("{} not found", capitalize(collection.noun())))
        }
        Err(e) => {
            logger::log_error(&e.to_string());
            http::build_500_response()
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
