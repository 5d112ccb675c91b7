//! Access log format module
//!
//! Supported formats:
//! - `combined` (Apache/Nginx combined format)
//! - `common` (Common Log Format - CLF)
//! - `json` (one JSON object per line)
//! - Custom patterns with `$variable` substitution

use chrono::{DateTime, Local};
use hyper::Request;
use serde::Serialize;
use std::net::SocketAddr;

const CLF_TIME: &str = "%d/%b/%Y:%H:%M:%S %z";

/// One served request, as written to the access log
#[derive(Debug, Clone, Serialize)]
pub struct AccessLogEntry {
    pub remote_addr: String,
    #[serde(serialize_with = "serialize_rfc3339")]
    pub time: DateTime<Local>,
    pub method: String,
    pub path: String,
    /// Query string without the leading `?`
    pub query: Option<String>,
    pub http_version: String,
    pub status: u16,
    pub body_bytes: usize,
    pub referer: Option<String>,
    pub user_agent: Option<String>,
    pub request_time_us: u64,
}

impl AccessLogEntry {
    /// Entry stamped with the current time; status and size filled in later
    pub fn new(remote_addr: String, method: String, path: String) -> Self {
        Self {
            remote_addr,
            time: Local::now(),
            method,
            path,
            query: None,
            http_version: "1.1".to_string(),
            status: 200,
            body_bytes: 0,
            referer: None,
            user_agent: None,
            request_time_us: 0,
        }
    }

    /// Capture request line and headers of `req`
    pub fn from_request<B>(req: &Request<B>, peer_addr: SocketAddr) -> Self {
        let mut entry = Self::new(
            peer_addr.ip().to_string(),
            req.method().to_string(),
            req.uri().path().to_string(),
        );
        entry.query = req.uri().query().map(ToString::to_string);
        entry.http_version = version_label(req.version()).to_string();
        entry.referer = header_value(req, "referer");
        entry.user_agent = header_value(req, "user-agent");
        entry
    }

    /// Format the entry; unknown format names are treated as custom patterns
    pub fn format(&self, format: &str) -> String {
        match format {
            "combined" => format!(
                "{} \"{}\" \"{}\"",
                self.format_common(),
                self.referer.as_deref().unwrap_or("-"),
                self.user_agent.as_deref().unwrap_or("-"),
            ),
            "common" => self.format_common(),
            "json" => serde_json::to_string(self).unwrap_or_default(),
            pattern => self.format_custom(pattern),
        }
    }

    fn request_uri(&self) -> String {
        match &self.query {
            Some(q) => format!("{}?{q}", self.path),
            None => self.path.clone(),
        }
    }

    fn request_line(&self) -> String {
        format!(
            "{} {} HTTP/{}",
            self.method,
            self.request_uri(),
            self.http_version
        )
    }

    /// `$remote_addr - - [$time_local] "$request" $status $body_bytes_sent`
    fn format_common(&self) -> String {
        format!(
            "{} - - [{}] \"{}\" {} {}",
            self.remote_addr,
            self.time.format(CLF_TIME),
            self.request_line(),
            self.status,
            self.body_bytes,
        )
    }

    /// Variables: `$remote_addr`, `$time_local`, `$time_iso8601`, `$request`,
    /// `$request_method`, `$request_uri`, `$request_time` (seconds),
    /// `$status`, `$body_bytes_sent`, `$http_referer`, `$http_user_agent`
    fn format_custom(&self, pattern: &str) -> String {
        #[allow(clippy::cast_precision_loss)]
        let request_time = format!("{:.3}", self.request_time_us as f64 / 1_000_000.0);

        // Longest names first so `$request` does not eat `$request_time`
        let vars: [(&str, String); 11] = [
            ("$request_method", self.method.clone()),
            ("$request_time", request_time),
            ("$request_uri", self.request_uri()),
            ("$request", self.request_line()),
            ("$remote_addr", self.remote_addr.clone()),
            ("$time_iso8601", self.time.to_rfc3339()),
            ("$time_local", self.time.format(CLF_TIME).to_string()),
            ("$body_bytes_sent", self.body_bytes.to_string()),
            ("$status", self.status.to_string()),
            (
                "$http_referer",
                self.referer.clone().unwrap_or_else(|| "-".to_string()),
            ),
            (
                "$http_user_agent",
                self.user_agent.clone().unwrap_or_else(|| "-".to_string()),
            ),
        ];

        substitute(pattern, &vars)
    }
}

/// Expand `$name` variables in one pass over `pattern`. Substituted values
/// are never rescanned, so a `$status` inside a request path stays literal.
fn substitute(pattern: &str, vars: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut rest = pattern;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        match vars.iter().find(|(name, _)| rest.starts_with(name)) {
            Some((name, value)) => {
                out.push_str(value);
                rest = &rest[name.len()..];
            }
            None => {
                out.push('$');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn serialize_rfc3339<S: serde::Serializer>(
    time: &DateTime<Local>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&time.to_rfc3339())
}

fn header_value<B>(req: &Request<B>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

fn version_label(version: hyper::Version) -> &'static str {
    match version {
        hyper::Version::HTTP_09 => "0.9",
        hyper::Version::HTTP_10 => "1.0",
        hyper::Version::HTTP_2 => "2",
        hyper::Version::HTTP_3 => "3",
        _ => "1.1",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_entry() -> AccessLogEntry {
        let mut entry = AccessLogEntry::new(
            "192.168.1.1".to_string(),
            "GET".to_string(),
            "/users/2".to_string(),
        );
        entry.query = Some("verbose=1".to_string());
        entry.status = 200;
        entry.body_bytes = 97;
        entry.referer = Some("https://example.com".to_string());
        entry.user_agent = Some("curl/8.0".to_string());
        entry.request_time_us = 1234;
        entry
    }

    #[test]
    fn test_format_combined() {
        let log = create_test_entry().format("combined");
        assert!(log.starts_with("192.168.1.1 - - ["));
        assert!(log.contains("\"GET /users/2?verbose=1 HTTP/1.1\" 200 97"));
        assert!(log.ends_with("\"https://example.com\" \"curl/8.0\""));
    }

    #[test]
    fn test_format_common() {
        let log = create_test_entry().format("common");
        assert!(log.contains("\"GET /users/2?verbose=1 HTTP/1.1\" 200 97"));
        assert!(!log.contains("curl/8.0"));
    }

    #[test]
    fn test_format_json() {
        let log = create_test_entry().format("json");
        let value: serde_json::Value = serde_json::from_str(&log).unwrap();
        assert_eq!(value["remote_addr"], "192.168.1.1");
        assert_eq!(value["method"], "GET");
        assert_eq!(value["status"], 200);
        assert_eq!(value["body_bytes"], 97);
        assert!(value["time"].is_string());
    }

    #[test]
    fn test_format_custom() {
        let log = create_test_entry().format("$remote_addr $request_method $request_uri $status $request_time");
        assert_eq!(log, "192.168.1.1 GET /users/2?verbose=1 200 0.001");
    }

    #[test]
    fn test_format_custom_values_not_rescanned() {
        let mut entry = create_test_entry();
        entry.path = "/users/$status".to_string();
        entry.query = None;
        let log = entry.format("$request_uri $status $bogus $");
        assert_eq!(log, "/users/$status 200 $bogus $");
    }

    #[test]
    fn test_from_request() {
        let req = Request::builder()
            .method("POST")
            .uri("/users?x=1")
            .header("User-Agent", "test-agent")
            .body(())
            .unwrap();
        let entry = AccessLogEntry::from_request(&req, "10.0.0.5:4000".parse().unwrap());
        assert_eq!(entry.remote_addr, "10.0.0.5");
        assert_eq!(entry.method, "POST");
        assert_eq!(entry.path, "/users");
        assert_eq!(entry.query.as_deref(), Some("x=1"));
        assert_eq!(entry.user_agent.as_deref(), Some("test-agent"));
        assert!(entry.referer.is_none());
    }
}
