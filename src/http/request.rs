//! Pre-parsed HTTP request handed to the dispatcher.

use std::collections::HashMap;

use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;

use crate::http::error::Error;
use crate::http::method::Method;
use crate::routing::Route;

/// Host reported when a request carries no `Host` header.
pub const DEFAULT_HOST: &str = "localhost";

/// Represents an incoming HTTP request.
///
/// The transport parses the wire format; this type only carries the pieces
/// the router looks at, plus a slot the dispatcher fills with the matched route.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// The request target, possibly including a query string
    pub path: String,
    /// The HTTP headers
    pub headers: HashMap<String, String>,
    /// The request body
    pub body: Vec<u8>,
    route: OnceCell<Option<Route>>,
}

impl HttpRequest {
    /// Create a new HTTP request with an empty body.
    ///
    /// # Arguments
    ///
    /// * `method` - The HTTP method
    /// * `path` - The request target
    /// * `headers` - The HTTP headers
    pub fn new(method: Method, path: impl Into<String>, headers: HashMap<String, String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers,
            body: Vec::new(),
            route: OnceCell::new(),
        }
    }

    /// Shorthand for a request with only a `Host` header.
    pub fn for_host(method: Method, host: impl Into<String>, path: impl Into<String>) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Host".to_string(), host.into());
        Self::new(method, path, headers)
    }

    /// Replace the request body.
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Add or replace a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Get a header value, ignoring the case of the name.
    pub fn get_header(&self, name: &str) -> Option<&String> {
        self.headers.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                Some(v)
            } else {
                None
            }
        })
    }

    /// Check if a header exists.
    pub fn has_header(&self, name: &str) -> bool {
        self.get_header(name).is_some()
    }

    /// The host name the request was addressed to.
    ///
    /// Taken from the `Host` header with any port removed and lower-cased.
    /// Falls back to [`DEFAULT_HOST`] when the header is missing or empty.
    pub fn host(&self) -> String {
        let Some(raw) = self.get_header("Host") else {
            return DEFAULT_HOST.to_string();
        };
        let raw = raw.trim();

        // Bracketed IPv6 literals keep their colons.
        let host = if let Some(rest) = raw.strip_prefix('[') {
            match rest.find(']') {
                Some(end) => &raw[..end + 2],
                None => raw,
            }
        } else {
            raw.split(':').next().unwrap_or(raw)
        };

        if host.is_empty() {
            DEFAULT_HOST.to_string()
        } else {
            host.to_ascii_lowercase()
        }
    }

    /// The request path without its query string.
    pub fn path_info(&self) -> &str {
        match self.path.split_once('?') {
            Some((path, _)) => path,
            None => &self.path,
        }
    }

    /// Parse the request body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        if !self.is_json() {
            let content_type = self.get_header("Content-Type").cloned().unwrap_or_default();
            return Err(Error::NotJson(content_type));
        }

        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Check if the request has a JSON body.
    pub fn is_json(&self) -> bool {
        self.get_header("Content-Type")
            .is_some_and(|content_type| content_type.starts_with("application/json"))
    }

    /// Record the outcome of route matching.
    ///
    /// Only the first call has an effect; returns `false` if a route was
    /// already attached.
    pub fn set_route(&self, route: Option<Route>) -> bool {
        self.route.set(route).is_ok()
    }

    /// The route matched for this request, if matching found one.
    pub fn route(&self) -> Option<&Route> {
        self.route.get().and_then(Option::as_ref)
    }

    /// Whether the dispatcher has already run matching for this request.
    pub fn is_route_resolved(&self) -> bool {
        self.route.get().is_some()
    }
}
