//! Route records and the keys they are stored under.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::http::Method;
use crate::routing::action::Action;
use crate::routing::error::Error;

/// A `/{name?}` path segment.
static OPTIONAL_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/\{(.*?)\?\}").expect("optional segment regex should be valid"));

/// One registered endpoint.
#[derive(Debug, Clone)]
pub struct Route {
    /// The path template, with optional segments already removed.
    pub uri: String,
    /// What to invoke when the route matches.
    pub action: Action,
}

impl Route {
    pub fn new(uri: impl Into<String>, action: Action) -> Self {
        Self {
            uri: uri.into(),
            action,
        }
    }

    /// Whether `path` addresses this route once surrounding slashes are ignored.
    pub fn matches_path(&self, path: &str) -> bool {
        trim_slashes(path) == trim_slashes(&self.uri)
    }
}

/// Identifies a route within one version: method, domain and uri.
///
/// Renders as `"<METHOD> <DOMAIN> <URI>"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteKey {
    pub method: Method,
    pub domain: String,
    pub uri: String,
}

impl RouteKey {
    pub fn new(method: Method, domain: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            method,
            domain: domain.into(),
            uri: uri.into(),
        }
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.method, self.domain, self.uri)
    }
}

impl FromStr for RouteKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ' ');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(method), Some(domain), Some(uri)) if !domain.is_empty() => {
                Ok(RouteKey::new(method.parse::<Method>()?, domain, uri))
            }
            _ => Err(Error::InvalidRouteKey(s.to_string())),
        }
    }
}

/// The pieces of a matched route other layers (middleware, logging) care about.
#[derive(Debug, Clone)]
pub struct RouteProperties {
    pub uri: String,
    pub methods: Vec<Method>,
    pub action: Action,
}

/// Drop leading and trailing slashes.
pub fn trim_slashes(path: &str) -> &str {
    path.trim_matches('/')
}

/// Remove every `/{name?}` segment from a uri template.
///
/// The resulting route is only reachable with those segments absent.
pub fn strip_optional_segments(uri: &str) -> Cow<'_, str> {
    if !uri.contains("?}") {
        return Cow::Borrowed(uri);
    }
    OPTIONAL_SEGMENT.replace_all(uri, "")
}
