//! Per-version route storage.

use std::collections::BTreeMap;

use log::debug;

use crate::http::Method;
use crate::routing::action::Action;
use crate::routing::config::RouterConfig;
use crate::routing::error::Error;
use crate::routing::route::{strip_optional_segments, Route, RouteKey};

/// Routes of a single version, keyed and scanned in key order.
pub type RouteMap = BTreeMap<RouteKey, Route>;

/// Route records partitioned by API version.
#[derive(Debug, Clone)]
pub struct RouteTable {
    versions: BTreeMap<String, RouteMap>,
    default_domain: String,
    strip_optional_segments: bool,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new(&RouterConfig::default())
    }
}

impl RouteTable {
    /// Create an empty table using the domain and uri rules from `config`.
    pub fn new(config: &RouterConfig) -> Self {
        Self {
            versions: BTreeMap::new(),
            default_domain: config.default_domain.clone(),
            strip_optional_segments: config.strip_optional_segments,
        }
    }

    /// Register `uri` under every method and version given.
    ///
    /// `HEAD` is skipped. An action without a domain gets the default domain;
    /// domains are stored lower-cased.
    /// Registering an existing method, domain and uri again for a version
    /// replaces the earlier route.
    pub fn add_route<V, S>(&mut self, methods: &[Method], versions: V, uri: &str, mut action: Action)
    where
        V: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let domain = action.normalize_domain(&self.default_domain).to_string();

        let uri = if self.strip_optional_segments {
            strip_optional_segments(uri).into_owned()
        } else {
            uri.to_string()
        };

        for version in versions {
            let version = version.into();
            let routes = self.versions.entry(version.clone()).or_default();

            for method in methods.iter().filter(|m| **m != Method::HEAD) {
                let key = RouteKey::new(*method, domain.clone(), uri.clone());
                debug!("Registering route [{version}] {key}");
                if routes.insert(key, Route::new(uri.clone(), action.clone())).is_some() {
                    debug!("Route [{version}] {method} {domain} {uri} replaced an earlier registration");
                }
            }
        }
    }

    /// Routes registered for `version`.
    pub fn get_routes(&self, version: &str) -> Result<&RouteMap, Error> {
        self.versions
            .get(version)
            .ok_or_else(|| Error::VersionNotFound(version.to_string()))
    }

    /// Every version and its routes.
    pub fn all_routes(&self) -> &BTreeMap<String, RouteMap> {
        &self.versions
    }

    /// Registered versions in sorted order.
    pub fn versions(&self) -> impl Iterator<Item = &str> {
        self.versions.keys().map(String::as_str)
    }

    pub fn has_version(&self, version: &str) -> bool {
        self.versions.contains_key(version)
    }

    /// Number of routes across all versions.
    pub fn len(&self) -> usize {
        self.versions.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
