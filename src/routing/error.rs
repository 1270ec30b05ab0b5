//! Error types for route registration and dispatch.

use thiserror::Error;

use crate::http::{Error as HttpError, Method};

/// Errors that can occur while looking up or dispatching routes.
#[derive(Debug, Error)]
pub enum Error {
    /// Routes were requested for a version nothing was registered under.
    #[error("No routes registered for version: {0}")]
    VersionNotFound(String),

    /// A request was dispatched against a version nothing was registered under.
    #[error("Unknown API version: {0}")]
    UnknownVersion(String),

    /// No route matched the request's method, host and path.
    #[error("No route matches {method} {host} {path}")]
    RouteNotFound {
        method: Method,
        host: String,
        path: String,
    },

    /// The matched route's action could not be turned into a call.
    #[error("Unable to resolve action: {0}")]
    ActionResolution(#[from] ActionError),

    /// A route key string is not of the form `"<METHOD> <DOMAIN> <URI>"`.
    #[error("Invalid route key: {0}")]
    InvalidRouteKey(String),

    /// Error from the request/response layer.
    #[error(transparent)]
    Http(#[from] HttpError),
}

/// Why an action descriptor could not be invoked.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    /// The `uses` reference is not `"Controller@method"`.
    #[error("Malformed controller reference: {0}")]
    MalformedUses(String),

    /// No controller is registered under the name.
    #[error("Controller {0} is not registered")]
    UnknownController(String),

    /// The controller exists but has no such method.
    #[error("Controller {controller} has no method {method}")]
    MissingMethod { controller: String, method: String },

    /// The action has no `uses` reference and no invocable entry.
    #[error("Action has no invocable entry")]
    NoInvocable,
}
