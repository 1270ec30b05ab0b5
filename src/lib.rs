//! A minimal versioned HTTP route registry and dispatcher.
//!
//! Routes are registered per API version under one or more HTTP methods and
//! matched against a pre-parsed request's method, host and path. The matched
//! action is invoked and whatever it returns is normalized into an
//! [`HttpResponse`].
//!
//! # Features
//!
//! - One route registered under several methods and versions in one call
//! - Host-aware matching with a `localhost` default domain
//! - Paths compared with leading and trailing slashes ignored
//! - Controller actions (`"Controller@method"`) and inline closures
//! - Raw handler values wrapped into responses, finished responses passed through
//!
//! # Examples
//!
//! ## Inline handlers
//!
//! ```
//! use microroute_rs::{Action, HttpRequest, Method, Router};
//!
//! let mut router = Router::default();
//! router.add_route(&[Method::GET], ["v1"], "/ping", Action::handler(|| "pong"));
//!
//! let request = HttpRequest::for_host(Method::GET, "localhost", "/ping");
//! let response = router.dispatch(&request, "v1").unwrap();
//! assert_eq!(response.body_str(), Some("pong"));
//! ```
//!
//! ## Controllers
//!
//! ```
//! use microroute_rs::{Action, Controller, HandlerOutput, HttpRequest, Method, Router};
//! use serde_json::json;
//!
//! #[derive(Default)]
//! struct UserController;
//!
//! impl Controller for UserController {
//!     fn call(&mut self, method: &str) -> Option<HandlerOutput> {
//!         match method {
//!             "index" => Some(json!([{ "id": 1 }]).into()),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let mut router = Router::default();
//! router.register_controller::<UserController>("UserController");
//! router.add_route(&[Method::GET], ["v1", "v2"], "users", Action::uses("UserController@index"));
//!
//! let request = HttpRequest::for_host(Method::GET, "localhost", "/users/");
//! let response = router.dispatch(&request, "v2").unwrap();
//! assert_eq!(response.json_body().unwrap(), json!([{ "id": 1 }]));
//! ```
//!
//! ## Error handling
//!
//! ```
//! use microroute_rs::{HttpRequest, Method, Router, RoutingError};
//!
//! let router = Router::default();
//! let request = HttpRequest::for_host(Method::GET, "localhost", "/");
//!
//! match router.dispatch(&request, "v99") {
//!     Err(RoutingError::UnknownVersion(version)) => println!("no such version: {version}"),
//!     Err(RoutingError::RouteNotFound { path, .. }) => println!("not found: {path}"),
//!     Err(err) => println!("other error: {err}"),
//!     Ok(response) => println!("status {}", response.status.as_u16()),
//! }
//! ```

// Export the request/response module
pub mod http;

// Export the routing module
pub mod routing;

// Re-export commonly used items for convenience
pub use http::{Error as HttpError, HttpRequest, HttpResponse, Method, StatusCode};
pub use routing::{
    Action, ActionError, Controller, ControllerRegistry, Dispatcher, Error as RoutingError,
    HandlerOutput, Route, RouteKey, RouteTable, Router, RouterConfig,
};
