//! Versioned route registration and dispatch.
//!
//! A [`RouteTable`] stores routes per API version; a [`Dispatcher`] matches a
//! request against one version's routes and runs the matched action, either a
//! `"Controller@method"` reference resolved through a [`ControllerRegistry`]
//! or an inline [`Handler`]. [`Router`] bundles all three.

mod action;
mod config;
mod controller;
mod dispatcher;
mod error;
mod route;
mod router;
mod table;

pub use action::{Action, ActionValue, Handler, HandlerOutput};
pub use config::RouterConfig;
pub use controller::{parse_reference, Controller, ControllerRegistry};
pub use dispatcher::Dispatcher;
pub use error::{ActionError, Error};
pub use route::{strip_optional_segments, trim_slashes, Route, RouteKey, RouteProperties};
pub use router::Router;
pub use table::{RouteMap, RouteTable};
