//! The router: owns the route table and controllers, dispatches requests.

use std::collections::BTreeMap;

use log::info;

use crate::http::{HttpRequest, HttpResponse, Method};
use crate::routing::action::Action;
use crate::routing::config::RouterConfig;
use crate::routing::controller::{Controller, ControllerRegistry};
use crate::routing::dispatcher::Dispatcher;
use crate::routing::error::Error;
use crate::routing::route::Route;
use crate::routing::table::{RouteMap, RouteTable};

/// A versioned router.
///
/// Routes and controllers are registered through `&mut self`; dispatching
/// only needs `&self`, so a fully built router can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Router {
    config: RouterConfig,
    routes: RouteTable,
    controllers: ControllerRegistry,
}

impl Router {
    /// Create a new router with the given configuration.
    pub fn new(config: RouterConfig) -> Self {
        Self {
            routes: RouteTable::new(&config),
            controllers: ControllerRegistry::new(),
            config,
        }
    }

    /// The configuration the route table was built with. Fixed for the
    /// router's lifetime.
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Register a route under every method and version given.
    pub fn add_route<V, S>(&mut self, methods: &[Method], versions: V, uri: &str, action: Action)
    where
        V: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.routes.add_route(methods, versions, uri, action);
    }

    /// Register a default-constructible controller for `"Name@method"` actions.
    pub fn register_controller<C>(&mut self, name: impl Into<String>)
    where
        C: Controller + Default + 'static,
    {
        self.controllers.register::<C>(name);
    }

    pub fn controllers(&self) -> &ControllerRegistry {
        &self.controllers
    }

    pub fn controllers_mut(&mut self) -> &mut ControllerRegistry {
        &mut self.controllers
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Routes registered for `version`.
    pub fn get_routes(&self, version: &str) -> Result<&RouteMap, Error> {
        self.routes.get_routes(version)
    }

    /// Every version and its routes.
    pub fn all_routes(&self) -> &BTreeMap<String, RouteMap> {
        self.routes.all_routes()
    }

    /// A dispatcher borrowing this router's routes and controllers.
    pub fn dispatcher(&self) -> Dispatcher<'_> {
        Dispatcher::new(&self.routes, &self.controllers)
    }

    /// Find the route `request` addresses under `version` without running it.
    pub fn find_route(&self, request: &HttpRequest, version: &str) -> Result<Option<&Route>, Error> {
        self.dispatcher().find_route(request, version)
    }

    /// Dispatch `request` against the routes of `version`.
    pub fn dispatch(&self, request: &HttpRequest, version: &str) -> Result<HttpResponse, Error> {
        self.dispatcher().dispatch(request, version)
    }

    /// Log every registered route, grouped by version.
    pub fn log_routes(&self) {
        info!("Registered routes:");
        for (version, routes) in self.all_routes() {
            info!("  version {version}");
            for (key, route) in routes {
                let target = route
                    .action
                    .uses_reference()
                    .unwrap_or("<closure>");
                info!("    {key} -> {target}");
            }
        }
    }
}
