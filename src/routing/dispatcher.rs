//! Request dispatch: match a request to a route, run its action, normalize
//! the result.

use log::{debug, warn};

use crate::http::{HttpRequest, HttpResponse};
use crate::routing::action::{Action, HandlerOutput};
use crate::routing::controller::ControllerRegistry;
use crate::routing::error::{ActionError, Error};
use crate::routing::route::{Route, RouteProperties};
use crate::routing::table::{RouteMap, RouteTable};

/// Dispatches requests against a borrowed route table and controller registry.
///
/// Holds no state of its own; the only side effect of a dispatch is the route
/// recorded on the request.
#[derive(Debug, Clone, Copy)]
pub struct Dispatcher<'a> {
    routes: &'a RouteTable,
    controllers: &'a ControllerRegistry,
}

impl<'a> Dispatcher<'a> {
    pub fn new(routes: &'a RouteTable, controllers: &'a ControllerRegistry) -> Self {
        Self {
            routes,
            controllers,
        }
    }

    fn routes_for(&self, version: &str) -> Result<&'a RouteMap, Error> {
        self.routes.get_routes(version).map_err(|_| {
            warn!("Dispatch against unknown version {version}");
            Error::UnknownVersion(version.to_string())
        })
    }

    /// Find the route `request` addresses under `version`.
    ///
    /// Routes are scanned in table order and the first one whose method,
    /// domain and slash-trimmed uri equal the request's wins. `Ok(None)`
    /// means the version exists but nothing in it matched.
    pub fn find_route(&self, request: &HttpRequest, version: &str) -> Result<Option<&'a Route>, Error> {
        let routes = self.routes_for(version)?;

        let host = request.host();
        let path = request.path_info();

        Ok(routes
            .iter()
            .find(|(key, route)| {
                key.method == request.method && key.domain == host && route.matches_path(path)
            })
            .map(|(_, route)| route))
    }

    /// Dispatch `request` against the routes of `version`.
    ///
    /// The match (or its absence) is recorded on the request before the action
    /// runs. A request that already carries a resolved route is not matched
    /// again: the recorded route is the one invoked. Raw handler output is
    /// wrapped into a `200 OK` response; a finished [`HttpResponse`] is
    /// returned as is.
    pub fn dispatch(&self, request: &HttpRequest, version: &str) -> Result<HttpResponse, Error> {
        if request.is_route_resolved() {
            self.routes_for(version)?;
            debug!("Request already carries a resolved route, skipping matching");
        } else {
            let found = self.find_route(request, version)?;
            request.set_route(found.cloned());
        }

        let Some(route) = request.route() else {
            let host = request.host();
            warn!(
                "No route for [{version}] {method} {host} {path}",
                method = request.method,
                path = request.path_info()
            );
            return Err(Error::RouteNotFound {
                method: request.method,
                host,
                path: request.path_info().to_string(),
            });
        };

        debug!("Dispatching [{version}] {method} {uri}", method = request.method, uri = route.uri);

        let output = self.invoke(&route.action).inspect_err(|e| {
            warn!("Failed to resolve action for {uri}: {e}", uri = route.uri);
        })?;

        Self::prepare(output)
    }

    /// Run an action: the controller reference if there is one, otherwise the
    /// first inline handler.
    fn invoke(&self, action: &Action) -> Result<HandlerOutput, Error> {
        if let Some(reference) = action.uses_reference() {
            return Ok(self.controllers.invoke(reference)?);
        }

        let handler = action.find_handler().ok_or(ActionError::NoInvocable)?;
        Ok(handler.call())
    }

    /// Turn handler output into a response envelope.
    pub fn prepare(output: HandlerOutput) -> Result<HttpResponse, Error> {
        match output {
            HandlerOutput::Response(response) => Ok(response),
            HandlerOutput::Value(value) => Ok(HttpResponse::from_value(value)?),
        }
    }

    /// The uri, method and action of `route` as seen by `request`.
    pub fn route_properties(route: &Route, request: &HttpRequest) -> RouteProperties {
        RouteProperties {
            uri: route.uri.clone(),
            methods: vec![request.method],
            action: route.action.clone(),
        }
    }
}
