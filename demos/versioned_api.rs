//! Registers a small versioned API and dispatches a few requests against it.

use log::{info, warn};
use microroute_rs::{Action, Controller, HandlerOutput, HttpRequest, Method, Router, RouterConfig};
use serde_json::json;

#[derive(Default)]
struct PetController;

impl Controller for PetController {
    fn call(&mut self, method: &str) -> Option<HandlerOutput> {
        match method {
            "index" => Some(json!([{ "name": "rex" }, { "name": "tom" }]).into()),
            "show" => Some(json!({ "name": "rex" }).into()),
            _ => None,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize the logger
    env_logger::init();

    let mut router = Router::new(RouterConfig::default());
    router.register_controller::<PetController>("PetController");

    router.add_route(&[Method::GET], ["v1", "v2"], "/pets", Action::uses("PetController@index"));
    router.add_route(&[Method::GET, Method::HEAD], ["v2"], "/pets/{id?}", Action::uses("PetController@show"));
    router.add_route(&[Method::GET], ["v1"], "/hello", Action::handler(|| "Hello, World!"));
    router.log_routes();

    let requests = [
        ("v1", HttpRequest::for_host(Method::GET, "localhost", "/hello")),
        ("v2", HttpRequest::for_host(Method::GET, "localhost:8080", "/pets/")),
        ("v2", HttpRequest::for_host(Method::GET, "localhost", "/hello")),
        ("v3", HttpRequest::for_host(Method::GET, "localhost", "/pets")),
    ];

    for (version, request) in &requests {
        match router.dispatch(request, version) {
            Ok(response) => info!(
                "[{version}] {} {} -> {} {}",
                request.method,
                request.path,
                response.status.as_u16(),
                response.body_str().unwrap_or("<binary>")
            ),
            Err(e) => warn!("[{version}] {} {} -> {e}", request.method, request.path),
        }
    }

    Ok(())
}
