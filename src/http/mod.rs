//! Request and response vocabulary shared by the router and its callers.

mod error;
mod method;
mod request;
mod response;

pub use error::Error;
pub use method::Method;
pub use request::{HttpRequest, DEFAULT_HOST};
pub use response::{HttpResponse, StatusCode};
