//! Action descriptors: what a route invokes once it matches.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::http::HttpResponse;

/// What a handler or controller method hands back to the dispatcher.
///
/// A finished [`HttpResponse`] passes through the dispatcher untouched; any
/// other value is wrapped into a fresh `200 OK` envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum HandlerOutput {
    /// An already built response envelope.
    Response(HttpResponse),
    /// A raw value to be used as the body of a new response.
    Value(Value),
}

impl From<HttpResponse> for HandlerOutput {
    fn from(response: HttpResponse) -> Self {
        HandlerOutput::Response(response)
    }
}

impl From<Value> for HandlerOutput {
    fn from(value: Value) -> Self {
        HandlerOutput::Value(value)
    }
}

impl From<String> for HandlerOutput {
    fn from(text: String) -> Self {
        HandlerOutput::Value(Value::String(text))
    }
}

impl From<&str> for HandlerOutput {
    fn from(text: &str) -> Self {
        HandlerOutput::Value(Value::String(text.to_string()))
    }
}

impl From<()> for HandlerOutput {
    fn from(_: ()) -> Self {
        HandlerOutput::Value(Value::Null)
    }
}

type HandlerFn = Arc<dyn Fn() -> HandlerOutput + Send + Sync>;

/// An inline, zero-argument route handler.
#[derive(Clone)]
pub struct Handler(HandlerFn);

impl Handler {
    /// Wrap a closure whose return value converts into a [`HandlerOutput`].
    pub fn new<F, R>(f: F) -> Self
    where
        F: Fn() -> R + Send + Sync + 'static,
        R: Into<HandlerOutput>,
    {
        Self(Arc::new(move || f().into()))
    }

    /// Run the handler.
    pub fn call(&self) -> HandlerOutput {
        (self.0)()
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Handler(..)")
    }
}

/// One named entry of an action descriptor.
#[derive(Debug, Clone)]
pub enum ActionValue {
    /// Something the dispatcher can invoke.
    Handler(Handler),
    /// Arbitrary metadata such as middleware names.
    Value(Value),
}

impl ActionValue {
    /// The handler, if this entry is invocable.
    pub fn as_handler(&self) -> Option<&Handler> {
        match self {
            ActionValue::Handler(handler) => Some(handler),
            ActionValue::Value(_) => None,
        }
    }
}

/// Describes what to invoke for a matched route.
///
/// Either a `"Controller@method"` reference (`uses`) or a list of entries
/// among which the first [`Handler`] is the one called. Entries keep their
/// definition order.
#[derive(Debug, Clone, Default)]
pub struct Action {
    domain: Option<String>,
    uses: Option<String>,
    entries: Vec<(String, ActionValue)>,
}

impl Action {
    /// An empty action. Dispatching it fails until something invocable is added.
    pub fn new() -> Self {
        Self::default()
    }

    /// An action calling `method` on a freshly created controller, written
    /// as `"Controller@method"`.
    pub fn uses(reference: impl Into<String>) -> Self {
        Self {
            uses: Some(reference.into()),
            ..Self::default()
        }
    }

    /// An action holding a single inline handler under the positional key `0`.
    pub fn handler<F, R>(f: F) -> Self
    where
        F: Fn() -> R + Send + Sync + 'static,
        R: Into<HandlerOutput>,
    {
        Self::new().with_closure(f)
    }

    /// Restrict the route to a host. Routes without one live on the default domain.
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Set the `"Controller@method"` reference.
    pub fn with_uses(mut self, reference: impl Into<String>) -> Self {
        self.uses = Some(reference.into());
        self
    }

    /// Append a handler under the next positional key, one past the highest
    /// numeric key in use.
    pub fn with_closure<F, R>(self, f: F) -> Self
    where
        F: Fn() -> R + Send + Sync + 'static,
        R: Into<HandlerOutput>,
    {
        let key = self.next_positional_key().to_string();
        self.with_entry(key, ActionValue::Handler(Handler::new(f)))
    }

    fn next_positional_key(&self) -> u64 {
        self.entries
            .iter()
            .filter_map(|(key, _)| key.parse::<u64>().ok())
            .max()
            .map_or(0, |highest| highest.saturating_add(1))
    }

    /// Set a named handler entry.
    pub fn with_handler<F, R>(self, key: impl Into<String>, f: F) -> Self
    where
        F: Fn() -> R + Send + Sync + 'static,
        R: Into<HandlerOutput>,
    {
        self.with_entry(key, ActionValue::Handler(Handler::new(f)))
    }

    /// Set a named metadata entry.
    pub fn with_value(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.with_entry(key, ActionValue::Value(value.into()))
    }

    /// Set an entry. An existing entry with the same key is replaced in place.
    pub fn with_entry(mut self, key: impl Into<String>, value: ActionValue) -> Self {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    pub fn uses_reference(&self) -> Option<&str> {
        self.uses.as_deref()
    }

    pub fn entries(&self) -> &[(String, ActionValue)] {
        &self.entries
    }

    /// Look up an entry by key.
    pub fn get(&self, key: &str) -> Option<&ActionValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// The first invocable entry in definition order.
    pub fn find_handler(&self) -> Option<&Handler> {
        self.entries.iter().find_map(|(_, value)| value.as_handler())
    }

    /// Fill in `domain` unless the action already names one, and lower-case
    /// it so it compares like [`HttpRequest::host`](crate::http::HttpRequest::host).
    pub(crate) fn normalize_domain(&mut self, default: &str) -> &str {
        let domain = self.domain.as_deref().unwrap_or(default).to_ascii_lowercase();
        self.domain.insert(domain)
    }
}
