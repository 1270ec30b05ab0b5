//! Controllers reachable from `"Controller@method"` action references.
//!
//! Controllers are looked up by name in a [`ControllerRegistry`], which maps
//! each name to a zero-argument factory. A fresh instance is created for
//! every dispatch.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use log::debug;

use crate::routing::action::HandlerOutput;
use crate::routing::error::ActionError;

/// A type whose named, zero-argument methods can be routed to.
pub trait Controller {
    /// Call the method named `method`.
    ///
    /// Returns `None` when the controller has no such method.
    fn call(&mut self, method: &str) -> Option<HandlerOutput>;
}

type ControllerFactory = Arc<dyn Fn() -> Box<dyn Controller> + Send + Sync>;

/// Name to factory table for controllers.
#[derive(Clone, Default)]
pub struct ControllerRegistry {
    factories: HashMap<String, ControllerFactory>,
}

impl ControllerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a default-constructible controller type under `name`.
    pub fn register<C>(&mut self, name: impl Into<String>)
    where
        C: Controller + Default + 'static,
    {
        self.register_factory(name, || Box::new(C::default()) as Box<dyn Controller>);
    }

    /// Register an arbitrary zero-argument factory under `name`.
    ///
    /// A later registration under the same name replaces the earlier one.
    pub fn register_factory<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> Box<dyn Controller> + Send + Sync + 'static,
    {
        let name = name.into();
        debug!("Registering controller {name}");
        self.factories.insert(name, Arc::new(factory));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered controller names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Create a new instance of the controller registered as `name`.
    pub fn instantiate(&self, name: &str) -> Result<Box<dyn Controller>, ActionError> {
        self.factories
            .get(name)
            .map(|factory| factory())
            .ok_or_else(|| ActionError::UnknownController(name.to_string()))
    }

    /// Resolve a `"Controller@method"` reference and run it.
    pub fn invoke(&self, reference: &str) -> Result<HandlerOutput, ActionError> {
        let (controller, method) = parse_reference(reference)?;
        let mut instance = self.instantiate(controller)?;

        instance.call(method).ok_or_else(|| ActionError::MissingMethod {
            controller: controller.to_string(),
            method: method.to_string(),
        })
    }
}

impl fmt::Debug for ControllerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControllerRegistry")
            .field("controllers", &self.names())
            .finish()
    }
}

/// Split `"Controller@method"` into its two halves.
pub fn parse_reference(reference: &str) -> Result<(&str, &str), ActionError> {
    match reference.split_once('@') {
        Some((controller, method)) if !controller.is_empty() && !method.is_empty() => {
            Ok((controller, method))
        }
        _ => Err(ActionError::MalformedUses(reference.to_string())),
    }
}
