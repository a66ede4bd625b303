//! Declarative scoped route registration on top of axum.
//!
//! Routes are described with compact `"name#action"` references instead of
//! direct handler imports, grouped under named scopes that share a URL prefix
//! and an inherited middleware stack, and resolved against a registry of
//! controller modules keyed by a filesystem-like naming convention.

pub mod config;
pub mod error;
pub mod handler;
pub mod registry;
pub mod resolve;
pub mod routing;

pub use config::RoutesConfig;
pub use error::RouteError;
pub use handler::{action, middleware, Action, Middleware};
pub use registry::{ControllerModule, ModuleResolver, StaticRegistry};
pub use resolve::reference::{ActionReference, ActionTarget};
pub use routing::{RouteOptions, Routes};
