//! Registration-time error taxonomy.
//!
//! # Responsibilities
//! - Name the ways a route registration can fail
//! - Surface the resolver's own diagnostic for load failures
//!
//! # Design Decisions
//! - All variants are raised synchronously at registration time, before the
//!   route touches any router
//! - No retry path: a route table is either built completely or not at all

use thiserror::Error;

use crate::registry::ResolveError;

/// Error raised while registering a route.
#[derive(Debug, Error)]
pub enum RouteError {
    /// The `"name#action"` reference string was malformed.
    #[error("invalid action reference `{0}`: expected format `name#action`")]
    Format(String),

    /// The convention-derived module path did not resolve to a registered
    /// controller module.
    #[error("failed to load controller module `{path}`: {source}")]
    ModuleLoad {
        path: String,
        #[source]
        source: ResolveError,
    },

    /// The module resolved but does not expose the requested action.
    #[error("action `{action}` not found in controller module `{path}`")]
    ActionNotFound { path: String, action: String },

    /// The scope name cannot form a mount prefix.
    #[error("invalid scope name `{0}`: scope names must be non-empty")]
    InvalidScopeName(String),

    /// The method and path are already registered in the current scope.
    #[error("duplicate route: {method} `{path}` is already registered in the current scope")]
    DuplicateRoute { method: String, path: String },
}
