//! Controller module registry.
//!
//! # Data Flow
//! ```text
//! Application wiring (at startup):
//!     StaticRegistry::new()
//!         .module("src/controllers/postsController", ControllerModule::new()
//!             .action("index", ...)
//!             .action("show", ...))
//!     → frozen, handed to Routes
//!
//! Route registration:
//!     convention-derived path (resolve::path)
//!     → ModuleResolver::resolve (lookup or ResolveError)
//!     → ControllerModule::get(action) (lookup or ActionNotFound)
//! ```
//!
//! # Design Decisions
//! - Explicit registry instead of filesystem-path dynamic loading: every
//!   handler is statically registered at wiring time, so a missing module is
//!   caught when the route is declared, not when it first fires
//! - `ModuleResolver` is a trait so alternative backends (plug-in tables,
//!   generated registries) can stand in for the in-memory map

pub mod module;
pub mod resolver;

pub use module::ControllerModule;
pub use resolver::{ModuleResolver, ResolveError, StaticRegistry};
