//! Route registration subsystem.
//!
//! # Data Flow
//! ```text
//! Route declaration ("posts#show", path, options)
//!     → builder.rs (normalize path, resolve action, assemble chain)
//!     → scope.rs (current frame: scope name, inherited middleware, router)
//!     → axum Router (route / nest)
//!
//! Scope declaration (name, callback):
//!     push frame (fresh router)
//!     → run callback (declarations land on the frame's router)
//!     → pop frame unconditionally
//!     → nest finished router under /name on the parent
//! ```
//!
//! # Design Decisions
//! - Registration is a single synchronous pass before serving; `&mut self`
//!   makes the single-writer precondition a compile-time fact
//! - The scope stack is an explicit value owned by the builder, not global
//!   state; save/restore is the stack discipline itself
//! - Middleware order is a hard invariant: scope middleware, then per-route
//!   middleware, then the action

pub mod builder;
pub(crate) mod scope;

pub use builder::{RouteOptions, Routes};
